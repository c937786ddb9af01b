//! Language codes accepted by the speech backend.

/// Codes the translate TTS endpoint can speak.
pub const SUPPORTED: &[&str] = &[
    "en", "en-UK", "en-AU", "ja", "de", "es", "ru", "ar", "bn", "cs", "da",
    "nl", "fi", "el", "hi", "hu", "id", "km", "la", "it", "no", "pl", "sk",
    "sv", "th", "tr", "uk", "vi", "af", "bg", "ca", "cy", "et", "fr", "gu",
    "is", "jv", "kn", "ko", "lv", "ml", "mr", "ms", "ne", "pt", "ro", "si",
    "sr", "su", "ta", "te", "tl", "ur", "zh", "sw", "sq", "my", "mk", "hy",
    "hr", "eo", "bs",
];

pub fn is_supported(code: &str) -> bool {
    SUPPORTED.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_codes_are_supported() {
        assert!(is_supported("ja"));
        assert!(is_supported("en"));
        assert!(is_supported("ru"));
        assert!(is_supported("en-UK"));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(!is_supported("xx"));
        assert!(!is_supported(""));
        assert!(!is_supported("EN"));
    }
}
