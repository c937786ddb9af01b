//! Speech synthesis via the translate TTS endpoint.
//!
//! The endpoint turns text plus a language code into an MP3 stream; this
//! adapter fetches it and writes the file. Language validation is the
//! caller's job, the adapter trusts any code it receives.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("tts request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("tts endpoint returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("tts endpoint returned no audio")]
    EmptyBody,

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub struct Synthesizer {
    client: Client,
    endpoint: String,
}

impl Synthesizer {
    pub fn new(endpoint: &str) -> Result<Self, SynthesisError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch speech for `text` in `lang` and write `<dir>/<base_name>.mp3`.
    pub async fn synthesize(
        &self,
        text: &str,
        lang: &str,
        dir: &Path,
        base_name: &str,
    ) -> Result<PathBuf, SynthesisError> {
        let url = format!("{}/translate_tts", self.endpoint);
        let textlen = text.chars().count().to_string();

        let resp = self
            .client
            .get(&url)
            .query(&[
                ("ie", "UTF-8"),
                ("total", "1"),
                ("idx", "0"),
                ("textlen", textlen.as_str()),
                ("client", "tw-ob"),
                ("tl", lang),
                ("q", text),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(SynthesisError::Status(resp.status()));
        }

        let audio = resp.bytes().await?;
        if audio.is_empty() {
            return Err(SynthesisError::EmptyBody);
        }

        let path = dir.join(format!("{base_name}.mp3"));
        std::fs::write(&path, &audio)?;
        debug!("wrote {} bytes of audio to {}", audio.len(), path.display());

        Ok(path)
    }
}

/// Deterministic temp-file base name derived from the message content, so
/// repeated identical requests reuse the same path.
pub fn content_name(text: &str) -> String {
    format!("{:x}", Sha256::digest(text.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_name_is_stable() {
        assert_eq!(content_name("おはよう"), content_name("おはよう"));
        assert_ne!(content_name("a"), content_name("b"));
    }

    #[test]
    fn content_name_is_a_hex_digest() {
        let name = content_name("hello");
        assert_eq!(name.len(), 64);
        assert!(name.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn endpoint_trailing_slash_is_normalized() {
        let synth = Synthesizer::new("https://example.com/").unwrap();
        assert_eq!(synth.endpoint, "https://example.com");
    }
}
