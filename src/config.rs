//! Configuration for the speaker command.
//!
//! Loads an optional YAML file from standard locations; a missing or
//! malformed file degrades to built-in defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fallback language when --lang is not given.
    pub default_lang: String,
    /// Base URL of the translate TTS endpoint.
    pub tts_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_lang: "ja".into(),
            tts_endpoint: "https://translate.google.com".into(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// Searches standard locations if no path is provided:
    /// 1. ./speaker.yaml
    /// 2. ~/.config/speaker/config.yaml
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = path.map(PathBuf::from).or_else(|| {
            let candidates = [
                std::env::current_dir().ok().map(|d| d.join("speaker.yaml")),
                dirs::home_dir().map(|h| h.join(".config/speaker/config.yaml")),
            ];
            candidates.into_iter().flatten().find(|p| p.exists())
        });

        let Some(config_path) = resolved else {
            info!("No config file found, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match serde_yml::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {e}, using defaults", config_path.display());
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, using defaults", config_path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "default_lang: en\n").unwrap();

        let config = Config::load(Some(&path));
        assert_eq!(config.default_lang, "en");
        assert_eq!(config.tts_endpoint, Config::default().tts_endpoint);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(&dir.path().join("nope.yaml")));
        assert_eq!(config.default_lang, "ja");
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "default_lang: [oops\n").unwrap();

        let config = Config::load(Some(&path));
        assert_eq!(config.default_lang, "ja");
    }
}
