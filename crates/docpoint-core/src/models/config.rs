//! Configuration structures for the extraction service.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::field::ExtractionMode;
use crate::error::{DocpointError, Result};

/// Main configuration for docpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocpointConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Organization recognizer configuration.
    pub recognizer: RecognizerConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,

    /// Bind port.
    pub port: u16,

    /// Maximum accepted request body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_body_bytes: 25 * 1024 * 1024,
        }
    }
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Mode used by the CLI when `--mode` is not given.
    pub default_mode: ExtractionMode,

    /// Maximum number of characters handed to the organization recognizer.
    pub recognizer_char_limit: usize,

    /// Characters kept from a best sentence that has no labeled value.
    pub snippet_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            default_mode: ExtractionMode::Pattern,
            recognizer_char_limit: 100_000,
            snippet_chars: 200,
        }
    }
}

/// Organization recognizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// Load the recognizer at startup.
    pub enabled: bool,

    /// Optional file with extra organization suffixes, one per line.
    pub lexicon: Option<PathBuf>,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            lexicon: None,
        }
    }
}

impl DocpointConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| DocpointError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| DocpointError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: DocpointConfig =
            serde_json::from_str(r#"{"server": {"port": 9100}}"#).unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.extraction.recognizer_char_limit, 100_000);
        assert!(config.recognizer.enabled);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = DocpointConfig::default();
        config.extraction.default_mode = ExtractionMode::Proximity;
        config.save(&path).unwrap();

        let loaded = DocpointConfig::from_file(&path).unwrap();
        assert_eq!(loaded.extraction.default_mode, ExtractionMode::Proximity);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = DocpointConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, DocpointError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DocpointConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DocpointError::Io(_)));
    }
}
