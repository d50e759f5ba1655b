use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Tunables for the display engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Reveal tick period in milliseconds
    pub reveal_tick_ms: u64,
    /// Rows from the bottom still counted as "near bottom"
    pub follow_threshold: usize,
    /// Upper bound on retained transcript messages
    pub max_messages: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { reveal_tick_ms: 30, follow_threshold: 20, max_messages: 1000 }
    }
}

/// Logging section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, same grammar as `RUST_LOG`
    pub level: String,
    /// Stderr format: `pretty`, `compact`, or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string(), format: "pretty".to_string() }
    }
}

/// Top-level configuration, loaded from `rill.toml`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load from a file when one is given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.display.reveal_tick_ms, 30);
        assert_eq!(config.display.follow_threshold, 20);
        assert_eq!(config.display.max_messages, 1000);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nreveal_tick_ms = 16\n\n[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.display.reveal_tick_ms, 16);
        // unspecified keys fall back to defaults
        assert_eq!(config.display.follow_threshold, 20);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("/nonexistent/rill.toml").is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "display = \"not a table\"").unwrap();
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default() {
        let config = Config::load_or_default(None).unwrap();
        assert_eq!(config, Config::default());
    }
}
