//! Logging setup for the display engine.
//!
//! Built on the tracing ecosystem. Stderr is the only sink: the TUI owns
//! stdout, and anything worth keeping should be captured by redirecting
//! stderr.
//!
//! # Environment Variables
//!
//! - `RILL_LOG`: filter directive (like `RUST_LOG`), e.g. `rill=debug`
//! - `RILL_LOG_FORMAT`: stderr format: `pretty`, `json`, `compact`

use std::env;
use std::io;
use std::str::FromStr;

use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig as ConfigLoggingConfig;
use crate::error::{Error, Result};

/// Log output format for stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty, human-readable output with colors (default for TTY)
    #[default]
    Pretty,
    /// JSON output (one line per event)
    Json,
    /// Compact, single-line output
    Compact,
}

impl LogFormat {
    pub const VALUES: &[LogFormat] = &[LogFormat::Pretty, LogFormat::Json, LogFormat::Compact];

    /// Parse a log format from a string
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        LogFormat::parse_str(s).ok_or_else(|| Error::Config(format!("invalid log format: {}", s)))
    }
}

/// Resolved logging settings, bridging the config file and the environment
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive for stderr output
    pub level: String,
    /// Stderr format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string(), format: LogFormat::default() }
    }
}

impl From<ConfigLoggingConfig> for LoggingConfig {
    fn from(config: ConfigLoggingConfig) -> Self {
        let format = LogFormat::parse_str(&config.format).unwrap_or_default();
        Self { level: config.level, format }
    }
}

impl LoggingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Build an EnvFilter from this config and environment variables
    fn build_env_filter(&self) -> EnvFilter {
        let filter = env::var("RILL_LOG")
            .ok()
            .or_else(|| env::var("RUST_LOG").ok())
            .unwrap_or_else(|| self.level.clone());

        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter))
    }

    /// Determine the stderr format, letting the environment win
    fn detect_format(&self) -> LogFormat {
        if let Ok(fmt_str) = env::var("RILL_LOG_FORMAT")
            && let Some(fmt) = LogFormat::parse_str(&fmt_str)
        {
            return fmt;
        }

        if atty::is(atty::Stream::Stderr) { self.format } else { LogFormat::Compact }
    }
}

/// Initialize the global tracing subscriber.
///
/// Filter comes from `RILL_LOG`/`RUST_LOG` or the config level; format from
/// `RILL_LOG_FORMAT` or the config, degraded to compact when stderr is not a
/// TTY. Returns an error if a subscriber is already installed.
pub fn init_logging(config: Option<LoggingConfig>) -> Result<()> {
    let config = config.unwrap_or_default();
    let env_filter = config.build_env_filter();
    let format = config.detect_format();

    let registry = Registry::default().with(env_filter);

    match format {
        LogFormat::Pretty => {
            registry
                .with(fmt::layer().pretty().with_writer(io::stderr).with_ansi(true))
                .init();
        }
        LogFormat::Json => {
            registry.with(fmt::layer().json().with_writer(io::stderr)).init();
        }
        LogFormat::Compact => {
            registry.with(fmt::layer().compact().with_writer(io::stderr)).init();
        }
    }

    Ok(())
}
