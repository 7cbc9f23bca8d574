//! Structured logging infrastructure for the site

use crate::error::{FabricError, FabricResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Output format of the log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, colored output for development
    #[default]
    Pretty,
    /// Single-line compact output
    Compact,
    /// Default `tracing-subscriber` formatting
    Plain,
}

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "`fabric_router=trace`")
    pub level: String,
    /// Line format
    pub format: LogFormat,
    /// Optional file path for log output
    pub file_path: Option<PathBuf>,
    /// Whether to include span open/close events in the output
    pub include_spans: bool,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            file_path: None,
            include_spans: false,
            include_targets: true,
        }
    }
}

/// Build the env filter, falling back to `info` when the directive is invalid
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the tracing subscriber with the given configuration
pub fn init_logging(config: LoggingConfig) -> FabricResult<()> {
    let span_events = if config.include_spans {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let registry = tracing_subscriber::registry().with(env_filter(&config.level));

    let result = if let Some(path) = config.file_path {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        // Files never get ANSI colors regardless of format
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_target(config.include_targets)
            .with_ansi(false)
            .with_writer(Arc::new(file));
        match config.format {
            LogFormat::Compact => registry.with(layer.compact()).try_init(),
            LogFormat::Pretty | LogFormat::Plain => registry.with(layer).try_init(),
        }
    } else {
        let layer = fmt::layer()
            .with_span_events(span_events)
            .with_target(config.include_targets);
        match config.format {
            LogFormat::Pretty => registry.with(layer.pretty()).try_init(),
            LogFormat::Compact => registry.with(layer.compact()).try_init(),
            LogFormat::Plain => registry.with(layer).try_init(),
        }
    };

    result.map_err(|e| FabricError::with_source("failed to install tracing subscriber", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.file_path.is_none());
        assert!(!config.include_spans);
        assert!(config.include_targets);
    }

    #[test]
    fn test_invalid_filter_falls_back() {
        // Must not panic on a malformed directive
        let _ = env_filter("fabric_router=notalevel[");
    }

    #[test]
    fn test_log_format_serde() {
        let format: LogFormat = serde_json::from_str("\"compact\"").unwrap();
        assert_eq!(format, LogFormat::Compact);
    }
}
