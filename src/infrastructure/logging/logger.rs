use std::io;
use std::str::FromStr;

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::models::LoggingConfig;

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => anyhow::bail!("Invalid log format: {s}"),
        }
    }
}

/// Logger implementation using tracing
#[derive(Debug)]
pub struct LoggerImpl;

impl LoggerImpl {
    /// Install the global subscriber for the given configuration.
    ///
    /// `RUST_LOG` directives take precedence over the configured level.
    /// Fails if the level or format is invalid, or if a global subscriber
    /// is already installed.
    pub fn init(config: &LoggingConfig) -> Result<()> {
        let level = parse_log_level(&config.level)?;
        let format: LogFormat = config.format.parse()?;

        let env_filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();

        let layer = match format {
            LogFormat::Json => tracing_subscriber::fmt::layer()
                .json()
                .with_writer(io::stderr)
                .with_current_span(true)
                .with_target(true)
                .with_filter(env_filter)
                .boxed(),
            LogFormat::Pretty => tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_filter(env_filter)
                .boxed(),
        };

        tracing_subscriber::registry().with(layer).try_init()?;

        tracing::debug!(level = %config.level, format = ?format, "logger initialized");

        Ok(())
    }
}

/// Parse log level string to Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert!(matches!(parse_log_level("trace"), Ok(Level::TRACE)));
        assert!(matches!(parse_log_level("debug"), Ok(Level::DEBUG)));
        assert!(matches!(parse_log_level("info"), Ok(Level::INFO)));
        assert!(matches!(parse_log_level("warn"), Ok(Level::WARN)));
        assert!(matches!(parse_log_level("error"), Ok(Level::ERROR)));
        assert!(matches!(parse_log_level("TRACE"), Ok(Level::TRACE)));
        assert!(parse_log_level("invalid").is_err());
    }

    #[test]
    fn test_parse_log_format() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("Pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_logger_init_rejects_bad_level() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            format: "pretty".to_string(),
        };
        assert!(LoggerImpl::init(&config).is_err());
    }

    #[test]
    fn test_logger_second_init_fails() {
        let config = LoggingConfig {
            level: "info".to_string(),
            format: "pretty".to_string(),
        };

        // Only the first global subscriber wins.
        let _ = LoggerImpl::init(&config);
        assert!(LoggerImpl::init(&config).is_err());
    }
}
