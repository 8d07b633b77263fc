//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON log formatting
//! - `RUST_LOG` directives on top of the configured level
//! - Output on stderr, keeping stdout for rendered tables

pub mod logger;

pub use logger::{parse_log_level, LogFormat, LoggerImpl};
