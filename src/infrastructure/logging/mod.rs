//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - compact, pretty, or JSON formatting on stderr
//! - optional rolling log file via tracing-appender

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::{parse_log_level, LoggerImpl, LOG_FILE_NAME};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, trace, warn};
