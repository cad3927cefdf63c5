//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty console output on stderr
//! - Rolling JSON log files
//! - Count-based retention driven by `logs_num`

pub mod config;
pub mod logger;
pub mod retention;

pub use config::{LogConfig, LogFormat, RotationPolicy};
pub use logger::{LoggerImpl, LOG_FILE_PREFIX, LOG_FILE_SUFFIX};
pub use retention::prune_log_files;

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, instrument, trace, warn};
