//! Logging setup for bulk action binaries.
//!
//! Call [`init_logger`] once at startup; everything else logs through `tracing` macros.
mod config;
pub use config::LoggerConfig;

mod error;
pub use error::{LoggerError, LoggerResult};

mod format;
pub use format::LoggerFormat;

mod init;
pub use init::init_logger;

mod level;
pub use level::LoggerLevel;

mod timer;
pub use timer::{LoggerTimeZone, Rfc3339Timer, init_local_offset};
