//! Core logger types and traits

pub mod channel;
pub mod config;
pub mod error;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;

pub use channel::OutputChannel;
pub use config::{LoggerConfig, LoggerConfigPatch};
pub use error::{CoreError, Result};
pub use log_entry::LogRecord;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
