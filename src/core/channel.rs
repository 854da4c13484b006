//! Output channel trait for emitted log lines

use super::{error::Result, log_entry::LogRecord, log_level::LogLevel};

/// Destination of formatted lines, keyed by level.
///
/// Mirrors a console with separate error, warn, info and debug
/// functions. Implementations use interior mutability because a channel
/// is shared by a logger and every scope derived from it.
pub trait OutputChannel: Send + Sync {
    fn write_error(&self, record: &LogRecord<'_>) -> Result<()>;
    fn write_warn(&self, record: &LogRecord<'_>) -> Result<()>;
    fn write_info(&self, record: &LogRecord<'_>) -> Result<()>;
    fn write_debug(&self, record: &LogRecord<'_>) -> Result<()>;

    /// Route a record to the function matching its level.
    fn write(&self, record: &LogRecord<'_>) -> Result<()> {
        match record.level {
            LogLevel::Error => self.write_error(record),
            LogLevel::Warn => self.write_warn(record),
            LogLevel::Info => self.write_info(record),
            LogLevel::Debug => self.write_debug(record),
        }
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
