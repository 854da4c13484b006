//! Main logger implementation

use super::{
    channel::OutputChannel,
    config::{LoggerConfig, LoggerConfigPatch},
    error::Result,
    log_entry::LogRecord,
    log_level::LogLevel,
    metrics::LoggerMetrics,
};
use crate::channels::ConsoleChannel;
use parking_lot::RwLock;
use std::any::Any;
use std::fmt;
use std::sync::{Arc, OnceLock};

static ROOT: OnceLock<Logger> = OnceLock::new();

/// Text carried by a caught panic payload
pub(crate) fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Level-filtered logger with a prefix and named child scopes.
///
/// Every instance owns its configuration. [`Logger::scope`] copies it
/// into a new instance, so a child never sees later changes made to its
/// parent and the parent never sees changes made to the child. The
/// output channel is the only thing a scope shares with its parent.
pub struct Logger {
    config: RwLock<LoggerConfig>,
    channel: Arc<dyn OutputChannel>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Isolated logger with the default configuration, writing to the console
    #[must_use]
    pub fn new() -> Self {
        Self::with_channel(Arc::new(ConsoleChannel::new()))
    }

    #[must_use]
    pub fn with_channel(channel: Arc<dyn OutputChannel>) -> Self {
        Self::from_parts(LoggerConfig::default(), channel)
    }

    fn from_parts(config: LoggerConfig, channel: Arc<dyn OutputChannel>) -> Self {
        Self {
            config: RwLock::new(config),
            channel,
            metrics: LoggerMetrics::new(),
        }
    }

    /// The process-wide root logger.
    ///
    /// Created on first access and kept for the rest of the process; every
    /// call returns the same reference.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_scoped_logger::Logger;
    ///
    /// let a = Logger::instance();
    /// let b = Logger::instance();
    /// assert!(std::ptr::eq(a, b));
    /// ```
    pub fn instance() -> &'static Logger {
        ROOT.get_or_init(Logger::new)
    }

    /// Merge `patch` into this instance's configuration.
    ///
    /// Takes effect for the next call on this instance only; scopes that
    /// were already derived keep their own copy.
    pub fn configure(&self, patch: LoggerConfigPatch) {
        self.config.write().merge(patch);
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.config.read().clone()
    }

    /// Whether a call at `level` would reach the output channel.
    #[inline]
    pub fn is_enabled_for(&self, level: LogLevel) -> bool {
        self.config.read().permits(level)
    }

    /// Derive a child logger whose prefix is `"{prefix}:{name}"`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_scoped_logger::{Logger, LoggerConfigPatch};
    ///
    /// let root = Logger::new();
    /// root.configure(LoggerConfigPatch::new().prefix("[APP]"));
    ///
    /// let db = root.scope("db").scope("pool");
    /// assert_eq!(db.config().prefix, "[APP]:db:pool");
    /// ```
    #[must_use]
    pub fn scope(&self, name: &str) -> Logger {
        let config = self.config.read().scoped(name);
        Self::from_parts(config, Arc::clone(&self.channel))
    }

    /// Log `message` at `level`, forwarding `args` to the channel untouched.
    ///
    /// Never fails: a disabled logger or a level above the threshold is a
    /// silent no-op, and channel errors are counted in [`Logger::metrics`].
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>, args: &[&dyn fmt::Debug]) {
        let line = {
            let config = self.config.read();
            if !config.enabled {
                self.metrics.record_suppressed();
                return;
            }
            if !config.level.allows(level) {
                self.metrics.record_filtered();
                return;
            }
            config.format_line(level, message.as_ref())
        };

        let record = LogRecord::new(level, &line, args);
        self.dispatch(&record);
    }

    /// Hand a record to the channel, isolating the caller from failures
    fn dispatch(&self, record: &LogRecord<'_>) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            self.channel.write(record)
        }));

        match result {
            Ok(Ok(())) => {
                self.metrics.record_emitted();
            }
            Ok(Err(e)) => {
                self.metrics.record_failed();
                eprintln!(
                    "[LOGGER ERROR] Channel '{}' failed: {}",
                    self.channel.name(),
                    e
                );
            }
            Err(panic_info) => {
                self.metrics.record_failed();
                eprintln!(
                    "[LOGGER CRITICAL] Channel '{}' panicked: {}",
                    self.channel.name(),
                    panic_message(panic_info.as_ref())
                );
            }
        }
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message, &[]);
    }

    #[inline]
    pub fn warn(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warn, message, &[]);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Info, message, &[]);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message, &[]);
    }

    #[inline]
    pub fn error_with(&self, message: impl AsRef<str>, args: &[&dyn fmt::Debug]) {
        self.log(LogLevel::Error, message, args);
    }

    #[inline]
    pub fn warn_with(&self, message: impl AsRef<str>, args: &[&dyn fmt::Debug]) {
        self.log(LogLevel::Warn, message, args);
    }

    #[inline]
    pub fn info_with(&self, message: impl AsRef<str>, args: &[&dyn fmt::Debug]) {
        self.log(LogLevel::Info, message, args);
    }

    #[inline]
    pub fn debug_with(&self, message: impl AsRef<str>, args: &[&dyn fmt::Debug]) {
        self.log(LogLevel::Debug, message, args);
    }

    /// Counters for this instance only
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.channel.flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*self.config.read())
            .field("channel", &self.channel.name())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_scoped_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .level(LogLevel::Info)
///     .prefix("[API]")
///     .channel(Arc::new(MemoryChannel::new()))
///     .build();
///
/// assert!(!logger.is_enabled_for(LogLevel::Debug));
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    channel: Option<Arc<dyn OutputChannel>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            channel: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.config.enabled = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: LogLevel) -> Self {
        self.config.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.prefix = prefix.into();
        self
    }

    /// Apply a partial configuration on top of what was set so far
    #[must_use = "builder methods return a new value"]
    pub fn patch(mut self, patch: LoggerConfigPatch) -> Self {
        self.config.merge(patch);
        self
    }

    /// Set the output channel. Defaults to [`ConsoleChannel`].
    #[must_use = "builder methods return a new value"]
    pub fn channel(mut self, channel: Arc<dyn OutputChannel>) -> Self {
        self.channel = Some(channel);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let channel = self
            .channel
            .unwrap_or_else(|| Arc::new(ConsoleChannel::new()));
        Logger::from_parts(self.config, channel)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
