//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. The message is
//! only formatted when the logger would actually emit it.
//!
//! # Examples
//!
//! ```
//! use rust_scoped_logger::prelude::*;
//! use rust_scoped_logger::info;
//!
//! let logger = Logger::new().scope("server");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_scoped_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_scoped_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger = &$logger;
        let level = $level;
        if logger.is_enabled_for(level) {
            logger.log(level, format!($($arg)+), &[]);
        }
    }};
}

/// Log an error-level message.
///
/// ```
/// # use rust_scoped_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_scoped_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// ```
/// # use rust_scoped_logger::prelude::*;
/// # let logger = Logger::new();
/// use rust_scoped_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::channels::MemoryChannel;
    use crate::core::{LogLevel, Logger, LoggerConfigPatch};
    use std::sync::Arc;

    #[test]
    fn test_macros_format_and_route() {
        let channel = Arc::new(MemoryChannel::new());
        let logger = Logger::with_channel(channel.clone());

        error!(logger, "Code: {}", 500);
        warn!(logger, "Retry {} of {}", 1, 3);
        info!(logger, "Items: {}", 100);
        debug!(logger, "Count: {}", 5);
        log!(logger, LogLevel::Info, "plain");

        let lines: Vec<String> = channel.lines().into_iter().map(|l| l.line).collect();
        assert_eq!(
            lines,
            vec![
                " [ERROR] Code: 500",
                " [WARN] Retry 1 of 3",
                " [INFO] Items: 100",
                " [DEBUG] Count: 5",
                " [INFO] plain",
            ]
        );
    }

    #[test]
    fn test_macros_skip_formatting_when_filtered() {
        struct Loud;
        impl std::fmt::Display for Loud {
            fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("formatted a filtered message")
            }
        }

        let channel = Arc::new(MemoryChannel::new());
        let logger = Logger::with_channel(channel.clone());
        logger.configure(LoggerConfigPatch::new().level(LogLevel::Error));

        debug!(logger, "{}", Loud);
        assert!(channel.is_empty());
        // The macro checks first, so the logger never saw the call
        assert_eq!(logger.metrics().filtered(), 0);
    }
}
