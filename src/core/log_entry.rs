//! Log record handed to output channels

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::fmt;

/// One emitted line plus the extra arguments the caller passed along.
///
/// The arguments are forwarded untouched; rendering them is up to the
/// channel.
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub line: &'a str,
    pub args: &'a [&'a dyn fmt::Debug],
    pub timestamp: DateTime<Utc>,
}

impl<'a> LogRecord<'a> {
    pub fn new(level: LogLevel, line: &'a str, args: &'a [&'a dyn fmt::Debug]) -> Self {
        Self {
            level,
            line,
            args,
            timestamp: Utc::now(),
        }
    }

    /// `Debug` rendering of every extra argument, in order.
    pub fn rendered_args(&self) -> Vec<String> {
        self.args.iter().map(|arg| format!("{:?}", arg)).collect()
    }

    /// The line followed by the rendered arguments, space separated.
    pub fn to_text(&self) -> String {
        let mut out = String::from(self.line);
        for arg in self.args {
            out.push(' ');
            out.push_str(&format!("{:?}", arg));
        }
        out
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("level", &self.level)
            .field("line", &self.line)
            .field("args", &self.rendered_args())
            .field("timestamp", &self.timestamp)
            .finish()
    }
}
