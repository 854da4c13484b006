//! In-memory channel that keeps every line it receives

use crate::core::{LogLevel, LogRecord, OutputChannel, Result};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// A line captured by [`MemoryChannel`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedLine {
    pub level: LogLevel,
    pub line: String,
    /// `Debug` rendering of each extra argument
    pub args: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// Records lines instead of printing them.
///
/// Handy for asserting what a logger wrote, and for hosts that render log
/// output themselves.
///
/// # Example
///
/// ```
/// use rust_scoped_logger::prelude::*;
/// use std::sync::Arc;
///
/// let channel = Arc::new(MemoryChannel::new());
/// let logger = Logger::with_channel(channel.clone());
///
/// logger.scope("net").warn("slow");
/// assert_eq!(channel.lines()[0].line, ":net [WARN] slow");
/// ```
#[derive(Debug, Default)]
pub struct MemoryChannel {
    lines: Mutex<Vec<CapturedLine>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, record: &LogRecord<'_>) -> Result<()> {
        self.lines.lock().push(CapturedLine {
            level: record.level,
            line: record.line.to_string(),
            args: record.rendered_args(),
            timestamp: record.timestamp,
        });
        Ok(())
    }

    /// Copy of every captured line, oldest first
    pub fn lines(&self) -> Vec<CapturedLine> {
        self.lines.lock().clone()
    }

    /// Captured lines that went to the `level` function
    pub fn lines_at(&self, level: LogLevel) -> Vec<CapturedLine> {
        self.lines
            .lock()
            .iter()
            .filter(|line| line.level == level)
            .cloned()
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.line.contains(needle))
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

impl OutputChannel for MemoryChannel {
    fn write_error(&self, record: &LogRecord<'_>) -> Result<()> {
        self.push(record)
    }

    fn write_warn(&self, record: &LogRecord<'_>) -> Result<()> {
        self.push(record)
    }

    fn write_info(&self, record: &LogRecord<'_>) -> Result<()> {
        self.push(record)
    }

    fn write_debug(&self, record: &LogRecord<'_>) -> Result<()> {
        self.push(record)
    }

    fn name(&self) -> &str {
        "memory"
    }
}
