//! Console channel implementation

use crate::core::{LogRecord, OutputChannel, Result};
#[cfg(feature = "console")]
use colored::Colorize;
use std::io::Write;

/// Writes error and warn lines to stderr, info and debug lines to stdout.
///
/// Lines are printed byte for byte as the logger formatted them, followed
/// by the `Debug` rendering of any extra arguments.
pub struct ConsoleChannel {
    use_colors: bool,
}

impl ConsoleChannel {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    /// Colour the `[LEVEL]` tag. Needs the `console` feature; ignored otherwise.
    ///
    /// ```
    /// use rust_scoped_logger::channels::ConsoleChannel;
    ///
    /// let channel = ConsoleChannel::with_colors(true);
    /// ```
    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn render(&self, record: &LogRecord<'_>) -> String {
        let text = record.to_text();
        if self.use_colors {
            return Self::colorize(record, text);
        }
        text
    }

    #[cfg(feature = "console")]
    fn colorize(record: &LogRecord<'_>, text: String) -> String {
        let tag = format!("[{}]", record.level.to_str());
        let painted = tag.color(record.level.color_code()).to_string();
        text.replacen(&tag, &painted, 1)
    }

    #[cfg(not(feature = "console"))]
    fn colorize(_record: &LogRecord<'_>, text: String) -> String {
        text
    }

    fn to_stderr(&self, record: &LogRecord<'_>) -> Result<()> {
        let mut err = std::io::stderr().lock();
        writeln!(err, "{}", self.render(record))?;
        Ok(())
    }

    fn to_stdout(&self, record: &LogRecord<'_>) -> Result<()> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", self.render(record))?;
        Ok(())
    }
}

impl Default for ConsoleChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputChannel for ConsoleChannel {
    fn write_error(&self, record: &LogRecord<'_>) -> Result<()> {
        self.to_stderr(record)
    }

    fn write_warn(&self, record: &LogRecord<'_>) -> Result<()> {
        self.to_stderr(record)
    }

    fn write_info(&self, record: &LogRecord<'_>) -> Result<()> {
        self.to_stdout(record)
    }

    fn write_debug(&self, record: &LogRecord<'_>) -> Result<()> {
        self.to_stdout(record)
    }

    fn flush(&self) -> Result<()> {
        // Flush both stdout and stderr since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
