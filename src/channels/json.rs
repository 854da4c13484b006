//! JSON lines channel for structured log collection

use crate::core::{LogLevel, LogRecord, OutputChannel, Result};
use parking_lot::Mutex;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Serialize)]
struct JsonLine<'a> {
    timestamp: String,
    level: LogLevel,
    line: &'a str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    args: Vec<String>,
}

/// Writes each record as a single-line JSON object (JSONL format)
///
/// Compatible with log aggregation tools like ELK, Loki, etc.
pub struct JsonChannel<W: Write + Send> {
    writer: Mutex<W>,
}

impl JsonChannel<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> JsonChannel<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn append(&self, record: &LogRecord<'_>) -> Result<()> {
        let line = JsonLine {
            timestamp: record.timestamp.to_rfc3339(),
            level: record.level,
            line: record.line,
            args: record.rendered_args(),
        };
        let json = serde_json::to_string(&line)?;

        let mut writer = self.writer.lock();
        writeln!(writer, "{}", json)?;
        Ok(())
    }
}

impl<W: Write + Send> OutputChannel for JsonChannel<W> {
    fn write_error(&self, record: &LogRecord<'_>) -> Result<()> {
        self.append(record)
    }

    fn write_warn(&self, record: &LogRecord<'_>) -> Result<()> {
        self.append(record)
    }

    fn write_info(&self, record: &LogRecord<'_>) -> Result<()> {
        self.append(record)
    }

    fn write_debug(&self, record: &LogRecord<'_>) -> Result<()> {
        self.append(record)
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
