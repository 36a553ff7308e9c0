// src/formatters/structured.rs
use serde::Serialize;
use std::fmt::Write;

use crate::formatters::Formatter;
use crate::record::LogRecord;
use crate::utils::error::LoggingError;

/// Default timestamp pattern: local time, millisecond precision, no zone.
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// The persisted line. Consumers look keys up by name, so field order is
/// not part of the format.
#[derive(Debug, Serialize)]
struct StructuredEntry<'a> {
    time: String,
    level: &'a str,
    name: &'a str,
    message: &'a str,
}

/// Encodes each record as a single-line JSON object with the keys
/// `time`, `level`, `name` and `message`.
#[derive(Debug, Clone)]
pub struct StructuredFormatter {
    time_format: String,
}

impl StructuredFormatter {
    pub fn new() -> Self {
        Self::with_time_format(DEFAULT_TIME_FORMAT)
    }

    /// Uses a custom `chrono` strftime pattern for the `time` key.
    pub fn with_time_format(time_format: impl Into<String>) -> Self {
        Self {
            time_format: time_format.into(),
        }
    }
}

impl Default for StructuredFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for StructuredFormatter {
    fn format(&self, record: &LogRecord) -> Result<String, LoggingError> {
        // An invalid pattern surfaces as `fmt::Error` here, not a panic.
        let mut time = String::new();
        write!(time, "{}", record.time.format(&self.time_format))?;

        let entry = StructuredEntry {
            time,
            level: record.level.as_str(),
            name: &record.name,
            message: &record.message,
        };
        // serde_json escapes embedded newlines, so the output stays on one line.
        Ok(serde_json::to_string(&entry)?)
    }
}
