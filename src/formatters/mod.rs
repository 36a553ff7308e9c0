// src/formatters/mod.rs
pub mod console;
pub mod structured;
pub mod theme;

use crate::record::LogRecord;
use crate::utils::error::LoggingError;

/// Renders one record to one line of text, without the trailing newline.
///
/// A formatter is a pure function of the record; errors flow back to the
/// owning sink, which reports them instead of failing the log call.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &LogRecord) -> Result<String, LoggingError>;
}

// Re-export the two formatting strategies
pub use console::ConsoleFormatter;
pub use structured::StructuredFormatter;
pub use theme::{Style, Theme};
