// src/sinks/mod.rs
pub mod stream;

use std::fmt;
use std::io::Write;
use std::path::PathBuf;

use crate::record::{Level, LogRecord};
use crate::utils::error::LoggingError;

pub use stream::{ConsoleSink, FileSink, StreamSink};

/// Which destination a sink writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    File(PathBuf),
    /// Any other `Write` destination.
    Writer,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Console => write!(f, "console"),
            SinkKind::File(path) => write!(f, "file {}", path.display()),
            SinkKind::Writer => write!(f, "writer"),
        }
    }
}

/// A destination plus a bound formatter.
pub trait Sink: Send + Sync {
    fn kind(&self) -> SinkKind;

    /// Records below this level are dropped by `handle`.
    fn level(&self) -> Level;

    fn set_level(&self, level: Level);

    /// Formats and writes one record. Errors are returned, not reported.
    fn emit(&self, record: &LogRecord) -> Result<(), LoggingError>;

    /// Number of records lost to formatting or write failures.
    fn failed_writes(&self) -> u64;

    /// Called when `emit` fails. Must not fail itself.
    fn handle_error(&self, record: &LogRecord, error: &LoggingError);

    /// Entry point used by the registry: level check, emit, and containment
    /// of any failure.
    fn handle(&self, record: &LogRecord) {
        if record.level < self.level() {
            return;
        }
        if let Err(e) = self.emit(record) {
            self.handle_error(record, &e);
        }
    }
}

/// Writes a failure report to stderr.
///
/// Goes straight to the stream so a broken sink can never re-enter the
/// registry. The report itself is best-effort.
pub(crate) fn report_failure(kind: &SinkKind, record: &LogRecord, error: &LoggingError) {
    let mut stderr = std::io::stderr().lock();
    let _ = writeln!(stderr, "--- Logging error ---");
    let _ = writeln!(stderr, "Sink: {}", kind);
    let _ = writeln!(stderr, "Error: {}", error);
    let _ = writeln!(
        stderr,
        "Record: level={} name={} message={:?}",
        record.level, record.name, record.message
    );
}
