// src/sinks/stream.rs
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, AtomicU8, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::formatters::{ConsoleFormatter, Formatter, StructuredFormatter};
use crate::record::{Level, LogRecord};
use crate::sinks::{report_failure, Sink, SinkKind};
use crate::utils::error::LoggingError;

/// File written to when the environment is not `dev`.
pub const DEFAULT_LOG_FILE: &str = "system_log.json";

/// A sink over any `Write` destination. One newline-terminated line is
/// written and flushed per record while holding the writer lock, so lines
/// from different threads never interleave within this sink.
pub struct StreamSink<W: Write + Send> {
    kind: SinkKind,
    writer: Mutex<W>,
    formatter: Box<dyn Formatter>,
    level: AtomicU8,
    failures: AtomicU64,
}

/// Standard output with the console formatter.
pub type ConsoleSink = StreamSink<io::Stdout>;

/// An append-mode file with the structured formatter.
pub type FileSink = StreamSink<File>;

impl<W: Write + Send> StreamSink<W> {
    pub fn new<F: Formatter + 'static>(writer: W, formatter: F) -> Self {
        Self::with_kind(SinkKind::Writer, writer, Box::new(formatter))
    }

    fn with_kind(kind: SinkKind, writer: W, formatter: Box<dyn Formatter>) -> Self {
        Self {
            kind,
            writer: Mutex::new(writer),
            formatter,
            level: AtomicU8::new(Level::Debug.as_u8()),
            failures: AtomicU64::new(0),
        }
    }
}

impl StreamSink<io::Stdout> {
    /// Console sink whose layout follows the capability probe.
    pub fn stdout() -> Self {
        Self::stdout_with(ConsoleFormatter::new())
    }

    pub fn stdout_with<F: Formatter + 'static>(formatter: F) -> Self {
        Self::with_kind(SinkKind::Console, io::stdout(), Box::new(formatter))
    }
}

impl StreamSink<File> {
    /// Opens `path` for appending, creating it if needed.
    ///
    /// The file is opened here rather than on first write, so a bad path or
    /// missing permission fails at setup time.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, LoggingError> {
        Self::open_with(path, StructuredFormatter::new())
    }

    pub fn open_with<P: AsRef<Path>, F: Formatter + 'static>(
        path: P,
        formatter: F,
    ) -> Result<Self, LoggingError> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| LoggingError::OpenDestination {
                path: path.clone(),
                source,
            })?;

        Ok(Self::with_kind(SinkKind::File(path), file, Box::new(formatter)))
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn kind(&self) -> SinkKind {
        self.kind.clone()
    }

    fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(Level::Debug)
    }

    fn set_level(&self, level: Level) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    fn emit(&self, record: &LogRecord) -> Result<(), LoggingError> {
        let line = self.formatter.format(record)?;

        // A poisoned writer is still usable for line output.
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(writer, "{}", line)?;
        writer.flush()?;
        Ok(())
    }

    fn failed_writes(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    fn handle_error(&self, record: &LogRecord, error: &LoggingError) {
        self.failures.fetch_add(1, Ordering::Relaxed);
        report_failure(&self.kind, record, error);
    }
}
