// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the logging layer.
///
/// `OpenDestination` is a setup-time failure and propagates out of
/// `configure`. The other variants only ever reach a sink's error-reporting
/// path; the call site that logged the record never sees them.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to open log destination {}: {source}", path.display())]
    OpenDestination {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error), // Structured records that fail to encode

    #[error("Time format error: {0}")]
    TimeFormat(#[from] std::fmt::Error), // Invalid strftime pattern for the `time` key

    #[error("I/O error: {0}")]
    Write(#[from] std::io::Error), // Failed writes to stdout or the log file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_destination_names_the_path() {
        let err = LoggingError::OpenDestination {
            path: PathBuf::from("/missing/dir/system_log.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let text = err.to_string();
        assert!(text.contains("/missing/dir/system_log.json"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn io_errors_convert_to_write() {
        let err: LoggingError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe").into();
        assert!(matches!(err, LoggingError::Write(_)));
    }
}
