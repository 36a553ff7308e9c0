// src/record.rs
use chrono::{DateTime, Local};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Record severity, ordered from least to most severe.
///
/// Numeric values follow the usual hierarchical-logger scale so that a
/// level can live in an atomic next to the `0` "unset" marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Debug = 10,
    Info = 20,
    Warning = 30,
    Error = 40,
    Critical = 50,
}

impl Level {
    /// Upper-case name used in every rendered form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }

    pub(crate) fn as_u8(self) -> u8 {
        self as u8
    }

    /// Inverse of `as_u8`; `None` for the unset marker or any foreign value.
    pub(crate) fn from_u8(value: u8) -> Option<Self> {
        match value {
            10 => Some(Level::Debug),
            20 => Some(Level::Info),
            30 => Some(Level::Warning),
            40 => Some(Level::Error),
            50 => Some(Level::Critical),
            _ => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `pad` so width/alignment specifiers like `{:<8}` apply.
        f.pad(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level '{0}'")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "critical" => Ok(Level::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// One emitted log event. Built by a `Logger` once the level check passes,
/// then handed read-only to the installed sink.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub time: DateTime<Local>,
    pub level: Level,
    pub name: String,
    pub message: String,
}

impl LogRecord {
    /// Stamps the record with the current local time.
    pub fn new(level: Level, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            time: Local::now(),
            level,
            name: name.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn display_honours_padding() {
        assert_eq!(format!("{:<8}|", Level::Info), "INFO    |");
        assert_eq!(Level::Warning.to_string(), "WARNING");
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Error".parse::<Level>(), Ok(Level::Error));
        assert_eq!("warn".parse::<Level>(), Ok(Level::Warning));
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), "unknown log level 'verbose'");
    }

    #[test]
    fn u8_round_trip_rejects_unset() {
        assert_eq!(Level::from_u8(Level::Critical.as_u8()), Some(Level::Critical));
        assert_eq!(Level::from_u8(0), None);
    }
}
