// src/registry/configure.rs
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::capability;
use crate::formatters::ConsoleFormatter;
use crate::record::Level;
use crate::registry::Registry;
use crate::sinks::stream::DEFAULT_LOG_FILE;
use crate::sinks::{ConsoleSink, FileSink, Sink, SinkKind};
use crate::utils::error::LoggingError;

/// Tag recognised for interactive console output.
pub const DEV_ENVIRONMENT: &str = "dev";

/// Runtime environment the process declares at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Console output, styled when the capability is present.
    Dev,
    /// Structured lines appended to the log file. Holds the original tag.
    Persisted(String),
}

impl Environment {
    /// Exactly `"dev"` selects `Dev`; every other tag, including `"DEV"`,
    /// selects `Persisted`.
    pub fn parse(tag: &str) -> Self {
        if tag == DEV_ENVIRONMENT {
            Environment::Dev
        } else {
            Environment::Persisted(tag.to_string())
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Environment::Dev)
    }
}

impl From<&str> for Environment {
    fn from(tag: &str) -> Self {
        Environment::parse(tag)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Dev => write!(f, "{}", DEV_ENVIRONMENT),
            Environment::Persisted(tag) => write!(f, "{}", tag),
        }
    }
}

/// Everything `configure` decides from. Only the environment is public
/// input; the rest is fixed for callers and overridable in tests.
#[derive(Debug, Clone)]
pub(crate) struct Setup {
    pub(crate) environment: Environment,
    pub(crate) rich: bool,
    pub(crate) log_file: PathBuf,
}

impl Setup {
    pub(crate) fn for_environment(tag: &str) -> Self {
        Self {
            environment: Environment::parse(tag),
            rich: capability::rich_rendering_available(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    fn build_sink(&self) -> Result<Arc<dyn Sink>, LoggingError> {
        let sink: Arc<dyn Sink> = match &self.environment {
            Environment::Dev => Arc::new(ConsoleSink::stdout_with(
                ConsoleFormatter::for_capability(self.rich),
            )),
            Environment::Persisted(_) => Arc::new(FileSink::open(&self.log_file)?),
        };
        Ok(sink)
    }
}

impl Registry {
    /// Installs the single sink for `environment`, replacing any previous
    /// configuration, and opens the floor to `Debug`.
    ///
    /// A log file that cannot be opened fails here; the previously
    /// installed sinks are then left in place.
    pub fn configure(&self, environment: &str) -> Result<SinkKind, LoggingError> {
        self.configure_with(&Setup::for_environment(environment))
    }

    pub(crate) fn configure_with(&self, setup: &Setup) -> Result<SinkKind, LoggingError> {
        // Built before the swap: if the file cannot be opened the error
        // propagates and the registry keeps its current sink.
        let sink = setup.build_sink()?;
        sink.set_level(Level::Debug);
        let kind = sink.kind();

        let removed = self.replace_sinks(sink);
        self.set_level(Level::Debug);

        tracing::debug!(
            "Logging configured for '{}': {} sink installed, {} replaced",
            setup.environment,
            kind,
            removed.len()
        );
        Ok(kind)
    }
}

/// Configures the process-wide registry. Call once at startup; repeated
/// calls replace the previous sink.
pub fn setup_logging(environment: &str) -> Result<SinkKind, LoggingError> {
    Registry::global().configure(environment)
}

/// Returns the process-wide handle for `name`, creating it on first use.
pub fn get_logger(name: &str) -> crate::registry::Logger {
    Registry::global().get_logger(name)
}
