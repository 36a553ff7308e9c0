// src/lib.rs
//! Process-wide logging configuration.
//!
//! Call [`setup_logging`] once at startup with the runtime environment:
//! `"dev"` sends human-readable lines to stdout, styled when the `rich`
//! feature is built in, and any other tag appends one JSON object per line
//! to `system_log.json`. Code anywhere in the process then asks
//! [`get_logger`] for a named handle and emits leveled messages.
//!
//! ```no_run
//! loglayer::setup_logging("prod")?;
//! let log = loglayer::get_logger("billing.invoices");
//! log.info(format_args!("issued {} invoices", 12));
//! # Ok::<(), loglayer::LoggingError>(())
//! ```
pub mod bridge;
pub mod capability;
pub mod formatters;
pub mod record;
pub mod registry;
pub mod sinks;
pub mod utils;

pub use bridge::RegistryLayer;
pub use formatters::{ConsoleFormatter, Formatter, StructuredFormatter};
pub use record::{Level, LogRecord};
pub use registry::configure::{get_logger, setup_logging};
pub use registry::{Environment, Logger, Registry};
pub use sinks::stream::DEFAULT_LOG_FILE;
pub use sinks::{ConsoleSink, FileSink, Sink, SinkKind, StreamSink};
pub use utils::LoggingError;
