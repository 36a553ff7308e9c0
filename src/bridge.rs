// src/bridge.rs
use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use crate::record::Level;
use crate::registry::Registry;

/// A `tracing` layer that feeds events into a logging registry, so code
/// using `tracing` macros ends up in the same sink as `Logger` calls.
///
/// The event target becomes the logger name with `::` turned into `.`,
/// which lets per-logger overrides apply to whole module trees.
pub struct RegistryLayer {
    registry: Registry,
}

impl RegistryLayer {
    /// Forwards to the process-wide registry.
    pub fn new() -> Self {
        Self::with_registry(Registry::global().clone())
    }

    pub fn with_registry(registry: Registry) -> Self {
        Self { registry }
    }
}

impl Default for RegistryLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Subscriber> Layer<S> for RegistryLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = level_from_tracing(metadata.level());
        let logger = self.registry.get_logger(&metadata.target().replace("::", "."));
        if !logger.is_enabled_for(level) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        logger.log(level, visitor.finish());
    }
}

fn level_from_tracing(level: &tracing::Level) -> Level {
    match *level {
        tracing::Level::TRACE | tracing::Level::DEBUG => Level::Debug,
        tracing::Level::INFO => Level::Info,
        tracing::Level::WARN => Level::Warning,
        tracing::Level::ERROR => Level::Error,
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: Vec<String>,
}

impl MessageVisitor {
    /// The message followed by any other fields as `key=value`.
    fn finish(self) -> String {
        let mut parts = Vec::with_capacity(self.fields.len() + 1);
        if !self.message.is_empty() {
            parts.push(self.message);
        }
        parts.extend(self.fields);
        parts.join(" ")
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}
