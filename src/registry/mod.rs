// src/registry/mod.rs
pub mod configure;
pub mod logger;

use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::record::{Level, LogRecord};
use crate::sinks::{Sink, SinkKind};

pub use configure::Environment;
pub use logger::Logger;

/// Floor used before configuration and after `reset`.
pub const DEFAULT_LEVEL: Level = Level::Warning;

/// Name of the logger whose level is the registry floor.
pub const ROOT_LOGGER: &str = "root";

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// Shared store of named loggers and the installed sinks.
///
/// Cloning yields another handle to the same registry. Loggers keep a weak
/// reference back, so handles outliving a dropped registry simply go quiet.
#[derive(Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

pub(crate) struct RegistryInner {
    level: AtomicU8,
    sinks: RwLock<Vec<Arc<dyn Sink>>>,
    loggers: Mutex<HashMap<String, Logger>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                level: AtomicU8::new(DEFAULT_LEVEL.as_u8()),
                sinks: RwLock::new(Vec::new()),
                loggers: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// The process-wide registry used by `setup_logging` and `get_logger`.
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Minimum severity accepted by loggers without an override.
    pub fn level(&self) -> Level {
        self.inner.level()
    }

    pub fn set_level(&self, level: Level) {
        self.inner.set_level(level);
    }

    /// Returns the handle for `name`, creating it on first use.
    ///
    /// An empty name addresses the root logger.
    pub fn get_logger(&self, name: &str) -> Logger {
        let name = if name.is_empty() { ROOT_LOGGER } else { name };
        let mut loggers = self.inner.lock_loggers();
        loggers
            .entry(name.to_string())
            .or_insert_with(|| Logger::new(name, Arc::downgrade(&self.inner)))
            .clone()
    }

    /// Discards every installed sink and installs `sink` in their place.
    /// Returns the sinks that were removed.
    pub fn replace_sinks(&self, sink: Arc<dyn Sink>) -> Vec<Arc<dyn Sink>> {
        let mut sinks = self.inner.write_sinks();
        std::mem::replace(&mut *sinks, vec![sink])
    }

    /// Removes all sinks; safe to call when none are installed.
    pub fn clear_sinks(&self) -> usize {
        let mut sinks = self.inner.write_sinks();
        let removed = sinks.len();
        sinks.clear();
        removed
    }

    pub fn sink_count(&self) -> usize {
        self.inner.read_sinks().len()
    }

    pub fn sink_kinds(&self) -> Vec<SinkKind> {
        self.inner.read_sinks().iter().map(|sink| sink.kind()).collect()
    }

    /// Back to the unconfigured state: no sinks, the default floor, and no
    /// per-logger overrides. Existing handles stay valid.
    pub fn reset(&self) {
        let removed = self.clear_sinks();
        self.set_level(DEFAULT_LEVEL);
        {
            let loggers = self.inner.lock_loggers();
            for logger in loggers.values().filter(|logger| !logger.is_root()) {
                logger.set_level(None);
            }
        }
        tracing::debug!("Logging registry reset, removed {} sink(s)", removed);
    }

    /// Sends `record` to the installed sinks.
    pub fn dispatch(&self, record: &LogRecord) {
        self.inner.dispatch(record);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryInner {
    pub(crate) fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed)).unwrap_or(DEFAULT_LEVEL)
    }

    pub(crate) fn set_level(&self, level: Level) {
        self.level.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Nearest override along the dotted ancestry of `name`, else the floor.
    pub(crate) fn inherited_level(&self, name: &str) -> Level {
        let loggers = self.lock_loggers();
        let mut current = name;
        while let Some((parent, _)) = current.rsplit_once('.') {
            if let Some(level) = loggers.get(parent).and_then(|logger| logger.level()) {
                return level;
            }
            current = parent;
        }
        self.level()
    }

    pub(crate) fn dispatch(&self, record: &LogRecord) {
        let sinks = self.read_sinks();
        if sinks.is_empty() {
            last_resort(record);
            return;
        }
        for sink in sinks.iter() {
            sink.handle(record);
        }
    }

    fn lock_loggers(&self) -> std::sync::MutexGuard<'_, HashMap<String, Logger>> {
        self.loggers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_sinks(&self) -> std::sync::RwLockReadGuard<'_, Vec<Arc<dyn Sink>>> {
        self.sinks.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_sinks(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Arc<dyn Sink>>> {
        self.sinks.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// With nothing installed, warnings and above still reach stderr.
fn last_resort(record: &LogRecord) {
    if record.level >= Level::Warning {
        let _ = writeln!(std::io::stderr().lock(), "{}", record.message);
    }
}

/// Serializes tests that touch the global registry.
#[cfg(test)]
pub(crate) static GLOBAL_TEST_LOCK: Mutex<()> = Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatters::ConsoleFormatter;
    use crate::sinks::stream::tests::SharedBuffer;
    use crate::sinks::StreamSink;

    fn capture(registry: &Registry) -> SharedBuffer {
        let buffer = SharedBuffer::default();
        registry.replace_sinks(Arc::new(StreamSink::new(
            buffer.clone(),
            ConsoleFormatter::plain(),
        )));
        buffer
    }

    #[test]
    fn same_name_yields_same_handle() {
        let registry = Registry::new();
        let first = registry.get_logger("a.b");
        let second = registry.get_logger("a.b");

        assert!(first.ptr_eq(&second));
        assert!(!first.ptr_eq(&registry.get_logger("a")));

        first.set_level(Some(Level::Error));
        assert_eq!(second.level(), Some(Level::Error));
    }

    #[test]
    fn shared_handles_route_to_the_same_sink() {
        let registry = Registry::new();
        registry.set_level(Level::Debug);
        let buffer = capture(&registry);

        let first = registry.get_logger("a.b");
        let second = registry.get_logger("a.b");
        first.set_level(Some(Level::Warning));

        second.info("filtered");
        second.warning("kept");
        first.error("also kept");

        assert_eq!(buffer.contents(), "WARNING - a.b - kept\nERROR - a.b - also kept\n");
    }

    #[test]
    fn replace_sinks_never_appends() {
        let registry = Registry::new();
        capture(&registry);
        let removed = registry.replace_sinks(Arc::new(StreamSink::new(
            SharedBuffer::default(),
            ConsoleFormatter::plain(),
        )));

        assert_eq!(removed.len(), 1);
        assert_eq!(registry.sink_count(), 1);
    }

    #[test]
    fn clear_sinks_is_idempotent() {
        let registry = Registry::new();
        assert_eq!(registry.clear_sinks(), 0);
        capture(&registry);
        assert_eq!(registry.clear_sinks(), 1);
        assert_eq!(registry.clear_sinks(), 0);
    }

    #[test]
    fn unconfigured_floor_is_warning() {
        let registry = Registry::new();
        let logger = registry.get_logger("svc");

        assert_eq!(registry.level(), Level::Warning);
        assert!(!logger.is_enabled_for(Level::Info));
        assert!(logger.is_enabled_for(Level::Warning));
        // No sinks: goes to the last-resort path without failing.
        logger.warning("nobody is listening");
    }

    #[test]
    fn overrides_are_inherited_by_dotted_children() {
        let registry = Registry::new();
        registry.set_level(Level::Debug);
        let parent = registry.get_logger("app.db");
        let child = registry.get_logger("app.db.pool");
        let sibling = registry.get_logger("app.http");

        parent.set_level(Some(Level::Error));

        assert_eq!(child.effective_level(), Level::Error);
        assert_eq!(sibling.effective_level(), Level::Debug);

        child.set_level(Some(Level::Info));
        assert_eq!(child.effective_level(), Level::Info);
    }

    #[test]
    fn inheritance_skips_missing_ancestors() {
        let registry = Registry::new();
        registry.set_level(Level::Info);
        registry.get_logger("app").set_level(Some(Level::Critical));

        // "app.db" was never requested, so "app" is the nearest ancestor.
        assert_eq!(registry.get_logger("app.db.pool").effective_level(), Level::Critical);
    }

    #[test]
    fn root_logger_mirrors_the_floor() {
        let registry = Registry::new();
        let root = registry.get_logger("");

        assert!(root.ptr_eq(&registry.get_logger(ROOT_LOGGER)));
        root.set_level(Some(Level::Error));
        assert_eq!(registry.level(), Level::Error);
        assert_eq!(registry.get_logger("svc").effective_level(), Level::Error);
    }

    #[test]
    fn reset_restores_defaults_but_keeps_handles() {
        let registry = Registry::new();
        registry.set_level(Level::Debug);
        capture(&registry);
        let logger = registry.get_logger("svc");
        logger.set_level(Some(Level::Critical));

        registry.reset();

        assert_eq!(registry.sink_count(), 0);
        assert_eq!(registry.level(), DEFAULT_LEVEL);
        assert_eq!(logger.level(), None);
        assert!(logger.ptr_eq(&registry.get_logger("svc")));
    }

    #[test]
    fn handles_outliving_their_registry_go_quiet() {
        let registry = Registry::new();
        let logger = registry.get_logger("svc");
        drop(registry);

        assert_eq!(logger.effective_level(), DEFAULT_LEVEL);
        logger.error("dropped without failing");
    }

    #[test]
    fn concurrent_lookups_share_one_handle() {
        let registry = Registry::new();
        let handles: Vec<Logger> = std::thread::scope(|scope| {
            let workers: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.get_logger("shared.worker")))
                .collect();
            workers.into_iter().map(|w| w.join().unwrap()).collect()
        });

        assert!(handles.windows(2).all(|pair| pair[0].ptr_eq(&pair[1])));
    }
}
