// src/registry/logger.rs
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Weak};

use crate::record::{Level, LogRecord};
use crate::registry::{RegistryInner, DEFAULT_LEVEL, ROOT_LOGGER};

// Stored in the level atomic when no override is set.
const UNSET: u8 = 0;

/// Handle to a named logger. Clones share the same underlying logger.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    name: String,
    level: AtomicU8,
    registry: Weak<RegistryInner>,
}

impl Logger {
    pub(crate) fn new(name: &str, registry: Weak<RegistryInner>) -> Self {
        Self {
            inner: Arc::new(LoggerInner {
                name: name.to_string(),
                level: AtomicU8::new(UNSET),
                registry,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub(crate) fn is_root(&self) -> bool {
        self.inner.name == ROOT_LOGGER
    }

    /// This logger's own override. The root logger reports the registry floor.
    pub fn level(&self) -> Option<Level> {
        if self.is_root() {
            return self.inner.registry.upgrade().map(|registry| registry.level());
        }
        Level::from_u8(self.inner.level.load(Ordering::Relaxed))
    }

    /// Sets or clears the override. On the root logger this moves the
    /// registry floor; clearing it there is ignored.
    pub fn set_level(&self, level: Option<Level>) {
        if self.is_root() {
            if let (Some(level), Some(registry)) = (level, self.inner.registry.upgrade()) {
                registry.set_level(level);
            }
            return;
        }
        let raw = level.map(Level::as_u8).unwrap_or(UNSET);
        self.inner.level.store(raw, Ordering::Relaxed);
    }

    /// The level that decides whether a record is created at all.
    pub fn effective_level(&self) -> Level {
        let Some(registry) = self.inner.registry.upgrade() else {
            return DEFAULT_LEVEL;
        };
        if self.is_root() {
            return registry.level();
        }
        match Level::from_u8(self.inner.level.load(Ordering::Relaxed)) {
            Some(level) => level,
            None => registry.inherited_level(&self.inner.name),
        }
    }

    pub fn is_enabled_for(&self, level: Level) -> bool {
        level >= self.effective_level()
    }

    /// Emits `message` at `level`. The message is only rendered to text if
    /// the level passes, so `format_args!` costs nothing when filtered.
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if !self.is_enabled_for(level) {
            return;
        }
        let Some(registry) = self.inner.registry.upgrade() else {
            return;
        };
        let record = LogRecord::new(level, self.inner.name.as_str(), message.to_string());
        registry.dispatch(&record);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Level::Warning, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Level::Critical, message);
    }

    /// True when both handles address the same logger.
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Logger {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Logger {}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("level", &self.level())
            .finish()
    }
}
