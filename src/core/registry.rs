//! Named-logger registry and the shared default logger
//!
//! The registry is an explicitly-owned, lock-guarded map so tests can build
//! isolated instances; the process-wide instance behind [`global`] backs the
//! shared default logger and the library's internal error channel.

use super::destination::Destination;
use super::error::{LoggerError, Result};
use super::logger::Logger;
use crate::destinations::ConsoleDestination;
use parking_lot::RwLock;
use std::cell::Cell;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Identifier of the lazily created default logger.
pub const DEFAULT_LOGGER_ID: &str = "fanlog.default";

/// Identifier of the console destination pre-attached to new loggers.
pub const DEFAULT_CONSOLE_ID: &str = "fanlog.console";

/// Directory of named loggers. Entries are added on construction and removed
/// on disposal; duplicate identifiers are rejected.
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
        }
    }

    /// The shared default logger, created on first access with one
    /// pre-attached console destination.
    pub fn default_logger(&self) -> Arc<Logger> {
        if let Some(logger) = self.get(DEFAULT_LOGGER_ID) {
            return logger;
        }

        let mut loggers = self.loggers.write();
        // re-check under the write lock; another thread may have won
        if let Some(logger) = loggers.get(DEFAULT_LOGGER_ID) {
            return Arc::clone(logger);
        }

        let logger = Arc::new(Logger::new(DEFAULT_LOGGER_ID));
        // adding to a freshly built logger cannot collide
        let _ = logger.add_destination(Arc::new(ConsoleDestination::new(DEFAULT_CONSOLE_ID)));
        loggers.insert(DEFAULT_LOGGER_ID.to_string(), Arc::clone(&logger));
        logger
    }

    /// Register a new logger. A duplicate identifier fails and is reported
    /// on the default logger; an empty destination list gets a default
    /// console destination.
    pub fn create(
        &self,
        identifier: impl Into<String>,
        destinations: Vec<Arc<dyn Destination>>,
    ) -> Result<Arc<Logger>> {
        let identifier = identifier.into();

        let logger = Arc::new(Logger::new(identifier.clone()));
        if destinations.is_empty() {
            let _ = logger.add_destination(Arc::new(ConsoleDestination::new(DEFAULT_CONSOLE_ID)));
        } else {
            for destination in destinations {
                if let Err(err) = logger.add_destination(destination) {
                    report_internal_error(err.to_string());
                    return Err(err);
                }
            }
        }

        {
            let mut loggers = self.loggers.write();
            if loggers.contains_key(&identifier) {
                drop(loggers);
                let err = LoggerError::duplicate_logger(identifier);
                report_internal_error(err.to_string());
                return Err(err);
            }
            loggers.insert(identifier, Arc::clone(&logger));
        }

        Ok(logger)
    }

    pub fn get(&self, identifier: &str) -> Option<Arc<Logger>> {
        self.loggers.read().get(identifier).cloned()
    }

    /// Dispose a logger, removing its registry entry. Returns whether an
    /// entry existed.
    pub fn remove(&self, identifier: &str) -> bool {
        self.loggers.write().remove(identifier).is_some()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.loggers.read().contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.loggers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loggers.read().is_empty()
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_REGISTRY: OnceLock<LoggerRegistry> = OnceLock::new();

/// The process-wide registry.
pub fn global() -> &'static LoggerRegistry {
    GLOBAL_REGISTRY.get_or_init(LoggerRegistry::new)
}

/// The process-wide default logger.
pub fn default_logger() -> Arc<Logger> {
    global().default_logger()
}

thread_local! {
    static REPORTING: Cell<bool> = const { Cell::new(false) };
}

/// Route a library-internal failure to the default logger's error channel.
///
/// Re-entrant reports (a destination on the default logger failing while we
/// report a failure) fall back to stderr instead of recursing.
pub(crate) fn report_internal_error(message: impl Into<String>) {
    let message = message.into();
    REPORTING.with(|reporting| {
        if reporting.get() {
            eprintln!("[fanlog error] {}", message);
            return;
        }
        reporting.set(true);
        default_logger().error(message);
        reporting.set(false);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destinations::BufferDestination;

    #[test]
    fn test_default_logger_is_singleton_with_console() {
        let registry = LoggerRegistry::new();
        let first = registry.default_logger();
        let second = registry.default_logger();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.identifier(), DEFAULT_LOGGER_ID);
        assert!(first.destination(DEFAULT_CONSOLE_ID).is_some());
    }

    #[test]
    fn test_create_rejects_duplicate_identifier() {
        let registry = LoggerRegistry::new();
        let destination: Arc<dyn Destination> = Arc::new(BufferDestination::new("buffer"));
        registry
            .create("app", vec![destination.clone()])
            .expect("first create succeeds");

        let result = registry.create("app", vec![Arc::new(BufferDestination::new("other"))]);
        assert!(matches!(result, Err(LoggerError::DuplicateLogger { .. })));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_without_destinations_attaches_console() {
        let registry = LoggerRegistry::new();
        let logger = registry.create("bare", Vec::new()).expect("create");
        assert!(logger.destination(DEFAULT_CONSOLE_ID).is_some());
    }

    #[test]
    fn test_remove_disposes_entry() {
        let registry = LoggerRegistry::new();
        registry.create("ephemeral", Vec::new()).expect("create");
        assert!(registry.contains("ephemeral"));
        assert!(registry.remove("ephemeral"));
        assert!(!registry.contains("ephemeral"));
        assert!(!registry.remove("ephemeral"));
        // the identifier is free again
        registry.create("ephemeral", Vec::new()).expect("recreate");
    }

    #[test]
    fn test_get_returns_registered_logger() {
        let registry = LoggerRegistry::new();
        let created = registry.create("lookup", Vec::new()).expect("create");
        let fetched = registry.get("lookup").expect("get");
        assert!(Arc::ptr_eq(&created, &fetched));
        assert!(registry.get("missing").is_none());
    }
}
