//! Main logger implementation

use super::destination::Destination;
use super::error::{LoggerError, Result};
use super::record::{CallSite, Record};
use super::severity::Severity;
use parking_lot::RwLock;
use std::sync::Arc;

/// A named logger owning an ordered set of destinations.
///
/// `log` constructs one [`Record`] and offers it to every attached
/// destination in insertion order; each destination gates emission with its
/// own threshold. The logger's own threshold is *not* a second gate on
/// fan-out — it is propagated to destinations by [`Logger::set_threshold`]
/// and consulted by [`Logger::is_enabled`] / [`Logger::exec_if_enabled`].
///
/// All configuration lives behind locks, so a `Logger` can be shared across
/// threads behind an `Arc` without external synchronization.
pub struct Logger {
    identifier: String,
    threshold: RwLock<Severity>,
    destinations: RwLock<Vec<Arc<dyn Destination>>>,
}

impl Logger {
    #[must_use]
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            threshold: RwLock::new(Severity::All),
            destinations: RwLock::new(Vec::new()),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Attach a destination. Fails without mutating the list when a
    /// destination with the same identifier is already attached.
    pub fn add_destination(&self, destination: Arc<dyn Destination>) -> Result<()> {
        let mut destinations = self.destinations.write();
        if destinations
            .iter()
            .any(|existing| existing.identifier() == destination.identifier())
        {
            return Err(LoggerError::duplicate_destination(destination.identifier()));
        }
        destinations.push(destination);
        Ok(())
    }

    /// Detach a destination by identifier. No-op if absent.
    pub fn remove_destination(&self, identifier: &str) {
        let mut destinations = self.destinations.write();
        destinations.retain(|destination| destination.identifier() != identifier);
    }

    /// Look up an attached destination by identifier.
    pub fn destination(&self, identifier: &str) -> Option<Arc<dyn Destination>> {
        self.destinations
            .read()
            .iter()
            .find(|destination| destination.identifier() == identifier)
            .cloned()
    }

    /// Insertion-order snapshot of the attached destinations.
    pub fn destinations(&self) -> Vec<Arc<dyn Destination>> {
        self.destinations.read().clone()
    }

    pub fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    /// Set the logger's threshold and mirror it to every destination.
    pub fn set_threshold(&self, threshold: Severity) {
        *self.threshold.write() = threshold;
        for destination in self.destinations.read().iter() {
            destination.set_threshold(threshold);
        }
    }

    /// Whether `severity` passes the logger's own threshold. Independent of
    /// per-destination thresholds.
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.is_enabled_for(self.threshold())
    }

    /// Run `work` only when `severity` passes the logger's threshold.
    ///
    /// The one lazy-evaluation construct: `work` is never invoked
    /// speculatively, so expensive log payloads cost nothing when disabled.
    pub fn exec_if_enabled<F: FnOnce()>(&self, severity: Severity, work: F) {
        if self.is_enabled(severity) {
            work();
        }
    }

    /// Fan a record out to every attached destination.
    pub fn log_record(&self, record: Record, include_call_site: bool) {
        // snapshot, so concurrent add/remove never yields a torn list
        let destinations = self.destinations();
        for destination in destinations {
            destination.process_record(&record, include_call_site);
        }
    }

    #[track_caller]
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        let site = CallSite::from_location(std::panic::Location::caller());
        self.log_with_site(severity, message, site);
    }

    pub fn log_with_site(&self, severity: Severity, message: impl Into<String>, site: CallSite) {
        let record = Record::new(severity, message).with_call_site(site);
        self.log_record(record, true);
    }

    /// Log a message with no call-site information.
    pub fn log_plain(&self, severity: Severity, message: impl Into<String>) {
        self.log_record(Record::new(severity, message), false);
    }

    #[track_caller]
    #[inline]
    pub fn message_only(&self, message: impl Into<String>) {
        self.log(Severity::MessageOnly, message);
    }

    #[track_caller]
    #[inline]
    pub fn comment(&self, message: impl Into<String>) {
        self.log(Severity::Comment, message);
    }

    #[track_caller]
    #[inline]
    pub fn verbose(&self, message: impl Into<String>) {
        self.log(Severity::Verbose, message);
    }

    #[track_caller]
    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[track_caller]
    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    #[track_caller]
    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    #[track_caller]
    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    #[track_caller]
    #[inline]
    pub fn severe(&self, message: impl Into<String>) {
        self.log(Severity::Severe, message);
    }

    /// Log an Info summary of this logger's configuration, without call-site
    /// information.
    pub fn log_configuration(&self) {
        let mut summary = format!(
            "logger '{}' (threshold {}) with destinations:",
            self.identifier,
            self.threshold()
        );
        for destination in self.destinations().iter() {
            let options = destination.options();
            summary.push_str(&format!(
                "\n  {} threshold={} timestamp={} severity={} file={} line={} function={}",
                destination.identifier(),
                destination.threshold(),
                options.show_timestamp,
                options.show_severity,
                options.show_file_name,
                options.show_line_number,
                options.show_function_name,
            ));
            if let Some(path) = destination.file_location() {
                summary.push_str(&format!(" target={}", path.display()));
            }
        }
        self.log_plain(Severity::Info, summary);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<String> = self
            .destinations()
            .iter()
            .map(|destination| destination.identifier().to_string())
            .collect();
        f.debug_struct("Logger")
            .field("identifier", &self.identifier)
            .field("threshold", &self.threshold())
            .field("destinations", &ids)
            .finish()
    }
}
