//! Destination trait for log output targets

use super::color::ColorPair;
use super::format::DisplayOptions;
use super::record::Record;
use super::severity::Severity;
use std::path::PathBuf;

/// Capability contract every log sink implements.
///
/// The trait itself carries the settable configuration (threshold, display
/// options, per-severity colors), so the logger never needs to know concrete
/// destination types. Destinations are shared behind `Arc` and must keep
/// their own state consistent under concurrent calls.
///
/// `process_record` never reports failure to the caller: a destination that
/// cannot emit reports the condition on the default logger's error channel
/// and drops the record for itself only.
pub trait Destination: Send + Sync {
    /// Identifier, unique within one logger.
    fn identifier(&self) -> &str;

    /// Snapshot of the current display options.
    fn options(&self) -> DisplayOptions;

    /// Replace the display options. Inconsistent combinations are reported
    /// through the default logger but stored as requested.
    fn set_options(&self, options: DisplayOptions);

    /// Minimum severity this destination emits.
    fn threshold(&self) -> Severity;

    fn set_threshold(&self, threshold: Severity);

    fn is_enabled_for(&self, severity: Severity) -> bool {
        severity.is_enabled_for(self.threshold())
    }

    /// Offer one record to this destination; it decides emission itself.
    fn process_record(&self, record: &Record, include_call_site: bool);

    /// Whether this destination writes to a persistent file.
    fn has_persistent_file(&self) -> bool {
        false
    }

    /// Resolved location of the backing file, for diagnostics.
    fn file_location(&self) -> Option<PathBuf> {
        None
    }

    /// Whether color decoration is in effect for this destination.
    fn supports_color(&self) -> bool {
        false
    }

    /// Update the color pair for one severity. No-op on colorless sinks.
    fn set_severity_colors(&self, _severity: Severity, _colors: ColorPair) {}
}
