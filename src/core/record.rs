//! Log record structure

use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Caller metadata captured at the point of a log invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub function: String,
    pub file: String,
    pub line: u32,
}

impl CallSite {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }

    /// Call site from a `#[track_caller]` location. The function name is not
    /// recoverable from a `Location`; the logging macros fill it in instead.
    pub fn from_location(location: &std::panic::Location<'_>) -> Self {
        Self {
            function: String::new(),
            file: location.file().to_string(),
            line: location.line(),
        }
    }
}

/// One immutable log event, constructed per log call and passed by reference
/// to every attached destination. Nothing retains it after delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub message: String,
    pub function: String,
    pub file: String,
    pub line: u32,
}

impl Record {
    /// Create a record, capturing the current wall-clock time.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            timestamp: Utc::now(),
            message: message.into(),
            function: String::new(),
            file: String::new(),
            line: 0,
        }
    }

    pub fn with_call_site(mut self, site: CallSite) -> Self {
        self.function = site.function;
        self.file = site.file;
        self.line = site.line;
        self
    }

    /// Base name of the originating file, for call-site display.
    pub fn file_basename(&self) -> &str {
        std::path::Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }
}
