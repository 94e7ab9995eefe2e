//! Display options and the line formatter
//!
//! `render` is a pure function: for a fixed record and options it always
//! produces the same bytes, ending in exactly one newline. Destinations call
//! it and decide on their own what to do with the line.

use super::record::Record;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Per-destination display configuration.
///
/// Everything is on by default. `show_line_number` only takes effect while
/// `show_file_name` is set; requesting the line number with file names hidden
/// is a caller error reported through [`DisplayOptions::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    pub show_timestamp: bool,
    pub show_severity: bool,
    pub show_file_name: bool,
    pub show_line_number: bool,
    pub show_function_name: bool,
    pub timestamp_format: TimestampFormat,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_timestamp: true,
            show_severity: true,
            show_file_name: true,
            show_line_number: true,
            show_function_name: true,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl DisplayOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp(mut self, show: bool) -> Self {
        self.show_timestamp = show;
        self
    }

    #[must_use]
    pub fn with_severity(mut self, show: bool) -> Self {
        self.show_severity = show;
        self
    }

    #[must_use]
    pub fn with_file_name(mut self, show: bool) -> Self {
        self.show_file_name = show;
        self
    }

    #[must_use]
    pub fn with_line_number(mut self, show: bool) -> Self {
        self.show_line_number = show;
        self
    }

    #[must_use]
    pub fn with_function_name(mut self, show: bool) -> Self {
        self.show_function_name = show;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Check for option combinations that cannot render as requested.
    ///
    /// Returns a description of the problem, or `None` when the options are
    /// consistent. The options are never auto-corrected.
    pub fn validate(&self) -> Option<String> {
        if self.show_line_number && !self.show_file_name {
            Some(
                "show_line_number is set while show_file_name is disabled; \
                 line numbers only render inside the file name tag"
                    .to_string(),
            )
        } else {
            None
        }
    }
}

/// Render one record as a display line.
pub fn render(record: &Record, options: &DisplayOptions, include_call_site: bool) -> String {
    let mut extended = String::new();

    // The severity tag is suppressed entirely for MessageOnly records.
    if options.show_severity && record.severity > Severity::MessageOnly {
        extended.push('[');
        extended.push_str(record.severity.name());
        extended.push_str("] ");
    }

    if include_call_site {
        // show_line_number is only meaningful together with show_file_name
        if options.show_file_name {
            extended.push('[');
            extended.push_str(record.file_basename());
            if options.show_line_number {
                extended.push(':');
                extended.push_str(&record.line.to_string());
            }
            extended.push_str("] ");
        }

        if options.show_function_name && !record.function.is_empty() {
            extended.push_str(&record.function);
            extended.push(' ');
        }
    }

    let message = if record.severity == Severity::Comment {
        format!("// {}", record.message)
    } else {
        record.message.clone()
    };

    if options.show_timestamp {
        let timestamp = options.timestamp_format.format(&record.timestamp);
        format!("{} {}: {}\n", timestamp, extended, message)
    } else {
        format!("{}: {}\n", extended, message)
    }
}
