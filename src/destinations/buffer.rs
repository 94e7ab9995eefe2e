//! In-memory buffer destination
//!
//! An append-only rich-text buffer a presentation layer can consume: plain
//! text plus per-append color range metadata. Color here is metadata, not a
//! terminal escape, so the destination is unconditionally color capable.

use crate::core::color::{default_palette, ColorPair, Rgb};
use crate::core::destination::Destination;
use crate::core::format::{render, DisplayOptions};
use crate::core::record::Record;
use crate::core::registry::report_internal_error;
use crate::core::severity::Severity;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::ops::Range;

/// Color metadata for one appended line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpan {
    /// Byte range of the appended text within the buffer contents.
    pub range: Range<usize>,
    pub severity: Severity,
    pub colors: ColorPair,
}

#[derive(Default)]
struct BufferInner {
    text: String,
    spans: Vec<ColorSpan>,
}

/// Appends formatted records to a mutable text buffer with color spans.
pub struct BufferDestination {
    identifier: String,
    options: RwLock<DisplayOptions>,
    threshold: RwLock<Severity>,
    palette: Mutex<HashMap<Severity, ColorPair>>,
    inner: Mutex<BufferInner>,
}

impl BufferDestination {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            options: RwLock::new(DisplayOptions::default()),
            threshold: RwLock::new(Severity::All),
            palette: Mutex::new(default_palette()),
            inner: Mutex::new(BufferInner::default()),
        }
    }

    #[must_use]
    pub fn with_options(self, options: DisplayOptions) -> Self {
        self.set_options(options);
        self
    }

    #[must_use]
    pub fn with_threshold(self, threshold: Severity) -> Self {
        *self.threshold.write() = threshold;
        self
    }

    /// Plain text accumulated so far.
    pub fn contents(&self) -> String {
        self.inner.lock().text.clone()
    }

    /// Color range metadata, one span per appended line.
    pub fn spans(&self) -> Vec<ColorSpan> {
        self.inner.lock().spans.clone()
    }

    pub fn line_count(&self) -> usize {
        self.inner.lock().spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().text.is_empty()
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.text.clear();
        inner.spans.clear();
    }
}

impl Destination for BufferDestination {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn options(&self) -> DisplayOptions {
        self.options.read().clone()
    }

    fn set_options(&self, options: DisplayOptions) {
        if let Some(problem) = options.validate() {
            report_internal_error(format!(
                "buffer destination '{}': {}",
                self.identifier, problem
            ));
        }
        *self.options.write() = options;
    }

    fn threshold(&self) -> Severity {
        *self.threshold.read()
    }

    fn set_threshold(&self, threshold: Severity) {
        *self.threshold.write() = threshold;
    }

    fn process_record(&self, record: &Record, include_call_site: bool) {
        if !self.is_enabled_for(record.severity) {
            return;
        }

        let line = render(record, &self.options(), include_call_site);
        let colors = self
            .palette
            .lock()
            .get(&record.severity)
            .copied()
            .unwrap_or(ColorPair::new(Rgb::WHITE));

        let mut inner = self.inner.lock();
        let start = inner.text.len();
        inner.text.push_str(&line);
        let end = inner.text.len();
        inner.spans.push(ColorSpan {
            range: start..end,
            severity: record.severity,
            colors,
        });
    }

    fn supports_color(&self) -> bool {
        true
    }

    fn set_severity_colors(&self, severity: Severity, colors: ColorPair) {
        self.palette.lock().insert(severity, colors);
    }
}
