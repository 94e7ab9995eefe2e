//! Console destination

use crate::core::color::{default_palette, ColorPair};
use crate::core::destination::Destination;
use crate::core::format::{render, DisplayOptions};
use crate::core::record::Record;
use crate::core::registry::report_internal_error;
use crate::core::severity::Severity;
use colored::Colorize;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::io::Write;

// One mutual-exclusion point for all stdout writes, shared by every console
// destination in the process. Lines from concurrent callers never interleave.
static CONSOLE_WRITE_LOCK: Mutex<()> = Mutex::new(());

/// Writes formatted lines to standard output, serialized through a single
/// process-wide lock. When the environment signals a truecolor-capable
/// terminal, lines are wrapped in the per-severity color profile; plain text
/// otherwise. Emission is best-effort and never fails.
pub struct ConsoleDestination {
    identifier: String,
    options: RwLock<DisplayOptions>,
    threshold: RwLock<Severity>,
    palette: Mutex<HashMap<Severity, ColorPair>>,
}

impl ConsoleDestination {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            options: RwLock::new(DisplayOptions::default()),
            threshold: RwLock::new(Severity::All),
            palette: Mutex::new(default_palette()),
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

    /// Restore the default per-severity palette.
    pub fn reset_severity_colors(&self) {
        *self.palette.lock() = default_palette();
    }

    /// Color pair currently configured for a severity.
    pub fn severity_colors(&self, severity: Severity) -> Option<ColorPair> {
        self.palette.lock().get(&severity).copied()
    }

    // Color decoration is gated on the terminal advertising 24-bit support.
    fn color_signal_present() -> bool {
        matches!(
            std::env::var("COLORTERM").as_deref(),
            Ok("truecolor") | Ok("24bit")
        )
    }

    fn decorate(&self, severity: Severity, line: &str) -> String {
        match self.severity_colors(severity) {
            Some(pair) => {
                let fg = pair.foreground;
                let mut colored_line = line.truecolor(fg.r, fg.g, fg.b);
                if let Some(bg) = pair.background {
                    colored_line = colored_line.on_truecolor(bg.r, bg.g, bg.b);
                }
                colored_line.to_string()
            }
            None => line.to_string(),
        }
    }
}

impl Destination for ConsoleDestination {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn options(&self) -> DisplayOptions {
        self.options.read().clone()
    }

    fn set_options(&self, options: DisplayOptions) {
        if let Some(problem) = options.validate() {
            report_internal_error(format!(
                "console destination '{}': {}",
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
        let body = line.trim_end_matches('\n');
        let output = if self.supports_color() {
            self.decorate(record.severity, body)
        } else {
            body.to_string()
        };

        let _serialized = CONSOLE_WRITE_LOCK.lock();
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        // best-effort sink; a blocked stdout is not our error to surface
        let _ = writeln!(handle, "{}", output);
        let _ = handle.flush();
    }

    fn supports_color(&self) -> bool {
        Self::color_signal_present()
    }

    fn set_severity_colors(&self, severity: Severity, colors: ColorPair) {
        self.palette.lock().insert(severity, colors);
    }
}
