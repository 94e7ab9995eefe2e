//! File destination

use crate::core::destination::Destination;
use crate::core::error::{LoggerError, Result};
use crate::core::format::{render, DisplayOptions};
use crate::core::record::Record;
use crate::core::registry::report_internal_error;
use crate::core::severity::Severity;
use parking_lot::{Mutex, RwLock};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends formatted lines to a UTF-8 text file.
///
/// The target is validated eagerly: construction fails when the file cannot
/// be created or opened for append. Each record re-opens the file, writes,
/// and closes again — no long-lived descriptor, and every line is durable
/// the moment `process_record` returns. The whole open/write/close cycle
/// runs under a per-instance lock.
///
/// A write failure after construction is reported on the default logger and
/// the record is dropped for this destination only.
pub struct FileDestination {
    identifier: String,
    path: PathBuf,
    options: RwLock<DisplayOptions>,
    threshold: RwLock<Severity>,
    io_lock: Mutex<()>,
}

impl FileDestination {
    /// Create a destination writing to `path`, creating the file if absent.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Err(source) = OpenOptions::new().create(true).append(true).open(path) {
            let err = LoggerError::file_target(path.display().to_string(), source.to_string());
            report_internal_error(err.to_string());
            return Err(err);
        }

        // the probe open above created the file, so this resolves
        let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        Ok(Self {
            identifier: resolved.display().to_string(),
            path: resolved,
            options: RwLock::new(DisplayOptions::default()),
            threshold: RwLock::new(Severity::All),
            io_lock: Mutex::new(()),
        })
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

    /// Resolved absolute location of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_line(&self, line: &str) -> std::io::Result<()> {
        // open/write/close is atomic with respect to this instance
        let _serialized = self.io_lock.lock();
        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;
        file.flush()
    }
}

impl Destination for FileDestination {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn options(&self) -> DisplayOptions {
        self.options.read().clone()
    }

    fn set_options(&self, options: DisplayOptions) {
        if let Some(problem) = options.validate() {
            report_internal_error(format!(
                "file destination '{}': {}",
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
        if let Err(source) = self.append_line(&line) {
            report_internal_error(format!(
                "file destination '{}' failed to write: {}",
                self.identifier, source
            ));
        }
    }

    fn has_persistent_file(&self) -> bool {
        true
    }

    fn file_location(&self) -> Option<PathBuf> {
        Some(self.path.clone())
    }
}
