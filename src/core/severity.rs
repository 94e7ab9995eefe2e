//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered log severity, lowest importance first.
///
/// `All` is the always-pass sentinel used as a threshold, never as a record
/// severity in practice. Note that `Info` orders *below* `Debug`: a
/// `Debug`-threshold destination still emits debug records while suppressing
/// plain informational ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Severity {
    #[default]
    All = 0,
    MessageOnly = 1,
    Comment = 2,
    Verbose = 3,
    Info = 4,
    Debug = 5,
    Warning = 6,
    Error = 7,
    Severe = 8,
}

impl Severity {
    pub fn name(&self) -> &'static str {
        match self {
            Severity::All => "All",
            Severity::MessageOnly => "MessageOnly",
            Severity::Comment => "Comment",
            Severity::Verbose => "Verbose",
            Severity::Info => "Info",
            Severity::Debug => "Debug",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
            Severity::Severe => "Severe",
        }
    }

    /// `true` when a record at this severity passes the given threshold.
    #[inline]
    pub fn is_enabled_for(&self, threshold: Severity) -> bool {
        *self >= threshold
    }

    /// All severities in ascending order.
    pub fn iter() -> impl Iterator<Item = Severity> {
        [
            Severity::All,
            Severity::MessageOnly,
            Severity::Comment,
            Severity::Verbose,
            Severity::Info,
            Severity::Debug,
            Severity::Warning,
            Severity::Error,
            Severity::Severe,
        ]
        .into_iter()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Severity::All),
            "messageonly" | "message_only" => Ok(Severity::MessageOnly),
            "comment" => Ok(Severity::Comment),
            "verbose" => Ok(Severity::Verbose),
            "info" => Ok(Severity::Info),
            "debug" => Ok(Severity::Debug),
            "warn" | "warning" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            "severe" => Ok(Severity::Severe),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
