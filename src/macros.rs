//! Logging macros with call-site capture
//!
//! The macros format the message like `format!` and attach the full call
//! site (enclosing function path, file, line) to the record. The method
//! equivalents on [`Logger`](crate::Logger) capture file and line via
//! `#[track_caller]` but cannot name the enclosing function; use the macros
//! when the function name matters.
//!
//! # Examples
//!
//! ```
//! use fanlog::prelude::*;
//! use fanlog::{info, warning};
//!
//! let logger = Logger::new("app");
//!
//! info!(logger, "server started");
//!
//! let port = 8080;
//! info!(logger, "listening on port {}", port);
//! warning!(logger, "retry {} of {}", 1, 3);
//! ```

/// Path of the enclosing function, e.g. `myapp::server::start`.
#[macro_export]
macro_rules! caller_function {
    () => {{
        fn anchor() {}
        fn type_name_of<T>(_: T) -> &'static str {
            std::any::type_name::<T>()
        }
        let name = type_name_of(anchor);
        // trim the trailing "::anchor"
        name.trim_end_matches("::anchor")
    }};
}

/// Log a message at an explicit severity with the full call site attached.
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Logger::new("doc");
/// use fanlog::log;
/// log!(logger, Severity::Info, "simple message");
/// log!(logger, Severity::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log_with_site(
            $severity,
            format!($($arg)+),
            $crate::CallSite::new($crate::caller_function!(), file!(), line!()),
        )
    };
}

/// Log a bare message with no severity tag.
#[macro_export]
macro_rules! message_only {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::MessageOnly, $($arg)+)
    };
}

/// Log a comment line (rendered with a `// ` prefix).
#[macro_export]
macro_rules! comment {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Comment, $($arg)+)
    };
}

/// Log a verbose-severity message.
#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Verbose, $($arg)+)
    };
}

/// Log an info-severity message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a debug-severity message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log a warning-severity message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-severity message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a severe-severity message.
#[macro_export]
macro_rules! severe {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Severe, $($arg)+)
    };
}
