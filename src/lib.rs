//! # Fanlog
//!
//! A leveled logging library that fans each log record out to multiple
//! configurable destinations (console, file, in-memory buffer), each with
//! its own severity threshold and display options.
//!
//! ## Features
//!
//! - **Per-Destination Filtering**: every destination gates emission with
//!   its own minimum severity
//! - **Multiple Destinations**: console, append-only file, and in-memory
//!   rich-text buffer
//! - **Thread Safe**: loggers and destinations are safe to share across
//!   threads; console lines never interleave
//! - **Call-Site Capture**: records carry function, file, and line metadata
//!
//! ## Example
//!
//! ```
//! use fanlog::prelude::*;
//! use std::sync::Arc;
//!
//! let logger = Logger::new("app");
//! logger
//!     .add_destination(Arc::new(BufferDestination::new("ui")))
//!     .expect("unique destination identifier");
//!
//! logger.info("application started");
//! logger.exec_if_enabled(Severity::Debug, || {
//!     logger.debug(format!("expensive state dump: {:?}", vec![1, 2, 3]));
//! });
//! ```

pub mod core;
pub mod destinations;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        default_logger, render, CallSite, ColorPair, Destination, DisplayOptions, Logger,
        LoggerError, LoggerRegistry, Record, Result, Rgb, Severity, TimestampFormat,
    };
    pub use crate::destinations::{
        BufferDestination, ColorSpan, ConsoleDestination, FileDestination,
    };
}

pub use crate::core::{
    default_logger, default_palette, render, CallSite, ColorPair, Destination, DisplayOptions,
    Logger, LoggerError, LoggerRegistry, Record, Result, Rgb, Severity, TimestampFormat,
    DEFAULT_CONSOLE_ID, DEFAULT_LOGGER_ID,
};
pub use destinations::{BufferDestination, ColorSpan, ConsoleDestination, FileDestination};
