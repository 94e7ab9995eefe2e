//! Core logger types and traits

pub mod color;
pub mod destination;
pub mod error;
pub mod format;
pub mod logger;
pub mod record;
pub mod registry;
pub mod severity;
pub mod timestamp;

pub use color::{default_palette, ColorPair, Rgb};
pub use destination::Destination;
pub use error::{LoggerError, Result};
pub use format::{render, DisplayOptions};
pub use logger::Logger;
pub use record::{CallSite, Record};
pub use registry::{default_logger, LoggerRegistry, DEFAULT_CONSOLE_ID, DEFAULT_LOGGER_ID};
pub use severity::Severity;
pub use timestamp::TimestampFormat;
