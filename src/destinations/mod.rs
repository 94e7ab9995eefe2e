//! Destination implementations

pub mod buffer;
pub mod console;
pub mod file;

pub use buffer::{BufferDestination, ColorSpan};
pub use console::ConsoleDestination;
pub use file::FileDestination;

// Re-export the trait next to its implementations
pub use crate::core::Destination;
