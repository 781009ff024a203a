//! Appender implementations

pub mod console;
pub mod file;

pub use console::{ConsoleAppender, Stream};
pub use file::FileAppender;

// Re-export trait for convenience
pub use crate::core::Appender;
