//! # Callsite Logger
//!
//! A small synchronous logging wrapper that annotates every record with the
//! file, line and function that produced it.
//!
//! ## Features
//!
//! - **Three modes**: plain, verbose and debug layouts, each with its own threshold
//! - **Call-site metadata**: captured at the macro or method call, never by stack walking
//! - **Console and file sinks**: flushed after every record
//! - **Global façade**: `start_logging` / `stop_logging` plus macros that are
//!   silent until logging is started
//!
//! ```
//! use callsite_logger::{info, warn, global};
//!
//! global::start_logging(true, false, None).unwrap();
//! info!("loaded {} entries", 3);
//! warn!("cache is cold");
//! global::stop_logging();
//! ```

pub mod appenders;
pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, Stream};
    pub use crate::core::{
        Appender, CallerInfo, Formatter, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, Mode, Result,
    };
    pub use crate::global::{AbortOptions, ExitOptions};
}

pub use appenders::{ConsoleAppender, FileAppender, Stream};
pub use core::{
    Appender, CallerInfo, Formatter, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, Mode, Result,
};
pub use global::{AbortOptions, ExitOptions};
