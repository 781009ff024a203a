//! Core logger types and traits

pub mod appender;
pub mod caller;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod mode;

pub use appender::Appender;
pub use caller::CallerInfo;
pub use error::{LoggerError, Result};
pub use formatter::Formatter;
pub use log_level::LogLevel;
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder, LoggerConfig};
pub use mode::Mode;
