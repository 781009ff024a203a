//! Log record structure

use super::caller::CallerInfo;
use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// A single record on its way to the sinks. Never persisted.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
    pub caller: CallerInfo,
    /// Raw multi-line trace text, rendered with a `"! "` prefix per line
    pub trace: Option<String>,
}

impl LogRecord {
    /// The message is kept as given, control characters included.
    pub fn new(level: LogLevel, message: impl Into<String>, caller: CallerInfo) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Local::now(),
            caller,
            trace: None,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}
