//! Record layout for each [`Mode`]
//!
//! - Plain: `{message}`
//! - Verbose: `{level:<8} {message}`
//! - Debug: `{level:<8}  {timestamp}  {file:<20} {line:<6} {function:<32} {message}`
//!
//! Traces attached to a record are rendered on the following lines, each
//! prefixed with `"! "`.

use super::log_record::LogRecord;
use super::mode::Mode;
use std::backtrace::Backtrace;
use std::error::Error;

pub const LEVEL_WIDTH: usize = 8;
pub const FILE_WIDTH: usize = 20;
pub const LINE_WIDTH: usize = 6;
pub const FUNCTION_WIDTH: usize = 32;

/// Local-time timestamp layout, e.g. `2024-01-02 03:04:05,123`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Prefix put in front of every trace line
pub const TRACE_PREFIX: &str = "! ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
    mode: Mode,
}

impl Formatter {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Render a record, including its trace if any
    pub fn render(&self, record: &LogRecord) -> String {
        let mut output = self.format_line(record);
        if let Some(ref trace) = record.trace {
            if !trace.is_empty() {
                output.push('\n');
                output.push_str(&Self::format_exception(trace));
            }
        }
        output
    }

    fn format_line(&self, record: &LogRecord) -> String {
        match self.mode {
            Mode::Plain => record.message.clone(),
            Mode::Verbose => format!(
                "{:<lw$} {}",
                record.level,
                record.message,
                lw = LEVEL_WIDTH
            ),
            Mode::Debug => format!(
                "{:<lw$}  {}  {:<fw$} {:<nw$} {:<uw$} {}",
                record.level,
                record.timestamp.format(TIMESTAMP_FORMAT),
                record.caller.file(),
                record.caller.line(),
                record.caller.function(),
                record.message,
                lw = LEVEL_WIDTH,
                fw = FILE_WIDTH,
                nw = LINE_WIDTH,
                uw = FUNCTION_WIDTH,
            ),
        }
    }

    /// Prefix every line of a trace with `"! "`
    pub fn format_exception(trace: &str) -> String {
        trace
            .lines()
            .map(|line| format!("{}{}", TRACE_PREFIX, line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Trace text for an error and its `source()` chain
    pub fn describe_error(error: &dyn Error) -> String {
        let mut text = format!("Error: {}", error);
        let mut source = error.source();
        while let Some(cause) = source {
            text.push_str("\nCaused by: ");
            text.push_str(&cause.to_string());
            source = cause.source();
        }
        text
    }

    /// Trace text for a captured stack backtrace
    pub fn describe_backtrace(backtrace: &Backtrace) -> String {
        format!("Stack trace (most recent call first):\n{}", backtrace)
    }
}
