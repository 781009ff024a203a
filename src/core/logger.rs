//! Main logger implementation

use super::{
    appender::Appender,
    caller::CallerInfo,
    error::{LoggerError, Result},
    formatter::Formatter,
    log_level::LogLevel,
    log_record::LogRecord,
    mode::Mode,
};
use crate::appenders::{ConsoleAppender, FileAppender, Stream};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::backtrace::Backtrace;
use std::error::Error;
use std::panic::Location;
use std::path::{Path, PathBuf};

struct Sinks {
    appenders: Vec<Box<dyn Appender>>,
    closed: bool,
}

/// A configured logger: mode, threshold and the sinks it writes to.
///
/// Every emitted record is written to all sinks and then all sinks are
/// flushed, so output is visible before any later process exit.
///
/// The level methods ([`info`](Logger::info), [`error`](Logger::error), ...)
/// are `#[track_caller]`: they report the file and line of their caller, but
/// the function column shows `(unknown function)`. Use the macros, e.g.
/// `info!(logger, "...")`, to get the enclosing function name as well.
pub struct Logger {
    verbose: bool,
    debug: bool,
    mode: Mode,
    min_level: LogLevel,
    formatter: Formatter,
    sinks: Mutex<Sinks>,
}

impl Logger {
    /// Create a logger with a console sink on `stream` and, when `filename`
    /// is given and non-empty, an append-mode file sink.
    ///
    /// Failing to open the file is returned as is.
    pub fn new(
        verbose: bool,
        debug: bool,
        filename: Option<&Path>,
        stream: Stream,
    ) -> Result<Self> {
        let mode = Mode::from_flags(verbose, debug);
        let formatter = Formatter::new(mode);

        let mut appenders: Vec<Box<dyn Appender>> =
            vec![Box::new(ConsoleAppender::with_stream(formatter, stream))];
        if let Some(path) = filename.filter(|p| !p.as_os_str().is_empty()) {
            appenders.push(Box::new(FileAppender::new(path, formatter)?));
        }

        Ok(Self {
            verbose,
            debug,
            mode,
            min_level: mode.min_level(),
            formatter,
            sinks: Mutex::new(Sinks {
                appenders,
                closed: false,
            }),
        })
    }

    pub fn add_appender(&mut self, appender: Box<dyn Appender>) {
        self.sinks.get_mut().appenders.push(appender);
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn is_disabled(&self) -> bool {
        self.sinks.lock().closed
    }

    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Log at `level`, reporting the caller of this method as the call site.
    ///
    /// The function is reported as `(unknown function)`; the [`log!`](crate::log!)
    /// macro also captures it.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let caller = CallerInfo::from_location(Location::caller());
        self.log_at(level, caller, message);
    }

    /// Log with an explicitly supplied call site; nothing is captured.
    pub fn log_at(&self, level: LogLevel, caller: CallerInfo, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }
        self.dispatch(LogRecord::new(level, message, caller));
    }

    /// Log `error` and its source chain at ERROR level.
    ///
    /// Like [`log`](Logger::log), the function is reported as
    /// `(unknown function)`; see [`exception!`](crate::exception!).
    #[track_caller]
    pub fn exception(&self, message: impl Into<String>, error: &dyn Error) {
        let caller = CallerInfo::from_location(Location::caller());
        self.exception_at(caller, message, error);
    }

    pub fn exception_at(
        &self,
        caller: CallerInfo,
        message: impl Into<String>,
        error: &dyn Error,
    ) {
        if !self.enabled(LogLevel::Error) {
            return;
        }
        let record = LogRecord::new(LogLevel::Error, message, caller)
            .with_trace(Formatter::describe_error(error));
        self.dispatch(record);
    }

    /// Log at `level` with the current stack attached as trace.
    pub fn backtrace_at(&self, level: LogLevel, caller: CallerInfo, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }
        let backtrace = Backtrace::force_capture();
        let record = LogRecord::new(level, message, caller)
            .with_trace(Formatter::describe_backtrace(&backtrace));
        self.dispatch(record);
    }

    /// Write a record to every sink, then flush them all.
    ///
    /// The threshold is not checked here. A failing sink is reported on
    /// stderr and does not keep the record from the other sinks.
    pub fn dispatch(&self, record: LogRecord) {
        let mut sinks = self.sinks.lock();
        if sinks.closed {
            return;
        }

        for (idx, appender) in sinks.appenders.iter_mut().enumerate() {
            if let Err(e) = appender.append(&record) {
                eprintln!(
                    "[LOGGER ERROR] Appender #{} ({}) failed: {}",
                    idx,
                    appender.name(),
                    e
                );
            }
        }

        for (idx, appender) in sinks.appenders.iter_mut().enumerate() {
            if let Err(e) = appender.flush() {
                eprintln!(
                    "[LOGGER ERROR] Appender #{} ({}) flush failed: {}",
                    idx,
                    appender.name(),
                    e
                );
            }
        }
    }

    /// Flush every sink, even if an earlier one fails; the first failure is
    /// returned. Fails with [`LoggerError::LoggerDisabled`] after
    /// [`disable`](Logger::disable).
    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        if sinks.closed {
            return Err(LoggerError::LoggerDisabled);
        }

        let mut first_error = None;
        for appender in sinks.appenders.iter_mut() {
            if let Err(e) = appender.flush() {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Flush and close every sink. Records logged afterwards are dropped.
    ///
    /// Calling this again is a no-op. Every sink is closed even if an
    /// earlier one fails; the first failure is returned.
    pub fn disable(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        if sinks.closed {
            return Ok(());
        }
        sinks.closed = true;

        let mut first_error = None;
        for mut appender in sinks.appenders.drain(..) {
            if let Err(e) = appender.close() {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Log at DEBUG. Reports the caller's file and line, not its function.
    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    /// Log at INFO. Reports the caller's file and line, not its function.
    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log at WARNING. Reports the caller's file and line, not its function.
    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Log at WARNING. Reports the caller's file and line, not its function.
    #[inline]
    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    /// Log at ERROR. Reports the caller's file and line, not its function.
    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Log at CRITICAL. Reports the caller's file and line, not its function.
    #[inline]
    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) {
        self.log(LogLevel::Critical, message);
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.is_disabled() {
            return;
        }
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Serializable logger settings
///
/// # Example
///
/// ```
/// use callsite_logger::{Logger, LoggerConfig};
///
/// let config = LoggerConfig {
///     verbose: true,
///     ..LoggerConfig::default()
/// };
/// let logger = Logger::builder().config(config).build().unwrap();
/// assert!(logger.is_verbose());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub verbose: bool,
    pub debug: bool,
    pub filename: Option<PathBuf>,
}

impl LoggerConfig {
    pub fn mode(&self) -> Mode {
        Mode::from_flags(self.verbose, self.debug)
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use callsite_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .verbose(true)
///     .stream(Stream::Stderr)
///     .build()
///     .unwrap();
/// assert_eq!(logger.min_level(), LogLevel::Info);
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    stream: Stream,
    min_level: Option<LogLevel>,
    appenders: Vec<Box<dyn Appender>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            config: LoggerConfig::default(),
            stream: Stream::Stdout,
            min_level: None,
            appenders: Vec::new(),
        }
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self::new().config(config)
    }

    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Also write to this file, in append mode
    #[must_use = "builder methods return a new value"]
    pub fn filename(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.filename = Some(path.into());
        self
    }

    /// Console stream, stdout by default
    #[must_use = "builder methods return a new value"]
    pub fn stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }

    /// Override the threshold derived from the mode
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Add an extra appender after the console and file sinks
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appenders.push(Box::new(appender));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Result<Logger> {
        let mut logger = Logger::new(
            self.config.verbose,
            self.config.debug,
            self.config.filename.as_deref(),
            self.stream,
        )?;

        if let Some(level) = self.min_level {
            logger.set_min_level(level);
        }
        for appender in self.appenders {
            logger.add_appender(appender);
        }

        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
