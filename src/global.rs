//! Process-wide logger
//!
//! A thin layer over one optional [`Logger`] shared by the whole process. It
//! backs the global form of the logging macros (`info!("...")` without a
//! logger argument) and the exit helpers.
//!
//! Until [`start_logging`] (or [`install`]) is called, and again after
//! [`stop_logging`], every record sent here is discarded without error.

use crate::appenders::Stream;
use crate::core::{CallerInfo, Formatter, LogLevel, LogRecord, Logger, Result};
use parking_lot::RwLock;
use std::error::Error;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

/// Exit code used by [`abort`]
pub const ABORT_EXIT_CODE: i32 = 1;

struct State {
    verbose: bool,
    debug: bool,
    logger: Option<Logger>,
}

static STATE: RwLock<State> = parking_lot::const_rwlock(State {
    verbose: false,
    debug: false,
    logger: None,
});

/// Start logging to stdout (and `filename`, if given) with the mode
/// resolved from `verbose` and `debug`.
///
/// Replaces any logger started earlier; the old one is disabled first so no
/// record is written twice.
pub fn start_logging(verbose: bool, debug: bool, filename: Option<&Path>) -> Result<()> {
    let logger = Logger::new(verbose, debug, filename, Stream::Stdout)?;
    install(logger);
    Ok(())
}

/// Make `logger` the process-wide logger, disabling the previous one.
pub fn install(logger: Logger) {
    let mut state = STATE.write();
    if let Some(previous) = state.logger.take() {
        if let Err(e) = previous.disable() {
            eprintln!("[LOGGER ERROR] Failed to disable previous logger: {}", e);
        }
    }
    state.verbose = logger.is_verbose();
    state.debug = logger.is_debug();
    state.logger = Some(logger);
}

/// Disable and drop the process-wide logger. Safe to call at any time.
pub fn stop_logging() {
    let previous = {
        let mut state = STATE.write();
        state.verbose = false;
        state.debug = false;
        state.logger.take()
    };

    if let Some(logger) = previous {
        if let Err(e) = logger.disable() {
            eprintln!("[LOGGER ERROR] Failed to disable logger: {}", e);
        }
    }
}

pub fn is_logging() -> bool {
    STATE.read().logger.is_some()
}

pub fn verbose_enabled() -> bool {
    STATE.read().verbose
}

pub fn debug_enabled() -> bool {
    STATE.read().debug
}

/// Run `f` with the process-wide logger, if one is active.
pub fn with_logger<R>(f: impl FnOnce(&Logger) -> R) -> Option<R> {
    STATE.read().logger.as_ref().map(f)
}

/// Log through the process-wide logger; see the level macros.
///
/// `args` is only formatted when the record passes the threshold.
pub fn log_at(level: LogLevel, caller: CallerInfo, args: fmt::Arguments<'_>) {
    with_logger(|logger| {
        if logger.enabled(level) {
            logger.dispatch(LogRecord::new(level, args.to_string(), caller));
        }
    });
}

/// Log `error` at ERROR level through the process-wide logger.
pub fn exception_at(caller: CallerInfo, error: &dyn Error, args: fmt::Arguments<'_>) {
    with_logger(|logger| {
        if logger.enabled(LogLevel::Error) {
            let record = LogRecord::new(LogLevel::Error, args.to_string(), caller)
                .with_trace(Formatter::describe_error(error));
            logger.dispatch(record);
        }
    });
}

/// Flush the process stdout and stderr streams.
pub fn flush() {
    // Nothing sensible to do if the terminal is gone
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();
}

/// Options for [`exit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOptions {
    /// Attach the current stack trace to the exit record
    pub stacktrace: bool,
    /// Flush the logger and the standard streams before exiting
    pub flush_output: bool,
    pub exit_code: i32,
}

impl Default for ExitOptions {
    fn default() -> Self {
        Self {
            stacktrace: false,
            flush_output: true,
            exit_code: 0,
        }
    }
}

/// Options for [`abort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbortOptions {
    pub stacktrace: bool,
    pub flush_output: bool,
}

impl Default for AbortOptions {
    fn default() -> Self {
        Self {
            stacktrace: true,
            flush_output: true,
        }
    }
}

/// Log `message` at INFO and terminate the process with
/// `options.exit_code`.
#[track_caller]
pub fn exit(message: &str, options: ExitOptions) -> ! {
    exit_at(CallerInfo::here(), message, options)
}

pub fn exit_at(caller: CallerInfo, message: &str, options: ExitOptions) -> ! {
    prepare_exit(
        LogLevel::Info,
        caller,
        message,
        options.stacktrace,
        options.flush_output,
    );
    std::process::exit(options.exit_code)
}

/// Log `message` at CRITICAL and terminate the process with exit code 1.
#[track_caller]
pub fn abort(message: &str, options: AbortOptions) -> ! {
    abort_at(CallerInfo::here(), message, options)
}

pub fn abort_at(caller: CallerInfo, message: &str, options: AbortOptions) -> ! {
    prepare_exit(
        LogLevel::Critical,
        caller,
        message,
        options.stacktrace,
        options.flush_output,
    );
    std::process::exit(ABORT_EXIT_CODE)
}

/// Everything [`exit_at`] and [`abort_at`] do short of terminating.
fn prepare_exit(
    level: LogLevel,
    caller: CallerInfo,
    message: &str,
    stacktrace: bool,
    flush_output: bool,
) {
    with_logger(|logger| {
        if stacktrace {
            logger.backtrace_at(level, caller, message);
        } else {
            logger.log_at(level, caller, message);
        }
        if flush_output {
            if let Err(e) = logger.flush() {
                eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
            }
        }
    });
    if flush_output {
        flush();
    }
}

#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
