//! Logging macros for ergonomic log message formatting.
//!
//! Every level macro captures the call site (file, line and enclosing
//! function) where it is written and passes it down explicitly, so the
//! reported location never depends on how many helpers sit in between.
//!
//! Each macro has two forms:
//!
//! - `info!("fmt", args..)` logs through the process-wide logger started with
//!   [`global::start_logging`](crate::global::start_logging), and does
//!   nothing if logging has not been started.
//! - `info!(logger, "fmt", args..)` logs through the given [`Logger`](crate::Logger).
//!
//! # Examples
//!
//! ```
//! use callsite_logger::prelude::*;
//! use callsite_logger::{info, warn};
//!
//! let logger = Logger::builder().verbose(true).build().unwrap();
//!
//! // Object form
//! info!(logger, "Server started");
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Global form, silent until logging is started
//! warn!("nobody is listening yet");
//! ```

/// Name of the function this macro is expanded in.
///
/// Closures report their enclosing function.
///
/// ```
/// fn handler() -> &'static str {
///     callsite_logger::function_name!()
/// }
/// assert_eq!(handler(), "handler");
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __marker() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::core::caller::function_from_type_name(__type_name_of(__marker))
    }};
}

/// [`CallerInfo`](crate::CallerInfo) for the place this macro is written.
#[macro_export]
macro_rules! caller {
    () => {
        $crate::CallerInfo::new(::std::file!(), ::std::line!(), $crate::function_name!())
    };
}

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use callsite_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use callsite_logger::log;
/// log!(logger, LogLevel::Warning, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// log!(LogLevel::Info, "to the global logger");
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $($rest:tt)*) => {
        $crate::global::log_at(
            $level,
            $crate::caller!(),
            ::std::format_args!($fmt $($rest)*),
        )
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let __logger = &$logger;
        let __level = $level;
        if __logger.enabled(__level) {
            __logger.log_at(__level, $crate::caller!(), ::std::format!($($arg)+));
        }
    }};
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use callsite_logger::prelude::*;
/// # let logger = Logger::builder().debug(true).build().unwrap();
/// use callsite_logger::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($rest:tt)*) => {
        $crate::log!($crate::LogLevel::Debug, $fmt $($rest)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use callsite_logger::prelude::*;
/// # let logger = Logger::builder().verbose(true).build().unwrap();
/// use callsite_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($rest:tt)*) => {
        $crate::log!($crate::LogLevel::Info, $fmt $($rest)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use callsite_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use callsite_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($rest:tt)*) => {
        $crate::log!($crate::LogLevel::Warning, $fmt $($rest)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Alias of [`warn!`].
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::warn!($($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use callsite_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use callsite_logger::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($rest:tt)*) => {
        $crate::log!($crate::LogLevel::Error, $fmt $($rest)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// # Examples
///
/// ```
/// # use callsite_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use callsite_logger::critical;
/// critical!(logger, "Critical system failure");
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($fmt:literal $($rest:tt)*) => {
        $crate::log!($crate::LogLevel::Critical, $fmt $($rest)*)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log an error and its source chain at error level.
///
/// The error goes before a `;`, the message after it.
///
/// # Examples
///
/// ```
/// # use callsite_logger::prelude::*;
/// # let logger = Logger::builder().build().unwrap();
/// use callsite_logger::exception;
/// let err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
/// exception!(logger, err; "Saving {} failed", "state.db");
/// exception!(err; "to the global logger");
/// ```
#[macro_export]
macro_rules! exception {
    ($logger:expr, $err:expr; $($arg:tt)+) => {{
        let __logger = &$logger;
        if __logger.enabled($crate::LogLevel::Error) {
            __logger.exception_at($crate::caller!(), ::std::format!($($arg)+), &$err);
        }
    }};
    ($err:expr; $($arg:tt)+) => {
        $crate::global::exception_at(
            $crate::caller!(),
            &$err,
            ::std::format_args!($($arg)+),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::appenders::Stream;
    use crate::core::{LogLevel, Logger};
    use crate::global::test_support::Buffer;
    use crate::global::{self, TEST_LOCK};

    fn debug_logger(buffer: &Buffer) -> Logger {
        Logger::builder()
            .debug(true)
            .stream(Stream::writer(buffer.clone()))
            .build()
            .expect("logger")
    }

    /// Split one DEBUG layout line into (level, file, line, function, message)
    fn fields(line: &str) -> (String, String, String, String, String) {
        let level = line[..8].trim_end().to_string();
        let rest = &line[8 + 2 + 23 + 2..];
        let file = rest[..20].trim_end().to_string();
        let line_no = rest[21..27].trim_end().to_string();
        let function = rest[28..60].trim_end().to_string();
        let message = rest[61..].to_string();
        (level, file, line_no, function, message)
    }

    #[test]
    fn test_log_macro() {
        let buffer = Buffer::default();
        let logger = debug_logger(&buffer);
        log!(logger, LogLevel::Info, "Test message");
        log!(logger, LogLevel::Info, "Formatted: {}", 42);

        let output = buffer.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(fields(lines[1]).4, "Formatted: 42");
    }

    #[test]
    fn test_object_form_call_site() {
        let buffer = Buffer::default();
        let logger = debug_logger(&buffer);
        let line = line!() + 1;
        error!(logger, "Code: {}", 500);

        let output = buffer.contents();
        let (level, file, line_no, function, message) = fields(output.trim_end());
        assert_eq!(level, "ERROR");
        assert_eq!(file, "macros.rs");
        assert_eq!(line_no, line.to_string());
        assert_eq!(function, "test_object_form_call_site");
        assert_eq!(message, "Code: 500");
    }

    #[test]
    fn test_filtered_level_skips_formatting() {
        let buffer = Buffer::default();
        let logger = Logger::builder()
            .stream(Stream::writer(buffer.clone()))
            .build()
            .expect("logger");

        struct Panics;
        impl std::fmt::Display for Panics {
            fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                panic!("formatted a filtered record");
            }
        }

        debug!(logger, "{}", Panics);
        info!(logger, "{}", Panics);
        warning!(logger, "plain {}", "warning");
        assert_eq!(buffer.contents(), "plain warning\n");
    }

    #[test]
    fn test_global_form() {
        let _guard = TEST_LOCK.lock();
        let buffer = Buffer::default();
        global::install(debug_logger(&buffer));

        let line = line!() + 1;
        critical!("global {}", 1);
        global::stop_logging();
        critical!("after stop");

        let output = buffer.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1);
        let (level, file, line_no, function, message) = fields(lines[0]);
        assert_eq!(level, "CRITICAL");
        assert_eq!(file, "macros.rs");
        assert_eq!(line_no, line.to_string());
        assert_eq!(function, "test_global_form");
        assert_eq!(message, "global 1");
    }

    #[test]
    fn test_exception_macro() {
        let buffer = Buffer::default();
        let logger = Logger::builder()
            .verbose(true)
            .stream(Stream::writer(buffer.clone()))
            .build()
            .expect("logger");
        let err = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        exception!(logger, err; "saving {}", "state");

        assert_eq!(
            buffer.contents(),
            "ERROR    saving state\n! Error: disk gone\n"
        );
    }
}
