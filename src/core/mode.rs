//! Output mode selection
//!
//! The mode decides both the record layout and the minimum level that is let
//! through. It is derived from two flags, `verbose` and `debug`, with `debug`
//! taking precedence.

use super::error::LoggerError;
use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formatting/verbosity mode of a logger
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Message text only, warnings and above
    ///
    /// Example: `disk almost full`
    #[default]
    Plain,

    /// Level name and message, info and above
    ///
    /// Example: `WARNING  disk almost full`
    Verbose,

    /// Level, timestamp and call site, everything
    ///
    /// Example: `WARNING   2024-01-02 03:04:05,123  main.rs              42     check_disk                       disk almost full`
    Debug,
}

impl Mode {
    /// Resolve the mode from the two configuration flags.
    #[must_use]
    pub fn from_flags(verbose: bool, debug: bool) -> Self {
        if debug {
            Mode::Debug
        } else if verbose {
            Mode::Verbose
        } else {
            Mode::Plain
        }
    }

    /// Minimum level emitted in this mode
    #[must_use]
    pub fn min_level(&self) -> LogLevel {
        match self {
            Mode::Plain => LogLevel::Warning,
            Mode::Verbose => LogLevel::Info,
            Mode::Debug => LogLevel::Debug,
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Mode::Plain => "plain",
            Mode::Verbose => "verbose",
            Mode::Debug => "debug",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_str())
    }
}

impl FromStr for Mode {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Mode::Plain),
            "verbose" => Ok(Mode::Verbose),
            "debug" => Ok(Mode::Debug),
            _ => Err(LoggerError::config("Mode", format!("Invalid mode: '{}'", s))),
        }
    }
}
