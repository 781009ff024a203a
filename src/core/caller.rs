//! Call-site metadata attached to every record
//!
//! A [`CallerInfo`] is built at the public entry point that emits a record,
//! either by the logging macros (`file!()`, `line!()` and the enclosing
//! function) or from the `#[track_caller]` location of a logger method. It is
//! then passed down by value, so internal helpers never shift the reported
//! location.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Function name reported when only a file/line location is known
pub const UNKNOWN_FUNCTION: &str = "(unknown function)";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallerInfo {
    file: Cow<'static, str>,
    line: u32,
    function: Cow<'static, str>,
}

impl CallerInfo {
    /// Build caller info from a source path, line and function name.
    ///
    /// Only the basename of `file` is kept. A line of 0 is raised to 1.
    pub fn new(
        file: impl Into<Cow<'static, str>>,
        line: u32,
        function: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            file: basename(file.into()),
            line: line.max(1),
            function: function.into(),
        }
    }

    /// Caller info for a `#[track_caller]` location; the function is unknown.
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), UNKNOWN_FUNCTION)
    }

    /// Location of the caller of the current `#[track_caller]` function.
    #[track_caller]
    pub fn here() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn function(&self) -> &str {
        &self.function
    }
}

impl fmt::Display for CallerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} in {}", self.file, self.line, self.function)
    }
}

fn basename(path: Cow<'static, str>) -> Cow<'static, str> {
    match path {
        Cow::Borrowed(p) => Cow::Borrowed(last_component(p)),
        Cow::Owned(p) => Cow::Owned(last_component(&p).to_string()),
    }
}

fn last_component(path: &str) -> &str {
    // file!() uses the host separator, so accept both
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Reduce a `std::any::type_name` path of a marker fn nested in a function to
/// the bare function name.
///
/// `my_crate::net::connect::__marker` becomes `connect`, closures are skipped
/// so `my_crate::main::{{closure}}::__marker` becomes `main`. Used by
/// [`function_name!`](crate::function_name).
#[doc(hidden)]
pub fn function_from_type_name(type_name: &'static str) -> &'static str {
    let mut path = type_name;
    if let Some(pos) = path.rfind("::") {
        // drop the marker itself
        path = &path[..pos];
    }
    while let Some(stripped) = path.strip_suffix("::{{closure}}") {
        path = stripped;
    }
    path.rsplit("::").next().unwrap_or(path)
}
