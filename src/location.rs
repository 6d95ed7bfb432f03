//! Call-site capture for failing assumptions.
//!
//! A [`SourceLocation`] is built on the failure path only, from `line!()`,
//! `column!()`, `file!()` and [`function_name!`](crate::function_name).

use std::fmt;

use serde::Serialize;

/// Where an assumption was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
    pub file: &'static str,
    /// Path of the enclosing function, e.g. `my_crate::parser::next_token`.
    pub function: &'static str,
}

impl SourceLocation {
    pub const fn new(line: u32, column: u32, file: &'static str, function: &'static str) -> Self {
        Self {
            line,
            column,
            file,
            function,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{} in {}", self.file, self.line, self.column, self.function)
    }
}

/// Strips the marker item and any closure segments from a type path produced
/// by [`function_name!`](crate::function_name).
#[doc(hidden)]
pub fn enclosing_function(marker_path: &'static str) -> &'static str {
    let mut path = marker_path
        .strip_suffix("::__assuming_here")
        .unwrap_or(marker_path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    path
}

/// Expands to the path of the enclosing function as a `&'static str`.
///
/// Closures are attributed to the function that defines them.
///
/// ```
/// fn parse() -> &'static str {
///     assuming::function_name!()
/// }
/// assert!(parse().ends_with("parse"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __assuming_here() {}
        $crate::location::enclosing_function(::core::any::type_name_of_val(&__assuming_here))
    }};
}
