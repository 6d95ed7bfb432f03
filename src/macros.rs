//! The assume and check macro families.
//!
//! Every public macro accepts an optional reporter prefix and optional
//! trailing context in `format!` syntax:
//!
//! ```text
//! assume_eq!(a, b);
//! assume_eq!(a, b, "while merging {} into {}", src, dst);
//! assume_eq!(in &reporter; a, b);
//! assume_eq!(in &reporter; a, b, "while merging {}", src);
//! ```
//!
//! Internally they all route through `__assume!`, which picks the reporter and
//! splits operands from context, and `__assume_kind!`, which binds each operand
//! exactly once and computes the verdict for one kind.

/// `true` when assumptions in the calling crate run full checks.
///
/// That is the case when the calling crate is compiled with
/// `debug_assertions`, or when this crate's `check-assumptions` feature is on.
#[macro_export]
macro_rules! checks_enabled {
    () => {
        (::core::cfg!(debug_assertions) || $crate::evaluate::FORCE_CHECKS)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assume {
    (unary $kind:ident [$($p:tt)*] in $r:expr; $($rest:tt)*) => {
        $crate::__assume!(@unary $kind [$($p)*] ($r) $($rest)*)
    };
    (binary $kind:ident [$($p:tt)*] in $r:expr; $($rest:tt)*) => {
        $crate::__assume!(@binary $kind [$($p)*] ($r) $($rest)*)
    };
    (unary $kind:ident [$($p:tt)*] $($rest:tt)*) => {
        $crate::__assume!(@unary $kind [$($p)*] ($crate::report::default_reporter()) $($rest)*)
    };
    (binary $kind:ident [$($p:tt)*] $($rest:tt)*) => {
        $crate::__assume!(@binary $kind [$($p)*] ($crate::report::default_reporter()) $($rest)*)
    };

    (@unary $kind:ident [$($p:tt)*] ($r:expr) $e:expr $(,)?) => {
        $crate::__assume_kind!($kind [$($p)*] ($r) ($e) ())
    };
    (@unary $kind:ident [$($p:tt)*] ($r:expr) $e:expr, $($arg:tt)+) => {
        $crate::__assume_kind!($kind [$($p)*] ($r) ($e) ($($arg)+))
    };
    (@binary $kind:ident [$($p:tt)*] ($r:expr) $a:expr, $b:expr $(,)?) => {
        $crate::__assume_kind!($kind [$($p)*] ($r) ($a, $b) ())
    };
    (@binary $kind:ident [$($p:tt)*] ($r:expr) $a:expr, $b:expr, $($arg:tt)+) => {
        $crate::__assume_kind!($kind [$($p)*] ($r) ($a, $b) ($($arg)+))
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assume_kind {
    (truthy [] ($r:expr) ($e:expr) ($($arg:tt)*)) => {
        match $e {
            value => {
                let value: bool = value;
                $crate::__assume_verdict!(($r) value, $crate::failure::AssumptionFailure::new(
                    $crate::failure::AssumptionKind::True,
                    $crate::__location!(),
                    ::core::concat!(::core::stringify!($e), " will evaluate to true"),
                    ::std::vec![$crate::failure::NamedValue::new(
                        ::core::stringify!($e),
                        $crate::render!(value),
                    )],
                    $crate::__context!($($arg)*),
                ))
            }
        }
    };

    (null [] ($r:expr) ($e:expr) ($($arg:tt)*)) => {
        match &$e {
            value => {
                let verdict = $crate::predicate::Nullable::is_null(value);
                $crate::__assume_verdict!(($r) verdict, $crate::failure::AssumptionFailure::new(
                    $crate::failure::AssumptionKind::Null,
                    $crate::__location!(),
                    ::core::concat!(::core::stringify!($e), " will be null"),
                    ::std::vec![$crate::failure::NamedValue::new(
                        ::core::stringify!($e),
                        $crate::predicate::Nullable::address(value),
                    )],
                    $crate::__context!($($arg)*),
                ))
            }
        }
    };

    (not_null [] ($r:expr) ($e:expr) ($($arg:tt)*)) => {
        match &$e {
            value => {
                let verdict = !$crate::predicate::Nullable::is_null(value);
                $crate::__assume_verdict!(($r) verdict, $crate::failure::AssumptionFailure::new(
                    $crate::failure::AssumptionKind::NotNull,
                    $crate::__location!(),
                    ::core::concat!(::core::stringify!($e), " will not be null"),
                    ::std::vec![$crate::failure::NamedValue::new(
                        ::core::stringify!($e),
                        $crate::predicate::Nullable::address(value),
                    )],
                    $crate::__context!($($arg)*),
                ))
            }
        }
    };

    (compare [$op:tt, $text:literal] ($r:expr) ($a:expr, $b:expr) ($($arg:tt)*)) => {
        match (&$a, &$b) {
            (lhs, rhs) => {
                let verdict = *lhs $op *rhs;
                $crate::__assume_verdict!(($r) verdict, $crate::failure::AssumptionFailure::new(
                    $crate::failure::AssumptionKind::Compare {
                        operator: ::core::stringify!($op),
                    },
                    $crate::__location!(),
                    ::core::concat!(
                        ::core::stringify!($a), " will ", $text, " ", ::core::stringify!($b)
                    ),
                    ::std::vec![
                        $crate::failure::NamedValue::new(::core::stringify!($a), $crate::render!(*lhs)),
                        $crate::failure::NamedValue::new(::core::stringify!($b), $crate::render!(*rhs)),
                    ],
                    $crate::__context!($($arg)*),
                ))
            }
        }
    };

    (zero [] ($r:expr) ($e:expr) ($($arg:tt)*)) => {
        $crate::__assume_kind!(compare [==, "be equal to"] ($r) ($e, 0) ($($arg)*))
    };

    (empty [] ($r:expr) ($e:expr) ($($arg:tt)*)) => {
        match &$e {
            value => {
                let size = $crate::predicate::Size::size(value);
                let verdict = size == 0;
                $crate::__assume_verdict!(($r) verdict, $crate::failure::AssumptionFailure::new(
                    $crate::failure::AssumptionKind::Empty,
                    $crate::__location!(),
                    ::core::concat!(::core::stringify!($e), " will be empty"),
                    ::std::vec![$crate::failure::NamedValue::new(
                        ::core::concat!("size of ", ::core::stringify!($e)),
                        ::std::string::ToString::to_string(&size),
                    )],
                    $crate::__context!($($arg)*),
                ))
            }
        }
    };

    (not_empty [] ($r:expr) ($e:expr) ($($arg:tt)*)) => {
        match &$e {
            value => {
                let size = $crate::predicate::Size::size(value);
                let verdict = size != 0;
                $crate::__assume_verdict!(($r) verdict, $crate::failure::AssumptionFailure::new(
                    $crate::failure::AssumptionKind::NotEmpty,
                    $crate::__location!(),
                    ::core::concat!(::core::stringify!($e), " will not be empty"),
                    ::std::vec![$crate::failure::NamedValue::new(
                        ::core::concat!("size of ", ::core::stringify!($e)),
                        ::std::string::ToString::to_string(&size),
                    )],
                    $crate::__context!($($arg)*),
                ))
            }
        }
    };

    (null_or_empty [] ($r:expr) ($e:expr) ($($arg:tt)*)) => {
        match &$e {
            value => {
                let verdict = $crate::predicate::NullOrEmpty::is_null_or_empty(value);
                $crate::__assume_verdict!(($r) verdict, $crate::failure::AssumptionFailure::new(
                    $crate::failure::AssumptionKind::NullOrEmpty,
                    $crate::__location!(),
                    ::core::concat!(::core::stringify!($e), " will be null or empty"),
                    ::std::vec![$crate::failure::NamedValue::new(
                        ::core::stringify!($e),
                        $crate::predicate::NullOrEmpty::describe(value),
                    )],
                    $crate::__context!($($arg)*),
                ))
            }
        }
    };

    (not_null_or_empty [] ($r:expr) ($e:expr) ($($arg:tt)*)) => {
        match &$e {
            value => {
                let verdict = !$crate::predicate::NullOrEmpty::is_null_or_empty(value);
                $crate::__assume_verdict!(($r) verdict, $crate::failure::AssumptionFailure::new(
                    $crate::failure::AssumptionKind::NotNullOrEmpty,
                    $crate::__location!(),
                    ::core::concat!(::core::stringify!($e), " will not be null or empty"),
                    ::std::vec![$crate::failure::NamedValue::new(
                        ::core::stringify!($e),
                        $crate::predicate::NullOrEmpty::describe(value),
                    )],
                    $crate::__context!($($arg)*),
                ))
            }
        }
    };

    (valid_index [] ($r:expr) ($index:expr, $container:expr) ($($arg:tt)*)) => {
        match (&$index, &$container) {
            (index, container) => {
                let size = $crate::predicate::Size::size(container);
                let verdict = $crate::predicate::is_valid_index(*index, size);
                $crate::__assume_verdict!(($r) verdict, $crate::failure::AssumptionFailure::new(
                    $crate::failure::AssumptionKind::ValidIndex,
                    $crate::__location!(),
                    ::core::concat!(
                        ::core::stringify!($index), " will be a valid index to ",
                        ::core::stringify!($container)
                    ),
                    ::std::vec![
                        $crate::failure::NamedValue::new(
                            ::core::stringify!($index),
                            $crate::render!(*index),
                        ),
                        $crate::failure::NamedValue::new(
                            ::core::concat!("size of ", ::core::stringify!($container)),
                            ::std::string::ToString::to_string(&size),
                        ),
                    ],
                    $crate::__context!($($arg)*),
                ))
            }
        }
    };
}

/// Reports when checks are on, hints the optimizer otherwise.
#[doc(hidden)]
#[macro_export]
macro_rules! __assume_verdict {
    (($r:expr) $verdict:ident, $failure:expr) => {
        if $crate::checks_enabled!() {
            $crate::evaluate::evaluate($r, $verdict, || $failure)
        } else {
            $crate::evaluate::assume_unchecked($verdict)
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __location {
    () => {
        $crate::location::SourceLocation::new(
            ::core::line!(),
            ::core::column!(),
            ::core::file!(),
            $crate::function_name!(),
        )
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __context {
    () => {
        ::std::string::String::new()
    };
    ($($arg:tt)+) => {
        ::std::format!($($arg)+)
    };
}

// ---------------------------------------------------------------------------
// Assume family: checked in debug builds, optimizer hints otherwise.

/// Assumes a `bool` condition is `true`.
///
/// With checks disabled the condition becomes a `core::hint::assert_unchecked`
/// hint, so a false condition in an optimized build is undefined behavior.
/// Use [`check!`] for conditions that may legitimately fail.
///
/// ```
/// use assuming::{assume, report::RecordingReporter};
///
/// let reporter = RecordingReporter::new();
/// let ready = false;
/// assume!(in &reporter; ready, "worker {} not ready", 3);
///
/// let failure = reporter.last().unwrap();
/// assert_eq!(failure.expectation, "ready will evaluate to true");
/// assert_eq!(failure.value("ready"), Some("false"));
/// assert_eq!(failure.context, "worker 3 not ready");
/// ```
#[macro_export]
macro_rules! assume {
    ($($t:tt)+) => { $crate::__assume!(unary truthy [] $($t)+) };
}

/// Assumes a pointer-like value is null (or `None`).
#[macro_export]
macro_rules! assume_null {
    ($($t:tt)+) => { $crate::__assume!(unary null [] $($t)+) };
}

/// Assumes a pointer-like value is not null (or `Some`).
#[macro_export]
macro_rules! assume_not_null {
    ($($t:tt)+) => { $crate::__assume!(unary not_null [] $($t)+) };
}

/// Assumes `a == b`.
///
/// ```
/// use assuming::{assume_eq, report::RecordingReporter};
///
/// let reporter = RecordingReporter::new();
/// let (lhs, rhs) = (f64::from(5), 6.0);
/// assume_eq!(in &reporter; lhs, rhs);
///
/// let failure = reporter.last().unwrap();
/// assert_eq!(failure.expectation, "lhs will be equal to rhs");
/// assert_eq!(failure.value("lhs"), Some("5"));
/// assert_eq!(failure.value("rhs"), Some("6"));
/// ```
#[macro_export]
macro_rules! assume_eq {
    ($($t:tt)+) => { $crate::__assume!(binary compare [==, "be equal to"] $($t)+) };
}

/// Assumes `a != b`.
#[macro_export]
macro_rules! assume_ne {
    ($($t:tt)+) => { $crate::__assume!(binary compare [!=, "not be equal to"] $($t)+) };
}

/// Assumes `a > b`.
#[macro_export]
macro_rules! assume_gt {
    ($($t:tt)+) => { $crate::__assume!(binary compare [>, "be greater than"] $($t)+) };
}

/// Assumes `a < b`.
#[macro_export]
macro_rules! assume_lt {
    ($($t:tt)+) => { $crate::__assume!(binary compare [<, "be less than"] $($t)+) };
}

/// Assumes `a >= b`.
#[macro_export]
macro_rules! assume_ge {
    ($($t:tt)+) => { $crate::__assume!(binary compare [>=, "be greater or equal to"] $($t)+) };
}

/// Assumes `a <= b`.
#[macro_export]
macro_rules! assume_le {
    ($($t:tt)+) => { $crate::__assume!(binary compare [<=, "be less or equal to"] $($t)+) };
}

/// Assumes an integer is zero.
#[macro_export]
macro_rules! assume_zero {
    ($($t:tt)+) => { $crate::__assume!(unary zero [] $($t)+) };
}

/// Assumes `a <op> b` for any comparison operator, described by `text`.
///
/// ```
/// use assuming::{assume_binop, report::RecordingReporter};
///
/// let reporter = RecordingReporter::new();
/// let (used, cap) = (9_u32, 8_u32);
/// assume_binop!(in &reporter; used, cap, <=, "fit within");
/// assert_eq!(reporter.last().unwrap().expectation, "used will fit within cap");
/// ```
#[macro_export]
macro_rules! assume_binop {
    (in $r:expr; $a:expr, $b:expr, $op:tt, $text:literal $(, $($arg:tt)*)?) => {
        $crate::__assume!(binary compare [$op, $text] in $r; $a, $b $(, $($arg)*)?)
    };
    ($a:expr, $b:expr, $op:tt, $text:literal $(, $($arg:tt)*)?) => {
        $crate::__assume!(binary compare [$op, $text] $a, $b $(, $($arg)*)?)
    };
}

/// Assumes a sized value has no elements. Reports the size, not the contents.
#[macro_export]
macro_rules! assume_empty {
    ($($t:tt)+) => { $crate::__assume!(unary empty [] $($t)+) };
}

/// Assumes a sized value has at least one element.
#[macro_export]
macro_rules! assume_not_empty {
    ($($t:tt)+) => { $crate::__assume!(unary not_empty [] $($t)+) };
}

/// Assumes a value is null, `None`, or empty.
#[macro_export]
macro_rules! assume_null_or_empty {
    ($($t:tt)+) => { $crate::__assume!(unary null_or_empty [] $($t)+) };
}

/// Assumes a value is neither null, `None`, nor empty.
///
/// ```
/// use assuming::{assume_not_null_or_empty, report::RecordingReporter};
///
/// let reporter = RecordingReporter::new();
/// let name: Option<&str> = None;
/// assume_not_null_or_empty!(in &reporter; name);
/// assert_eq!(reporter.last().unwrap().value("name"), Some("(null)"));
/// ```
#[macro_export]
macro_rules! assume_not_null_or_empty {
    ($($t:tt)+) => { $crate::__assume!(unary not_null_or_empty [] $($t)+) };
}

/// Assumes `0 <= index < container.size()`.
///
/// Reports the index and the container's size.
#[macro_export]
macro_rules! assume_valid_index {
    ($($t:tt)+) => { $crate::__assume!(binary valid_index [] $($t)+) };
}

// ---------------------------------------------------------------------------
// Check family: checked in debug builds, compiled out otherwise.
//
// With checks disabled the operands are still type-checked but never
// evaluated, and no hint is emitted.

/// Like [`assume!`], but does nothing at all when checks are disabled.
#[macro_export]
macro_rules! check {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume!($($t)+) } };
}

/// Like [`assume_null!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_null {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_null!($($t)+) } };
}

/// Like [`assume_not_null!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_not_null {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_not_null!($($t)+) } };
}

/// Like [`assume_eq!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_eq {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_eq!($($t)+) } };
}

/// Like [`assume_ne!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_ne {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_ne!($($t)+) } };
}

/// Like [`assume_gt!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_gt {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_gt!($($t)+) } };
}

/// Like [`assume_lt!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_lt {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_lt!($($t)+) } };
}

/// Like [`assume_ge!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_ge {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_ge!($($t)+) } };
}

/// Like [`assume_le!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_le {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_le!($($t)+) } };
}

/// Like [`assume_zero!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_zero {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_zero!($($t)+) } };
}

/// Like [`assume_binop!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_binop {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_binop!($($t)+) } };
}

/// Like [`assume_empty!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_empty {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_empty!($($t)+) } };
}

/// Like [`assume_not_empty!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_not_empty {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_not_empty!($($t)+) } };
}

/// Like [`assume_null_or_empty!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_null_or_empty {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_null_or_empty!($($t)+) } };
}

/// Like [`assume_not_null_or_empty!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_not_null_or_empty {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_not_null_or_empty!($($t)+) } };
}

/// Like [`assume_valid_index!`], compiled out when checks are disabled.
#[macro_export]
macro_rules! check_valid_index {
    ($($t:tt)+) => { if $crate::checks_enabled!() { $crate::assume_valid_index!($($t)+) } };
}
