#![cfg_attr(docsrs, feature(doc_cfg))]
//! # assuming
//!
//! assuming provides assertion macros that, when a condition fails, capture
//! the failing expression's source text, the already-evaluated operand values,
//! the call site (file, line, column, enclosing function) and optional
//! `format!`-style context, and hand that bundle to a [`Reporter`].
//!
//! ## Families
//! - **assume** (`assume!`, `assume_eq!`, `assume_valid_index!`, …): full checks
//!   in debug builds; in optimized builds the condition becomes an optimizer
//!   hint (`core::hint::assert_unchecked`). A false assumption in an optimized
//!   build is undefined behavior.
//! - **check** (`check!`, `check_eq!`, …): full checks in debug builds;
//!   compiled out entirely in optimized builds (operands are type-checked but
//!   never evaluated).
//!
//! Checks are active when the *calling* crate has `debug_assertions`, or when
//! this crate's `check-assumptions` feature is enabled. See
//! [`checks_enabled!`].
//!
//! ## Guarantees
//! - Every operand expression is evaluated exactly once, pass or fail.
//! - Operands are only borrowed: move-only types work and nothing is copied.
//! - A passing assumption never formats anything or calls the reporter.
//! - A failing assumption calls the reporter exactly once, synchronously, and
//!   then returns. Whether execution continues is up to the reporter.
//!
//! ## Kinds
//!
//! | macro                      | verdict                         | named values             |
//! |----------------------------|---------------------------------|--------------------------|
//! | `assume!`                  | `cond`                          | `cond`                   |
//! | `assume_null!`             | pointer is null / `None`        | address                  |
//! | `assume_not_null!`         | pointer is not null             | address                  |
//! | `assume_eq!` … `assume_le!`| `a op b`                        | `a`, `b`                 |
//! | `assume_zero!`             | `a == 0`                        | `a`, `0`                 |
//! | `assume_binop!`            | `a op b`, custom description    | `a`, `b`                 |
//! | `assume_empty!`            | size is zero                    | `size of x`              |
//! | `assume_not_empty!`        | size is not zero                | `size of x`              |
//! | `assume_null_or_empty!`    | null, `None` or size zero       | `'content'` or `(null)`  |
//! | `assume_not_null_or_empty!`| none of the above               | `'content'` or `(null)`  |
//! | `assume_valid_index!`      | `0 <= i < size`                 | `i`, `size of c`         |
//!
//! ## Usage
//!
//! ```
//! use assuming::prelude::*;
//!
//! let reporter = RecordingReporter::new();
//! let slots: Vec<u32> = Vec::new();
//! let index = 1_usize;
//!
//! assume_valid_index!(in &reporter; index, slots, "slot lookup for job {}", 7);
//!
//! let failure = reporter.last().unwrap();
//! assert_eq!(failure.expectation, "index will be a valid index to slots");
//! assert_eq!(failure.value("index"), Some("1"));
//! assert_eq!(failure.value("size of slots"), Some("0"));
//! assert_eq!(failure.context, "slot lookup for job 7");
//! ```
//!
//! Without the `in <reporter>;` prefix, failures go to [`PanicReporter`], which
//! logs through the `log` facade and panics.
//!
//! ## Operand formatting
//! Enumerations render by symbolic name ([`EnumName`], or `strum`'s
//! `IntoStaticStr` derive, re-exported here with the default `strum`
//! feature), raw pointers by address, everything else through
//! `Display`, then `Debug`. See [`format`].

pub mod evaluate;
pub mod failure;
pub mod format;
pub mod location;
mod macros;
pub mod predicate;
pub mod report;

pub use failure::{AssumptionFailure, AssumptionKind, NamedValue};
pub use format::EnumName;
pub use location::SourceLocation;
pub use predicate::{NullOrEmpty, Nullable, Size};
pub use report::{LogReporter, PanicReporter, RecordingReporter, Reporter};

#[cfg(feature = "strum")]
#[cfg_attr(docsrs, doc(cfg(feature = "strum")))]
pub use strum::{self, IntoStaticStr};

/// A convenient prelude: every macro plus the reporter and bundle types.
pub mod prelude {
    pub use crate::failure::{AssumptionFailure, AssumptionKind, NamedValue};
    pub use crate::format::EnumName;
    pub use crate::location::SourceLocation;
    pub use crate::predicate::{NullOrEmpty, Nullable, Size};
    pub use crate::report::{LogReporter, PanicReporter, RecordingReporter, Reporter};
    pub use crate::{
        assume, assume_binop, assume_empty, assume_eq, assume_ge, assume_gt, assume_le,
        assume_lt, assume_ne, assume_not_empty, assume_not_null, assume_not_null_or_empty,
        assume_null, assume_null_or_empty, assume_valid_index, assume_zero, check, check_binop,
        check_empty, check_eq, check_ge, check_gt, check_le, check_lt, check_ne,
        check_not_empty, check_not_null, check_not_null_or_empty, check_null,
        check_null_or_empty, check_valid_index, check_zero, checks_enabled, function_name, render,
    };
}

static_assertions::assert_impl_all!(AssumptionFailure: Send, Sync, std::error::Error);
static_assertions::assert_impl_all!(RecordingReporter: Send, Sync, Reporter);
static_assertions::assert_impl_all!(PanicReporter: Send, Sync, Reporter);
static_assertions::assert_impl_all!(LogReporter: Send, Sync, Reporter);
