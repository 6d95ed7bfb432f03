//! Runtime half of the assumption macros. Not a stable API.
//!
//! The macros bind every operand once, compute the verdict, and call
//! [`evaluate`] with a closure that builds the failure bundle. The closure only
//! runs when the verdict is `false`, so formatting and call-site capture stay
//! off the passing path.

use crate::failure::AssumptionFailure;
use crate::report::Reporter;

/// `true` when this crate was built with `check-assumptions`.
///
/// The calling crate's `debug_assertions` is checked separately by
/// [`checks_enabled!`](crate::checks_enabled).
pub const FORCE_CHECKS: bool = cfg!(feature = "check-assumptions");

/// Hands the failure to `reporter` when `verdict` is false. A panicking
/// reporter reports the assumption's call site as the panic location.
#[inline(always)]
#[track_caller]
pub fn evaluate<R, F>(reporter: &R, verdict: bool, failure: F)
where
    R: Reporter + ?Sized,
    F: FnOnce() -> AssumptionFailure,
{
    if !verdict {
        report_failure(reporter, failure);
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn report_failure<R, F>(reporter: &R, failure: F)
where
    R: Reporter + ?Sized,
    F: FnOnce() -> AssumptionFailure,
{
    reporter.report(failure());
}

/// Degraded-mode hint: tells the optimizer `verdict` holds.
///
/// A `false` verdict here is undefined behavior; that is the contract of the
/// assume family in optimized builds.
#[inline(always)]
pub fn assume_unchecked(verdict: bool) {
    // SAFETY: the assume macros document that their condition must hold when
    // checks are disabled. The check family never reaches this function.
    unsafe { core::hint::assert_unchecked(verdict) }
}
