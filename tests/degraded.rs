//! Optimized builds without `check-assumptions`: the assume family becomes an
//! optimizer hint and the check family disappears. Only holding assumptions
//! are exercised here; a false one would be undefined behavior.

#![cfg(not(any(debug_assertions, feature = "check-assumptions")))]

use assuming::prelude::*;

mod util;
use util::EvalCounter;

#[test]
fn checks_are_disabled() {
    assert!(!checks_enabled!());
}

#[test]
fn holding_assumptions_report_nothing() {
    let r = RecordingReporter::new();
    let items = [1_u32, 2, 3];
    assume!(in &r; items.len() == 3);
    assume_eq!(in &r; items[0], 1_u32);
    assume_not_empty!(in &r; items);
    assume_valid_index!(in &r; 2_usize, items);
    assume_not_null_or_empty!(in &r; "x");
    assert!(r.is_empty());
}

#[test]
fn check_family_does_not_evaluate_or_report() {
    let r = RecordingReporter::new();
    let c = EvalCounter::new();
    check!(in &r; c.eval(false));
    check_eq!(in &r; c.eval(1_u8), c.eval(2_u8));
    check_valid_index!(in &r; c.eval(9_usize), c.eval(Vec::<u8>::new()));
    assert_eq!(c.take(), 0);
    assert!(r.is_empty());
}

#[test]
fn hint_path_still_evaluates_once() {
    let r = RecordingReporter::new();
    let c = EvalCounter::new();
    assume_le!(in &r; c.eval(1_u8), c.eval(2_u8));
    assert_eq!(c.take(), 2);
}
