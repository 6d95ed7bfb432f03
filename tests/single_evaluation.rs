//! Every operand expression runs exactly once, whether the assumption holds
//! or not.

use assuming::prelude::*;

mod util;
use util::{EvalCounter, report_nothing};

type Callback = fn(AssumptionFailure);

macro_rules! expect_eval_count {
    ($counter:expr, $count:expr, $($invocation:tt)*) => {{
        $($invocation)*;
        assert_eq!($counter.take(), $count, "{}", stringify!($($invocation)*));
    }};
}

#[cfg(any(debug_assertions, feature = "check-assumptions"))]
#[test]
fn failing_assumptions_evaluate_operands_once() {
    let r = RecordingReporter::new();
    let c = EvalCounter::new();
    let null_callback: Option<Callback> = None;
    let null_string: Option<&str> = None;
    let empty_string = String::new();

    expect_eval_count!(c, 1, assume!(in &r; c.eval(false)));

    expect_eval_count!(c, 1, assume_not_null!(in &r; c.eval(null_callback)));
    expect_eval_count!(c, 1, assume_null!(in &r; c.eval(Some(report_nothing as Callback))));

    expect_eval_count!(c, 2, assume_eq!(in &r; c.eval(1_i32), c.eval(2_i32)));
    expect_eval_count!(c, 2, assume_ne!(in &r; c.eval(1_i32), c.eval(1_i32)));
    expect_eval_count!(c, 2, assume_gt!(in &r; c.eval(1_i32), c.eval(1_i32)));
    expect_eval_count!(c, 2, assume_lt!(in &r; c.eval(1_i32), c.eval(1_i32)));
    expect_eval_count!(c, 2, assume_ge!(in &r; c.eval(1_i32), c.eval(2_i32)));
    expect_eval_count!(c, 2, assume_le!(in &r; c.eval(1_i32), c.eval(0_i32)));
    expect_eval_count!(c, 1, assume_zero!(in &r; c.eval(4_i32)));
    expect_eval_count!(c, 2, assume_binop!(in &r; c.eval(1_i32), c.eval(1_i32), <, "precede"));

    expect_eval_count!(c, 1, assume_empty!(in &r; c.eval(String::from("hello"))));
    expect_eval_count!(c, 1, assume_not_empty!(in &r; c.eval(String::new())));

    expect_eval_count!(c, 1, assume_null_or_empty!(in &r; c.eval("hello")));
    expect_eval_count!(c, 1, assume_not_null_or_empty!(in &r; c.eval(null_string)));

    expect_eval_count!(c, 2, assume_valid_index!(in &r; c.eval(1_i32), c.eval(&empty_string)));

    assert_eq!(r.len(), 16);
}

#[test]
fn passing_assumptions_evaluate_operands_once() {
    let r = RecordingReporter::new();
    let c = EvalCounter::new();
    let items = vec![1_u8, 2, 3];

    expect_eval_count!(c, 1, assume!(in &r; c.eval(true)));
    expect_eval_count!(c, 1, assume_not_null!(in &r; c.eval(Some(report_nothing as Callback))));
    expect_eval_count!(c, 2, assume_eq!(in &r; c.eval(3_i32), c.eval(3_i32)));
    expect_eval_count!(c, 2, assume_le!(in &r; c.eval(1_i32), c.eval(3_i32)));
    expect_eval_count!(c, 1, assume_zero!(in &r; c.eval(0_i32)));
    expect_eval_count!(c, 1, assume_not_empty!(in &r; c.eval(&items)));
    expect_eval_count!(c, 1, assume_not_null_or_empty!(in &r; c.eval("x")));
    expect_eval_count!(c, 2, assume_valid_index!(in &r; c.eval(2_i32), c.eval(&items)));

    assert!(r.is_empty());
}

#[cfg(any(debug_assertions, feature = "check-assumptions"))]
#[test]
fn context_arguments_are_not_evaluated_on_success() {
    let r = RecordingReporter::new();
    let c = EvalCounter::new();

    assume!(in &r; true, "{}", c.eval(1_i32));
    assert_eq!(c.take(), 0);

    assume!(in &r; false, "{}", c.eval(1_i32));
    assert_eq!(c.take(), 1);
    assert_eq!(r.take()[0].context, "1");
}

#[test]
fn check_family_evaluates_once_when_enabled() {
    let r = RecordingReporter::new();
    let c = EvalCounter::new();
    let expected = if assuming::checks_enabled!() { 2 } else { 0 };

    expect_eval_count!(c, expected, check_eq!(in &r; c.eval(1_i32), c.eval(2_i32)));
    expect_eval_count!(c, expected, check_valid_index!(in &r; c.eval(5_i32), c.eval([0_u8; 2])));
}
