#![allow(dead_code)]
use std::cell::Cell;

use assuming::{AssumptionFailure, RecordingReporter};

/// Counts how many times operand expressions run.
#[derive(Default)]
pub struct EvalCounter {
    count: Cell<usize>,
}

impl EvalCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Passes `value` through, counting one evaluation.
    pub fn eval<T>(&self, value: T) -> T {
        self.count.set(self.count.get() + 1);
        value
    }

    /// Returns the count so far and resets it.
    pub fn take(&self) -> usize {
        self.count.replace(0)
    }
}

/// The single failure recorded since the last call; panics otherwise.
pub fn only_failure(reporter: &RecordingReporter) -> AssumptionFailure {
    let mut failures = reporter.take();
    assert_eq!(failures.len(), 1, "expected exactly one failure, got {failures:#?}");
    failures.remove(0)
}

/// Name/value pairs of a failure, for compact comparisons.
pub fn pairs(failure: &AssumptionFailure) -> Vec<(&'static str, String)> {
    failure
        .values
        .iter()
        .map(|v| (v.name, v.value.clone()))
        .collect()
}

pub fn report_nothing(_: AssumptionFailure) {}
