//! AssumptionFailure: the bundle handed to a [`Reporter`](crate::report::Reporter)
//!
//! There is exactly one kind of error in this crate, an assumption violation.
//! It is described by which relation failed ([`AssumptionKind`]) and by the
//! operand values at the time of failure.

use serde::Serialize;
use thiserror::Error;

use crate::location::SourceLocation;

/// Which relation an assumption checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssumptionKind {
    /// `assume!`: the condition evaluates to `true`.
    True,
    Null,
    NotNull,
    /// A binary relation; `operator` is the Rust operator, e.g. `"=="`.
    Compare { operator: &'static str },
    Empty,
    NotEmpty,
    NullOrEmpty,
    NotNullOrEmpty,
    ValidIndex,
}

impl AssumptionKind {
    /// Number of named values a failure of this kind reports.
    pub const fn arity(self) -> usize {
        match self {
            Self::Compare { .. } | Self::ValidIndex => 2,
            _ => 1,
        }
    }
}

/// One evaluated operand: its source text and formatted value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedValue {
    pub name: &'static str,
    pub value: String,
}

impl NamedValue {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A violated assumption.
///
/// Built once per failing invocation and passed by value to the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("assumption failed at {location}: {expectation}")]
pub struct AssumptionFailure {
    pub kind: AssumptionKind,
    pub location: SourceLocation,
    /// What was assumed, e.g. `len will be greater than 0`.
    pub expectation: &'static str,
    /// Evaluated operands, in reading order.
    pub values: Vec<NamedValue>,
    /// Caller-supplied context; empty when none was given.
    pub context: String,
}

impl AssumptionFailure {
    pub fn new(
        kind: AssumptionKind,
        location: SourceLocation,
        expectation: &'static str,
        values: Vec<NamedValue>,
        context: String,
    ) -> Self {
        Self {
            kind,
            location,
            expectation,
            values,
            context,
        }
    }

    /// Looks up a named value by its source text.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|v| v.name == name)
            .map(|v| v.value.as_str())
    }

    /// Full multi-line diagnostic: expectation, location, values and context.
    pub fn render(&self) -> String {
        let mut out = format!(
            "assumption failed: {}\n  --> {}",
            self.expectation, self.location
        );
        for NamedValue { name, value } in &self.values {
            out.push_str(&format!("\n  {name} = {value}"));
        }
        if !self.context.is_empty() {
            out.push_str("\n  note: ");
            out.push_str(&self.context);
        }
        out
    }
}
