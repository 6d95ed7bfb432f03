//! Reporting sinks.
//!
//! A [`Reporter`] receives each [`AssumptionFailure`] exactly once, on the
//! thread that evaluated the assumption. Whether execution continues is the
//! reporter's decision. Nothing here is global: pass a
//! reporter explicitly with the `in <reporter>;` macro prefix, or let the
//! macros fall back to [`PanicReporter`].

use log::Level;
use parking_lot::Mutex;

use crate::failure::AssumptionFailure;

/// Log target used by the bundled reporters.
pub const LOG_TARGET: &str = "assuming";

/// The sink a failing assumption is handed to.
pub trait Reporter {
    fn report(&self, failure: AssumptionFailure);
}

impl<F> Reporter for F
where
    F: Fn(AssumptionFailure),
{
    fn report(&self, failure: AssumptionFailure) {
        self(failure)
    }
}

/// Logs the failure at `error` level, then panics with the rendered message.
///
/// This is the reporter used when none is given.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    #[track_caller]
    fn report(&self, failure: AssumptionFailure) {
        let message = failure.render();
        log::error!(target: LOG_TARGET, "{message}");
        panic!("{message}");
    }
}

/// Logs the failure and lets execution continue.
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    pub level: Level,
}

impl LogReporter {
    pub const fn new(level: Level) -> Self {
        Self { level }
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new(Level::Error)
    }
}

impl Reporter for LogReporter {
    fn report(&self, failure: AssumptionFailure) {
        log::log!(target: LOG_TARGET, self.level, "{}", failure.render());
    }
}

/// Keeps every failure for later inspection.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    failures: Mutex<Vec<AssumptionFailure>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Copy of the most recent failure.
    pub fn last(&self) -> Option<AssumptionFailure> {
        self.failures.lock().last().cloned()
    }

    /// Copies of everything recorded so far, oldest first.
    pub fn failures(&self) -> Vec<AssumptionFailure> {
        self.failures.lock().clone()
    }

    /// Drains the recorded failures.
    pub fn take(&self) -> Vec<AssumptionFailure> {
        std::mem::take(&mut *self.failures.lock())
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, failure: AssumptionFailure) {
        log::debug!(target: LOG_TARGET, "recorded: {failure}");
        self.failures.lock().push(failure);
    }
}

/// Reporter used by the macros when no `in <reporter>;` prefix is given.
#[doc(hidden)]
#[inline(always)]
pub fn default_reporter() -> &'static PanicReporter {
    &PanicReporter
}
