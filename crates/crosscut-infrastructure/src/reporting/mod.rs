//! Slow-operation report sinks
//!
//! Implementations of the `PerformanceReporter` port. Reporting is
//! append-only and never blocks the invocation path.

use crosscut_domain::ports::infrastructure::reporter::{PerformanceReporter, SlowOperationReport};
use std::sync::Mutex;
use tracing::warn;

/// Reporter emitting a structured warn event per slow operation
#[derive(Debug, Clone, Default)]
pub struct TracingReporter;

impl TracingReporter {
    /// Create a new tracing reporter
    pub fn new() -> Self {
        Self
    }
}

impl PerformanceReporter for TracingReporter {
    fn report(&self, report: SlowOperationReport) {
        warn!(
            operation = %report.operation,
            elapsed_ms = report.elapsed.as_millis() as u64,
            threshold_ms = report.threshold.as_millis() as u64,
            "operation exceeded its performance threshold"
        );
    }
}

/// Reporter collecting reports in memory
///
/// Used in tests and diagnostics to assert on what was reported.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    reports: Mutex<Vec<SlowOperationReport>>,
}

impl CollectingReporter {
    /// Create an empty collecting reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports collected so far
    pub fn snapshot(&self) -> Vec<SlowOperationReport> {
        self.reports
            .lock()
            .map(|reports| reports.clone())
            .unwrap_or_default()
    }

    /// Number of collected reports
    pub fn len(&self) -> usize {
        self.reports.lock().map(|reports| reports.len()).unwrap_or(0)
    }

    /// Whether nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PerformanceReporter for CollectingReporter {
    fn report(&self, report: SlowOperationReport) {
        if let Ok(mut reports) = self.reports.lock() {
            reports.push(report);
        }
    }
}
