//! Performance Report Sink Port
//!
//! The pipeline observes elapsed time only after the target completes;
//! it never aborts a slow call. When an invocation exceeds its declared
//! threshold, a report is emitted through this port to an external
//! observability collaborator.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// A slow-operation report event
#[derive(Debug, Clone, PartialEq)]
pub struct SlowOperationReport {
    /// Qualified name of the slow operation
    pub operation: String,
    /// Measured wall-clock duration of the whole invocation span
    pub elapsed: Duration,
    /// Threshold the duration exceeded
    pub threshold: Duration,
    /// When the report was emitted
    pub at: DateTime<Utc>,
}

impl SlowOperationReport {
    /// Create a report stamped with the current time
    pub fn new<S: Into<String>>(operation: S, elapsed: Duration, threshold: Duration) -> Self {
        Self {
            operation: operation.into(),
            elapsed,
            threshold,
            at: Utc::now(),
        }
    }
}

/// Performance report sink interface
///
/// Implementations must be safe to invoke concurrently; reporting is
/// append-only and must not block the invocation path.
pub trait PerformanceReporter: Send + Sync {
    /// Record one slow-operation report
    fn report(&self, report: SlowOperationReport);
}
