//! Wall-clock performance monitor
//!
//! Purely observational: measures how long a body takes, reports when
//! the threshold is exceeded, and passes the body's outcome through
//! unchanged. Failures propagate after the report is emitted; nothing
//! here aborts a slow call.

use crosscut_domain::error::Result;
use crosscut_domain::ports::infrastructure::reporter::{PerformanceReporter, SlowOperationReport};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Reporter that discards every report
///
/// Default sink when no observability collaborator is wired in.
#[derive(Debug, Clone, Default)]
pub struct NoopReporter;

impl PerformanceReporter for NoopReporter {
    fn report(&self, _report: SlowOperationReport) {}
}

/// Wall-clock duration monitor
#[derive(Clone)]
pub struct PerformanceMonitor {
    reporter: Arc<dyn PerformanceReporter>,
}

impl PerformanceMonitor {
    /// Create a monitor emitting through the given reporter
    pub fn new(reporter: Arc<dyn PerformanceReporter>) -> Self {
        Self { reporter }
    }

    /// Measure a body and report if it exceeds the threshold
    ///
    /// The body's result or error is returned unchanged; a failing body
    /// is still timed and reported before its error propagates.
    pub async fn measure<T, F>(&self, operation: &str, threshold: Duration, body: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        let started = Instant::now();
        let outcome = body.await;
        self.observe(operation, threshold, started.elapsed());
        outcome
    }

    /// Report an already-measured duration if it exceeds the threshold
    pub fn observe(&self, operation: &str, threshold: Duration, elapsed: Duration) {
        if elapsed > threshold {
            self.reporter
                .report(SlowOperationReport::new(operation, elapsed, threshold));
        }
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new(Arc::new(NoopReporter))
    }
}

impl std::fmt::Debug for PerformanceMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerformanceMonitor").finish()
    }
}
