//! Pipeline configuration types

use crosscut_domain::constants::DEFAULT_SLOW_CALL_THRESHOLD_MS;
use serde::{Deserialize, Serialize};

/// Pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Threshold in milliseconds applied to `Measure` concerns that
    /// declare no explicit threshold
    pub slow_call_threshold_ms: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            slow_call_threshold_ms: DEFAULT_SLOW_CALL_THRESHOLD_MS,
        }
    }
}
