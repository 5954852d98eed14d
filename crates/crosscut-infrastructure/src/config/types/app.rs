//! Top-level application configuration

use super::{CacheConfig, LoggingConfig, PipelineConfig};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Cache configuration
    pub cache: CacheConfig,

    /// Pipeline configuration
    pub pipeline: PipelineConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}
