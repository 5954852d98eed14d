//! Cache configuration types

use crate::constants::DEFAULT_CACHE_NAMESPACE;
use crosscut_domain::constants::CACHE_DEFAULT_TTL_SECS;
use serde::{Deserialize, Serialize};

/// Cache backends
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// In-memory store (DashMap)
    Memory,
    /// In-memory cache (Moka)
    Moka,
    /// Always-miss stub (disables caching)
    Null,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache enabled; when false every read is a miss
    pub enabled: bool,

    /// Cache backend
    pub provider: CacheBackend,

    /// Default TTL in seconds for entries whose declaration carries none
    pub default_ttl_secs: u64,

    /// Namespace for typed cache access through the shared store
    pub namespace: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: CacheBackend::Moka,
            default_ttl_secs: CACHE_DEFAULT_TTL_SECS,
            namespace: DEFAULT_CACHE_NAMESPACE.to_string(),
        }
    }
}
