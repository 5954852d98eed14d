//! Cache provider factory
//!
//! Explicit construction of a cache backend from configuration; the
//! resolved provider is passed into the pipeline by its host, never
//! discovered through ambient registration.

use crate::config::{CacheBackend, CacheConfig};
use crosscut_domain::ports::providers::cache::CacheProvider;
use crosscut_providers::cache::{MemoryCacheProvider, MokaCacheProvider, NullCacheProvider};
use std::sync::Arc;
use tracing::debug;

/// Build the cache provider selected by the configuration
///
/// A disabled cache resolves to the null provider, so every read is a
/// miss and the pipeline degenerates to plain calls.
pub fn build_cache_provider(config: &CacheConfig) -> Arc<dyn CacheProvider> {
    let provider: Arc<dyn CacheProvider> = if !config.enabled {
        Arc::new(NullCacheProvider::new())
    } else {
        match config.provider {
            CacheBackend::Memory => Arc::new(MemoryCacheProvider::new()),
            CacheBackend::Moka => Arc::new(MokaCacheProvider::new()),
            CacheBackend::Null => Arc::new(NullCacheProvider::new()),
        }
    };

    debug!(provider = provider.provider_name(), "cache provider built");
    provider
}
