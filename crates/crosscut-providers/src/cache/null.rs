//! Null cache provider for testing
//!
//! A cache provider implementation that doesn't store anything.
//! Useful for testing and disabling caching.

use async_trait::async_trait;
use crosscut_domain::error::Result;
use crosscut_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider, CacheStats};

/// Null cache provider that doesn't store anything
///
/// Always returns a miss for gets and accepts all sets without storing
/// the data, so every invocation through the pipeline executes its
/// target.
///
/// # Example
///
/// ```rust
/// use crosscut_providers::cache::NullCacheProvider;
///
/// let provider = NullCacheProvider::new();
/// // All operations succeed but nothing is cached
/// ```
#[derive(Debug, Clone, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get_json(&self, _key: &str) -> Result<Option<String>> {
        // Always return None (cache miss)
        Ok(None)
    }

    async fn set_json(&self, _key: &str, _value: &str, _config: CacheEntryConfig) -> Result<()> {
        // Accept the set operation but don't store anything
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    async fn invalidate_group(&self, _group: &str) -> Result<usize> {
        // Nothing is ever stored, so a group never has members
        Ok(0)
    }

    async fn clear(&self) -> Result<()> {
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        Ok(CacheStats::new())
    }

    async fn size(&self) -> Result<usize> {
        Ok(0)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
