//! Cache Provider Port
//!
//! Port for cache backends used by the interception pipeline. Entries
//! carry a TTL and a set of group keys; a group invalidation removes
//! every entry tagged with that group. Expired entries behave as absent.
//!
//! Implementations must be linearizable per key: a `get` overlapping a
//! group invalidation on the same key observes either the pre- or
//! post-invalidation state, never a partially-removed entry. No
//! memory-pressure eviction is modeled — entries leave the store only by
//! TTL expiry or explicit invalidation.

use crate::constants::CACHE_DEFAULT_TTL_SECS;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Cache Entry Configuration
///
/// Configures how an entry is stored: its TTL and the invalidation
/// groups it belongs to.
///
/// Overwriting an existing key with an empty `groups` list preserves the
/// entry's prior group membership; a non-empty list replaces it.
///
/// # Example
///
/// ```rust
/// use crosscut_domain::ports::providers::cache::CacheEntryConfig;
/// use std::time::Duration;
///
/// let config = CacheEntryConfig::new()
///     .with_ttl(Duration::from_secs(600))
///     .with_group("CarService.Get");
/// assert_eq!(config.groups.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheEntryConfig {
    /// Time to live for the entry; `None` falls back to the default TTL
    pub ttl: Option<Duration>,
    /// Invalidation groups the entry belongs to
    pub groups: Vec<String>,
}

impl CacheEntryConfig {
    /// Create a config with default TTL and no groups
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the TTL for the entry
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Set the TTL in seconds
    pub fn with_ttl_secs(mut self, secs: u64) -> Self {
        self.ttl = Some(Duration::from_secs(secs));
        self
    }

    /// Add one invalidation group
    pub fn with_group<S: Into<String>>(mut self, group: S) -> Self {
        self.groups.push(group.into());
        self
    }

    /// Add multiple invalidation groups
    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups.extend(groups.into_iter().map(Into::into));
        self
    }

    /// Effective TTL, falling back to the default
    pub fn effective_ttl(&self) -> Duration {
        self.ttl
            .unwrap_or(Duration::from_secs(CACHE_DEFAULT_TTL_SECS))
    }
}

/// Cache Operation Statistics
///
/// Hit/miss counters maintained by the provider.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of live entries
    pub entries: u64,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl CacheStats {
    /// Create empty cache statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate hit rate from hits and misses
    pub fn calculate_hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Cache Provider Port
///
/// Contract for cache backends. Payloads cross the port as JSON strings;
/// a typed facade lives in the infrastructure layer.
///
/// # Implementations
///
/// - **Memory**: DashMap-backed store with lazy expiry purge
/// - **Moka**: moka-backed store with per-entry TTL expiry
/// - **Null**: always-miss provider for tests and disabled caching
///
/// # Example
///
/// ```ignore
/// use crosscut_domain::ports::providers::CacheProvider;
///
/// let config = CacheEntryConfig::new().with_group("CarService.Get");
/// cache.set_json("CarService.GetAll", &payload, config).await?;
///
/// if let Some(json) = cache.get_json("CarService.GetAll").await? {
///     let cars: Vec<Car> = serde_json::from_str(&json)?;
/// }
/// ```
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache as a JSON string
    ///
    /// Returns `None` if the key is absent or its TTL has expired; an
    /// expired entry is purged as if it had never existed.
    async fn get_json(&self, key: &str) -> Result<Option<String>>;

    /// Insert or overwrite a value
    ///
    /// The entry becomes visible to subsequent `get_json` calls
    /// immediately. Overwriting refreshes the value and creation time;
    /// group membership is preserved unless `config.groups` is
    /// non-empty.
    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()>;

    /// Delete a single entry
    ///
    /// Returns true if the key existed.
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Check whether a key exists and has not expired
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Remove every entry tagged with the group key
    ///
    /// Invalidating a group with zero members is a no-op, not an error.
    /// Returns the number of entries removed.
    async fn invalidate_group(&self, group: &str) -> Result<usize>;

    /// Remove all entries
    async fn clear(&self) -> Result<()>;

    /// Get cache statistics
    async fn stats(&self) -> Result<CacheStats>;

    /// Get the number of live entries
    async fn size(&self) -> Result<usize>;

    /// Name of this provider implementation (e.g. "memory", "moka", "null")
    fn provider_name(&self) -> &str;
}
