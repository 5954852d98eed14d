//! Moka cache provider
//!
//! High-performance concurrent cache built on Moka. TTL is enforced
//! per entry through an expiry policy, so each entry honors the TTL it
//! was stored with; group membership is tracked in a side index that an
//! eviction listener keeps in step with Moka's own expiry.

use async_trait::async_trait;
use crosscut_domain::error::Result;
use crosscut_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider, CacheStats};
use dashmap::DashMap;
use moka::Expiry;
use moka::future::Cache;
use moka::notification::RemovalCause;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// One stored payload with its TTL and group membership
#[derive(Debug)]
struct Payload {
    json: String,
    groups: HashSet<String>,
    ttl: Duration,
}

/// Expiry policy reading the TTL stored with each entry
struct PerEntryExpiry;

impl Expiry<String, Arc<Payload>> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Arc<Payload>,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Arc<Payload>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Moka-based cache provider
///
/// No capacity bound is configured: entries leave the cache only by TTL
/// expiry or explicit invalidation, matching the declared-group
/// invalidation model.
pub struct MokaCacheProvider {
    cache: Cache<String, Arc<Payload>>,
    groups: Arc<DashMap<String, HashSet<String>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl Default for MokaCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MokaCacheProvider {
    /// Create a new Moka cache provider
    pub fn new() -> Self {
        let groups: Arc<DashMap<String, HashSet<String>>> = Arc::new(DashMap::new());
        let listener_groups = Arc::clone(&groups);
        let cache = Cache::builder()
            .expire_after(PerEntryExpiry)
            .eviction_listener(move |key: Arc<String>, value: Arc<Payload>, cause| {
                // Replacement keeps the key live; set_json already moved
                // its index entries. Every other cause removes the key.
                if cause == RemovalCause::Replaced {
                    return;
                }
                for group in &value.groups {
                    if let Some(mut members) = listener_groups.get_mut(group) {
                        members.remove(key.as_str());
                    }
                }
            })
            .build();

        Self {
            cache,
            groups,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Remove a key from the index of each of the given groups
    fn unindex(&self, key: &str, groups: impl IntoIterator<Item = impl AsRef<str>>) {
        for group in groups {
            if let Some(mut members) = self.groups.get_mut(group.as_ref()) {
                members.remove(key);
            }
        }
    }

    /// Add a key to the index of each of the given groups
    fn index(&self, key: &str, groups: &HashSet<String>) {
        for group in groups {
            self.groups
                .entry(group.clone())
                .or_default()
                .insert(key.to_string());
        }
    }
}

#[async_trait]
impl CacheProvider for MokaCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        match self.cache.get(key).await {
            Some(payload) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(payload.json.clone()))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                Ok(None)
            }
        }
    }

    async fn set_json(&self, key: &str, value: &str, config: CacheEntryConfig) -> Result<()> {
        let ttl = config.effective_ttl();
        let new_groups: HashSet<String> = config.groups.iter().cloned().collect();
        let json = value.to_string();

        // Upsert under Moka's per-key lock; empty groups in the config
        // preserve the previous entry's membership.
        let mut previous_groups: Option<HashSet<String>> = None;
        let keep_previous = new_groups.is_empty();
        self.cache
            .entry(key.to_string())
            .and_upsert_with(|existing| {
                let groups = match existing {
                    Some(entry) if keep_previous => entry.into_value().groups.clone(),
                    Some(entry) => {
                        previous_groups = Some(entry.into_value().groups.clone());
                        new_groups.clone()
                    }
                    None => new_groups.clone(),
                };
                std::future::ready(Arc::new(Payload { json, groups, ttl }))
            })
            .await;

        if let Some(previous) = previous_groups {
            let stale: Vec<&String> = previous.difference(&new_groups).collect();
            self.unindex(key, stale);
        }
        if !keep_previous {
            self.index(key, &new_groups);
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        match self.cache.remove(key).await {
            Some(payload) => {
                self.unindex(key, &payload.groups);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        // get rather than contains_key so per-entry expiry is honored
        Ok(self.cache.get(key).await.is_some())
    }

    async fn invalidate_group(&self, group: &str) -> Result<usize> {
        let Some((_, members)) = self.groups.remove(group) else {
            return Ok(0);
        };

        let mut removed = 0;
        for key in members {
            if let Some(payload) = self.cache.remove(&key).await {
                removed += 1;
                let others = payload.groups.iter().filter(|g| g.as_str() != group);
                self.unindex(&key, others);
            }
        }
        Ok(removed)
    }

    async fn clear(&self) -> Result<()> {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks().await;
        self.groups.clear();
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        // Run pending tasks to ensure entry_count is accurate
        self.cache.run_pending_tasks().await;
        let mut stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
            hit_rate: 0.0,
        };
        stats.hit_rate = stats.calculate_hit_rate();
        Ok(stats)
    }

    async fn size(&self) -> Result<usize> {
        self.cache.run_pending_tasks().await;
        Ok(self.cache.entry_count() as usize)
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheProvider")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
