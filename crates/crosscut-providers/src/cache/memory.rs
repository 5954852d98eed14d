//! In-memory cache provider
//!
//! Stores entries in concurrent hash maps with per-entry creation time
//! and TTL. Expired entries are purged lazily on access; nothing is
//! evicted under memory pressure — entries leave the store only by TTL
//! expiry or explicit invalidation, matching declared invalidation
//! groups rather than an LRU policy.
//!
//! A group index maps each group key to the member keys so a group
//! invalidation touches only its members. Per-key linearizability comes
//! from the entry map's shard locks: every mutation of one key happens
//! under its shard lock, and the lock order is always entries before
//! group index.

use async_trait::async_trait;
use crosscut_domain::error::Result;
use crosscut_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider, CacheStats};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// One stored entry
#[derive(Debug, Clone)]
struct StoredEntry {
    payload: String,
    groups: HashSet<String>,
    stored_at: Instant,
    ttl: Duration,
}

impl StoredEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.stored_at) >= self.ttl
    }
}

/// In-memory cache provider
///
/// # Example
///
/// ```ignore
/// use crosscut_providers::cache::MemoryCacheProvider;
///
/// let provider = MemoryCacheProvider::new();
/// provider.set_json("k", "1", CacheEntryConfig::new().with_group("g")).await?;
/// ```
#[derive(Debug, Default)]
pub struct MemoryCacheProvider {
    entries: DashMap<String, StoredEntry>,
    groups: DashMap<String, HashSet<String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MemoryCacheProvider {
    /// Create an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop an expired entry and its group index references
    ///
    /// Re-checks expiry under the shard lock so a concurrent overwrite
    /// that just refreshed the entry is never dropped.
    fn purge(&self, key: &str) {
        if let Some((key, entry)) = self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(Instant::now()))
        {
            self.unindex(&key, &entry.groups);
        }
    }

    /// Remove a key from the index of each of its groups
    fn unindex(&self, key: &str, groups: &HashSet<String>) {
        for group in groups {
            if let Some(mut members) = self.groups.get_mut(group) {
                members.remove(key);
                let emptied = members.is_empty();
                drop(members);
                if emptied {
                    self.groups.remove_if(group, |_, members| members.is_empty());
                }
            }
        }
    }

    /// Add a key to the index of each of its groups
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
impl CacheProvider for MemoryCacheProvider {
    async fn get_json(&self, key: &str) -> Result<Option<String>> {
        let payload = match self.entries.get(key) {
            Some(entry) if !entry.is_expired(Instant::now()) => Some(entry.payload.clone()),
            Some(entry) => {
                drop(entry);
                self.purge(key);
                None
            }
            None => None,
        };

        match payload {
            Some(payload) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Ok(Some(payload))
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

        // Overwrite refreshes value and creation time; empty groups in
        // the config preserve the entry's existing membership.
        let mut previous_groups = None;
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.payload = value.to_string();
                entry.stored_at = Instant::now();
                entry.ttl = ttl;
                if !new_groups.is_empty() {
                    previous_groups = Some(std::mem::replace(&mut entry.groups, new_groups.clone()));
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(StoredEntry {
                    payload: value.to_string(),
                    groups: new_groups.clone(),
                    stored_at: Instant::now(),
                    ttl,
                });
            }
        }

        if let Some(previous) = previous_groups {
            let stale: HashSet<String> = previous.difference(&new_groups).cloned().collect();
            self.unindex(key, &stale);
        }
        self.index(key, &new_groups);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        match self.entries.remove(key) {
            Some((key, entry)) => {
                self.unindex(&key, &entry.groups);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(Instant::now()) => Ok(true),
            Some(entry) => {
                drop(entry);
                self.purge(key);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    async fn invalidate_group(&self, group: &str) -> Result<usize> {
        // Taking the member set out first keeps each key removal a
        // single shard-locked operation; a concurrent get sees the
        // entry either before or after its removal, never mid-removal.
        let Some((_, members)) = self.groups.remove(group) else {
            return Ok(0);
        };

        let mut removed = 0;
        for key in members {
            if let Some((key, entry)) = self.entries.remove(&key) {
                removed += 1;
                let other_groups: HashSet<String> = entry
                    .groups
                    .iter()
                    .filter(|g| g.as_str() != group)
                    .cloned()
                    .collect();
                self.unindex(&key, &other_groups);
            }
        }
        Ok(removed)
    }

    async fn clear(&self) -> Result<()> {
        self.entries.clear();
        self.groups.clear();
        Ok(())
    }

    async fn stats(&self) -> Result<CacheStats> {
        let mut stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.len() as u64,
            hit_rate: 0.0,
        };
        stats.hit_rate = stats.calculate_hit_rate();
        Ok(stats)
    }

    async fn size(&self) -> Result<usize> {
        Ok(self.entries.len())
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}
