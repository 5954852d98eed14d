//! Shared typed cache store
//!
//! Typed serde access over the JSON cache port, with optional namespace
//! prefixing so several services can share one backend without key
//! collisions.

use crosscut_domain::error::{Error, Result};
use crosscut_domain::ports::providers::cache::{CacheEntryConfig, CacheProvider, CacheStats};
use std::fmt;
use std::sync::Arc;

/// Shared typed cache store
///
/// Thread-safe typed access to a cache provider. Accepts any type
/// implementing the `CacheProvider` port.
#[derive(Clone)]
pub struct SharedCacheStore {
    provider: Arc<dyn CacheProvider>,
    namespace: Option<String>,
}

// Construction and configuration methods
impl SharedCacheStore {
    /// Create a new shared store over a provider
    pub fn new<P: CacheProvider + 'static>(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
            namespace: None,
        }
    }

    /// Create a new shared store from an Arc
    pub fn from_arc(provider: Arc<dyn CacheProvider>) -> Self {
        Self {
            provider,
            namespace: None,
        }
    }

    /// Create a new shared store with a default namespace
    pub fn with_namespace<P: CacheProvider + 'static, S: Into<String>>(
        provider: P,
        namespace: S,
    ) -> Self {
        Self {
            provider: Arc::new(provider),
            namespace: Some(namespace.into()),
        }
    }

    /// Get the underlying cache provider as an Arc
    pub fn as_provider(&self) -> Arc<dyn CacheProvider> {
        Arc::clone(&self.provider)
    }

    /// Get a namespaced key
    fn namespaced_key(&self, key: &str) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}:{key}"),
            None => key.to_string(),
        }
    }
}

// Cache operation methods
impl SharedCacheStore {
    /// Get a typed value from the cache
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        let namespaced_key = self.namespaced_key(key);
        match self.provider.get_json(&namespaced_key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json).map_err(|e| {
                    Error::cache(format!("Failed to deserialize cached value: {e}"))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache
    pub async fn set<T>(&self, key: &str, value: &T, config: CacheEntryConfig) -> Result<()>
    where
        T: serde::Serialize + Send + Sync,
    {
        let namespaced_key = self.namespaced_key(key);
        let json = serde_json::to_string(value)
            .map_err(|e| Error::cache(format!("Failed to serialize value for cache: {e}")))?;
        self.provider.set_json(&namespaced_key, &json, config).await
    }

    /// Delete a value from the cache
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let namespaced_key = self.namespaced_key(key);
        self.provider.delete(&namespaced_key).await
    }

    /// Check if a key exists in the cache
    pub async fn exists(&self, key: &str) -> Result<bool> {
        let namespaced_key = self.namespaced_key(key);
        self.provider.exists(&namespaced_key).await
    }

    /// Remove every entry tagged with the group key
    pub async fn invalidate_group(&self, group: &str) -> Result<usize> {
        self.provider.invalidate_group(group).await
    }

    /// Clear all values from the cache
    pub async fn clear(&self) -> Result<()> {
        self.provider.clear().await
    }

    /// Get cache statistics
    pub async fn stats(&self) -> Result<CacheStats> {
        self.provider.stats().await
    }

    /// Get the number of live entries
    pub async fn size(&self) -> Result<usize> {
        self.provider.size().await
    }

    /// Create a namespaced view of this store
    pub fn namespaced<S: Into<String>>(&self, namespace: S) -> NamespacedCacheStore {
        NamespacedCacheStore {
            provider: Arc::clone(&self.provider),
            namespace: namespace.into(),
        }
    }
}

impl fmt::Debug for SharedCacheStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedCacheStore")
            .field("provider", &self.provider.provider_name())
            .field("namespace", &self.namespace)
            .finish()
    }
}

/// Namespaced cache store view
///
/// Typed access to a cache provider within a fixed namespace.
#[derive(Clone)]
pub struct NamespacedCacheStore {
    provider: Arc<dyn CacheProvider>,
    namespace: String,
}

impl NamespacedCacheStore {
    /// Get a typed value from the cache within this namespace
    pub async fn get<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: serde::de::DeserializeOwned + Send,
    {
        let namespaced_key = format!("{}:{}", self.namespace, key);
        match self.provider.get_json(&namespaced_key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json).map_err(|e| {
                    Error::cache(format!("Failed to deserialize cached value: {e}"))
                })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache within this namespace
    pub async fn set<T>(&self, key: &str, value: &T, config: CacheEntryConfig) -> Result<()>
    where
        T: serde::Serialize + Send + Sync,
    {
        let namespaced_key = format!("{}:{}", self.namespace, key);
        let json = serde_json::to_string(value)
            .map_err(|e| Error::cache(format!("Failed to serialize value for cache: {e}")))?;
        self.provider.set_json(&namespaced_key, &json, config).await
    }

    /// Delete a value from the cache within this namespace
    pub async fn delete(&self, key: &str) -> Result<bool> {
        let namespaced_key = format!("{}:{}", self.namespace, key);
        self.provider.delete(&namespaced_key).await
    }

    /// Get the inner cache provider
    pub fn inner(&self) -> Arc<dyn CacheProvider> {
        Arc::clone(&self.provider)
    }
}

impl From<SharedCacheStore> for Arc<dyn CacheProvider> {
    fn from(shared: SharedCacheStore) -> Self {
        shared.provider
    }
}
