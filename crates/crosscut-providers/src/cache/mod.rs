//! Cache Provider Implementations
//!
//! Backends for operation result caching with TTL and group-based
//! invalidation.
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullCacheProvider`] | Testing | No-op stub; always a miss |
//! | [`MemoryCacheProvider`] | Local | DashMap-backed store with lazy expiry purge |
//! | [`MokaCacheProvider`] | Local | Moka-backed store with per-entry TTL expiry |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: Use `NullCacheProvider` to disable caching
//! - **Deterministic behavior**: Use `MemoryCacheProvider` (entries leave
//!   the store only by TTL or explicit invalidation)
//! - **High throughput**: Use `MokaCacheProvider`

pub mod memory;
#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;

// Re-export for convenience
pub use memory::MemoryCacheProvider;
#[cfg(feature = "cache-moka")]
pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;

// Re-export domain types used by cache providers
pub use crosscut_domain::ports::providers::cache::{CacheEntryConfig, CacheStats};
