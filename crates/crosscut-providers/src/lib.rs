//! Provider Implementations - crosscut
//!
//! Cache backend adapters implementing the `CacheProvider` port from
//! `crosscut-domain`. Providers are constructed explicitly (directly or
//! through the infrastructure factory) and passed into the pipeline.

pub mod cache;

pub use cache::MemoryCacheProvider;
#[cfg(feature = "cache-moka")]
pub use cache::MokaCacheProvider;
pub use cache::NullCacheProvider;
