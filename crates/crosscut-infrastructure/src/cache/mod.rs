//! Caching infrastructure
//!
//! Typed access and namespacing on top of the JSON cache port, plus the
//! explicit factory that resolves a backend from configuration.
//! Provider implementations live in the crosscut-providers crate; the
//! port lives in crosscut-domain.

pub mod factory;
pub mod store;

pub use factory::build_cache_provider;
pub use store::{NamespacedCacheStore, SharedCacheStore};
