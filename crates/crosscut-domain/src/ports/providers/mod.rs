//! External Provider Ports
//!
//! Ports for backends the interception core depends on.
//!
//! | Port | Description |
//! |------|-------------|
//! | `CacheProvider` | Process-wide key→value store with TTL and group invalidation |

/// Cache provider port
pub mod cache;

pub use cache::{CacheEntryConfig, CacheProvider, CacheStats};
