//! Centralized domain constants

/// Default TTL for cache entries (5 minutes)
pub const CACHE_DEFAULT_TTL_SECS: u64 = 300;

/// Default threshold above which an operation is reported as slow
pub const DEFAULT_SLOW_CALL_THRESHOLD_MS: u64 = 500;

/// Separator between segments of a derived cache key
pub const CACHE_KEY_SEPARATOR: char = '|';
