//! Centralized infrastructure constants

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "CROSSCUT";

/// Environment variable consulted for log filter overrides
pub const LOG_ENV_VAR: &str = "CROSSCUT_LOG";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "crosscut.toml";

/// Directory probed for the default configuration file
pub const DEFAULT_CONFIG_DIR: &str = "config";

/// Default namespace for cache keys
pub const DEFAULT_CACHE_NAMESPACE: &str = "crosscut";
