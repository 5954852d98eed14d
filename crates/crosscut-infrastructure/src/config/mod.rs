//! Configuration system
//!
//! Typed configuration structs and the Figment-based loader merging
//! defaults, a TOML file, and prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, CacheBackend, CacheConfig, LoggingConfig, PipelineConfig};
