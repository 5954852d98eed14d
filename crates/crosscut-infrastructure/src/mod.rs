//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and
//! domain layers: configuration loading, structured logging, cache
//! backend wiring, and performance report sinks.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via Figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Typed cache facade, namespacing, and the provider factory |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`reporting`] | Slow-operation report sinks |
//!
//! ### Assembly
//! | Module | Description |
//! |--------|-------------|
//! | [`wiring`] | Explicit pipeline assembly from configuration |

// Core infrastructure modules
pub mod cache;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod reporting;
pub mod wiring;

// Re-export commonly used types
pub use cache::{SharedCacheStore, build_cache_provider};
pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use reporting::{CollectingReporter, TracingReporter};
pub use wiring::build_pipeline;
