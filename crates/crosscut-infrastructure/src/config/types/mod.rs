//! Configuration types

pub mod app;
pub mod cache;
pub mod logging;
pub mod pipeline;

pub use app::AppConfig;
pub use cache::{CacheBackend, CacheConfig};
pub use logging::LoggingConfig;
pub use pipeline::PipelineConfig;
