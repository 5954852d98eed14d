//! Declarative Registries
//!
//! Explicitly constructed registries populated at startup and passed
//! into the pipeline: no ambient global state, no runtime discovery.
//! Both registries are write-at-startup, read-only thereafter.

pub mod concerns;
pub mod schemas;

pub use concerns::ConcernRegistry;
pub use schemas::SchemaRegistry;
