//! Application Layer - crosscut
//!
//! Use cases of the interception core: the rule chain, the declarative
//! validator, cache key derivation, performance measurement, and the
//! pipeline that composes them around a target operation.
//!
//! ## Architecture
//!
//! The application layer:
//! - Implements the concern-execution use cases
//! - Holds the explicit schema and concern registries
//! - Depends only on `crosscut-domain` (ports and value objects);
//!   backends arrive as `Arc<dyn Trait>` at construction time
//!
//! ## Control Flow
//!
//! A caller invokes an operation through [`pipeline::Pipeline::invoke`]:
//! declared validation runs first, then per-invocation business rules,
//! then the cache lookup for cache-eligible reads, then the target
//! callable, then cache writes/invalidations, with the whole span
//! optionally measured and reported.

pub mod cache_keys;
pub mod pipeline;
pub mod registry;
pub mod rules;
pub mod timing;
pub mod validation;

pub use cache_keys::KeyBuilder;
pub use pipeline::{Invocation, Pipeline, PipelineBuilder};
pub use registry::{ConcernRegistry, SchemaRegistry};
pub use rules::{RuleChain, RuleCheck};
pub use timing::PerformanceMonitor;
pub use validation::Validator;
