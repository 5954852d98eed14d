//! Interception Pipeline
//!
//! Composes the declared concerns of an operation around its target
//! callable. Per invocation the pipeline moves through the states
//! Registered → Validating → CacheCheck → Executing → PostProcess →
//! Done, with Failed reachable from Validating and Executing:
//!
//! - validation or rule failure short-circuits before the target runs
//!   and before any cache mutation
//! - a cache hit returns directly, skipping the target and any
//!   invalidation concerns
//! - cache writes and group invalidations run only after a successful
//!   target call, using the post-execution result
//! - measurement wraps the whole span, validation and cache lookup
//!   included, and reports on both success and failure
//!
//! Concerns of the same kind all execute, in declaration order. The
//! target is an explicit boxed callable passed in by the caller — plain
//! higher-order composition, no proxies, no reflection.

pub mod invocation;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use invocation::{Invocation, TargetFn, TargetFuture};
pub use pipeline::{Pipeline, PipelineBuilder};
