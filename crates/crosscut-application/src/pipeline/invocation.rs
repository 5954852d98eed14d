//! One pipeline invocation
//!
//! Bundles the operation identity, the per-invocation business rule
//! checks, and the target callable that performs the real work.

use crate::rules::RuleCheck;
use crosscut_domain::error::Result;
use crosscut_domain::value_objects::{Operation, RuleOutcome};
use serde_json::Value;
use std::pin::Pin;

/// Future produced by a target callable
pub type TargetFuture = Pin<Box<dyn Future<Output = Result<Value>> + Send>>;

/// The target operation: a callable performing the real work
///
/// Invoked at most once per pipeline invocation; a cache hit or a
/// short-circuiting failure means it is never called.
pub type TargetFn = Box<dyn FnOnce() -> TargetFuture + Send>;

/// A single operation invocation flowing through the pipeline
///
/// ## Example
///
/// ```ignore
/// let invocation = Invocation::new(
///     Operation::new("CarService.GetAll"),
///     || async { Ok(serde_json::json!([])) },
/// )
/// .with_rule(|| RuleOutcome::Ok);
/// let result = pipeline.invoke(invocation).await?;
/// ```
pub struct Invocation {
    /// Operation identity and arguments
    pub operation: Operation,
    pub(crate) rules: Vec<RuleCheck>,
    pub(crate) target: TargetFn,
}

impl Invocation {
    /// Create an invocation for an operation and its target callable
    pub fn new<F, Fut>(operation: Operation, target: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<Value>> + Send + 'static,
    {
        Self {
            operation,
            rules: Vec::new(),
            target: Box::new(move || Box::pin(target())),
        }
    }

    /// Append a business rule check, preserving declaration order
    ///
    /// Rules run after declared validation and before the cache lookup;
    /// the first failing rule ends the invocation without touching the
    /// target or the cache.
    pub fn with_rule<F>(mut self, check: F) -> Self
    where
        F: FnOnce() -> RuleOutcome + Send + 'static,
    {
        self.rules.push(Box::new(check));
        self
    }
}

impl std::fmt::Debug for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invocation")
            .field("operation", &self.operation.name)
            .field("rules", &self.rules.len())
            .finish()
    }
}
