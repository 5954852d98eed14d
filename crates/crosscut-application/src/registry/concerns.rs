//! Concern declaration registry

use crosscut_domain::value_objects::ConcernDeclaration;
use std::collections::HashMap;

/// Registry mapping operation names to their declared concerns
///
/// Populated once at startup (static configuration, not
/// runtime-dynamic). Declaration order is preserved; the pipeline
/// executes same-kind concerns in that order. Operations with no
/// registered concerns invoke their target directly.
#[derive(Debug, Default)]
pub struct ConcernRegistry {
    concerns: HashMap<String, Vec<ConcernDeclaration>>,
}

impl ConcernRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register concerns for an operation, appending to any already
    /// declared for it
    pub fn register<S, I>(&mut self, operation: S, concerns: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = ConcernDeclaration>,
    {
        self.concerns
            .entry(operation.into())
            .or_default()
            .extend(concerns);
    }

    /// Concerns declared for an operation, in declaration order
    pub fn concerns_for(&self, operation: &str) -> &[ConcernDeclaration] {
        self.concerns
            .get(operation)
            .map_or(&[], Vec::as_slice)
    }

    /// Names of all operations with registered concerns
    pub fn operations(&self) -> impl Iterator<Item = &str> {
        self.concerns.keys().map(String::as_str)
    }

    /// Number of operations with registered concerns
    pub fn len(&self) -> usize {
        self.concerns.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.concerns.is_empty()
    }
}
