//! Validation schema registry

use crosscut_domain::value_objects::ValidationSchema;
use std::collections::HashMap;

/// Registry of validation schemas, keyed by schema name
///
/// `Validate` concern declarations reference schemas by name; the
/// pipeline resolves them here at invocation time.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<String, ValidationSchema>,
}

impl SchemaRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under its own name
    ///
    /// Re-registering a name replaces the previous schema.
    pub fn register(&mut self, schema: ValidationSchema) {
        self.schemas.insert(schema.name.clone(), schema);
    }

    /// Look up a schema by name
    pub fn get(&self, name: &str) -> Option<&ValidationSchema> {
        self.schemas.get(name)
    }

    /// Whether a schema with the given name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    /// Number of registered schemas
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}
