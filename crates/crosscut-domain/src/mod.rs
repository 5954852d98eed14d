//! # Domain Layer
//!
//! Core types and boundary contracts for the crosscut interception library.
//!
//! This crate defines what an intercepted operation *is* — its identity,
//! arguments, declared concerns, validation schemas and rule outcomes —
//! together with the ports that external layers implement (cache backends,
//! performance report sinks). It has no dependencies on other workspace
//! crates.
//!
//! ## Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`value_objects`] | Operation identity, concern declarations, schemas, rule outcomes |
//! | [`ports`] | Boundary contracts implemented by providers and infrastructure |
//! | [`constants`] | Centralized domain defaults |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

// Re-export commonly used types
pub use error::{Error, Result};
pub use value_objects::{
    ArgValue, ConcernDeclaration, Constraint, FieldRules, Operation, RuleOutcome,
    ValidationSchema,
};
