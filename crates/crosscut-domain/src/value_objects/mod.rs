//! Interception Value Objects
//!
//! Value objects describing an intercepted operation and the declarative
//! metadata attached to it: argument values, concern declarations,
//! validation schemas and rule outcomes.
//!
//! All types here are immutable after construction; the pipeline never
//! mutates an operation or a declaration in flight.

/// Concern declarations attached to operations at registration time
pub mod concern;
/// Operation identity and type-tagged argument values
pub mod operation;
/// Rule check outcomes
pub mod rule;
/// Declarative field constraint schemas
pub mod schema;

pub use concern::ConcernDeclaration;
pub use operation::{ArgValue, Operation};
pub use rule::RuleOutcome;
pub use schema::{Constraint, FieldRules, ValidationSchema};
