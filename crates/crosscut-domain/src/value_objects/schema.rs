//! Declarative validation schemas
//!
//! A schema is a whitelist of checked fields, not a shape validator:
//! fields present in the instance but absent from the schema are
//! ignored. Constraints are pure functions of the field value. Pattern
//! constraints compile their regex at schema construction so malformed
//! patterns surface at registration, never during validation.

use regex::Regex;

/// One constraint on a field value
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Field must be present, non-null, and (for strings) non-empty
    Required,
    /// String length must not fall below the bound
    MinLength(usize),
    /// String length must not exceed the bound
    MaxLength(usize),
    /// Numeric value must fall within the inclusive bounds
    Range {
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
    /// String value must match the compiled pattern
    Pattern(Regex),
}

impl Constraint {
    /// Compile a pattern constraint
    ///
    /// Returns the regex compile error so registration can reject a bad
    /// schema instead of failing every later validation.
    pub fn pattern(source: &str) -> Result<Self, regex::Error> {
        Ok(Self::Pattern(Regex::new(source)?))
    }

    /// Constraint name used in violation messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength(_) => "min_length",
            Self::MaxLength(_) => "max_length",
            Self::Range { .. } => "range",
            Self::Pattern(_) => "pattern",
        }
    }
}

/// Ordered constraints declared for one field
#[derive(Debug, Clone)]
pub struct FieldRules {
    /// Field name in the instance object
    pub field: String,
    /// Constraints, applied in declaration order
    pub constraints: Vec<Constraint>,
}

/// Value Object: Validation Schema
///
/// Named mapping from field name to an ordered constraint list. Loaded
/// once at registration, read-only thereafter.
///
/// ## Example
///
/// ```rust
/// use crosscut_domain::value_objects::{Constraint, ValidationSchema};
///
/// let schema = ValidationSchema::new("car")
///     .field("description", vec![Constraint::Required, Constraint::MinLength(2)])
///     .field("daily_price", vec![Constraint::Range { min: 0.0, max: 10_000.0 }]);
/// assert_eq!(schema.fields.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationSchema {
    /// Schema name referenced by `Validate` concern declarations
    pub name: String,
    /// Field rules in declaration order
    pub fields: Vec<FieldRules>,
}

impl ValidationSchema {
    /// Create an empty schema
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field's constraints, preserving declaration order
    pub fn field<S: Into<String>>(mut self, field: S, constraints: Vec<Constraint>) -> Self {
        self.fields.push(FieldRules {
            field: field.into(),
            constraints,
        });
        self
    }
}
