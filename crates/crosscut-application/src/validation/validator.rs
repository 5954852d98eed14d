//! Schema-driven validator
//!
//! Applies a [`ValidationSchema`] to a JSON instance before the wrapped
//! operation runs. Fields are checked in schema declaration order,
//! constraints in declaration order within each field; the first
//! violation wins. The schema is a whitelist of what is checked, not a
//! shape validator: instance fields absent from the schema are ignored.
//! Constraints are pure functions of the field value; no I/O.

use crosscut_domain::value_objects::{Constraint, RuleOutcome, ValidationSchema};
use serde_json::Value;

/// The first constraint violation found in an instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Field that violated the constraint
    pub field: String,
    /// Name of the violated constraint
    pub constraint: &'static str,
    /// Human-readable description
    pub message: String,
}

/// Schema-driven field validator
pub struct Validator;

impl Validator {
    /// Validate an instance, reporting the outcome as a [`RuleOutcome`]
    pub fn validate(schema: &ValidationSchema, instance: &Value) -> RuleOutcome {
        match Self::check(schema, instance) {
            None => RuleOutcome::Ok,
            Some(violation) => RuleOutcome::failed(format!(
                "'{}' ({}): {}",
                violation.field, violation.constraint, violation.message
            )),
        }
    }

    /// Find the first violation in an instance, if any
    pub fn check(schema: &ValidationSchema, instance: &Value) -> Option<Violation> {
        for rules in &schema.fields {
            let value = instance.get(&rules.field);
            for constraint in &rules.constraints {
                if let Some(message) = check_constraint(constraint, value) {
                    return Some(Violation {
                        field: rules.field.clone(),
                        constraint: constraint.name(),
                        message,
                    });
                }
            }
        }
        None
    }
}

/// Apply one constraint to one (possibly absent) field value
///
/// Only `Required` asserts presence; every other constraint passes
/// vacuously on an absent or null value so optional fields stay
/// optional.
fn check_constraint(constraint: &Constraint, value: Option<&Value>) -> Option<String> {
    let present = match value {
        None | Some(Value::Null) => false,
        Some(_) => true,
    };

    match constraint {
        Constraint::Required => {
            let empty_string = matches!(value, Some(Value::String(s)) if s.is_empty());
            if !present || empty_string {
                Some("value is required".to_string())
            } else {
                None
            }
        }
        _ if !present => None,
        Constraint::MinLength(min) => match value {
            Some(Value::String(s)) if s.chars().count() < *min => {
                Some(format!("must be at least {min} characters"))
            }
            Some(Value::String(_)) => None,
            _ => Some("expects a string value".to_string()),
        },
        Constraint::MaxLength(max) => match value {
            Some(Value::String(s)) if s.chars().count() > *max => {
                Some(format!("must be at most {max} characters"))
            }
            Some(Value::String(_)) => None,
            _ => Some("expects a string value".to_string()),
        },
        Constraint::Range { min, max } => match value.and_then(Value::as_f64) {
            Some(n) if n < *min || n > *max => {
                Some(format!("must be between {min} and {max}"))
            }
            Some(_) => None,
            None => Some("expects a numeric value".to_string()),
        },
        Constraint::Pattern(regex) => match value {
            Some(Value::String(s)) if !regex.is_match(s) => {
                Some(format!("does not match pattern '{}'", regex.as_str()))
            }
            Some(Value::String(_)) => None,
            _ => Some("expects a string value".to_string()),
        },
    }
}
