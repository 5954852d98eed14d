//! Tests for the explicit schema and concern registries

use crosscut_application::registry::{ConcernRegistry, SchemaRegistry};
use crosscut_domain::value_objects::{ConcernDeclaration, Constraint, ValidationSchema};
use std::time::Duration;

#[test]
fn schema_registry_lookup() {
    let mut registry = SchemaRegistry::new();
    assert!(registry.is_empty());

    registry.register(ValidationSchema::new("car").field("description", vec![Constraint::Required]));

    assert!(registry.contains("car"));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("car").unwrap().fields.len(), 1);
    assert!(registry.get("rental").is_none());
}

#[test]
fn schema_registry_reregistration_replaces() {
    let mut registry = SchemaRegistry::new();
    registry.register(ValidationSchema::new("car"));
    registry.register(ValidationSchema::new("car").field("plate", vec![Constraint::Required]));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("car").unwrap().fields.len(), 1);
}

#[test]
fn concern_registry_preserves_declaration_order() {
    let mut registry = ConcernRegistry::new();
    registry.register(
        "CarService.Add",
        [
            ConcernDeclaration::validate("car"),
            ConcernDeclaration::cache_invalidate("CarService.Get"),
            ConcernDeclaration::measure(Some(Duration::from_millis(250))),
        ],
    );

    let kinds: Vec<&str> = registry
        .concerns_for("CarService.Add")
        .iter()
        .map(ConcernDeclaration::kind)
        .collect();
    assert_eq!(kinds, ["validate", "cache_invalidate", "measure"]);
}

#[test]
fn concern_registry_appends_on_repeat_registration() {
    let mut registry = ConcernRegistry::new();
    registry.register("Op", [ConcernDeclaration::cache_put("g1")]);
    registry.register("Op", [ConcernDeclaration::cache_put("g2")]);

    assert_eq!(registry.concerns_for("Op").len(), 2);
}

#[test]
fn unknown_operation_has_no_concerns() {
    let registry = ConcernRegistry::new();
    assert!(registry.concerns_for("Nope").is_empty());
}
