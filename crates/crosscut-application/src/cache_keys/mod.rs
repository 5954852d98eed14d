//! Cache key derivation
//!
//! Derives a deterministic cache key from operation identity and
//! argument values. The same name and argument values, in the same
//! order, always produce the same key; any differing value or order
//! produces a different key.

use crosscut_domain::constants::CACHE_KEY_SEPARATOR;
use crosscut_domain::value_objects::{ArgValue, Operation};

/// Deterministic cache key builder
///
/// Keys are the operation name followed by each argument's canonical,
/// type-tagged rendering, joined with `|`:
///
/// ```rust
/// use crosscut_application::cache_keys::KeyBuilder;
/// use crosscut_domain::value_objects::Operation;
///
/// let op = Operation::new("CarService.GetById").with_arg(5i64);
/// assert_eq!(KeyBuilder::build_key(&op), "CarService.GetById|i:5");
/// ```
///
/// The type tags prevent collisions between `(5, "abc")` and `("5abc")`;
/// separator escaping inside [`ArgValue::canonical`] keeps argument
/// boundaries unambiguous. Nothing here depends on memory addresses,
/// unordered-container iteration, or wall-clock time.
pub struct KeyBuilder;

impl KeyBuilder {
    /// Build the cache key for an operation
    pub fn build_key(operation: &Operation) -> String {
        let mut key = operation.name.clone();
        for arg in &operation.args {
            key.push(CACHE_KEY_SEPARATOR);
            key.push_str(&arg.canonical());
        }
        key
    }
}
