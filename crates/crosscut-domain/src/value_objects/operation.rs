//! Operation identity and arguments
//!
//! An [`Operation`] is the unit the pipeline intercepts: a qualified name
//! plus an ordered list of argument values. Arguments are carried as
//! [`ArgValue`], a type-tagged enum, so that cache keys derived from them
//! cannot collide across types (`5` vs `"5"`) or across argument
//! boundaries (`(5, "abc")` vs `(5abc)`).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Value Object: Type-Tagged Argument
///
/// A single operation argument. The tag participates in canonical
/// rendering so two arguments of different types never render equal.
///
/// ## Example
///
/// ```rust
/// use crosscut_domain::value_objects::ArgValue;
///
/// let arg = ArgValue::from(5i64);
/// assert_eq!(arg.canonical(), "i:5");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value")]
pub enum ArgValue {
    /// Absent / null argument
    Null,
    /// Boolean argument
    Bool(bool),
    /// Integer argument
    Int(i64),
    /// Floating-point argument
    Float(f64),
    /// String argument
    Str(String),
    /// Structured argument (entity/DTO payload)
    Json(Value),
}

impl ArgValue {
    /// Short type tag used in canonical rendering
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Null => "n",
            Self::Bool(_) => "b",
            Self::Int(_) => "i",
            Self::Float(_) => "f",
            Self::Str(_) => "s",
            Self::Json(_) => "j",
        }
    }

    /// Canonical, deterministic rendering of this argument
    ///
    /// The rendering is a pure function of the value: no addresses, no
    /// unordered-container iteration, no wall-clock input. JSON payloads
    /// are re-serialized with object keys sorted recursively so two maps
    /// with the same entries always render identically. `|` and `\` in
    /// string payloads are escaped so argument boundaries stay
    /// unambiguous when values are joined with `|`.
    pub fn canonical(&self) -> String {
        match self {
            Self::Null => "n:".to_string(),
            Self::Bool(v) => format!("b:{v}"),
            Self::Int(v) => format!("i:{v}"),
            Self::Float(v) => {
                // Render through Value so 1.0 and 1 stay distinct from Int(1)
                format!("f:{v}")
            }
            Self::Str(v) => format!("s:{}", escape_segment(v)),
            Self::Json(v) => format!("j:{}", escape_segment(&canonical_json(v))),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for ArgValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Value> for ArgValue {
    fn from(v: Value) -> Self {
        Self::Json(v)
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

/// Value Object: Intercepted Operation
///
/// Identity of one invocation: a qualified operation name
/// (`"CarService.GetAll"` style) and its ordered arguments. Immutable per
/// invocation.
///
/// ## Example
///
/// ```rust
/// use crosscut_domain::value_objects::Operation;
///
/// let op = Operation::new("CarService.GetById").with_arg(42i64);
/// assert_eq!(op.name, "CarService.GetById");
/// assert_eq!(op.args.len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    /// Qualified operation name
    pub name: String,
    /// Ordered argument list
    pub args: Vec<ArgValue>,
}

impl Operation {
    /// Create an operation with no arguments
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument, preserving declaration order
    pub fn with_arg<A: Into<ArgValue>>(mut self, arg: A) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append multiple arguments, preserving declaration order
    pub fn with_args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<ArgValue>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// First structured (JSON) argument, if any
    ///
    /// Validation concerns apply to structured payload arguments; scalar
    /// arguments carry no fields to check.
    pub fn json_args(&self) -> impl Iterator<Item = &Value> {
        self.args.iter().filter_map(|arg| match arg {
            ArgValue::Json(v) => Some(v),
            _ => None,
        })
    }
}

/// Escape `\` and `|` so joined segments stay unambiguous
fn escape_segment(s: &str) -> String {
    s.replace('\\', "\\\\").replace('|', "\\|")
}

/// Serialize a JSON value with object keys sorted recursively
///
/// serde_json's default map is already ordered, but canonical keys must
/// not depend on which map backend a downstream build enables, so the
/// ordering is enforced here.
pub fn canonical_json(value: &Value) -> String {
    fn canonicalize(value: &Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<&String, Value> =
                    map.iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(
                    sorted
                        .into_iter()
                        .map(|(k, v)| (k.clone(), v))
                        .collect(),
                )
            }
            Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
            other => other.clone(),
        }
    }
    canonicalize(value).to_string()
}
