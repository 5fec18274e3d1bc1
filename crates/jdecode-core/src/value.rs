//! Narrow casts over `serde_json::Value`.
//!
//! `serde_json::Value` is the closed tagged union
//! `Null | Bool | Number | String | Array | Object`. Each cast here views a
//! value as exactly one shape and yields `None` on any mismatch. There is no
//! coercion: a number never reads as a string, a string never reads as an
//! integer, and a fractional or out-of-range number is not an integer.

use serde_json::{Map, Value};
use strum::{Display, EnumIter, IntoStaticStr};

/// The runtime variant of a JSON value, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classifies a value by its variant.
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

/// The shape a cast asks for.
///
/// Finer than [`JsonKind`]: an integer is a particular kind of number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    Null,
    Bool,
    Integer,
    String,
    Array,
    Object,
}

/// Views a value as a string.
pub fn as_string(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) => Some(s.as_str()),
        _ => None,
    }
}

/// Views a value as a signed 64-bit integer.
///
/// Only integral numbers in `i64` range qualify; `42.0` and `1e3` do not.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

/// Views a value as a boolean.
pub const fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        _ => None,
    }
}

/// Succeeds only for an explicit `null`.
pub const fn as_null(value: &Value) -> Option<()> {
    match value {
        Value::Null => Some(()),
        _ => None,
    }
}

/// Views a value as an object.
pub const fn as_object(value: &Value) -> Option<&Map<String, Value>> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Views a value as an array.
pub fn as_array(value: &Value) -> Option<&[Value]> {
    match value {
        Value::Array(items) => Some(items.as_slice()),
        _ => None,
    }
}

/// Looks up `key` in an object.
///
/// A key mapped to `null` is present: this returns `Some(&Value::Null)`.
/// Only a missing key yields `None`.
pub fn lookup<'v>(object: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
    object.get(key)
}

/// Indexes into an array, `None` when out of bounds.
pub fn at(items: &[Value], index: usize) -> Option<&Value> {
    items.get(index)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use strum::IntoEnumIterator;

    use super::*;

    fn samples() -> Vec<Value> {
        vec![
            json!(null),
            json!(true),
            json!(7),
            json!("seven"),
            json!([7]),
            json!({"seven": 7}),
        ]
    }

    #[test]
    fn test_kind_covers_every_variant() {
        let kinds: Vec<JsonKind> = samples().iter().map(JsonKind::of).collect();
        let all: Vec<JsonKind> = JsonKind::iter().collect();
        assert_eq!(kinds, all);
    }

    #[test]
    fn test_kind_display_is_lowercase() {
        assert_eq!(JsonKind::Object.to_string(), "object");
        let name: &'static str = JsonKind::Null.into();
        assert_eq!(name, "null");
    }

    #[test]
    fn test_each_cast_accepts_exactly_one_variant() {
        let hits = |cast: &dyn Fn(&Value) -> bool| samples().iter().filter(|v| cast(v)).count();

        assert_eq!(hits(&|v| as_null(v).is_some()), 1);
        assert_eq!(hits(&|v| as_bool(v).is_some()), 1);
        assert_eq!(hits(&|v| as_integer(v).is_some()), 1);
        assert_eq!(hits(&|v| as_string(v).is_some()), 1);
        assert_eq!(hits(&|v| as_array(v).is_some()), 1);
        assert_eq!(hits(&|v| as_object(v).is_some()), 1);
    }

    #[test]
    fn test_shape_names_integer_separately() {
        assert_eq!(Shape::Integer.to_string(), "integer");
        assert_eq!(Shape::String.to_string(), JsonKind::String.to_string());
    }

    #[test]
    fn test_no_coercion_between_string_and_number() {
        assert_eq!(as_string(&json!(42)), None);
        assert_eq!(as_integer(&json!("42")), None);
    }

    #[test]
    fn test_integer_rejects_fractional_and_out_of_range() {
        assert_eq!(as_integer(&json!(42)), Some(42));
        assert_eq!(as_integer(&json!(-3)), Some(-3));
        assert_eq!(as_integer(&json!(42.5)), None);
        assert_eq!(as_integer(&json!(42.0)), None);
        assert_eq!(as_integer(&json!(u64::MAX)), None);
    }

    #[test]
    fn test_lookup_distinguishes_null_from_missing() {
        let value = json!({"present": null});
        assert!(as_object(&value).is_some());
        let Some(object) = as_object(&value) else {
            return;
        };
        assert_eq!(lookup(object, "present"), Some(&Value::Null));
        assert_eq!(lookup(object, "absent"), None);
    }

    #[test]
    fn test_at_bounds() {
        let value = json!([1, 2]);
        let items = as_array(&value).unwrap_or_default();
        assert_eq!(at(items, 1), Some(&json!(2)));
        assert_eq!(at(items, 2), None);
        assert_eq!(at(&[], 0), None);
    }
}
