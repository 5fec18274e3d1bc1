//! Decoder pipeline: from a parsed JSON tree to a typed record.
//!
//! The expected document is a non-empty array whose first element is an
//! object holding the record under an envelope key:
//!
//! ```json
//! [ { "user": { "name": "Ada", "description": "Engineer", "followers_count": 42 } } ]
//! ```
//!
//! Navigation and field extraction are chained with the combinators from
//! [`crate::functional`]; each step either yields the next borrowed node or
//! the most specific error for where the walk stopped.

use serde_json::{Map, Value};
use tap::TapFallible;
use tracing::{debug, trace};

use crate::{
    functional::{curry3, option, result},
    value::{as_array, as_integer, as_object, as_string, at, lookup, JsonKind, Shape},
    Error, Result, StructuralError, User,
};

/// A record that can be built from the object under its envelope key.
pub trait FromJsonObject: Sized {
    /// Key under which the record object sits in the first array entry.
    const ENVELOPE_KEY: &'static str;

    /// Builds the record from its object, all fields or nothing.
    fn from_object(object: &Map<String, Value>) -> Result<Self>;
}

/// Decodes a [`User`] from a parsed document.
pub fn decode_value(root: &Value) -> Result<User> {
    decode_entry::<User>(root)
}

/// Decodes any [`FromJsonObject`] record from a parsed document.
pub fn decode_entry<T: FromJsonObject>(root: &Value) -> Result<T> {
    debug!(envelope = T::ENVELOPE_KEY, "decoding document");
    result::bind(envelope(root, T::ENVELOPE_KEY), T::from_object)
        .tap_err(|err| debug!(kind = %err.kind(), error = %err, "decode failed"))
}

/// Walks `array -> first element -> object[key] -> object`.
fn envelope<'v>(root: &'v Value, key: &'static str) -> Result<&'v Map<String, Value>> {
    let items = result::require(as_array(root), || {
        Error::from(StructuralError::RootNotArray {
            found: JsonKind::of(root),
        })
    });
    let first = result::bind(items, |items| {
        result::require(at(items, 0), || Error::from(StructuralError::EmptyArray))
    });
    let entry = result::bind(first, |first| {
        result::require(as_object(first), || {
            Error::from(StructuralError::EntryNotObject {
                found: JsonKind::of(first),
            })
        })
    });
    let wrapped = result::bind(entry, |entry| {
        result::require(lookup(entry, key), || Error::missing_envelope(key))
    });
    result::bind(wrapped, |wrapped| {
        result::require(as_object(wrapped), || {
            Error::from(StructuralError::EnvelopeNotObject {
                key,
                found: JsonKind::of(wrapped),
            })
        })
    })
}

/// Looks up `field` and casts it, distinguishing a missing key from a
/// present value of the wrong type.
pub fn field<'v, T>(
    object: &'v Map<String, Value>,
    field: &'static str,
    expected: Shape,
    cast: impl FnOnce(&'v Value) -> Option<T>,
) -> Result<T> {
    trace!(field, %expected, "extracting field");
    result::bind(
        result::require(lookup(object, field), || Error::missing_field(field)),
        |value| {
            result::require(cast(value), || {
                Error::wrong_type(field, expected, JsonKind::of(value))
            })
        },
    )
}

/// Extracts an owned string field.
pub fn string_field(object: &Map<String, Value>, name: &'static str) -> Result<String> {
    result::map(str::to_owned, field(object, name, Shape::String, as_string))
}

/// Extracts an `i64` field.
pub fn integer_field(object: &Map<String, Value>, name: &'static str) -> Result<i64> {
    field(object, name, Shape::Integer, as_integer)
}

/// Decodes a [`User`] using only `Option`: success or nothing, no cause.
///
/// Succeeds exactly when [`decode_value`] does.
pub fn try_user(root: &Value) -> Option<User> {
    let first = option::bind(as_array(root), |items| at(items, 0));
    let entry = option::bind(first, as_object);
    let user = option::bind(entry, |entry| {
        option::bind(lookup(entry, User::ENVELOPE_KEY), as_object)
    });

    option::bind(user, |user| {
        let text = |key: &str| {
            option::map(str::to_owned, option::bind(lookup(user, key), as_string))
        };
        let name = text("name");
        let description = text("description");
        let followers_count = option::bind(lookup(user, "followers_count"), as_integer);

        option::apply(
            option::apply(option::map(curry3(User::new), name), description),
            followers_count,
        )
    })
}

/// Turns a bare absence into the catch-all error.
pub fn from_option<T>(value: Option<T>) -> Result<T> {
    result::require(value, || {
        Error::generic("document does not contain a complete record")
    })
}
