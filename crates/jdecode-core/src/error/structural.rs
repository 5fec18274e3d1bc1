//! Errors for documents whose outer shape does not lead to a record.

use thiserror::Error;

use crate::value::JsonKind;

/// The path `array -> first element -> envelope object` is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// Root value is not an array
    #[error("Structural error: expected an array at the root, found {found}")]
    RootNotArray { found: JsonKind },
    /// Root array has no first element
    #[error("Structural error: root array is empty")]
    EmptyArray,
    /// First element is not an object
    #[error("Structural error: expected the first element to be an object, found {found}")]
    EntryNotObject { found: JsonKind },
    /// Envelope key is absent from the first element
    #[error("Structural error: key '{key}' is missing")]
    MissingEnvelope { key: &'static str },
    /// Envelope key holds something other than an object
    #[error("Structural error: expected '{key}' to be an object, found {found}")]
    EnvelopeNotObject { key: &'static str, found: JsonKind },
}
