//! Errors for record fields that are missing or mistyped.

use thiserror::Error;

use crate::value::{JsonKind, Shape};

/// A single record field could not be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Key absent from the record object
    #[error("Field '{field}' is missing")]
    Missing { field: &'static str },
    /// Key present, value of another JSON type (including `null`)
    #[error("Field '{field}' has wrong type: expected {expected}, found {found}")]
    WrongType {
        field: &'static str,
        expected: Shape,
        found: JsonKind,
    },
}

impl FieldError {
    /// Name of the offending field.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field } | Self::WrongType { field, .. } => *field,
        }
    }
}
