//! Error types for jdecode with categorization:
//!
//! - **Parse errors**: the input is not JSON at all
//! - **Structural errors**: the JSON does not have the expected outer shape
//! - **Field errors**: a record field is missing or has the wrong type
//! - **Generic / Io errors**: fallback and input-reading failures
//!
//! Every failure of the pipeline ends up as one [`Error`] value; nothing is
//! signalled by panicking.

pub mod field;
pub mod parse;
pub mod structural;

pub use field::FieldError;
pub use parse::ParseError;
pub use structural::StructuralError;
use strum::{Display, EnumIter, IntoStaticStr};
use thiserror::Error as ThisError;

use crate::value::{JsonKind, Shape};

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type that can represent any decoding failure.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Input text was rejected by the JSON parser
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Document shape does not lead to a record object
    #[error(transparent)]
    Structural(#[from] StructuralError),
    /// A record field is missing or mistyped
    #[error(transparent)]
    Field(#[from] FieldError),
    /// Failure without a more specific cause
    #[error("Decode failed: {0}")]
    Generic(String),
    /// Input could not be read
    #[error("IO error: {0}")]
    Io(String),
}

/// Machine-readable category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum ErrorKind {
    #[strum(serialize = "PARSE_ERROR")]
    Parse,
    #[strum(serialize = "STRUCTURAL_ERROR")]
    Structural,
    #[strum(serialize = "FIELD_ERROR")]
    Field,
    #[strum(serialize = "GENERIC_ERROR")]
    Generic,
    #[strum(serialize = "IO_ERROR")]
    Io,
}

impl ErrorKind {
    /// Error code in `SCREAMING_SNAKE_CASE`.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// Lowercase category name, e.g. `"structural"`.
    pub const fn category(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Structural => "structural",
            Self::Field => "field",
            Self::Generic => "generic",
            Self::Io => "io",
        }
    }
}

// Convenience constructors
impl Error {
    /// A required field is absent.
    pub const fn missing_field(field: &'static str) -> Self {
        Self::Field(FieldError::Missing { field })
    }

    /// A field is present with the wrong JSON type.
    pub const fn wrong_type(field: &'static str, expected: Shape, found: JsonKind) -> Self {
        Self::Field(FieldError::WrongType {
            field,
            expected,
            found,
        })
    }

    /// The envelope key is absent from the first entry.
    pub const fn missing_envelope(key: &'static str) -> Self {
        Self::Structural(StructuralError::MissingEnvelope { key })
    }

    /// Last-resort error with a free-form message.
    pub fn generic(msg: impl Into<String>) -> Self {
        Self::Generic(msg.into())
    }

    /// Input reading failed.
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// The category this error belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::Structural(_) => ErrorKind::Structural,
            Self::Field(_) => ErrorKind::Field,
            Self::Generic(_) => ErrorKind::Generic,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns the process exit code for this error.
    ///
    /// - 1: the input was read but did not decode
    /// - 2: the input could not be read
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Parse(_) | Self::Structural(_) | Self::Field(_) | Self::Generic(_) => 1,
            Self::Io(_) => 2,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::io_error(err.to_string())
        } else {
            Self::Parse(ParseError::from(err))
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::io_error(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_error_display_missing_field() {
        let err = Error::missing_field("name");
        assert_eq!(err.to_string(), "Field 'name' is missing");
    }

    #[test]
    fn test_error_display_wrong_type() {
        let err = Error::wrong_type("followers_count", Shape::Integer, JsonKind::String);
        assert_eq!(
            err.to_string(),
            "Field 'followers_count' has wrong type: expected integer, found string"
        );
    }

    #[test]
    fn test_error_display_generic() {
        assert_eq!(Error::generic("no value").to_string(), "Decode failed: no value");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_error_from_serde_json_syntax() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").err();
        assert!(parse_err.is_some());
        let Some(parse_err) = parse_err else {
            return;
        };
        let err = Error::from(parse_err);
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_kind_codes() {
        let codes: Vec<&str> = ErrorKind::iter().map(ErrorKind::code).collect();
        assert_eq!(
            codes,
            [
                "PARSE_ERROR",
                "STRUCTURAL_ERROR",
                "FIELD_ERROR",
                "GENERIC_ERROR",
                "IO_ERROR"
            ]
        );
    }

    #[test]
    fn test_kind_categories() {
        let categories: Vec<&str> = ErrorKind::iter().map(ErrorKind::category).collect();
        assert_eq!(categories, ["parse", "structural", "field", "generic", "io"]);
    }

    #[test]
    fn test_exit_code_decode_failures() {
        assert_eq!(Error::missing_field("name").exit_code(), 1);
        assert_eq!(Error::missing_envelope("user").exit_code(), 1);
        assert_eq!(Error::generic("x").exit_code(), 1);
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(Error::missing_field("name").kind(), ErrorKind::Field);
        assert_eq!(Error::missing_envelope("user").kind(), ErrorKind::Structural);
        assert_eq!(Error::generic("x").kind(), ErrorKind::Generic);
        assert_eq!(Error::io_error("x").kind(), ErrorKind::Io);
    }
}
