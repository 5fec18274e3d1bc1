//! Rendering of a decode verdict.
//!
//! JSON mode always writes one object to stdout:
//!
//! - success: `{"success": true, "user": {...}}`
//! - failure: `{"success": false, "error": {"code": "...", "kind": "...", "message": "...", ...}}`
//!
//! Human mode writes the record to stdout and errors to stderr.

use std::io::Write;

use anyhow::{Context, Result};
use jdecode_core::{Error, FieldError, User};
use serde::Serialize;
use serde_json::json;

use crate::config::OutputFormat;

/// Standard JSON success response wrapper
///
/// Flattens the payload into the response next to the success indicator.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSuccess<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> JsonSuccess<T> {
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Payload of a successful decode.
#[derive(Debug, Clone, Serialize)]
pub struct UserOutput<'a> {
    pub user: &'a User,
}

/// Standard JSON error response structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonError {
    pub success: bool,
    pub error: ErrorDetail,
}

/// Detailed error information with optional context and resolution hints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    /// Machine-readable error code in `SCREAMING_SNAKE_CASE` format
    pub code: &'static str,
    /// Lowercase error category, e.g. `structural`
    pub kind: &'static str,
    /// Human-readable error message
    pub message: String,
    pub exit_code: i32,
    /// Optional structured additional context
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Optional suggestion for resolving the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

const EXPECTED_SHAPE: &str =
    r#"[{"user": {"name": "...", "description": "...", "followers_count": 0}}]"#;

impl From<&Error> for ErrorDetail {
    fn from(err: &Error) -> Self {
        let details = match err {
            Error::Field(FieldError::Missing { field }) => Some(json!({ "field": field })),
            Error::Field(FieldError::WrongType {
                field,
                expected,
                found,
            }) => Some(json!({
                "field": field,
                "expected": expected.to_string(),
                "found": found.to_string(),
            })),
            Error::Parse(parse) => Some(json!({ "line": parse.line, "column": parse.column })),
            Error::Structural(_) | Error::Generic(_) | Error::Io(_) => None,
        };
        let suggestion = match err {
            Error::Structural(_) | Error::Field(_) => {
                Some(format!("Expected a document shaped like {EXPECTED_SHAPE}"))
            }
            Error::Parse(parse) if parse.is_eof() => {
                Some("Input ended early; check for a truncated document".to_string())
            }
            Error::Parse(_) => Some("Check that the input is valid JSON".to_string()),
            Error::Generic(_) | Error::Io(_) => None,
        };

        Self {
            code: err.kind().code(),
            kind: err.kind().category(),
            message: err.to_string(),
            exit_code: err.exit_code(),
            details,
            suggestion,
        }
    }
}

/// Writes the verdict in the requested format and returns the exit code.
pub fn render(
    verdict: &jdecode_core::Result<User>,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32> {
    match (verdict, format) {
        (Ok(user), OutputFormat::Json) => {
            write_json(out, &JsonSuccess::new(UserOutput { user }))?;
            Ok(0)
        }
        (Ok(user), OutputFormat::Human) => {
            writeln!(out, "name:        {}", user.name())?;
            writeln!(out, "description: {}", user.description())?;
            writeln!(out, "followers:   {}", user.followers_count())?;
            Ok(0)
        }
        (Err(error), OutputFormat::Json) => {
            let response = JsonError {
                success: false,
                error: ErrorDetail::from(error),
            };
            write_json(out, &response)?;
            Ok(error.exit_code())
        }
        (Err(error), OutputFormat::Human) => {
            writeln!(err, "Error: {error}")?;
            Ok(error.exit_code())
        }
    }
}

fn write_json(out: &mut impl Write, value: &impl Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    writeln!(out, "{text}").context("Failed to write output")
}
