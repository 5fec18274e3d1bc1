//! Errors raised by the JSON parser before decoding starts.

use serde_json::error::Category;
use thiserror::Error;

/// The parser rejected the raw input.
///
/// Keeps the parser's own detail (message and position) without holding on
/// to the non-`Clone` `serde_json::Error` itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    pub category: Category,
}

impl ParseError {
    /// True when the input ended before a complete value was read.
    pub fn is_eof(&self) -> bool {
        self.category == Category::Eof
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            line: err.line(),
            column: err.column(),
            category: err.classify(),
            message: err.to_string(),
        }
    }
}
