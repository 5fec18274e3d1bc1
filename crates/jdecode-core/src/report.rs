//! Entry points: raw input in, exactly one verdict out.
//!
//! Parsing and decoding run synchronously in the caller's context. The
//! verdict is either returned directly or handed to a continuation, which is
//! called exactly once before [`decode_with`] returns.

use std::io::Read;

use serde_json::Value;
use tracing::debug;

use crate::{decode::decode_value, functional::result, Error, Result, User};

/// Parses `input` as JSON and decodes a [`User`], then passes the verdict to `k`.
///
/// `k` runs exactly once on every path; its return value is passed through.
///
/// # Examples
///
/// ```
/// use jdecode_core::{decode_with, ErrorKind};
///
/// let kind = decode_with(b"[]", |verdict| verdict.err().map(|e| e.kind()));
/// assert_eq!(kind, Some(ErrorKind::Structural));
/// ```
pub fn decode_with<K, R>(input: &[u8], k: K) -> R
where
    K: FnOnce(Result<User>) -> R,
{
    k(decode_bytes(input))
}

/// Parses and decodes raw bytes.
pub fn decode_bytes(input: &[u8]) -> Result<User> {
    debug!(bytes = input.len(), "parsing input");
    let root = serde_json::from_slice::<Value>(input).map_err(Error::from);
    result::bind(root, |root| decode_value(&root))
}

/// Parses and decodes a string.
pub fn decode_str(input: &str) -> Result<User> {
    decode_bytes(input.as_bytes())
}

/// Reads `reader` to the end, then parses and decodes the whole input.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<User> {
    let mut buffer = Vec::new();
    let read = reader.read_to_end(&mut buffer).map_err(Error::from);
    result::bind(read, |_| decode_bytes(&buffer))
}
