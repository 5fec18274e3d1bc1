//! # jdecode Core
//!
//! Typed decoding of untyped JSON trees - strictly functional Rust with zero unwraps.
//!
//! ## Laws (Compiler Enforced)
//!
//! - No `unwrap()` - returns `Result` instead
//! - No `expect()` - returns `Result` instead
//! - No `panic!()` - returns `Result` instead
//! - No `unsafe` - safe Rust only
//!
//! ## Pipeline
//!
//! A document is decoded in one pass:
//!
//! 1. [`value`] casts narrow a `serde_json::Value` to exactly one shape.
//! 2. [`functional`] combinators (`bind`, `map`, `apply`) chain those casts.
//! 3. [`decode`] walks `[ { "user": { .. } } ]` and builds a [`User`] only when
//!    every field is present and well typed.
//! 4. [`report`] wraps parsing + decoding into a single verdict.
//!
//! ```
//! use jdecode_core::decode_str;
//!
//! let user = decode_str(r#"[{"user":{"name":"Ada","description":"Engineer","followers_count":42}}]"#);
//! assert!(user.is_ok_and(|u| u.followers_count() == 42));
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod decode;
pub mod domain;
mod error;
pub mod functional;
pub mod report;
pub mod value;

pub use decode::{decode_entry, decode_value, try_user, FromJsonObject};
pub use domain::User;
pub use error::{Error, ErrorKind, FieldError, ParseError, Result, StructuralError};
pub use report::{decode_bytes, decode_reader, decode_str, decode_with};
pub use value::{JsonKind, Shape};
