//! # jdecode
//!
//! Command-line front end for `jdecode-core`: reads a JSON document from a
//! file or stdin, decodes the user record and prints the verdict.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod output;
