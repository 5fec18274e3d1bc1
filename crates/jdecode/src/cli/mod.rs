//! Command-line surface: argument parsing and the decode run.

pub mod setup;

use std::{
    io::{Read, Write},
    path::{Path, PathBuf},
};

use anyhow::Result;
use clap::Parser;
use jdecode_core::decode_with;
use tracing::{debug, info};

use crate::{config::Config, output::render};

/// Decode a user record from a JSON timeline document.
#[derive(Debug, Clone, Parser)]
#[command(name = "jdecode", version, about)]
pub struct Args {
    /// JSON document to decode; `-` or omitted reads stdin
    pub file: Option<PathBuf>,

    /// Emit machine-readable JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Config file (defaults to ./jdecode.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Input path, `None` meaning stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

/// Reads the whole input, from a file or from `stdin`.
pub fn read_input(path: Option<&Path>, stdin: &mut impl Read) -> jdecode_core::Result<Vec<u8>> {
    match path {
        Some(path) => std::fs::read(path).map_err(|e| {
            jdecode_core::Error::io_error(format!("Failed to read {}: {e}", path.display()))
        }),
        None => {
            let mut buffer = Vec::new();
            stdin
                .read_to_end(&mut buffer)
                .map_err(|e| jdecode_core::Error::io_error(format!("Failed to read stdin: {e}")))?;
            Ok(buffer)
        }
    }
}

/// Reads, decodes and renders one document. Returns the process exit code.
pub fn run(
    args: &Args,
    config: &Config,
    stdin: &mut impl Read,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<i32> {
    let path = args.input_path();
    debug!(input = ?path, format = %config.format, "starting decode");

    match read_input(path, stdin) {
        Ok(bytes) => decode_with(&bytes, |verdict| {
            if let Ok(user) = &verdict {
                info!(name = user.name(), "decoded user record");
            }
            render(&verdict, config.format, out, err)
        }),
        Err(error) => render(&Err(error), config.format, out, err),
    }
}
