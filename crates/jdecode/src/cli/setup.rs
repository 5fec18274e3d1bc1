//! Global setup utilities for CLI initialization
//!
//! Provides setup routines for:
//! - Layered configuration loading
//! - Logging initialization with tracing

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use super::Args;
use crate::config::{Config, LogLevel};

/// Loads the configuration layers and applies the CLI flags on top.
///
/// `env` resolves `JDECODE_*` variables; the binary passes the process
/// environment.
///
/// # Errors
/// Returns an error if the config file cannot be read or a value is invalid
pub fn load_config(args: &Args, env: impl Fn(&str) -> Option<String>) -> Result<Config> {
    Config::load(args.config.as_deref(), env)
        .map(|config| config.with_flags(args.json, args.verbose))
        .context("Failed to load configuration")
}

/// Initialize tracing subscriber for logging
///
/// Configures the tracing subscriber with:
/// - `RUST_LOG` when set, the configured level otherwise
/// - Stderr output (to avoid mixing with stdout)
///
/// # Errors
/// Returns an error if the subscriber initialization fails
pub fn init_tracing(level: LogLevel) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::config::OutputFormat;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    /// An empty config file, so a stray `./jdecode.toml` is never read.
    fn empty_config() -> Result<(tempfile::TempDir, String)> {
        let dir = tempfile::TempDir::new()?;
        let file = dir.path().join("empty.toml");
        std::fs::write(&file, "")?;
        let path = file.display().to_string();
        Ok((dir, path))
    }

    #[test]
    fn test_flags_reach_config() -> Result<()> {
        let (_dir, config) = empty_config()?;
        let args = Args::try_parse_from([
            "jdecode",
            "--json",
            "--verbose",
            "--config",
            config.as_str(),
        ])?;
        let config = load_config(&args, no_env)?;
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Debug);
        Ok(())
    }

    #[test]
    fn test_flags_override_env() -> Result<()> {
        let (_dir, config) = empty_config()?;
        let args = Args::try_parse_from(["jdecode", "--json", "--config", config.as_str()])?;
        let env = |key: &str| (key == "JDECODE_FORMAT").then(|| "human".to_string());
        let config = load_config(&args, env)?;
        assert_eq!(config.format, OutputFormat::Json);
        Ok(())
    }

    #[test]
    fn test_invalid_env_fails() -> Result<()> {
        let (_dir, config) = empty_config()?;
        let args = Args::try_parse_from(["jdecode", "--config", config.as_str()])?;
        let env = |key: &str| (key == "JDECODE_FORMAT").then(|| "yaml".to_string());
        assert!(load_config(&args, env).is_err());
        Ok(())
    }

    #[test]
    fn test_missing_config_file_fails() -> Result<()> {
        let args = Args::try_parse_from(["jdecode", "--config", "/nonexistent/jdecode.toml"])?;
        assert!(load_config(&args, no_env).is_err());
        Ok(())
    }
}
