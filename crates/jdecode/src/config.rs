//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Config file: `--config <PATH>`, or `./jdecode.toml` when present
//! 3. Environment variables: `JDECODE_FORMAT`, `JDECODE_LOG_LEVEL`
//! 4. CLI flags (`--json`, `--verbose`)
//!
//! # Example Config
//!
//! ```toml
//! format = "json"
//! log_level = "debug"
//! ```

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "jdecode.toml";

/// Errors raised while assembling the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid {key} value: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// `OutputFormat` represents the available output formats.
///
/// Replaces a `json: bool` flag so an undefined format cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output format - structured, machine-readable
    Json,
    /// Human-readable output format - terminal-friendly
    #[default]
    Human,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "human" | "text" => Ok(Self::Human),
            _ => Err(ConfigError::InvalidValue {
                key: "format",
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
        }
    }
}

/// Default verbosity when `RUST_LOG` is not set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive string understood by `tracing_subscriber::EnvFilter`.
    pub const fn as_directive(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(ConfigError::InvalidValue {
                key: "log_level",
                value: s.to_string(),
            }),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CONFIGURATION STRUCTURES
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    pub format: OutputFormat,
    pub log_level: LogLevel,
}

/// On-disk layer; absent keys leave the lower layer untouched.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PartialConfig {
    format: Option<OutputFormat>,
    log_level: Option<LogLevel>,
}

impl Config {
    /// Loads defaults, then the config file, then environment variables.
    ///
    /// An explicit `path` must exist; the implicit `./jdecode.toml` is
    /// skipped when missing.
    pub fn load(
        path: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => Some(load_toml_file(path)?),
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.is_file() {
                    Some(load_toml_file(implicit)?)
                } else {
                    None
                }
            }
        };

        let mut config = Self::default();
        if let Some(file) = file {
            config.merge(file);
        }
        config.apply_env_vars(env)?;
        Ok(config)
    }

    /// Applies CLI flags, the highest-priority layer.
    #[must_use]
    pub fn with_flags(mut self, json: bool, verbose: bool) -> Self {
        if json {
            self.format = OutputFormat::Json;
        }
        if verbose {
            self.log_level = LogLevel::Debug;
        }
        self
    }

    fn merge(&mut self, other: PartialConfig) {
        if let Some(format) = other.format {
            self.format = format;
        }
        if let Some(log_level) = other.log_level {
            self.log_level = log_level;
        }
    }

    fn apply_env_vars(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        // JDECODE_FORMAT
        if let Some(value) = env("JDECODE_FORMAT") {
            self.format = value.parse()?;
        }
        // JDECODE_LOG_LEVEL
        if let Some(value) = env("JDECODE_LOG_LEVEL") {
            self.log_level = value.parse()?;
        }
        Ok(())
    }
}

fn load_toml_file(path: &Path) -> Result<PartialConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
