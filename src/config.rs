//! Configuration management for shell-capture.
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. Configuration file (JSON)
//! 4. Default values

use std::ffi::OsString;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::capture::{MAX_INDENT, READ_BUFFER_SIZE};
use crate::cli::Args;
use crate::execution::{RunnerConfig, DEFAULT_INDENT_WIDTH};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Console output configuration.
    pub output: OutputSection,
    /// Process execution configuration.
    pub execution: ExecutionSection,
    /// Logging configuration.
    pub logging: LoggingSection,
}

/// Console output section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Echo commands and their live output.
    pub verbose: bool,
    /// Starting nesting depth.
    pub indent_level: usize,
    /// Spaces per nesting level.
    pub indent_width: usize,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            verbose: false,
            indent_level: 0,
            indent_width: DEFAULT_INDENT_WIDTH,
        }
    }
}

/// Process execution section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecutionSection {
    /// Search path override; `PATH` is used when unset.
    pub search_path: Option<String>,
    /// Chunk size for stream reads.
    pub read_buffer_size: usize,
}

impl Default for ExecutionSection {
    fn default() -> Self {
        Self {
            search_path: None,
            read_buffer_size: READ_BUFFER_SIZE,
        }
    }
}

/// Logging configuration section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level (error, warn, info, debug, trace).
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Json)
    }

    /// Apply environment variable overrides.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup (for testing).
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(verbose) = lookup("SHELL_CAPTURE_VERBOSE").as_deref().and_then(parse_flag) {
            self.output.verbose = verbose;
        }

        if let Some(level) = lookup("SHELL_CAPTURE_INDENT") {
            if let Ok(level) = level.trim().parse() {
                self.output.indent_level = level;
            }
        }

        if let Some(path) = lookup("SHELL_CAPTURE_PATH") {
            if !path.is_empty() {
                self.execution.search_path = Some(path);
            }
        }

        if let Some(level) = lookup("SHELL_CAPTURE_LOG_LEVEL") {
            self.logging.level = level;
        } else if let Some(level) = lookup("RUST_LOG") {
            self.logging.level = level;
        }
    }

    /// Apply CLI argument overrides.
    pub fn apply_args(&mut self, args: &Args) {
        if args.verbose {
            self.output.verbose = true;
        }

        if let Some(level) = args.indent {
            self.output.indent_level = level;
        }

        if let Some(ref path) = args.search_path {
            self.execution.search_path = Some(path.clone());
        }

        if let Some(ref level) = args.log_level {
            self.logging.level = level.clone();
        }
    }

    /// Load configuration with full priority chain.
    ///
    /// Priority: CLI args > env vars > config file > defaults
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let mut config = match args.config {
            Some(ref path) => Config::from_file(path)?,
            None => Config::default(),
        };

        config.apply_env();
        config.apply_args(args);

        config.validate()?;
        Ok(config)
    }

    /// Reject values the runner cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.execution.read_buffer_size == 0 {
            return Err(ConfigError::Invalid(
                "execution.read_buffer_size must be greater than zero".to_string(),
            ));
        }
        match self.output.indent_level.checked_mul(self.output.indent_width) {
            Some(columns) if columns <= MAX_INDENT => {}
            _ => {
                return Err(ConfigError::Invalid(format!(
                    "output.indent_level * output.indent_width must not exceed {MAX_INDENT} columns"
                )));
            }
        }
        Ok(())
    }

    /// Convert to the settings a [`CommandRunner`](crate::CommandRunner) is built from.
    pub fn runner_config(&self) -> RunnerConfig {
        RunnerConfig {
            verbose: self.output.verbose,
            indent_level: self.output.indent_level,
            indent_width: self.output.indent_width,
            read_buffer_size: self.execution.read_buffer_size,
            search_path: self.execution.search_path.as_ref().map(OsString::from),
        }
    }

    /// Get the log level filter string.
    pub fn log_filter(&self) -> &str {
        &self.logging.level
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file.
    Io(std::io::Error),
    /// JSON parsing error.
    Json(serde_json::Error),
    /// Value out of range.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {}", e),
            Self::Json(e) => write!(f, "failed to parse config file: {}", e),
            Self::Invalid(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
