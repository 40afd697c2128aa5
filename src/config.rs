//! Configuration System
//!
//! Layered configuration for a collection run: built-in defaults, the global
//! config file, the workspace `combine.toml`, then `COMBINE_*` environment
//! variables. CLI flags are applied on top by the run context.

use crate::collect::{CollectOptions, ExtensionSet, DEFAULT_EXTENSIONS, DEFAULT_OUTPUT};
use crate::error::CombineError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombineConfig {
    /// What to collect and where to write it
    #[serde(default)]
    pub collect: CollectConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Collection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Traversal root (defaults to current directory)
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Output file, relative to the current directory
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// File-name suffixes to include
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// File or directory names pruned from the walk
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    #[serde(default)]
    pub follow_symlinks: bool,

    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            output: default_output(),
            extensions: default_extensions(),
            ignore_patterns: Vec::new(),
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Collect(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Collect(msg) => write!(f, "collect: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl CollectConfig {
    /// Validate collection settings
    pub fn validate(&self) -> Result<(), String> {
        if self.output.as_os_str().is_empty() {
            return Err("Output path cannot be empty".to_string());
        }
        if self.extensions.is_empty() {
            return Err("At least one extension is required".to_string());
        }
        ExtensionSet::new(&self.extensions).map_err(|e| e.to_string())?;
        if self.ignore_patterns.iter().any(|p| p.trim().is_empty()) {
            return Err("Ignore patterns cannot be empty".to_string());
        }
        Ok(())
    }

    /// Convert into collector options
    pub fn to_options(&self) -> Result<CollectOptions, CombineError> {
        Ok(CollectOptions {
            extensions: ExtensionSet::new(&self.extensions)?,
            follow_symlinks: self.follow_symlinks,
            ignore_patterns: self.ignore_patterns.clone(),
            max_depth: self.max_depth,
        })
    }
}

impl CombineConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.collect.validate() {
            errors.push(ValidationError::Collect(e));
        }

        let format = self.logging.format.as_str();
        if format != "text" && format != "json" {
            errors.push(ValidationError::Logging(format!(
                "Invalid format '{}' (must be 'json' or 'text')",
                format
            )));
        }
        let output = self.logging.output.as_str();
        if !matches!(output, "stdout" | "stderr" | "file") {
            errors.push(ValidationError::Logging(format!(
                "Invalid output '{}' (must be 'stdout', 'stderr' or 'file')",
                output
            )));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold every failure into one error
    pub fn ensure_valid(&self) -> Result<(), CombineError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            CombineError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, CombineError> {
        toml::to_string_pretty(self)
            .map_err(|e| CombineError::ConfigError(format!("Failed to render config: {}", e)))
    }
}
