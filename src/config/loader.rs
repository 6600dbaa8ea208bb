//! Configuration file loader
//!
//! Reads the optional YAML configuration file. Every key is optional;
//! unknown keys are rejected so that typos surface instead of being
//! silently ignored.
//!
//! ```yaml
//! root: maps
//! extension: dd2vtt
//! output_name: README.md
//! fail_fast: false
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;

/// Settings read from a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Scan root; relative paths are resolved against the file's directory.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Map extension.
    #[serde(default)]
    pub extension: Option<String>,

    /// Generated document file name.
    #[serde(default)]
    pub output_name: Option<String>,

    /// Abort on the first failure.
    #[serde(default)]
    pub fail_fast: Option<bool>,
}

/// Load a configuration file from disk.
///
/// # Errors
///
/// - `ConfigError::MissingFile` if the file does not exist.
/// - `ConfigError::ParseError` if it cannot be read or is not valid.
pub fn load_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            ConfigError::MissingFile {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::ParseError {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        }
    })?;

    let mut config = parse_config_str(&content, path)?;

    if let Some(root) = config.root.as_mut() {
        if root.is_relative() {
            let base = path.parent().unwrap_or_else(|| Path::new("."));
            *root = base.join(&*root);
        }
    }

    debug!(path = %path.display(), ?config, "loaded configuration file");
    Ok(config)
}

/// Parse configuration YAML. An empty document yields the defaults.
///
/// `path` labels parse errors.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` if the YAML is invalid or contains
/// unknown keys.
pub fn parse_config_str(content: &str, path: &Path) -> Result<FileConfig, ConfigError> {
    if content.trim().is_empty() {
        return Ok(FileConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
