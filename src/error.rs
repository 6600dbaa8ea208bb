//! Error types for `mapdocs`
//!
//! This module provides the error hierarchy for configuration resolution,
//! map discovery, and per-map processing, together with the process exit
//! codes each error maps to.

use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `mapdocs` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error, or at least one map failed while failures were isolated
    pub const ERROR: i32 = 1;

    /// Configuration error (invalid value, unreadable or invalid YAML)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (unreadable map, unwritable document, discovery failure)
    pub const IO_ERROR: i32 = 3;

    /// Map content error (invalid JSON, missing field, undecodable image)
    pub const MAP_ERROR: i32 = 4;

    /// Usage error (invalid arguments, missing required options)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `mapdocs` operations.
///
/// This enum aggregates all domain-specific errors and provides
/// a unified interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum MapDocsError {
    /// Configuration loading or validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Map file discovery error
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Error processing a single map file
    #[error(transparent)]
    Map(#[from] MapError),

    /// One or more maps failed while failures were being isolated
    #[error("{failed} of {total} map file(s) failed")]
    BatchFailed {
        /// Number of map files that failed
        failed: usize,
        /// Number of map files discovered
        total: usize,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl MapDocsError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Yaml(_) => ExitCode::CONFIG_ERROR,
            Self::Discovery(_) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Map(err) => err.exit_code(),
            Self::Json(_) | Self::BatchFailed { .. } => ExitCode::ERROR,
        }
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing failed
    #[error("parse error in {path}: {message}")]
    ParseError {
        /// Path to the configuration file
        path: PathBuf,
        /// Error message from the parser
        message: String,
    },

    /// Referenced configuration file not found
    #[error("file not found: {path}")]
    MissingFile {
        /// Path to the missing file
        path: PathBuf,
    },

    /// Scan root does not exist or is not a directory
    #[error("root directory not found: {path}")]
    MissingRoot {
        /// The configured root
        path: PathBuf,
    },

    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Discovery Errors
// ============================================================================

/// Errors raised while enumerating map files.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The search pattern built from root and extension is invalid
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A directory entry could not be read during the walk
    #[error("cannot read {path}: {source}")]
    Entry {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The scan root cannot be expressed as a glob pattern
    #[error("root path is not valid UTF-8: {path}")]
    NonUtf8Root {
        /// The offending root
        path: PathBuf,
    },
}

impl From<glob::GlobError> for DiscoveryError {
    fn from(err: glob::GlobError) -> Self {
        let path = err.path().to_path_buf();
        Self::Entry {
            path,
            source: err.into(),
        }
    }
}

// ============================================================================
// Map Errors
// ============================================================================

/// Errors raised while processing a single map file.
///
/// Every variant carries the path of the map (or document) involved so
/// that batch summaries can report failures without extra context.
#[derive(Debug, Error)]
pub enum MapError {
    /// The map file could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        /// Map file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The map file is not valid JSON, or a field has the wrong type
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Map file path
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// A required field is absent from the map
    #[error("missing required field '{field}' in {path}")]
    MissingField {
        /// Map file path
        path: PathBuf,
        /// Name of the missing field
        field: &'static str,
    },

    /// The generated document (or thumbnail) could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The embedded image is not valid base64
    #[error("invalid base64 image in {path}: {source}")]
    Decode {
        /// Map file path
        path: PathBuf,
        /// Underlying decode error
        source: base64::DecodeError,
    },

    /// The embedded image could not be decoded, resized, or saved
    #[error("image error for {path}: {source}")]
    Image {
        /// Map file path
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },
}

impl MapError {
    /// Returns the path of the file this error concerns.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::MissingField { path, .. }
            | Self::Write { path, .. }
            | Self::Decode { path, .. }
            | Self::Image { path, .. } => path,
        }
    }

    /// Returns the exit code used when this error aborts a run.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Read { .. } | Self::Write { .. } => ExitCode::IO_ERROR,
            Self::Parse { .. }
            | Self::MissingField { .. }
            | Self::Decode { .. }
            | Self::Image { .. } => ExitCode::MAP_ERROR,
        }
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `mapdocs` operations.
pub type Result<T> = std::result::Result<T, MapDocsError>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::CONFIG_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::MAP_ERROR, 4);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_config_error_exit_code() {
        let err: MapDocsError = ConfigError::MissingFile {
            path: PathBuf::from("/test"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::CONFIG_ERROR);
    }

    #[test]
    fn test_batch_failed_exit_code() {
        let err = MapDocsError::BatchFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(err.exit_code(), ExitCode::ERROR);
        assert_eq!(err.to_string(), "2 of 5 map file(s) failed");
    }

    #[test]
    fn test_map_error_exit_codes() {
        let read: MapDocsError = MapError::Read {
            path: PathBuf::from("a.dd2vtt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        assert_eq!(read.exit_code(), ExitCode::IO_ERROR);

        let missing: MapDocsError = MapError::MissingField {
            path: PathBuf::from("a.dd2vtt"),
            field: "image",
        }
        .into();
        assert_eq!(missing.exit_code(), ExitCode::MAP_ERROR);
    }

    #[test]
    fn test_parse_error_exit_code() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: MapDocsError = MapError::Parse {
            path: PathBuf::from("broken.dd2vtt"),
            source,
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::MAP_ERROR);
        assert!(err.to_string().contains("broken.dd2vtt"));
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: MapDocsError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_missing_field_display() {
        let err = MapError::MissingField {
            path: PathBuf::from("maps/cave.dd2vtt"),
            field: "image",
        };
        assert_eq!(
            err.to_string(),
            "missing required field 'image' in maps/cave.dd2vtt"
        );
        assert_eq!(err.path(), Path::new("maps/cave.dd2vtt"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidValue {
            field: "extension".to_string(),
            value: "*.x".to_string(),
            expected: "a plain file suffix".to_string(),
        };
        assert!(err.to_string().contains("extension"));
        assert!(err.to_string().contains("*.x"));
    }
}
