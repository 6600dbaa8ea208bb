//! Configuration module
//!
//! Resolves the generator configuration from command-line flags,
//! environment variables (handled by clap), an optional YAML file, and
//! built-in defaults, in that order of precedence.

pub mod loader;

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub use loader::{FileConfig, load_config_file, parse_config_str};

/// Map file extension scanned for by default.
pub const DEFAULT_EXTENSION: &str = "dd2vtt";

/// File name of the generated document.
pub const DEFAULT_OUTPUT_NAME: &str = "README.md";

/// What to do when a single map fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure, keep going, and report a summary.
    #[default]
    Isolate,
    /// Abort the run on the first failure.
    FailFast,
}

/// Fully resolved generator configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory scanned recursively for map files.
    pub root: PathBuf,

    /// Map file extension, without the leading dot.
    pub extension: String,

    /// File name of the document written next to each map.
    pub output_name: String,

    /// Per-map failure handling.
    pub failure_policy: FailurePolicy,

    /// Render documents without writing them.
    pub dry_run: bool,
}

impl GeneratorConfig {
    /// Configuration for `root` with every other setting at its default.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extension: DEFAULT_EXTENSION.to_string(),
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            failure_policy: FailurePolicy::Isolate,
            dry_run: false,
        }
    }

    /// Set the map extension. A leading dot is stripped.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = normalize_extension(extension);
        self
    }

    /// Set the generated document file name.
    #[must_use]
    pub fn with_output_name(mut self, output_name: impl Into<String>) -> Self {
        self.output_name = output_name.into();
        self
    }

    /// Set the failure policy.
    #[must_use]
    pub const fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Enable or disable dry-run mode.
    #[must_use]
    pub const fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Whether the first failure aborts the run.
    #[must_use]
    pub fn fail_fast(&self) -> bool {
        self.failure_policy == FailurePolicy::FailFast
    }

    /// Resolve a configuration from explicit overrides and an optional file.
    ///
    /// Values in `overrides` win over the file, which wins over defaults.
    /// A relative `root` from the file is already resolved against the
    /// file's directory by [`load_config_file`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be loaded or the resolved
    /// configuration is invalid.
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let file = match &overrides.config {
            Some(path) => load_config_file(path)?,
            None => FileConfig::default(),
        };

        let root = overrides
            .root
            .clone()
            .or(file.root)
            .unwrap_or_else(|| PathBuf::from("."));

        let extension = overrides
            .extension
            .as_deref()
            .or(file.extension.as_deref())
            .unwrap_or(DEFAULT_EXTENSION)
            .to_string();

        let output_name = overrides
            .output_name
            .clone()
            .or(file.output_name)
            .unwrap_or_else(|| DEFAULT_OUTPUT_NAME.to_string());

        let failure_policy = if overrides.fail_fast || file.fail_fast.unwrap_or(false) {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::Isolate
        };

        let config = Self::new(root)
            .with_extension(&extension)
            .with_output_name(output_name)
            .with_failure_policy(failure_policy)
            .with_dry_run(overrides.dry_run);

        config.validate()?;
        Ok(config)
    }

    /// Validate field values and check that the root directory exists.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidValue` for a bad extension or output name, or
    ///   a root that is not valid UTF-8.
    /// - `ConfigError::MissingRoot` if `root` is not an existing directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_extension(&self.extension)?;
        validate_output_name(&self.output_name)?;

        if self.root.to_str().is_none() {
            return Err(ConfigError::InvalidValue {
                field: "root".to_string(),
                value: self.root.to_string_lossy().into_owned(),
                expected: "a UTF-8 path".to_string(),
            });
        }

        if !self.root.is_dir() {
            return Err(ConfigError::MissingRoot {
                path: self.root.clone(),
            });
        }

        Ok(())
    }
}

/// Settings supplied on the command line or through the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Optional YAML configuration file.
    pub config: Option<PathBuf>,
    /// Scan root.
    pub root: Option<PathBuf>,
    /// Map extension.
    pub extension: Option<String>,
    /// Generated document file name.
    pub output_name: Option<String>,
    /// Abort on the first failure.
    pub fail_fast: bool,
    /// Render without writing.
    pub dry_run: bool,
}

/// Strip a single leading dot: `.dd2vtt` becomes `dd2vtt`.
#[must_use]
pub fn normalize_extension(extension: &str) -> String {
    extension
        .strip_prefix('.')
        .unwrap_or(extension)
        .to_string()
}

const GLOB_META: [char; 4] = ['*', '?', '[', ']'];

fn validate_extension(extension: &str) -> Result<(), ConfigError> {
    let invalid = extension.trim().is_empty()
        || extension.contains(['/', '\\'])
        || extension.contains(GLOB_META);

    if invalid {
        return Err(ConfigError::InvalidValue {
            field: "extension".to_string(),
            value: extension.to_string(),
            expected: "a file suffix without separators or wildcards".to_string(),
        });
    }
    Ok(())
}

fn validate_output_name(output_name: &str) -> Result<(), ConfigError> {
    let is_plain_name = Path::new(output_name)
        .file_name()
        .is_some_and(|name| name == output_name);

    if output_name.trim().is_empty() || !is_plain_name || output_name.contains(['/', '\\']) {
        return Err(ConfigError::InvalidValue {
            field: "output_name".to_string(),
            value: output_name.to_string(),
            expected: "a plain file name".to_string(),
        });
    }
    Ok(())
}
