//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod generate;
pub mod list;
pub mod thumbnail;
pub mod version;

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::{Cli, Commands};
use crate::docgen::pipeline::Failure;
use crate::error::MapDocsError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), MapDocsError> {
    match cli.command {
        Commands::Generate(args) => generate::run(&args),
        Commands::List(args) => list::run(&args),
        Commands::Thumbnail(args) => thumbnail::run(&args),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}

/// A failed map as it appears in JSON reports.
#[derive(Debug, Serialize)]
pub struct FailureReport {
    /// Path the failure concerns.
    pub path: PathBuf,
    /// Rendered error message.
    pub error: String,
}

impl From<&Failure> for FailureReport {
    fn from(failure: &Failure) -> Self {
        Self {
            path: failure.path.clone(),
            error: failure.error.to_string(),
        }
    }
}

/// Convert recorded failures for a JSON report.
#[must_use]
pub fn failure_reports(failures: &[Failure]) -> Vec<FailureReport> {
    failures.iter().map(FailureReport::from).collect()
}

/// Print recorded failures to stderr, one per line.
pub fn print_failures(failures: &[Failure]) {
    for failure in failures {
        eprintln!("failed  {}: {}", failure.path.display(), failure.error);
    }
}
