//! `mapdocs generate`
//!
//! Runs the documentation pipeline and reports what happened to each
//! document.

use std::path::PathBuf;

use serde::Serialize;

use crate::cli::args::{GenerateArgs, OutputFormat};
use crate::cli::commands::{FailureReport, failure_reports, print_failures};
use crate::config::GeneratorConfig;
use crate::docgen::pipeline::{Collision, FileOutcome, Generator, RunSummary};
use crate::docgen::writer::WriteStatus;
use crate::error::MapDocsError;

#[derive(Debug, Serialize)]
struct GenerateReport<'a> {
    root: &'a PathBuf,
    dry_run: bool,
    discovered: usize,
    documents: &'a [FileOutcome],
    collisions: &'a [Collision],
    failures: Vec<FailureReport>,
}

/// Generate a document next to every map under the configured root.
///
/// # Errors
///
/// Returns a configuration or discovery error, the first map error under
/// `--fail-fast`, or `MapDocsError::BatchFailed` if any map failed.
pub fn run(args: &GenerateArgs) -> Result<(), MapDocsError> {
    let config = GeneratorConfig::resolve(&args.overrides())?;
    let generator = Generator::new(config);
    let summary = generator.run()?;

    match args.format {
        OutputFormat::Human => print_human(&summary),
        OutputFormat::Json => {
            let report = GenerateReport {
                root: &generator.config().root,
                dry_run: generator.config().dry_run,
                discovered: summary.batch.discovered,
                documents: &summary.batch.outcomes,
                collisions: &summary.collisions,
                failures: failure_reports(&summary.batch.failures),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    summary.batch.into_result().map(|_| ())
}

fn print_human(summary: &RunSummary) {
    for outcome in &summary.batch.outcomes {
        println!(
            "{:<9} {}  ({})",
            outcome.status.label(),
            outcome.document.display(),
            outcome.title
        );
    }
    for c in &summary.collisions {
        eprintln!(
            "warning: {} and {} share {}; kept {}",
            c.replaced.display(),
            c.winner.display(),
            c.document.display(),
            c.winner.display()
        );
    }
    print_failures(&summary.batch.failures);

    println!(
        "{} map(s): {} created, {} updated, {} unchanged, {} skipped, {} failed",
        summary.batch.discovered,
        summary.count(WriteStatus::Created),
        summary.count(WriteStatus::Updated),
        summary.count(WriteStatus::Unchanged),
        summary.count(WriteStatus::Skipped),
        summary.batch.failures.len()
    );
}
