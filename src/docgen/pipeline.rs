//! Batch driver: discover, transform, and write every map under a root.
//!
//! [`run_batch`] owns the failure policy and is shared by every command
//! that visits maps. [`Generator`] plugs the documentation stages into it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, error, info, info_span, warn};

use crate::config::GeneratorConfig;
use crate::docgen::discover::discover;
use crate::docgen::map::MapFile;
use crate::docgen::page::{MapPage, render_page};
use crate::docgen::writer::{WriteStatus, output_path, write_document};
use crate::error::{DiscoveryError, MapDocsError, MapError};

/// A map (or directory entry) that could not be processed.
#[derive(Debug)]
pub struct Failure {
    /// Path the failure concerns.
    pub path: PathBuf,
    /// What went wrong.
    pub error: MapDocsError,
}

/// Results of visiting every discovered map.
#[derive(Debug)]
pub struct Batch<T> {
    /// Number of entries discovered, including unreadable ones.
    pub discovered: usize,
    /// Per-map results, in discovery order.
    pub outcomes: Vec<T>,
    /// Per-map failures, in discovery order.
    pub failures: Vec<Failure>,
}

impl<T> Default for Batch<T> {
    fn default() -> Self {
        Self {
            discovered: 0,
            outcomes: Vec::new(),
            failures: Vec::new(),
        }
    }
}

impl<T> Batch<T> {
    /// Returns `true` if no map failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Turn recorded failures into a `BatchFailed` error.
    ///
    /// # Errors
    ///
    /// Returns `MapDocsError::BatchFailed` if any map failed.
    pub fn into_result(self) -> Result<Self, MapDocsError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(MapDocsError::BatchFailed {
                failed: self.failures.len(),
                total: self.discovered,
            })
        }
    }
}

/// Visit every map under the configured root with `step`.
///
/// Under [`FailurePolicy::Isolate`](crate::config::FailurePolicy::Isolate)
/// failures are logged, recorded, and skipped. Under `FailFast` the first
/// failure is returned as the error.
///
/// # Errors
///
/// Returns `MapDocsError::Discovery` if the search pattern is invalid, or
/// the first per-map error under the fail-fast policy.
pub fn run_batch<T, F>(config: &GeneratorConfig, mut step: F) -> Result<Batch<T>, MapDocsError>
where
    F: FnMut(&Path) -> Result<T, MapError>,
{
    let mut batch = Batch::default();

    for entry in discover(&config.root, &config.extension)? {
        batch.discovered += 1;
        let result = match entry {
            Ok(path) => {
                debug!(path = %path.display(), "discovered map");
                step(&path).map_err(|e| Failure {
                    path: e.path().to_path_buf(),
                    error: e.into(),
                })
            }
            Err(e) => Err(Failure {
                path: entry_path(&e),
                error: e.into(),
            }),
        };

        match result {
            Ok(outcome) => batch.outcomes.push(outcome),
            Err(failure) => {
                error!(path = %failure.path.display(), error = %failure.error, "map failed");
                if config.fail_fast() {
                    return Err(failure.error);
                }
                batch.failures.push(failure);
            }
        }
    }

    Ok(batch)
}

fn entry_path(err: &DiscoveryError) -> PathBuf {
    match err {
        DiscoveryError::Entry { path, .. } | DiscoveryError::NonUtf8Root { path } => path.clone(),
        DiscoveryError::Pattern(_) => PathBuf::new(),
    }
}

/// Result of generating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Source map file.
    pub map: PathBuf,
    /// Generated document.
    pub document: PathBuf,
    /// Title rendered into the document.
    pub title: String,
    /// What happened on disk.
    pub status: WriteStatus,
}

/// Two maps in one directory wrote the same document; `winner` was last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    /// The shared document.
    pub document: PathBuf,
    /// Map whose document was replaced.
    pub replaced: PathBuf,
    /// Map whose document remains.
    pub winner: PathBuf,
}

/// Summary of a documentation run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Per-map outcomes and failures.
    pub batch: Batch<FileOutcome>,
    /// Documents written by more than one map.
    pub collisions: Vec<Collision>,
}

impl RunSummary {
    /// Number of documents whose status matches `status`.
    #[must_use]
    pub fn count(&self, status: WriteStatus) -> usize {
        self.batch
            .outcomes
            .iter()
            .filter(|o| o.status == status)
            .count()
    }
}

/// Documentation generator.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator for a resolved configuration.
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The configuration this generator runs with.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate documents for every map under the root.
    ///
    /// # Errors
    ///
    /// See [`run_batch`]. Isolated failures are reported in the summary,
    /// not as an error.
    pub fn run(&self) -> Result<RunSummary, MapDocsError> {
        info!(
            root = %self.config.root.display(),
            extension = %self.config.extension,
            dry_run = self.config.dry_run,
            "generating map documentation"
        );

        let batch = run_batch(&self.config, |path| self.process(path))?;
        let collisions = find_collisions(&batch.outcomes);
        for c in &collisions {
            warn!(
                document = %c.document.display(),
                replaced = %c.replaced.display(),
                winner = %c.winner.display(),
                "several maps share a directory; last one wins"
            );
        }

        info!(
            discovered = batch.discovered,
            generated = batch.outcomes.len(),
            failed = batch.failures.len(),
            "documentation run finished"
        );

        Ok(RunSummary { batch, collisions })
    }

    /// Load, render, and write the document for a single map.
    ///
    /// # Errors
    ///
    /// Returns any `MapError` from loading or writing.
    pub fn process(&self, path: &Path) -> Result<FileOutcome, MapError> {
        let span = info_span!("map", path = %path.display());
        let _guard = span.enter();

        let map = MapFile::load(path)?;
        let page = MapPage::from_map(&map, &self.config.extension);
        let content = render_page(&page);
        let document = output_path(path, &self.config.output_name);

        let status = if self.config.dry_run {
            WriteStatus::Skipped
        } else {
            write_document(&document, &content)?
        };

        info!(document = %document.display(), status = status.label(), "document generated");

        Ok(FileOutcome {
            map: path.to_path_buf(),
            document,
            title: page.title,
            status,
        })
    }
}

/// Find documents targeted by more than one map, in processing order.
#[must_use]
pub fn find_collisions(outcomes: &[FileOutcome]) -> Vec<Collision> {
    let mut last_writer: HashMap<&Path, &Path> = HashMap::new();
    let mut collisions = Vec::new();

    for outcome in outcomes {
        if let Some(previous) = last_writer.insert(&outcome.document, &outcome.map) {
            collisions.push(Collision {
                document: outcome.document.clone(),
                replaced: previous.to_path_buf(),
                winner: outcome.map.clone(),
            });
        }
    }

    collisions
}
