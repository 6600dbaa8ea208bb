//! `mapdocs thumbnail`

use std::path::Path;

use crate::cli::args::ThumbnailArgs;
use crate::cli::commands::print_failures;
use crate::config::GeneratorConfig;
use crate::docgen::map::MapFile;
use crate::docgen::pipeline::run_batch;
use crate::docgen::thumbnail::{ThumbnailStatus, ensure_thumbnail, thumbnail_path};
use crate::error::MapDocsError;

/// Write preview thumbnails for every map under the configured root.
///
/// # Errors
///
/// Returns a configuration or discovery error, the first map error under
/// `--fail-fast`, or `MapDocsError::BatchFailed` if any thumbnail failed.
pub fn run(args: &ThumbnailArgs) -> Result<(), MapDocsError> {
    let config = GeneratorConfig::resolve(&args.source.overrides())?;
    let batch = run_batch(&config, |path| {
        let map = MapFile::load(path)?;
        let status = ensure_thumbnail(&map, args.scale, args.force)?;
        Ok((thumbnail_path(path), status))
    })?;

    for (path, status) in &batch.outcomes {
        print_status(path, *status);
    }
    print_failures(&batch.failures);

    let written = batch
        .outcomes
        .iter()
        .filter(|(_, s)| matches!(s, ThumbnailStatus::Written { .. }))
        .count();
    println!(
        "{} map(s): {written} written, {} kept, {} failed",
        batch.discovered,
        batch.outcomes.len() - written,
        batch.failures.len()
    );

    batch.into_result().map(|_| ())
}

fn print_status(path: &Path, status: ThumbnailStatus) {
    match status {
        ThumbnailStatus::Written { width, height } => {
            println!("written   {} ({width}x{height})", path.display());
        }
        ThumbnailStatus::Kept => println!("kept      {}", path.display()),
    }
}
