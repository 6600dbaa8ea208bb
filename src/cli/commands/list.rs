//! `mapdocs list`
//!
//! Prints every discovered map with the title its document would carry.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::cli::args::{ListArgs, OutputFormat};
use crate::cli::commands::{failure_reports, print_failures};
use crate::config::GeneratorConfig;
use crate::docgen::map::{Coordinates, MapFile};
use crate::docgen::pipeline::run_batch;
use crate::docgen::title::title_from_path;
use crate::error::MapDocsError;

/// One line of the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapListing {
    /// Map path relative to the scan root.
    pub path: PathBuf,
    /// Title derived from the file name.
    pub title: String,
    /// Grid size in cells, if the map declares a resolution.
    pub map_size: Option<Coordinates>,
    /// Pixels per grid cell, if the map declares a resolution.
    pub pixels_per_grid: Option<f64>,
    /// Image size in pixels implied by the resolution.
    #[serde(skip)]
    pub pixel_size: Option<(f64, f64)>,
}

impl MapListing {
    /// Describe `map` relative to `root`.
    #[must_use]
    pub fn new(map: &MapFile, root: &Path, extension: &str) -> Self {
        let path = map
            .path
            .strip_prefix(root)
            .unwrap_or(&map.path)
            .to_path_buf();
        let resolution = map.resolution.as_ref();

        Self {
            path,
            title: title_from_path(&map.path, extension),
            map_size: resolution.map(|r| r.map_size),
            pixels_per_grid: resolution.map(|r| r.pixels_per_grid),
            pixel_size: map.pixel_size(),
        }
    }
}

/// List maps under the configured root.
///
/// # Errors
///
/// Returns a configuration or discovery error, the first map error under
/// `--fail-fast`, or `MapDocsError::BatchFailed` if any map failed to load.
pub fn run(args: &ListArgs) -> Result<(), MapDocsError> {
    let config = GeneratorConfig::resolve(&args.source.overrides())?;
    let batch = run_batch(&config, |path| {
        let map = MapFile::load(path)?;
        Ok(MapListing::new(&map, &config.root, &config.extension))
    })?;

    match args.format {
        OutputFormat::Human => {
            for listing in &batch.outcomes {
                match (listing.map_size, listing.pixel_size) {
                    (Some(size), Some((width, height))) => println!(
                        "{}\t{}\t{}x{} cells\t{width}x{height} px",
                        listing.path.display(),
                        listing.title,
                        size.x,
                        size.y
                    ),
                    _ => println!("{}\t{}", listing.path.display(), listing.title),
                }
            }
            print_failures(&batch.failures);
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "maps": &batch.outcomes,
                "failures": failure_reports(&batch.failures),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    batch.into_result().map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docgen::map::MapResolution;

    #[test]
    fn test_listing_relative_path() {
        let map = MapFile {
            path: PathBuf::from("/srv/maps/caves/deep-hall.dd2vtt"),
            image: String::new(),
            resolution: Some(MapResolution {
                map_origin: None,
                map_size: Coordinates { x: 20.0, y: 12.0 },
                pixels_per_grid: 256.0,
            }),
        };

        let listing = MapListing::new(&map, Path::new("/srv/maps"), "dd2vtt");
        assert_eq!(listing.path, PathBuf::from("caves/deep-hall.dd2vtt"));
        assert_eq!(listing.title, "Deep Hall");
        assert_eq!(listing.map_size, Some(Coordinates { x: 20.0, y: 12.0 }));
        assert_eq!(listing.pixels_per_grid, Some(256.0));
        assert_eq!(listing.pixel_size, Some((5120.0, 3072.0)));
    }

    #[test]
    fn test_listing_without_resolution() {
        let map = MapFile {
            path: PathBuf::from("inn.dd2vtt"),
            image: String::new(),
            resolution: None,
        };

        let listing = MapListing::new(&map, Path::new("/elsewhere"), "dd2vtt");
        assert_eq!(listing.path, PathBuf::from("inn.dd2vtt"));
        assert!(listing.map_size.is_none());

        let json = serde_json::to_value(&listing).unwrap();
        assert!(json["pixels_per_grid"].is_null());
        assert!(json.get("pixel_size").is_none());
    }
}
