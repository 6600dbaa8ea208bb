//! Typed decoding of `.dd2vtt` map files.
//!
//! A dd2vtt file is a JSON object exported by Dungeondraft. Only the base64
//! `image` field is required for documentation; the grid resolution is read
//! when present so it can be shown by `mapdocs list`. Walls, portals and
//! lights are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// A decoded map file.
#[derive(Debug, Clone, PartialEq)]
pub struct MapFile {
    /// Path the map was loaded from.
    pub path: PathBuf,

    /// Base64-encoded raster image, exactly as stored in the file.
    pub image: String,

    /// Grid resolution, if the file carries a well-formed one.
    pub resolution: Option<MapResolution>,
}

/// Grid geometry of a map.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MapResolution {
    /// Top-left grid coordinate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_origin: Option<Coordinates>,

    /// Map size in grid cells.
    pub map_size: Coordinates,

    /// Pixels per grid cell in the embedded image.
    pub pixels_per_grid: f64,
}

/// A pair of grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coordinates {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

/// Raw on-disk shape. Fields other than `image` are decoded loosely so that
/// a malformed resolution never fails a map.
#[derive(Debug, Deserialize)]
struct RawMapFile {
    #[serde(default)]
    image: Option<String>,

    #[serde(default)]
    resolution: Option<serde_json::Value>,
}

impl MapFile {
    /// Read and decode a map file from disk.
    ///
    /// # Errors
    ///
    /// Returns `MapError::Read` if the file cannot be read as UTF-8 text,
    /// or any error from [`parse_map`].
    pub fn load(path: &Path) -> Result<Self, MapError> {
        let content = fs::read_to_string(path).map_err(|source| MapError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        parse_map(path, &content)
    }

    /// Pixel dimensions implied by the resolution, if known.
    #[must_use]
    pub fn pixel_size(&self) -> Option<(f64, f64)> {
        self.resolution.as_ref().map(|r| {
            (
                r.map_size.x * r.pixels_per_grid,
                r.map_size.y * r.pixels_per_grid,
            )
        })
    }
}

/// Decode map file content.
///
/// `path` is only used to label the result and any error.
///
/// # Errors
///
/// - `MapError::Parse` if `content` is not valid JSON or `image` is not a string.
/// - `MapError::MissingField` if `image` is absent or `null`.
pub fn parse_map(path: &Path, content: &str) -> Result<MapFile, MapError> {
    let raw: RawMapFile = serde_json::from_str(content).map_err(|source| MapError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let image = raw.image.ok_or_else(|| MapError::MissingField {
        path: path.to_path_buf(),
        field: "image",
    })?;

    let resolution = raw
        .resolution
        .and_then(|value| serde_json::from_value::<MapResolution>(value).ok());

    Ok(MapFile {
        path: path.to_path_buf(),
        image,
        resolution,
    })
}
