//! Preview thumbnails for map listings.
//!
//! The embedded battlemap is usually far too large to show in a catalog, so
//! a downscaled PNG is written next to each map as `<stem>.preview.png`.

use std::path::{Path, PathBuf};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::ImageError;

use crate::docgen::map::MapFile;
use crate::error::MapError;

/// Default downscale divisor applied to each dimension.
pub const DEFAULT_SCALE: u32 = 16;

/// Outcome of a thumbnail request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThumbnailStatus {
    /// A thumbnail was written with the given pixel size.
    Written {
        /// Thumbnail width in pixels.
        width: u32,
        /// Thumbnail height in pixels.
        height: u32,
    },
    /// A thumbnail already existed and was left alone.
    Kept,
}

/// Path of the thumbnail for a map: `keep.dd2vtt` becomes `keep.preview.png`.
#[must_use]
pub fn thumbnail_path(map_path: &Path) -> PathBuf {
    map_path.with_extension("preview.png")
}

/// Bounding box for a thumbnail: each dimension divided by `scale`,
/// never below one pixel.
#[must_use]
pub fn thumbnail_bounds(width: u32, height: u32, scale: u32) -> (u32, u32) {
    let scale = scale.max(1);
    ((width / scale).max(1), (height / scale).max(1))
}

/// Decode the embedded base64 image into raw file bytes.
///
/// # Errors
///
/// Returns `MapError::Decode` if the payload is not valid standard base64.
pub fn decode_image(map: &MapFile) -> Result<Vec<u8>, MapError> {
    STANDARD
        .decode(map.image.trim())
        .map_err(|source| MapError::Decode {
            path: map.path.clone(),
            source,
        })
}

/// Downscale the map image by `scale` and save it as PNG at `output`.
///
/// Aspect ratio is preserved. Returns the thumbnail's pixel size.
///
/// # Errors
///
/// - `MapError::Decode` if the payload is not base64.
/// - `MapError::Image` if the bytes are not a supported image.
/// - `MapError::Write` if the PNG cannot be written.
pub fn export_thumbnail(map: &MapFile, output: &Path, scale: u32) -> Result<(u32, u32), MapError> {
    let bytes = decode_image(map)?;
    let img = image::load_from_memory(&bytes).map_err(|source| MapError::Image {
        path: map.path.clone(),
        source,
    })?;

    let (bound_w, bound_h) = thumbnail_bounds(img.width(), img.height(), scale);
    let thumb = img.thumbnail(bound_w, bound_h).to_rgba8();

    thumb.save(output).map_err(|err| match err {
        ImageError::IoError(source) => MapError::Write {
            path: output.to_path_buf(),
            source,
        },
        source => MapError::Image {
            path: map.path.clone(),
            source,
        },
    })?;

    Ok(thumb.dimensions())
}

/// Write the thumbnail for `map` next to it unless one exists already.
///
/// # Errors
///
/// Propagates any error from [`export_thumbnail`].
pub fn ensure_thumbnail(map: &MapFile, scale: u32, force: bool) -> Result<ThumbnailStatus, MapError> {
    let output = thumbnail_path(&map.path);
    if output.exists() && !force {
        return Ok(ThumbnailStatus::Kept);
    }

    let (width, height) = export_thumbnail(map, &output, scale)?;
    Ok(ThumbnailStatus::Written { width, height })
}
