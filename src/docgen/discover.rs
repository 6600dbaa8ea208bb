//! Discovery stage: lazily enumerate map files under a root directory.
//!
//! Matching is done by `glob` with a `{root}/**/*.{extension}` pattern. The
//! root is escaped first, so directories whose names contain `[` or `*` are
//! searched literally. Calling [`discover`] again restarts the walk.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Paths, Pattern};
use tracing::debug;

use crate::error::DiscoveryError;

/// Lazy iterator over map file paths.
///
/// Yields regular files only; a directory that happens to match the pattern
/// is skipped. Unreadable directory entries surface as
/// [`DiscoveryError::Entry`] items and the walk continues past them.
pub struct MapPaths {
    inner: Paths,
}

impl Iterator for MapPaths {
    type Item = Result<PathBuf, DiscoveryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(path) if path.is_file() => return Some(Ok(path)),
                Ok(path) => debug!(path = %path.display(), "skipping non-file match"),
                Err(err) => return Some(Err(err.into())),
            }
        }
    }
}

/// Start a recursive search for `*.{extension}` files under `root`.
///
/// Files directly in `root` are included. Matching is case-sensitive.
///
/// # Errors
///
/// - `DiscoveryError::NonUtf8Root` if `root` is not valid UTF-8.
/// - `DiscoveryError::Pattern` if the resulting glob pattern is invalid.
pub fn discover(root: &Path, extension: &str) -> Result<MapPaths, DiscoveryError> {
    let pattern = search_pattern(root, extension)?;
    debug!(%pattern, "searching for map files");

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };

    let inner = glob::glob_with(&pattern, options)?;
    Ok(MapPaths { inner })
}

/// Build the glob pattern for a root and extension.
///
/// # Errors
///
/// Returns `DiscoveryError::NonUtf8Root` if `root` is not valid UTF-8.
pub fn search_pattern(root: &Path, extension: &str) -> Result<String, DiscoveryError> {
    let root_str = root.to_str().ok_or_else(|| DiscoveryError::NonUtf8Root {
        path: root.to_path_buf(),
    })?;

    let escaped_root = Pattern::escape(root_str);
    Ok(Path::new(&escaped_root)
        .join("**")
        .join(format!("*.{extension}"))
        .to_string_lossy()
        .into_owned())
}
