//! Output stage: writing generated documents next to their maps.
//!
//! Documents are written to a sibling temporary file and renamed over the
//! target, so an interrupted run leaves either the previous document or the
//! new one, never a truncated file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::MapError;

/// What happened to a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteStatus {
    /// No document existed before.
    Created,
    /// A document existed with different content.
    Updated,
    /// A document existed with identical content; it was rewritten anyway.
    Unchanged,
    /// Nothing was written (dry run).
    Skipped,
}

impl WriteStatus {
    /// Short lowercase label for human output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
            Self::Skipped => "skipped",
        }
    }
}

/// Path of the document generated for a map: `output_name` in the map's
/// directory.
#[must_use]
pub fn output_path(map_path: &Path, output_name: &str) -> PathBuf {
    map_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(output_name)
}

/// Compare `content` with what is currently at `path` without writing.
#[must_use]
pub fn compare_document(path: &Path, content: &str) -> WriteStatus {
    match fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => WriteStatus::Unchanged,
        Ok(_) => WriteStatus::Updated,
        Err(_) => WriteStatus::Created,
    }
}

/// Write `content` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns `MapError::Write` if the temporary file cannot be written or
/// renamed into place. The temporary file is removed on either failure.
pub fn write_document(path: &Path, content: &str) -> Result<WriteStatus, MapError> {
    let status = compare_document(path, content);
    let tmp = temp_path(path);

    let write_err = |source| MapError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Err(source) = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(source));
    }

    Ok(status)
}

/// Sibling temporary path: `README.md` becomes `README.md.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_sibling() {
        assert_eq!(
            output_path(Path::new("maps/caves/deep.dd2vtt"), "README.md"),
            PathBuf::from("maps/caves/README.md")
        );
    }

    #[test]
    fn test_output_path_bare_name() {
        assert_eq!(
            output_path(Path::new("deep.dd2vtt"), "README.md"),
            PathBuf::from("README.md")
        );
    }

    #[test]
    fn test_temp_path() {
        assert_eq!(
            temp_path(Path::new("maps/README.md")),
            PathBuf::from("maps/README.md.tmp")
        );
    }

    #[test]
    fn test_write_statuses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");

        assert_eq!(write_document(&path, "one").unwrap(), WriteStatus::Created);
        assert_eq!(write_document(&path, "one").unwrap(), WriteStatus::Unchanged);
        assert_eq!(write_document(&path, "two").unwrap(), WriteStatus::Updated);
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
        assert!(!dir.path().join("README.md.tmp").exists());
    }

    #[test]
    fn test_overwrites_foreign_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "hand written notes").unwrap();

        write_document(&path, "generated").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "generated");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("README.md");

        let err = write_document(&path, "x").unwrap_err();
        assert!(matches!(err, MapError::Write { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "x").unwrap();

        let err = write_document(&path, "generated").unwrap_err();
        assert!(matches!(err, MapError::Write { .. }));
        assert!(!dir.path().join("README.md.tmp").exists());

        let missing = dir.path().join("absent").join("README.md");
        write_document(&missing, "generated").unwrap_err();
        assert!(!dir.path().join("absent").exists());
    }

    #[test]
    fn test_compare_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        assert_eq!(compare_document(&path, "x"), WriteStatus::Created);
        fs::write(&path, "x").unwrap();
        assert_eq!(compare_document(&path, "x"), WriteStatus::Unchanged);
        assert_eq!(compare_document(&path, "y"), WriteStatus::Updated);
    }
}
