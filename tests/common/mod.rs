//! Shared integration-test harness: spawn the `mapdocs` binary and lay out
//! map trees in temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Environment variables read by the binary; cleared so the host cannot
/// leak settings into a test.
const MAPDOCS_ENV: [&str; 7] = [
    "MAPDOCS_ROOT",
    "MAPDOCS_EXTENSION",
    "MAPDOCS_OUTPUT_NAME",
    "MAPDOCS_CONFIG",
    "MAPDOCS_LOG_LEVEL",
    "MAPDOCS_LOG_FORMAT",
    "MAPDOCS_COLOR",
];

/// A minimal valid map whose image payload decodes to `ABC`.
pub const MINIMAL_MAP: &str = r#"{"image": "QUJD"}"#;

/// Runs `mapdocs` with `args` to completion and returns its output.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command(args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mapdocs"));
    for var in MAPDOCS_ENV {
        cmd.env_remove(var);
    }
    cmd.args(args).output().expect("failed to run mapdocs")
}

/// Like [`spawn_command`] with one extra environment variable set.
#[allow(clippy::missing_panics_doc)]
pub fn spawn_command_with_env(args: &[&str], key: &str, value: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mapdocs"));
    for var in MAPDOCS_ENV {
        cmd.env_remove(var);
    }
    cmd.env(key, value)
        .args(args)
        .output()
        .expect("failed to run mapdocs")
}

/// A temporary directory tree of map files.
pub struct MapTree {
    dir: TempDir,
}

impl MapTree {
    /// Creates an empty tree.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Root of the tree as a `&str` argument.
    #[allow(clippy::missing_panics_doc)]
    pub fn root_arg(&self) -> &str {
        self.root().to_str().expect("non-UTF-8 temp path")
    }

    /// Writes `content` at `rel`, creating parent directories.
    #[allow(clippy::missing_panics_doc)]
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().expect("relative path has a parent"))
            .expect("failed to create parent directories");
        fs::write(&path, content).expect("failed to write file");
        path
    }

    /// Reads the file at `rel`.
    #[allow(clippy::missing_panics_doc)]
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.root().join(rel)).expect("failed to read file")
    }

    /// Whether a file exists at `rel`.
    pub fn exists(&self, rel: &str) -> bool {
        self.root().join(rel).exists()
    }
}

/// Lossy stdout of a finished process.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Lossy stderr of a finished process.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
