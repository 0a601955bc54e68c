//! Scratch directory plus a runner for the `nordot` binary.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// A temporary working directory that the binary is run inside.
///
/// Relative paths (including the default output name) land here and are
/// removed with the directory.
pub struct TestDir {
    dir: TempDir,
}

/// Captured result of one binary invocation
pub struct RunOutput {
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

impl TestDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Absolute path of `name` inside the directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file and return its path
    pub fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    /// Save an RGB image fixture (format from the extension)
    pub fn save_image(&self, name: &str, image: &image::RgbImage) -> PathBuf {
        let path = self.path(name);
        image.save(&path).expect("Failed to save fixture image");
        path
    }

    /// Run `nordot` with `args` in this directory and `NORDOT_CONFIG` unset.
    pub fn run(&self, args: &[&str]) -> RunOutput {
        self.run_with_env(args, &[])
    }

    /// Run `nordot` with extra environment variables.
    pub fn run_with_env(&self, args: &[&str], env: &[(&str, &Path)]) -> RunOutput {
        let mut command = Command::new(env!("CARGO_BIN_EXE_nordot"));
        command
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("NORDOT_CONFIG")
            .env_remove("RUST_LOG");
        for (key, value) in env {
            command.env(key, value);
        }
        let output = command.output().expect("Failed to run nordot");

        RunOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}
