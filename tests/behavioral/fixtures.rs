// ABOUTME: Shared test fixtures and utilities for behavioral tests
//
// Provides:
// - TestRepo: Temporary git repository for testing
// - git_available(): Check if git is installed
// - require_git!(): Skip test if git unavailable

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Creates a temporary git repository with initial commit
pub struct TestRepo {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    /// Create a new temporary git repository with initial commit
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let path = dir.path().to_path_buf();

        git(&path, &["init"])?;
        git(&path, &["config", "user.email", "test@test.com"])?;
        git(&path, &["config", "user.name", "Test User"])?;

        std::fs::write(path.join("README.md"), "# Test Repo\n")?;
        git(&path, &["add", "."])?;
        git(&path, &["commit", "-m", "Initial commit"])?;

        Ok(Self { dir, path })
    }

    /// Commit a new file and return the full message of the resulting commit
    pub fn commit(&self, file: &str, message: &str) -> Result<String> {
        std::fs::write(self.path.join(file), file)?;
        git(&self.path, &["add", file])?;
        git(&self.path, &["commit", "-m", message])?;
        git(&self.path, &["log", "-1", "--format=%B"])
    }

    pub fn git_dir(&self) -> PathBuf {
        self.path.join(".git")
    }
}

/// Run git in `dir`, returning stdout
pub fn git(dir: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(dir).output()?;
    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Check if git is available on the system
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Skip the current test when git is not installed
#[macro_export]
macro_rules! require_git {
    () => {
        if !$crate::fixtures::git_available() {
            eprintln!("Skipping test: git not available");
            return;
        }
    };
}
