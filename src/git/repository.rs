// ABOUTME: Git repository discovery - locates the git dir, hooks dir and gh-pair data dir

use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{PairError, PairResult};

/// Name of the directory inside the git dir that holds pairs.json and recent.json
pub const DATA_DIR_NAME: &str = "gh-pair";

/// Filesystem locations of the repository the session operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPaths {
    /// The `.git` directory (per-worktree for linked worktrees)
    pub git_dir: PathBuf,
    /// Directory hooks are read from, honouring `core.hooksPath`
    pub hooks_dir: PathBuf,
    /// `<git-dir>/gh-pair`
    pub data_dir: PathBuf,
}

impl RepoPaths {
    /// Discover the repository containing `start`
    pub fn discover(start: &Path) -> PairResult<Self> {
        let repo = Repository::discover(start).map_err(|e| {
            debug!("No git repository found from {}: {}", start.display(), e);
            PairError::NotARepository
        })?;

        if repo.is_bare() {
            return Err(PairError::NotARepository);
        }

        let git_dir = repo.path().to_path_buf();
        let hooks_dir = Self::resolve_hooks_dir(&repo);
        let data_dir = git_dir.join(DATA_DIR_NAME);

        Ok(Self {
            git_dir,
            hooks_dir,
            data_dir,
        })
    }

    /// Discover the repository containing the current directory
    pub fn current() -> PairResult<Self> {
        let cwd = std::env::current_dir()?;
        Self::discover(&cwd)
    }

    fn resolve_hooks_dir(repo: &Repository) -> PathBuf {
        let configured = repo
            .config()
            .and_then(|config| config.get_path("core.hooksPath"))
            .ok();

        match configured {
            Some(path) if path.is_absolute() => path,
            Some(path) => repo
                .workdir()
                .map_or_else(|| common_dir(repo).join(&path), |workdir| workdir.join(&path)),
            None => common_dir(repo).join("hooks"),
        }
    }

    /// Create the data directory if needed and return it
    pub fn ensure_data_dir(&self) -> PairResult<&Path> {
        fs::create_dir_all(&self.data_dir)?;
        Ok(&self.data_dir)
    }
}

/// The git dir shared by all worktrees of `repo`.
///
/// A linked worktree's git dir (`.git/worktrees/<name>`) holds a `commondir` file naming
/// the main git dir, relative to itself or absolute. Hooks live in the shared one.
fn common_dir(repo: &Repository) -> PathBuf {
    let git_dir = repo.path();
    if !repo.is_worktree() {
        return git_dir.to_path_buf();
    }

    match fs::read_to_string(git_dir.join("commondir")) {
        Ok(content) => {
            let common = git_dir.join(content.trim());
            fs::canonicalize(&common).unwrap_or(common)
        }
        Err(e) => {
            debug!("No commondir in {}: {}", git_dir.display(), e);
            git_dir.to_path_buf()
        }
    }
}

/// Whether the current directory is inside a git work tree
pub fn is_inside_work_tree() -> bool {
    RepoPaths::current().is_ok()
}

/// `<git-dir>/gh-pair` for the current repository
pub fn data_dir() -> PairResult<PathBuf> {
    RepoPaths::current().map(|paths| paths.data_dir)
}
