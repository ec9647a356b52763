// ABOUTME: commit-msg hook installer with backup/restore of a pre-existing foreign hook

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::HookManager;
use crate::error::PairResult;

/// Marker line identifying hooks written by gh-pair
pub const HOOK_MARKER: &str = "# gh-pair: commit-msg hook";

const HOOK_NAME: &str = "commit-msg";
const LEGACY_HOOK_NAME: &str = "prepare-commit-msg";
const BACKUP_SUFFIX: &str = ".gh-pair-backup";

const HOOK_SCRIPT: &str = r#"#!/bin/sh
# gh-pair: commit-msg hook
# Managed by gh-pair. Reinstall with `gh-pair init`, remove with `gh-pair uninstall`.

MSG_FILE="$1"
PAIRS_FILE="$(git rev-parse --git-dir 2>/dev/null)/gh-pair/pairs.json"

[ -f "$PAIRS_FILE" ] || exit 0

# Only comments and blank lines: the commit is being aborted
grep -v '^#' "$MSG_FILE" | grep -q '[^[:space:]]' || exit 0

# Trailers already present (amend, rebase, manual entry)
grep -qi '^Co-Authored-By:' "$MSG_FILE" && exit 0

TRAILERS=$(awk -F'"' '
  $2 == "name"  { name = $4 }
  $2 == "email" { printf "Co-Authored-By: %s <%s>\n", name, $4 }
' "$PAIRS_FILE")

[ -n "$TRAILERS" ] || exit 0

printf '\n%s\n' "$TRAILERS" >> "$MSG_FILE"
exit 0
"#;

/// The gh-pair commit-msg hook of one repository
#[derive(Debug, Clone)]
pub struct CommitMsgHook {
    hooks_dir: PathBuf,
}

impl CommitMsgHook {
    pub fn new(hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    pub fn hook_path(&self) -> PathBuf {
        self.hooks_dir.join(HOOK_NAME)
    }

    fn legacy_hook_path(&self) -> PathBuf {
        self.hooks_dir.join(LEGACY_HOOK_NAME)
    }

    fn backup_path(&self) -> PathBuf {
        self.hooks_dir.join(format!("{HOOK_NAME}{BACKUP_SUFFIX}"))
    }

    /// Whether an older prepare-commit-msg hook of ours is still around
    pub fn has_legacy_hook(&self) -> bool {
        is_ours(&self.legacy_hook_path())
    }

    /// Remove the older prepare-commit-msg hook if it is ours
    pub fn remove_legacy_hook(&self) -> PairResult<bool> {
        if !self.has_legacy_hook() {
            return Ok(false);
        }
        fs::remove_file(self.legacy_hook_path())?;
        info!("Removed legacy {} hook", LEGACY_HOOK_NAME);
        Ok(true)
    }
}

fn is_ours(path: &Path) -> bool {
    fs::read_to_string(path).is_ok_and(|content| is_our_script(&content))
}

fn is_our_script(content: &str) -> bool {
    content.lines().take(3).any(|line| line.trim() == HOOK_MARKER)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> PairResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> PairResult<()> {
    Ok(())
}

impl HookManager for CommitMsgHook {
    fn is_installed(&self) -> bool {
        is_ours(&self.hook_path())
    }

    fn install(&self) -> PairResult<()> {
        fs::create_dir_all(&self.hooks_dir)?;
        self.remove_legacy_hook()?;

        let hook_path = self.hook_path();
        match fs::read_to_string(&hook_path) {
            Ok(content) if is_our_script(&content) => {
                debug!("Refreshing existing gh-pair hook");
            }
            Ok(_) => {
                let backup = self.backup_path();
                warn!(
                    "Backing up existing commit-msg hook to {}",
                    backup.display()
                );
                fs::rename(&hook_path, &backup)?;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        fs::write(&hook_path, HOOK_SCRIPT)?;
        make_executable(&hook_path)?;
        info!("Installed commit-msg hook at {}", hook_path.display());
        Ok(())
    }

    fn uninstall(&self) -> PairResult<()> {
        self.remove_legacy_hook()?;

        if !self.is_installed() {
            debug!("No gh-pair commit-msg hook to remove");
            return Ok(());
        }

        fs::remove_file(self.hook_path())?;

        let backup = self.backup_path();
        if backup.exists() {
            fs::rename(&backup, self.hook_path())?;
            info!("Restored previous commit-msg hook");
        }

        info!("Uninstalled commit-msg hook");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_install_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let hook = CommitMsgHook::new(dir.path().join("hooks"));

        assert!(!hook.is_installed());
        hook.install().unwrap();
        hook.install().unwrap();
        assert!(hook.is_installed());
        assert!(!hook.backup_path().exists());
    }

    #[test]
    fn test_foreign_hook_is_backed_up_and_restored() {
        let dir = TempDir::new().unwrap();
        let hook = CommitMsgHook::new(dir.path());
        fs::write(hook.hook_path(), "#!/bin/sh\necho lint\n").unwrap();

        hook.install().unwrap();
        assert!(hook.is_installed());
        assert_eq!(
            fs::read_to_string(hook.backup_path()).unwrap(),
            "#!/bin/sh\necho lint\n"
        );

        hook.uninstall().unwrap();
        assert!(!hook.is_installed());
        assert_eq!(
            fs::read_to_string(hook.hook_path()).unwrap(),
            "#!/bin/sh\necho lint\n"
        );
    }

    #[test]
    fn test_uninstall_leaves_foreign_hook_alone() {
        let dir = TempDir::new().unwrap();
        let hook = CommitMsgHook::new(dir.path());
        fs::write(hook.hook_path(), "#!/bin/sh\nexit 0\n").unwrap();

        hook.uninstall().unwrap();
        assert!(hook.hook_path().exists());
    }

    #[test]
    fn test_install_removes_legacy_hook() {
        let dir = TempDir::new().unwrap();
        let hook = CommitMsgHook::new(dir.path());
        fs::write(hook.legacy_hook_path(), HOOK_SCRIPT).unwrap();
        assert!(hook.has_legacy_hook());

        hook.install().unwrap();
        assert!(!hook.legacy_hook_path().exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_installed_hook_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let hook = CommitMsgHook::new(dir.path());
        hook.install().unwrap();

        let mode = fs::metadata(hook.hook_path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111);
    }
}
