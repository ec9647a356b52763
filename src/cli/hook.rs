// ABOUTME: CLI init and uninstall commands - manage the commit-msg hook of the current repository

use anyhow::Result;

use super::util::RepoContext;
use crate::hook::HookManager;

/// Execute the init command
pub fn init() -> Result<()> {
    let context = RepoContext::open()?;

    if context.hook.remove_legacy_hook()? {
        println!("Removed the old prepare-commit-msg hook");
    }

    let already = context.hook.is_installed();
    context.hook.install()?;
    context.paths.ensure_data_dir()?;

    if already {
        println!("Commit hook already installed at {}", context.hook.hook_path().display());
    } else {
        println!("Installed commit hook at {}", context.hook.hook_path().display());
    }
    Ok(())
}

/// Execute the uninstall command
pub fn uninstall() -> Result<()> {
    let context = RepoContext::open()?;

    if !context.hook.is_installed() {
        println!("Commit hook is not installed");
        return Ok(());
    }

    context.hook.uninstall()?;
    println!("Removed commit hook from {}", context.hook.hook_path().display());
    Ok(())
}
