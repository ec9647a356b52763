// ABOUTME: Commit hook management - installs the commit-msg hook that appends co-author trailers

pub mod commit_msg;

pub use commit_msg::{CommitMsgHook, HOOK_MARKER};

use crate::error::PairResult;

/// Install state of the co-author hook in one repository
#[cfg_attr(test, mockall::automock)]
pub trait HookManager: Send + Sync {
    /// Whether our hook is the active commit-msg hook
    fn is_installed(&self) -> bool;

    /// Install (or refresh) our hook; installing twice is not an error
    fn install(&self) -> PairResult<()>;

    /// Remove our hook and restore any hook it replaced
    fn uninstall(&self) -> PairResult<()>;
}
