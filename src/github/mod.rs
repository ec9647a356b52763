// ABOUTME: Identity provider - resolves, searches and lists GitHub users and teams

pub mod gh_cli;
pub mod responses;

pub use gh_cli::GhCliProvider;

use crate::error::PairResult;
use crate::models::{Pair, Team};

/// Remote identity lookups. Every call blocks until the remote answers, so callers
/// run them on background workers.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityProvider: Send + Sync {
    /// Resolve a single user; fails with `NotFound` for unknown handles
    fn lookup(&self, handle: &str) -> PairResult<Pair>;

    /// Free-text user search, provider-ordered
    fn search(&self, text: &str) -> PairResult<Vec<Pair>>;

    /// Collaborators of the current repository; empty when the caller lacks permission
    fn list_collaborators(&self) -> PairResult<Vec<Pair>>;

    /// Teams the caller belongs to
    fn list_teams(&self) -> PairResult<Vec<Team>>;

    /// Members of `org/slug`
    fn list_team_members(&self, org: &str, slug: &str) -> PairResult<Vec<Pair>>;
}
