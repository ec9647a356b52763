// ABOUTME: Error taxonomy shared by the store, identity provider, hook manager and controller

use thiserror::Error;

/// Errors surfaced by the collaborators the session controller talks to
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PairError {
    /// Lookup of a handle that does not exist remotely
    #[error("user not found: {0}")]
    NotFound(String),

    /// Listing is unavailable for the caller; list operations treat this as an empty result
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The gh tool could not be reached or returned malformed data
    #[error("GitHub request failed: {0}")]
    Transport(String),

    /// Reading or writing the pair files failed
    #[error("failed to persist pairs: {0}")]
    Persistence(String),

    /// The current directory is not inside a git work tree
    #[error("not a git repository")]
    NotARepository,

    /// An async command exceeded the configured timeout
    #[error("{0} timed out")]
    Timeout(String),
}

/// Result type for collaborator operations
pub type PairResult<T> = Result<T, PairError>;

impl From<std::io::Error> for PairError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl From<serde_json::Error> for PairError {
    fn from(err: serde_json::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl PairError {
    /// Whether the error means "nothing to list" rather than a failure
    pub const fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied(_))
    }
}
