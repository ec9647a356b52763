// ABOUTME: Identity store - persistence of the active pair list and the recent pairs history
//
// The session never writes pair files directly: every mutation goes through an
// `IdentityStore` and the session re-reads the lists afterwards.

pub mod json_store;

pub use json_store::{JsonFileStore, PAIRS_FILE_NAME, RECENT_FILE_NAME};

use tracing::{info, warn};

use crate::error::PairResult;
use crate::models::Pair;

/// Persistence contract for the active and recent pair lists.
///
/// Calls may block on file I/O and must not run on the session's message loop.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityStore: Send + Sync {
    /// Current active pairs, in insertion order
    fn load_active(&self) -> PairResult<Vec<Pair>>;

    /// Replace the active pairs
    fn save_active(&self, pairs: &[Pair]) -> PairResult<()>;

    /// Recent pairs, most recently used first
    fn load_recent(&self) -> PairResult<Vec<Pair>>;

    /// Move `pair` to the front of the recent list, capping its length
    fn record_used(&self, pair: &Pair) -> PairResult<()>;
}

/// Add `pair` to the active list and record it as used.
///
/// Returns `false` when a pair with the same handle is already active; the recent
/// list is still refreshed in that case.
///
/// Only a failure to save the active list is an error. Once it is saved the pair is
/// active, so a failed history write is logged and the add still reports success.
pub fn add_pair(store: &dyn IdentityStore, pair: &Pair) -> PairResult<bool> {
    let mut active = store.load_active()?;

    let added = if active.contains(pair) {
        false
    } else {
        active.push(pair.clone());
        store.save_active(&active)?;
        info!("Added pair @{}", pair.handle);
        true
    };

    if let Err(e) = store.record_used(pair) {
        warn!("Failed to record @{} in recent pairs: {}", pair.handle, e);
    }
    Ok(added)
}

/// Remove the active pair with `handle`, returning it if it was present
pub fn remove_pair(store: &dyn IdentityStore, handle: &str) -> PairResult<Option<Pair>> {
    let mut active = store.load_active()?;
    let Some(index) = active.iter().position(|p| p.handle == handle) else {
        return Ok(None);
    };

    let removed = active.remove(index);
    store.save_active(&active)?;
    info!("Removed pair @{}", removed.handle);
    Ok(Some(removed))
}

/// Remove every active pair
pub fn clear_pairs(store: &dyn IdentityStore) -> PairResult<()> {
    store.save_active(&[])?;
    info!("Cleared all pairs");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PairError;

    fn octocat() -> Pair {
        Pair::new("octocat", "The Octocat", "x@y")
    }

    #[test]
    fn test_add_pair_skips_existing_but_records_use() {
        let mut store = MockIdentityStore::new();
        store.expect_load_active().returning(|| Ok(vec![octocat()]));
        store.expect_save_active().never();
        store.expect_record_used().times(1).returning(|_| Ok(()));

        assert!(!add_pair(&store, &octocat()).unwrap());
    }

    #[test]
    fn test_add_pair_does_not_record_when_save_fails() {
        let mut store = MockIdentityStore::new();
        store.expect_load_active().returning(|| Ok(Vec::new()));
        store
            .expect_save_active()
            .returning(|_| Err(PairError::Persistence("disk full".into())));
        store.expect_record_used().never();

        let result = add_pair(&store, &octocat());
        assert!(matches!(result, Err(PairError::Persistence(_))));
    }

    #[test]
    fn test_add_pair_survives_history_write_failure() {
        let mut store = MockIdentityStore::new();
        store.expect_load_active().returning(|| Ok(Vec::new()));
        store.expect_save_active().times(1).returning(|_| Ok(()));
        store
            .expect_record_used()
            .times(1)
            .returning(|_| Err(PairError::Persistence("recent.json read-only".into())));

        assert!(add_pair(&store, &octocat()).unwrap());
    }

    #[test]
    fn test_remove_missing_pair_does_not_write() {
        let mut store = MockIdentityStore::new();
        store.expect_load_active().returning(|| Ok(vec![octocat()]));
        store.expect_save_active().never();

        assert_eq!(remove_pair(&store, "hubot").unwrap(), None);
    }
}
