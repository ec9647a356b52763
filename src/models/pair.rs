// ABOUTME: Pair data model - a commit co-author identity keyed by its GitHub handle

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// Default bound on the most-recently-used list
pub const MAX_RECENT_PAIRS: usize = 10;

/// A co-author for commits.
///
/// Identity is the `handle`: two pairs with the same handle are equal even if the
/// provider later reports a different name or email for them. The serialized field
/// names are read by the commit-msg hook and must stay stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pair {
    #[serde(rename = "username")]
    pub handle: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "email")]
    pub email_address: String,
}

impl Pair {
    pub fn new(
        handle: impl Into<String>,
        display_name: impl Into<String>,
        email_address: impl Into<String>,
    ) -> Self {
        Self {
            handle: normalize_handle(&handle.into()).to_string(),
            display_name: display_name.into(),
            email_address: email_address.into(),
        }
    }

    /// The `Co-Authored-By` trailer line for this pair
    pub fn co_author_line(&self) -> String {
        format!("Co-Authored-By: {} <{}>", self.display_name, self.email_address)
    }

    /// Handle with the conventional `@` prefix
    pub fn at_handle(&self) -> String {
        format!("@{}", self.handle)
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for Pair {}

impl Hash for Pair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}

/// Strip surrounding whitespace and a leading `@` from a user-supplied handle
pub fn normalize_handle(handle: &str) -> &str {
    let trimmed = handle.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed)
}

/// Remove later duplicates by handle, keeping the first occurrence in place
pub fn dedup_by_handle(pairs: Vec<Pair>) -> Vec<Pair> {
    let mut seen = HashSet::new();
    pairs
        .into_iter()
        .filter(|p| seen.insert(p.handle.clone()))
        .collect()
}

/// Move (or insert) `pair` to the front of `recent`, then truncate to `cap`
pub fn push_recent(recent: Vec<Pair>, pair: Pair, cap: usize) -> Vec<Pair> {
    let mut updated = Vec::with_capacity(recent.len() + 1);
    let handle = pair.handle.clone();
    updated.push(pair);
    updated.extend(recent.into_iter().filter(|p| p.handle != handle));
    updated.truncate(cap);
    updated
}
