// ABOUTME: Core data models for pair identities, teams, and list rows shown by the session

pub mod entry;
pub mod pair;
pub mod team;

pub use entry::ListEntry;
pub use pair::{dedup_by_handle, normalize_handle, push_recent, Pair, MAX_RECENT_PAIRS};
pub use team::Team;
