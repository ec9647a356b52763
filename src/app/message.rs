// ABOUTME: Messages delivered to the session controller and the commands it asks to have run
//
// Every asynchronous outcome arrives as a `Message`. Results whose relevance depends on
// what the user has typed since carry the context they were issued for, so `update`
// can throw stale ones away.

use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::error::{PairError, PairResult};
use crate::models::{Pair, Team};

#[derive(Debug, Clone)]
pub enum Message {
    Key(KeyEvent),
    /// Terminal resized; nothing to update but the screen
    Redraw,

    PairsLoaded { active: Vec<Pair>, recent: Vec<Pair> },
    CollaboratorsLoaded(Vec<Pair>),
    SearchResults {
        query: String,
        results: PairResult<Vec<Pair>>,
    },
    UserLookedUp {
        handle: String,
        result: PairResult<Pair>,
    },
    TeamsLoaded(PairResult<Vec<Team>>),
    TeamMembersLoaded {
        org: String,
        slug: String,
        members: PairResult<Vec<Pair>>,
    },
    HookStatus(bool),
    HookInstalled,
    /// The active list was mutated and must be re-read
    PairsChanged,
    Error(PairError),
    /// Debounce timer fired for the input as it was at `generation`
    DebounceTick { generation: u64, query: String },
}

/// Work for the dispatcher. Each command resolves to exactly one `Message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadPairs,
    LoadCollaborators,
    CheckHook,
    InstallHook,
    Search { query: String },
    Lookup { handle: String },
    LoadTeams,
    LoadTeamMembers { org: String, slug: String },
    AddPair(Pair),
    RemovePair { handle: String },
    ClearPairs,
    ScheduleTick {
        generation: u64,
        query: String,
        delay: Duration,
    },
}

impl Command {
    /// Short name used in logs and timeout errors
    pub const fn label(&self) -> &'static str {
        match self {
            Self::LoadPairs => "loading pairs",
            Self::LoadCollaborators => "loading collaborators",
            Self::CheckHook => "checking hook",
            Self::InstallHook => "installing hook",
            Self::Search { .. } => "search",
            Self::Lookup { .. } => "user lookup",
            Self::LoadTeams => "loading teams",
            Self::LoadTeamMembers { .. } => "loading team members",
            Self::AddPair(_) => "adding pair",
            Self::RemovePair { .. } => "removing pair",
            Self::ClearPairs => "clearing pairs",
            Self::ScheduleTick { .. } => "debounce",
        }
    }

    /// The message reporting that this command failed before producing a result.
    ///
    /// Context-carrying results keep their context so the staleness checks still apply.
    pub fn failure_message(&self, error: PairError) -> Message {
        match self {
            Self::Search { query } => Message::SearchResults {
                query: query.clone(),
                results: Err(error),
            },
            Self::Lookup { handle } => Message::UserLookedUp {
                handle: handle.clone(),
                result: Err(error),
            },
            Self::LoadTeamMembers { org, slug } => Message::TeamMembersLoaded {
                org: org.clone(),
                slug: slug.clone(),
                members: Err(error),
            },
            Self::LoadTeams => Message::TeamsLoaded(Err(error)),
            Self::LoadCollaborators => Message::CollaboratorsLoaded(Vec::new()),
            _ => Message::Error(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_failure_keeps_query() {
        let command = Command::Search {
            query: "octo".to_string(),
        };
        match command.failure_message(PairError::Timeout("search".to_string())) {
            Message::SearchResults { query, results } => {
                assert_eq!(query, "octo");
                assert!(results.is_err());
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn test_team_listing_failure_stays_a_team_result() {
        let message = Command::LoadTeams.failure_message(PairError::Timeout("teams".into()));
        assert!(matches!(message, Message::TeamsLoaded(Err(PairError::Timeout(_)))));
    }

    #[test]
    fn test_mutation_failure_is_plain_error() {
        let message = Command::ClearPairs.failure_message(PairError::Persistence("disk".into()));
        assert!(matches!(message, Message::Error(PairError::Persistence(_))));
    }
}
