// ABOUTME: Row type shared by every list in the session - either a pair or a team

use super::{Pair, Team};

/// A list row. Pair rows and team rows share the same rendering capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEntry<'a> {
    Pair(&'a Pair),
    Team(&'a Team),
}

impl ListEntry<'_> {
    /// Primary text of the row
    pub fn label(&self) -> String {
        match self {
            Self::Pair(pair) => pair.at_handle(),
            Self::Team(team) => team.display_name.clone(),
        }
    }

    /// Secondary text of the row
    pub fn detail(&self) -> String {
        match self {
            Self::Pair(pair) => format!("{} <{}>", pair.display_name, pair.email_address),
            Self::Team(team) => team.qualified_slug(),
        }
    }
}

impl<'a> From<&'a Pair> for ListEntry<'a> {
    fn from(pair: &'a Pair) -> Self {
        Self::Pair(pair)
    }
}

impl<'a> From<&'a Team> for ListEntry<'a> {
    fn from(team: &'a Team) -> Self {
        Self::Team(team)
    }
}
