// ABOUTME: Suggestion merging and local filtering of teams and team members

use std::collections::HashSet;

use crate::models::{Pair, Team};

/// Build the search view's candidate list.
///
/// Fresh search results win outright. Otherwise recent pairs come first, then
/// collaborators, skipping anything already active and anything seen earlier.
pub fn merge_suggestions(
    active: &[Pair],
    recent: &[Pair],
    collaborators: &[Pair],
    search_results: &[Pair],
) -> Vec<Pair> {
    if !search_results.is_empty() {
        return search_results.to_vec();
    }

    let mut seen: HashSet<&str> = active.iter().map(|p| p.handle.as_str()).collect();
    recent
        .iter()
        .chain(collaborators)
        .filter(|p| seen.insert(p.handle.as_str()))
        .cloned()
        .collect()
}

/// Teams whose slug, display name or org contains `query`, ignoring case
pub fn filter_teams(teams: &[Team], query: &str) -> Vec<Team> {
    if query.is_empty() {
        return teams.to_vec();
    }

    let needle = query.to_lowercase();
    teams
        .iter()
        .filter(|t| {
            [&t.slug, &t.display_name, &t.org_name]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Members whose handle or display name contains `query`, ignoring case
pub fn filter_members(members: &[Pair], query: &str) -> Vec<Pair> {
    if query.is_empty() {
        return members.to_vec();
    }

    let needle = query.to_lowercase();
    members
        .iter()
        .filter(|m| {
            m.handle.to_lowercase().contains(&needle)
                || m.display_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
