// ABOUTME: Session state owned by the controller - current view, lists, text input and guards

use std::time::Duration;

use crate::config::AppConfig;
use crate::error::PairError;
use crate::models::{Pair, Team};

use super::suggest::merge_suggestions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Main,
    Search,
    Teams,
    TeamMembers,
    Help,
}

/// Which sub-widget receives keystrokes in views that have both an input and a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    List,
}

impl Focus {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Input => Self::List,
            Self::List => Self::Input,
        }
    }
}

/// Policy constants the controller applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    pub debounce_delay: Duration,
    pub min_query_len: usize,
    pub char_limit: usize,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl SessionPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            debounce_delay: config.debounce_delay(),
            min_query_len: config.search.min_query_len,
            char_limit: config.input.char_limit,
        }
    }
}

/// Single-line text input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    char_limit: usize,
}

impl TextInput {
    pub const fn new(char_limit: usize) -> Self {
        Self {
            value: String::new(),
            char_limit,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Append a character; returns whether the contents changed
    pub fn insert(&mut self, ch: char) -> bool {
        if ch.is_control() || self.value.chars().count() >= self.char_limit {
            return false;
        }
        self.value.push(ch);
        true
    }

    /// Delete the last character; returns whether the contents changed
    pub fn backspace(&mut self) -> bool {
        self.value.pop().is_some()
    }

    /// Empty the input; returns whether the contents changed
    pub fn clear(&mut self) -> bool {
        let changed = !self.value.is_empty();
        self.value.clear();
        changed
    }
}

/// Cursor into a list whose length can change under it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    pub const fn index(self) -> usize {
        self.index
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 {
            self.index = (self.index + 1).min(len - 1);
        }
    }

    pub fn previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }

    /// Pull the cursor back inside a list of `len` items
    pub fn clamp(&mut self, len: usize) {
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }

    pub fn pick<T>(self, items: &[T]) -> Option<&T> {
        items.get(self.index)
    }
}

/// Everything the interactive session knows. Mutated only by `update`.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub view: View,
    pub focus: Focus,

    pub active: Vec<Pair>,
    pub recent: Vec<Pair>,
    pub collaborators: Vec<Pair>,
    pub search_results: Vec<Pair>,

    pub teams: Vec<Team>,
    pub filtered_teams: Vec<Team>,
    pub selected_team: Option<Team>,
    pub team_members: Vec<Pair>,
    pub filtered_members: Vec<Pair>,

    pub input: TextInput,
    /// Bumped on every edit of the search input; ticks from older generations are ignored
    pub debounce_generation: u64,
    /// Query of the most recently issued search; results for any other query are ignored
    pub last_query: String,

    pub loading: bool,
    pub last_error: Option<PairError>,
    /// `None` until the first hook check completes
    pub hook_installed: Option<bool>,

    pub pair_selection: Selection,
    pub suggestion_selection: Selection,
    pub team_selection: Selection,
    pub member_selection: Selection,

    pub should_quit: bool,
    pub policy: SessionPolicy,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(SessionPolicy::default())
    }
}

impl SessionState {
    pub fn new(policy: SessionPolicy) -> Self {
        Self {
            view: View::Main,
            focus: Focus::List,
            active: Vec::new(),
            recent: Vec::new(),
            collaborators: Vec::new(),
            search_results: Vec::new(),
            teams: Vec::new(),
            filtered_teams: Vec::new(),
            selected_team: None,
            team_members: Vec::new(),
            filtered_members: Vec::new(),
            input: TextInput::new(policy.char_limit),
            debounce_generation: 0,
            last_query: String::new(),
            loading: true,
            last_error: None,
            hook_installed: None,
            pair_selection: Selection::default(),
            suggestion_selection: Selection::default(),
            team_selection: Selection::default(),
            member_selection: Selection::default(),
            should_quit: false,
            policy,
        }
    }

    /// Candidates shown in the search view
    pub fn suggestions(&self) -> Vec<Pair> {
        merge_suggestions(
            &self.active,
            &self.recent,
            &self.collaborators,
            &self.search_results,
        )
    }

    pub fn selected_pair(&self) -> Option<&Pair> {
        self.pair_selection.pick(&self.active)
    }

    pub fn selected_suggestion(&self) -> Option<Pair> {
        self.suggestion_selection.pick(&self.suggestions()).cloned()
    }

    pub fn highlighted_team(&self) -> Option<&Team> {
        self.team_selection.pick(&self.filtered_teams)
    }

    pub fn selected_member(&self) -> Option<&Pair> {
        self.member_selection.pick(&self.filtered_members)
    }

    pub const fn input_focused(&self) -> bool {
        matches!(self.focus, Focus::Input)
    }

    /// Whether the current view shows the text input
    pub const fn has_input(&self) -> bool {
        matches!(self.view, View::Search | View::Teams | View::TeamMembers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading_main() {
        let state = SessionState::default();
        assert_eq!(state.view, View::Main);
        assert!(state.loading);
        assert_eq!(state.debounce_generation, 0);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_text_input_respects_char_limit() {
        let mut input = TextInput::new(3);
        assert!(input.insert('a'));
        assert!(input.insert('b'));
        assert!(input.insert('c'));
        assert!(!input.insert('d'));
        assert_eq!(input.value(), "abc");
        assert!(input.backspace());
        assert_eq!(input.value(), "ab");
    }

    #[test]
    fn test_text_input_clear_reports_change() {
        let mut input = TextInput::new(10);
        assert!(!input.clear());
        input.insert('x');
        assert!(input.clear());
        assert!(input.is_empty());
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut selection = Selection::default();
        selection.previous();
        assert_eq!(selection.index(), 0);

        selection.next(2);
        selection.next(2);
        assert_eq!(selection.index(), 1);

        selection.clamp(1);
        assert_eq!(selection.index(), 0);

        selection.next(0);
        assert_eq!(selection.index(), 0);
    }
}
