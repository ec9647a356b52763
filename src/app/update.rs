// ABOUTME: The session reducer - applies one message to the state and returns the commands to run
//
// `update` never blocks and never performs I/O. Anything slow is described as a `Command`
// and its outcome comes back later as another `Message`.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, info};

use crate::error::PairResult;
use crate::models::{dedup_by_handle, Pair, Team, MAX_RECENT_PAIRS};

use super::message::{Command, Message};
use super::state::{Focus, SessionPolicy, SessionState, View};
use super::suggest::{filter_members, filter_teams};

/// Initial state plus the loads issued when a session starts
pub fn init(policy: SessionPolicy) -> (SessionState, Vec<Command>) {
    (
        SessionState::new(policy),
        vec![Command::LoadPairs, Command::LoadCollaborators, Command::CheckHook],
    )
}

pub fn update(state: &mut SessionState, message: Message) -> Vec<Command> {
    match message {
        Message::Key(key) => handle_key(state, key),
        Message::Redraw => Vec::new(),
        Message::PairsLoaded { active, recent } => {
            on_pairs_loaded(state, active, recent);
            Vec::new()
        }
        Message::CollaboratorsLoaded(collaborators) => {
            debug!("Loaded {} collaborators", collaborators.len());
            state.collaborators = collaborators;
            clamp_suggestions(state);
            Vec::new()
        }
        Message::SearchResults { query, results } => {
            on_search_results(state, &query, results);
            Vec::new()
        }
        Message::UserLookedUp { handle, result } => on_user_looked_up(state, &handle, result),
        Message::TeamsLoaded(teams) => {
            on_teams_loaded(state, teams);
            Vec::new()
        }
        Message::TeamMembersLoaded { org, slug, members } => {
            on_team_members_loaded(state, &org, &slug, members);
            Vec::new()
        }
        Message::HookStatus(installed) => {
            state.hook_installed = Some(installed);
            Vec::new()
        }
        Message::HookInstalled => {
            info!("Commit hook installed");
            state.hook_installed = Some(true);
            state.last_error = None;
            Vec::new()
        }
        Message::PairsChanged => vec![Command::LoadPairs],
        Message::Error(error) => {
            debug!("Surfacing error: {error}");
            state.last_error = Some(error);
            if runs_no_requests(state.view) {
                state.loading = false;
            }
            Vec::new()
        }
        Message::DebounceTick { generation, query } => on_debounce_tick(state, generation, &query),
    }
}

/// Views whose loading indicator and error belong to pair loads and mutations only.
///
/// Search and the team views run their own requests, so a pair load finishing there
/// must not end their spinner or hide their error.
const fn runs_no_requests(view: View) -> bool {
    matches!(view, View::Main | View::Help)
}

fn on_pairs_loaded(state: &mut SessionState, active: Vec<Pair>, recent: Vec<Pair>) {
    state.active = dedup_by_handle(active);
    state.recent = dedup_by_handle(recent);
    state.recent.truncate(MAX_RECENT_PAIRS);
    if runs_no_requests(state.view) {
        state.loading = false;
        state.last_error = None;
    }
    state.pair_selection.clamp(state.active.len());
    clamp_suggestions(state);
}

fn on_search_results(state: &mut SessionState, query: &str, results: PairResult<Vec<Pair>>) {
    // Only the most recent search for what is in the box right now counts
    let current = state.view == View::Search
        && query == state.last_query
        && query == state.input.trimmed();
    if !current {
        debug!("Discarding stale search results for {query:?}");
        return;
    }

    state.loading = false;
    match results {
        Ok(results) => {
            debug!("Search for {query:?} returned {} users", results.len());
            state.search_results = results;
            state.suggestion_selection.reset();
            state.last_error = None;
        }
        Err(error) => state.last_error = Some(error),
    }
}

fn on_user_looked_up(
    state: &mut SessionState,
    handle: &str,
    result: PairResult<Pair>,
) -> Vec<Command> {
    if state.view != View::Search {
        debug!("Discarding lookup of {handle} after leaving search");
        return Vec::new();
    }

    state.loading = false;
    match result {
        Ok(pair) => add_and_return(state, pair),
        Err(error) => {
            state.last_error = Some(error);
            Vec::new()
        }
    }
}

fn on_teams_loaded(state: &mut SessionState, teams: PairResult<Vec<Team>>) {
    if state.view != View::Teams {
        debug!("Discarding team list after leaving teams");
        return;
    }

    state.loading = false;
    match teams {
        Ok(teams) => {
            debug!("Loaded {} teams", teams.len());
            state.teams = teams;
            state.filtered_teams = filter_teams(&state.teams, state.input.value());
            state.team_selection.clamp(state.filtered_teams.len());
            state.last_error = None;
        }
        Err(error) => state.last_error = Some(error),
    }
}

fn on_team_members_loaded(
    state: &mut SessionState,
    org: &str,
    slug: &str,
    members: PairResult<Vec<Pair>>,
) {
    let current = state.view == View::TeamMembers
        && state.selected_team.as_ref().is_some_and(|t| t.is(org, slug));
    if !current {
        debug!("Discarding members of {org}/{slug}, team no longer selected");
        return;
    }

    state.loading = false;
    match members {
        Ok(members) => {
            state.team_members = members;
            state.filtered_members = filter_members(&state.team_members, state.input.value());
            state.member_selection.reset();
            state.last_error = None;
        }
        Err(error) => state.last_error = Some(error),
    }
}

fn on_debounce_tick(state: &mut SessionState, generation: u64, query: &str) -> Vec<Command> {
    // Both guards: a newer edit bumps the generation, and an input reset without an
    // edit (leaving the view) changes the content
    if state.view != View::Search
        || generation != state.debounce_generation
        || query != state.input.value()
    {
        return Vec::new();
    }

    let trimmed = query.trim();
    if trimmed.chars().count() < state.policy.min_query_len {
        return Vec::new();
    }

    state.loading = true;
    state.last_query = trimmed.to_string();
    vec![Command::Search {
        query: trimmed.to_string(),
    }]
}

fn handle_key(state: &mut SessionState, key: KeyEvent) -> Vec<Command> {
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }

    state.last_error = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        if state.view == View::Main {
            state.should_quit = true;
        } else {
            return_to_main(state);
        }
        return Vec::new();
    }

    match state.view {
        View::Main => handle_main_key(state, key),
        View::Search => handle_search_key(state, key),
        View::Teams => handle_teams_key(state, key),
        View::TeamMembers => handle_members_key(state, key),
        View::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?' | 'q')
            ) {
                state.view = View::Main;
            }
            Vec::new()
        }
    }
}

fn handle_main_key(state: &mut SessionState, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
            Vec::new()
        }
        KeyCode::Char('a' | '/') => {
            enter_search(state);
            Vec::new()
        }
        KeyCode::Char('t') => enter_teams(state),
        KeyCode::Char('?') => {
            state.view = View::Help;
            Vec::new()
        }
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => state
            .selected_pair()
            .map(|pair| {
                vec![Command::RemovePair {
                    handle: pair.handle.clone(),
                }]
            })
            .unwrap_or_default(),
        KeyCode::Char('c') if !state.active.is_empty() => vec![Command::ClearPairs],
        KeyCode::Char('i') if state.hook_installed != Some(true) => vec![Command::InstallHook],
        KeyCode::Up | KeyCode::Char('k') => {
            state.pair_selection.previous();
            Vec::new()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.pair_selection.next(state.active.len());
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn handle_search_key(state: &mut SessionState, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Esc => {
            return_to_main(state);
            Vec::new()
        }
        KeyCode::Tab => {
            state.focus = state.focus.toggled();
            Vec::new()
        }
        KeyCode::Enter => match state.focus {
            Focus::Input => submit_search_input(state),
            Focus::List => state
                .selected_suggestion()
                .map(|pair| add_and_return(state, pair))
                .unwrap_or_default(),
        },
        KeyCode::Up => {
            state.suggestion_selection.previous();
            Vec::new()
        }
        KeyCode::Down => {
            let len = state.suggestions().len();
            state.suggestion_selection.next(len);
            Vec::new()
        }
        _ if state.input_focused() => {
            if edit_input(state, key) {
                on_search_input_changed(state)
            } else {
                Vec::new()
            }
        }
        KeyCode::Char('q') => {
            return_to_main(state);
            Vec::new()
        }
        KeyCode::Char('k') => {
            state.suggestion_selection.previous();
            Vec::new()
        }
        KeyCode::Char('j') => {
            let len = state.suggestions().len();
            state.suggestion_selection.next(len);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Enter with the input focused: a bare handle is resolved directly, anything else is searched
fn submit_search_input(state: &mut SessionState) -> Vec<Command> {
    let text = state.input.trimmed().to_string();
    if text.is_empty() {
        return Vec::new();
    }

    // A submitted query supersedes any pending debounce
    state.debounce_generation += 1;
    state.loading = true;
    if is_handle_like(&text) {
        // Results of an earlier search for the same text must not end the lookup's spinner
        state.last_query.clear();
        vec![Command::Lookup { handle: text }]
    } else {
        state.last_query.clone_from(&text);
        vec![Command::Search { query: text }]
    }
}

fn is_handle_like(text: &str) -> bool {
    text.starts_with('@') || !text.contains(char::is_whitespace)
}

fn on_search_input_changed(state: &mut SessionState) -> Vec<Command> {
    state.debounce_generation += 1;

    if state.input.is_empty() {
        state.search_results.clear();
        state.last_query.clear();
        state.loading = false;
        state.suggestion_selection.reset();
        return Vec::new();
    }

    vec![Command::ScheduleTick {
        generation: state.debounce_generation,
        query: state.input.value().to_string(),
        delay: state.policy.debounce_delay,
    }]
}

fn handle_teams_key(state: &mut SessionState, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Esc => {
            return_to_main(state);
            Vec::new()
        }
        KeyCode::Tab => {
            state.focus = state.focus.toggled();
            Vec::new()
        }
        KeyCode::Enter => state
            .highlighted_team()
            .cloned()
            .map(|team| enter_team_members(state, team))
            .unwrap_or_default(),
        KeyCode::Up => {
            state.team_selection.previous();
            Vec::new()
        }
        KeyCode::Down => {
            state.team_selection.next(state.filtered_teams.len());
            Vec::new()
        }
        _ if state.input_focused() => {
            if edit_input(state, key) {
                state.filtered_teams = filter_teams(&state.teams, state.input.value());
                state.team_selection.reset();
            }
            Vec::new()
        }
        KeyCode::Char('q') => {
            return_to_main(state);
            Vec::new()
        }
        KeyCode::Char('k') => {
            state.team_selection.previous();
            Vec::new()
        }
        KeyCode::Char('j') => {
            state.team_selection.next(state.filtered_teams.len());
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn handle_members_key(state: &mut SessionState, key: KeyEvent) -> Vec<Command> {
    match key.code {
        KeyCode::Esc => {
            back_to_teams(state);
            Vec::new()
        }
        KeyCode::Tab => {
            state.focus = state.focus.toggled();
            Vec::new()
        }
        KeyCode::Enter => match state.focus {
            Focus::Input => {
                state.focus = Focus::List;
                Vec::new()
            }
            Focus::List => state
                .selected_member()
                .cloned()
                .map(|pair| add_and_return(state, pair))
                .unwrap_or_default(),
        },
        KeyCode::Up => {
            state.member_selection.previous();
            Vec::new()
        }
        KeyCode::Down => {
            state.member_selection.next(state.filtered_members.len());
            Vec::new()
        }
        _ if state.input_focused() => {
            if edit_input(state, key) {
                state.filtered_members = filter_members(&state.team_members, state.input.value());
                state.member_selection.reset();
            }
            Vec::new()
        }
        KeyCode::Char('q') => {
            return_to_main(state);
            Vec::new()
        }
        KeyCode::Char('k') => {
            state.member_selection.previous();
            Vec::new()
        }
        KeyCode::Char('j') => {
            state.member_selection.next(state.filtered_members.len());
            Vec::new()
        }
        _ => Vec::new(),
    }
}

/// Apply a text-editing key to the input; returns whether its contents changed
fn edit_input(state: &mut SessionState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            state.input.insert(ch)
        }
        KeyCode::Backspace => state.input.backspace(),
        _ => false,
    }
}

fn enter_search(state: &mut SessionState) {
    state.view = View::Search;
    state.focus = Focus::Input;
    state.input.clear();
    state.search_results.clear();
    state.last_query.clear();
    state.suggestion_selection.reset();
    state.loading = false;
}

fn enter_teams(state: &mut SessionState) -> Vec<Command> {
    state.view = View::Teams;
    state.focus = Focus::List;
    state.input.clear();
    state.filtered_teams = state.teams.clone();
    state.team_selection.reset();
    state.loading = true;
    vec![Command::LoadTeams]
}

fn enter_team_members(state: &mut SessionState, team: Team) -> Vec<Command> {
    let command = Command::LoadTeamMembers {
        org: team.org_name.clone(),
        slug: team.slug.clone(),
    };
    info!("Loading members of {}", team.qualified_slug());

    state.view = View::TeamMembers;
    state.focus = Focus::List;
    state.input.clear();
    state.selected_team = Some(team);
    state.team_members.clear();
    state.filtered_members.clear();
    state.member_selection.reset();
    state.loading = true;
    vec![command]
}

fn back_to_teams(state: &mut SessionState) {
    state.view = View::Teams;
    state.focus = Focus::List;
    state.input.clear();
    state.selected_team = None;
    state.team_members.clear();
    state.filtered_members.clear();
    state.filtered_teams = state.teams.clone();
    state.team_selection.clamp(state.filtered_teams.len());
    state.loading = false;
}

/// Leave any sub-view, dropping its transient state
fn return_to_main(state: &mut SessionState) {
    state.view = View::Main;
    state.focus = Focus::List;
    state.input.clear();
    state.search_results.clear();
    state.last_query.clear();
    state.selected_team = None;
    state.team_members.clear();
    state.filtered_members.clear();
    state.loading = false;
}

fn add_and_return(state: &mut SessionState, pair: Pair) -> Vec<Command> {
    info!("Adding pair {}", pair.at_handle());
    return_to_main(state);
    vec![Command::AddPair(pair)]
}

fn clamp_suggestions(state: &mut SessionState) {
    let len = state.suggestions().len();
    state.suggestion_selection.clamp(len);
}
