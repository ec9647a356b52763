// ABOUTME: Main layout component - header, hook status, text input, the current list and the key bar

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::{EntryList, EntryListComponent, HelpComponent};
use crate::app::{SessionState, View};
use crate::models::{ListEntry, Pair};

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
const ERROR_RED: Color = Color::Rgb(230, 90, 90);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

pub struct LayoutComponent {
    entry_list: EntryListComponent,
    help: HelpComponent,
}

impl LayoutComponent {
    pub const fn new() -> Self {
        Self {
            entry_list: EntryListComponent::new(),
            help: HelpComponent::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, state: &SessionState) {
        let input_height = if state.has_input() { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(input_height),
                Constraint::Min(3),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(frame.size());

        frame.render_widget(Self::header(state), chunks[0]);
        frame.render_widget(Self::status_line(state), chunks[1]);
        if state.has_input() {
            Self::render_input(frame, chunks[2], state);
        }
        let suggestions = if state.view == View::Search {
            state.suggestions()
        } else {
            Vec::new()
        };
        self.entry_list
            .render(frame, chunks[3], &Self::body(state, &suggestions));
        if let Some(error) = &state.last_error {
            let line = Line::from(Span::styled(
                format!(" {error}"),
                Style::default().fg(ERROR_RED),
            ));
            frame.render_widget(Paragraph::new(line), chunks[4]);
        }
        frame.render_widget(Self::key_bar(state), chunks[5]);

        if state.view == View::Help {
            self.help.render(frame, frame.size());
        }
    }

    fn header(state: &SessionState) -> Paragraph<'static> {
        let subtitle = match state.view {
            View::Main | View::Help => "active pairs".to_string(),
            View::Search => "add a pair".to_string(),
            View::Teams => "teams".to_string(),
            View::TeamMembers => state
                .selected_team
                .as_ref()
                .map_or_else(|| "team members".to_string(), |t| t.qualified_slug()),
        };

        Paragraph::new(Line::from(vec![
            Span::styled(
                " gh-pair ",
                Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
            ),
            Span::styled(subtitle, Style::default().fg(SOFT_WHITE)),
        ]))
    }

    fn status_line(state: &SessionState) -> Paragraph<'static> {
        let line = if state.loading {
            let text = if state.view == View::Search {
                " Searching..."
            } else {
                " Loading..."
            };
            Line::from(Span::styled(text, Style::default().fg(MUTED_GRAY)))
        } else if state.hook_installed == Some(false) {
            Line::from(Span::styled(
                " Commit hook not installed - press i to install it",
                Style::default().fg(WARNING_ORANGE),
            ))
        } else {
            Line::from(Span::styled(
                format!(" {} active", state.active.len()),
                Style::default().fg(MUTED_GRAY),
            ))
        };
        Paragraph::new(line)
    }

    fn render_input(frame: &mut Frame, area: Rect, state: &SessionState) {
        let (title, placeholder) = match state.view {
            View::Teams => ("Filter teams", "Type to filter"),
            View::TeamMembers => ("Filter members", "Type to filter"),
            _ => ("Search GitHub users", "Name, or @handle and Enter"),
        };
        let focused = state.input_focused();

        let text = if state.input.is_empty() && !focused {
            Span::styled(placeholder, Style::default().fg(MUTED_GRAY))
        } else {
            Span::styled(state.input.value(), Style::default().fg(SOFT_WHITE))
        };

        let border_color = if focused { CORNFLOWER_BLUE } else { SUBDUED_BORDER };
        let input = Paragraph::new(Line::from(text)).block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border_color)),
        );
        frame.render_widget(input, area);

        if focused {
            let typed = u16::try_from(state.input.value().chars().count()).unwrap_or(u16::MAX);
            let x = area.x.saturating_add(1).saturating_add(typed);
            frame.set_cursor(x.min(area.right().saturating_sub(2)), area.y + 1);
        }
    }

    fn body<'a>(state: &'a SessionState, suggestions: &'a [Pair]) -> EntryList<'a> {
        let list_focused = !state.input_focused();
        match state.view {
            View::Main | View::Help => EntryList {
                title: "Co-authors".to_string(),
                entries: state.active.iter().map(ListEntry::from).collect(),
                selected: state.pair_selection.index(),
                focused: true,
                placeholder: "No active pairs. Press a to add one.",
            },
            View::Search => {
                let title = if state.search_results.is_empty() {
                    "Suggestions"
                } else {
                    "Search results"
                };
                EntryList {
                    title: title.to_string(),
                    entries: suggestions.iter().map(ListEntry::from).collect(),
                    selected: state.suggestion_selection.index(),
                    focused: list_focused,
                    placeholder: "No suggestions. Keep typing to search GitHub.",
                }
            }
            View::Teams => EntryList {
                title: "Teams".to_string(),
                entries: state.filtered_teams.iter().map(ListEntry::from).collect(),
                selected: state.team_selection.index(),
                focused: list_focused,
                placeholder: if state.teams.is_empty() {
                    "No teams"
                } else {
                    "No matching teams"
                },
            },
            View::TeamMembers => EntryList {
                title: "Members".to_string(),
                entries: state.filtered_members.iter().map(ListEntry::from).collect(),
                selected: state.member_selection.index(),
                focused: list_focused,
                placeholder: "No members",
            },
        }
    }

    fn key_bar(state: &SessionState) -> Paragraph<'static> {
        let keys: &[(&str, &str)] = match state.view {
            View::Main => &[
                ("a", "add"),
                ("t", "teams"),
                ("d", "remove"),
                ("c", "clear"),
                ("i", "hook"),
                ("?", "help"),
                ("q", "quit"),
            ],
            View::Search | View::Teams => &[
                ("tab", "focus"),
                ("enter", "select"),
                ("↑↓", "move"),
                ("esc", "back"),
            ],
            View::TeamMembers => &[
                ("tab", "focus"),
                ("enter", "add"),
                ("↑↓", "move"),
                ("esc", "teams"),
            ],
            View::Help => &[("esc", "close")],
        };

        let spans: Vec<Span> = keys
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(
                        format!(" {key}"),
                        Style::default().fg(CORNFLOWER_BLUE).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" {action} "), Style::default().fg(MUTED_GRAY)),
                ]
            })
            .collect();
        Paragraph::new(Line::from(spans))
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{update, Message};
    use crate::error::PairError;
    use crate::components::render_text;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn draw(state: &SessionState) -> String {
        render_text(state, 80, 20)
    }

    fn loaded(active: Vec<Pair>) -> SessionState {
        let mut state = SessionState::default();
        update(
            &mut state,
            Message::PairsLoaded {
                active,
                recent: Vec::new(),
            },
        );
        state
    }

    #[test]
    fn test_main_view_lists_active_pairs() {
        let state = loaded(vec![Pair::new("octocat", "The Octocat", "o@example.com")]);
        let screen = draw(&state);
        assert!(screen.contains("@octocat"));
        assert!(screen.contains("The Octocat <o@example.com>"));
    }

    #[test]
    fn test_empty_main_view_shows_placeholder() {
        let screen = draw(&loaded(Vec::new()));
        assert!(screen.contains("No active pairs"));
    }

    #[test]
    fn test_missing_hook_is_flagged() {
        let mut state = loaded(Vec::new());
        update(&mut state, Message::HookStatus(false));
        assert!(draw(&state).contains("Commit hook not installed"));
    }

    #[test]
    fn test_error_is_shown() {
        let mut state = loaded(Vec::new());
        update(
            &mut state,
            Message::Error(PairError::Persistence("disk full".into())),
        );
        assert!(draw(&state).contains("disk full"));
    }

    #[test]
    fn test_search_view_shows_input_and_suggestions() {
        let mut state = loaded(Vec::new());
        update(
            &mut state,
            Message::CollaboratorsLoaded(vec![Pair::new("hubot", "Hubot", "h@example.com")]),
        );
        update(
            &mut state,
            Message::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)),
        );
        let screen = draw(&state);
        assert!(screen.contains("Search GitHub users"));
        assert!(screen.contains("Suggestions"));
        assert!(screen.contains("@hubot"));
    }

    #[test]
    fn test_help_overlay() {
        let mut state = loaded(Vec::new());
        update(
            &mut state,
            Message::Key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE)),
        );
        assert!(draw(&state).contains("Help - Press ? or Esc to close"));
    }
}
