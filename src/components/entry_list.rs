// ABOUTME: Selectable list of pairs or teams, with an empty-state placeholder

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use crate::models::ListEntry;

const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

/// What one list shows
pub struct EntryList<'a> {
    pub title: String,
    pub entries: Vec<ListEntry<'a>>,
    pub selected: usize,
    pub focused: bool,
    pub placeholder: &'a str,
}

pub struct EntryListComponent;

impl EntryListComponent {
    pub const fn new() -> Self {
        Self
    }

    /// Draw the entries in a bordered block; the selection is highlighted only when focused
    pub fn render(&self, frame: &mut Frame, area: Rect, list: &EntryList<'_>) {
        let EntryList {
            title,
            entries,
            selected,
            focused,
            placeholder,
        } = list;
        let border_color = if *focused { CORNFLOWER_BLUE } else { SUBDUED_BORDER };
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        if entries.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                (*placeholder).to_string(),
                Style::default().fg(MUTED_GRAY),
            )))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        entry.label(),
                        Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(entry.detail(), Style::default().fg(MUTED_GRAY)),
                ]))
            })
            .collect();

        let widget = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        if *focused {
            list_state.select(Some((*selected).min(entries.len() - 1)));
        }
        frame.render_stateful_widget(widget, area, &mut list_state);
    }
}

impl Default for EntryListComponent {
    fn default() -> Self {
        Self::new()
    }
}
