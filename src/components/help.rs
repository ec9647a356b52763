// ABOUTME: Help overlay component displaying keyboard shortcuts for every view

use ratatui::{
    prelude::*,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
};

pub struct HelpComponent;

impl HelpComponent {
    pub const fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);

        let heading = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let help_items = vec![
            ListItem::new("Active pairs:").style(heading),
            ListItem::new("  j/↓ k/↑    Move selection"),
            ListItem::new("  a or /     Search GitHub users"),
            ListItem::new("  t          Pick from your teams"),
            ListItem::new("  d/Del      Remove selected pair"),
            ListItem::new("  c          Clear all pairs"),
            ListItem::new("  i          Install commit hook"),
            ListItem::new(""),
            ListItem::new("Search and teams:").style(heading),
            ListItem::new("  Tab        Switch between input and list"),
            ListItem::new("  Enter      Look up handle / add selection"),
            ListItem::new("  ↓ ↑        Move selection"),
            ListItem::new("  q          Back (when the list is focused)"),
            ListItem::new("  Esc        Back"),
            ListItem::new(""),
            ListItem::new("General:").style(heading),
            ListItem::new("  ?          Toggle this help"),
            ListItem::new("  q/Esc      Quit"),
            ListItem::new("  Ctrl+C     Back / quit"),
        ];

        let help_list = List::new(help_items).block(
            Block::default()
                .title("Help - Press ? or Esc to close")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

        frame.render_widget(help_list, popup_area);
    }

    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }
}

impl Default for HelpComponent {
    fn default() -> Self {
        Self::new()
    }
}
