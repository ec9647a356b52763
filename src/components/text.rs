// ABOUTME: Plain-text projection of the session - draws the layout off-screen and returns the characters

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use super::LayoutComponent;
use crate::app::SessionState;

/// Render `state` into a `width` x `height` grid of text, rows joined by newlines.
///
/// Styling is dropped; everything the terminal view shows is present.
pub fn render_text(state: &SessionState, width: u16, height: u16) -> String {
    let layout = LayoutComponent::new();
    let Ok(mut terminal) = Terminal::new(TestBackend::new(width, height)) else {
        return String::new();
    };
    if terminal.draw(|frame| layout.render(frame, state)).is_err() {
        return String::new();
    }
    buffer_text(terminal.backend().buffer())
}

fn buffer_text(buffer: &Buffer) -> String {
    let width = usize::from(buffer.area.width).max(1);
    buffer
        .content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(ratatui::buffer::Cell::symbol).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
