//! Status bar rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::core::{AppState, ViewMode};

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame, state: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let mut left = Vec::new();
    if state.pick_mode {
        left.push(Span::styled(" PICK |", Style::default().fg(Color::Yellow)));
    }
    if state.show_hidden {
        left.push(Span::styled(" hidden |", Style::default().fg(Color::DarkGray)));
    }
    left.push(Span::raw(format!(
        " {}",
        state.message.as_deref().unwrap_or("? for help")
    )));
    let msg_widget = Paragraph::new(Line::from(left)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(msg_widget, chunks[0]);

    let stats_widget = Paragraph::new(selection_summary(state))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(stats_widget, chunks[1]);
}

/// Position summary, e.g. `2/3 entries` or `3 entries`
fn selection_summary(state: &AppState) -> String {
    let (navigator, total, noun) = if state.mode == ViewMode::Libraries {
        (&state.library_nav, state.libraries.len(), "libraries")
    } else {
        (&state.navigator, state.entries.len(), "entries")
    };
    match navigator.index_in(total) {
        Some(i) => format!("{}/{} {}", i + 1, total, noun),
        None => format!("{} {}", total, noun),
    }
}
