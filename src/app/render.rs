//! Rendering helpers for the event loop

use ratatui::prelude::*;

use super::config_file::UiConfig;
use crate::core::{AppState, ViewMode};
use crate::render::{
    render_confirm_popup, render_details, render_entries, render_help_popup, render_libraries,
    render_status_bar,
};

/// Split the screen into list, optional details panel, and status bar.
///
/// Returns `(list_area, details_area, status_area)`.
pub fn frame_layout(size: Rect, details_visible: bool) -> (Rect, Option<Rect>, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(size);

    if !details_visible {
        return (rows[0], None, rows[1]);
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[0]);
    (columns[0], Some(columns[1]), rows[1])
}

/// Render a complete frame
pub fn render_frame(frame: &mut Frame, state: &AppState, ui: &UiConfig) {
    let (list_area, details_area, status_area) =
        frame_layout(frame.area(), state.details.is_some());

    if state.mode == ViewMode::Libraries {
        render_libraries(frame, state, list_area);
    } else {
        render_entries(frame, state, ui.show_size, list_area);
    }
    if let (Some(area), Some(entry)) = (details_area, state.details.as_ref()) {
        render_details(frame, entry, &ui.date_format, area);
    }
    render_status_bar(frame, state, status_area);

    render_confirm_popup(frame, state);
    render_help_popup(frame, state);
}
