//! Help and confirmation popups

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::core::{AppState, ViewMode};
use crate::entry::Entry;

/// Render help popup overlay
pub fn render_help_popup(frame: &mut Frame, state: &AppState) {
    if !matches!(state.mode, ViewMode::Help) {
        return;
    }

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().add_modifier(Modifier::BOLD),
        ))
    };
    let help_lines = vec![
        heading("Selection"),
        Line::from("  k/\u{2191}      Previous (last when none)"),
        Line::from("  j/\u{2193}      Next (first when none)"),
        Line::from("  g/Home   First"),
        Line::from("  G/End    Last"),
        Line::from("  Esc      Clear selection"),
        Line::from(""),
        heading("Folders"),
        Line::from("  Enter    Open folder / show details"),
        Line::from("  h/\u{2190}      Parent folder"),
        Line::from("  i        Toggle details"),
        Line::from("  .        Toggle hidden files"),
        Line::from("  r        Refresh"),
        Line::from("  D        Delete"),
        Line::from("  L        Switch library"),
        Line::from(""),
        Line::from("  q        Quit"),
    ];

    let height = (help_lines.len() + 2) as u16;
    let area = centered_rect(50, height, frame.area());
    let para = Paragraph::new(help_lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Help (any key to close) "),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(para, area);
}

/// Render the delete confirmation when one is pending
pub fn render_confirm_popup(frame: &mut Frame, state: &AppState) {
    let ViewMode::Confirm { target } = &state.mode else {
        return;
    };

    let content = confirm_lines(target);
    let height = (content.len() + 2) as u16;
    let area = centered_rect(60, height, frame.area());
    let popup = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Confirm delete ")
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn confirm_lines(target: &Entry) -> Vec<Line<'static>> {
    let mut content = Vec::new();
    if target.is_folder() {
        content.push(Line::from(Span::styled(
            "!! Folder and all its contents will be deleted !!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        content.push(Line::from(""));
    }
    content.push(Line::from(format!("Delete {}?", target.library_path())));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "y: delete   n/Esc: cancel",
        Style::default().fg(Color::DarkGray),
    )));
    content
}

/// Center a popup of `percent_x` width and fixed `height` inside `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
