//! Details panel for a single entry

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::entry::{format_size, Entry};

/// Render the details of `entry`
pub fn render_details(frame: &mut Frame, entry: &Entry, date_format: &str, area: Rect) {
    let para = Paragraph::new(detail_lines(entry, date_format))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Details (i to close) "),
        );
    frame.render_widget(para, area);
}

fn detail_lines(entry: &Entry, date_format: &str) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let size = if entry.is_folder() {
        "--".to_string()
    } else {
        format_size(entry.size)
    };
    let modified = entry
        .modified
        .map(|m| m.format(date_format).to_string())
        .unwrap_or_else(|| "--".to_string());

    vec![
        Line::from(Span::styled(
            entry.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![Span::styled("Type      ", label), Span::raw(entry.category.label())]),
        Line::from(vec![Span::styled("Size      ", label), Span::raw(size)]),
        Line::from(vec![Span::styled("Modified  ", label), Span::raw(modified)]),
        Line::from(vec![Span::styled("Location  ", label), Span::raw(entry.parent.clone())]),
    ]
}
