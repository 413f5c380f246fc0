//! Library picker

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::core::AppState;
use crate::entry::{Library, LibraryKind};

/// Render the configured libraries in place of the entry list
pub fn render_libraries(frame: &mut Frame, state: &AppState, area: Rect) {
    let selected = state.library_nav.index_in(state.libraries.len());
    let items: Vec<ListItem> = state
        .libraries
        .iter()
        .enumerate()
        .map(|(i, library)| library_item(library, selected == Some(i)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Libraries (Enter to open) ");
    frame.render_widget(List::new(items).block(block), area);
}

fn library_item(library: &Library, is_selected: bool) -> ListItem<'static> {
    let mut style = Style::default().fg(Color::Blue);
    if is_selected {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }
    ListItem::new(Line::from(vec![
        Span::styled(
            if is_selected { ">" } else { " " },
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(format!("{} {}", kind_icon(library.kind), library.name), style),
        Span::styled(
            format!("  {} ({})", library.root.display(), library.kind.label()),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

fn kind_icon(kind: LibraryKind) -> &'static str {
    match kind {
        LibraryKind::Generic => "\u{f07c}",
        LibraryKind::Books => "\u{f02d}",
        LibraryKind::Movies => "\u{f008}",
        LibraryKind::Shows => "\u{f26c}",
        LibraryKind::Music => "\u{f001}",
    }
}
