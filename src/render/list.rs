//! Entry list rendering

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::core::AppState;
use crate::entry::{format_size, Category, Entry};

/// Render the entries of the current folder
pub fn render_entries(frame: &mut Frame, state: &AppState, show_size: bool, area: Rect) {
    let height = visible_height(area);
    let selected = state.navigator.index_in(state.entries.len());
    let name_width = (area.width as usize).saturating_sub(if show_size { 16 } else { 6 });

    let items: Vec<ListItem> = state
        .entries
        .iter()
        .enumerate()
        .skip(state.viewport_top)
        .take(height)
        .map(|(i, entry)| render_entry(entry, selected == Some(i), show_size, name_width))
        .collect();

    let title = format!(" {} {} ", state.library_name, state.parent);
    let block = Block::default().borders(Borders::ALL).title(title);
    if items.is_empty() {
        let empty = List::new(vec![ListItem::new(Span::styled(
            "  (empty folder)",
            Style::default().fg(Color::DarkGray),
        ))]);
        frame.render_widget(empty.block(block), area);
        return;
    }

    frame.render_widget(List::new(items).block(block), area);
}

/// Render a single entry as a ListItem
fn render_entry(
    entry: &Entry,
    is_selected: bool,
    show_size: bool,
    name_width: usize,
) -> ListItem<'static> {
    let mut style = match entry.category {
        Category::Folder => Style::default().fg(Color::Blue),
        Category::Image => Style::default().fg(Color::Magenta),
        Category::Audio | Category::Video => Style::default().fg(Color::Cyan),
        Category::Archive => Style::default().fg(Color::Red),
        Category::Document | Category::Binary => Style::default(),
    };
    if is_selected {
        style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
    }

    let name = truncate_name(&entry.name, name_width);
    let mut spans = vec![
        Span::styled(
            if is_selected { ">" } else { " " },
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(
                "{} {:<width$}",
                category_icon(entry.category),
                name,
                width = name_width
            ),
            style,
        ),
    ];
    if show_size && !entry.is_folder() {
        spans.push(Span::styled(
            format!("{:>10}", format_size(entry.size)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    ListItem::new(Line::from(spans))
}

/// Shorten a name to `max` characters, marking the cut with `~`
fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max || max == 0 {
        return name.to_string();
    }
    let kept: String = name.chars().take(max.saturating_sub(1)).collect();
    format!("{}~", kept)
}

/// Icon for an entry category
pub fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Folder => "\u{f07b}",
        Category::Document => "\u{f15c}",
        Category::Image => "\u{f1c5}",
        Category::Audio => "\u{f1c7}",
        Category::Video => "\u{f1c8}",
        Category::Archive => "\u{f1c6}",
        Category::Binary => "\u{f016}",
    }
}

/// Calculate visible height for the list area
pub fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}
