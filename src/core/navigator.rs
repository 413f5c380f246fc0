//! Selectable list navigator
//!
//! Keeps one optional selected index over a list owned by the caller and
//! moves it in response to [`NavCommand`]s. Movement clamps at both ends.

/// Navigation intent derived from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Select the previous entry (or the last one when nothing is selected)
    MoveUp,
    /// Select the next entry (or the first one when nothing is selected)
    MoveDown,
    /// Select the first entry
    MoveFirst,
    /// Select the last entry
    MoveLast,
    /// Drop the selection
    Clear,
    /// Open the selected entry
    Activate,
}

/// Compute the next selection for `command` over a list of `len` entries.
///
/// `Activate` never changes the selection. A stale index (`>= len`) is
/// clamped back into range before moving.
pub fn transition(selection: Option<usize>, command: NavCommand, len: usize) -> Option<usize> {
    let last = len.checked_sub(1);
    let current = selection.and_then(|i| last.map(|l| i.min(l)));

    match command {
        NavCommand::MoveDown => match current {
            Some(i) => last.map(|l| (i + 1).min(l)),
            None => last.map(|_| 0),
        },
        NavCommand::MoveUp => match current {
            Some(i) => Some(i.saturating_sub(1)),
            None => last,
        },
        NavCommand::MoveFirst => last.map(|_| 0),
        NavCommand::MoveLast => last,
        NavCommand::Clear => None,
        NavCommand::Activate => selection,
    }
}

/// Selection state over an externally supplied list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListNavigator {
    selected: Option<usize>,
}

impl ListNavigator {
    /// Create a navigator with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw selected index, which may be stale for a list that has shrunk
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Selected index validated against a list of `len` entries
    pub fn index_in(&self, len: usize) -> Option<usize> {
        self.selected.filter(|&i| i < len)
    }

    /// Entry at the current selection, if any and still in range
    pub fn current_selection<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        self.selected.and_then(|i| items.get(i))
    }

    /// Process one command against `items`.
    ///
    /// On `Activate` with a valid selection, `on_activate` runs exactly once
    /// with the selected entry.
    pub fn handle<T, F>(&mut self, command: NavCommand, items: &[T], on_activate: F)
    where
        F: FnOnce(&T),
    {
        if command == NavCommand::Activate {
            if let Some(item) = self.current_selection(items) {
                on_activate(item);
            }
            return;
        }
        self.selected = transition(self.selected, command, items.len());
    }

    /// Select `index` directly, clamped to the list length
    pub fn select(&mut self, index: usize, len: usize) {
        self.selected = len.checked_sub(1).map(|last| index.min(last));
    }

    /// Pull a stale selection back into range after the list changed
    pub fn revalidate(&mut self, len: usize) {
        if let Some(i) = self.selected {
            if i >= len {
                self.select(i, len);
            }
        }
    }

    /// Drop the selection
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [&str; 3] = ["One", "Two", "README.md"];

    fn selected<'a>(nav: &ListNavigator, items: &'a [&'a str]) -> Option<&'a str> {
        nav.current_selection(items).copied()
    }

    fn press(nav: &mut ListNavigator, command: NavCommand) {
        nav.handle(command, &ITEMS, |_| panic!("unexpected activation"));
    }

    #[test]
    fn test_move_down_from_none() {
        for len in 0..5 {
            let expected = if len > 0 { Some(0) } else { None };
            assert_eq!(transition(None, NavCommand::MoveDown, len), expected);
        }
    }

    #[test]
    fn test_move_up_from_none() {
        for len in 0usize..5 {
            let expected = len.checked_sub(1);
            assert_eq!(transition(None, NavCommand::MoveUp, len), expected);
        }
    }

    #[test]
    fn test_boundaries_clamp() {
        assert_eq!(transition(Some(2), NavCommand::MoveDown, 3), Some(2));
        assert_eq!(transition(Some(0), NavCommand::MoveUp, 3), Some(0));
    }

    #[test]
    fn test_first_last_on_empty() {
        assert_eq!(transition(Some(1), NavCommand::MoveFirst, 0), None);
        assert_eq!(transition(None, NavCommand::MoveLast, 0), None);
        assert_eq!(transition(None, NavCommand::MoveLast, 4), Some(3));
    }

    #[test]
    fn test_clear_from_any_state() {
        for state in [None, Some(0), Some(7)] {
            assert_eq!(transition(state, NavCommand::Clear, 3), None);
        }
    }

    #[test]
    fn test_stale_index_is_clamped_before_moving() {
        assert_eq!(transition(Some(9), NavCommand::MoveUp, 3), Some(1));
        assert_eq!(transition(Some(9), NavCommand::MoveDown, 3), Some(2));
        assert_eq!(transition(Some(9), NavCommand::MoveDown, 0), None);
    }

    #[test]
    fn test_stale_index_not_exposed() {
        let mut nav = ListNavigator::new();
        nav.select(2, 3);
        assert_eq!(nav.current_selection(&ITEMS[..2]), None);
        assert_eq!(nav.index_in(2), None);

        nav.revalidate(2);
        assert_eq!(nav.selected_index(), Some(1));
        nav.revalidate(0);
        assert_eq!(nav.selected_index(), None);
    }

    #[test]
    fn test_activate_without_selection_is_noop() {
        let mut nav = ListNavigator::new();
        press(&mut nav, NavCommand::Activate);
        assert_eq!(nav.selected_index(), None);

        let empty: [&str; 0] = [];
        nav.handle(NavCommand::MoveDown, &empty, |_| {});
        nav.handle(NavCommand::Activate, &empty, |_| panic!("activated on empty list"));
        assert_eq!(nav.selected_index(), None);
    }

    #[test]
    fn test_activate_fires_once_and_keeps_selection() {
        let mut nav = ListNavigator::new();
        press(&mut nav, NavCommand::MoveLast);

        let mut calls = Vec::new();
        nav.handle(NavCommand::Activate, &ITEMS, |item| calls.push(*item));
        assert_eq!(calls, vec!["README.md"]);
        assert_eq!(nav.selected_index(), Some(2));
    }

    #[test]
    fn test_arrow_key_walkthrough() {
        let mut nav = ListNavigator::new();
        assert_eq!(selected(&nav, &ITEMS), None);

        press(&mut nav, NavCommand::MoveUp);
        assert_eq!(selected(&nav, &ITEMS), Some("README.md"));
        press(&mut nav, NavCommand::Clear);
        assert_eq!(selected(&nav, &ITEMS), None);

        press(&mut nav, NavCommand::MoveDown);
        assert_eq!(selected(&nav, &ITEMS), Some("One"));
        press(&mut nav, NavCommand::MoveDown);
        assert_eq!(selected(&nav, &ITEMS), Some("Two"));
        press(&mut nav, NavCommand::MoveDown);
        assert_eq!(selected(&nav, &ITEMS), Some("README.md"));
        press(&mut nav, NavCommand::MoveDown);
        assert_eq!(selected(&nav, &ITEMS), Some("README.md"));

        press(&mut nav, NavCommand::MoveUp);
        press(&mut nav, NavCommand::MoveUp);
        assert_eq!(selected(&nav, &ITEMS), Some("One"));
        press(&mut nav, NavCommand::MoveUp);
        assert_eq!(selected(&nav, &ITEMS), Some("One"));

        press(&mut nav, NavCommand::MoveLast);
        assert_eq!(selected(&nav, &ITEMS), Some("README.md"));
        press(&mut nav, NavCommand::MoveFirst);
        assert_eq!(selected(&nav, &ITEMS), Some("One"));

        let mut activated = Vec::new();
        press(&mut nav, NavCommand::MoveDown);
        nav.handle(NavCommand::Activate, &ITEMS, |item| activated.push(*item));
        assert_eq!(activated, vec!["Two"]);

        press(&mut nav, NavCommand::Clear);
        nav.handle(NavCommand::Activate, &ITEMS, |item| activated.push(*item));
        assert_eq!(activated.len(), 1);
    }
}
