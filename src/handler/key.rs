//! Keyboard event handling

use crossterm::event::KeyEvent;

use super::KeyBindingRegistry;
use crate::core::{AppState, NavCommand, ViewMode};

/// Actions that can result from key handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Move or activate the list selection
    Navigate(NavCommand),
    /// Leave the current folder
    GoToParent,
    /// Show or hide the details panel
    ToggleDetails,
    /// Toggle hidden files
    ToggleHidden,
    /// Re-read the current folder
    Refresh,
    /// Ask before deleting the selected entry
    ConfirmDelete,
    /// Execute confirmed delete
    ExecuteDelete,
    /// Cancel current popup
    Cancel,
    /// Show help popup
    ShowHelp,
    /// Open the library picker
    ShowLibraries,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(
    registry: &KeyBindingRegistry,
    state: &AppState,
    key: KeyEvent,
) -> KeyAction {
    let action = match &state.mode {
        ViewMode::Browse => registry.lookup_browse(&key),
        ViewMode::Confirm { .. } => registry.lookup_confirm(&key),
        // Any key closes the help popup
        ViewMode::Help => Some(KeyAction::Cancel),
        ViewMode::Libraries => registry.lookup_browse(&key).and_then(library_picker_action),
    };
    action.unwrap_or(KeyAction::None)
}

/// Browse bindings that make sense on the library picker
fn library_picker_action(action: KeyAction) -> Option<KeyAction> {
    match action {
        KeyAction::Navigate(NavCommand::Clear) => Some(KeyAction::Cancel),
        KeyAction::Navigate(_) | KeyAction::Quit | KeyAction::ShowHelp => Some(action),
        _ => None,
    }
}
