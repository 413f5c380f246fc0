//! Action handlers - apply a [`KeyAction`] to the application state

use crate::core::{AppState, NavCommand, ViewMode};
use crate::entry::{remove_entry, Entry, Library};
use crate::handler::key::KeyAction;

/// Apply an action to the state.
///
/// Listing failures after navigation are reported in the status bar rather
/// than aborting the event loop.
pub fn handle_action(action: KeyAction, state: &mut AppState) -> anyhow::Result<()> {
    match action {
        KeyAction::None => {}
        KeyAction::Quit => state.should_quit = true,
        KeyAction::Navigate(command) => navigate(command, state),
        KeyAction::GoToParent => {
            if let Err(e) = state.go_to_parent() {
                tracing::warn!(error = %e, "failed to leave folder");
                state.set_message(format!("Failed to open parent: {}", e));
            }
        }
        KeyAction::ToggleDetails => {
            state.details = match state.details {
                Some(_) => None,
                None => state.selected_entry().cloned(),
            };
        }
        KeyAction::ToggleHidden => {
            state.show_hidden = !state.show_hidden;
            state.reload()?;
            state.set_message(if state.show_hidden {
                "Showing hidden files"
            } else {
                "Hiding hidden files"
            });
        }
        KeyAction::Refresh => {
            state.reload()?;
            state.set_message("Refreshed");
        }
        KeyAction::ConfirmDelete => {
            if let Some(target) = state.selected_entry().cloned() {
                if state.confirm_delete {
                    state.mode = ViewMode::Confirm { target };
                } else {
                    delete(state, &target)?;
                }
            }
        }
        KeyAction::ExecuteDelete => {
            if let ViewMode::Confirm { target } = std::mem::take(&mut state.mode) {
                delete(state, &target)?;
            }
        }
        KeyAction::Cancel => {
            // Without an open library there is nothing behind the picker
            state.mode = if state.has_library() {
                ViewMode::Browse
            } else {
                ViewMode::Libraries
            };
        }
        KeyAction::ShowHelp => state.mode = ViewMode::Help,
        KeyAction::ShowLibraries => {
            if state.libraries.is_empty() {
                state.set_message("No libraries configured");
            } else {
                state.show_libraries();
            }
        }
    }
    Ok(())
}

/// Feed a navigation command to the selection navigator
fn navigate(command: NavCommand, state: &mut AppState) {
    if state.mode == ViewMode::Libraries {
        navigate_libraries(command, state);
        return;
    }

    let mut activated = None;
    state
        .navigator
        .handle(command, &state.entries, |entry| activated = Some(entry.clone()));

    if command == NavCommand::Clear {
        state.details = None;
    } else if state.details.is_some() {
        // Details follow the selection while the panel is open
        state.details = state.selected_entry().cloned();
    }

    if let Some(entry) = activated {
        activate(entry, state);
    }
}

/// Move over the library picker; activating opens the library
fn navigate_libraries(command: NavCommand, state: &mut AppState) {
    let mut chosen: Option<Library> = None;
    state
        .library_nav
        .handle(command, &state.libraries, |library| chosen = Some(library.clone()));

    if let Some(library) = chosen {
        if let Err(e) = state.open_library(&library) {
            tracing::warn!(library = %library.name, error = %e, "failed to open library");
            state.set_message(format!("Failed to open {}: {}", library.name, e));
        }
    }
}

/// Open a folder, pick a file, or show its details
fn activate(entry: Entry, state: &mut AppState) {
    if entry.is_folder() {
        if let Err(e) = state.change_folder(&entry.library_path()) {
            tracing::warn!(folder = %entry.library_path(), error = %e, "failed to open folder");
            state.set_message(format!("Failed to open {}: {}", entry.name, e));
        }
    } else if state.pick_mode {
        state.picked_path = Some(state.absolute_path(&entry));
        state.should_quit = true;
    } else {
        state.details = Some(entry);
    }
}

fn delete(state: &mut AppState, target: &Entry) -> anyhow::Result<()> {
    match remove_entry(&state.root, &target.library_path()) {
        Ok(()) => state.set_message(format!("Deleted {}", target.name)),
        Err(e) => {
            tracing::error!(path = %target.library_path(), error = %e, "delete failed");
            state.set_message(format!("Failed to delete {}: {}", target.name, e));
        }
    }
    state.reload()?;
    Ok(())
}
