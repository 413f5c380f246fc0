//! Integration tests for entrynav
//!
//! These tests drive the application state through key events and verify
//! selection, folder navigation and deletion against a real directory.

use std::fs;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use entrynav::app::process_key;
use entrynav::core::{transition, AppState, ListNavigator, NavCommand, ViewMode};
use entrynav::entry::{collect_all_entries, list_entries, Category, Library};
use entrynav::handler::{handle_key_event, KeyAction, KeyBindingRegistry};
use tempfile::TempDir;

/// Helper to create a KeyEvent
fn key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(state: &mut AppState, registry: &KeyBindingRegistry, code: KeyCode) {
    process_key(state, registry, key_event(code));
}

/// Library with two folders and two files at the root
fn library() -> (TempDir, AppState) {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("Documents")).unwrap();
    fs::create_dir(temp.path().join("Music")).unwrap();
    fs::write(temp.path().join("Documents/Settings.pdf"), "pdf").unwrap();
    fs::write(temp.path().join("Documents/notes.txt"), "notes").unwrap();
    fs::write(temp.path().join("Label.xcf"), vec![0u8; 2048]).unwrap();
    fs::write(temp.path().join("cover.png"), "png").unwrap();
    let state = AppState::open(temp.path().to_path_buf(), false).unwrap();
    (temp, state)
}

// =============================================================================
// Navigator
// =============================================================================

mod navigator_tests {
    use super::*;

    #[test]
    fn test_walkthrough_over_three_items() {
        let items = ["a", "b", "c"];
        let mut nav = ListNavigator::new();
        let mut activated = Vec::new();

        nav.handle(NavCommand::MoveDown, &items, |_| unreachable!());
        assert_eq!(nav.current_selection(&items), Some(&"a"));
        nav.handle(NavCommand::MoveDown, &items, |_| unreachable!());
        nav.handle(NavCommand::MoveDown, &items, |_| unreachable!());
        nav.handle(NavCommand::MoveDown, &items, |_| unreachable!());
        assert_eq!(nav.current_selection(&items), Some(&"c"));

        nav.handle(NavCommand::Activate, &items, |item| activated.push(*item));
        assert_eq!(activated, vec!["c"]);
        assert_eq!(nav.selected_index(), Some(2));

        nav.handle(NavCommand::Clear, &items, |_| unreachable!());
        nav.handle(NavCommand::MoveUp, &items, |_| unreachable!());
        assert_eq!(nav.current_selection(&items), Some(&"c"));
    }

    #[test]
    fn test_moves_never_wrap() {
        assert_eq!(transition(Some(0), NavCommand::MoveUp, 5), Some(0));
        assert_eq!(transition(Some(4), NavCommand::MoveDown, 5), Some(4));
        assert_eq!(transition(None, NavCommand::MoveFirst, 0), None);
    }

    #[test]
    fn test_shrunk_list_clamps_stale_selection() {
        let mut nav = ListNavigator::new();
        nav.select(9, 10);
        let items = ["x", "y", "z"];
        assert_eq!(nav.current_selection(&items), None);
        nav.handle(NavCommand::MoveUp, &items, |_| unreachable!());
        assert_eq!(nav.selected_index(), Some(1));
    }
}

// =============================================================================
// Key Mapping
// =============================================================================

mod key_tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_moves() {
        let (_temp, state) = library();
        let registry = KeyBindingRegistry::new();
        assert_eq!(
            handle_key_event(&registry, &state, key_event(KeyCode::Down)),
            KeyAction::Navigate(NavCommand::MoveDown)
        );
        assert_eq!(
            handle_key_event(&registry, &state, key_event(KeyCode::Up)),
            KeyAction::Navigate(NavCommand::MoveUp)
        );
        assert_eq!(
            handle_key_event(&registry, &state, key_event(KeyCode::Esc)),
            KeyAction::Navigate(NavCommand::Clear)
        );
        assert_eq!(
            handle_key_event(&registry, &state, key_event(KeyCode::Enter)),
            KeyAction::Navigate(NavCommand::Activate)
        );
    }

    #[test]
    fn test_unbound_key_does_nothing() {
        let (_temp, mut state) = library();
        let registry = KeyBindingRegistry::new();
        press(&mut state, &registry, KeyCode::Char('z'));
        assert!(state.selected_entry().is_none());
        assert_eq!(state.mode, ViewMode::Browse);
    }
}

// =============================================================================
// Browsing
// =============================================================================

mod browse_tests {
    use super::*;

    #[test]
    fn test_folders_listed_first() {
        let (_temp, state) = library();
        let names: Vec<&str> = state.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Documents", "Music", "cover.png", "Label.xcf"]);
        assert_eq!(state.entries[3].category, Category::Binary);
    }

    #[test]
    fn test_select_and_enter_folder() {
        let (_temp, mut state) = library();
        let registry = KeyBindingRegistry::new();

        press(&mut state, &registry, KeyCode::Down);
        assert_eq!(state.selected_entry().unwrap().name, "Documents");

        press(&mut state, &registry, KeyCode::Enter);
        assert_eq!(state.parent, "/Documents");
        assert!(state.selected_entry().is_none());

        press(&mut state, &registry, KeyCode::Up);
        assert_eq!(state.selected_entry().unwrap().name, "Settings.pdf");

        press(&mut state, &registry, KeyCode::Left);
        assert_eq!(state.parent, "/");
        assert_eq!(state.selected_entry().unwrap().name, "Documents");
    }

    #[test]
    fn test_activate_file_opens_details() {
        let (_temp, mut state) = library();
        let registry = KeyBindingRegistry::new();

        press(&mut state, &registry, KeyCode::End);
        press(&mut state, &registry, KeyCode::Enter);
        assert_eq!(state.details.as_ref().unwrap().name, "Label.xcf");
        assert_eq!(state.parent, "/");

        // Details follow the selection, and Esc closes them
        press(&mut state, &registry, KeyCode::Up);
        assert_eq!(state.details.as_ref().unwrap().name, "cover.png");
        press(&mut state, &registry, KeyCode::Esc);
        assert!(state.details.is_none());
        assert!(state.selected_entry().is_none());
    }

    #[test]
    fn test_pick_mode_quits_with_path() {
        let (temp, mut state) = library();
        state.pick_mode = true;
        let registry = KeyBindingRegistry::new();

        press(&mut state, &registry, KeyCode::End);
        press(&mut state, &registry, KeyCode::Enter);
        assert!(state.should_quit);
        assert_eq!(state.picked_path, Some(temp.path().join("Label.xcf")));
    }

    #[test]
    fn test_refresh_keeps_selection_in_range() {
        let (temp, mut state) = library();
        let registry = KeyBindingRegistry::new();

        press(&mut state, &registry, KeyCode::End);
        fs::remove_file(temp.path().join("Label.xcf")).unwrap();
        fs::remove_file(temp.path().join("cover.png")).unwrap();
        press(&mut state, &registry, KeyCode::Char('r'));

        assert_eq!(state.entries.len(), 2);
        assert_eq!(state.selected_entry().unwrap().name, "Music");
        assert_eq!(state.message.as_deref(), Some("Refreshed"));
    }

    #[test]
    fn test_toggle_hidden_files() {
        let (temp, mut state) = library();
        fs::write(temp.path().join(".secret"), "x").unwrap();
        let registry = KeyBindingRegistry::new();

        press(&mut state, &registry, KeyCode::Char('r'));
        assert!(!state.entries.iter().any(|e| e.name == ".secret"));
        press(&mut state, &registry, KeyCode::Char('.'));
        assert!(state.entries.iter().any(|e| e.name == ".secret"));
    }

    #[test]
    fn test_viewport_follows_selection() {
        let temp = TempDir::new().unwrap();
        for i in 0..30 {
            fs::write(temp.path().join(format!("file{:02}.txt", i)), "").unwrap();
        }
        let mut state = AppState::open(temp.path().to_path_buf(), false).unwrap();
        let registry = KeyBindingRegistry::new();

        press(&mut state, &registry, KeyCode::End);
        state.adjust_viewport(10);
        assert_eq!(state.viewport_top, 20);

        press(&mut state, &registry, KeyCode::Home);
        state.adjust_viewport(10);
        assert_eq!(state.viewport_top, 0);
    }
}

// =============================================================================
// Deletion
// =============================================================================

mod delete_tests {
    use super::*;

    #[test]
    fn test_delete_requires_confirmation() {
        let (temp, mut state) = library();
        let registry = KeyBindingRegistry::new();

        press(&mut state, &registry, KeyCode::End);
        press(&mut state, &registry, KeyCode::Char('D'));
        assert!(matches!(state.mode, ViewMode::Confirm { .. }));

        press(&mut state, &registry, KeyCode::Char('n'));
        assert_eq!(state.mode, ViewMode::Browse);
        assert!(temp.path().join("Label.xcf").exists());

        press(&mut state, &registry, KeyCode::Char('D'));
        press(&mut state, &registry, KeyCode::Char('y'));
        assert_eq!(state.mode, ViewMode::Browse);
        assert!(!temp.path().join("Label.xcf").exists());
        assert_eq!(state.entries.len(), 3);
        assert_eq!(state.selected_entry().unwrap().name, "cover.png");
    }

    #[test]
    fn test_delete_folder_removes_contents() {
        let (temp, mut state) = library();
        state.confirm_delete = false;
        let registry = KeyBindingRegistry::new();

        press(&mut state, &registry, KeyCode::Down);
        press(&mut state, &registry, KeyCode::Char('D'));
        assert!(!temp.path().join("Documents").exists());
        assert_eq!(state.message.as_deref(), Some("Deleted Documents"));
    }

    #[test]
    fn test_delete_without_selection_is_noop() {
        let (_temp, mut state) = library();
        let registry = KeyBindingRegistry::new();

        press(&mut state, &registry, KeyCode::Char('D'));
        assert_eq!(state.mode, ViewMode::Browse);
        assert_eq!(state.entries.len(), 4);
    }
}

// =============================================================================
// Library Operations
// =============================================================================

mod library_tests {
    use super::*;

    #[test]
    fn test_list_subfolder() {
        let (temp, _state) = library();
        let entries = list_entries(temp.path(), "/Documents", false).unwrap();
        let paths: Vec<String> = entries.iter().map(|e| e.library_path()).collect();
        assert_eq!(paths, vec!["/Documents/notes.txt", "/Documents/Settings.pdf"]);
    }

    #[test]
    fn test_list_rejects_escape() {
        let (temp, _state) = library();
        assert!(list_entries(temp.path(), "/../..", false).is_err());
    }

    #[test]
    fn test_collect_library_folder() {
        let (temp, _state) = library();
        let entries = collect_all_entries(&[temp.path().join("Documents")]).unwrap();
        let paths: Vec<&str> = entries.iter().map(|e| e.full_path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["/Documents", "/Documents/Settings.pdf", "/Documents/notes.txt"]
        );
    }
}

// =============================================================================
// Library Picker
// =============================================================================

mod picker_tests {
    use super::*;

    #[test]
    fn test_pick_library_then_switch_back() {
        let (temp, _state) = library();
        let libraries = vec![
            Library::from_folder(temp.path().join("Documents")),
            Library::from_folder(temp.path().join("Music")),
        ];
        let mut state =
            AppState::choose_library(temp.path().to_path_buf(), libraries, false);
        let registry = KeyBindingRegistry::new();
        assert_eq!(state.mode, ViewMode::Libraries);

        // Esc stays on the picker while nothing is open
        press(&mut state, &registry, KeyCode::Esc);
        assert_eq!(state.mode, ViewMode::Libraries);

        press(&mut state, &registry, KeyCode::Down);
        press(&mut state, &registry, KeyCode::Enter);
        assert_eq!(state.mode, ViewMode::Browse);
        assert_eq!(state.library_name, "Documents");
        let names: Vec<&str> = state.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["notes.txt", "Settings.pdf"]);

        press(&mut state, &registry, KeyCode::Char('L'));
        assert_eq!(state.mode, ViewMode::Libraries);
        assert_eq!(state.library_nav.selected_index(), Some(0));
        press(&mut state, &registry, KeyCode::Esc);
        assert_eq!(state.mode, ViewMode::Browse);
        assert_eq!(state.library_name, "Documents");
    }
}
