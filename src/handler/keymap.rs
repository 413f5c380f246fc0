//! Keymap configuration and registry
//!
//! Loads key bindings from `~/.config/entrynav/keymap.toml`

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::key::KeyAction;
use crate::app::ConfigFile;
use crate::core::NavCommand;
use crate::error::Result;

/// Keymap configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KeymapFile {
    /// Key bindings for browse mode
    pub browse: HashMap<String, String>,
    /// Key bindings for the delete confirmation
    pub confirm: HashMap<String, String>,
}

impl KeymapFile {
    /// Get the keymap file path (~/.config/entrynav/keymap.toml)
    pub fn keymap_path() -> Option<PathBuf> {
        ConfigFile::config_dir().map(|p| p.join("keymap.toml"))
    }

    /// Load keymap from file, falling back to no overrides
    pub fn load() -> Self {
        match Self::keymap_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    /// Load keymap from `path`, ignoring a missing or invalid file
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(keymap) => keymap,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring keymap file");
                Self::default()
            }
        }
    }

    /// Load keymap from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Key binding registry for dynamic key dispatch
pub struct KeyBindingRegistry {
    /// Browse mode bindings: key_str -> action_name
    browse: HashMap<String, String>,
    /// Confirm mode bindings
    confirm: HashMap<String, String>,
}

impl Default for KeyBindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindingRegistry {
    /// Create a new registry with default bindings
    pub fn new() -> Self {
        let mut registry = Self {
            browse: HashMap::new(),
            confirm: HashMap::new(),
        };
        registry.load_defaults();
        registry
    }

    /// Load registry from keymap file, merging with defaults
    pub fn from_file() -> Self {
        let mut registry = Self::new();
        registry.merge(KeymapFile::load());
        registry
    }

    /// Override defaults with user bindings
    pub fn merge(&mut self, keymap: KeymapFile) {
        self.browse.extend(keymap.browse);
        self.confirm.extend(keymap.confirm);
    }

    /// Load default key bindings
    fn load_defaults(&mut self) {
        let browse = &mut self.browse;
        for (key, action) in [
            ("up", "move_up"),
            ("k", "move_up"),
            ("down", "move_down"),
            ("j", "move_down"),
            ("home", "move_first"),
            ("g", "move_first"),
            ("end", "move_last"),
            ("G", "move_last"),
            ("esc", "clear"),
            ("enter", "activate"),
            ("right", "activate"),
            ("l", "activate"),
            ("backspace", "parent"),
            ("left", "parent"),
            ("h", "parent"),
            ("i", "toggle_details"),
            (".", "toggle_hidden"),
            ("r", "refresh"),
            ("f5", "refresh"),
            ("D", "confirm_delete"),
            ("delete", "confirm_delete"),
            ("q", "quit"),
            ("ctrl+c", "quit"),
            ("?", "show_help"),
            ("L", "libraries"),
        ] {
            browse.insert(key.to_string(), action.to_string());
        }

        let confirm = &mut self.confirm;
        for (key, action) in [
            ("y", "execute"),
            ("Y", "execute"),
            ("enter", "execute"),
            ("n", "cancel"),
            ("N", "cancel"),
            ("esc", "cancel"),
        ] {
            confirm.insert(key.to_string(), action.to_string());
        }
    }

    /// Look up action for a key event in browse mode
    pub fn lookup_browse(&self, key: &KeyEvent) -> Option<KeyAction> {
        let key_str = key_event_to_string(key);
        self.browse
            .get(&key_str)
            .and_then(|action| parse_browse_action(action))
    }

    /// Look up action for a key event in confirm mode
    pub fn lookup_confirm(&self, key: &KeyEvent) -> Option<KeyAction> {
        let key_str = key_event_to_string(key);
        self.confirm
            .get(&key_str)
            .and_then(|action| match action.as_str() {
                "execute" => Some(KeyAction::ExecuteDelete),
                "cancel" => Some(KeyAction::Cancel),
                _ => None,
            })
    }
}

/// Convert a KeyEvent to a string representation
fn key_event_to_string(key: &KeyEvent) -> String {
    let mut parts = Vec::new();

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("ctrl");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        parts.push("alt");
    }
    if key.modifiers.contains(KeyModifiers::SHIFT) {
        // Characters already carry their case
        if !matches!(key.code, KeyCode::Char(_)) || !parts.is_empty() {
            parts.push("shift");
        }
    }

    let key_name = match key.code {
        KeyCode::Char(' ') => "space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("f{}", n),
        KeyCode::Backspace => "backspace".to_string(),
        KeyCode::Enter => "enter".to_string(),
        KeyCode::Left => "left".to_string(),
        KeyCode::Right => "right".to_string(),
        KeyCode::Up => "up".to_string(),
        KeyCode::Down => "down".to_string(),
        KeyCode::Home => "home".to_string(),
        KeyCode::End => "end".to_string(),
        KeyCode::PageUp => "pageup".to_string(),
        KeyCode::PageDown => "pagedown".to_string(),
        KeyCode::Tab => "tab".to_string(),
        KeyCode::Delete => "delete".to_string(),
        KeyCode::Insert => "insert".to_string(),
        KeyCode::Esc => "esc".to_string(),
        _ => return String::new(),
    };

    if parts.is_empty() {
        key_name
    } else {
        parts.push(&key_name);
        parts.join("+")
    }
}

/// Parse browse mode action string to KeyAction
fn parse_browse_action(action: &str) -> Option<KeyAction> {
    match action {
        "move_up" => Some(KeyAction::Navigate(NavCommand::MoveUp)),
        "move_down" => Some(KeyAction::Navigate(NavCommand::MoveDown)),
        "move_first" | "move_to_top" => Some(KeyAction::Navigate(NavCommand::MoveFirst)),
        "move_last" | "move_to_bottom" => Some(KeyAction::Navigate(NavCommand::MoveLast)),
        "clear" => Some(KeyAction::Navigate(NavCommand::Clear)),
        "activate" | "open" => Some(KeyAction::Navigate(NavCommand::Activate)),
        "parent" => Some(KeyAction::GoToParent),
        "toggle_details" => Some(KeyAction::ToggleDetails),
        "toggle_hidden" => Some(KeyAction::ToggleHidden),
        "refresh" => Some(KeyAction::Refresh),
        "confirm_delete" => Some(KeyAction::ConfirmDelete),
        "quit" => Some(KeyAction::Quit),
        "show_help" => Some(KeyAction::ShowHelp),
        "libraries" => Some(KeyAction::ShowLibraries),
        _ => None,
    }
}
