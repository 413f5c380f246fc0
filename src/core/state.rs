//! Application state management

use std::path::PathBuf;

use super::{ListNavigator, ViewMode};
use crate::entry::{library_path, list_entries, Entry, Library};
use crate::error::Result;

/// Main application state
pub struct AppState {
    /// Library root folder
    pub root: PathBuf,
    /// Display name of the library, empty until one is opened
    pub library_name: String,
    /// Libraries offered by the picker
    pub libraries: Vec<Library>,
    /// Keyboard selection over `libraries`
    pub library_nav: ListNavigator,
    /// Library-relative folder currently listed (`/` for the root)
    pub parent: String,
    /// Entries of the current folder
    pub entries: Vec<Entry>,
    /// Keyboard selection over `entries`
    pub navigator: ListNavigator,
    /// Top of viewport (scroll position)
    pub viewport_top: usize,
    /// Current view mode
    pub mode: ViewMode,
    /// Entry shown in the details panel
    pub details: Option<Entry>,
    /// Status message
    pub message: Option<String>,
    /// Whether to show hidden files
    pub show_hidden: bool,
    /// Ask before deleting
    pub confirm_delete: bool,
    /// Pick mode (--pick option)
    pub pick_mode: bool,
    /// File chosen in pick mode
    pub picked_path: Option<PathBuf>,
    /// Exit flag
    pub should_quit: bool,
}

impl AppState {
    /// Open a library at `root` and list its top-level folder
    pub fn open(root: PathBuf, show_hidden: bool) -> Result<Self> {
        let entries = list_entries(&root, "/", show_hidden)?;
        let mut state = Self::blank(root, show_hidden);
        state.library_name = Library::from_folder(state.root.clone()).name;
        state.entries = entries;
        Ok(state)
    }

    /// Start on the library picker with nothing opened yet
    pub fn choose_library(root: PathBuf, libraries: Vec<Library>, show_hidden: bool) -> Self {
        let mut state = Self::blank(root, show_hidden);
        state.libraries = libraries;
        state.mode = ViewMode::Libraries;
        state
    }

    fn blank(root: PathBuf, show_hidden: bool) -> Self {
        Self {
            root,
            library_name: String::new(),
            libraries: Vec::new(),
            library_nav: ListNavigator::new(),
            parent: "/".to_string(),
            entries: Vec::new(),
            navigator: ListNavigator::new(),
            viewport_top: 0,
            mode: ViewMode::Browse,
            details: None,
            message: None,
            show_hidden,
            confirm_delete: true,
            pick_mode: false,
            picked_path: None,
            should_quit: false,
        }
    }

    /// Whether a library is open (the picker may start without one)
    pub fn has_library(&self) -> bool {
        !self.library_name.is_empty()
    }

    /// Switch to `library`, listing its root folder
    pub fn open_library(&mut self, library: &Library) -> Result<()> {
        let root = library.resolve_root()?;
        self.entries = list_entries(&root, "/", self.show_hidden)?;
        tracing::info!(library = %library.name, root = %root.display(), "opened library");
        self.root = root;
        self.library_name = library.name.clone();
        self.parent = "/".to_string();
        self.navigator.clear();
        self.viewport_top = 0;
        self.details = None;
        self.mode = ViewMode::Browse;
        Ok(())
    }

    /// Show the library picker with the open library selected
    pub fn show_libraries(&mut self) {
        match self.libraries.iter().position(|l| l.name == self.library_name) {
            Some(index) => self.library_nav.select(index, self.libraries.len()),
            None => self.library_nav.clear(),
        }
        self.mode = ViewMode::Libraries;
    }

    /// Entry under the keyboard selection
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.navigator.current_selection(&self.entries)
    }

    /// Absolute path of a library entry
    pub fn absolute_path(&self, entry: &Entry) -> PathBuf {
        let mut path = self.root.clone();
        path.extend(entry.library_path().split('/').filter(|p| !p.is_empty()));
        path
    }

    /// Re-read the current folder.
    ///
    /// The selected entry stays selected when it still exists; otherwise the
    /// old index is pulled back into range.
    pub fn reload(&mut self) -> Result<()> {
        let selected = self.selected_entry().map(|e| e.name.clone());
        self.entries = list_entries(&self.root, &self.parent, self.show_hidden)?;
        match selected.and_then(|name| self.entries.iter().position(|e| e.name == name)) {
            Some(index) => self.navigator.select(index, self.entries.len()),
            None => self.navigator.revalidate(self.entries.len()),
        }
        if let Some(ref details) = self.details {
            if !self.entries.iter().any(|e| e.name == details.name) {
                self.details = None;
            }
        }
        Ok(())
    }

    /// List another folder and reset selection and scroll
    pub fn change_folder(&mut self, parent: &str) -> Result<()> {
        let parent = library_path(parent)?;
        self.entries = list_entries(&self.root, &parent, self.show_hidden)?;
        tracing::info!(parent = %parent, count = self.entries.len(), "entered folder");
        self.parent = parent;
        self.navigator.clear();
        self.viewport_top = 0;
        self.details = None;
        Ok(())
    }

    /// Go one folder up and select the folder that was left.
    ///
    /// Returns `false` when already at the library root.
    pub fn go_to_parent(&mut self) -> Result<bool> {
        let Some((above, left)) = self.parent.rsplit_once('/') else {
            return Ok(false);
        };
        if left.is_empty() {
            return Ok(false);
        }

        let left = left.to_string();
        let above = if above.is_empty() { "/" } else { above }.to_string();
        self.change_folder(&above)?;
        if let Some(index) = self.entries.iter().position(|e| e.name == left) {
            self.navigator.select(index, self.entries.len());
        }
        Ok(true)
    }

    /// Adjust viewport to keep the selection visible
    pub fn adjust_viewport(&mut self, visible_height: usize) {
        let Some(index) = self.navigator.index_in(self.entries.len()) else {
            self.viewport_top = self
                .viewport_top
                .min(self.entries.len().saturating_sub(visible_height));
            return;
        };
        if index < self.viewport_top {
            self.viewport_top = index;
        } else if visible_height > 0 && index >= self.viewport_top + visible_height {
            self.viewport_top = index.saturating_sub(visible_height) + 1;
        }
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }
}
