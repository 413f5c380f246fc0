//! Handler module - Input event handling

pub mod action;
pub mod key;
pub mod keymap;

pub use action::handle_action;
pub use key::{handle_key_event, KeyAction};
pub use keymap::{KeyBindingRegistry, KeymapFile};
