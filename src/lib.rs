//! entrynav - A keyboard-driven library entry browser for terminal emulators
//!
//! The core is [`core::ListNavigator`], a clamped selection state machine
//! over a caller-owned list. Around it sit the library entry model, drop
//! collection, key mapping and a ratatui front end.

pub mod app;
pub mod core;
pub mod entry;
pub mod error;
pub mod handler;
pub mod integrate;
pub mod logging;
pub mod render;

pub use error::{EntrynavError, Result};
