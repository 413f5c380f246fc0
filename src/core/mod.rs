//! Core module - Selection navigator, application state and view modes

pub mod mode;
pub mod navigator;
pub mod state;

pub use mode::ViewMode;
pub use navigator::{transition, ListNavigator, NavCommand};
pub use state::AppState;
