//! Render module - UI rendering

pub mod details;
pub mod libraries;
pub mod list;
pub mod popup;
pub mod status;

pub use details::render_details;
pub use libraries::render_libraries;
pub use list::{category_icon, render_entries, visible_height};
pub use popup::{render_confirm_popup, render_help_popup};
pub use status::render_status_bar;
