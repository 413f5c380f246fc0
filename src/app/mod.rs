//! Application module
//!
//! This module contains configuration, rendering glue and the event loop
//! for the interactive browser.

mod config;
mod config_file;
mod event_loop;
mod render;

pub use config::{Config, RunMode};
pub use config_file::{ConfigFile, GeneralConfig, UiConfig};
pub use event_loop::{initial_state, process_key, run_app, AppResult};
pub use render::{frame_layout, render_frame};
