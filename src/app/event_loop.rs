//! Main event loop for the application

use std::io::Stdout;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::prelude::*;

use super::render::{frame_layout, render_frame};
use crate::app::Config;
use crate::core::AppState;
use crate::handler::{handle_action, handle_key_event, KeyBindingRegistry};
use crate::integrate::exit_code;
use crate::render::visible_height;

/// Result of running the app
pub struct AppResult {
    pub exit_code: i32,
    /// File chosen in pick mode
    pub picked_path: Option<PathBuf>,
}

/// Build the initial state for an interactive session
pub fn initial_state(config: &Config) -> anyhow::Result<AppState> {
    let mut state = if config.choose_library {
        AppState::choose_library(config.root.clone(), config.libraries.clone(), config.show_hidden)
    } else {
        let mut state = AppState::open(config.root.clone(), config.show_hidden)?;
        state.library_name = config.library_name.clone();
        state.libraries = config.libraries.clone();
        state
    };
    state.pick_mode = config.pick_mode;
    state.confirm_delete = config.confirm_delete;
    Ok(state)
}

/// Apply one key press to the state.
///
/// Errors are logged and shown in the status bar; the session continues.
pub fn process_key(state: &mut AppState, registry: &KeyBindingRegistry, key: KeyEvent) {
    let action = handle_key_event(registry, state, key);
    tracing::trace!(?key, ?action, "key");

    state.clear_message();
    if let Err(e) = handle_action(action, state) {
        tracing::error!(error = %e, ?action, "action failed");
        state.set_message(format!("Error: {}", e));
    }
}

/// Main event loop
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: Config,
) -> anyhow::Result<AppResult> {
    let mut state = initial_state(&config)?;
    let registry = KeyBindingRegistry::from_file();
    tracing::info!(
        library = %config.library_name,
        root = %config.root.display(),
        pick = config.pick_mode,
        "session started"
    );

    loop {
        terminal.draw(|frame| {
            let (list_area, _, _) = frame_layout(frame.area(), state.details.is_some());
            state.adjust_viewport(visible_height(list_area));
            render_frame(frame, &state, &config.ui);
        })?;

        if state.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                // Windows reports releases too
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    process_key(&mut state, &registry, key);
                }
                // Next draw picks up the new size
                Event::Resize(..) => {}
                _ => {}
            }
        }
    }

    let code = if state.pick_mode && state.picked_path.is_none() {
        exit_code::CANCELLED
    } else {
        exit_code::SUCCESS
    };
    tracing::info!(exit_code = code, "session ended");

    Ok(AppResult {
        exit_code: code,
        picked_path: state.picked_path,
    })
}
