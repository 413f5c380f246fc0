//! entrynav - browse a library folder from the terminal

use std::io::stdout;
use std::process::ExitCode;

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use entrynav::app::{run_app, Config, RunMode};
use entrynav::integrate::{
    exit_code, output_collected, output_download, output_listing, output_lookup, PickResult,
};
use entrynav::logging;

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    // The guard must outlive everything that logs
    let _log_guard = init_logging(&config);

    let result = if config.mode == RunMode::Interactive {
        run_interactive(config)
    } else {
        run_output(&config)
    };

    match result {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            tracing::error!(error = %e, "exiting with error");
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

/// Log to a file for interactive sessions, or wherever `--log-file` says
fn init_logging(config: &Config) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let path = match (&config.log_file, &config.mode) {
        (Some(path), _) => path.clone(),
        (None, RunMode::Interactive) => logging::default_log_path()?,
        (None, _) => return None,
    };
    match logging::init(&path) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    }
}

/// Run one of the non-interactive output modes
fn run_output(config: &Config) -> anyhow::Result<i32> {
    match &config.mode {
        RunMode::Interactive => unreachable!("interactive mode has no output step"),
        RunMode::List { parent } => {
            output_listing(&config.root, parent, config.show_hidden, config.output_format)?
        }
        RunMode::Lookup { path } => output_lookup(&config.root, path, config.output_format)?,
        RunMode::Download { path } => output_download(&config.root, path)?,
        RunMode::Collect { items, files_only } => {
            output_collected(items, *files_only, config.output_format)?
        }
    }
    Ok(exit_code::SUCCESS)
}

fn run_interactive(config: Config) -> anyhow::Result<i32> {
    let pick_mode = config.pick_mode;
    let output_format = config.output_format;

    // Initialize terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, config);

    // Restore terminal
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;

    let app_result = result?;
    if !pick_mode {
        return Ok(app_result.exit_code);
    }

    let pick = match app_result.picked_path {
        Some(path) => PickResult::Picked(path),
        None => PickResult::Cancelled,
    };
    Ok(pick.output(output_format)?)
}
