//! File logging
//!
//! The terminal UI owns stdout and stderr, so logs go to
//! `<cache>/entrynav/entrynav.log` (or `--log-file`). The filter comes from
//! `ENTRYNAV_LOG` and defaults to `warn`.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::error::{EntrynavError, Result};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "ENTRYNAV_LOG";

/// Default log file location
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("entrynav").join("entrynav.log"))
}

/// Install the global subscriber writing to `path`.
///
/// The returned guard flushes pending lines when dropped; keep it alive for
/// the lifetime of the program.
pub fn init(path: &Path) -> Result<WorkerGuard> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| EntrynavError::path(path, "log path has no file name"))?;
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| EntrynavError::internal(format!("failed to install logger: {}", e)))?;

    Ok(guard)
}
