//! Pick mode (--pick option)
//!
//! Allows external tools to use entrynav as a file picker.
//! The chosen path is written to stdout when the user activates a file.

use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Exit codes for the application
///
/// These codes are stable and can be relied upon for scripting:
/// - `SUCCESS` (0): Normal exit or file picked in pick mode
/// - `CANCELLED` (1): User quit without picking in pick mode
/// - `ERROR` (2): Runtime error (I/O error, terminal error, etc.)
/// - `INVALID` (3): Invalid command-line arguments or option values
pub mod exit_code {
    /// User picked a file successfully or normal exit
    pub const SUCCESS: i32 = 0;
    /// User cancelled selection (pick mode only)
    pub const CANCELLED: i32 = 1;
    /// Runtime error occurred
    pub const ERROR: i32 = 2;
    /// Invalid arguments or options (e.g., unknown flag, invalid format)
    pub const INVALID: i32 = 3;
}

/// Output format for printed paths and entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One record per line (default)
    #[default]
    Lines,
    /// Null-separated records (for xargs -0)
    NullSeparated,
    /// JSON array
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lines" | "line" => Ok(Self::Lines),
            "null" | "nul" | "0" => Ok(Self::NullSeparated),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Write plain string records in the given format
pub(crate) fn write_records<W: Write>(
    out: &mut W,
    records: &[String],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Lines => {
            for record in records {
                writeln!(out, "{}", record)?;
            }
        }
        OutputFormat::NullSeparated => {
            // Trailing null after every record for xargs compatibility
            for record in records {
                write!(out, "{}\0", record)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, records)?;
            writeln!(out)?;
        }
    }
    out.flush()
}

/// Write paths in the given format
pub fn write_paths<W: Write>(
    out: &mut W,
    paths: &[PathBuf],
    format: OutputFormat,
) -> io::Result<()> {
    let records: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    write_records(out, &records, format)
}

/// Pick mode result
#[derive(Debug, PartialEq, Eq)]
pub enum PickResult {
    /// User picked a file
    Picked(PathBuf),
    /// User quit without picking
    Cancelled,
}

impl PickResult {
    /// Get exit code for this result
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Picked(_) => exit_code::SUCCESS,
            Self::Cancelled => exit_code::CANCELLED,
        }
    }

    /// Output result to stdout if a file was picked
    pub fn output(&self, format: OutputFormat) -> io::Result<i32> {
        if let Self::Picked(path) = self {
            write_paths(&mut io::stdout().lock(), std::slice::from_ref(path), format)?;
        }
        Ok(self.exit_code())
    }
}
