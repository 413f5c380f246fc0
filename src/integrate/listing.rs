//! Listing output for CLI integration
//!
//! `--list`, `--lookup` and `--collect` print to stdout. JSON output uses the
//! same camelCase shape the library types serialize to.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::pick::{write_records, OutputFormat};
use crate::entry::{collect_all_entries, files_only, list_entries, lookup_entry, open_entry};
use crate::entry::{CollectedEntry, Entry};
use crate::error::Result;

/// Write library entries; lines and null formats print library paths
pub fn write_entries<W: Write>(
    out: &mut W,
    entries: &[Entry],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer(&mut *out, entries)?;
        writeln!(out)?;
        return out.flush();
    }
    let records: Vec<String> = entries.iter().map(Entry::library_path).collect();
    write_records(out, &records, format)
}

/// Write collected drop entries; lines and null formats print full paths
pub fn write_collected<W: Write>(
    out: &mut W,
    entries: &[CollectedEntry],
    format: OutputFormat,
) -> io::Result<()> {
    if format == OutputFormat::Json {
        serde_json::to_writer(&mut *out, entries)?;
        writeln!(out)?;
        return out.flush();
    }
    let records: Vec<String> = entries.iter().map(|e| e.full_path.clone()).collect();
    write_records(out, &records, format)
}

/// Print the entries of a library folder
pub fn output_listing(
    root: &Path,
    parent: &str,
    show_hidden: bool,
    format: OutputFormat,
) -> Result<()> {
    let entries = list_entries(root, parent, show_hidden)?;
    write_entries(&mut io::stdout().lock(), &entries, format)?;
    Ok(())
}

/// Print the entry at `path`, or nothing when it does not exist
pub fn output_lookup(root: &Path, path: &str, format: OutputFormat) -> Result<()> {
    let entries = lookup_entry(root, path)?;
    write_entries(&mut io::stdout().lock(), &entries, format)?;
    Ok(())
}

/// Copy the bytes of the library file at `path` into `out`
pub fn write_download<W: Write>(out: &mut W, root: &Path, path: &str) -> Result<u64> {
    let mut file = open_entry(root, path)?;
    let written = io::copy(&mut file, out)?;
    out.flush()?;
    tracing::debug!(path, bytes = written, "downloaded entry");
    Ok(written)
}

/// Write the library file at `path` to stdout
pub fn output_download(root: &Path, path: &str) -> Result<()> {
    write_download(&mut io::stdout().lock(), root, path)?;
    Ok(())
}

/// Print everything a drop of `items` would upload
pub fn output_collected(items: &[PathBuf], only_files: bool, format: OutputFormat) -> Result<()> {
    let mut entries = collect_all_entries(items)?;
    if only_files {
        entries = files_only(entries);
    }
    write_collected(&mut io::stdout().lock(), &entries, format)?;
    Ok(())
}
