//! Folder listing, lookup and removal inside a library root
//!
//! All paths taken by these functions are library-relative. `""`, `"/"`,
//! `"sub"` and `"/sub"` are accepted; `..` components are rejected.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use super::Entry;
use crate::error::{EntrynavError, Result};

/// Normalize a library-relative path to `/a/b` form (`/` for the root)
pub fn library_path(relative: &str) -> Result<String> {
    let parts = clean_components(relative)?;
    Ok(format!("/{}", parts.join("/")))
}

/// Resolve a library-relative path to an absolute path under `root`
pub fn resolve_in_library(root: &Path, relative: &str) -> Result<PathBuf> {
    let parts = clean_components(relative)?;
    let mut resolved = root.to_path_buf();
    resolved.extend(parts);
    Ok(resolved)
}

fn clean_components(relative: &str) -> Result<Vec<String>> {
    let mut parts = Vec::new();
    for component in Path::new(relative).components() {
        match component {
            Component::RootDir | Component::CurDir => {}
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir | Component::Prefix(_) => {
                return Err(EntrynavError::path(relative, "outside library root"));
            }
        }
    }
    Ok(parts)
}

/// List the entries of `parent`, folders first, then by name
pub fn list_entries(root: &Path, parent: &str, show_hidden: bool) -> Result<Vec<Entry>> {
    let dir = resolve_in_library(root, parent)?;
    let parent = library_path(parent)?;

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(&dir)? {
        let dir_entry = dir_entry?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if !show_hidden && name.starts_with('.') {
            continue;
        }

        // Broken symlinks still show up, described by the link itself
        let metadata = match fs::metadata(dir_entry.path()) {
            Ok(m) => m,
            Err(_) => dir_entry.metadata()?,
        };
        entries.push(Entry::from_metadata(name, parent.clone(), &metadata));
    }

    entries.sort_by(compare_entries);
    Ok(entries)
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    }
}

/// Look up a single entry by path.
///
/// Returns an empty list for the library root itself or for a path that
/// does not exist.
pub fn lookup_entry(root: &Path, path: &str) -> Result<Vec<Entry>> {
    let parts = clean_components(path)?;
    let Some((_, parent_parts)) = parts.split_last() else {
        return Ok(Vec::new());
    };

    let absolute = resolve_in_library(root, path)?;
    let parent = format!("/{}", parent_parts.join("/"));
    match Entry::from_path(&absolute, parent) {
        Ok(entry) => Ok(vec![entry]),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e.into()),
    }
}

/// Open a file for download.
///
/// The library root, folders and missing paths are all errors.
pub fn open_entry(root: &Path, path: &str) -> Result<fs::File> {
    if clean_components(path)?.is_empty() {
        return Err(EntrynavError::path(path, "no entry path given"));
    }

    let absolute = resolve_in_library(root, path)?;
    let metadata = match fs::metadata(&absolute) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(EntrynavError::path(path, "no such entry"));
        }
        Err(e) => return Err(e.into()),
    };
    if metadata.is_dir() {
        return Err(EntrynavError::path(path, "is a folder"));
    }
    tracing::debug!(path, size = metadata.len(), "opening entry");
    Ok(fs::File::open(&absolute)?)
}

/// Delete a file or a folder (recursively).
///
/// A path that does not exist is not an error. The library root itself can
/// never be removed.
pub fn remove_entry(root: &Path, path: &str) -> Result<()> {
    if clean_components(path)?.is_empty() {
        return Err(EntrynavError::path(path, "refusing to delete library root"));
    }

    let absolute = resolve_in_library(root, path)?;
    let metadata = match fs::symlink_metadata(&absolute) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path, "nothing to delete");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(&absolute)?;
    } else {
        fs::remove_file(&absolute)?;
    }
    tracing::info!(path, "deleted entry");
    Ok(())
}
