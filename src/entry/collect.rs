//! Drop collection - expand dropped files and folders into a flat list
//!
//! Every dropped item is emitted first, followed (for folders) by its direct
//! children and then each child folder's own expansion, in name order.
//! Symlinks are classified by their target but never followed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;

/// One entry found while expanding a drop
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectedEntry {
    /// File or folder name
    pub name: String,
    /// Path rooted at the dropped item, e.g. `/photos/2021/a.jpg`
    pub full_path: String,
    /// True for folders and for links pointing at folders
    pub is_dir: bool,
    /// The entry is a symlink; linked folders are reported but not expanded
    #[serde(skip)]
    pub is_symlink: bool,
    /// Where the entry lives on disk
    #[serde(skip)]
    pub source: PathBuf,
}

impl CollectedEntry {
    fn new(name: String, full_path: String, source: PathBuf) -> io::Result<Self> {
        let link = fs::symlink_metadata(&source)?;
        let is_symlink = link.file_type().is_symlink();
        let is_dir = if is_symlink {
            // Dangling links fall back to the link itself
            fs::metadata(&source).map(|m| m.is_dir()).unwrap_or(false)
        } else {
            link.is_dir()
        };
        Ok(Self {
            name,
            full_path,
            is_dir,
            is_symlink,
            source,
        })
    }

    /// Real folders are expanded; linked ones are not, so cycles cannot occur
    fn expands(&self) -> bool {
        self.is_dir && !self.is_symlink
    }
}

/// Expand dropped paths into the flat list of everything they contain.
///
/// Items that do not exist are skipped. Unreadable folders are an error.
pub fn collect_all_entries<P: AsRef<Path>>(items: &[P]) -> Result<Vec<CollectedEntry>> {
    let mut result = Vec::new();

    for item in items {
        let source = item.as_ref();
        let name = item_name(source);
        let full_path = format!("/{}", name);
        let entry = match CollectedEntry::new(name, full_path, source.to_path_buf()) {
            Ok(entry) => entry,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %source.display(), "skipping missing drop item");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        let expands = entry.expands();
        let full_path = entry.full_path.clone();
        result.push(entry);
        if expands {
            read_all_recursive(source, &full_path, &mut result)?;
        }
    }

    tracing::debug!(count = result.len(), "collected drop entries");
    Ok(result)
}

/// Keep only the files of a collected drop
pub fn files_only(entries: Vec<CollectedEntry>) -> Vec<CollectedEntry> {
    entries.into_iter().filter(|e| !e.is_dir).collect()
}

fn read_all_recursive(dir: &Path, full_path: &str, out: &mut Vec<CollectedEntry>) -> Result<()> {
    let start = out.len();
    out.extend(read_all_entries(dir, full_path)?);

    let subdirs: Vec<(PathBuf, String)> = out[start..]
        .iter()
        .filter(|e| e.expands())
        .map(|e| (e.source.clone(), e.full_path.clone()))
        .collect();

    for (source, path) in subdirs {
        read_all_recursive(&source, &path, out)?;
    }
    Ok(())
}

fn read_all_entries(dir: &Path, full_path: &str) -> Result<Vec<CollectedEntry>> {
    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        let full_path = format!("{}/{}", full_path, name);
        entries.push(CollectedEntry::new(name, full_path, dir_entry.path())?);
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn item_name(path: &Path) -> String {
    if let Some(name) = path.file_name() {
        return name.to_string_lossy().into_owned();
    }
    // "." and ".." have no file name of their own
    path.canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| path.display().to_string())
}
