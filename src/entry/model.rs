//! Library entry definition

use std::fs::Metadata;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Coarse classification of an entry, used for icons and colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Folder,
    Document,
    Image,
    Audio,
    Video,
    Archive,
    Binary,
}

impl Category {
    /// Classify a file by its extension (case-insensitive)
    pub fn from_file_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Category::Binary;
        };
        match ext.to_lowercase().as_str() {
            "txt" | "md" | "markdown" | "rst" | "pdf" | "doc" | "docx" | "odt" | "rtf" | "csv"
            | "xls" | "xlsx" | "ods" | "ppt" | "pptx" | "odp" | "epub" | "html" | "htm"
            | "json" | "toml" | "yaml" | "yml" | "xml" | "log" => Category::Document,
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "svg" | "webp" | "tif" | "tiff" | "heic"
            | "ico" => Category::Image,
            "mp3" | "wav" | "flac" | "ogg" | "m4a" | "aac" | "opus" => Category::Audio,
            "mp4" | "mkv" | "avi" | "mov" | "webm" | "m4v" | "wmv" => Category::Video,
            "zip" | "tar" | "gz" | "tgz" | "bz2" | "xz" | "7z" | "rar" | "zst" => {
                Category::Archive
            }
            _ => Category::Binary,
        }
    }

    /// Display label for the details panel
    pub fn label(self) -> &'static str {
        match self {
            Category::Folder => "Folder",
            Category::Document => "Document",
            Category::Image => "Image",
            Category::Audio => "Audio",
            Category::Video => "Video",
            Category::Archive => "Archive",
            Category::Binary => "Binary",
        }
    }
}

/// A single entry in a library folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// File or folder name
    pub name: String,
    /// Library-relative parent folder, always starting with `/`
    pub parent: String,
    pub category: Category,
    /// Last modification time, when the platform reports one
    pub modified: Option<DateTime<Local>>,
    /// Size in bytes as reported by the filesystem
    pub size: u64,
}

impl Entry {
    /// Build an entry from filesystem metadata
    pub fn from_metadata(name: String, parent: String, metadata: &Metadata) -> Self {
        let category = if metadata.is_dir() {
            Category::Folder
        } else {
            Category::from_file_name(&name)
        };

        Self {
            name,
            parent,
            category,
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
            size: metadata.len(),
        }
    }

    /// Read metadata for `path` (following symlinks) and build an entry
    pub fn from_path(path: &Path, parent: String) -> std::io::Result<Self> {
        let metadata = path.metadata()?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Ok(Self::from_metadata(name, parent, &metadata))
    }

    /// Whether this entry is a folder
    pub fn is_folder(&self) -> bool {
        self.category == Category::Folder
    }

    /// Library-relative path of the entry itself (`/Documents/a.pdf`)
    pub fn library_path(&self) -> String {
        if self.parent.ends_with('/') {
            format!("{}{}", self.parent, self.name)
        } else {
            format!("{}/{}", self.parent, self.name)
        }
    }
}

/// Format file size in human-readable format
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
