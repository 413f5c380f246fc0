//! Named libraries from the config file

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{EntrynavError, Result};

/// What a library holds; decides nothing but the label and icon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryKind {
    #[default]
    Generic,
    Books,
    Movies,
    Shows,
    Music,
}

impl LibraryKind {
    pub fn label(self) -> &'static str {
        match self {
            LibraryKind::Generic => "generic",
            LibraryKind::Books => "books",
            LibraryKind::Movies => "movies",
            LibraryKind::Shows => "shows",
            LibraryKind::Music => "music",
        }
    }
}

/// A `[[library]]` table in `config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    /// Root folder; a leading `~/` expands to the home directory
    pub root: PathBuf,
    #[serde(rename = "type", default)]
    pub kind: LibraryKind,
}

impl Library {
    /// Library rooted at an ad-hoc folder, named after it
    pub fn from_folder(root: PathBuf) -> Self {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        Self {
            name,
            root,
            kind: LibraryKind::Generic,
        }
    }

    /// Root folder with `~` expanded
    pub fn root_path(&self) -> PathBuf {
        expand_home(&self.root)
    }

    /// Root folder, checked to be an existing folder
    pub fn resolve_root(&self) -> Result<PathBuf> {
        let root = self.root_path();
        if !root.is_dir() {
            return Err(EntrynavError::path(
                &root,
                format!("root of library '{}' is not a folder", self.name),
            ));
        }
        Ok(root)
    }
}

/// Find a library by name (case-insensitive)
pub fn find_library<'a>(libraries: &'a [Library], name: &str) -> Option<&'a Library> {
    libraries.iter().find(|l| l.name.eq_ignore_ascii_case(name))
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_library_tables() {
        #[derive(Deserialize)]
        struct Wrapper {
            library: Vec<Library>,
        }
        let parsed: Wrapper = toml::from_str(
            r#"
[[library]]
name = "Documents"
root = "/srv/docs"

[[library]]
name = "Movies"
root = "/srv/movies"
type = "movies"
"#,
        )
        .unwrap();
        assert_eq!(parsed.library.len(), 2);
        assert_eq!(parsed.library[0].kind, LibraryKind::Generic);
        assert_eq!(parsed.library[1].kind, LibraryKind::Movies);
        assert_eq!(parsed.library[1].root, PathBuf::from("/srv/movies"));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = toml::from_str::<Library>("name = \"x\"\nroot = \"/\"\ntype = \"games\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_find_library_ignores_case() {
        let libraries = vec![
            Library::from_folder(PathBuf::from("/srv/Documents")),
            Library::from_folder(PathBuf::from("/srv/Movies")),
        ];
        assert_eq!(find_library(&libraries, "movies").unwrap().name, "Movies");
        assert!(find_library(&libraries, "music").is_none());
    }

    #[test]
    fn test_home_expansion() {
        let library = Library {
            name: "home".to_string(),
            root: PathBuf::from("~/media"),
            kind: LibraryKind::Generic,
        };
        if let Some(home) = dirs::home_dir() {
            assert_eq!(library.root_path(), home.join("media"));
        }
    }

    #[test]
    fn test_resolve_root_requires_folder() {
        let temp = TempDir::new().unwrap();
        let library = Library::from_folder(temp.path().to_path_buf());
        assert_eq!(library.resolve_root().unwrap(), temp.path());

        let missing = Library::from_folder(temp.path().join("gone"));
        assert!(matches!(
            missing.resolve_root(),
            Err(EntrynavError::Path { .. })
        ));
    }
}
