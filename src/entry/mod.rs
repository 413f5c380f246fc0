//! Entry module - Libraries, their entries, listings and drop collection

pub mod collect;
pub mod library;
pub mod listing;
pub mod model;

pub use collect::{collect_all_entries, files_only, CollectedEntry};
pub use listing::{
    library_path, list_entries, lookup_entry, open_entry, remove_entry, resolve_in_library,
};
pub use library::{find_library, Library, LibraryKind};
pub use model::{format_size, Category, Entry};
