//! Integrate module - Non-interactive output for scripts and other tools
//!
//! - Pick mode: print the chosen file on exit (--pick)
//! - Listing: print folder entries (--list, --lookup)
//! - Download: write a library file to stdout (--download)
//! - Collect: print what a drop of paths would upload (--collect)

pub mod listing;
pub mod pick;

pub use listing::{
    output_collected, output_download, output_listing, output_lookup, write_collected,
    write_download, write_entries,
};
pub use pick::{exit_code, write_paths, OutputFormat, PickResult};
