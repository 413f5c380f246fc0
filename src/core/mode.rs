//! View mode definitions

use crate::entry::Entry;

/// Current view/input mode with embedded state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewMode {
    /// Normal browsing mode
    #[default]
    Browse,
    /// Delete confirmation for a single entry
    Confirm { target: Entry },
    /// Key binding overview
    Help,
    /// Choosing one of the configured libraries
    Libraries,
}
