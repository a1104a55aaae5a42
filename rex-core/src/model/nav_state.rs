//! src/model/nav_state.rs
//! ============================================================================
//! # NavigationState: the single source of truth behind the table
//!
//! Only [`Navigator`](crate::controller::navigator::Navigator) mutates this.
//! `items` always comes from exactly one accepted listing, either the
//! browse result for `current_path` or the last search result, and is kept
//! in `sort` order.

use crate::model::{entry::DirectoryEntry, sort::SortSpec};

/// Which listing `items` holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Browsing,
    Searching {
        query: String,
    },
}

impl ViewMode {
    pub const fn is_searching(&self) -> bool {
        matches!(self, Self::Searching { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationState {
    /// Top of the tree; empty until config has loaded.
    pub root_path: String,

    /// Directory the last accepted browse listing came from.
    pub current_path: String,

    pub mode: ViewMode,

    pub items: Vec<DirectoryEntry>,

    pub sort: SortSpec,

    /// Contents of the search input line.
    pub query_input: String,
}

impl NavigationState {
    pub fn is_configured(&self) -> bool {
        !self.root_path.is_empty() && !self.current_path.is_empty()
    }

    /// The clear-search control is shown only while search results are up.
    pub const fn clear_search_visible(&self) -> bool {
        self.mode.is_searching()
    }

    pub fn at_root(&self) -> bool {
        self.current_path == self.root_path
    }

    /// Installs a new listing and re-applies the active sort.
    pub(crate) fn replace_items(&mut self, items: Vec<DirectoryEntry>) {
        self.items = items;
        self.sort.apply(&mut self.items);
    }
}
