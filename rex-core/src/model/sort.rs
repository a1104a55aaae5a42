//! src/model/sort.rs
//! ============================================================================
//! # Column sort for the entry table
//!
//! Sorting is a stable in-place reorder on a single field. There is no
//! secondary key, so ties keep whatever order the rows already had.

use std::cmp::Ordering;
use std::fmt;

use crate::model::entry::DirectoryEntry;

/// Sortable table column, tagged by the key the backend uses for the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Size,
    Type,
    LastModified,
}

impl SortColumn {
    pub const ALL: [Self; 4] = [Self::Name, Self::Size, Self::Type, Self::LastModified];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Size => "size",
            Self::Type => "type",
            Self::LastModified => "last_modified",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Size => "Size",
            Self::Type => "Type",
            Self::LastModified => "Last Modified",
        }
    }

    fn compare(self, a: &DirectoryEntry, b: &DirectoryEntry) -> Ordering {
        match self {
            Self::Name => a.name.cmp(&b.name),
            Self::Size => a.size.loose_cmp(&b.size),
            Self::Type => a.kind.as_str().cmp(b.kind.as_str()),
            Self::LastModified => a.last_modified.cmp(&b.last_modified),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub const fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            column: SortColumn::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Header click semantics: same column flips, new column starts ascending.
    pub fn select(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.toggled();
        } else {
            self.column = column;
            self.direction = SortDirection::Asc;
        }
    }

    pub fn apply(&self, entries: &mut [DirectoryEntry]) {
        let column = self.column;
        match self.direction {
            SortDirection::Asc => entries.sort_by(|a, b| column.compare(a, b)),
            SortDirection::Desc => entries.sort_by(|a, b| column.compare(b, a)),
        }
    }
}
