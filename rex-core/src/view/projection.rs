//! src/view/projection.rs
//! ============================================================================
//! # ExplorerView: what the screen shows, derived from NavigationState
//!
//! [`ExplorerView::project`] is a pure function of the navigation state; the
//! ratatui components never look at `NavigationState` directly.

use crate::{
    model::{
        entry::DirectoryEntry,
        nav_state::{NavigationState, ViewMode},
        sort::{SortColumn, SortSpec},
    },
    util::path::{self, Crumb},
    view::icons,
};

/// Line above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderView {
    Breadcrumb(Vec<Crumb>),
    QueryLabel(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub icon: &'static str,
    pub name: String,
    /// `in <parent>`, search results only.
    pub location: Option<String>,
    pub size: String,
    pub kind: &'static str,
    pub last_modified: String,
    /// Directory rows navigate here when activated.
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub column: SortColumn,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerView {
    pub header: HeaderView,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<RowView>,
    pub clear_search_visible: bool,
    pub sort: SortSpec,
    pub query_input: String,
    pub current_path: String,
    pub loading: bool,
}

impl ExplorerView {
    pub fn project(state: &NavigationState, loading: bool) -> Self {
        let searching = state.mode.is_searching();

        let header = match &state.mode {
            ViewMode::Browsing => {
                HeaderView::Breadcrumb(path::breadcrumbs(&state.current_path, &state.root_path))
            }
            ViewMode::Searching { query } => {
                HeaderView::QueryLabel(format!("Search results for: \"{query}\""))
            }
        };

        Self {
            header,
            columns: column_headers(state.sort),
            rows: state.items.iter().map(|e| row(e, searching)).collect(),
            clear_search_visible: state.clear_search_visible(),
            sort: state.sort,
            query_input: state.query_input.clone(),
            current_path: state.current_path.clone(),
            loading,
        }
    }

    pub fn crumbs(&self) -> &[Crumb] {
        match &self.header {
            HeaderView::Breadcrumb(crumbs) => crumbs,
            HeaderView::QueryLabel(_) => &[],
        }
    }
}

fn column_headers(sort: SortSpec) -> Vec<ColumnHeader> {
    SortColumn::ALL
        .iter()
        .map(|&column| {
            let title = if column == sort.column {
                format!("{} {}", column.title(), sort.direction.indicator())
            } else {
                column.title().to_string()
            };
            ColumnHeader { column, title }
        })
        .collect()
}

fn row(entry: &DirectoryEntry, searching: bool) -> RowView {
    let is_dir = entry.is_dir();

    RowView {
        icon: if is_dir {
            icons::FOLDER_ICON
        } else {
            icons::FILE_ICON
        },
        name: entry.name.clone(),
        location: searching
            .then(|| path::containing_dir(&entry.path))
            .flatten()
            .map(|parent| format!("in {parent}")),
        size: entry.size.display(),
        kind: entry.kind.as_str(),
        last_modified: entry.last_modified.clone(),
        target: is_dir.then(|| entry.path.clone()),
    }
}
