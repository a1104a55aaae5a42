pub mod error;

pub mod config;

pub mod api {
    pub mod client;
    pub use client::{ExplorerApi, HttpExplorerApi, RemoteConfig};
}

pub mod controller {

    pub mod actions;
    pub use actions::Action;

    pub mod keymap;

    pub mod request;
    pub use request::{Request, RequestKind, Response};

    pub mod navigator;
    pub use navigator::Navigator;

    pub mod event_loop;
    pub use event_loop::{DispatchResult, EventLoop};
}

pub mod model {
    pub mod entry;
    pub use entry::{DirectoryEntry, EntryKind, EntrySize};

    pub mod nav_state;
    pub use nav_state::{NavigationState, ViewMode};

    pub mod sort;
    pub use sort::{SortColumn, SortDirection, SortSpec};

    pub mod ui_state;
    pub use ui_state::{UIMode, UIState};
}

pub mod view {
    pub mod icons;

    pub mod theme;

    pub mod projection;
    pub use projection::ExplorerView;

    pub mod ui;

    pub mod components {
        pub mod breadcrumb_bar;
        pub use breadcrumb_bar::BreadcrumbBar;
        pub mod object_table;
        pub use object_table::EntryTable;
        pub mod search_bar;
        pub use search_bar::SearchBar;
        pub mod status_bar;
        pub use status_bar::StatusBar;
    }
}

pub mod util {
    pub mod path;
}

pub mod logging;
pub use logging::Logger;

pub use error::AppError;

pub use model::{nav_state::NavigationState, ui_state::UIState};
