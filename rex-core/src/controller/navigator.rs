//! src/controller/navigator.rs
//! ============================================================================
//! # Navigator: navigation and search state machine
//!
//! Owns the one [`NavigationState`]. Its methods are the only mutation
//! points. Operations that need the backend return a [`Request`] instead of
//! awaiting it, so every transition is synchronous and the event loop
//! decides when responses come back through [`Navigator::apply`].
//!
//! States are Browsing and Searching. A failed fetch never advances the
//! machine: it is logged and the last good state stays on screen.

use tracing::{debug, info, warn};

use crate::{
    controller::request::{Payload, Request, RequestKind, RequestTracker, Response},
    model::{
        entry::DirectoryEntry,
        nav_state::{NavigationState, ViewMode},
        sort::SortColumn,
    },
    util::path,
};

#[derive(Debug)]
pub struct Navigator {
    state: NavigationState,
    tracker: RequestTracker,
    fallback_root: String,
    /// Bumped every time a listing replaces `items`.
    generation: u64,
}

impl Navigator {
    pub fn new(fallback_root: impl Into<String>) -> Self {
        Self {
            state: NavigationState::default(),
            tracker: RequestTracker::default(),
            fallback_root: fallback_root.into(),
            generation: 0,
        }
    }

    pub const fn state(&self) -> &NavigationState {
        &self.state
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_loading(&self) -> bool {
        self.tracker.listing_in_flight() || self.tracker.config_in_flight()
    }

    /// First step after start-up: ask the backend for its root.
    pub fn load_config(&mut self) -> Request {
        info!("Fetching configuration from backend");
        self.tracker.issue(RequestKind::Config)
    }

    pub fn navigate_to(&mut self, path: &str) -> Option<Request> {
        if path.is_empty() {
            warn!("Cannot navigate: path is empty");
            return None;
        }

        debug!(
            marker = "NAVIGATE",
            operation_type = "browse",
            "Navigating to {}",
            path
        );
        Some(self.tracker.issue(RequestKind::Browse {
            path: path.to_string(),
        }))
    }

    /// Searches below `current_path`. An empty query clears the search.
    pub fn search(&mut self, query: &str) -> Option<Request> {
        if query.is_empty() {
            return self.clear_search();
        }
        if self.state.current_path.is_empty() {
            warn!("Cannot search for {:?}: no current path yet", query);
            return None;
        }

        debug!(
            marker = "SEARCH",
            operation_type = "search",
            "Searching for {:?} in {}",
            query,
            self.state.current_path
        );
        Some(self.tracker.issue(RequestKind::Search {
            query: query.to_string(),
            scope: self.state.current_path.clone(),
        }))
    }

    /// Enter in the search input.
    pub fn submit_search(&mut self) -> Option<Request> {
        let query = self.state.query_input.clone();
        self.search(&query)
    }

    pub fn clear_search(&mut self) -> Option<Request> {
        self.state.query_input.clear();
        self.state.mode = ViewMode::Browsing;

        let current = self.state.current_path.clone();
        self.navigate_to(&current)
    }

    pub fn go_back(&mut self) -> Option<Request> {
        if self.state.mode.is_searching() {
            return self.clear_search();
        }
        if self.state.at_root() {
            debug!("Already at root {}", self.state.root_path);
            return None;
        }

        let parent = path::parent_path(&self.state.current_path, &self.state.root_path).to_string();
        self.navigate_to(&parent)
    }

    /// Fresh fetch of the same directory.
    pub fn rescan(&mut self) -> Option<Request> {
        if self.state.mode.is_searching() {
            return self.clear_search();
        }

        let current = self.state.current_path.clone();
        self.navigate_to(&current)
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        self.state.sort.select(column);
        self.state.sort.apply(&mut self.state.items);
        debug!(
            "Sorted {} items by {} {:?}",
            self.state.items.len(),
            column,
            self.state.sort.direction
        );
    }

    /// A click on a table row. Only directories react.
    pub fn activate_entry(&mut self, index: usize) -> Option<Request> {
        let entry = self.state.items.get(index)?;
        if !entry.is_dir() {
            debug!("Ignoring activation of file {}", entry.path);
            return None;
        }

        let target = entry.path.clone();
        self.state.query_input.clear();
        self.navigate_to(&target)
    }

    /// Number of breadcrumb segments on screen; zero while searching.
    pub fn crumb_count(&self) -> usize {
        if self.state.mode.is_searching() || !self.state.is_configured() {
            return 0;
        }
        path::breadcrumbs(&self.state.current_path, &self.state.root_path).len()
    }

    /// A click on breadcrumb `index` (0 is Root). Inert while searching,
    /// since the breadcrumb is not shown then.
    pub fn activate_crumb(&mut self, index: usize) -> Option<Request> {
        if self.state.mode.is_searching() {
            return None;
        }

        let crumb = path::breadcrumbs(&self.state.current_path, &self.state.root_path)
            .into_iter()
            .nth(index)?;
        self.navigate_to(&crumb.target)
    }

    pub fn push_query_char(&mut self, c: char) {
        self.state.query_input.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.state.query_input.pop();
    }

    /// Folds a backend response into the state. Stale responses are
    /// dropped. A config response yields the first browse request.
    pub fn apply(&mut self, response: Response) -> Option<Request> {
        let Response { request, outcome } = response;

        if !self.tracker.accept(&request) {
            debug!(
                marker = "STALE_RESPONSE",
                operation_type = "request_tracking",
                "Dropping stale response {} for {:?}",
                request.ticket,
                request.kind
            );
            return None;
        }

        match (request.kind, outcome) {
            (RequestKind::Config, Ok(Payload::Config(remote))) => {
                info!("Root path set to: {}", remote.root_path);
                self.configure(remote.root_path)
            }
            (RequestKind::Config, Err(e)) => {
                warn!("Error fetching configuration: {}", e);
                info!("Using default root path: {}", self.fallback_root);
                self.configure(self.fallback_root.clone())
            }
            (RequestKind::Browse { path }, Ok(Payload::Listing(items))) => {
                debug!("Browse {} accepted with {} items", path, items.len());
                self.state.current_path = path;
                self.state.mode = ViewMode::Browsing;
                self.install(items);
                None
            }
            (RequestKind::Search { query, scope }, Ok(Payload::Listing(items))) => {
                debug!(
                    "Search {:?} in {} accepted with {} hits",
                    query,
                    scope,
                    items.len()
                );
                self.state.mode = ViewMode::Searching { query };
                self.install(items);
                None
            }
            (kind, Err(e)) => {
                warn!(
                    marker = "FETCH_FAILED",
                    operation_type = "listing",
                    "Request {:?} failed, keeping previous state: {}",
                    kind,
                    e
                );
                None
            }
            (kind, Ok(payload)) => {
                warn!("Payload {:?} does not match request {:?}", payload, kind);
                None
            }
        }
    }

    fn configure(&mut self, root: String) -> Option<Request> {
        let root = if root.is_empty() {
            warn!("Backend sent an empty root path, using {}", self.fallback_root);
            self.fallback_root.clone()
        } else {
            root
        };

        self.state.root_path = root.clone();
        self.state.current_path = root;
        let current = self.state.current_path.clone();
        self.navigate_to(&current)
    }

    fn install(&mut self, items: Vec<DirectoryEntry>) {
        self.state.replace_items(items);
        self.generation += 1;
    }
}
