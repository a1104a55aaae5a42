//! src/controller/event_loop.rs
//! ============================================================================
//! # EventLoop: action dispatch and fetch plumbing
//!
//! Owns the [`Navigator`] and [`UIState`] outright; nothing else holds them,
//! so no locking is involved. Requests returned by the navigator are run on
//! spawned tasks that only see the API handle and a response sender, and
//! their results come back through [`EventLoop::next_response`].

use std::sync::Arc;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;
use tracing::{debug, info, trace};

use crate::{
    api::client::ExplorerApi,
    controller::{
        actions::Action,
        keymap::map_key,
        navigator::Navigator,
        request::{Request, Response, execute},
    },
    model::ui_state::{UIMode, UIState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    Continue,
    Quit,
}

/// Counters reported when the loop shuts down.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsSnap {
    pub actions: u64,
    pub requests: u64,
    pub responses: u64,
}

pub struct EventLoop {
    navigator: Navigator,
    ui: UIState,
    api: Arc<dyn ExplorerApi>,
    response_tx: mpsc::UnboundedSender<Response>,
    response_rx: mpsc::UnboundedReceiver<Response>,
    metrics: MetricsSnap,
}

impl EventLoop {
    pub fn new(navigator: Navigator, api: Arc<dyn ExplorerApi>) -> Self {
        info!("Initializing event loop");
        let (response_tx, response_rx) = mpsc::unbounded_channel();

        Self {
            navigator,
            ui: UIState::new(),
            api,
            response_tx,
            response_rx,
            metrics: MetricsSnap::default(),
        }
    }

    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub const fn ui_state(&self) -> &UIState {
        &self.ui
    }

    pub fn ui_state_mut(&mut self) -> &mut UIState {
        &mut self.ui
    }

    pub const fn snapshot_metrics(&self) -> MetricsSnap {
        self.metrics
    }

    /// Waits for the next backend response. Never yields `None` while the
    /// loop is alive, since the loop keeps a sender of its own.
    pub async fn next_response(&mut self) -> Option<Response> {
        let response = self.response_rx.recv().await;
        if response.is_some() {
            self.metrics.responses += 1;
        }
        response
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DispatchResult {
        match map_key(self.ui.mode, key) {
            Some(action) => self.dispatch(action),
            None => {
                trace!("Unbound key {:?}", key);
                DispatchResult::Continue
            }
        }
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        self.metrics.actions += 1;
        trace!("Dispatching action: {:?}", action);

        let generation = self.navigator.generation();
        let request = match action {
            Action::Quit => {
                info!("Quit requested");
                return DispatchResult::Quit;
            }

            Action::LoadConfig => Some(self.navigator.load_config()),
            Action::NavigateTo(path) => self.navigator.navigate_to(&path),
            Action::SubmitSearch => {
                self.ui.mode = UIMode::Browse;
                self.navigator.submit_search()
            }
            Action::ClearSearch => {
                if self.navigator.state().clear_search_visible() {
                    self.navigator.clear_search()
                } else {
                    None
                }
            }
            Action::GoBack => self.navigator.go_back(),
            Action::Rescan => self.navigator.rescan(),
            Action::SortBy(column) => {
                self.navigator.sort_by(column);
                None
            }
            Action::ActivateSelected => self
                .ui
                .selected
                .and_then(|idx| self.navigator.activate_entry(idx)),
            Action::ActivateCrumb(idx) => self.navigator.activate_crumb(idx),

            Action::FocusCrumbs => {
                self.ui.focus_crumbs(self.navigator.crumb_count());
                None
            }
            Action::CrumbCursorLeft => {
                self.ui.move_crumb_left();
                None
            }
            Action::CrumbCursorRight => {
                self.ui.move_crumb_right(self.navigator.crumb_count());
                None
            }
            Action::ActivateCrumbCursor => {
                self.ui.mode = UIMode::Browse;
                self.navigator.activate_crumb(self.ui.crumb_cursor)
            }
            Action::BlurCrumbs => {
                self.ui.mode = UIMode::Browse;
                None
            }

            Action::MoveSelectionUp => {
                self.ui.move_selection_up();
                None
            }
            Action::MoveSelectionDown => {
                let len = self.navigator.state().items.len();
                self.ui.move_selection_down(len);
                None
            }

            Action::FocusSearch => {
                self.ui.mode = UIMode::SearchInput;
                None
            }
            Action::BlurSearch => {
                self.ui.mode = UIMode::Browse;
                None
            }
            Action::InputChar(c) => {
                self.navigator.push_query_char(c);
                None
            }
            Action::InputBackspace => {
                self.navigator.pop_query_char();
                None
            }

            Action::Response(response) => self.navigator.apply(response),
            Action::Resize(width, height) => {
                debug!("Terminal resized to {}x{}", width, height);
                None
            }
        };

        if let Some(request) = request {
            self.spawn_request(request);
        }

        let len = self.navigator.state().items.len();
        if self.navigator.generation() == generation {
            self.ui.clamp_selection(len);
        } else {
            self.ui.reset_selection(len);
        }
        self.ui.clamp_crumb_cursor(self.navigator.crumb_count());
        self.ui.request_redraw();

        DispatchResult::Continue
    }

    fn spawn_request(&mut self, request: Request) {
        self.metrics.requests += 1;
        let api = Arc::clone(&self.api);
        let tx = self.response_tx.clone();

        tokio::spawn(async move {
            let response = execute(api.as_ref(), request).await;
            if tx.send(response).is_err() {
                debug!("Event loop gone, dropping response");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::client::RemoteConfig,
        error::AppError,
        model::{
            entry::{DirectoryEntry, EntryKind, EntrySize},
            nav_state::ViewMode,
        },
    };
    use async_trait::async_trait;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::{collections::HashMap, sync::Mutex, time::Duration};

    /// Backend stand-in that serves canned listings and records calls.
    #[derive(Debug, Default)]
    struct ScriptedApi {
        root: Option<String>,
        listings: HashMap<String, Vec<DirectoryEntry>>,
        hits: Vec<DirectoryEntry>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedApi {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ExplorerApi for ScriptedApi {
        async fn fetch_config(&self) -> Result<RemoteConfig, AppError> {
            self.calls.lock().unwrap().push("config".into());
            self.root
                .clone()
                .map(|root_path| RemoteConfig { root_path })
                .ok_or_else(|| AppError::config_fetch("connection refused"))
        }

        async fn browse(&self, path: &str) -> Result<Vec<DirectoryEntry>, AppError> {
            self.calls.lock().unwrap().push(format!("browse {path}"));
            self.listings
                .get(path)
                .cloned()
                .ok_or_else(|| AppError::browse_fetch(path, "HTTP 404"))
        }

        async fn search(&self, query: &str, scope: &str) -> Result<Vec<DirectoryEntry>, AppError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("search {query} {scope}"));
            Ok(self.hits.clone())
        }
    }

    fn entry(name: &str, path: &str, kind: EntryKind) -> DirectoryEntry {
        DirectoryEntry {
            name: name.to_string(),
            path: path.to_string(),
            kind,
            size: EntrySize::Bytes(120),
            last_modified: "2024-01-01".to_string(),
        }
    }

    fn scripted() -> Arc<ScriptedApi> {
        let mut listings = HashMap::new();
        listings.insert(
            "/docs".to_string(),
            vec![
                entry("sub", "/docs/sub", EntryKind::Directory),
                entry("a.txt", "/docs/a.txt", EntryKind::File),
            ],
        );
        listings.insert(
            "/docs/sub".to_string(),
            vec![entry("report.pdf", "/docs/sub/report.pdf", EntryKind::File)],
        );

        Arc::new(ScriptedApi {
            root: Some("/docs".to_string()),
            listings,
            hits: vec![entry("report.pdf", "/docs/sub/report.pdf", EntryKind::File)],
            calls: Mutex::new(Vec::new()),
        })
    }

    /// Feeds responses back until nothing is in flight.
    async fn settle(event_loop: &mut EventLoop) {
        while event_loop.navigator().is_loading() {
            let response = tokio::time::timeout(Duration::from_secs(5), event_loop.next_response())
                .await
                .expect("response timed out")
                .expect("channel closed");
            event_loop.dispatch(Action::Response(response));
        }
    }

    async fn started(api: Arc<ScriptedApi>) -> EventLoop {
        let mut event_loop = EventLoop::new(Navigator::new("/host/documents"), api);
        event_loop.dispatch(Action::LoadConfig);
        settle(&mut event_loop).await;
        event_loop
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn startup_browses_configured_root() {
        let api = scripted();
        let event_loop = started(api.clone()).await;

        let state = event_loop.navigator().state();
        assert_eq!(state.root_path, "/docs");
        assert_eq!(state.current_path, "/docs");
        assert_eq!(state.items.len(), 2);
        assert_eq!(event_loop.ui_state().selected, Some(0));
        assert_eq!(api.calls(), ["config", "browse /docs"]);
    }

    #[tokio::test]
    async fn startup_without_config_uses_fallback_root() {
        let api = Arc::new(ScriptedApi::default());
        let event_loop = started(api.clone()).await;

        let state = event_loop.navigator().state();
        assert_eq!(state.root_path, "/host/documents");
        assert!(state.items.is_empty());
        assert_eq!(api.calls(), ["config", "browse /host/documents"]);
    }

    #[tokio::test]
    async fn enter_on_directory_row_descends() {
        let mut event_loop = started(scripted()).await;

        // "a.txt" sorts before "sub"
        assert_eq!(event_loop.handle_key(key(KeyCode::Down)), DispatchResult::Continue);
        event_loop.handle_key(key(KeyCode::Enter));
        settle(&mut event_loop).await;

        assert_eq!(event_loop.navigator().state().current_path, "/docs/sub");
        assert_eq!(event_loop.ui_state().selected, Some(0));

        event_loop.handle_key(key(KeyCode::Backspace));
        settle(&mut event_loop).await;
        assert_eq!(event_loop.navigator().state().current_path, "/docs");
    }

    #[tokio::test]
    async fn typed_search_then_escape_returns_to_browsing() {
        let api = scripted();
        let mut event_loop = started(api.clone()).await;

        event_loop.handle_key(key(KeyCode::Char('/')));
        assert_eq!(event_loop.ui_state().mode, UIMode::SearchInput);
        for c in "report".chars() {
            event_loop.handle_key(key(KeyCode::Char(c)));
        }
        event_loop.handle_key(key(KeyCode::Enter));
        settle(&mut event_loop).await;

        let state = event_loop.navigator().state();
        assert_eq!(
            state.mode,
            ViewMode::Searching {
                query: "report".into()
            }
        );
        assert!(state.clear_search_visible());
        assert_eq!(event_loop.ui_state().mode, UIMode::Browse);

        event_loop.handle_key(key(KeyCode::Esc));
        settle(&mut event_loop).await;

        let state = event_loop.navigator().state();
        assert_eq!(state.mode, ViewMode::Browsing);
        assert!(state.query_input.is_empty());
        assert_eq!(
            api.calls(),
            ["config", "browse /docs", "search report /docs", "browse /docs"]
        );
    }

    #[tokio::test]
    async fn crumb_cursor_reaches_crumbs_past_nine() {
        let deep: String = (1..=11).map(|n| format!("/l{n}")).collect();
        let tenth: String = (1..=10).map(|n| format!("/l{n}")).collect();

        let mut listings = HashMap::new();
        listings.insert("/".to_string(), Vec::new());
        listings.insert(deep.clone(), Vec::new());
        listings.insert(tenth.clone(), Vec::new());
        let api = Arc::new(ScriptedApi {
            root: Some("/".to_string()),
            listings,
            ..ScriptedApi::default()
        });

        let mut event_loop = started(api.clone()).await;
        event_loop.dispatch(Action::NavigateTo(deep.clone()));
        settle(&mut event_loop).await;
        assert_eq!(event_loop.navigator().state().current_path, deep);

        event_loop.handle_key(key(KeyCode::Char('[')));
        assert_eq!(event_loop.ui_state().mode, UIMode::CrumbSelect);
        assert_eq!(event_loop.ui_state().crumb_cursor, 11);

        event_loop.handle_key(key(KeyCode::Left));
        assert_eq!(event_loop.ui_state().crumb_cursor, 10);
        event_loop.handle_key(key(KeyCode::Enter));
        assert_eq!(event_loop.ui_state().mode, UIMode::Browse);
        settle(&mut event_loop).await;

        assert_eq!(event_loop.navigator().state().current_path, tenth);
        assert_eq!(api.calls().last(), Some(&format!("browse {tenth}")));
    }

    #[tokio::test]
    async fn crumb_focus_is_inert_while_searching() {
        let mut event_loop = started(scripted()).await;
        event_loop.dispatch(Action::InputChar('r'));
        event_loop.dispatch(Action::SubmitSearch);
        settle(&mut event_loop).await;

        event_loop.handle_key(key(KeyCode::Char('[')));
        assert_eq!(event_loop.ui_state().mode, UIMode::Browse);
    }

    #[tokio::test]
    async fn back_at_root_issues_no_fetch() {
        let api = scripted();
        let mut event_loop = started(api.clone()).await;
        let before = event_loop.navigator().state().clone();

        event_loop.dispatch(Action::GoBack);
        assert!(!event_loop.navigator().is_loading());
        assert_eq!(event_loop.navigator().state(), &before);
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn failed_navigation_keeps_last_listing() {
        let mut event_loop = started(scripted()).await;
        let before = event_loop.navigator().state().clone();

        event_loop.dispatch(Action::NavigateTo("/nowhere".into()));
        settle(&mut event_loop).await;

        assert_eq!(event_loop.navigator().state(), &before);
    }

    #[tokio::test]
    async fn quit_stops_dispatch() {
        let mut event_loop = started(scripted()).await;
        assert_eq!(event_loop.handle_key(key(KeyCode::Char('q'))), DispatchResult::Quit);

        let metrics = event_loop.snapshot_metrics();
        assert_eq!(metrics.requests, 2);
        assert_eq!(metrics.responses, 2);
    }
}
