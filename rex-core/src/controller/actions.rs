//! src/controller/actions.rs
//! ============================================================================
//! # Actions: everything the event loop can be asked to do
//!
//! Key presses are translated into actions by the key map, and backend
//! responses re-enter the loop as [`Action::Response`]. Each variant maps to
//! exactly one navigator or UI-state operation.

use crate::{controller::request::Response, model::sort::SortColumn};

#[derive(Debug)]
pub enum Action {
    /// Fetch `/api/config`, then browse the root.
    LoadConfig,

    NavigateTo(String),

    /// Search with whatever is in the input line (Enter).
    SubmitSearch,

    ClearSearch,

    GoBack,

    Rescan,

    SortBy(SortColumn),

    /// Activate the highlighted table row.
    ActivateSelected,

    /// Activate breadcrumb segment `n` (0 is Root).
    ActivateCrumb(usize),

    /// Move key focus to the breadcrumb, cursor on the last crumb.
    FocusCrumbs,

    CrumbCursorLeft,

    CrumbCursorRight,

    /// Activate the crumb under the cursor and leave crumb focus.
    ActivateCrumbCursor,

    BlurCrumbs,

    MoveSelectionUp,

    MoveSelectionDown,

    /// Move key focus to the search input.
    FocusSearch,

    /// Return key focus to the table, keeping the typed text.
    BlurSearch,

    InputChar(char),

    InputBackspace,

    /// A backend response for an earlier request.
    Response(Response),

    Resize(u16, u16),

    Quit,
}
