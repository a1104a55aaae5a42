//! src/model/ui_state.rs
//! ============================================================================
//! # UIState: terminal-only presentation state
//!
//! Everything here is about driving the terminal (focus, cursor row, redraw)
//! and is kept apart from `NavigationState`, which the projection renders.

use chrono::{DateTime, Local};

/// Where key presses go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UIMode {
    #[default]
    Browse,
    /// Keys edit the search input line.
    SearchInput,
    /// Keys move a cursor along the breadcrumb.
    CrumbSelect,
}

#[derive(Debug, Clone)]
pub struct UIState {
    pub mode: UIMode,

    /// Highlighted table row.
    pub selected: Option<usize>,

    /// Highlighted breadcrumb while in `CrumbSelect`.
    pub crumb_cursor: usize,

    /// Wall-clock time of the last accepted listing.
    pub last_refresh: Option<DateTime<Local>>,

    needs_redraw: bool,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            mode: UIMode::Browse,
            selected: None,
            crumb_cursor: 0,
            last_refresh: None,
            needs_redraw: true,
        }
    }
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    #[inline]
    pub const fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    #[inline]
    pub fn clear_redraw(&mut self) {
        self.needs_redraw = false;
    }

    /// A fresh listing arrived: highlight its first row.
    pub fn reset_selection(&mut self, len: usize) {
        self.selected = (len > 0).then_some(0);
        self.last_refresh = Some(Local::now());
    }

    /// Keeps the highlight inside `0..len` after a reorder.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = match (self.selected, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) => Some(idx.min(len - 1)),
        };
    }

    /// Enters crumb selection on the last crumb. No-op without crumbs.
    pub fn focus_crumbs(&mut self, count: usize) {
        if let Some(last) = count.checked_sub(1) {
            self.mode = UIMode::CrumbSelect;
            self.crumb_cursor = last;
        }
    }

    pub fn move_crumb_left(&mut self) {
        self.crumb_cursor = self.crumb_cursor.saturating_sub(1);
    }

    pub fn move_crumb_right(&mut self, count: usize) {
        if self.crumb_cursor + 1 < count {
            self.crumb_cursor += 1;
        }
    }

    /// Keeps the crumb cursor valid after the path changed underneath it.
    pub fn clamp_crumb_cursor(&mut self, count: usize) {
        match count.checked_sub(1) {
            Some(last) => self.crumb_cursor = self.crumb_cursor.min(last),
            None => {
                self.crumb_cursor = 0;
                if self.mode == UIMode::CrumbSelect {
                    self.mode = UIMode::Browse;
                }
            }
        }
    }

    pub fn move_selection_up(&mut self) -> bool {
        match self.selected {
            Some(idx) if idx > 0 => {
                self.selected = Some(idx - 1);
                true
            }
            _ => false,
        }
    }

    pub fn move_selection_down(&mut self, len: usize) -> bool {
        match self.selected {
            Some(idx) if idx + 1 < len => {
                self.selected = Some(idx + 1);
                true
            }
            None if len > 0 => {
                self.selected = Some(0);
                true
            }
            _ => false,
        }
    }
}
