//! src/view/ui.rs
//! ============================================================
//! Frame renderer. Projects the navigator's state into an
//! `ExplorerView` once per frame and paints it; it never mutates
//! navigation state.

use std::time::{Duration, Instant};

use ratatui::prelude::*;
use tracing::{instrument, warn};

use crate::{
    controller::navigator::Navigator,
    model::ui_state::{UIMode, UIState},
    view::{
        components::{
            breadcrumb_bar::BreadcrumbBar, object_table::EntryTable, search_bar::SearchBar,
            status_bar::StatusBar,
        },
        projection::ExplorerView,
    },
};

const SLOW_FRAME: Duration = Duration::from_millis(16);

pub struct UIRenderer {
    table: EntryTable,
    status: StatusBar,
    stats: RenderStats,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub frames: u64,
    pub slow: u64,
    pub total: Duration,
}

impl RenderStats {
    /// Mean time spent painting a frame, once anything has been drawn.
    pub fn average(&self) -> Option<Duration> {
        u32::try_from(self.frames)
            .ok()
            .filter(|&frames| frames > 0)
            .map(|frames| self.total / frames)
    }
}

impl UIRenderer {
    pub fn new() -> Self {
        Self {
            table: EntryTable::new(),
            status: StatusBar::new(),
            stats: RenderStats::default(),
        }
    }

    pub const fn stats(&self) -> RenderStats {
        self.stats
    }

    #[instrument(level = "trace", skip_all)]
    pub fn render(&mut self, frame: &mut Frame<'_>, navigator: &Navigator, ui_state: &UIState) {
        let start = Instant::now();
        let view = ExplorerView::project(navigator.state(), navigator.is_loading());

        let [search_area, header_area, table_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        SearchBar::render(
            frame,
            &view,
            ui_state.mode == UIMode::SearchInput,
            search_area,
        );
        let crumb_cursor =
            (ui_state.mode == UIMode::CrumbSelect).then_some(ui_state.crumb_cursor);
        BreadcrumbBar::render(frame, &view, crumb_cursor, header_area);
        self.table
            .render(frame, &view, ui_state.selected, table_area);
        self.status.render(frame, &view, ui_state, status_area);

        let elapsed = start.elapsed();
        self.stats.total += elapsed;
        self.stats.frames += 1;
        if elapsed > SLOW_FRAME {
            self.stats.slow += 1;
            warn!("Slow render: {}ms (target: <16ms)", elapsed.as_millis());
        }
    }
}

impl Default for UIRenderer {
    fn default() -> Self {
        Self::new()
    }
}
