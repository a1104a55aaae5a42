//! src/view/components/status_bar.rs
//!
//! Left half: focus mode, current path, item count, loading marker.
//! Right half: last refresh time and key hints for the focused mode.

use crate::{
    model::ui_state::{UIMode, UIState},
    view::{projection::ExplorerView, theme},
};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

const BROWSE_HINTS: &str = "/ search  [ crumbs  ⌫ back  r rescan  n/s/t/m sort  q quit";
const INPUT_HINTS: &str = "⏎ search  Esc done";
const CRUMB_HINTS: &str = "←/→ move  ⏎ open  Esc done";

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame<'_>, view: &ExplorerView, ui_state: &UIState, area: Rect) {
        let (mode_str, hints) = match ui_state.mode {
            UIMode::Browse => ("Browse", BROWSE_HINTS),
            UIMode::SearchInput => ("Search", INPUT_HINTS),
            UIMode::CrumbSelect => ("Crumbs", CRUMB_HINTS),
        };

        let mut left = vec![Span::raw(format!(
            "{} | {} | Items: {}",
            mode_str,
            view.current_path,
            view.rows.len()
        ))];
        if view.loading {
            left.push(Span::styled(" | Loading…", theme::loading_style()));
        }

        let refreshed = ui_state
            .last_refresh
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_else(|| "--:--:--".to_string());
        let right = Line::from(vec![
            Span::raw(format!("Refreshed {refreshed} | ")),
            Span::styled(hints, theme::hint_style()),
        ]);

        let [left_area, right_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        Paragraph::new(Line::from(left))
            .style(theme::base_style())
            .alignment(Alignment::Left)
            .render(left_area, frame.buffer_mut());

        Paragraph::new(right)
            .style(theme::base_style())
            .alignment(Alignment::Right)
            .render(right_area, frame.buffer_mut());
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
