//! src/view/components/search_bar.rs
//! ============================================================================
//! # SearchBar: the query input line
//!
//! Shows `query_input` and, only while search results are on screen, the
//! `[Esc] clear` control. The terminal cursor is placed at the end of the
//! text when the input has focus.

use crate::view::{icons, projection::ExplorerView, theme};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

const CLEAR_LABEL: &str = " [Esc] clear ";

pub struct SearchBar;

impl SearchBar {
    pub fn render(frame: &mut Frame<'_>, view: &ExplorerView, focused: bool, area: Rect) {
        let border = if focused {
            theme::focused_border_style()
        } else {
            theme::border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} Search ", icons::SEARCH_ICON))
            .border_style(border)
            .style(theme::base_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [input_area, clear_area] = if view.clear_search_visible {
            Layout::horizontal([
                Constraint::Fill(1),
                Constraint::Length(CLEAR_LABEL.chars().count() as u16),
            ])
            .areas(inner)
        } else {
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(0)]).areas(inner)
        };

        frame.render_widget(
            Paragraph::new(view.query_input.as_str()).style(theme::base_style()),
            input_area,
        );

        if view.clear_search_visible {
            frame.render_widget(
                Paragraph::new(CLEAR_LABEL).style(theme::clear_search_style()),
                clear_area,
            );
        }

        if focused {
            let typed = view.query_input.chars().count() as u16;
            let x = input_area
                .x
                .saturating_add(typed)
                .min(input_area.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, input_area.y));
        }
    }
}
