//! src/view/components/breadcrumb_bar.rs
//! Breadcrumb while browsing, query label while searching.

use crate::view::{
    projection::{ExplorerView, HeaderView},
    theme,
};
use ratatui::{
    prelude::*,
    widgets::{Paragraph, Widget},
};

pub struct BreadcrumbBar;

impl BreadcrumbBar {
    /// `cursor` is the crumb highlighted in crumb-select focus.
    pub fn render(frame: &mut Frame<'_>, view: &ExplorerView, cursor: Option<usize>, area: Rect) {
        let line = match &view.header {
            HeaderView::Breadcrumb(crumbs) => {
                let mut spans = Vec::with_capacity(crumbs.len() * 2);
                for (idx, crumb) in crumbs.iter().enumerate() {
                    if idx > 0 {
                        spans.push(Span::styled(" › ", theme::crumb_separator_style()));
                    }
                    // digits 0-9 jump to the first ten crumbs, `[` reaches the rest
                    let label = if idx < 10 {
                        format!("{idx}:{}", crumb.label)
                    } else {
                        crumb.label.clone()
                    };
                    let style = if cursor == Some(idx) {
                        theme::crumb_cursor_style()
                    } else {
                        theme::crumb_style()
                    };
                    spans.push(Span::styled(label, style));
                }
                Line::from(spans)
            }
            HeaderView::QueryLabel(label) => {
                Line::from(Span::styled(label.clone(), theme::query_label_style()))
            }
        };

        Paragraph::new(line)
            .style(theme::base_style())
            .render(area, frame.buffer_mut());
    }
}
