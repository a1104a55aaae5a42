//! src/view/components/object_table.rs

use crate::view::{
    projection::{ExplorerView, RowView},
    theme,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState},
};

pub struct EntryTable;

impl EntryTable {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame<'_>,
        view: &ExplorerView,
        selected: Option<usize>,
        area: Rect,
    ) {
        let header = Row::new(view.columns.iter().map(|c| Cell::from(c.title.clone())))
            .style(theme::table_header_style())
            .bottom_margin(1);

        let rows: Vec<Row> = view.rows.iter().map(Self::row).collect();

        let widths = [
            Constraint::Fill(1),
            Constraint::Length(12),
            Constraint::Length(11),
            Constraint::Length(22),
        ];

        let mut table_state = TableState::default().with_selected(selected);

        let title = if view.current_path.is_empty() {
            " rex ".to_string()
        } else {
            format!(" {} ", view.current_path)
        };

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .title_style(Style::default().fg(theme::PURPLE).bold())
                    .border_style(theme::border_style())
                    .style(theme::base_style()),
            )
            .row_highlight_style(theme::highlight_style())
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(table, area, &mut table_state);
    }

    fn row(row: &RowView) -> Row<'static> {
        let style = if row.target.is_some() {
            theme::directory_row_style()
        } else {
            theme::file_row_style()
        };

        let mut name = vec![Span::raw(format!("{} {}", row.icon, row.name))];
        if let Some(location) = &row.location {
            name.push(Span::raw("  "));
            name.push(Span::styled(location.clone(), theme::location_style()));
        }

        Row::new(vec![
            Cell::from(Line::from(name)),
            Cell::from(row.size.clone()),
            Cell::from(row.kind),
            Cell::from(row.last_modified.clone()),
        ])
        .style(style)
    }
}

impl Default for EntryTable {
    fn default() -> Self {
        Self::new()
    }
}
