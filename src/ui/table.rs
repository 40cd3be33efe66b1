use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Cell, Row, Table},
};

use crate::logic::TableView;
use crate::state::{AppState, Column, Focus, Record, SortDirection};
use crate::theme::{Theme, theme};
use crate::util::{NOT_AVAILABLE, truncate_to_width};

use super::framed_block;

/// Fixed cell width per table column; `None` takes the remaining space.
const fn column_width(column: Column) -> Option<u16> {
    match column {
        Column::Name => Some(20),
        Column::Institution => Some(12),
        Column::Language => Some(12),
        Column::Stars | Column::Cluster => Some(8),
        Column::License => Some(12),
        Column::UpdatedAt => Some(10),
        Column::Description | Column::InstitutionName | Column::Link => None,
    }
}

/// Header label with the sort indicator of the active column.
fn header_label(column: Column, app: &AppState) -> String {
    match (app.query.sort.column, app.query.sort.direction) {
        (Some(c), SortDirection::Ascending) if c == column => format!("{} ▲", column.title()),
        (Some(c), SortDirection::Descending) if c == column => format!("{} ▼", column.title()),
        _ => column.title().to_string(),
    }
}

/// Styled cell for one record column.
fn record_cell(record: &Record, column: Column, th: &Theme) -> Cell<'static> {
    let text = record.display_text(column);
    let text = match column_width(column) {
        Some(w) => truncate_to_width(&text, usize::from(w)),
        None => text,
    };
    let style = if text == NOT_AVAILABLE {
        Style::default().fg(th.subtext0)
    } else {
        match column {
            Column::Name => Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            Column::Stars => Style::default().fg(th.green),
            Column::Institution => Style::default().fg(th.lavender),
            _ => Style::default().fg(th.text),
        }
    };
    Cell::from(Span::styled(text, style))
}

/// What: Render the current page as a table.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Browser state; its `TableState` drives the row highlight.
/// - `view`: Latest view.
/// - `area`: Target rectangle.
///
/// Output:
/// - None; headers show the sort indicator, and the header under the sort
///   cursor is underlined while the table has focus.
pub(super) fn render_table(f: &mut Frame, app: &mut AppState, view: &TableView<'_>, area: Rect) {
    let th = theme();
    let focused = app.focus == Focus::Table;
    let cursor = app.sort_column();

    let header = Row::new(Column::TABLE.iter().map(|&c| {
        let mut style = Style::default().fg(th.mauve).add_modifier(Modifier::BOLD);
        if focused && c == cursor {
            style = style.add_modifier(Modifier::UNDERLINED | Modifier::REVERSED);
        }
        Cell::from(Span::styled(header_label(c, app), style))
    }));

    let rows: Vec<Row> = view
        .page
        .iter()
        .map(|r| Row::new(Column::TABLE.iter().map(|&c| record_cell(r, c, &th))))
        .collect();

    let widths = Column::TABLE.map(|c| column_width(c).map_or(Constraint::Fill(1), Constraint::Length));

    let title = format!(
        "Repositories ({} of {})",
        view.stats.filtered_count, view.stats.total_count
    );
    let table = Table::new(rows, widths)
        .header(header)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(framed_block(&title, focused, &th))
        .row_highlight_style(Style::default().bg(th.surface1).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut app.table);
}
