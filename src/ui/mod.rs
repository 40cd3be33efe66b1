//! Frame rendering for the table browser.
//!
//! - `inputs`: search box, column filter and dropdown selectors
//! - `table`: the paginated repository table
//! - `panels`: summary statistics, top languages, recent updates, clusters
//! - `footer`: pagination controls, key hints and status

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
};

use crate::logic::TableView;
use crate::state::AppState;
use crate::theme::{Theme, theme};

mod footer;
mod inputs;
mod panels;
mod table;

/// What: Render one frame.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Browser state (row selection is updated by the stateful table).
/// - `view`: Result of the latest pipeline run.
///
/// Output:
/// - None; draws inputs on top, table and summary in the middle, footer at the bottom.
pub fn ui(f: &mut Frame, app: &mut AppState, view: &TableView<'_>) {
    let th = theme();
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(2),
        ])
        .split(area);

    inputs::render_inputs(f, app, rows[0]);

    if app.show_summary {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(72), Constraint::Percentage(28)])
            .split(rows[1]);
        table::render_table(f, app, view, body[0]);
        panels::render_panels(f, view, body[1]);
    } else {
        table::render_table(f, app, view, rows[1]);
    }

    footer::render_footer(f, app, view, rows[2]);
}

/// Bordered block whose colors follow the focus state.
fn framed_block<'a>(title: &'a str, focused: bool, th: &Theme) -> Block<'a> {
    let (title_color, border_color): (Color, Color) = if focused {
        (th.mauve, th.sapphire)
    } else {
        (th.overlay1, th.surface1)
    };
    Block::default()
        .title(ratatui::text::Span::styled(title, Style::default().fg(title_color)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
}


#[cfg(test)]
mod tests {
    use super::test_support::{app, render_to_string, sample_store};

    #[test]
    /// What: A full frame shows inputs, table rows, summary and footer
    ///
    /// - Input: Sample store, default state, 140x40 terminal
    /// - Output: Titles, a repository name, formatted date, N/A cell and page indicator present
    fn ui_full_frame_renders() {
        let store = sample_store();
        let mut a = app();
        let text = render_to_string(&mut a, &store, 140, 40);
        assert!(text.contains("Search"));
        assert!(text.contains("api-gateway"));
        assert!(text.contains("07/05/2024"));
        assert!(text.contains("N/A"));
        assert!(text.contains("Page 1 of 1"));
        assert!(text.contains("Top languages"));
    }

    #[test]
    /// What: Hiding the summary leaves only the table in the body
    ///
    /// - Input: show_summary false
    /// - Output: No "Top languages" panel
    fn ui_without_summary() {
        let store = sample_store();
        let mut a = app();
        a.show_summary = false;
        let text = render_to_string(&mut a, &store, 140, 30);
        assert!(!text.contains("Top languages"));
        assert!(text.contains("sensors"));
    }
}
