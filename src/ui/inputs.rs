use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;

use super::framed_block;

/// What: Render the search box, the column filter input and the dropdown selectors.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Browser state.
/// - `area`: Row reserved for the inputs.
///
/// Output:
/// - None; places the terminal cursor in the focused text input.
pub(super) fn render_inputs(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(area);

    let search_focused = app.focus == Focus::Search;
    let search = &app.query.filter.search;
    let search_line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if search_focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            search.clone(),
            Style::default().fg(if search_focused { th.text } else { th.subtext0 }),
        ),
    ]);
    f.render_widget(
        Paragraph::new(search_line)
            .style(Style::default().bg(th.base))
            .block(framed_block("Search", search_focused, &th)),
        cols[0],
    );

    let column = app.filter_column();
    let filter_focused = app.focus == Focus::ColumnFilter;
    let value = app
        .query
        .filter
        .columns
        .get(&column)
        .map_or("", String::as_str);
    let filter_title = format!("Filter by {} (←/→)", column.title());
    let filter_line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if filter_focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(value.to_string(), Style::default().fg(th.yellow)),
    ]);
    f.render_widget(
        Paragraph::new(filter_line)
            .style(Style::default().bg(th.base))
            .block(framed_block(&filter_title, filter_focused, &th)),
        cols[1],
    );

    let selector = |label: &'static str, value: Option<&str>| {
        vec![
            Span::styled(label, Style::default().fg(th.overlay1)),
            value.map_or_else(
                || Span::styled("All", Style::default().fg(th.subtext0)),
                |v| {
                    Span::styled(
                        v.to_string(),
                        Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
                    )
                },
            ),
        ]
    };
    let mut spans = selector("Language: ", app.query.filter.language.as_deref());
    spans.push(Span::raw("  "));
    spans.extend(selector("License: ", app.query.filter.license.as_deref()));
    f.render_widget(
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(th.base))
            .block(framed_block("F2 language · F3 license · F4 clear", false, &th)),
        cols[2],
    );

    let cursor_target = match app.focus {
        Focus::Search => Some((cols[0], search.as_str())),
        Focus::ColumnFilter => Some((cols[1], value)),
        Focus::Table => None,
    };
    if let Some((rect, text)) = cursor_target {
        let right = rect.x + rect.width.saturating_sub(2);
        let typed = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let x = rect.x.saturating_add(3).saturating_add(typed).min(right);
        f.set_cursor_position(Position::new(x, rect.y + 1));
    }
}
