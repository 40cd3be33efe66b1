use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::logic::TableView;
use crate::state::{AppState, Focus};
use crate::theme::theme;

/// Key hints for the focused input.
const fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Search => "type to search · Tab next · PgUp/PgDn page · Esc quit",
        Focus::ColumnFilter => "←/→ column · type prefix · Tab next · Esc quit",
        Focus::Table => "←/→ column · Enter sort · ↑/↓ row · o open · n/p page · Esc quit",
    }
}

/// What: Render pagination controls and the hint or status line.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `app`: Browser state.
/// - `view`: Latest view.
/// - `area`: Two-line footer rectangle.
///
/// Output:
/// - None; disabled page controls are dimmed.
pub(super) fn render_footer(f: &mut Frame, app: &AppState, view: &TableView<'_>, area: Rect) {
    let th = theme();
    let p = &view.pagination;
    let control = |label: &'static str, enabled: bool| {
        if enabled {
            Span::styled(label, Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD))
        } else {
            Span::styled(label, Style::default().fg(th.surface1))
        }
    };
    let paging = Line::from(vec![
        control("◀ Prev", p.has_prev),
        Span::styled(
            format!("  Page {} of {}  ", p.current_page, p.total_pages),
            Style::default().fg(th.text),
        ),
        control("Next ▶", p.has_next),
        Span::styled(
            format!("   {} items", p.total_items),
            Style::default().fg(th.subtext0),
        ),
    ]);
    let second = app.status.as_ref().map_or_else(
        || Line::from(Span::styled(hints(app.focus), Style::default().fg(th.overlay1))),
        |msg| Line::from(Span::styled(msg.clone(), Style::default().fg(th.yellow))),
    );
    f.render_widget(
        Paragraph::new(vec![paging, second]).style(Style::default().bg(th.base)),
        area,
    );
}
