use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
};

use crate::logic::TableView;
use crate::state::Column;
use crate::theme::{Theme, theme};
use crate::util::{NOT_AVAILABLE, truncate_to_width};

use super::framed_block;

/// `label: value` line used by the statistics panel.
fn stat_line<'a>(label: &'a str, value: String, th: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(th.overlay1)),
        Span::styled(value, Style::default().fg(th.text).add_modifier(Modifier::BOLD)),
    ])
}

/// What: Render the summary column next to the table.
///
/// Inputs:
/// - `f`: Frame to draw into.
/// - `view`: Latest view.
/// - `area`: Target rectangle.
///
/// Output:
/// - None; stacks statistics, top languages, recently updated and clusters.
pub(super) fn render_panels(f: &mut Frame, view: &TableView<'_>, area: Rect) {
    let th = theme();
    let top_h = u16::try_from(view.top_languages.len().max(1)).unwrap_or(u16::MAX).saturating_add(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),
            Constraint::Length(top_h),
            Constraint::Min(3),
            Constraint::Length(6),
        ])
        .split(area);
    let inner_w = usize::from(area.width.saturating_sub(2));

    let stats = vec![
        stat_line("Total: ", view.stats.total_count.to_string(), &th),
        stat_line("Filtered: ", view.stats.filtered_count.to_string(), &th),
        stat_line("Top language: ", view.stats.most_common_language.clone(), &th),
        stat_line("Top license: ", view.stats.most_common_license.clone(), &th),
    ];
    f.render_widget(
        Paragraph::new(stats)
            .style(Style::default().bg(th.mantle))
            .block(framed_block("Statistics", false, &th)),
        chunks[0],
    );

    let langs: Vec<ListItem> = if view.top_languages.is_empty() {
        vec![ListItem::new(Span::styled(NOT_AVAILABLE, Style::default().fg(th.subtext0)))]
    } else {
        view.top_languages
            .iter()
            .enumerate()
            .map(|(i, lc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{}. ", i + 1), Style::default().fg(th.overlay1)),
                    Span::styled(lc.language.clone(), Style::default().fg(th.text)),
                    Span::styled(format!("  {}", lc.count), Style::default().fg(th.green)),
                ]))
            })
            .collect()
    };
    f.render_widget(
        List::new(langs)
            .style(Style::default().bg(th.mantle))
            .block(framed_block("Top languages", false, &th)),
        chunks[1],
    );

    let recent: Vec<ListItem> = view
        .recent
        .iter()
        .map(|r| {
            let date = r.display_text(Column::UpdatedAt);
            let name_w = inner_w.saturating_sub(date.len() + 1);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{date} "), Style::default().fg(th.subtext0)),
                Span::styled(truncate_to_width(&r.name, name_w), Style::default().fg(th.text)),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(recent)
            .style(Style::default().bg(th.mantle))
            .block(framed_block("Recently updated", false, &th)),
        chunks[2],
    );

    let clusters: Vec<ListItem> = view
        .clusters
        .iter()
        .map(|c| {
            let desc = c.description.as_deref().unwrap_or(NOT_AVAILABLE);
            let label = format!("{}: ", c.id);
            let desc_w = inner_w.saturating_sub(label.len());
            ListItem::new(Line::from(vec![
                Span::styled(label, Style::default().fg(th.lavender)),
                Span::styled(truncate_to_width(desc, desc_w), Style::default().fg(th.text)),
            ]))
        })
        .collect();
    f.render_widget(
        List::new(clusters)
            .style(Style::default().bg(th.mantle))
            .block(framed_block("Clusters", false, &th)),
        chunks[3],
    );
}
