//! Non-interactive output of a [`TableView`].

use std::fmt::Write as _;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::logic::{GlobalStats, Pagination, TableView};
use crate::state::{Column, Record};
use crate::util::truncate_to_width;

/// Widest cell printed per column in text mode.
const MAX_CELL_WIDTH: usize = 40;

/// JSON shape printed by `--json`.
#[derive(Serialize)]
struct JsonPage<'a> {
    /// Rows of the current page.
    page: &'a [&'a Record],
    /// Headline statistics.
    stats: &'a GlobalStats,
    /// Pagination descriptor.
    pagination: &'a Pagination,
}

/// Pad `text` with spaces to `width` terminal cells.
fn pad(text: &str, width: usize) -> String {
    let w = text.width();
    format!("{text}{}", " ".repeat(width.saturating_sub(w)))
}

/// What: Render a view as plain text.
///
/// Inputs:
/// - `view`: View to print.
/// - `show_summary`: Whether the summary sections precede the table.
///
/// Output:
/// - Multi-line text: optional summary, an aligned table of the page and the
///   pagination line.
#[must_use]
pub fn render_text(view: &TableView<'_>, show_summary: bool) -> String {
    let mut out = String::new();
    if show_summary {
        let s = &view.stats;
        let _ = writeln!(
            out,
            "Repositories: {} total, {} shown | top language: {} | top license: {}",
            s.total_count, s.filtered_count, s.most_common_language, s.most_common_license
        );
        let langs: Vec<String> = view
            .top_languages
            .iter()
            .enumerate()
            .map(|(i, lc)| format!("{}. {} ({})", i + 1, lc.language, lc.count))
            .collect();
        let _ = writeln!(out, "Top languages: {}", langs.join(", "));
        let _ = writeln!(out, "Recently updated:");
        for r in &view.recent {
            let _ = writeln!(out, "  {}  {}", r.display_text(Column::UpdatedAt), r.name);
        }
        if !view.clusters.is_empty() {
            let _ = writeln!(out, "Clusters:");
            for c in view.clusters {
                let _ = writeln!(
                    out,
                    "  {}: {}",
                    c.id,
                    c.description.as_deref().unwrap_or(crate::util::NOT_AVAILABLE)
                );
            }
        }
        out.push('\n');
    }

    let cells: Vec<Vec<String>> = view
        .page
        .iter()
        .map(|r| {
            Column::TABLE
                .iter()
                .map(|&c| truncate_to_width(&r.display_text(c), MAX_CELL_WIDTH))
                .collect()
        })
        .collect();
    let widths: Vec<usize> = Column::TABLE
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|row| row[i].width())
                .chain(std::iter::once(c.title().width()))
                .max()
                .unwrap_or(0)
        })
        .collect();
    let line = |values: Vec<String>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, &w)| pad(v, w))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };
    out.push_str(&line(Column::TABLE.iter().map(|c| c.title().to_string()).collect()));
    out.push('\n');
    for row in cells {
        out.push_str(&line(row));
        out.push('\n');
    }
    let p = &view.pagination;
    let _ = writeln!(
        out,
        "Page {} of {} ({} items){}{}",
        p.current_page,
        p.total_pages,
        p.total_items,
        if p.has_prev { " [prev]" } else { "" },
        if p.has_next { " [next]" } else { "" },
    );
    out
}

/// What: Render the current page, statistics and pagination as JSON.
///
/// Inputs:
/// - `view`: View to print.
///
/// Output:
/// - Pretty-printed JSON document.
///
/// # Errors
/// - Returns the serializer error (not expected for these types).
pub fn render_json(view: &TableView<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonPage {
        page: &view.page,
        stats: &view.stats,
        pagination: &view.pagination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::RecordStore;
    use crate::logic::build_view;
    use crate::state::{QueryState, RawDocument};

    fn store() -> RecordStore {
        let doc: RawDocument = serde_json::from_value(serde_json::json!({
            "institutions_data": [{
                "Nome Completo": "Universidade Federal", "Sigla": "UF",
                "Repositorios": [
                    {"Nome do Repositório": "api", "Linguagem Principal": "Go", "Estrelas": 5,
                     "Ultima Atualizacao": "2024-05-07T10:00:00Z", "Link de Acesso": "https://x/api"},
                    {"Nome do Repositório": "web", "Linguagem Principal": "N/A"}
                ]
            }],
            "cluster_descriptions": [{"id": 2, "description": "Web"}]
        }))
        .unwrap();
        RecordStore::build(doc)
    }

    #[test]
    /// What: Text output contains summary, aligned rows and pagination
    ///
    /// - Input: Two-record store, default query
    /// - Output: Summary header, both rows with N/A for the sentinel, page line
    fn print_text_output() {
        let store = store();
        let view = build_view(&store, &QueryState::default());
        let text = render_text(&view, true);
        assert!(text.starts_with("Repositories: 2 total, 2 shown | top language: Go"));
        assert!(text.contains("1. Go (1)"));
        assert!(text.contains("  07/05/2024  api"));
        assert!(text.contains("  2: Web"));
        let web_line = text.lines().find(|l| l.starts_with("web")).unwrap();
        assert!(web_line.contains("N/A"));
        assert!(text.trim_end().ends_with("Page 1 of 1 (2 items)"));

        let bare = render_text(&view, false);
        assert!(bare.starts_with("Repository"));
    }

    #[test]
    /// What: JSON output carries the page, stats and pagination
    ///
    /// - Input: Store filtered to "api"
    /// - Output: One row with its link; filtered_count 1; total_pages 1
    fn print_json_output() {
        let store = store();
        let view = build_view(&store, &QueryState::default().with_search("api"));
        let json: serde_json::Value = serde_json::from_str(&render_json(&view).unwrap()).unwrap();
        assert_eq!(json["page"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["page"][0]["link"], "https://x/api");
        assert_eq!(json["stats"]["filtered_count"], 1);
        assert_eq!(json["pagination"]["total_pages"], 1);
    }
}
