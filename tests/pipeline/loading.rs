//! Loading data and settings from disk, and the non-interactive outputs.

use std::fs;

use repotable::args::{self, Args};
use repotable::index::{LoadError, load_store};
use repotable::logic::build_view_with;
use repotable::state::Column;
use repotable::theme::load_settings_from;
use serde_json::json;

#[test]
/// What: A dataset on disk loads, dedupes on request and renders as text
///
/// - Input: File with a repository repeated inside one institution and shared with another
/// - Output: 4 records without dedupe, 3 with it; both institutions keep `shared`; clusters sorted by id
fn loading_from_file_with_dedupe() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("repos.json");
    let data = json!({
        "institutions_data": [
            {"Nome Completo": "Universidade A", "Sigla": "UA", "Repositorios": [
                {"Nome do Repositório": "shared", "Link de Acesso": "https://github.com/x/shared", "Estrelas": 4},
                {"Nome do Repositório": "own", "Link de Acesso": "https://github.com/x/own", "Estrelas": "N/A"},
                {"Nome do Repositório": "shared", "Link de Acesso": "https://github.com/x/shared", "Estrelas": 4}
            ]},
            {"Nome Completo": "Universidade B", "Sigla": "UB", "Repositorios": [
                {"Nome do Repositório": "shared", "Link de Acesso": "https://github.com/x/shared"}
            ]}
        ],
        "cluster_descriptions": [
            {"id": 3, "description": "Portais"},
            {"id": 1, "description": "Ferramentas"}
        ]
    });
    fs::write(&path, data.to_string()).unwrap();

    let full = load_store(&path, false, 5).unwrap();
    assert_eq!(full.len(), 4);
    let ids: Vec<i64> = full.clusters().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);

    let deduped = load_store(&path, true, 5).unwrap();
    assert_eq!(deduped.len(), 3);
    let owners: Vec<&str> = deduped
        .records()
        .iter()
        .filter(|r| r.name == "shared")
        .map(|r| r.institution_code.as_str())
        .collect();
    assert_eq!(owners, vec!["UA", "UB"]);
    assert_eq!(deduped.records()[1].stars, None);

    let args = Args::default();
    let view = build_view_with(&deduped, &args::initial_query(&args, &Default::default()), 10);
    let text = args::render_text(&view, true);
    assert!(text.contains("shared"));
    assert!(text.contains("1: Ferramentas"));
}

#[test]
/// What: Missing and malformed files surface as typed load errors
///
/// - Input: Nonexistent path; file with invalid JSON
/// - Output: `LoadError::Io` and `LoadError::Json` naming the path
fn loading_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let err = load_store(&missing, false, 5).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    let err = load_store(&bad, false, 5).unwrap_err();
    assert!(matches!(err, LoadError::Json { .. }));
}

#[test]
/// What: Settings from disk and flags combine into the first query
///
/// - Input: settings.conf with page size 1, sort by stars desc; flag search "o"
/// - Output: Query with both; JSON page holds the single highest-star match
fn loading_settings_drive_initial_query() {
    use clap::Parser;

    let dir = tempfile::tempdir().unwrap();
    let conf = dir.path().join("settings.conf");
    fs::write(
        &conf,
        "page_size = 1\ndefault_sort = stars\ndefault_sort_direction = desc\nshow_summary = no\n",
    )
    .unwrap();
    let settings = load_settings_from(&conf);
    assert!(!settings.show_summary);

    let data = dir.path().join("repos.json");
    fs::write(
        &data,
        json!({"institutions_data": [{"Nome Completo": "I", "Sigla": "I", "Repositorios": [
            {"Nome do Repositório": "solo", "Estrelas": 3},
            {"Nome do Repositório": "boto", "Estrelas": 9},
            {"Nome do Repositório": "kit", "Estrelas": 50}
        ]}]})
        .to_string(),
    )
    .unwrap();
    let cli = Args::try_parse_from(["repotable", "-s", "o"]).unwrap();
    let store = load_store(&args::resolve_data_path(
        &Args::try_parse_from(["repotable", data.to_str().unwrap()]).unwrap(),
        &settings,
    ), false, settings.top_languages)
    .unwrap();
    let query = args::initial_query(&cli, &settings);
    assert_eq!(query.sort.column, Some(Column::Stars));
    assert_eq!(query.page_size, 1);

    let view = build_view_with(&store, &query, settings.recent_count);
    let out: serde_json::Value = serde_json::from_str(&args::render_json(&view).unwrap()).unwrap();
    assert_eq!(out["page"][0]["name"], "boto");
    assert_eq!(out["pagination"]["total_pages"], 2);
    assert_eq!(out["pagination"]["has_next"], true);
}
