//! Worked examples of the table behaviour.

use repotable::index::RecordStore;
use repotable::logic::{build_view, run};
use repotable::state::{Column, LanguageCount, QueryState, Record, SortDirection};
use serde_json::json;

use crate::fixtures::{doc, repo};

#[test]
/// What: Two institutions with one Go repository each rank Go with count 2
///
/// - Input: Two institutions, one repository each, both Go
/// - Output: Ranking [Go: 2]; each record carries its institution
fn scenario_top_languages_across_institutions() {
    let store = RecordStore::build(doc(json!([
        {"Nome Completo": "Universidade A", "Sigla": "UA", "Repositorios": [repo("a", "Go", 1)]},
        {"Nome Completo": "Universidade B", "Sigla": "UB", "Repositorios": [repo("b", "Go", 2)]}
    ])));
    assert_eq!(
        store.top_languages(),
        &[LanguageCount {
            language: "Go".into(),
            count: 2
        }]
    );
    assert_eq!(store.records()[0].institution_code, "UA");
    assert_eq!(store.records()[1].institution, "Universidade B");
}

#[test]
/// What: Free-text search is a case-insensitive substring match
///
/// - Input: Three records, one named "API Gateway"; search "api"
/// - Output: One match
fn scenario_search_api() {
    let store = RecordStore::build(doc(json!([{
        "Nome Completo": "Inst", "Sigla": "IN",
        "Repositorios": [repo("API Gateway", "Go", 1), repo("portal", "PHP", 2), repo("sensors", "C", 3)]
    }])));
    let res = run(store.records(), &QueryState::default().with_search("api"));
    assert_eq!(res.filtered.len(), 1);
    assert_eq!(res.filtered[0].name, "API Gateway");
}

#[test]
/// What: Star column filters use prefix semantics on the decimal text
///
/// - Input: Records with 100, 10 and 5 stars; column filter Estrelas = "10"
/// - Output: 100 and 10 match, 5 does not
fn scenario_star_prefix_filter() {
    let store = RecordStore::build(doc(json!([{
        "Nome Completo": "Inst", "Sigla": "IN",
        "Repositorios": [repo("hundred", "Go", 100), repo("ten", "Go", 10), repo("five", "Go", 5)]
    }])));
    let res = run(
        store.records(),
        &QueryState::default().with_column_filter(Column::Stars, "10"),
    );
    let names: Vec<&str> = res.filtered.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["hundred", "ten"]);
}

#[test]
/// What: A record without an update date sorts last in descending order
///
/// - Input: Two dated records and one without the field; sort updated desc
/// - Output: Newest, older, then the undated record
fn scenario_updated_desc_missing_last() {
    let store = RecordStore::build(doc(json!([{
        "Nome Completo": "Inst", "Sigla": "IN",
        "Repositorios": [
            {"Nome do Repositório": "undated"},
            {"Nome do Repositório": "older", "Ultima Atualizacao": "2022-03-01T00:00:00Z"},
            {"Nome do Repositório": "newer", "Ultima Atualizacao": "2024-03-01T00:00:00Z"}
        ]
    }])));
    let state = QueryState::default().with_sort(Some(Column::UpdatedAt), SortDirection::Descending);
    let res = run(store.records(), &state);
    let names: Vec<&str> = res.page.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["newer", "older", "undated"]);
}

#[test]
/// What: 120 records split into pages of 50, 50 and 20
///
/// - Input: 120 records, pages 1 to 3
/// - Output: Item ranges 0-49, 50-99, 100-119 and three pages
fn scenario_pagination_of_120() {
    let repos: Vec<_> = (0..120).map(|i| repo(&format!("r{i:03}"), "Go", i)).collect();
    let store = RecordStore::build(doc(json!([{"Nome Completo": "I", "Sigla": "I", "Repositorios": repos}])));
    let mut state = QueryState::default();
    let mut seen: Vec<Vec<String>> = Vec::new();
    for _ in 0..3 {
        let res = run(store.records(), &state);
        assert_eq!(res.pagination.total_pages, 3);
        seen.push(res.page.iter().map(|r| r.name.clone()).collect());
        state = state.next_page(res.pagination.total_pages);
    }
    assert_eq!(seen[0].first().map(String::as_str), Some("r000"));
    assert_eq!(seen[0].last().map(String::as_str), Some("r049"));
    assert_eq!(seen[1].first().map(String::as_str), Some("r050"));
    assert_eq!(seen[1].last().map(String::as_str), Some("r099"));
    assert_eq!(seen[2].len(), 20);
    assert_eq!(seen[2].last().map(String::as_str), Some("r119"));
    assert_eq!(state.page, 3);
}

#[test]
/// What: An empty result shows one page with both controls disabled
///
/// - Input: Search that matches nothing
/// - Output: Page 1 of 1, no prev, no next, stats report N/A
fn scenario_empty_result() {
    let store = RecordStore::build(doc(json!([{
        "Nome Completo": "Inst", "Sigla": "IN", "Repositorios": [repo("a", "Go", 1)]
    }])));
    let view = build_view(&store, &QueryState::default().with_search("nothing-matches"));
    assert!(view.page.is_empty());
    assert_eq!(view.pagination.total_pages, 1);
    assert!(!view.pagination.has_prev);
    assert!(!view.pagination.has_next);
    assert_eq!(view.stats.total_count, 1);
    assert_eq!(view.stats.filtered_count, 0);
    assert_eq!(view.stats.most_common_language, "N/A");
}

#[test]
/// What: Shrinking the result set from a later page returns to page 1
///
/// - Input: On page 3 of 120 records, then a search leaving 10 records
/// - Output: Page 1 showing the 10 matches
fn scenario_filter_change_resets_page() {
    let repos: Vec<_> = (0..120).map(|i| repo(&format!("r{i:03}"), "Go", i)).collect();
    let store = RecordStore::build(doc(json!([{"Nome Completo": "I", "Sigla": "I", "Repositorios": repos}])));
    let mut state = QueryState::default();
    state.page = 3;
    let state = state.with_search("r01");
    let res = run(store.records(), &state);
    assert_eq!(state.page, 1);
    assert_eq!(res.page.len(), 10);
    let first: &Record = res.page[0];
    assert_eq!(first.name, "r010");
}
