//! Properties that must hold for any query over the mixed dataset.

use repotable::index::RecordStore;
use repotable::logic::{build_view, run};
use repotable::state::{Column, QueryState, SortDirection};

use crate::fixtures::mixed_store;

/// A spread of query states covering every filter group and sort column.
fn sample_states() -> Vec<QueryState> {
    let base = QueryState::with_page_size(7);
    let mut out = vec![
        base.clone(),
        base.with_search("api"),
        base.with_search("UFB"),
        base.with_language(Some("go".into())),
        base.with_license(Some("MIT".into())),
        base.with_column_filter(Column::Stars, "1"),
        base.with_column_filter(Column::UpdatedAt, "0"),
        base.with_column_filter(Column::Name, "REPO-0"),
    ];
    for column in Column::TABLE {
        out.push(base.with_sort(Some(column), SortDirection::Ascending));
        out.push(base.with_sort(Some(column), SortDirection::Descending));
    }
    out
}

#[test]
/// What: The pipeline is a pure function of its inputs
///
/// - Input: Each sample state run twice
/// - Output: Identical pages, filtered sets and pagination
fn property_idempotent() {
    let store = mixed_store();
    for state in sample_states() {
        let a = run(store.records(), &state);
        let b = run(store.records(), &state);
        assert_eq!(a.page, b.page);
        assert_eq!(a.filtered, b.filtered);
        assert_eq!(a.pagination, b.pagination);
    }
}

#[test]
/// What: Adding a filter never grows the result and equals the intersection
///
/// - Input: Pairs of single-group filters and their combination
/// - Output: Combined count <= each part; combined set = intersection of the parts
fn property_filter_conjunction() {
    let store = mixed_store();
    let base = QueryState::default();
    let parts = [
        base.with_search("api"),
        base.with_language(Some("Go".into())),
        base.with_license(Some("mit".into())),
        base.with_column_filter(Column::Institution, "uf"),
    ];
    for (i, a) in parts.iter().enumerate() {
        for b in parts.iter().skip(i + 1) {
            let mut both = a.clone();
            both.filter.search.clone_from(&if b.filter.search.is_empty() {
                a.filter.search.clone()
            } else {
                b.filter.search.clone()
            });
            both.filter.language = a.filter.language.clone().or_else(|| b.filter.language.clone());
            both.filter.license = a.filter.license.clone().or_else(|| b.filter.license.clone());
            both.filter.columns.extend(b.filter.columns.clone());

            let ra = run(store.records(), a).filtered;
            let rb = run(store.records(), b).filtered;
            let rboth = run(store.records(), &both).filtered;
            assert!(rboth.len() <= ra.len() && rboth.len() <= rb.len());
            let expected: Vec<_> = ra
                .iter()
                .filter(|r| rb.iter().any(|x| std::ptr::eq(*x, **r)))
                .copied()
                .collect();
            assert_eq!(rboth, expected);
        }
    }
}

#[test]
/// What: Equal sort keys keep their pre-sort order
///
/// - Input: Sort by name (seven distinct names over 30 records) both directions
/// - Output: Within each name, store order is preserved
fn property_sort_stability() {
    let store = mixed_store();
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let state = QueryState::with_page_size(100).with_sort(Some(Column::Name), direction);
        let res = run(store.records(), &state);
        let position = |link: &str| store.records().iter().position(|r| r.link == link);
        for pair in res.filtered.windows(2) {
            if pair[0].name.eq_ignore_ascii_case(&pair[1].name) {
                assert!(position(&pair[0].link) < position(&pair[1].link));
            }
        }
    }
}

#[test]
/// What: Concatenating every page rebuilds the filtered-sorted set exactly
///
/// - Input: Each sample state with page size 7, walking all pages
/// - Output: Concatenation equals the filtered set
fn property_pagination_completeness() {
    let store = mixed_store();
    for state in sample_states() {
        let first = run(store.records(), &state);
        let mut pages = Vec::new();
        let mut s = state.clone();
        for _ in 0..first.pagination.total_pages {
            let res = run(store.records(), &s);
            pages.extend(res.page);
            s = s.next_page(res.pagination.total_pages);
        }
        assert_eq!(pages, first.filtered);
    }
}

#[test]
/// What: Sentinel languages never appear in dropdowns or rankings
///
/// - Input: Mixed store with "N/A" and "null" languages and licenses
/// - Output: Neither spelling in language/license sets or the ranking; rows display N/A
fn property_sentinels_excluded() {
    let store: RecordStore = mixed_store();
    for s in ["N/A", "null", ""] {
        assert!(!store.languages().iter().any(|l| l == s));
        assert!(!store.licenses().iter().any(|l| l == s));
        assert!(!store.top_languages().iter().any(|lc| lc.language == s));
    }
    assert!(store.records().iter().any(|r| r.language.is_none()));
    let view = build_view(&store, &QueryState::with_page_size(100));
    assert_ne!(view.stats.most_common_language, "N/A");
    let absent = view.page.iter().find(|r| r.language.is_none()).unwrap();
    assert_eq!(absent.display_text(Column::Language), "N/A");
}
