//! Per-interaction output bundle consumed by the renderers.

use crate::index::RecordStore;
use crate::state::{ClusterDescription, LanguageCount, QueryState, Record};

use super::query::{Pagination, run};
use super::summary::{GlobalStats, RECENT_COUNT, global_stats, top_recently_updated};

/// Everything a renderer needs after one interaction.
#[derive(Debug, Clone)]
pub struct TableView<'a> {
    /// Rows of the current page.
    pub page: Vec<&'a Record>,
    /// Headline statistics.
    pub stats: GlobalStats,
    /// Most recently updated records over the full store.
    pub recent: Vec<&'a Record>,
    /// Language ranking computed at load time.
    pub top_languages: &'a [LanguageCount],
    /// Cluster labels sorted by id.
    pub clusters: &'a [ClusterDescription],
    /// Pagination descriptor.
    pub pagination: Pagination,
}

/// What: Run the pipeline for `state` and assemble the renderer's view.
///
/// Inputs:
/// - `store`: Record store built at load time.
/// - `state`: Current query state.
/// - `recent_count`: Size of the recently-updated panel.
///
/// Output:
/// - A [`TableView`] borrowing from `store`.
#[must_use]
pub fn build_view_with<'a>(
    store: &'a RecordStore,
    state: &QueryState,
    recent_count: usize,
) -> TableView<'a> {
    let result = run(store.records(), state);
    TableView {
        stats: global_stats(store.records(), &result.filtered),
        page: result.page,
        recent: top_recently_updated(store.records(), recent_count),
        top_languages: store.top_languages(),
        clusters: store.clusters(),
        pagination: result.pagination,
    }
}

/// Same as [`build_view_with`] using the default panel size.
#[must_use]
pub fn build_view<'a>(store: &'a RecordStore, state: &QueryState) -> TableView<'a> {
    build_view_with(store, state, RECENT_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::RawDocument;

    #[test]
    /// What: The view keeps recent records global while stats follow the filter
    ///
    /// - Input: Store of two repositories; search matching only the undated one
    /// - Output: filtered_count 1, recent panel still lists the dated record
    fn view_recent_ignores_filters() {
        let doc: RawDocument = serde_json::from_value(serde_json::json!({
            "institutions_data": [{
                "Nome Completo": "Inst", "Sigla": "IN",
                "Repositorios": [
                    {"Nome do Repositório": "dated", "Ultima Atualizacao": "2024-01-01T00:00:00Z"},
                    {"Nome do Repositório": "plain"}
                ]
            }]
        }))
        .unwrap();
        let store = RecordStore::build(doc);
        let view = build_view(&store, &QueryState::default().with_search("plain"));
        assert_eq!(view.stats.total_count, 2);
        assert_eq!(view.stats.filtered_count, 1);
        assert_eq!(view.page.len(), 1);
        assert_eq!(view.recent.len(), 1);
        assert_eq!(view.recent[0].name, "dated");
    }
}
