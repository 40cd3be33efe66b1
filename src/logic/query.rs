use serde::Serialize;

use crate::state::{QueryState, Record};

use super::filter::Predicate;
use super::sort::sort_rows;

/// What: Pagination descriptor handed to the renderers.
///
/// Details:
/// - `total_pages` is at least 1 so an empty result still shows "page 1 of 1".
/// - `start..end` is the 0-based item range of the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Page actually shown, clamped into `1..=total_pages`.
    pub current_page: usize,
    /// Number of pages for display purposes (minimum 1).
    pub total_pages: usize,
    /// Number of filtered items.
    pub total_items: usize,
    /// Rows per page.
    pub page_size: usize,
    /// First item index of the page.
    pub start: usize,
    /// One past the last item index of the page.
    pub end: usize,
    /// Whether a previous page exists.
    pub has_prev: bool,
    /// Whether a next page exists.
    pub has_next: bool,
}

impl Pagination {
    /// What: Compute the descriptor for `total_items` rows.
    ///
    /// Inputs:
    /// - `total_items`: Size of the filtered set.
    /// - `requested_page`: 1-based page asked for by the caller.
    /// - `page_size`: Rows per page (values below 1 are treated as 1).
    ///
    /// Output:
    /// - Descriptor with the page clamped into range.
    #[must_use]
    pub fn compute(total_items: usize, requested_page: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let real_pages = total_items.div_ceil(page_size);
        let total_pages = real_pages.max(1);
        let current_page = requested_page.clamp(1, total_pages);
        let start = ((current_page - 1) * page_size).min(total_items);
        let end = (start + page_size).min(total_items);
        Self {
            current_page,
            total_pages,
            total_items,
            page_size,
            start,
            end,
            has_prev: current_page > 1,
            has_next: current_page < real_pages,
        }
    }
}

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    /// Rows of the current page.
    pub page: Vec<&'a Record>,
    /// Every row that passed the filters, in sorted order.
    pub filtered: Vec<&'a Record>,
    /// Pagination descriptor.
    pub pagination: Pagination,
}

/// What: Run filter, sort and pagination over `records`.
///
/// Inputs:
/// - `records`: Full record list in store order.
/// - `state`: Filter, sort and page inputs of this run.
///
/// Output:
/// - The current page, the full filtered-sorted set and the pagination descriptor.
///
/// Details:
/// - Pure: identical inputs give identical output.
/// - Sorting is stable, so rows with equal keys keep their store order.
/// - A page outside `1..=total_pages` is clamped rather than producing an empty slice.
#[must_use]
pub fn run<'a>(records: &'a [Record], state: &QueryState) -> QueryResult<'a> {
    let predicate = Predicate::new(&state.filter);
    let mut filtered: Vec<&Record> = records.iter().filter(|r| predicate.matches(r)).collect();
    sort_rows(&mut filtered, state.sort);

    let pagination = Pagination::compute(filtered.len(), state.page, state.page_size);
    if pagination.current_page != state.page {
        tracing::debug!(
            requested = state.page,
            shown = pagination.current_page,
            "requested page out of range; clamped"
        );
    }
    let page = filtered[pagination.start..pagination.end].to_vec();
    tracing::debug!(
        total = records.len(),
        filtered = filtered.len(),
        page = pagination.current_page,
        pages = pagination.total_pages,
        "query pipeline run"
    );
    QueryResult {
        page,
        filtered,
        pagination,
    }
}
