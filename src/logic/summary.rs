use std::collections::HashMap;

use serde::Serialize;

use crate::state::Record;
use crate::util::{NOT_AVAILABLE, parse_timestamp};

/// Number of rows in the "recently updated" panel.
pub const RECENT_COUNT: usize = 10;

/// Headline numbers shown above the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalStats {
    /// Size of the full, unfiltered store.
    pub total_count: usize,
    /// Size of the filtered set.
    pub filtered_count: usize,
    /// Most common language in the filtered set, or `N/A`.
    pub most_common_language: String,
    /// Most common license in the filtered set, or `N/A`.
    pub most_common_license: String,
}

/// What: Return the most frequent value in `values`.
///
/// Inputs:
/// - `values`: Sequence of values in scan order.
///
/// Output:
/// - The most frequent value; `N/A` for an empty sequence.
///
/// Details:
/// - Single left-to-right scan: a value takes the lead only when its count
///   strictly exceeds the current maximum, so the first value to reach a
///   maximum keeps it on ties.
pub fn most_common<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut best: Option<&str> = None;
    let mut max = 0usize;
    for v in values {
        let c = counts.entry(v).or_insert(0);
        *c += 1;
        if *c > max {
            max = *c;
            best = Some(v);
        }
    }
    best.map_or_else(|| NOT_AVAILABLE.to_string(), ToString::to_string)
}

/// What: Compute the headline statistics.
///
/// Inputs:
/// - `all`: Every record in the store.
/// - `filtered`: Records that passed the current filters.
///
/// Output:
/// - Total count from `all`; the remaining fields from `filtered`, ignoring absent values.
#[must_use]
pub fn global_stats(all: &[Record], filtered: &[&Record]) -> GlobalStats {
    GlobalStats {
        total_count: all.len(),
        filtered_count: filtered.len(),
        most_common_language: most_common(filtered.iter().filter_map(|r| r.language.as_deref())),
        most_common_license: most_common(filtered.iter().filter_map(|r| r.license.as_deref())),
    }
}

/// What: Pick the `k` most recently updated records.
///
/// Inputs:
/// - `all`: The full record list; current filters never apply here.
/// - `k`: Maximum number of records.
///
/// Output:
/// - Records that have an update timestamp, newest first.
///
/// Details:
/// - Unparseable timestamps count as the oldest; ties keep store order.
#[must_use]
pub fn top_recently_updated(all: &[Record], k: usize) -> Vec<&Record> {
    let mut dated: Vec<(i64, &Record)> = all
        .iter()
        .filter_map(|r| {
            r.updated_at
                .as_deref()
                .map(|ts| (parse_timestamp(ts).unwrap_or(0), r))
        })
        .collect();
    dated.sort_by(|a, b| b.0.cmp(&a.0));
    dated.into_iter().take(k).map(|(_, r)| r).collect()
}
