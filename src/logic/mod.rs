//! Core non-UI logic split into modular submodules.
//!
//! - `filter`: predicate builder
//! - `sort`: comparator factory
//! - `query`: filter -> sort -> paginate pipeline
//! - `summary`: aggregate statistics
//! - `view`: per-interaction output bundle

pub mod filter;
pub mod query;
pub mod sort;
pub mod summary;
pub mod view;

pub use filter::{Predicate, build_predicate};
pub use query::{Pagination, QueryResult, run};
pub use sort::{build_comparator, compare_records, sort_rows};
pub use summary::{GlobalStats, RECENT_COUNT, global_stats, most_common, top_recently_updated};
pub use view::{TableView, build_view, build_view_with};
