//! Modularized state module.
//!
//! Value types of the table live in `types`, per-run query inputs in
//! `query_state`, and the terminal browser's state in `app_state`.

pub mod app_state;
pub mod query_state;
pub mod types;

pub use app_state::{AppState, Focus};
pub use query_state::{DEFAULT_PAGE_SIZE, FilterState, QueryState, SortDirection, SortState};
pub use types::{
    CellValue, ClusterDescription, Column, ColumnKind, LanguageCount, RawDocument,
    RawInstitution, Record,
};
