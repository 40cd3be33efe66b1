//! Helpers turning parsed arguments into runtime inputs.

use std::path::PathBuf;

use crate::state::{Column, QueryState, SortDirection};
use crate::theme::Settings;

use super::Args;

/// Dataset file looked up in the working directory when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "repositorios_federais_com_clusters_visualizado.json";

/// What: Determine the log level from command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - The verbose flag overrides `--log-level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Parse a column name for `--sort`.
///
/// Inputs:
/// - `s`: Column key or alias.
///
/// Output:
/// - The column, or a message listing the accepted aliases.
///
/// # Errors
/// - Returns `Err` when `s` names no column.
pub fn parse_column(s: &str) -> Result<Column, String> {
    Column::from_key(s).ok_or_else(|| {
        let names: Vec<&str> = Column::ALL.iter().map(|c| c.alias()).collect();
        format!("unknown column '{s}' (expected one of: {})", names.join(", "))
    })
}

/// What: Parse a `COLUMN=VALUE` column filter.
///
/// Inputs:
/// - `s`: Raw argument.
///
/// Output:
/// - Column and prefix value (kept verbatim, may be empty).
///
/// # Errors
/// - Returns `Err` when `=` is missing or the column is unknown.
pub fn parse_column_filter(s: &str) -> Result<(Column, String), String> {
    let (col, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected COLUMN=VALUE, got '{s}'"))?;
    Ok((parse_column(col)?, value.to_string()))
}

/// What: Pick the dataset path.
///
/// Inputs:
/// - `args`: Parsed arguments.
/// - `settings`: Loaded settings.
///
/// Output:
/// - Positional file, else `--data`, else `data_path` from settings, else
///   [`DEFAULT_DATA_FILE`].
#[must_use]
pub fn resolve_data_path(args: &Args, settings: &Settings) -> PathBuf {
    args.file
        .clone()
        .or_else(|| args.data.clone())
        .or_else(|| settings.data_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
}

/// What: Build the first query of the session.
///
/// Inputs:
/// - `args`: Parsed arguments.
/// - `settings`: Loaded settings.
///
/// Output:
/// - Query seeded from settings (page size, default sort) with every
///   command-line flag applied on top.
///
/// Details:
/// - The page is applied last because every filter or sort change returns to page 1.
#[must_use]
pub fn initial_query(args: &Args, settings: &Settings) -> QueryState {
    let page_size = args.page_size.unwrap_or(settings.page_size);
    let mut q = QueryState::with_page_size(page_size)
        .with_sort(settings.default_sort, settings.default_sort_direction);
    if let Some(column) = args.sort {
        let direction = if args.desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        q = q.with_sort(Some(column), direction);
    } else if args.desc && q.sort.column.is_some() {
        q = q.with_sort(q.sort.column, SortDirection::Descending);
    }
    if let Some(term) = &args.search {
        q = q.with_search(term.clone());
    }
    if args.language.is_some() {
        q = q.with_language(args.language.clone());
    }
    if args.license.is_some() {
        q = q.with_license(args.license.clone());
    }
    for (column, value) in &args.filters {
        q = q.with_column_filter(*column, value.clone());
    }
    if let Some(page) = args.page {
        q.page = page.max(1);
    }
    q
}
