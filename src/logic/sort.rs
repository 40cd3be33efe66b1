use std::cmp::Ordering;

use crate::state::{CellValue, Column, ColumnKind, Record, SortDirection, SortState};
use crate::util::parse_timestamp;

/// Normalized sort key of one cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    /// Integer and timestamp columns.
    Number(i64),
    /// Text columns, lower-cased.
    Text(String),
}

/// What: Coerce a record's cell into its sort key.
///
/// Inputs:
/// - `record`: Record to read.
/// - `column`: Active sort column.
///
/// Output:
/// - Numeric key for integer/timestamp columns, lower-cased text otherwise.
///
/// Details:
/// - Absent values become `0` (numeric) or `""` (text).
/// - Unparseable timestamps become `0`.
fn sort_key(record: &Record, column: Column) -> SortKey {
    let cell = record.cell(column);
    match column.kind() {
        ColumnKind::Integer => SortKey::Number(match cell {
            CellValue::Integer(n) => n,
            CellValue::Text(s) => s.trim().parse().unwrap_or(0),
            CellValue::Timestamp(_) | CellValue::Absent => 0,
        }),
        ColumnKind::Timestamp => SortKey::Number(match cell {
            CellValue::Timestamp(s) | CellValue::Text(s) => parse_timestamp(s).unwrap_or(0),
            CellValue::Integer(n) => n,
            CellValue::Absent => 0,
        }),
        ColumnKind::Text => SortKey::Text(match cell {
            CellValue::Text(s) | CellValue::Timestamp(s) => s.to_lowercase(),
            CellValue::Integer(n) => n.to_string(),
            CellValue::Absent => String::new(),
        }),
    }
}

/// What: Compare two records on `column` in `direction`.
///
/// Inputs:
/// - `a`, `b`: Records to compare.
/// - `column`: Sort column.
/// - `direction`: Ascending or descending.
///
/// Output:
/// - `Ordering`; equal keys yield `Ordering::Equal` in both directions.
#[must_use]
pub fn compare_records(a: &Record, b: &Record, column: Column, direction: SortDirection) -> Ordering {
    let ord = sort_key(a, column).cmp(&sort_key(b, column));
    match direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// What: Build a comparator for the given sort state.
///
/// Inputs:
/// - `sort`: Active column (if any) and direction.
///
/// Output:
/// - A comparator; with no active column it always returns `Ordering::Equal`,
///   so a stable sort keeps the input order.
pub fn build_comparator(sort: SortState) -> impl Fn(&Record, &Record) -> Ordering {
    move |a: &Record, b: &Record| match sort.column {
        Some(column) => compare_records(a, b, column, sort.direction),
        None => Ordering::Equal,
    }
}

/// What: Sort `rows` in place according to `sort`.
///
/// Inputs:
/// - `rows`: Filtered rows, in filter order.
/// - `sort`: Active sort state.
///
/// Output:
/// - `rows` reordered; untouched when no column is active.
///
/// Details:
/// - Uses the stable `sort_by`, so rows with equal keys keep their filtered order.
pub fn sort_rows(rows: &mut [&Record], sort: SortState) {
    if sort.column.is_none() {
        return;
    }
    let cmp = build_comparator(sort);
    rows.sort_by(|a, b| cmp(*a, *b));
}
