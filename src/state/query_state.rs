//! Filter, sort and pagination inputs of one pipeline run.
//!
//! A [`QueryState`] is immutable per run: every handler borrows the current
//! state and returns a new one. Handlers that change what is shown reset the
//! page to 1.

use std::collections::BTreeMap;

use super::types::Column;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Return the opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Return the string key used in settings files for this direction.
    #[must_use]
    pub const fn as_config_key(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Parse a direction from its settings key or common aliases.
    #[must_use]
    pub fn from_config_key(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" | "up" => Some(Self::Ascending),
            "desc" | "descending" | "down" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// At most one active sort column plus its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    /// Active column; `None` keeps the store's insertion order.
    pub column: Option<Column>,
    /// Direction applied to `column`.
    pub direction: SortDirection,
}

/// Current filter inputs.
///
/// Values are stored as typed by the user; trimming and case folding happen in
/// the predicate builder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Free-text term searched across several fields.
    pub search: String,
    /// Selected language; `None` means "any".
    pub language: Option<String>,
    /// Selected license; `None` means "any".
    pub license: Option<String>,
    /// Per-column prefix filters.
    pub columns: BTreeMap<Column, String>,
}

impl FilterState {
    /// Whether any filter input would restrict the result set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty()
            || self.language.is_some()
            || self.license.is_some()
            || self.columns.values().any(|v| !v.trim().is_empty())
    }
}

/// Complete input of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    /// Filter inputs.
    pub filter: FilterState,
    /// Sort inputs.
    pub sort: SortState,
    /// Requested 1-based page.
    pub page: usize,
    /// Rows per page (at least 1).
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            sort: SortState::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    /// Start from defaults with a custom page size (values below 1 become 1).
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Return a copy showing the first page.
    fn first_page(mut self) -> Self {
        self.page = 1;
        self
    }

    /// Set the free-text search term.
    #[must_use]
    pub fn with_search(&self, term: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.filter.search = term.into();
        next.first_page()
    }

    /// Set the language selector; blank selections mean "any".
    #[must_use]
    pub fn with_language(&self, language: Option<String>) -> Self {
        let mut next = self.clone();
        next.filter.language = language.filter(|l| !l.trim().is_empty());
        next.first_page()
    }

    /// Set the license selector; blank selections mean "any".
    #[must_use]
    pub fn with_license(&self, license: Option<String>) -> Self {
        let mut next = self.clone();
        next.filter.license = license.filter(|l| !l.trim().is_empty());
        next.first_page()
    }

    /// Set or clear (with a blank value) the prefix filter of `column`.
    #[must_use]
    pub fn with_column_filter(&self, column: Column, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let value = value.into();
        if value.is_empty() {
            next.filter.columns.remove(&column);
        } else {
            next.filter.columns.insert(column, value);
        }
        next.first_page()
    }

    /// Set the sort column and direction explicitly.
    #[must_use]
    pub fn with_sort(&self, column: Option<Column>, direction: SortDirection) -> Self {
        let mut next = self.clone();
        next.sort = SortState { column, direction };
        next.first_page()
    }

    /// What: React to a click on a column header.
    ///
    /// Inputs:
    /// - `column`: Header that was activated.
    ///
    /// Output:
    /// - New state; the same column flips direction, a new column sorts ascending.
    #[must_use]
    pub fn toggle_sort(&self, column: Column) -> Self {
        let direction = if self.sort.column == Some(column) {
            self.sort.direction.flipped()
        } else {
            SortDirection::Ascending
        };
        self.with_sort(Some(column), direction)
    }

    /// Advance one page unless already on `total_pages` or beyond.
    #[must_use]
    pub fn next_page(&self, total_pages: usize) -> Self {
        let mut next = self.clone();
        if next.page < total_pages {
            next.page += 1;
        }
        next
    }

    /// Go back one page unless already on the first.
    #[must_use]
    pub fn prev_page(&self) -> Self {
        let mut next = self.clone();
        if next.page > 1 {
            next.page -= 1;
        }
        next
    }

    /// Drop every filter and the sort, keeping the page size.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self::with_page_size(self.page_size)
    }
}
