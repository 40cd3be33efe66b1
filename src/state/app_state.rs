//! State of the interactive table browser.

use ratatui::widgets::TableState;

use crate::logic::TableView;
use crate::state::{Column, QueryState};
use crate::theme::Settings;

/// Which input receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Free-text search box.
    #[default]
    Search,
    /// Per-column filter input; the column is [`AppState::filter_column`].
    ColumnFilter,
    /// The table itself (row selection, sorting, paging).
    Table,
}

impl Focus {
    /// Next focus in Tab order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Search => Self::ColumnFilter,
            Self::ColumnFilter => Self::Table,
            Self::Table => Self::Search,
        }
    }

    /// Previous focus in Tab order.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Search => Self::Table,
            Self::ColumnFilter => Self::Search,
            Self::Table => Self::ColumnFilter,
        }
    }
}

/// Mutable state held by the terminal browser between frames.
///
/// The query itself is an immutable [`QueryState`] value that is replaced on
/// every change; the remaining fields only track cursor positions and the
/// shape of the last rendered view.
#[derive(Debug, Default)]
pub struct AppState {
    /// Filter, sort and page inputs of the next render.
    pub query: QueryState,
    /// Input receiving key presses.
    pub focus: Focus,
    /// Index into [`Column::TABLE`] edited by the column filter input.
    pub filter_column: usize,
    /// Index into [`Column::TABLE`] highlighted in the header for sorting.
    pub sort_cursor: usize,
    /// Selected row of the current page.
    pub table: TableState,
    /// Rows on the last rendered page.
    pub page_len: usize,
    /// Page count of the last rendered view.
    pub total_pages: usize,
    /// Transient message shown in the footer.
    pub status: Option<String>,
    /// Entries in the recently-updated panel.
    pub recent_count: usize,
    /// Whether the summary panels are visible.
    pub show_summary: bool,
}

impl AppState {
    /// What: Create the browser state.
    ///
    /// Inputs:
    /// - `query`: Initial query (already seeded from CLI flags and settings).
    /// - `settings`: Panel preferences.
    ///
    /// Output:
    /// - State focused on the search box with the first row selected.
    #[must_use]
    pub fn new(query: QueryState, settings: &Settings) -> Self {
        let mut table = TableState::default();
        table.select(Some(0));
        Self {
            query,
            table,
            total_pages: 1,
            recent_count: settings.recent_count,
            show_summary: settings.show_summary,
            ..Self::default()
        }
    }

    /// Column currently edited by the column filter input.
    #[must_use]
    pub fn filter_column(&self) -> Column {
        Column::TABLE[self.filter_column % Column::TABLE.len()]
    }

    /// Column currently highlighted for sorting.
    #[must_use]
    pub fn sort_column(&self) -> Column {
        Column::TABLE[self.sort_cursor % Column::TABLE.len()]
    }

    /// What: Replace the query and reset the row cursor.
    ///
    /// Inputs:
    /// - `query`: New query value.
    ///
    /// Output:
    /// - None; clears any status message.
    pub fn set_query(&mut self, query: QueryState) {
        self.query = query;
        self.table.select(Some(0));
        self.status = None;
    }

    /// What: Record the shape of the view that was just rendered.
    ///
    /// Inputs:
    /// - `view`: Rendered view.
    ///
    /// Output:
    /// - None; keeps the query page in step with the clamped page and the
    ///   row cursor inside the page.
    pub fn sync_view(&mut self, view: &TableView<'_>) {
        self.page_len = view.page.len();
        self.total_pages = view.pagination.total_pages;
        self.query.page = view.pagination.current_page;
        let selected = self.table.selected().unwrap_or(0);
        self.table
            .select(Some(selected.min(self.page_len.saturating_sub(1))));
    }

    /// Index of the selected row within the current page, if the page has rows.
    #[must_use]
    pub fn selected_row(&self) -> Option<usize> {
        if self.page_len == 0 {
            return None;
        }
        self.table.selected()
    }
}
