use crossterm::event::{KeyCode, KeyEvent};

use crate::index::RecordStore;
use crate::logic::run;
use crate::state::{AppState, Column};

/// What: Handle keys while the table has focus.
///
/// Inputs:
/// - `ke`: Key press.
/// - `app`: Browser state.
/// - `store`: Record store, used to resolve the selected row.
///
/// Output:
/// - None; moves the row or header cursor, toggles sorting, pages, or opens
///   the selected repository's link.
pub(super) fn handle_table_key(ke: &KeyEvent, app: &mut AppState, store: &RecordStore) {
    match ke.code {
        KeyCode::Left => {
            app.sort_cursor = (app.sort_cursor + Column::TABLE.len() - 1) % Column::TABLE.len();
        }
        KeyCode::Right => app.sort_cursor = (app.sort_cursor + 1) % Column::TABLE.len(),
        KeyCode::Enter | KeyCode::Char('s') => {
            let column = app.sort_column();
            let next = app.query.toggle_sort(column);
            tracing::debug!(column = column.alias(), direction = ?next.sort.direction, "sort toggled");
            app.set_query(next);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            let sel = app.table.selected().unwrap_or(0);
            app.table.select(Some(sel.saturating_sub(1)));
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let sel = app.table.selected().unwrap_or(0);
            app.table
                .select(Some((sel + 1).min(app.page_len.saturating_sub(1))));
        }
        KeyCode::Home => app.table.select(Some(0)),
        KeyCode::End => app.table.select(Some(app.page_len.saturating_sub(1))),
        KeyCode::Char('n') => {
            let next = app.query.next_page(app.total_pages);
            app.set_query(next);
        }
        KeyCode::Char('p') => {
            let prev = app.query.prev_page();
            app.set_query(prev);
        }
        KeyCode::Char('o') => open_selected(app, store),
        _ => {}
    }
}

/// Open the selected row's repository link in the system browser.
fn open_selected(app: &mut AppState, store: &RecordStore) {
    let Some(row) = app.selected_row() else {
        return;
    };
    let result = run(store.records(), &app.query);
    let Some(record) = result.page.get(row) else {
        return;
    };
    if record.link.is_empty() {
        app.status = Some(format!("{} has no link", record.name));
        return;
    }
    tracing::info!(url = %record.link, "opening repository link");
    crate::util::open_url(&record.link);
    app.status = Some(format!("Opening {}", record.link));
}
