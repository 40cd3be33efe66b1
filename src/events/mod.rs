//! Key handling for the table browser.
//!
//! Global keys (quit, focus, paging, dropdown filters) live here; input
//! editing and table navigation are delegated to submodules.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::index::RecordStore;
use crate::state::AppState;

mod input;
mod table;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Event read from the terminal.
/// - `app`: Browser state.
/// - `store`: Record store, for dropdown options and the selected row.
///
/// Output:
/// - `true` when the application should exit; otherwise `false`.
///
/// Details:
/// - Only key presses are handled; repeats, releases and other events are ignored.
pub fn handle_event(ev: &CEvent, app: &mut AppState, store: &RecordStore) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }
    if handle_global_key(ke, app, store) {
        return matches!(ke.code, KeyCode::Esc)
            || (ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL));
    }
    match app.focus {
        crate::state::Focus::Search | crate::state::Focus::ColumnFilter => {
            input::handle_input_key(ke, app);
        }
        crate::state::Focus::Table => table::handle_table_key(ke, app, store),
    }
    false
}

/// What: Handle keys that act regardless of focus.
///
/// Inputs:
/// - `ke`: Key press.
/// - `app`: Browser state.
/// - `store`: Dropdown options.
///
/// Output:
/// - `true` when the key was consumed (including quit keys).
fn handle_global_key(ke: &KeyEvent, app: &mut AppState, store: &RecordStore) -> bool {
    match ke.code {
        KeyCode::Esc => {}
        KeyCode::Char('c') if ke.modifiers.contains(KeyModifiers::CONTROL) => {}
        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::F(2) => {
            let next = cycle_option(store.languages(), app.query.filter.language.as_deref());
            tracing::debug!(language = ?next, "language filter changed");
            app.set_query(app.query.with_language(next));
        }
        KeyCode::F(3) => {
            let next = cycle_option(store.licenses(), app.query.filter.license.as_deref());
            tracing::debug!(license = ?next, "license filter changed");
            app.set_query(app.query.with_license(next));
        }
        KeyCode::F(4) => {
            app.set_query(app.query.cleared());
            app.status = Some("Filters cleared".to_string());
        }
        KeyCode::PageDown => {
            let next = app.query.next_page(app.total_pages);
            app.set_query(next);
        }
        KeyCode::PageUp => {
            let prev = app.query.prev_page();
            app.set_query(prev);
        }
        _ => return false,
    }
    true
}

/// What: Advance a dropdown selection.
///
/// Inputs:
/// - `options`: Sorted dropdown values.
/// - `current`: Currently selected value, `None` meaning "all".
///
/// Output:
/// - The value after `current`; `None` ("all") after the last one, the
///   first value after "all" or after a value not in `options`.
fn cycle_option(options: &[String], current: Option<&str>) -> Option<String> {
    match current.and_then(|c| options.iter().position(|o| o == c)) {
        None => options.first().cloned(),
        Some(i) => options.get(i + 1).cloned(),
    }
}
