use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, Column, Focus};

/// What: Edit the focused text input.
///
/// Inputs:
/// - `ke`: Key press.
/// - `app`: Browser state; focus is `Search` or `ColumnFilter`.
///
/// Output:
/// - None; printable characters append, Backspace deletes, and in the
///   column filter Left/Right pick the filtered column.
pub(super) fn handle_input_key(ke: &KeyEvent, app: &mut AppState) {
    let column = app.filter_column();
    match (app.focus, ke.code) {
        (Focus::ColumnFilter, KeyCode::Left) => {
            app.filter_column = (app.filter_column + Column::TABLE.len() - 1) % Column::TABLE.len();
        }
        (Focus::ColumnFilter, KeyCode::Right) => {
            app.filter_column = (app.filter_column + 1) % Column::TABLE.len();
        }
        (_, KeyCode::Char(ch))
            if !ke.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut text = current_text(app, column);
            text.push(ch);
            apply_text(app, column, text);
        }
        (_, KeyCode::Backspace) => {
            let mut text = current_text(app, column);
            if text.pop().is_some() {
                apply_text(app, column, text);
            }
        }
        (_, KeyCode::Enter) => app.focus = Focus::Table,
        _ => {}
    }
}

/// Text of the focused input.
fn current_text(app: &AppState, column: Column) -> String {
    match app.focus {
        Focus::ColumnFilter => app
            .query
            .filter
            .columns
            .get(&column)
            .cloned()
            .unwrap_or_default(),
        _ => app.query.filter.search.clone(),
    }
}

/// Store `text` as the focused input's value.
fn apply_text(app: &mut AppState, column: Column, text: String) {
    let next = match app.focus {
        Focus::ColumnFilter => app.query.with_column_filter(column, text),
        _ => app.query.with_search(text),
    };
    app.set_query(next);
}
