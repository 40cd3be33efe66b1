//! Terminal browser runtime: terminal setup, the event loop and teardown.

use std::io::Stdout;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::events::handle_event;
use crate::index::RecordStore;
use crate::logic::build_view_with;
use crate::state::{AppState, QueryState};
use crate::theme::Settings;
use crate::ui::ui;

mod terminal;

pub use terminal::{restore_terminal, setup_terminal};

/// Result type used by the runtime glue.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the interactive table browser until the user quits.
///
/// Inputs:
/// - `store`: Loaded record store.
/// - `query`: Initial query (CLI flags and settings already applied).
/// - `settings`: Panel preferences.
///
/// Output:
/// - `Ok(())` on a clean exit; terminal or I/O errors otherwise.
///
/// Details:
/// - The terminal is restored even when the loop fails.
/// - Each iteration runs the whole pipeline, draws one frame and then blocks
///   on the next terminal event.
pub fn run(store: &RecordStore, query: QueryState, settings: &Settings) -> Result<()> {
    setup_terminal()?;
    let mut terminal = match Terminal::new(CrosstermBackend::new(std::io::stdout())) {
        Ok(t) => t,
        Err(e) => {
            restore_terminal()?;
            return Err(e.into());
        }
    };
    let app = AppState::new(query, settings);
    let res = event_loop(&mut terminal, store, app);
    restore_terminal()?;
    let _ = terminal.show_cursor();
    res
}

/// Draw, wait for input, apply it; repeat until a quit key arrives.
fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    store: &RecordStore,
    mut app: AppState,
) -> Result<()> {
    loop {
        let view = build_view_with(store, &app.query, app.recent_count);
        app.sync_view(&view);
        terminal.draw(|f| ui(f, &mut app, &view))?;
        let ev = crossterm::event::read()?;
        if handle_event(&ev, &mut app, store) {
            tracing::info!("quit requested");
            return Ok(());
        }
    }
}
