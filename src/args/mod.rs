//! Command-line argument parsing and the non-interactive output modes.

pub mod definition;
pub mod print;
pub mod utils;

pub use definition::Args;
pub use print::{render_json, render_text};
pub use utils::{
    DEFAULT_DATA_FILE, determine_log_level, initial_query, parse_column, parse_column_filter,
    resolve_data_path,
};
