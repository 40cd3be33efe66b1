//! Configuration and palette.
//!
//! `settings.conf` and `theme.conf` are plain `key = value` files under
//! `$HOME/.config/repotable` (or `$XDG_CONFIG_HOME/repotable`).

/// Line-level parsing helpers shared by both files.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings loading.
mod settings;
/// Palette store.
mod store;
/// Settings and palette types.
mod types;

pub use paths::{config_dir, logs_dir};
pub use settings::{load_settings_from, parse_settings, settings};
pub use store::theme;
pub use types::{Settings, Theme};
