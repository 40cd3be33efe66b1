use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::theme::paths::resolve_settings_config_path;
use crate::theme::types::Settings;

mod parse_settings;

pub use parse_settings::parse_settings;

/// Settings resolved once per process.
static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// What: Load settings from a specific file.
///
/// Inputs:
/// - `path`: Location of a `settings.conf`.
///
/// Output:
/// - Parsed `Settings`; defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings_from(path: &Path) -> Settings {
    let mut out = Settings::default();
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "[Config] Loaded settings.conf");
            parse_settings(&content, &mut out);
        }
        Err(e) => warn!(
            path = %path.display(),
            error = %e,
            "[Config] settings.conf unreadable, using defaults"
        ),
    }
    out
}

/// What: Return the user's settings from `settings.conf` under HOME/XDG.
///
/// Inputs:
/// - None
///
/// Output:
/// - A `Settings` value; `Settings::default()` when no file exists.
///
/// Details:
/// - The file is read on the first call only; later calls return the cached value.
#[must_use]
pub fn settings() -> Settings {
    SETTINGS
        .get_or_init(|| {
            resolve_settings_config_path().map_or_else(
                || {
                    debug!("[Config] no settings.conf found, using defaults");
                    Settings::default()
                },
                |p| load_settings_from(&p),
            )
        })
        .clone()
}
