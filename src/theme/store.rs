use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::parsing::{parse_color_value, split_assignment};
use super::paths::resolve_theme_config_path;
use super::types::Theme;

/// Palette resolved once per process.
static THEME_STORE: OnceLock<Theme> = OnceLock::new();

/// What: Apply `theme.conf` overrides on top of the default palette.
///
/// Inputs:
/// - `content`: File content with `key = color` lines.
///
/// Output:
/// - The palette plus a list of human-readable problems (unknown keys, bad colors).
pub(crate) fn parse_theme(content: &str) -> (Theme, Vec<String>) {
    let mut t = Theme::default();
    let mut errors = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let Some((key, val)) = split_assignment(line) else {
            continue;
        };
        let Some(color) = parse_color_value(val) else {
            errors.push(format!("invalid color for '{key}' on line {}", idx + 1));
            continue;
        };
        let slot = match key.as_str() {
            "base" | "background" => &mut t.base,
            "mantle" | "panel" => &mut t.mantle,
            "surface1" | "selection" => &mut t.surface1,
            "overlay1" | "border" => &mut t.overlay1,
            "text" => &mut t.text,
            "subtext0" | "muted" => &mut t.subtext0,
            "sapphire" | "focus" => &mut t.sapphire,
            "mauve" | "header" => &mut t.mauve,
            "green" => &mut t.green,
            "yellow" => &mut t.yellow,
            "red" | "error" => &mut t.red,
            "lavender" | "title" => &mut t.lavender,
            _ => {
                errors.push(format!("unknown key '{key}' on line {}", idx + 1));
                continue;
            }
        };
        *slot = color;
    }
    (t, errors)
}

/// Read a palette file, logging each problem it contains.
fn load_theme_from(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(content) => {
            let (t, errors) = parse_theme(&content);
            for e in &errors {
                tracing::warn!(path = %path.display(), "[Theme] {e}");
            }
            tracing::info!(path = %path.display(), "loaded theme configuration");
            t
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "[Theme] theme.conf unreadable");
            Theme::default()
        }
    }
}

/// Return the application's palette.
///
/// `theme.conf` under the configuration directory may override any color with
/// `#RRGGBB` or `R,G,B` values; anything else keeps the built-in palette.
pub fn theme() -> Theme {
    *THEME_STORE.get_or_init(|| {
        resolve_theme_config_path().map_or_else(Theme::default, |p| load_theme_from(&p))
    })
}
