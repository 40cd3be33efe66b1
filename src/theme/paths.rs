use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the configuration base.
const APP_DIR: &str = "repotable";

/// What: List candidate locations of a configuration file.
///
/// Inputs:
/// - `home`: Value of `$HOME`, if set.
/// - `xdg_config`: Value of `$XDG_CONFIG_HOME`, if set.
/// - `file`: File name such as `settings.conf`.
///
/// Output:
/// - Candidates in priority order: `$HOME/.config/repotable/<file>` first,
///   then `$XDG_CONFIG_HOME/repotable/<file>`.
fn config_candidates(home: Option<&str>, xdg_config: Option<&str>, file: &str) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.filter(|h| !h.trim().is_empty()) {
        candidates.push(Path::new(h).join(".config").join(APP_DIR).join(file));
    }
    if let Some(x) = xdg_config.filter(|x| !x.trim().is_empty()) {
        candidates.push(Path::new(x).join(APP_DIR).join(file));
    }
    candidates
}

/// Return the first existing `file` among the configuration candidates.
fn resolve_config_file(file: &str) -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    config_candidates(home.as_deref(), xdg_config.as_deref(), file)
        .into_iter()
        .find(|p| p.is_file())
}

/// Locate `settings.conf`, if the user has one.
pub(crate) fn resolve_settings_config_path() -> Option<PathBuf> {
    resolve_config_file("settings.conf")
}

/// Locate `theme.conf`, if the user has one.
pub(crate) fn resolve_theme_config_path() -> Option<PathBuf> {
    resolve_config_file("theme.conf")
}

/// What: Resolve an XDG base directory from the environment.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Path segments below `$HOME` used when `var` is unset or empty.
///
/// Output: Resolved base directory.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// Configuration directory, `$HOME/.config/repotable` when HOME is usable
/// (ensured to exist), else `$XDG_CONFIG_HOME/repotable`.
pub fn config_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let dir = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
