use std::path::PathBuf;

use tracing::warn;

use crate::state::{Column, SortDirection};
use crate::theme::parsing::{parse_bool, split_assignment, strip_inline_comment};
use crate::theme::types::Settings;

/// What: Parse settings from `settings.conf` content.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Settings to populate; fields keep their value when a key is
///   missing or invalid.
///
/// Output:
/// - None (modifies `settings` in-place).
///
/// Details:
/// - Accepts `key = value` lines; `#` and `//` start comments.
/// - Keys are case-insensitive and `.`, `-`, ` ` are treated as `_`.
/// - Unknown keys and invalid values are logged and skipped.
/// - `default_sort` accepts a column alias (`stars`) or its dataset key
///   (`Estrelas`); `none` clears it.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for (line_no, line) in content.lines().enumerate() {
        let Some((key, raw_val)) = split_assignment(line) else {
            continue;
        };
        let val = strip_inline_comment(raw_val);
        let line_no = line_no + 1;
        match key.as_str() {
            "data_path" | "data" | "dataset" => {
                settings.data_path = (!val.is_empty()).then(|| expand_home(val));
            }
            "page_size" | "rows_per_page" => match val.parse::<usize>() {
                Ok(v) if v > 0 => settings.page_size = v,
                _ => warn!(line = line_no, value = val, "[Config] invalid page_size"),
            },
            "default_sort" | "sort" => {
                if val.is_empty() || val.eq_ignore_ascii_case("none") {
                    settings.default_sort = None;
                } else if let Some(col) = Column::from_key(val) {
                    settings.default_sort = Some(col);
                } else {
                    warn!(line = line_no, value = val, "[Config] unknown default_sort column");
                }
            }
            "default_sort_direction" | "sort_direction" => {
                if let Some(dir) = SortDirection::from_config_key(val) {
                    settings.default_sort_direction = dir;
                } else {
                    warn!(line = line_no, value = val, "[Config] invalid default_sort_direction");
                }
            }
            "top_languages" => match val.parse::<usize>() {
                Ok(v) => settings.top_languages = v,
                Err(_) => warn!(line = line_no, value = val, "[Config] invalid top_languages"),
            },
            "recent_count" => match val.parse::<usize>() {
                Ok(v) => settings.recent_count = v,
                Err(_) => warn!(line = line_no, value = val, "[Config] invalid recent_count"),
            },
            "show_summary" => {
                if let Some(b) = parse_bool(val) {
                    settings.show_summary = b;
                } else {
                    warn!(line = line_no, value = val, "[Config] invalid show_summary");
                }
            }
            _ => warn!(line = line_no, key = key.as_str(), "[Config] unknown settings key"),
        }
    }
}

/// Expand a leading `~/` using `$HOME`.
fn expand_home(val: &str) -> PathBuf {
    if let Some(rest) = val.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(rest);
    }
    PathBuf::from(val)
}
