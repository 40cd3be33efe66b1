use ratatui::style::Color;

/// What: Normalize a configuration key.
///
/// Inputs:
/// - `raw`: Key text left of the `=`.
///
/// Output:
/// - Lower-cased key with `.`, `-` and spaces replaced by `_`.
pub(crate) fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['.', '-', ' '], "_")
}

/// What: Split a configuration line into a normalized key and its value.
///
/// Inputs:
/// - `line`: One raw line of a `key = value` file.
///
/// Output:
/// - `Some((key, value))` for assignments; `None` for blanks, comments and
///   lines without `=`.
///
/// Details:
/// - The value is trimmed but inline comments are left for the caller, since
///   color values may begin with `#`.
pub(crate) fn split_assignment(line: &str) -> Option<(String, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
        return None;
    }
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    Some((normalize_key(raw_key), raw_val.trim()))
}

/// What: Strip a trailing `// ...` or `# ...` comment from a value.
///
/// Inputs:
/// - `s`: Raw value text.
///
/// Output:
/// - The value without its comment, trimmed.
///
/// Details:
/// - A leading `#` is kept so hex colors survive; only a later `#` starts a comment.
pub(crate) fn strip_inline_comment(mut s: &str) -> &str {
    if let Some(i) = s.find("//") {
        s = &s[..i];
    }
    if let Some(i_rel) = if let Some(stripped) = s.strip_prefix('#') {
        stripped.find('#').map(|j| j + 1)
    } else {
        s.find('#')
    } {
        s = &s[..i_rel];
    }
    s.trim()
}

/// Parse `true|1|yes|on` (any case) as `true`, `false|0|no|off` as `false`.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// What: Parse a color given as `#RRGGBB`, `RRGGBB` or `R,G,B`.
///
/// Inputs:
/// - `s`: Raw value, possibly followed by an inline comment.
///
/// Output:
/// - `Some(Color::Rgb)` on success; `None` otherwise.
pub(crate) fn parse_color_value(s: &str) -> Option<Color> {
    let t = strip_inline_comment(s);
    if t.is_empty() {
        return None;
    }
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    let parts: Vec<&str> = t.split(',').map(str::trim).collect();
    if let [r, g, b] = parts.as_slice() {
        return Some(Color::Rgb(r.parse().ok()?, g.parse().ok()?, b.parse().ok()?));
    }
    None
}
