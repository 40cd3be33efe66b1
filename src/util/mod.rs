//! Small utility helpers for sentinel normalization, JSON value coercion, and time formatting.
//!
//! The functions in this module are used at the ingestion boundary (record
//! store), by the filter/sort logic, and by the rendering code.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Placeholder shown wherever a value is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// What: Decide whether a raw text value is one of the "unknown" sentinels.
///
/// Inputs:
/// - `raw`: Text taken from the input document.
///
/// Output:
/// - `true` for blank text, `"N/A"` and `"null"` (case-insensitive); `false` otherwise.
#[must_use]
pub fn is_sentinel(raw: &str) -> bool {
    let t = raw.trim();
    t.is_empty() || t.eq_ignore_ascii_case(NOT_AVAILABLE) || t.eq_ignore_ascii_case("null")
}

/// What: Extract a text field from a JSON object, folding every sentinel form into `None`.
///
/// Inputs:
/// - `v`: JSON object to read from.
/// - `key`: Key to look up.
///
/// Output:
/// - `Some(text)` for a meaningful value, `None` for a missing key, JSON `null`,
///   or a sentinel string.
///
/// Details:
/// - Numbers and booleans are stringified so a mistyped field still renders.
/// - Arrays and objects are treated as absent.
#[must_use]
pub fn text_of(v: &Value, key: &str) -> Option<String> {
    match v.get(key)? {
        Value::String(s) if !is_sentinel(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// What: Extract a non-negative integer from a JSON object.
///
/// Inputs:
/// - `v`: JSON object to read from.
/// - `key`: Key to look up.
///
/// Output:
/// - `Some(u64)` when the value is a JSON unsigned integer, a non-negative
///   `i64`, a float with no fractional part, or a numeric string; `None` otherwise.
#[must_use]
pub fn u64_of(v: &Value, key: &str) -> Option<u64> {
    let n = v.get(key)?;
    if let Some(u) = n.as_u64() {
        return Some(u);
    }
    if let Some(i) = n.as_i64()
        && let Ok(u) = u64::try_from(i)
    {
        return Some(u);
    }
    if let Some(f) = n.as_f64()
        && f >= 0.0
        && f.fract() == 0.0
        && f <= 9_007_199_254_740_992.0
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        return Some(f as u64);
    }
    n.as_str().and_then(|s| s.trim().parse::<u64>().ok())
}

/// What: Extract a signed integer identifier from a JSON object.
///
/// Inputs:
/// - `v`: JSON object to read from.
/// - `key`: Key to look up.
///
/// Output:
/// - `Some(i64)` for a JSON integer, an integral float, or an integer-like string;
///   `None` for sentinels and anything else.
#[must_use]
pub fn i64_of(v: &Value, key: &str) -> Option<i64> {
    let n = v.get(key)?;
    if let Some(i) = n.as_i64() {
        return Some(i);
    }
    if let Some(f) = n.as_f64()
        && f.fract() == 0.0
        && f.abs() <= 9_007_199_254_740_992.0
    {
        #[allow(clippy::cast_possible_truncation)]
        return Some(f as i64);
    }
    n.as_str().and_then(|s| s.trim().parse::<i64>().ok())
}

/// What: Parse an ISO-like timestamp into epoch milliseconds.
///
/// Inputs:
/// - `raw`: Timestamp text, e.g. `2024-05-01T12:00:00Z`.
///
/// Output:
/// - `Some(millis)` on success; `None` when the text is not a recognised timestamp.
///
/// Details:
/// - Accepts RFC 3339 (with `Z` or an offset), naive `YYYY-MM-DDTHH:MM:SS[.fff]`
///   and bare `YYYY-MM-DD`. Naive forms are read as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    parse_datetime(raw).map(|dt| dt.timestamp_millis())
}

/// Parse `raw` into a UTC date-time using the formats accepted by [`parse_timestamp`].
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let t = raw.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(t, fmt) {
            return Some(ndt.and_utc());
        }
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

/// What: Format a timestamp as a Brazilian short date (`DD/MM/YYYY`).
///
/// Inputs:
/// - `raw`: Timestamp text as found on the record.
///
/// Output:
/// - The formatted date, or the raw text unchanged when it cannot be parsed.
///
/// Details:
/// - Computed in UTC so the output does not depend on the host time zone.
#[must_use]
pub fn format_short_date(raw: &str) -> String {
    parse_datetime(raw).map_or_else(|| raw.to_string(), |dt| dt.format("%d/%m/%Y").to_string())
}

/// What: Truncate `text` so that it fits into `max_width` terminal cells.
///
/// Inputs:
/// - `text`: Text to fit.
/// - `max_width`: Available width in cells.
///
/// Output:
/// - The text itself when it fits; otherwise a prefix ending in `…`.
#[must_use]
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// What: Open a URL in the default browser (cross-platform).
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - No return value; spawns a background process to open the URL.
///
/// Details:
/// - On Windows, uses `cmd /c start`; on Linux `xdg-open`, falling back to `open` (macOS).
/// - A launcher that fails to start is logged at warn level.
/// - During tests, this is a no-op to avoid opening real browser windows.
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            let spawned = std::process::Command::new("cmd")
                .args(["/c", "start", "", &url])
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn();
            #[cfg(not(target_os = "windows"))]
            let spawned = std::process::Command::new("xdg-open")
                .arg(&url)
                .stdin(std::process::Stdio::null())
                .stdout(std::process::Stdio::null())
                .stderr(std::process::Stdio::null())
                .spawn()
                .or_else(|_| {
                    std::process::Command::new("open")
                        .arg(&url)
                        .stdin(std::process::Stdio::null())
                        .stdout(std::process::Stdio::null())
                        .stderr(std::process::Stdio::null())
                        .spawn()
                });
            if let Err(e) = spawned {
                tracing::warn!(url = %url, error = %e, "failed to launch browser for link");
            }
        });
    }
}
