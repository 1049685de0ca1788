//! Formatting utilities used for console and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width, counting wide glyphs as two columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Whole seconds as `H:MM:SS`, with a `N day(s), ` prefix past 24h.
///
/// `format_hms(3725)` → `"1:02:05"`, `format_hms(90061)` → `"1 day, 1:01:01"`.
/// Negative values (clock moved backwards) keep their sign.
pub fn format_hms(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.unsigned_abs();
    let days = s / 86_400;
    let rem = s % 86_400;
    let hms = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);

    match days {
        0 => format!("{sign}{hms}"),
        1 => format!("{sign}1 day, {hms}"),
        d => format!("{sign}{d} days, {hms}"),
    }
}

/// Live stopwatch readout: `HH:MM:SS.mmm`. Hours grow past two digits.
pub fn format_readout(secs: f64) -> String {
    let total_ms = (secs.max(0.0) * 1000.0) as u64;
    let ms = total_ms % 1000;
    let s = total_ms / 1000;
    format!("{:02}:{:02}:{:02}.{:03}", s / 3600, (s % 3600) / 60, s % 60, ms)
}

/// Chart-label duration: `1h 2m 3s`, leading zero units dropped.
///
/// `human_duration(3603.0)` → `"1h 0m 3s"`, `human_duration(45.0)` → `"45s"`.
pub fn human_duration(secs: f64) -> String {
    let s = secs.max(0.0).round() as u64;
    let (h, m, sec) = (s / 3600, (s % 3600) / 60, s % 60);

    if h > 0 {
        format!("{h}h {m}m {sec}s")
    } else if m > 0 {
        format!("{m}m {sec}s")
    } else {
        format!("{sec}s")
    }
}
