//! Time utilities: the fixed reference offset, epoch seconds <-> wall clock,
//! and the timestamp used to name session files.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, TimeZone, Utc};

/// Parse `+09:00`, `-05:30`, `+0900`, `Z` or `UTC` into a fixed offset.
pub fn parse_offset(s: &str) -> AppResult<FixedOffset> {
    let t = s.trim();
    if t.eq_ignore_ascii_case("z") || t.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| AppError::InvalidOffset(s.to_string()));
    }

    let (sign, rest) = match t.as_bytes().first() {
        Some(b'+') => (1, &t[1..]),
        Some(b'-') => (-1, &t[1..]),
        _ => return Err(AppError::InvalidOffset(s.to_string())),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidOffset(s.to_string()));
    }

    let hours: i32 = digits[..2]
        .parse()
        .map_err(|_| AppError::InvalidOffset(s.to_string()))?;
    let minutes: i32 = digits[2..]
        .parse()
        .map_err(|_| AppError::InvalidOffset(s.to_string()))?;
    if minutes >= 60 {
        return Err(AppError::InvalidOffset(s.to_string()));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| AppError::InvalidOffset(s.to_string()))
}

/// Current time as fractional epoch seconds (microsecond precision).
pub fn epoch_now() -> f64 {
    Utc::now().timestamp_micros() as f64 / 1_000_000.0
}

/// Convert epoch seconds to a wall-clock time in `offset`.
/// Out-of-range values clamp to the epoch instead of failing.
pub fn to_zoned(ts: f64, offset: &FixedOffset) -> DateTime<FixedOffset> {
    let micros = (ts * 1_000_000.0).round() as i64;
    let utc = Utc
        .timestamp_micros(micros)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
    utc.with_timezone(offset)
}

/// `HH:MM` of an epoch timestamp in the reference offset.
pub fn hh_mm(ts: f64, offset: &FixedOffset) -> String {
    to_zoned(ts, offset).format("%H:%M").to_string()
}

/// File stem for a save made at `ts`: `YYYY-MM-DD_HH-MM-SS`.
pub fn file_stamp(ts: f64, offset: &FixedOffset) -> String {
    to_zoned(ts, offset).format("%Y-%m-%d_%H-%M-%S").to_string()
}

/// Today's date in the reference offset, `YYYY-MM-DD`.
pub fn today(offset: &FixedOffset) -> String {
    Utc::now().with_timezone(offset).format("%Y-%m-%d").to_string()
}
