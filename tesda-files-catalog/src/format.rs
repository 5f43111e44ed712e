//! Human-readable rendering of sizes and timestamps.

use chrono::{DateTime, Local};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count on a 1024-based scale with up to two decimals.
///
/// Trailing zeros are dropped, so whole values print without a fraction.
/// Values beyond the TB range stay in TB.
///
/// # Examples
///
/// ```
/// use tesda_files_catalog::format_size;
///
/// assert_eq!(format_size(0), "0 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes;
    while scaled >= 1024 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024;
        unit += 1;
    }

    let value = bytes as f64 / 1024f64.powi(unit as i32);
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, SIZE_UNITS[unit])
}

/// Render a stored ISO-8601 timestamp in the local time zone.
///
/// Unparseable input is returned unchanged.
pub fn format_created(created: &str) -> String {
    match DateTime::parse_from_rfc3339(created) {
        Ok(ts) => ts
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => created.to_string(),
    }
}
