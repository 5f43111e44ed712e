pub(crate) mod add;
pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod export;
pub(crate) mod list;
pub(crate) mod show;
pub(crate) mod stats;
pub(crate) mod wipe;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tesda_files_catalog::{format_created, format_size, RecordSummary};

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}

/// One-line rendering of a record: id, name, and "type • size • time".
pub(crate) fn log_record_line(summary: &RecordSummary) {
    let mime = if summary.mime_type.is_empty() {
        "file"
    } else {
        summary.mime_type.as_str()
    };
    log::info!(
        "  {:>5}  {}",
        format!("#{}", summary.id).if_supports_color(Stdout, |t| t.dimmed()),
        truncate_str(&summary.name, 60).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "         {} \u{2022} {} \u{2022} {}",
        mime,
        format_size(summary.size),
        format_created(&summary.created),
    );
}
