use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tesda_files_catalog::{format_created, format_size, is_textual, FileRecord};
use tesda_files_db::CatalogStore;

use crate::CliError;

/// Bytes shown in the hex preview of binary files.
const HEX_PREVIEW_BYTES: usize = 256;

/// Show a record's metadata followed by a preview of its contents.
pub(crate) async fn run_show(store: &CatalogStore, id: i64, lines: usize) -> Result<(), CliError> {
    let record = store.get(id).await?.ok_or(CliError::NotFound(id))?;

    log::info!("{}", record.name.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  Id:       {}", record.id);
    log::info!(
        "  Type:     {}",
        if record.mime_type.is_empty() {
            "(unknown)"
        } else {
            record.mime_type.as_str()
        }
    );
    log::info!("  Size:     {} ({} bytes)", format_size(record.size), record.size);
    log::info!("  Created:  {}", format_created(&record.created));
    log::info!(
        "  Tags:     {}",
        if record.tags.is_empty() {
            "(none)".to_string()
        } else {
            record.tags.join(", ")
        }
    );
    crate::log_blank();

    if record.blob.is_empty() {
        log::info!("{}", "(empty file)".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    for line in preview_lines(&record, lines) {
        log::info!("{line}");
    }
    Ok(())
}

/// Text preview for textual types, hex dump otherwise.
fn preview_lines(record: &FileRecord, lines: usize) -> Vec<String> {
    if is_textual(&record.mime_type) {
        let text = String::from_utf8_lossy(&record.blob);
        let mut out: Vec<String> = text.lines().take(lines).map(str::to_string).collect();
        if text.lines().count() > lines {
            out.push("...".to_string());
        }
        out
    } else {
        let mut out = hex_dump(&record.blob, HEX_PREVIEW_BYTES);
        if record.blob.len() > HEX_PREVIEW_BYTES {
            out.push(format!("... {} more bytes", record.blob.len() - HEX_PREVIEW_BYTES));
        }
        out
    }
}

/// Classic 16-bytes-per-row hex dump of at most `limit` bytes.
fn hex_dump(bytes: &[u8], limit: usize) -> Vec<String> {
    bytes[..bytes.len().min(limit)]
        .chunks(16)
        .enumerate()
        .map(|(row, chunk)| {
            let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
            let ascii: String = chunk
                .iter()
                .map(|&b| if (0x20..0x7F).contains(&b) { b as char } else { '.' })
                .collect();
            format!("{:08x}  {:<47}  {}", row * 16, hex.join(" "), ascii)
        })
        .collect()
}
