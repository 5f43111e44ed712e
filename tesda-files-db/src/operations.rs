//! Write operations on file records.

use chrono::{SecondsFormat, Utc};
use rusqlite::{params, Connection};
use tesda_files_catalog::{derive_tags, NewFile};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Value out of range for {field}: {value}")]
    OutOfRange { field: &'static str, value: u64 },
}

/// Current time as stored in the `created` column.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ── Insert ──────────────────────────────────────────────────────────────────

/// Insert a file, stamping it with the current time. Returns the new id.
pub fn insert_file(conn: &Connection, file: &NewFile) -> Result<i64, OperationError> {
    insert_file_at(conn, file, &now_timestamp())
}

/// Insert a file with an explicit `created` timestamp. Returns the new id.
///
/// The record and its tag rows are written in a single transaction, so a
/// failure leaves nothing behind.
pub fn insert_file_at(
    conn: &Connection,
    file: &NewFile,
    created: &str,
) -> Result<i64, OperationError> {
    let size = i64::try_from(file.size).map_err(|_| OperationError::OutOfRange {
        field: "size",
        value: file.size,
    })?;
    let tags = derive_tags(&file.name);

    let tx = conn.unchecked_transaction()?;
    tx.execute(
        "INSERT INTO files (name, mime_type, size, blob, created)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![file.name, file.mime_type, size, file.bytes, created],
    )?;
    let id = tx.last_insert_rowid();

    {
        let mut stmt =
            tx.prepare("INSERT INTO file_tags (file_id, position, tag) VALUES (?1, ?2, ?3)")?;
        for (position, tag) in tags.iter().enumerate() {
            stmt.execute(params![id, position as i64, tag])?;
        }
    }
    tx.commit()?;

    log::debug!("Inserted file {} '{}' ({} tags)", id, file.name, tags.len());
    Ok(id)
}

// ── Delete ──────────────────────────────────────────────────────────────────

/// Delete a file and its tags. Returns whether a record was removed.
///
/// Deleting an id that does not exist is not an error.
pub fn delete_file(conn: &Connection, id: i64) -> Result<bool, OperationError> {
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM file_tags WHERE file_id = ?1", params![id])?;
    let removed = tx.execute("DELETE FROM files WHERE id = ?1", params![id])?;
    tx.commit()?;

    log::debug!("Delete file {}: {} row(s) removed", id, removed);
    Ok(removed > 0)
}
