//! Read queries for the file catalog.
//!
//! Listings walk the `created` index newest-first and apply the search filter
//! as a predicate over that walk. Substring matching cannot use an index, so
//! every listing is a full ordered scan inside one read transaction.

use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension};
use tesda_files_catalog::{CatalogStats, FileRecord, RecordFilter, RecordSummary};

use crate::operations::OperationError;

const ORDER_NEWEST_FIRST: &str = "ORDER BY created DESC, id DESC";

// ── Listings ────────────────────────────────────────────────────────────────

/// List full records, newest first, keeping those that match `filter`.
///
/// Blobs are only read for rows that pass the filter.
pub fn list_files(
    conn: &Connection,
    filter: &RecordFilter,
) -> Result<Vec<FileRecord>, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let mut tags = load_all_tags(&tx)?;

    let mut records = Vec::new();
    {
        let mut stmt = tx.prepare(&format!(
            "SELECT id, name, mime_type, size, created, blob FROM files {ORDER_NEWEST_FIRST}"
        ))?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let id: i64 = row.get(0)?;
            let name: String = row.get(1)?;
            let file_tags = tags.remove(&id).unwrap_or_default();
            if !filter.matches(&name, &file_tags) {
                continue;
            }
            records.push(FileRecord {
                id,
                name,
                mime_type: row.get(2)?,
                size: read_size(row, 3)?,
                created: row.get(4)?,
                blob: row.get(5)?,
                tags: file_tags,
            });
        }
    }
    tx.commit()?;
    Ok(records)
}

/// List records without blobs, newest first, keeping those that match `filter`.
pub fn list_summaries(
    conn: &Connection,
    filter: &RecordFilter,
) -> Result<Vec<RecordSummary>, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let mut tags = load_all_tags(&tx)?;

    let mut summaries = Vec::new();
    {
        let mut stmt = tx.prepare(&format!(
            "SELECT id, name, mime_type, size, created FROM files {ORDER_NEWEST_FIRST}"
        ))?;
        let rows = stmt.query_map([], row_to_summary)?;
        for row in rows {
            let mut summary = row?;
            summary.tags = tags.remove(&summary.id).unwrap_or_default();
            if summary.matches(filter) {
                summaries.push(summary);
            }
        }
    }
    tx.commit()?;
    Ok(summaries)
}

/// Find records carrying exactly `tag`, newest first.
///
/// Unlike the substring filter this is an equality lookup through the tag
/// index. The tag is lower-cased before matching.
pub fn find_files_by_tag(
    conn: &Connection,
    tag: &str,
) -> Result<Vec<RecordSummary>, OperationError> {
    let tag = tag.trim().to_lowercase();
    let tx = conn.unchecked_transaction()?;
    let mut summaries = {
        let mut stmt = tx.prepare(&format!(
            "SELECT id, name, mime_type, size, created FROM files
             WHERE id IN (SELECT file_id FROM file_tags WHERE tag = ?1)
             {ORDER_NEWEST_FIRST}"
        ))?;
        let rows = stmt.query_map(params![tag], row_to_summary)?;
        rows.collect::<Result<Vec<_>, _>>()?
    };
    for summary in &mut summaries {
        summary.tags = tags_for_file(&tx, summary.id)?;
    }
    tx.commit()?;
    Ok(summaries)
}

// ── Single Record ───────────────────────────────────────────────────────────

/// Fetch one record with its blob.
pub fn get_file(conn: &Connection, id: i64) -> Result<Option<FileRecord>, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let record = tx
        .query_row(
            "SELECT id, name, mime_type, size, created, blob FROM files WHERE id = ?1",
            params![id],
            |row| {
                Ok(FileRecord {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    mime_type: row.get(2)?,
                    size: read_size(row, 3)?,
                    created: row.get(4)?,
                    blob: row.get(5)?,
                    tags: Vec::new(),
                })
            },
        )
        .optional()?;

    let record = match record {
        Some(mut record) => {
            record.tags = tags_for_file(&tx, id)?;
            Some(record)
        }
        None => None,
    };
    tx.commit()?;
    Ok(record)
}

/// Tags of one record in derivation order.
pub fn tags_for_file(conn: &Connection, id: i64) -> Result<Vec<String>, OperationError> {
    let mut stmt =
        conn.prepare("SELECT tag FROM file_tags WHERE file_id = ?1 ORDER BY position")?;
    let rows = stmt.query_map(params![id], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Count records and sum their sizes.
pub fn catalog_stats(conn: &Connection) -> Result<CatalogStats, OperationError> {
    let (records, total_bytes): (i64, i64) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(size), 0) FROM files",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(CatalogStats {
        records: records.max(0) as u64,
        total_bytes: total_bytes.max(0) as u64,
    })
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn load_all_tags(conn: &Connection) -> Result<HashMap<i64, Vec<String>>, OperationError> {
    let mut stmt = conn.prepare("SELECT file_id, tag FROM file_tags ORDER BY file_id, position")?;
    let mut rows = stmt.query([])?;
    let mut tags: HashMap<i64, Vec<String>> = HashMap::new();
    while let Some(row) = rows.next()? {
        tags.entry(row.get(0)?).or_default().push(row.get(1)?);
    }
    Ok(tags)
}

fn row_to_summary(row: &rusqlite::Row<'_>) -> rusqlite::Result<RecordSummary> {
    Ok(RecordSummary {
        id: row.get(0)?,
        name: row.get(1)?,
        mime_type: row.get(2)?,
        size: read_size(row, 3)?,
        created: row.get(4)?,
        tags: Vec::new(),
    })
}

/// Sizes are stored as INTEGER with a `size >= 0` check.
fn read_size(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    let size: i64 = row.get(idx)?;
    u64::try_from(size).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Integer, Box::new(e))
    })
}
