//! Data model types for the file catalog.
//!
//! A catalog holds one kind of persistent entity, the [`FileRecord`]. The
//! other types here are the ingestion payload, a blob-less view used for
//! listings, and aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::filter::RecordFilter;

// ── File Record ─────────────────────────────────────────────────────────────

/// A stored file: metadata plus its full binary content.
///
/// `id`, `created` and `tags` are assigned by the store at insert time and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: i64,
    /// Original filename. Not unique.
    pub name: String,
    /// MIME type as supplied at ingestion. May be empty.
    pub mime_type: String,
    pub size: u64,
    #[serde(skip)]
    pub blob: Vec<u8>,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub created: String,
    /// Lowercase tokens derived from `name`, in order of first appearance.
    pub tags: Vec<String>,
}

impl FileRecord {
    pub fn matches(&self, filter: &RecordFilter) -> bool {
        filter.matches(&self.name, &self.tags)
    }
}

/// A file record without its blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: i64,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub created: String,
    pub tags: Vec<String>,
}

impl RecordSummary {
    pub fn matches(&self, filter: &RecordFilter) -> bool {
        filter.matches(&self.name, &self.tags)
    }
}

// ── Ingestion ───────────────────────────────────────────────────────────────

/// A file handed to the store by the ingestion surface.
///
/// `size` is the size reported by the source and is stored as given; it is
/// normally equal to `bytes.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl NewFile {
    /// Build a payload whose size is taken from the byte buffer.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Aggregate counts over the whole catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub records: u64,
    pub total_bytes: u64,
}
