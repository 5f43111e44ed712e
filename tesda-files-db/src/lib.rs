//! SQLite persistence layer for the file catalog.
//!
//! Provides container lifecycle, record writes, filtered listings, and an
//! async store handle backed by SQLite (via rusqlite with bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{delete_file, insert_file, insert_file_at, now_timestamp, OperationError};
pub use queries::{
    catalog_stats, find_files_by_tag, get_file, list_files, list_summaries, tags_for_file,
};
pub use schema::{destroy_database, open_database, open_memory, SchemaError, CONTAINER_NAME};
pub use store::{CatalogStore, Listing, StoreError, StoreLocation};
