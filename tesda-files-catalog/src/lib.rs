//! File catalog data model, tag derivation, and display helpers.
//!
//! This crate defines the stored-file record types without any database
//! dependencies. Consumers can use these types directly for display or
//! pass them to `tesda-files-db` for persistence.

pub mod filter;
pub mod format;
pub mod mime;
pub mod tags;
pub mod types;

pub use filter::RecordFilter;
pub use format::{format_created, format_size};
pub use mime::{data_uri, is_textual, mime_from_filename, DEFAULT_MIME};
pub use tags::{base_name, derive_tags};
pub use types::*;
