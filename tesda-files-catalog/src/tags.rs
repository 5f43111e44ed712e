//! Tag derivation from filenames.
//!
//! Tags are computed once, when a file enters the catalog:
//! ```text
//! Module 1 - Intro.pdf  ->  module, 1, intro
//! ```
//! The part of the name before its first `.` is split on runs of whitespace,
//! `_` and `-`, and every token is lower-cased.

/// The portion of a filename before its first `.`.
///
/// Names starting with a dot (`.hidden`) have an empty base.
pub fn base_name(name: &str) -> &str {
    name.split('.').next().unwrap_or("")
}

/// Derive the tag set for a filename.
///
/// Empty tokens are dropped and duplicates keep their first position.
///
/// # Examples
///
/// ```
/// use tesda_files_catalog::derive_tags;
///
/// assert_eq!(derive_tags("a_b-c d.txt"), vec!["a", "b", "c", "d"]);
/// assert!(derive_tags(".hidden").is_empty());
/// ```
pub fn derive_tags(name: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for token in base_name(name).split(is_separator) {
        if token.is_empty() {
            continue;
        }
        let tag = token.to_lowercase();
        if !tags.contains(&tag) {
            tags.push(tag);
        }
    }
    tags
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}
