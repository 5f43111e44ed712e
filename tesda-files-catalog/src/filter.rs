//! Search filter applied to listings.

/// Separator used when joining a record's tags for substring matching.
pub const TAG_SEPARATOR: &str = " ";

/// A normalized, case-insensitive substring filter.
///
/// A record matches when its lower-cased name contains the needle, or when
/// its tags joined with [`TAG_SEPARATOR`] contain it. An empty needle matches
/// everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    needle: String,
}

impl RecordFilter {
    /// Build a filter from raw search input. Whitespace is trimmed.
    pub fn new(input: Option<&str>) -> Self {
        Self {
            needle: input.map(|s| s.trim().to_lowercase()).unwrap_or_default(),
        }
    }

    /// A filter that matches every record.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, name: &str, tags: &[String]) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        name.to_lowercase().contains(&self.needle)
            || tags.join(TAG_SEPARATOR).contains(&self.needle)
    }
}

impl From<Option<&str>> for RecordFilter {
    fn from(input: Option<&str>) -> Self {
        Self::new(input)
    }
}

impl From<&str> for RecordFilter {
    fn from(input: &str) -> Self {
        Self::new(Some(input))
    }
}
