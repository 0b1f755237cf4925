//! Dump entries.

use serde::Deserialize;

use crate::error_handling::DumpError;

use super::sort_key::SortKey;

/// Shape of one object in the dump. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawEntry {
    key: String,
    members: Vec<String>,
}

/// A validated dump entry together with its sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Key exactly as it appeared in the dump
    pub key: String,
    /// Members exactly as they appeared in the dump
    pub members: Vec<String>,
    sort_key: SortKey,
}

impl Entry {
    /// Builds an entry, parsing `key` into its sort key.
    pub fn new(key: impl Into<String>, members: Vec<String>) -> Result<Self, DumpError> {
        let key = key.into();
        let sort_key = SortKey::parse(&key)?;
        Ok(Self {
            key,
            members,
            sort_key,
        })
    }

    /// Key components, last first.
    pub fn sort_key(&self) -> &SortKey {
        &self.sort_key
    }
}

/// Parses the full text of a dump.
///
/// # Errors
///
/// - `DumpError::Json` for malformed JSON, a top level that is not a list, or
///   an object whose `key` is not a string or whose `members` is not a list of
///   strings (including either field being absent)
/// - `DumpError::InvalidKey` for a key segment that is not an integer
pub fn parse_entries(text: &str) -> Result<Vec<Entry>, DumpError> {
    let raw: Vec<RawEntry> = serde_json::from_str(text)?;
    raw.into_iter()
        .map(|r| Entry::new(r.key, r.members))
        .collect()
}
