// File: crates/nametrend-core/src/index.rs
// Summary: Case-insensitive name index built once over parsed entries.

use std::collections::HashMap;

use log::{debug, warn};

use crate::dataset::{parse_dataset, parse_dataset_lossy, FormatError};
use crate::entry::RankEntry;

/// Canonical lookup key: first character ASCII-uppercased, the rest
/// ASCII-lowercased. Idempotent; returns an empty string for empty input.
pub fn canonicalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(name.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars.map(|c| c.to_ascii_lowercase()));
            out
        }
        None => String::new(),
    }
}

/// Read-only mapping from canonical name to its [`RankEntry`].
///
/// Built once at startup; lookups never mutate, so a shared reference is
/// safe to hand to any number of readers.
#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    entries: HashMap<String, RankEntry>,
}

impl NameIndex {
    /// Index the parsed entries under their canonical names. Later entries
    /// with the same canonical key overwrite earlier ones, matching the
    /// dataset's line-by-line ingestion order.
    pub fn build(entries: Vec<RankEntry>) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            map.insert(canonicalize(entry.name()), entry);
        }
        debug!("name index built: {} entries", map.len());
        Self { entries: map }
    }

    /// Parse + build in one step, failing on the first malformed line.
    pub fn load(text: &str) -> Result<Self, FormatError> {
        Ok(Self::build(parse_dataset(text)?))
    }

    /// Parse + build keeping every well-formed line; the skipped lines come
    /// back as per-line errors for the caller to surface.
    pub fn load_lossy(text: &str) -> (Self, Vec<FormatError>) {
        let (entries, errors) = parse_dataset_lossy(text);
        (Self::build(entries), errors)
    }

    /// Look up a name, ignoring surrounding whitespace and letter case.
    /// A miss is a normal outcome, not an error. An empty query is a caller
    /// error and always misses.
    pub fn lookup(&self, name: &str) -> Option<&RankEntry> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            warn!("empty name lookup");
            return None;
        }
        self.entries.get(&canonicalize(trimmed))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
