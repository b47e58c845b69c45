//! GUID dictionary
//!
//! An ordered, read-only list of named GUIDs. Order matters: the first entry
//! wins an exact-name lookup, and multi-match results keep file order.

pub mod source;

pub use source::{default_source, BuiltinSource, DictionarySource, FileSource, TextSource};

use crate::domain::{DictionaryEntry, GuidValue};
use crate::error::DictionaryError;
use crate::format::{bytes, define};

use std::collections::HashMap;

/// Immutable collection of dictionary entries
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// Create a dictionary from entries, keeping their order
    pub fn from_entries(entries: Vec<DictionaryEntry>) -> Self {
        let dictionary = Self { entries };
        dictionary.warn_duplicate_names();
        dictionary
    }

    /// Parse dictionary text, one `DEFINE_GUID(...)` per line
    ///
    /// Lines that do not parse are skipped.
    pub fn parse(text: &str) -> Self {
        let mut entries = Vec::new();

        for (lineno, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match define::parse(line) {
                Ok(literal) => {
                    let name = literal.name.unwrap_or_default();
                    entries.push(DictionaryEntry::new(name, literal.guid));
                }
                Err(e) => log::debug!("Skipping dictionary line {}: {}", lineno + 1, e),
            }
        }

        Self::from_entries(entries)
    }

    /// Load a dictionary from a source
    pub fn load(source: &dyn DictionarySource) -> Result<Self, DictionaryError> {
        let text = source.read()?;
        let dictionary = Self::parse(&text);
        log::info!(
            "Loaded {} entries from {}",
            dictionary.len(),
            source.describe()
        );
        Ok(dictionary)
    }

    /// First entry whose name matches, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<&DictionaryEntry> {
        self.entries.iter().find(|e| e.name_matches(name))
    }

    /// All entries with the given value, in dictionary order
    pub fn find_all_by_value(&self, guid: &GuidValue) -> Vec<&DictionaryEntry> {
        self.entries.iter().filter(|e| e.guid == *guid).collect()
    }

    /// Entries whose `DEFINE_GUID` or byte-dump rendering contains `text`,
    /// ignoring case
    pub fn search_substring(&self, text: &str) -> Vec<&DictionaryEntry> {
        let needle = text.to_uppercase();

        self.entries
            .iter()
            .filter(|e| {
                define::render(&e.guid, Some(e.name.as_str()))
                    .to_uppercase()
                    .contains(&needle)
                    || bytes::render(&e.guid).to_uppercase().contains(&needle)
            })
            .collect()
    }

    /// All entries in dictionary order
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn warn_duplicate_names(&self) {
        let mut seen: HashMap<String, &GuidValue> = HashMap::new();

        for entry in &self.entries {
            match seen.get(&entry.name.to_uppercase()) {
                Some(first) if **first != entry.guid => log::warn!(
                    "Duplicate name {} with a different GUID {}; using {}",
                    entry.name,
                    entry.guid,
                    first
                ),
                Some(_) => {}
                None => {
                    seen.insert(entry.name.to_uppercase(), &entry.guid);
                }
            }
        }
    }
}
