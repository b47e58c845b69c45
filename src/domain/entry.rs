//! Dictionary entry type

use crate::domain::GuidValue;
use serde::Serialize;
use std::fmt;

/// A named GUID, one line of the dictionary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DictionaryEntry {
    /// Symbolic name, e.g. `IID_IShellLinkW`
    pub name: String,
    /// GUID value
    pub guid: GuidValue,
}

impl DictionaryEntry {
    /// Create a new entry
    pub fn new(name: impl Into<String>, guid: GuidValue) -> Self {
        Self {
            name: name.into(),
            guid,
        }
    }

    /// Case-insensitive name comparison
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_uppercase() == name.to_uppercase()
    }
}

impl fmt::Display for DictionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.guid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_matches_ignores_case() {
        let entry = DictionaryEntry::new("IID_IShellLinkW", GuidValue::NIL);
        assert!(entry.name_matches("iid_ishelllinkw"));
        assert!(entry.name_matches("IID_ISHELLLINKW"));
        assert!(!entry.name_matches("IID_IShellLinkA"));
    }

    #[test]
    fn test_entry_display() {
        let entry = DictionaryEntry::new("GUID_NULL", GuidValue::NIL);
        assert_eq!(
            entry.to_string(),
            "GUID_NULL {00000000-0000-0000-0000-000000000000}"
        );
    }
}
