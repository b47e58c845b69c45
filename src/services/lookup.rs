//! Argument resolution
//!
//! Turns one segmented argument into the GUIDs to report: a literal is
//! parsed directly, anything else is looked up in the dictionary by exact
//! name and then by substring.

use crate::dictionary::Dictionary;
use crate::domain::GuidValue;
use crate::error::LookupError;
use crate::format::{classify, Classification};

/// Options that change how arguments are resolved
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Skip the exact-name lookup and search substrings only
    pub search: bool,
}

/// A GUID to report, with the name it is shown under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidMatch {
    /// The GUID value
    pub guid: GuidValue,
    /// Name used in the `DEFINE_GUID` rendering
    pub name: Option<String>,
    /// Every dictionary name sharing this value, when the GUID came without a name
    pub aliases: Vec<String>,
}

/// Result of resolving one argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one GUID
    Single(GuidMatch),
    /// Several dictionary entries matched a substring search
    Many { query: String, matches: Vec<GuidMatch> },
}

impl Resolution {
    /// All matches in report order
    pub fn matches(&self) -> Vec<&GuidMatch> {
        match self {
            Resolution::Single(m) => vec![m],
            Resolution::Many { matches, .. } => matches.iter().collect(),
        }
    }
}

/// Service resolving arguments against an optional dictionary
pub struct LookupService<'a> {
    dictionary: Option<&'a Dictionary>,
    options: LookupOptions,
}

impl<'a> LookupService<'a> {
    /// Create a new lookup service
    ///
    /// With no dictionary, literals still resolve but names and searches fail.
    pub fn new(dictionary: Option<&'a Dictionary>, options: LookupOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    /// Resolve one argument
    pub fn resolve(&self, arg: &str) -> Result<Resolution, LookupError> {
        let arg = arg.trim();

        if let Classification::Literal(literal) = classify(arg)? {
            log::debug!("'{}' is a {} literal", arg, literal.format);
            return Ok(Resolution::Single(match literal.name {
                Some(name) => Self::named(literal.guid, name),
                None => self.describe(literal.guid),
            }));
        }

        let dictionary = self
            .dictionary
            .ok_or_else(|| LookupError::DictionaryUnavailable(arg.to_string()))?;

        if !self.options.search {
            if let Some(entry) = dictionary.find_by_name(arg) {
                return Ok(Resolution::Single(Self::named(
                    entry.guid,
                    entry.name.clone(),
                )));
            }
        }

        let mut found: Vec<GuidMatch> = dictionary
            .search_substring(arg)
            .into_iter()
            .map(|e| Self::named(e.guid, e.name.clone()))
            .collect();
        log::debug!("Search for '{}' found {} entries", arg, found.len());

        match found.len() {
            0 => Err(LookupError::NotFound(arg.to_string())),
            1 => Ok(Resolution::Single(found.remove(0))),
            _ => Ok(Resolution::Many {
                query: arg.to_string(),
                matches: found,
            }),
        }
    }

    /// Describe an unnamed GUID, naming it after its dictionary aliases
    pub fn describe(&self, guid: GuidValue) -> GuidMatch {
        let aliases: Vec<String> = self
            .dictionary
            .map(|d| {
                d.find_all_by_value(&guid)
                    .into_iter()
                    .map(|e| e.name.clone())
                    .collect()
            })
            .unwrap_or_default();

        GuidMatch {
            guid,
            name: aliases.first().cloned(),
            aliases,
        }
    }

    fn named(guid: GuidValue, name: String) -> GuidMatch {
        GuidMatch {
            guid,
            name: Some(name),
            aliases: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::BuiltinSource;
    use crate::error::ParseError;

    const SHELL_LINK_W: GuidValue =
        GuidValue::new(0x000214F9, 0, 0, [0xC0, 0, 0, 0, 0, 0, 0, 0x46]);

    fn dictionary() -> Dictionary {
        Dictionary::load(&BuiltinSource).unwrap()
    }

    fn single(resolution: Resolution) -> GuidMatch {
        match resolution {
            Resolution::Single(m) => m,
            other => panic!("expected single match, got {:?}", other),
        }
    }

    #[test]
    fn test_literal_lists_aliases() {
        let dictionary = dictionary();
        let service = LookupService::new(Some(&dictionary), LookupOptions::default());

        let m = single(service.resolve("{000214F9-0000-0000-C000-000000000046}").unwrap());
        assert_eq!(m.guid, SHELL_LINK_W);
        assert_eq!(m.aliases, vec!["IID_IShellLinkW", "IID_IShellLink"]);
        assert_eq!(m.name.as_deref(), Some("IID_IShellLinkW"));
    }

    #[test]
    fn test_define_guid_keeps_its_own_name() {
        let dictionary = dictionary();
        let service = LookupService::new(Some(&dictionary), LookupOptions::default());

        let m = single(
            service
                .resolve("DEFINE_GUID(MyLink, 0x000214F9, 0, 0, 0xC0, 0, 0, 0, 0, 0, 0, 0x46);")
                .unwrap(),
        );
        assert_eq!(m.name.as_deref(), Some("MyLink"));
        assert!(m.aliases.is_empty());
    }

    #[test]
    fn test_name_lookup() {
        let dictionary = dictionary();
        let service = LookupService::new(Some(&dictionary), LookupOptions::default());

        let m = single(service.resolve("iid_ishelllinkw").unwrap());
        assert_eq!(m.name.as_deref(), Some("IID_IShellLinkW"));
        assert_eq!(m.guid, SHELL_LINK_W);
    }

    #[test]
    fn test_search_mode_skips_name_lookup() {
        let dictionary = dictionary();

        let exact = LookupService::new(Some(&dictionary), LookupOptions::default());
        let m = single(exact.resolve("IID_IShellLink").unwrap());
        assert_eq!(m.name.as_deref(), Some("IID_IShellLink"));

        let search = LookupService::new(Some(&dictionary), LookupOptions { search: true });
        match search.resolve("IID_IShellLink").unwrap() {
            Resolution::Many { query, matches } => {
                assert_eq!(query, "IID_IShellLink");
                let names: Vec<_> = matches.iter().filter_map(|m| m.name.as_deref()).collect();
                assert_eq!(names, ["IID_IShellLinkA", "IID_IShellLinkW", "IID_IShellLink"]);
            }
            other => panic!("expected several matches, got {:?}", other),
        }
    }

    #[test]
    fn test_search_many() {
        let dictionary = dictionary();
        let service = LookupService::new(Some(&dictionary), LookupOptions::default());

        let resolution = service.resolve("ShellLink").unwrap();
        assert!(matches!(resolution, Resolution::Many { .. }));
        assert_eq!(resolution.matches().len(), 4);
    }

    #[test]
    fn test_not_found() {
        let dictionary = dictionary();
        let service = LookupService::new(Some(&dictionary), LookupOptions::default());

        assert_eq!(
            service.resolve("ZZZZNOPE").unwrap_err(),
            LookupError::NotFound("ZZZZNOPE".to_string())
        );
    }

    #[test]
    fn test_malformed_literal_is_an_error() {
        let dictionary = dictionary();
        let service = LookupService::new(Some(&dictionary), LookupOptions::default());

        assert!(matches!(
            service.resolve("DEFINE_GUID(Foo, 1, 2);"),
            Err(LookupError::Parse(ParseError::MalformedLiteral { .. }))
        ));
    }

    #[test]
    fn test_without_dictionary() {
        let service = LookupService::new(None, LookupOptions::default());

        let m = single(service.resolve("F9 14 02 00 00 00 00 00 C0 00 00 00 00 00 00 46").unwrap());
        assert_eq!(m.guid, SHELL_LINK_W);
        assert!(m.name.is_none());

        assert!(matches!(
            service.resolve("IID_IShellLinkW"),
            Err(LookupError::DictionaryUnavailable(_))
        ));
    }
}
