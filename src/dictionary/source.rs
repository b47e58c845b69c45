//! Dictionary sources
//!
//! A source yields the raw dictionary text: one `DEFINE_GUID(...)` line per
//! entry. The trait lets tests and callers supply text without touching disk.

use crate::error::DictionaryError;

use std::path::{Path, PathBuf};

/// Name of the dictionary file
pub const DICTIONARY_FILE: &str = "refguid.dat";

/// Dictionary shipped inside the binary
const BUILTIN_DICTIONARY: &str = include_str!("../../data/refguid.dat");

/// A provider of dictionary text
pub trait DictionarySource {
    /// Human-readable description for logs and errors
    fn describe(&self) -> String;

    /// Read the full dictionary text
    fn read(&self) -> Result<String, DictionaryError>;
}

/// Dictionary read from a file on disk
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DictionarySource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<String, DictionaryError> {
        let raw = std::fs::read(&self.path).map_err(|source| DictionaryError::Unavailable {
            path: self.describe(),
            source,
        })?;

        // Invalid UTF-8 is replaced; names and numbers are ASCII.
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}

/// Dictionary embedded at build time
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl DictionarySource for BuiltinSource {
    fn describe(&self) -> String {
        "<built-in>".to_string()
    }

    fn read(&self) -> Result<String, DictionaryError> {
        Ok(BUILTIN_DICTIONARY.to_string())
    }
}

/// Dictionary held in memory
#[derive(Debug, Clone, Default)]
pub struct TextSource(pub String);

impl DictionarySource for TextSource {
    fn describe(&self) -> String {
        "<inline>".to_string()
    }

    fn read(&self) -> Result<String, DictionaryError> {
        Ok(self.0.clone())
    }
}

/// Pick the dictionary to use when none is configured
///
/// Looks for `refguid.dat` next to the executable, then in the user data
/// directory, and falls back to the built-in dictionary.
pub fn default_source() -> Box<dyn DictionarySource> {
    for path in default_paths() {
        if path.is_file() {
            log::debug!("Using dictionary {}", path.display());
            return Box::new(FileSource::new(path));
        }
    }

    log::debug!("Using built-in dictionary");
    Box::new(BuiltinSource)
}

/// Candidate dictionary file locations, in search order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        paths.push(dir.join(DICTIONARY_FILE));
    }

    if let Some(data) = dirs::data_dir() {
        paths.push(data.join("refguid").join(DICTIONARY_FILE));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_not_empty() {
        let text = BuiltinSource.read().unwrap();
        assert!(text.lines().count() > 10);
    }

    #[test]
    fn test_file_source_reads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "DEFINE_GUID(Foo, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);").unwrap();

        let source = FileSource::new(file.path());
        assert!(source.read().unwrap().contains("Foo"));
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let source = FileSource::new("/nonexistent/refguid.dat");
        assert!(matches!(
            source.read(),
            Err(DictionaryError::Unavailable { .. })
        ));
    }

    #[test]
    fn test_default_paths_end_with_file_name() {
        for path in default_paths() {
            assert!(path.ends_with(DICTIONARY_FILE));
        }
    }
}
