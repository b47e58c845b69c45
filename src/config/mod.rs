//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::cli::args::OutputFormat;
use crate::dictionary::{default_source, DictionarySource, FileSource};
use crate::services::LookupOptions;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Dictionary settings
    pub dictionary: DictionaryConfig,
    /// Output settings
    pub output: OutputConfig,
}

impl Config {
    /// Lookup options derived from the configuration
    pub fn lookup_options(&self) -> LookupOptions {
        LookupOptions {
            search: self.general.search,
        }
    }
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
    /// Always search instead of matching names exactly
    pub search: bool,
}

/// Dictionary configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionary file; the default search path is used when unset
    pub path: Option<String>,
}

impl DictionaryConfig {
    /// The dictionary source to load from
    pub fn source(&self) -> Box<dyn DictionarySource> {
        match &self.path {
            Some(path) => Box::new(FileSource::new(path)),
            None => default_source(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
}
