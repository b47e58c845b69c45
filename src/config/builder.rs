//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::cli::args::OutputFormat;
use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicitly given file must load; default locations are optional.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.config.general.verbose = true;
        }
        self
    }

    /// Override with CLI search flag
    pub fn with_search(mut self, search: bool) -> Self {
        if search {
            self.config.general.search = true;
        }
        self
    }

    /// Override with CLI dictionary path
    pub fn with_dictionary(mut self, path: Option<String>) -> Self {
        if let Some(p) = path {
            self.config.dictionary.path = Some(p);
        }
        self
    }

    /// Override with CLI output format
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(f) = format {
            self.config.output.format = f;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
