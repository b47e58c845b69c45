//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI mode.

pub mod generate;
pub mod list;
pub mod lookup;

pub use generate::run_generate;
pub use list::run_list;
pub use lookup::run_lookup;

use crate::config::DictionaryConfig;
use crate::dictionary::Dictionary;
use crate::error::DictionaryError;

/// Load the configured dictionary
pub fn load_dictionary(config: &DictionaryConfig) -> Result<Dictionary, DictionaryError> {
    let source = config.source();
    let dictionary = Dictionary::load(source.as_ref())?;

    if dictionary.is_empty() {
        log::warn!("Dictionary {} has no entries", source.describe());
    }

    Ok(dictionary)
}
