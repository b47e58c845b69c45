//! List command implementation
//!
//! Prints every dictionary entry as a `DEFINE_GUID` line.

use crate::cli::output::{print_output, EntryLine, EntryList};
use crate::commands::load_dictionary;
use crate::config::Config;
use crate::error::Result;

/// Execute the list command
pub fn run_list(config: &Config) -> Result<()> {
    let dictionary = load_dictionary(&config.dictionary)?;

    let list = EntryList {
        entries: dictionary.entries().iter().map(EntryLine::from).collect(),
    };

    print_output(&list, config.output.format)?;

    Ok(())
}
