//! Lookup command implementation
//!
//! Converts literals and looks up names or search text given on the command
//! line.

use crate::cli::output::{print_all, ResolutionReport};
use crate::commands::load_dictionary;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::{segment, LookupService};

/// Execute the lookup command
///
/// Stops at the first argument that fails to resolve. Results for the
/// arguments before it are still printed.
pub fn run_lookup<S: AsRef<str>>(tokens: &[S], config: &Config) -> Result<()> {
    let args = segment(tokens);
    if args.is_empty() {
        return Err(AppError::NoInput);
    }

    // Literals still convert without a dictionary.
    let dictionary = match load_dictionary(&config.dictionary) {
        Ok(dictionary) => Some(dictionary),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    };

    let service = LookupService::new(dictionary.as_ref(), config.lookup_options());

    let mut reports = Vec::with_capacity(args.len());
    let mut failure = None;
    for arg in &args {
        match service.resolve(arg) {
            Ok(resolution) => reports.push(ResolutionReport::from(&resolution)),
            Err(e) => {
                failure = Some(e);
                break;
            }
        }
    }

    print_all(&reports, config.output.format)?;

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
