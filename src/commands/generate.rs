//! Generate command implementation
//!
//! Prints dumps of freshly generated random GUIDs.

use crate::cli::output::{print_all, ResolutionReport};
use crate::config::Config;
use crate::domain::GuidValue;
use crate::error::Result;
use crate::services::{LookupService, Resolution};

/// Execute the generate command
pub fn run_generate(count: u32, config: &Config) -> Result<()> {
    let service = LookupService::new(None, config.lookup_options());

    let reports: Vec<ResolutionReport> = (0..count)
        .map(|_| ResolutionReport::from(&Resolution::Single(service.describe(GuidValue::random()))))
        .collect();
    print_all(&reports, config.output.format)?;

    log::debug!("Generated {} GUIDs", count);
    Ok(())
}
