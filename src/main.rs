//! refguid - GUID conversion and lookup tool
//!
//! A command-line tool for converting GUIDs between notations and looking
//! them up by name, value or text.

use clap::Parser;
use refguid::cli::args::{generate_completions, print_help, Cli};
use refguid::commands::{run_generate, run_list, run_lookup};
use refguid::config::{Config, ConfigBuilder};
use refguid::error::{AppError, DictionaryError, LookupError};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let default_level = if config.general.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    // Run the appropriate mode
    let result = run(&cli, &config);

    if let Err(e) = result {
        log::log!(e.log_level(), "{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn build_config(cli: &Cli) -> Result<Config, AppError> {
    Ok(ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_verbose(cli.verbose)
        .with_search(cli.search)
        .with_dictionary(cli.dictionary.clone())
        .with_format(cli.format)
        .build())
}

fn run(cli: &Cli, config: &Config) -> Result<(), AppError> {
    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    if cli.list {
        return run_list(config);
    }

    if let Some(count) = cli.generate {
        return run_generate(count, config);
    }

    if cli.tokens.is_empty() {
        print_help();
        return Err(AppError::NoInput);
    }

    run_lookup(&cli.tokens, config)
}

fn print_error(err: &AppError) {
    if let AppError::Lookup(LookupError::NotFound(_)) = err {
        eprintln!("Not found");
        return;
    }

    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Lookup(LookupError::Parse(_)) => {
            eprintln!();
            eprintln!("Hint: Accepted notations are");
            eprintln!("      {{EB0FE172-1A3A-11D0-89B3-00A0C90A90AC}}");
            eprintln!("      {{ 0xEB0FE172, 0x1A3A, 0x11D0, {{ 0x89, 0xB3, 0x00, 0xA0, 0xC9, 0x0A, 0x90, 0xAC }} }}");
            eprintln!("      DEFINE_GUID(Name, 0xEB0FE172, 0x1A3A, 0x11D0, 0x89, 0xB3, 0x00, 0xA0, 0xC9, 0x0A, 0x90, 0xAC);");
            eprintln!("      72 E1 0F EB 3A 1A D0 11 89 B3 00 A0 C9 0A 90 AC");
        }
        AppError::Lookup(LookupError::DictionaryUnavailable(_))
        | AppError::Dictionary(DictionaryError::Unavailable { .. }) => {
            eprintln!();
            eprintln!("Hint: Pass --dictionary PATH or place refguid.dat next to the executable.");
        }
        _ => {}
    }
}
