//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments.

use clap::{ArgGroup, CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;

/// Convert, look up and search GUIDs
///
/// Accepts GUIDs as `{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}`, struct
/// initializers, `DEFINE_GUID(...)` calls or 16-byte dumps, as well as
/// symbolic names and search text. Unquoted literals split by the shell are
/// joined back together.
#[derive(Parser, Debug)]
#[command(name = "refguid")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").args(["list", "generate", "completions", "tokens"])))]
pub struct Cli {
    /// GUID literals, names or search text
    #[arg(value_name = "GUID|NAME|TEXT")]
    pub tokens: Vec<String>,

    /// Search dictionary renderings instead of matching names exactly
    #[arg(short, long)]
    pub search: bool,

    /// List every dictionary entry
    #[arg(short, long)]
    pub list: bool,

    /// Generate random GUIDs
    #[arg(
        short,
        long,
        value_name = "COUNT",
        num_args = 0..=1,
        default_missing_value = "1",
        value_parser = clap::value_parser!(u32).range(1..=10000)
    )]
    pub generate: Option<u32>,

    /// Dictionary file (DEFINE_GUID lines)
    #[arg(long, env = "REFGUID_DICTIONARY")]
    pub dictionary: Option<String>,

    /// Path to configuration file
    #[arg(short, long, env = "REFGUID_CONFIG")]
    pub config: Option<String>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable dump format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Print help to stdout
pub fn print_help() {
    let _ = Cli::command().print_help();
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
