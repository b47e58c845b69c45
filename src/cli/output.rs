//! Output formatting utilities
//!
//! Provides dump, JSON and compact output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::domain::DictionaryEntry;
use crate::format::{bytes, canonical, define, render_dump, structure};
use crate::services::{GuidMatch, Resolution};
use serde::Serialize;
use std::io::{self, Write};

/// Separator printed before every GUID report
const SEPARATOR: &str = "--------------------";

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match format {
        OutputFormat::Table => {
            write!(handle, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(handle, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(handle, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Render a sequence of results
///
/// JSON output is a single array so that several results stay one document.
pub fn render_all<T: Serialize + TableDisplay>(items: &[T], format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => items.iter().map(|item| item.to_table()).collect(),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            format!("{}\n", json)
        }
        OutputFormat::Compact => items
            .iter()
            .map(|item| format!("{}\n", item.to_compact()))
            .collect(),
    }
}

/// Print a sequence of results in the selected format
pub fn print_all<T: Serialize + TableDisplay>(items: &[T], format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write!(handle, "{}", render_all(items, format))
}

/// Trait for types that can be displayed as text
pub trait TableDisplay {
    /// Format as a multi-line block
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Every rendering of one GUID
#[derive(Debug, Clone, Serialize)]
pub struct GuidReport {
    /// Dictionary names sharing this value
    pub names: Vec<String>,
    /// Name used for the DEFINE_GUID rendering
    pub name: Option<String>,
    pub guid: String,
    pub define_guid: String,
    pub bytes: String,
    #[serde(rename = "struct")]
    pub structure: String,
    #[serde(skip)]
    pub dump: String,
}

impl From<&GuidMatch> for GuidReport {
    fn from(m: &GuidMatch) -> Self {
        let name = m.name.as_deref();
        Self {
            names: m.aliases.clone(),
            name: m.name.clone(),
            guid: canonical::render(&m.guid),
            define_guid: define::render(&m.guid, name),
            bytes: bytes::render(&m.guid),
            structure: structure::render(&m.guid),
            dump: render_dump(&m.guid, name),
        }
    }
}

impl TableDisplay for GuidReport {
    fn to_table(&self) -> String {
        let mut output = format!("\n{}\n", SEPARATOR);

        for name in &self.names {
            output.push_str(&format!("Name: {}\n", name));
        }
        if !self.names.is_empty() {
            output.push('\n');
        }

        output.push_str(&self.dump);
        output
    }

    fn to_compact(&self) -> String {
        match &self.name {
            Some(name) => format!("{} {}", self.guid, name),
            None => self.guid.clone(),
        }
    }
}

/// Reports for one resolved argument
#[derive(Debug, Clone, Serialize)]
pub struct ResolutionReport {
    /// Search text when several entries matched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub count: usize,
    pub reports: Vec<GuidReport>,
}

impl From<&Resolution> for ResolutionReport {
    fn from(resolution: &Resolution) -> Self {
        let reports: Vec<GuidReport> = resolution
            .matches()
            .into_iter()
            .map(GuidReport::from)
            .collect();

        let query = match resolution {
            Resolution::Single(_) => None,
            Resolution::Many { query, .. } => Some(query.clone()),
        };

        Self {
            query,
            count: reports.len(),
            reports,
        }
    }
}

impl TableDisplay for ResolutionReport {
    fn to_table(&self) -> String {
        let mut output = String::new();

        if self.count > 1 {
            output.push_str(&format!("Found {} entries.\n", self.count));
        }
        for report in &self.reports {
            output.push_str(&report.to_table());
        }

        output
    }

    fn to_compact(&self) -> String {
        self.reports
            .iter()
            .map(|r| r.to_compact())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Dictionary listing
#[derive(Debug, Clone, Serialize)]
pub struct EntryList {
    pub entries: Vec<EntryLine>,
}

/// One listed dictionary entry
#[derive(Debug, Clone, Serialize)]
pub struct EntryLine {
    pub name: String,
    pub guid: String,
    #[serde(skip)]
    pub define_guid: String,
}

impl From<&DictionaryEntry> for EntryLine {
    fn from(entry: &DictionaryEntry) -> Self {
        Self {
            name: entry.name.clone(),
            guid: canonical::render(&entry.guid),
            define_guid: define::render(&entry.guid, Some(entry.name.as_str())),
        }
    }
}

impl TableDisplay for EntryList {
    fn to_table(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}\n", e.define_guid))
            .collect()
    }

    fn to_compact(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{} {}", e.guid, e.name))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
