//! GUID notations
//!
//! Each submodule parses and renders one textual notation:
//!
//! - [`canonical`]: `{000214F9-0000-0000-C000-000000000046}`
//! - [`structure`]: `{ 0x000214F9, 0x0000, 0x0000, { 0xC0, ... } }`
//! - [`define`]: `DEFINE_GUID(Name, 0x000214F9, ...);`
//! - [`bytes`]: `F9 14 02 00 ...`
//!
//! [`classify`] tries them in priority order.

pub mod bytes;
pub mod canonical;
pub mod classify;
pub mod define;
pub mod dump;
pub mod number;
pub mod structure;

pub use classify::{classify, is_literal, Classification};
pub use dump::render_dump;

use crate::domain::GuidValue;
use crate::error::ParseError;
use serde::Serialize;
use std::fmt;

/// A textual GUID notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidFormat {
    /// Braced registry string
    Canonical,
    /// Nested-brace struct initializer
    Struct,
    /// `DEFINE_GUID(...)` macro call
    DefineGuid,
    /// Sixteen raw bytes in memory order
    Bytes,
}

impl GuidFormat {
    /// Order in which free text is tried against each notation
    pub const PRIORITY: [GuidFormat; 4] = [
        GuidFormat::Canonical,
        GuidFormat::Struct,
        GuidFormat::DefineGuid,
        GuidFormat::Bytes,
    ];

    /// Parse text in this notation
    pub fn parse(self, text: &str) -> Result<ParsedLiteral, ParseError> {
        match self {
            GuidFormat::Canonical => canonical::parse(text),
            GuidFormat::Struct => structure::parse(text),
            GuidFormat::DefineGuid => define::parse(text),
            GuidFormat::Bytes => bytes::parse(text),
        }
    }

    /// Render a GUID in this notation; only `DEFINE_GUID` uses the name
    pub fn render(self, guid: &GuidValue, name: Option<&str>) -> String {
        match self {
            GuidFormat::Canonical => canonical::render(guid),
            GuidFormat::Struct => structure::render(guid),
            GuidFormat::DefineGuid => define::render(guid, name),
            GuidFormat::Bytes => bytes::render(guid),
        }
    }
}

impl fmt::Display for GuidFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GuidFormat::Canonical => "canonical",
            GuidFormat::Struct => "struct",
            GuidFormat::DefineGuid => "DEFINE_GUID",
            GuidFormat::Bytes => "byte dump",
        };
        write!(f, "{}", name)
    }
}

/// A successfully parsed GUID literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLiteral {
    /// Notation the literal was written in
    pub format: GuidFormat,
    /// Parsed value
    pub guid: GuidValue,
    /// Symbolic name, carried only by `DEFINE_GUID`
    pub name: Option<String>,
}

impl ParsedLiteral {
    /// Create a new parsed literal
    pub fn new(format: GuidFormat, guid: GuidValue, name: Option<String>) -> Self {
        Self { format, guid, name }
    }
}
