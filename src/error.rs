//! Unified error types for refguid
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use crate::format::GuidFormat;
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from dictionary loading
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Error from dictionary lookups
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Nothing to do: no tokens and no mode selected
    #[error("No GUID, name or search text given")]
    NoInput,

    /// IO error (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Level at which the error is logged before it is reported
    ///
    /// A failed lookup is reported to the user as a bare "Not found", so it
    /// only shows up in verbose logs.
    pub fn log_level(&self) -> log::Level {
        match self {
            AppError::Lookup(LookupError::NotFound(_)) => log::Level::Debug,
            _ => log::Level::Error,
        }
    }
}

/// Errors from GUID literal parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text does not have the shape of the format under test
    #[error("Not a {0} literal")]
    FormatMismatch(GuidFormat),

    /// The text has the shape of a format but carries invalid data
    #[error("Malformed {format} literal: {reason}")]
    MalformedLiteral { format: GuidFormat, reason: String },

    /// A numeric field token is not an unsigned integer
    #[error("Malformed number: '{0}'")]
    MalformedNumber(String),
}

impl ParseError {
    /// Build a malformed-literal error for `format`
    pub fn malformed(format: GuidFormat, reason: impl Into<String>) -> Self {
        ParseError::MalformedLiteral {
            format,
            reason: reason.into(),
        }
    }

    /// Whether the classifier may move on to the next format
    pub fn is_mismatch(&self) -> bool {
        matches!(self, ParseError::FormatMismatch(_))
    }
}

/// Errors from loading the dictionary
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary resource could not be read
    #[error("Cannot read dictionary {path}: {source}")]
    Unavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from resolving an argument against the dictionary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No entry matched the name or search text
    #[error("Not found: {0}")]
    NotFound(String),

    /// Lookups were requested but no dictionary could be loaded
    #[error("Dictionary unavailable, cannot look up '{0}'")]
    DictionaryUnavailable(String),

    /// The argument was a malformed literal
    #[error("{0}")]
    Parse(#[from] ParseError),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
