//! refguid - GUID conversion and lookup library
//!
//! This library recognizes GUIDs written as canonical registry strings,
//! struct initializers, `DEFINE_GUID(...)` calls or raw byte dumps, renders
//! them in every notation, and looks them up in a dictionary of named GUIDs.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`dictionary`]: Named GUID dictionary and its sources
//! - [`domain`]: GUID value and dictionary entry types
//! - [`error`]: Error types
//! - [`format`]: Parsers and formatters for each notation
//! - [`services`]: Argument segmentation and resolution

pub mod cli;
pub mod commands;
pub mod config;
pub mod dictionary;
pub mod domain;
pub mod error;
pub mod format;
pub mod services;

pub use error::{AppError, Result};
