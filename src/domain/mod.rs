//! Domain types
//!
//! - [`GuidValue`]: the 16-byte GUID and its memory layout
//! - [`DictionaryEntry`]: a named GUID

pub mod entry;
pub mod guid;

pub use entry::DictionaryEntry;
pub use guid::{GuidValue, GUID_LEN};
