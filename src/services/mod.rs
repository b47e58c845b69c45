//! Service layer for argument handling
//!
//! Services encapsulate the logic between raw command-line tokens and the
//! reports printed for them.

pub mod lookup;
pub mod segmenter;

pub use lookup::{GuidMatch, LookupOptions, LookupService, Resolution};
pub use segmenter::{is_identifier, segment};
