//! Literal classification
//!
//! Tries each notation in [`GuidFormat::PRIORITY`] order. A format mismatch
//! moves on to the next notation; a malformed literal stops the search.

use crate::error::ParseError;
use crate::format::{GuidFormat, ParsedLiteral};

/// Outcome of classifying a piece of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The text is a GUID literal
    Literal(ParsedLiteral),
    /// The text is not a literal; treat it as a name or search text
    Unrecognized,
}

/// Classify text as one of the GUID notations
pub fn classify(text: &str) -> Result<Classification, ParseError> {
    for format in GuidFormat::PRIORITY {
        match format.parse(text) {
            Ok(literal) => {
                log::trace!("'{}' parsed as {}", text.trim(), format);
                return Ok(Classification::Literal(literal));
            }
            Err(e) if e.is_mismatch() => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(Classification::Unrecognized)
}

/// Whether text is a complete, well-formed GUID literal
pub fn is_literal(text: &str) -> bool {
    matches!(classify(text), Ok(Classification::Literal(_)))
}
