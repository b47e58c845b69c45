//! Canonical registry string: `{000214F9-0000-0000-C000-000000000046}`

use crate::domain::GuidValue;
use crate::error::ParseError;
use crate::format::{GuidFormat, ParsedLiteral};
use uuid::Uuid;

/// Length of the braced canonical string
const CANONICAL_LEN: usize = 38;

/// Hyphen offsets within the braced string
const HYPHENS: [usize; 4] = [9, 14, 19, 24];

/// Parse a braced canonical GUID string
///
/// Anything that is not exactly the braced 8-4-4-4-12 shape is a mismatch.
pub fn parse(text: &str) -> Result<ParsedLiteral, ParseError> {
    let text = text.trim();
    if !has_canonical_shape(text) {
        return Err(ParseError::FormatMismatch(GuidFormat::Canonical));
    }

    let uuid =
        Uuid::try_parse(text).map_err(|_| ParseError::FormatMismatch(GuidFormat::Canonical))?;

    Ok(ParsedLiteral::new(GuidFormat::Canonical, uuid.into(), None))
}

fn has_canonical_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != CANONICAL_LEN || bytes[0] != b'{' || bytes[CANONICAL_LEN - 1] != b'}' {
        return false;
    }

    bytes[1..CANONICAL_LEN - 1]
        .iter()
        .enumerate()
        .all(|(i, b)| {
            if HYPHENS.contains(&(i + 1)) {
                *b == b'-'
            } else {
                b.is_ascii_hexdigit()
            }
        })
}

/// Render the braced, uppercase canonical string
pub fn render(guid: &GuidValue) -> String {
    guid.to_string()
}
