//! Struct initializer notation
//!
//! ```text
//! { 0x000214F9, 0x0000, 0x0000, { 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46 } }
//! ```
//!
//! Grammar (whitespace allowed between all tokens):
//!
//! ```text
//! literal := '{' num ',' num ',' num ',' '{' num (',' num){7} '}' '}' [';']
//! ```
//!
//! Text that starts with `{`, ends with `}` and contains a comma is committed
//! to this notation; any deviation from the grammar after that point is a
//! malformed literal.

use crate::domain::GuidValue;
use crate::error::ParseError;
use crate::format::number::guid_from_tokens;
use crate::format::{GuidFormat, ParsedLiteral};

const FORMAT: GuidFormat = GuidFormat::Struct;

/// Parse a struct initializer
pub fn parse(text: &str) -> Result<ParsedLiteral, ParseError> {
    let text = text.trim();
    let body = text.strip_suffix(';').map(str::trim_end).unwrap_or(text);

    if !(body.starts_with('{') && body.ends_with('}') && body.contains(',')) {
        return Err(ParseError::FormatMismatch(FORMAT));
    }
    let inner = &body[1..body.len() - 1];

    let open = inner
        .find('{')
        .ok_or_else(|| ParseError::malformed(FORMAT, "missing nested byte group"))?;
    let (head, group) = (&inner[..open], &inner[open + 1..]);

    let group = group
        .trim_end()
        .strip_suffix('}')
        .ok_or_else(|| ParseError::malformed(FORMAT, "byte group or outer brace not closed"))?;
    if head.contains('}') || group.contains(['{', '}']) {
        return Err(ParseError::malformed(FORMAT, "unbalanced braces"));
    }

    let head = head
        .trim_end()
        .strip_suffix(',')
        .ok_or_else(|| ParseError::malformed(FORMAT, "expected ',' before byte group"))?;

    let fields: Vec<&str> = head.split(',').collect();
    if fields.len() != 3 {
        return Err(ParseError::malformed(
            FORMAT,
            format!("expected 3 fields before byte group, found {}", fields.len()),
        ));
    }

    let bytes: Vec<&str> = group.split(',').collect();
    if bytes.len() != 8 {
        return Err(ParseError::malformed(
            FORMAT,
            format!("expected 8 bytes in byte group, found {}", bytes.len()),
        ));
    }

    let tokens: Vec<&str> = fields.into_iter().chain(bytes).collect();
    let guid = guid_from_tokens(FORMAT, &tokens)?;

    Ok(ParsedLiteral::new(FORMAT, guid, None))
}

/// Render a struct initializer
pub fn render(guid: &GuidValue) -> String {
    let bytes = guid
        .data4
        .iter()
        .map(|b| format!("0x{:02X}", b))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{{ 0x{:08X}, 0x{:04X}, 0x{:04X}, {{ {} }} }}",
        guid.data1, guid.data2, guid.data3, bytes
    )
}
