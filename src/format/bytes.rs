//! Raw byte dump: `F9 14 02 00 00 00 00 00 C0 00 00 00 00 00 00 46`
//!
//! The sixteen bytes are the in-memory layout of the GUID, so the first three
//! fields appear little-endian. Bytes may carry a `0x` prefix and be separated
//! by spaces, tabs or commas, or be run together.

use crate::domain::{GuidValue, GUID_LEN};
use crate::error::ParseError;
use crate::format::{GuidFormat, ParsedLiteral};

const FORMAT: GuidFormat = GuidFormat::Bytes;

/// Parse a byte dump
///
/// Never reports a malformed literal: a partial dump is still useful as
/// search text.
pub fn parse(text: &str) -> Result<ParsedLiteral, ParseError> {
    let mismatch = || ParseError::FormatMismatch(FORMAT);
    let mut digits = String::with_capacity(GUID_LEN * 2);

    for token in text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let hex = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);

        if hex.is_empty() || hex.len() % 2 != 0 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(mismatch());
        }

        digits.push_str(hex);
        if digits.len() > GUID_LEN * 2 {
            return Err(mismatch());
        }
    }

    if digits.len() != GUID_LEN * 2 {
        return Err(mismatch());
    }

    let mut bytes = [0u8; GUID_LEN];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16).map_err(|_| mismatch())?;
    }

    Ok(ParsedLiteral::new(FORMAT, GuidValue::from_bytes(bytes), None))
}

/// Render the in-memory bytes as space-separated uppercase hex pairs
pub fn render(guid: &GuidValue) -> String {
    guid.to_bytes()
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL_LINK_W: GuidValue =
        GuidValue::new(0x000214F9, 0, 0, [0xC0, 0, 0, 0, 0, 0, 0, 0x46]);

    #[test]
    fn test_render_byte_order() {
        assert_eq!(
            render(&SHELL_LINK_W),
            "F9 14 02 00 00 00 00 00 C0 00 00 00 00 00 00 46"
        );
    }

    #[test]
    fn test_parse_spaced() {
        let parsed = parse("F9 14 02 00 00 00 00 00 C0 00 00 00 00 00 00 46").unwrap();
        assert_eq!(parsed.guid, SHELL_LINK_W);
    }

    #[test]
    fn test_parse_c_array_style() {
        let text = "0xF9, 0x14, 0x02, 0x00,\t0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46";
        assert_eq!(parse(text).unwrap().guid, SHELL_LINK_W);
    }

    #[test]
    fn test_parse_run_together() {
        let parsed = parse("72e10feb3a1ad01189b300a0c90a90ac").unwrap();
        assert_eq!(parsed.guid.data1, 0xEB0FE172);
        assert_eq!(parsed.guid.data2, 0x1A3A);
        assert_eq!(parsed.guid.data3, 0x11D0);
    }

    #[test]
    fn test_partial_dump_is_mismatch() {
        for text in [
            "F9 14 02",
            "F9 14 02 00 00 00 00 00 C0 00 00 00 00 00 00 46 00",
            "F9 14 02 00 00 00 00 00 C0 00 00 00 00 00 00 4",
            "F9 1 402 00 00 00 00 00 C0 00 00 00 00 00 00 46",
            "{000214F9-0000-0000-C000-000000000046}",
            "IID_IShellLinkW",
            "",
        ] {
            assert_eq!(parse(text).unwrap_err(), ParseError::FormatMismatch(FORMAT), "{text}");
        }
    }
}
