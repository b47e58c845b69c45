//! `DEFINE_GUID` macro-call notation
//!
//! ```text
//! DEFINE_GUID(IID_IShellLinkW, 0x000214F9, 0x0000, 0x0000, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46);
//! ```
//!
//! This is also the line format of the dictionary file.

use crate::domain::GuidValue;
use crate::error::ParseError;
use crate::format::number::guid_from_tokens;
use crate::format::{GuidFormat, ParsedLiteral};

/// Macro keyword that opens the notation
pub const MACRO_NAME: &str = "DEFINE_GUID";

/// Name rendered when a GUID has no symbolic name
pub const PLACEHOLDER_NAME: &str = "<Name>";

const FORMAT: GuidFormat = GuidFormat::DefineGuid;

/// Number of comma-separated items between the parentheses
const ITEM_COUNT: usize = 12;

/// Parse a `DEFINE_GUID(...)` call
///
/// Text is committed to this notation once it opens with `DEFINE_GUID(`.
pub fn parse(text: &str) -> Result<ParsedLiteral, ParseError> {
    let args = text
        .trim()
        .strip_prefix(MACRO_NAME)
        .and_then(|rest| rest.trim_start().strip_prefix('('))
        .ok_or(ParseError::FormatMismatch(FORMAT))?;

    let args = args.trim_end();
    let args = args.strip_suffix(';').map(str::trim_end).unwrap_or(args);
    let args = args
        .strip_suffix(')')
        .ok_or_else(|| ParseError::malformed(FORMAT, "missing closing parenthesis"))?;

    let items: Vec<&str> = args.split(',').map(str::trim).collect();
    if items.len() != ITEM_COUNT {
        return Err(ParseError::malformed(
            FORMAT,
            format!("expected {} items, found {}", ITEM_COUNT, items.len()),
        ));
    }

    let guid = guid_from_tokens(FORMAT, &items[1..])?;
    let name = Some(items[0]).filter(|n| !n.is_empty()).map(String::from);

    Ok(ParsedLiteral::new(FORMAT, guid, name))
}

/// Render a `DEFINE_GUID(...)` call, using `<Name>` when no name is given
pub fn render(guid: &GuidValue, name: Option<&str>) -> String {
    let name = name.filter(|n| !n.is_empty()).unwrap_or(PLACEHOLDER_NAME);
    let bytes = guid
        .data4
        .iter()
        .map(|b| format!("0x{:02X}", b))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}({}, 0x{:08X}, 0x{:04X}, 0x{:04X}, {});",
        MACRO_NAME, name, guid.data1, guid.data2, guid.data3, bytes
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL_LINK_W: GuidValue =
        GuidValue::new(0x000214F9, 0, 0, [0xC0, 0, 0, 0, 0, 0, 0, 0x46]);

    #[test]
    fn test_render_placeholder() {
        assert_eq!(
            render(&SHELL_LINK_W, None),
            "DEFINE_GUID(<Name>, 0x000214F9, 0x0000, 0x0000, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46);"
        );
        assert_eq!(render(&SHELL_LINK_W, Some("")), render(&SHELL_LINK_W, None));
    }

    #[test]
    fn test_parse_named() {
        let parsed = parse(&render(&SHELL_LINK_W, Some("IID_IShellLinkW"))).unwrap();
        assert_eq!(parsed.guid, SHELL_LINK_W);
        assert_eq!(parsed.name.as_deref(), Some("IID_IShellLinkW"));
    }

    #[test]
    fn test_parse_sdk_style() {
        let parsed =
            parse("DEFINE_GUID (IID_IShellLinkW, 0x000214F9L, 0, 0, 0xC0,0,0,0,0,0,0,0x46)").unwrap();
        assert_eq!(parsed.guid, SHELL_LINK_W);
    }

    #[test]
    fn test_parse_multiline_with_tabs() {
        let text = "DEFINE_GUID(IID_IDeskBand, 0xEB0FE172, 0x1A3A, 0x11D0, 0x89, 0xB3,\n\t0x00, 0xA0, 0xC9, 0x0A, 0x90, 0xAC);";
        let parsed = parse(text).unwrap();
        assert_eq!(parsed.guid.data1, 0xEB0FE172);
        assert_eq!(parsed.guid.data4[7], 0xAC);
    }

    #[test]
    fn test_mismatch_before_paren() {
        for text in ["DEFINE_GUID", "DEFINE_GUIDS(x)", "IID_IShellLinkW", "{ 0x1 }"] {
            assert_eq!(parse(text).unwrap_err(), ParseError::FormatMismatch(FORMAT));
        }
    }

    #[test]
    fn test_malformed_after_paren() {
        for text in [
            "DEFINE_GUID(",
            "DEFINE_GUID(Foo, 0x1, 0x2)",
            "DEFINE_GUID(Foo, 0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, 0xB",
            "DEFINE_GUID(Foo, 0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, bad);",
        ] {
            assert!(
                matches!(parse(text), Err(ParseError::MalformedLiteral { .. })),
                "{text}"
            );
        }
    }

    #[test]
    fn test_empty_name_is_none() {
        let parsed = parse("DEFINE_GUID(, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11)").unwrap();
        assert!(parsed.name.is_none());
        assert_eq!(parsed.guid.data4[7], 11);
    }
}
