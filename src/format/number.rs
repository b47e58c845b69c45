//! Numeric field tokens
//!
//! Fields are written as C unsigned integer literals: `0x` hex, leading-zero
//! octal or decimal, with an optional `U`/`L` suffix. Values that overflow the
//! target field are narrowed by keeping the low bits.

use crate::domain::GuidValue;
use crate::error::ParseError;
use crate::format::GuidFormat;

/// Number of numeric tokens that make up a GUID (3 scalar fields + 8 bytes)
pub const FIELD_COUNT: usize = 11;

/// Parse a single C unsigned integer literal
pub fn parse_field(token: &str) -> Result<u64, ParseError> {
    let malformed = || ParseError::MalformedNumber(token.trim().to_string());

    let literal = strip_suffix(token.trim()).ok_or_else(malformed)?;

    let (radix, digits) = if let Some(hex) = literal
        .strip_prefix("0x")
        .or_else(|| literal.strip_prefix("0X"))
    {
        (16, hex)
    } else if literal.len() > 1 && literal.starts_with('0') {
        (8, &literal[1..])
    } else {
        (10, literal)
    };

    if digits.is_empty() {
        return Err(malformed());
    }

    digits
        .chars()
        .try_fold(0u64, |acc, c| {
            c.to_digit(radix)
                .map(|d| acc.wrapping_mul(u64::from(radix)).wrapping_add(u64::from(d)))
        })
        .ok_or_else(malformed)
}

/// Strip a C integer suffix (`u`, `l`, `ul`, `ll`, `ull`, ...)
fn strip_suffix(literal: &str) -> Option<&str> {
    let stripped = literal.trim_end_matches(['u', 'U', 'l', 'L']);
    let suffix = &literal[stripped.len()..];

    let unsigned = suffix.chars().filter(|c| c.eq_ignore_ascii_case(&'u')).count();
    if suffix.len() > 3 || unsigned > 1 {
        return None;
    }
    Some(stripped)
}

/// Build a GUID from the eleven numeric tokens shared by the struct and
/// `DEFINE_GUID` notations
pub fn guid_from_tokens(format: GuidFormat, tokens: &[&str]) -> Result<GuidValue, ParseError> {
    if tokens.len() != FIELD_COUNT {
        return Err(ParseError::malformed(
            format,
            format!("expected {} numbers, found {}", FIELD_COUNT, tokens.len()),
        ));
    }

    let values = tokens
        .iter()
        .map(|t| parse_field(t))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ParseError::malformed(format, e.to_string()))?;

    let mut data4 = [0u8; 8];
    for (byte, value) in data4.iter_mut().zip(&values[3..]) {
        *byte = *value as u8;
    }

    Ok(GuidValue::new(
        values[0] as u32,
        values[1] as u16,
        values[2] as u16,
        data4,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_decimal_octal() {
        assert_eq!(parse_field("0x000214F9").unwrap(), 0x214F9);
        assert_eq!(parse_field("0XfF").unwrap(), 0xFF);
        assert_eq!(parse_field("214").unwrap(), 214);
        assert_eq!(parse_field("010").unwrap(), 8);
        assert_eq!(parse_field("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_field("  0x46\t").unwrap(), 0x46);
    }

    #[test]
    fn test_parse_c_suffixes() {
        assert_eq!(parse_field("0x000214F9L").unwrap(), 0x214F9);
        assert_eq!(parse_field("12u").unwrap(), 12);
        assert_eq!(parse_field("0xFFull").unwrap(), 0xFF);
        assert!(parse_field("1uu").is_err());
        assert!(parse_field("1llll").is_err());
    }

    #[test]
    fn test_bare_hex_letters_rejected() {
        assert_eq!(
            parse_field("214F9"),
            Err(ParseError::MalformedNumber("214F9".to_string()))
        );

        let tokens = ["214F9", "0", "0", "0xC0", "0", "0", "0", "0", "0", "0", "0x46"];
        let err = guid_from_tokens(GuidFormat::Struct, &tokens).unwrap_err();
        assert_eq!(
            err,
            ParseError::malformed(GuidFormat::Struct, "Malformed number: '214F9'")
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_field("0xZZ").is_err());
        assert!(parse_field("").is_err());
        assert!(parse_field("0x").is_err());
        assert!(parse_field("09").is_err());
        assert!(parse_field("-1").is_err());
    }

    #[test]
    fn test_overflow_truncates() {
        let tokens = [
            "0x1FFFFFFFF", "0x12345", "0x10000", "0x1FF", "0", "0", "0", "0", "0", "0", "0x100",
        ];
        let guid = guid_from_tokens(GuidFormat::Struct, &tokens).unwrap();
        assert_eq!(guid.data1, 0xFFFFFFFF);
        assert_eq!(guid.data2, 0x2345);
        assert_eq!(guid.data3, 0);
        assert_eq!(guid.data4[0], 0xFF);
        assert_eq!(guid.data4[7], 0);
    }

    #[test]
    fn test_wrong_token_count() {
        let result = guid_from_tokens(GuidFormat::DefineGuid, &["1", "2"]);
        assert!(matches!(
            result,
            Err(ParseError::MalformedLiteral {
                format: GuidFormat::DefineGuid,
                ..
            })
        ));
    }

    #[test]
    fn test_bad_number_becomes_malformed_literal() {
        let tokens = ["0x1", "0x2", "0x3", "0x4", "0x5", "0x6", "0x7", "0x8", "0x9", "0xA", "nope"];
        let err = guid_from_tokens(GuidFormat::Struct, &tokens).unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
