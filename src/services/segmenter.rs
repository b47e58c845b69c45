//! Argument segmentation
//!
//! Shells split an unquoted literal such as
//! `DEFINE_GUID(Foo, 0x1, ...);` into many arguments. The segmenter joins
//! tokens back together until they form a complete literal or a bare
//! identifier.

use crate::format::{define::MACRO_NAME, is_literal};

/// Regroup whitespace-separated tokens into complete arguments
///
/// Tokens are appended to an accumulator, joined by single spaces. The
/// accumulator is emitted as soon as it is a GUID literal or an identifier.
/// Whatever remains at the end is emitted as one final argument.
pub fn segment<I, S>(tokens: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = Vec::new();
    let mut pending = String::new();

    for token in tokens {
        let token = token.as_ref();
        if token.is_empty() {
            continue;
        }

        if !pending.is_empty() {
            pending.push(' ');
        }
        pending.push_str(token);

        if is_literal(&pending) || is_identifier(&pending) {
            log::debug!("Segmented argument: {}", pending);
            args.push(std::mem::take(&mut pending));
        }
    }

    if !pending.is_empty() {
        log::debug!("Unterminated argument: {}", pending);
        args.push(pending);
    }

    args
}

/// Whether text is a C identifier other than the bare `DEFINE_GUID` keyword
pub fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && text != MACRO_NAME
}
