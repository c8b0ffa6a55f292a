//! Backslash-escape decoding for quoted PO strings.
//!
//! Decoding is one-directional: the [`Writer`](crate::Writer) quotes string
//! lines verbatim and never re-escapes, so text fed back into an entry must
//! already be escape-safe.

use crate::error::Error;

/// Decodes the fixed PO escape table.
///
/// Recognized sequences are `\"`, `\'`, `\\`, `\a`, `\b`, `\f`, `\n`,
/// `\r`, `\t`, and `\v`. Anything else after a backslash, including a
/// backslash at the end of the input, fails with "unknown escape".
pub fn unescape(raw: &str) -> Result<String, Error> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let decoded = match chars.next() {
            Some('"') => '"',
            Some('\'') => '\'',
            Some('\\') => '\\',
            Some('a') => '\x07',
            Some('b') => '\x08',
            Some('f') => '\x0c',
            Some('n') => '\n',
            Some('r') => '\r',
            Some('t') => '\t',
            Some('v') => '\x0b',
            _ => return Err(Error::parse("unknown escape")),
        };
        out.push(decoded);
    }
    Ok(out)
}
