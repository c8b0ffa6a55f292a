#![forbid(unsafe_code)]
//! Reader and writer for gettext PO translation catalogs.
//!
//! The crate covers the entry-level read/write contract of the PO text
//! format: tokenizing lines, assembling entries under the PO grammar,
//! decoding backslash escapes, and serializing entries back to text.
//!
//! # Quick Start
//!
//! ```rust
//! use pocodec::parse_str;
//!
//! let entries = parse_str("msgid \"Hello\"\nmsgstr \"Bonjour\"\n")?;
//! assert_eq!(entries[0].msgid()?, "Hello");
//! assert_eq!(entries[0].msgstr()?, "Bonjour");
//! # Ok::<(), pocodec::Error>(())
//! ```
//!
//! For streaming, [`Reader`] yields one [`Entry`] per iteration from any
//! `BufRead` line source, and [`Writer`] serializes entries one at a time
//! to any `Write` sink. The [`Parser`] trait wraps both for whole-document
//! reads and writes.
//!
//! Obsolete (`#~`) entries, plural forms, and domain headers are not
//! supported.

pub mod entry;
pub mod error;
pub mod escape;
pub mod reader;
pub mod token;
pub mod traits;
pub mod writer;

// Re-export most used types for easy consumption
pub use crate::{
    entry::{Entry, Key},
    error::Error,
    escape::unescape,
    reader::Reader,
    token::{CommentKind, Token, Tokenizer},
    traits::Parser,
    writer::Writer,
};

use std::io::Cursor;

/// Parses a complete PO document from an in-memory string.
///
/// Also used by [`Entry::previous`] to re-parse a `#|` comment as its own
/// miniature document, independent of any outer read in progress.
pub fn parse_str(text: &str) -> Result<Vec<Entry>, Error> {
    Reader::new(Cursor::new(text)).collect()
}
