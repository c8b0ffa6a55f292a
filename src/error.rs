//! Error type for the pocodec crate.
//!
//! Returned from all fallible operations (tokenizing, reading entries,
//! decoding escapes, derived entry accessors).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Malformed PO text. The message names the grammar rule that failed
    /// (e.g. "unterminated string", "duplicate keyword").
    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new parse error with the given reason.
    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse(message.into())
    }
}
