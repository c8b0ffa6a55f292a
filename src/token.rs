//! Tokenizer for the PO text format.
//!
//! Splits a line source into comment, keyword, string, and blank-line
//! tokens. String token values keep their escape sequences raw; decoding
//! happens later via [`crate::escape::unescape`] when keyword text is
//! assembled from an entry.

use std::fmt::{Display, Formatter};
use std::io::{BufRead, Lines};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The four PO comment markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum CommentKind {
    /// `#` — translator comment.
    Translator,
    /// `#.` — extracted (programmer) comment.
    Extracted,
    /// `#,` — flags.
    Flags,
    /// `#|` — previous-entry source text.
    Previous,
}

impl CommentKind {
    /// The literal marker that introduces this comment kind.
    pub fn marker(self) -> &'static str {
        match self {
            CommentKind::Translator => "#",
            CommentKind::Extracted => "#.",
            CommentKind::Flags => "#,",
            CommentKind::Previous => "#|",
        }
    }
}

impl Display for CommentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// One lexical event produced by the [`Tokenizer`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub enum Token {
    /// An empty or whitespace-only line, the entry separator.
    Blank,
    /// A whole-line comment: the kind plus everything after the marker,
    /// leading separator included.
    Comment(CommentKind, String),
    /// A maximal run of alphabetic characters, e.g. `msgid`.
    Keyword(String),
    /// The content between double quotes, escapes still raw.
    Str(String),
}

/// Lazy, forward-only tokenizer over a line source.
///
/// Implements `Iterator<Item = Result<Token, Error>>`; the sequence is
/// single-pass and ends when the source is exhausted. Re-tokenizing
/// requires a fresh `Tokenizer` over fresh input.
pub struct Tokenizer<R: BufRead> {
    source: Lines<R>,
    /// Unconsumed tail of the current line, trimmed of leading whitespace.
    rest: String,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(source: R) -> Self {
        Tokenizer {
            source: source.lines(),
            rest: String::new(),
        }
    }

    fn next_in_line(&mut self) -> Result<Token, Error> {
        let (token, consumed) = match scan_token(&self.rest) {
            Ok(pair) => pair,
            Err(err) => {
                self.rest.clear();
                return Err(err);
            }
        };
        self.rest = self.rest[consumed..].trim_start().to_string();
        Ok(token)
    }
}

impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if !self.rest.is_empty() {
                return Some(self.next_in_line());
            }
            let line = match self.source.next()? {
                Ok(line) => line,
                Err(err) => return Some(Err(err.into())),
            };
            let trimmed = line.trim_start();
            if trimmed.is_empty() {
                return Some(Ok(Token::Blank));
            }
            if trimmed.starts_with('#') {
                // A comment consumes the whole line.
                return Some(comment_token(trimmed));
            }
            self.rest = trimmed.to_string();
        }
    }
}

/// Scans one keyword or string token from the head of a line tail.
/// Returns the token and the number of bytes consumed.
fn scan_token(rest: &str) -> Result<(Token, usize), Error> {
    if let Some(tail) = rest.strip_prefix('"') {
        let mut chars = tail.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '"' => return Ok((Token::Str(tail[..i].to_string()), i + 2)),
                // A backslash escapes the following character, whatever it is.
                '\\' => {
                    chars.next();
                }
                _ => {}
            }
        }
        // Strings cannot span lines.
        Err(Error::parse("unterminated string"))
    } else if rest.starts_with(|c: char| c.is_alphabetic()) {
        let end = rest
            .find(|c: char| !c.is_alphabetic())
            .unwrap_or(rest.len());
        Ok((Token::Keyword(rest[..end].to_string()), end))
    } else {
        Err(Error::parse("unknown character"))
    }
}

/// Classifies a full comment line (already trimmed, starting with `#`).
///
/// The marker must be followed by end-of-line or whitespace; the token
/// value is everything after the marker, separator included.
fn comment_token(line: &str) -> Result<Token, Error> {
    let mut chars = line.chars();
    chars.next();
    let second = match chars.next() {
        None => return Ok(Token::Comment(CommentKind::Translator, String::new())),
        Some(c) if c.is_whitespace() => {
            return Ok(Token::Comment(CommentKind::Translator, line[1..].to_string()));
        }
        Some(c) => c,
    };
    let kind = match second {
        '.' => CommentKind::Extracted,
        ',' => CommentKind::Flags,
        '|' => CommentKind::Previous,
        _ => return Err(Error::parse("unknown comment marker")),
    };
    match chars.next() {
        None => Ok(Token::Comment(kind, String::new())),
        Some(c) if c.is_whitespace() => Ok(Token::Comment(kind, line[2..].to_string())),
        Some(_) => Err(Error::parse("unknown comment marker")),
    }
}
