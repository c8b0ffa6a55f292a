//! The PO entry value type and its derived views.
//!
//! An [`Entry`] is an immutable, ordered mapping from a closed [`Key`]
//! vocabulary to the raw lines collected for that key. Comments, flags,
//! the previous entry, and the unescaped keyword texts are all computed
//! on demand from the stored lines.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{error::Error, escape::unescape, token::CommentKind};

/// The closed vocabulary of entry keys: the four comment kinds followed by
/// the three keywords, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Key {
    /// `#` — translator comment.
    Translator,
    /// `#.` — extracted (programmer) comment.
    Extracted,
    /// `#,` — flags.
    Flags,
    /// `#|` — previous-entry source text.
    Previous,
    /// `msgctxt` — message context.
    Msgctxt,
    /// `msgid` — message identifier.
    Msgid,
    /// `msgstr` — translated string.
    Msgstr,
}

impl Key {
    /// All keys in canonical order: comments first, then keywords.
    pub const ALL: [Key; 7] = [
        Key::Translator,
        Key::Extracted,
        Key::Flags,
        Key::Previous,
        Key::Msgctxt,
        Key::Msgid,
        Key::Msgstr,
    ];

    /// The marker or keyword that introduces this key in PO text.
    pub fn marker(self) -> &'static str {
        match self {
            Key::Translator => "#",
            Key::Extracted => "#.",
            Key::Flags => "#,",
            Key::Previous => "#|",
            Key::Msgctxt => "msgctxt",
            Key::Msgid => "msgid",
            Key::Msgstr => "msgstr",
        }
    }

    /// Whether this key is one of the four comment kinds.
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            Key::Translator | Key::Extracted | Key::Flags | Key::Previous
        )
    }

    /// Maps keyword text from the token stream onto the vocabulary.
    pub(crate) fn from_keyword(word: &str) -> Result<Self, Error> {
        match word {
            "msgctxt" => Ok(Key::Msgctxt),
            "msgid" => Ok(Key::Msgid),
            "msgstr" => Ok(Key::Msgstr),
            _ => Err(Error::parse("unknown comment or keyword")),
        }
    }
}

impl From<CommentKind> for Key {
    fn from(kind: CommentKind) -> Self {
        match kind {
            CommentKind::Translator => Key::Translator,
            CommentKind::Extracted => Key::Extracted,
            CommentKind::Flags => Key::Flags,
            CommentKind::Previous => Key::Previous,
        }
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// One PO entry: optional comments plus context/id/translated-string
/// keyword blocks, stored as raw lines per key.
///
/// Entries are immutable once constructed and own their backing data
/// outright. Keys iterate in insertion order; a key that is absent reads
/// back as an empty slice of lines, never as an error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    fields: Vec<(Key, Vec<String>)>,
}

impl Entry {
    /// Builds an entry from `(key, lines)` fields in insertion order.
    ///
    /// Each key may appear at most once; the vocabulary itself is closed
    /// by the [`Key`] enum.
    pub fn from_fields(fields: Vec<(Key, Vec<String>)>) -> Result<Self, Error> {
        for (i, (key, _)) in fields.iter().enumerate() {
            if fields[..i].iter().any(|(k, _)| k == key) {
                return Err(Error::parse("duplicate comment or keyword"));
            }
        }
        Ok(Entry { fields })
    }

    /// The raw lines stored for `key`; empty when the key is absent.
    pub fn lines(&self, key: Key) -> &[String] {
        self.fields
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, lines)| lines.as_slice())
            .unwrap_or(&[])
    }

    /// Keys actually present, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.fields.iter().map(|(k, _)| *k)
    }

    /// Joins a comment's lines with newlines, dropping the single leading
    /// separator character each stored line carries.
    fn comment_text(&self, key: Key) -> String {
        self.lines(key)
            .iter()
            .map(|line| {
                let mut chars = line.chars();
                chars.next();
                chars.as_str()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The translator comment (`#`).
    pub fn translator_comment(&self) -> String {
        self.comment_text(Key::Translator)
    }

    /// The extracted (programmer) comment (`#.`).
    pub fn extracted_comment(&self) -> String {
        self.comment_text(Key::Extracted)
    }

    /// The flag set parsed from the `#,` comment.
    ///
    /// Flags are comma-separated; each must consist of lowercase ASCII
    /// letters and hyphens, and no flag may repeat. Empty segments between
    /// commas are skipped.
    pub fn flags(&self) -> Result<BTreeSet<String>, Error> {
        let mut flags = BTreeSet::new();
        for flag in self.comment_text(Key::Flags).split(',') {
            let flag = flag.trim();
            if flag.is_empty() {
                continue;
            }
            if !flag.chars().all(|c| c.is_ascii_lowercase() || c == '-') {
                return Err(Error::parse("unknown flag"));
            }
            if !flags.insert(flag.to_string()) {
                return Err(Error::parse("duplicate flag"));
            }
        }
        Ok(flags)
    }

    /// The previous version of this entry, re-parsed from the `#|` comment
    /// as an independent miniature document.
    pub fn previous(&self) -> Result<Option<Entry>, Error> {
        let mut entries = crate::parse_str(&self.comment_text(Key::Previous))?;
        match entries.len() {
            0 => Ok(None),
            1 => Ok(entries.pop()),
            _ => Err(Error::parse("multiple previous entries")),
        }
    }

    /// Concatenates a keyword's string lines and decodes the escapes.
    fn keyword_text(&self, key: Key) -> Result<String, Error> {
        unescape(&self.lines(key).concat())
    }

    /// The message context (`msgctxt`), unescaped.
    pub fn msgctxt(&self) -> Result<String, Error> {
        self.keyword_text(Key::Msgctxt)
    }

    /// The message identifier (`msgid`), unescaped.
    pub fn msgid(&self) -> Result<String, Error> {
        self.keyword_text(Key::Msgid)
    }

    /// The translated string (`msgstr`), unescaped.
    pub fn msgstr(&self) -> Result<String, Error> {
        self.keyword_text(Key::Msgstr)
    }
}
