//! The entry-assembly state machine.

use std::io::BufRead;

use crate::{
    entry::{Entry, Key},
    error::Error,
    token::{Token, Tokenizer},
};

/// Reads PO entries one at a time from a line source.
///
/// `Reader` keeps a one-token lookahead over a [`Tokenizer`] and yields
/// exactly one [`Entry`] per iteration, enforcing the entry grammar as it
/// goes. It is forward-only and single-pass; re-reading requires a fresh
/// reader over fresh input. Any grammar violation aborts the current read
/// with no partial entry.
///
/// # Example
///
/// ```rust
/// use pocodec::Reader;
/// use std::io::Cursor;
///
/// let text = "msgid \"Hello\"\nmsgstr \"Bonjour\"\n";
/// let entries = Reader::new(Cursor::new(text)).collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].msgid()?, "Hello");
/// # Ok::<(), pocodec::Error>(())
/// ```
pub struct Reader<R: BufRead> {
    tokens: Tokenizer<R>,
    peeked: Option<Option<Token>>,
}

impl<R: BufRead> Reader<R> {
    pub fn new(source: R) -> Self {
        Reader {
            tokens: Tokenizer::new(source),
            peeked: None,
        }
    }

    /// Fills the lookahead slot if needed and returns a view of it.
    /// `None` means the token stream is exhausted.
    fn peek(&mut self) -> Result<Option<&Token>, Error> {
        if self.peeked.is_none() {
            self.peeked = Some(self.tokens.next().transpose()?);
        }
        Ok(self.peeked.as_ref().and_then(|token| token.as_ref()))
    }

    /// Consumes and returns the lookahead token.
    fn bump(&mut self) -> Result<Option<Token>, Error> {
        self.peek()?;
        Ok(self.peeked.take().flatten())
    }

    fn read_entry(&mut self) -> Result<Option<Entry>, Error> {
        // Blank-line separators, including any before the first entry.
        while matches!(self.peek()?, Some(Token::Blank)) {
            self.bump()?;
        }
        if self.peek()?.is_none() {
            return Ok(None);
        }

        let mut fields: Vec<(Key, Vec<String>)> = Vec::new();

        // Comment phase: consecutive lines of one kind form a single
        // field. A kind may not start a second time within the entry.
        while let Some(Token::Comment(kind, _)) = self.peek()? {
            let key = Key::from(*kind);
            if fields.iter().any(|(k, _)| *k == key) {
                return Err(Error::parse("discontinuous comment"));
            }
            let mut lines = Vec::new();
            while matches!(self.peek()?, Some(Token::Comment(k, _)) if Key::from(*k) == key) {
                if let Some(Token::Comment(_, value)) = self.bump()? {
                    lines.push(value);
                }
            }
            fields.push((key, lines));
        }

        // Keyword phase: each keyword takes the run of string tokens that
        // follows it.
        while matches!(self.peek()?, Some(Token::Keyword(_))) {
            let key = match self.bump()? {
                Some(Token::Keyword(word)) => Key::from_keyword(&word)?,
                _ => unreachable!(),
            };
            if fields.iter().any(|(k, _)| *k == key) {
                return Err(Error::parse("duplicate keyword"));
            }
            let mut lines = Vec::new();
            while matches!(self.peek()?, Some(Token::Str(_))) {
                if let Some(Token::Str(value)) = self.bump()? {
                    lines.push(value);
                }
            }
            if lines.is_empty() {
                return Err(Error::parse("no strings after keyword"));
            }
            fields.push((key, lines));
        }

        // An entry ends at a blank line or end of input.
        match self.peek()? {
            None | Some(Token::Blank) => {}
            Some(_) => return Err(Error::parse("expected end of entry")),
        }
        while matches!(self.peek()?, Some(Token::Blank)) {
            self.bump()?;
        }

        // Construction re-validates the collected fields.
        Entry::from_fields(fields).map(Some)
    }
}

impl<R: BufRead> Iterator for Reader<R> {
    type Item = Result<Entry, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_entry().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Cursor;

    fn read(input: &str) -> Result<Vec<Entry>, Error> {
        Reader::new(Cursor::new(input)).collect()
    }

    #[test]
    fn test_read_empty_input() {
        assert!(read("").unwrap().is_empty());
    }

    #[test]
    fn test_read_blank_only_input() {
        assert!(read("\n\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_read_full_entry() {
        let text = indoc! {r#"
            # translator note
            #. extracted note
            #, fuzzy
            #| msgid "former"
            msgctxt "menu"
            msgid "Open"
            msgstr "Ouvrir"
        "#};
        let entries = read(text).unwrap();
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.translator_comment(), "translator note");
        assert_eq!(entry.extracted_comment(), "extracted note");
        assert!(entry.flags().unwrap().contains("fuzzy"));
        assert_eq!(
            entry.previous().unwrap().unwrap().msgid().unwrap(),
            "former"
        );
        assert_eq!(entry.msgctxt().unwrap(), "menu");
        assert_eq!(entry.msgid().unwrap(), "Open");
        assert_eq!(entry.msgstr().unwrap(), "Ouvrir");
    }

    #[test]
    fn test_read_multiple_entries() {
        let text = indoc! {r#"
            msgid "one"
            msgstr "un"

            msgid "two"
            msgstr "deux"
        "#};
        let entries = read(text).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msgid().unwrap(), "one");
        assert_eq!(entries[1].msgid().unwrap(), "two");
    }

    #[test]
    fn test_read_ignores_leading_and_extra_blank_lines() {
        let text = "\n\nmsgid \"a\"\nmsgstr \"b\"\n\n\n\nmsgid \"c\"\nmsgstr \"d\"\n\n";
        let entries = read(text).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_read_multiline_keyword_value() {
        let text = indoc! {r#"
            msgid ""
            "first line\n"
            "second line"
            msgstr ""
        "#};
        let entries = read(text).unwrap();
        assert_eq!(entries[0].msgid().unwrap(), "first line\nsecond line");
        assert_eq!(entries[0].lines(crate::Key::Msgid).len(), 3);
    }

    #[test]
    fn test_read_consecutive_comment_lines_collect_into_one_field() {
        let text = indoc! {"
            # line one
            # line two
            msgid \"x\"
            msgstr \"y\"
        "};
        let entries = read(text).unwrap();
        assert_eq!(entries[0].translator_comment(), "line one\nline two");
    }

    #[test]
    fn test_read_discontinuous_comment() {
        let text = indoc! {"
            # first
            #. other kind
            # again
            msgid \"x\"
            msgstr \"y\"
        "};
        let err = read(text).unwrap_err();
        assert_eq!(err.to_string(), "parse error: discontinuous comment");
    }

    #[test]
    fn test_read_duplicate_keyword() {
        let err = read("msgid \"a\"\nmsgid \"b\"\n").unwrap_err();
        assert_eq!(err.to_string(), "parse error: duplicate keyword");
    }

    #[test]
    fn test_read_no_strings_after_keyword() {
        let err = read("msgid\nmsgstr \"x\"\n").unwrap_err();
        assert_eq!(err.to_string(), "parse error: no strings after keyword");

        let err = read("msgid msgstr \"x\"\n").unwrap_err();
        assert_eq!(err.to_string(), "parse error: no strings after keyword");
    }

    #[test]
    fn test_read_unknown_keyword() {
        let err = read("msgplural \"x\"\n").unwrap_err();
        assert_eq!(err.to_string(), "parse error: unknown comment or keyword");
    }

    #[test]
    fn test_read_expected_end_of_entry() {
        // A comment after the keyword phase cannot start a new field.
        let text = indoc! {"
            msgid \"a\"
            msgstr \"b\"
            # trailing
        "};
        let err = read(text).unwrap_err();
        assert_eq!(err.to_string(), "parse error: expected end of entry");

        // An orphan string with no keyword in front of it.
        let err = read("\"orphan\"\n").unwrap_err();
        assert_eq!(err.to_string(), "parse error: expected end of entry");
    }

    #[test]
    fn test_read_is_lazy_per_entry() {
        let text = "msgid \"good\"\nmsgstr \"ok\"\n\nmsgid \"bad\"\nmsgid \"dup\"\n";
        let mut reader = Reader::new(Cursor::new(text));
        let first = reader.next().unwrap().unwrap();
        assert_eq!(first.msgid().unwrap(), "good");
        assert!(reader.next().unwrap().is_err());
    }

    #[test]
    fn test_read_entry_without_trailing_newline() {
        let entries = read("msgid \"a\"\nmsgstr \"b\"").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].msgstr().unwrap(), "b");
    }
}
