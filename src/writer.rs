//! Serializer inverting the read path.

use std::io::Write;

use crate::{
    entry::{Entry, Key},
    error::Error,
};

/// Writes PO entries to an output sink.
///
/// The first entry is written without a leading blank line; every entry
/// after it is preceded by exactly one. Keys are emitted in canonical
/// vocabulary order (comments first, then keywords). String lines are
/// quoted verbatim with no re-escaping, so content must already be
/// escape-safe to round-trip.
///
/// # Example
///
/// ```rust
/// use pocodec::{Entry, Key, Writer};
///
/// let entry = Entry::from_fields(vec![
///     (Key::Msgid, vec!["Hello".to_string()]),
///     (Key::Msgstr, vec!["Bonjour".to_string()]),
/// ])?;
/// let mut writer = Writer::new(Vec::new());
/// writer.write(&entry)?;
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(text, "msgid \"Hello\"\nmsgstr \"Bonjour\"\n");
/// # Ok::<(), pocodec::Error>(())
/// ```
pub struct Writer<W: Write> {
    sink: W,
    separate: bool,
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W) -> Self {
        Writer {
            sink,
            separate: false,
        }
    }

    /// Serializes one entry.
    pub fn write(&mut self, entry: &Entry) -> Result<(), Error> {
        if self.separate {
            writeln!(self.sink)?;
        }
        for key in Key::ALL {
            let lines = entry.lines(key);
            if lines.is_empty() {
                continue;
            }
            if key.is_comment() {
                for line in lines {
                    // Stored comment lines carry their own leading separator.
                    debug_assert!(line.is_empty() || line.starts_with(char::is_whitespace));
                    writeln!(self.sink, "{}{}", key.marker(), line)?;
                }
            } else {
                write!(self.sink, "{} ", key.marker())?;
                for line in lines {
                    writeln!(self.sink, "\"{}\"", line)?;
                }
            }
        }
        self.separate = true;
        Ok(())
    }

    /// Consumes the writer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}
