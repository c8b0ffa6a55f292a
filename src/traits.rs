//! Traits for parsing and serializing a whole PO document from/to one
//! stream.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Write},
    path::Path,
};

use crate::{entry::Entry, error::Error, reader::Reader, writer::Writer};

/// A trait for reading and writing a PO document as a unit.
///
/// Implemented for `Vec<Entry>`; the defaults wire any `BufRead` line
/// source or `Write` sink through the streaming [`Reader`] and [`Writer`].
///
/// # Example
///
/// ```rust,no_run
/// use pocodec::{Entry, Parser};
/// let entries = Vec::<Entry>::read_from("fr.po")?;
/// entries.write_to("fr_copy.po")?;
/// Ok::<(), pocodec::Error>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = File::create(path)?;
        self.to_writer(BufWriter::new(file))
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }
}

impl Parser for Vec<Entry> {
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        Reader::new(reader).collect()
    }

    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut writer = Writer::new(writer);
        for entry in self {
            writer.write(entry)?;
        }
        Ok(())
    }
}
