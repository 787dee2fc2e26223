//! A module to extract coordinate rows from an HTML table document
//!
//! Published Google Docs embed the coordinate table as plain HTML. The markup
//! is not guaranteed to be well formed XML so the reader is configured
//! leniently: end names are not checked and empty elements are expanded.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesRef, Event};
use quick_xml::Reader as XmlReader;

use crate::errors::{Error, Result};
use crate::Grid;

/// An HTML document expected to hold a coordinate table
///
/// The document is scanned with a pull parser; only the first `<table>`
/// element is considered and everything around it is ignored.
pub struct Doc<RS> {
    xml: XmlReader<RS>,
}

impl Doc<BufReader<File>> {
    /// Opens a document from a file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Doc::new(BufReader::new(File::open(path)?)))
    }
}

impl<RS: BufRead> Doc<RS> {
    /// Creates a new document from a reader
    pub fn new(reader: RS) -> Self {
        let mut xml = XmlReader::from_reader(reader);
        let config = xml.config_mut();
        config.check_end_names = false;
        config.trim_text(true);
        config.check_comments = false;
        config.expand_empty_elements = true;
        Doc { xml }
    }

    /// Decodes the ASCII art message held in the document table
    ///
    /// Convenience for [`Doc::table_rows`] followed by [`Grid::from_rows`]
    /// and [`Grid::render`].
    pub fn decode(&mut self) -> Result<String> {
        let rows = self.table_rows()?;
        let grid = Grid::from_rows(&rows)?;
        Ok(grid.render())
    }

    /// Reads the raw field rows of the first table in the document
    ///
    /// Each `<tr>` becomes one row of `<td>`/`<th>` cell texts, with nested
    /// markup flattened, entities unescaped and surrounding whitespace
    /// trimmed. The first table row is the column header and is excluded.
    ///
    /// Returns [`Error::TableNotFound`] when the document holds no table.
    pub fn table_rows(&mut self) -> Result<Vec<Vec<String>>> {
        let mut buf = Vec::with_capacity(1024);
        loop {
            buf.clear();
            match self.xml.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"table" => {
                    return self.read_table();
                }
                Ok(Event::Eof) => return Err(Error::TableNotFound),
                Err(e) => return Err(Error::Xml(e)),
                _ => (),
            }
        }
    }

    fn read_table(&mut self) -> Result<Vec<Vec<String>>> {
        let mut rows = Vec::new();
        let mut buf = Vec::with_capacity(1024);
        let mut row_buf = Vec::with_capacity(1024);
        loop {
            buf.clear();
            match self.xml.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.local_name().as_ref() == b"tr" => {
                    let row = self.read_row(&mut row_buf)?;
                    rows.push(row);
                }
                Ok(Event::End(ref e)) if e.local_name().as_ref() == b"table" => break,
                Ok(Event::Eof) => return Err(Error::XmlEof("table")),
                Err(e) => return Err(Error::Xml(e)),
                _ => (),
            }
        }
        // first row is the column header per the source format
        if !rows.is_empty() {
            rows.remove(0);
        }
        debug!("extracted {} coordinate rows", rows.len());
        Ok(rows)
    }

    fn read_row(&mut self, buf: &mut Vec<u8>) -> Result<Vec<String>> {
        let mut fields = Vec::with_capacity(3);
        loop {
            buf.clear();
            match self.xml.read_event_into(buf) {
                Ok(Event::Start(ref e)) if matches!(e.local_name().as_ref(), b"td" | b"th") => {
                    fields.push(self.read_cell()?);
                }
                Ok(Event::End(ref e)) if e.local_name().as_ref() == b"tr" => break,
                Ok(Event::Eof) => return Err(Error::XmlEof("tr")),
                Err(e) => return Err(Error::Xml(e)),
                _ => (),
            }
        }
        Ok(fields)
    }

    fn read_cell(&mut self) -> Result<String> {
        let mut buf = Vec::with_capacity(1024);
        let mut value = String::new();
        loop {
            buf.clear();
            match self.xml.read_event_into(&mut buf) {
                Ok(Event::Text(ref t)) => value.push_str(&t.xml10_content()?),
                Ok(Event::GeneralRef(ref e)) => push_entity(e, &mut value)?,
                Ok(Event::End(ref e)) if matches!(e.local_name().as_ref(), b"td" | b"th") => break,
                Ok(Event::Eof) => return Err(Error::XmlEof("td")),
                Err(e) => return Err(Error::Xml(e)),
                _ => (),
            }
        }
        Ok(value)
    }
}

/// Resolves a general entity reference and appends it to `value`.
///
/// Unknown entities are kept verbatim rather than rejected, HTML documents
/// use more entities than the predefined xml set.
fn push_entity(e: &BytesRef<'_>, value: &mut String) -> Result<()> {
    if let Some(ch) = e.resolve_char_ref()? {
        value.push(ch);
    } else {
        let entity = e.decode()?;
        match resolve_predefined_entity(&entity) {
            Some(s) => value.push_str(s),
            None => {
                value.push('&');
                value.push_str(&entity);
                value.push(';');
            }
        }
    }
    Ok(())
}
