//! Error management module
//!
//! Provides all grid decoding error conversion and description.
//! Also provides `Result` as an alias of `Result<_, Error>`.

use std::fmt;

/// An enum for all errors that can occur while decoding a document
#[derive(Debug)]
pub enum Error {
    /// Io error
    Io(std::io::Error),
    /// Xml error
    Xml(quick_xml::Error),
    /// Xml encoding error
    Encoding(quick_xml::encoding::EncodingError),
    /// Unexpected end of xml
    XmlEof(&'static str),
    /// No table found in the document
    TableNotFound,
    /// Wrong number of columns in a table row
    MissingColumns {
        /// number of columns a data row must have
        expected: usize,
        /// number of columns found
        found: usize,
    },
    /// A coordinate field cannot be parsed as an integer
    InvalidCoordinate {
        /// coordinate axis, `"x"` or `"y"`
        axis: &'static str,
        /// value found
        val: String,
    },
    /// A coordinate field is a negative integer
    NegativeCoordinate {
        /// coordinate axis, `"x"` or `"y"`
        axis: &'static str,
        /// value found
        val: i64,
    },
    /// A character field does not hold exactly one character
    InvalidCharacter(String),
}

from_err!(std::io::Error, Error, Io);
from_err!(quick_xml::Error, Error, Xml);
from_err!(quick_xml::encoding::EncodingError, Error, Encoding);

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Xml(e) => write!(f, "Xml error: {e}"),
            Error::Encoding(e) => write!(f, "Xml encoding error: {e}"),
            Error::XmlEof(e) => write!(f, "Unexpected end of xml, expecting '</{e}>'"),
            Error::TableNotFound => write!(f, "No table found in the document"),
            Error::MissingColumns { expected, found } => {
                write!(f, "Expecting {expected} columns in table row, found {found}")
            }
            Error::InvalidCoordinate { axis, val } => {
                write!(f, "Invalid {axis} coordinate: {val:?}")
            }
            Error::NegativeCoordinate { axis, val } => {
                write!(f, "Negative {axis} coordinate: {val}")
            }
            Error::InvalidCharacter(val) => {
                write!(f, "Expecting a single character cell, found {val:?}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Xml(e) => Some(e),
            Error::Encoding(e) => Some(e),
            _ => None,
        }
    }
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
