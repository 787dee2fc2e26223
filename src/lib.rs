//! Rust HTML table to ASCII art decoder
//!
//! # Status
//!
//! **artgrid** is a pure Rust library to decode ASCII art messages hidden in
//! HTML documents that carry a three column table of `(x, character, y)` rows,
//! the format produced by published Google Docs.
//!
//! The document is scanned with a lenient pull parser, the coordinate rows are
//! accumulated into a sparse [`Grid`] and the grid is rendered top to bottom
//! into a fixed width text block.
//!
//! # Examples
//! ```
//! use artgrid::Doc;
//!
//! let html = "<table>
//!     <tr><td>x-coordinate</td><td>Character</td><td>y-coordinate</td></tr>
//!     <tr><td>0</td><td>█</td><td>0</td></tr>
//!     <tr><td>0</td><td>█</td><td>1</td></tr>
//!     <tr><td>0</td><td>█</td><td>2</td></tr>
//!     <tr><td>1</td><td>▀</td><td>1</td></tr>
//!     <tr><td>1</td><td>▀</td><td>2</td></tr>
//!     <tr><td>2</td><td>▀</td><td>1</td></tr>
//!     <tr><td>2</td><td>▀</td><td>2</td></tr>
//!     <tr><td>3</td><td>▀</td><td>2</td></tr>
//! </table>";
//!
//! let mut doc = Doc::new(html.as_bytes());
//! assert_eq!(doc.decode().unwrap(), "█▀▀▀\n█▀▀ \n█   ");
//! ```
#![deny(missing_docs)]

#[macro_use]
mod utils;
pub mod errors;
mod html;

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

use log::warn;
use serde::ser::{Serialize, SerializeStruct, Serializer};

pub use errors::Error;
pub use html::Doc;

use errors::Result;

/// A sparse grid of display characters together with its rendering bounds
///
/// A grid stores at most one character per `(x, y)` coordinate. `x` grows
/// rightward and `y` grows upward, so row 0 is the bottom row of the rendered
/// output. The bounds `max_x` and `max_y` are the largest components seen
/// across all cells and default to 0 for an empty grid.
///
/// A grid is immutable once built.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Grid {
    cells: BTreeMap<(u32, u32), char>,
    max_x: u32,
    max_y: u32,
}

impl Grid {
    /// Builds a `Grid` from raw field rows in `(x, character, y)` order.
    ///
    /// Accepts any iterable of rows whose fields deref to `str`, typically the
    /// output of [`Doc::table_rows`]. Rows may come in any order. Coordinate
    /// fields are trimmed and parsed as integers; the character field is
    /// trimmed and must hold exactly one character. When two rows share a
    /// coordinate the later row wins.
    ///
    /// Any malformed row aborts the whole build: wrong field count, a
    /// non-integer or negative coordinate, or a character field that is not a
    /// single character.
    ///
    /// # Examples
    /// ```
    /// use artgrid::Grid;
    ///
    /// let rows = [["0", "█", "0"], ["0", "█", "1"], ["1", "▀", "1"]];
    /// let grid = Grid::from_rows(rows).unwrap();
    /// assert_eq!(grid.get_size(), (2, 2));
    /// assert_eq!(grid.render(), "█▀\n█ ");
    /// ```
    pub fn from_rows<I, R, S>(rows: I) -> Result<Grid>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut cells = BTreeMap::new();
        let mut max_x = 0;
        let mut max_y = 0;
        for row in rows {
            let fields = row.as_ref();
            if fields.len() != 3 {
                return Err(Error::MissingColumns {
                    expected: 3,
                    found: fields.len(),
                });
            }
            let x = parse_axis("x", fields[0].as_ref())?;
            let glyph = parse_glyph(fields[1].as_ref())?;
            let y = parse_axis("y", fields[2].as_ref())?;
            if let Some(old) = cells.insert((x, y), glyph) {
                warn!("cell ({x}, {y}) defined twice, replacing {old:?} with {glyph:?}");
            }
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
        Ok(Grid {
            cells,
            max_x,
            max_y,
        })
    }

    /// Gets the character stored at `(x, y)`, if any
    pub fn get(&self, x: u32, y: u32) -> Option<char> {
        self.cells.get(&(x, y)).copied()
    }

    /// Get the largest x component seen across all cells (0 if empty)
    pub fn max_x(&self) -> u32 {
        self.max_x
    }

    /// Get the largest y component seen across all cells (0 if empty)
    pub fn max_y(&self) -> u32 {
        self.max_y
    }

    /// Get the rendered width in columns
    pub fn width(&self) -> usize {
        self.max_x as usize + 1
    }

    /// Get the rendered height in rows
    pub fn height(&self) -> usize {
        self.max_y as usize + 1
    }

    /// Get size in (height, width) format
    pub fn get_size(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Does the grid hold no cell at all
    ///
    /// An empty grid still renders as a single space, see [`Grid::render`].
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get an iterator over stored cells as `(x, y, char)`, sorted by `(x, y)`
    ///
    /// # Examples
    /// ```
    /// use artgrid::Grid;
    ///
    /// let grid = Grid::from_rows([["1", "▀", "0"], ["0", "█", "2"]]).unwrap();
    /// assert_eq!(grid.cells().collect::<Vec<_>>(), vec![(0, 2, '█'), (1, 0, '▀')]);
    /// ```
    pub fn cells(&self) -> Cells<'_> {
        Cells {
            inner: self.cells.iter(),
        }
    }

    /// Renders the grid as a fixed width text block
    ///
    /// Rows are emitted from `max_y` down to 0, so the top line of the output
    /// is the highest row. Each line holds exactly `max_x + 1` characters,
    /// with a single space for every absent cell; trailing spaces are kept.
    /// Lines are joined with a single `\n`, without a leading or trailing
    /// newline, so the output always has exactly `max_y + 1` lines.
    ///
    /// # Examples
    /// ```
    /// use artgrid::Grid;
    ///
    /// let grid = Grid::default();
    /// assert_eq!(grid.render(), " ");
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height() * (self.width() + 1));
        for y in (0..=self.max_y).rev() {
            for x in 0..=self.max_x {
                out.push(self.get(x, y).unwrap_or(' '));
            }
            if y > 0 {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Grid", 3)?;
        state.serialize_field("max_x", &self.max_x)?;
        state.serialize_field("max_y", &self.max_y)?;
        state.serialize_field("cells", &self.cells().collect::<Vec<_>>())?;
        state.end()
    }
}

/// An iterator over a grid's stored cells
#[derive(Debug, Clone)]
pub struct Cells<'a> {
    inner: btree_map::Iter<'a, (u32, u32), char>,
}

impl Iterator for Cells<'_> {
    type Item = (u32, u32, char);
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&(x, y), &c)| (x, y, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

fn parse_axis(axis: &'static str, field: &str) -> Result<u32> {
    let field = field.trim();
    let val = atoi_simd::parse::<i64>(field.as_bytes()).map_err(|_| Error::InvalidCoordinate {
        axis,
        val: field.to_string(),
    })?;
    if val < 0 {
        return Err(Error::NegativeCoordinate { axis, val });
    }
    u32::try_from(val).map_err(|_| Error::InvalidCoordinate {
        axis,
        val: field.to_string(),
    })
}

fn parse_glyph(field: &str) -> Result<char> {
    let field = field.trim();
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::InvalidCharacter(field.to_string())),
    }
}
