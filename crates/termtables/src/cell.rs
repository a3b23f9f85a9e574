//! Cells: a value's display text plus alignment and column span.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::util::{display_width, pad_aligned};

/// Span used by title cells: wide enough to cover every column.
///
/// Spans are clamped to the columns that actually exist when the table is
/// laid out, so any value at least as large as the column count works.
pub const FULL_SPAN: usize = 999;

/// Text alignment within a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Center text (pad on both sides, odd space on the right).
    Center,
    /// Right-align text (pad on the left).
    Right,
}

impl FromStr for Align {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Align::Left),
            "center" | "centre" | "c" => Ok(Align::Center),
            "right" | "r" => Ok(Align::Right),
            _ => Err(Error::UnknownAlignment(s.to_string())),
        }
    }
}

/// Converts any displayable value to the text shown in a table.
///
/// This is the single conversion used for titles, headers and cells, so a
/// value renders the same wherever it appears. It cannot fail.
///
/// ```rust
/// use termtables::render_value;
///
/// assert_eq!(render_value(&42), "42");
/// assert_eq!(render_value(&1.5), "1.5");
/// assert_eq!(render_value("Alice"), "Alice");
/// ```
pub fn render_value<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// A single table cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    text: String,
    align: Option<Align>,
    span: usize,
}

impl Cell {
    /// Creates a cell holding the rendered value, with inherited alignment
    /// and a span of one column.
    pub fn new<T: Display + ?Sized>(value: &T) -> Self {
        Cell {
            text: render_value(value),
            align: None,
            span: 1,
        }
    }

    /// Creates an empty cell.
    pub fn empty() -> Self {
        Cell {
            text: String::new(),
            align: None,
            span: 1,
        }
    }

    /// Sets the alignment of this cell.
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Sets the number of columns this cell occupies. Zero is treated as one.
    pub fn span(mut self, span: usize) -> Self {
        self.span = span.max(1);
        self
    }

    /// The rendered text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The explicit alignment, if one was set.
    pub fn alignment(&self) -> Option<Align> {
        self.align
    }

    /// The requested column span.
    pub fn col_span(&self) -> usize {
        self.span
    }

    /// Display width of the text.
    pub fn width(&self) -> usize {
        display_width(&self.text)
    }

    pub(crate) fn set_alignment(&mut self, align: Align) {
        self.align = Some(align);
    }

    pub(crate) fn set_span(&mut self, span: usize) {
        self.span = span.max(1);
    }

    /// Renders the text into a field of exactly `width` columns (or wider,
    /// if the text itself is wider), without cell padding.
    pub(crate) fn render(&self, width: usize, fallback: Align) -> String {
        pad_aligned(&self.text, width, self.align.unwrap_or(fallback))
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::empty()
    }
}

/// Conversion into a [`Cell`].
///
/// Implemented for every `Display` type (through [`render_value`]) and for
/// `Cell` itself, so rows can mix plain values with pre-styled cells.
pub trait IntoCell {
    fn into_cell(self) -> Cell;
}

impl<T: Display> IntoCell for T {
    fn into_cell(self) -> Cell {
        Cell::new(&self)
    }
}

impl IntoCell for Cell {
    fn into_cell(self) -> Cell {
        self
    }
}

/// Builds a `Vec<Cell>` from values of different types.
///
/// ```rust
/// use termtables::{cells, Align, Cell, Table};
///
/// let mut table = Table::with_config(Default::default());
/// table.add_row(cells![1, "Alice", Cell::new("ok").align(Align::Right)]);
/// assert!(table.render().contains("Alice"));
/// ```
#[macro_export]
macro_rules! cells {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::IntoCell::into_cell($value)),*]
    };
}
