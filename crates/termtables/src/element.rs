//! The renderable units a table is made of.

use std::borrow::Cow;

use crate::row::Row;
use crate::separator::Separator;
use crate::style::RenderStyle;

/// A row or a separator; each renders to exactly one line.
///
/// Rows are borrowed from the table when rendering, or owned when the
/// row is synthesized (title, headers).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element<'a> {
    Row(Cow<'a, Row>),
    Separator(Separator),
}

impl Element<'_> {
    /// Renders this element as one line, without the trailing newline.
    pub fn render(&self, style: &RenderStyle) -> String {
        match self {
            Element::Row(row) => row.render(style),
            Element::Separator(separator) => separator.render(style),
        }
    }

    pub fn as_row(&self) -> Option<&Row> {
        match self {
            Element::Row(row) => Some(&**row),
            Element::Separator(_) => None,
        }
    }
}

impl From<Row> for Element<'_> {
    fn from(row: Row) -> Self {
        Element::Row(Cow::Owned(row))
    }
}

impl<'a> From<&'a Row> for Element<'a> {
    fn from(row: &'a Row) -> Self {
        Element::Row(Cow::Borrowed(row))
    }
}

impl From<Separator> for Element<'_> {
    fn from(separator: Separator) -> Self {
        Element::Separator(separator)
    }
}
