//! Border glyphs, persistent table style and per-render layout.
//!
//! A [`Style`] is what a table keeps between renders: which glyph set to
//! draw with, whether the outer borders are drawn, and cell padding. Each
//! call to [`Table::render`](crate::Table::render) resolves it into a
//! [`RenderStyle`], which additionally carries the column widths and
//! alignments negotiated from the rows being rendered.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cell::Align;
use crate::row::Row;
use crate::separator::LinePosition;

/// Glyph set used to draw borders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// ASCII borders: +, -, |
    #[default]
    Ascii,
    /// Unicode box-drawing characters: ┌, ─, ┐, │, └, ┘, ├, ┼, ┤, ┬, ┴
    Utf8,
}

impl BorderStyle {
    /// Get the box-drawing characters for this border style.
    pub fn chars(&self) -> BorderChars {
        match self {
            BorderStyle::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                left_t: '+',
                cross: '+',
                right_t: '+',
                top_t: '+',
                bottom_t: '+',
            },
            BorderStyle::Utf8 => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                left_t: '├',
                cross: '┼',
                right_t: '┤',
                top_t: '┬',
                bottom_t: '┴',
            },
        }
    }
}

/// Box-drawing characters for a border style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left_t: char,
    pub cross: char,
    pub right_t: char,
    pub top_t: char,
    pub bottom_t: char,
}

impl BorderChars {
    /// Returns the (left end, column junction, right end) glyphs for a
    /// horizontal line at `position`.
    ///
    /// A sub-top line closes the box above it (so its ends are tees) but
    /// opens columns below it (so its junctions point down).
    pub fn line(&self, position: LinePosition) -> (char, char, char) {
        match position {
            LinePosition::Top => (self.top_left, self.top_t, self.top_right),
            LinePosition::SubTop => (self.left_t, self.top_t, self.right_t),
            LinePosition::Inner => (self.left_t, self.cross, self.right_t),
            LinePosition::Bottom => (self.bottom_left, self.bottom_t, self.bottom_right),
        }
    }
}

/// Persistent rendering parameters of a table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Glyph set for borders and separators.
    pub border: BorderStyle,
    /// Suppress the top and bottom borders the table adds on render.
    ///
    /// Separators added explicitly, and those framing the title and header
    /// blocks, are still drawn.
    pub skip_border: bool,
    /// Spaces between the left vertical line and the cell text.
    pub padding_left: usize,
    /// Spaces between the cell text and the right vertical line.
    pub padding_right: usize,
    /// Alignment for cells with neither a cell nor a column alignment.
    pub align: Align,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            border: BorderStyle::Ascii,
            skip_border: false,
            padding_left: 1,
            padding_right: 1,
            align: Align::Left,
        }
    }
}

impl Style {
    /// The default style with ASCII borders.
    pub fn ascii() -> Self {
        Style::default()
    }

    /// The default style with UTF-8 box-drawing borders.
    pub fn utf8() -> Self {
        Style {
            border: BorderStyle::Utf8,
            ..Style::default()
        }
    }

    /// Switches this style to UTF-8 box-drawing glyphs.
    pub fn set_utf8_box(&mut self) {
        self.border = BorderStyle::Utf8;
    }

    /// Width added by merging two adjacent columns: both paddings plus the
    /// vertical line between them.
    fn column_overhead(&self) -> usize {
        self.padding_left + self.padding_right + 1
    }
}

/// A [`Style`] resolved against the rows of one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    style: Style,
    chars: BorderChars,
    widths: Vec<usize>,
    aligns: Vec<Align>,
}

impl RenderStyle {
    /// Negotiates column widths for `rows`.
    ///
    /// - The column count is the most cells in any row; spans never add
    ///   columns and are clamped so later cells in the row still fit.
    /// - A column is as wide as its widest single-column cell.
    /// - A spanning cell wider than the columns it covers (including the
    ///   padding and line between them) widens the rightmost of them.
    /// - `min_width` bounds the interior width of the whole table from
    ///   below; the last column absorbs any shortfall.
    pub(crate) fn resolve<'r, I>(
        style: &Style,
        rows: I,
        min_width: usize,
        column_aligns: &BTreeMap<usize, Align>,
    ) -> Self
    where
        I: IntoIterator<Item = &'r Row>,
    {
        let rows: Vec<&Row> = rows.into_iter().collect();
        let columns = rows.iter().map(|r| r.column_extent()).max().unwrap_or(0);
        let overhead = style.column_overhead();

        let mut widths = vec![0; columns];
        let mut spanning: Vec<(usize, usize, usize)> = Vec::new();

        for row in &rows {
            for (start, span, cell) in row.positioned(columns) {
                if span == 1 {
                    widths[start] = widths[start].max(cell.width());
                } else {
                    spanning.push((start, span, cell.width()));
                }
            }
        }

        for (start, span, needed) in spanning {
            let available: usize =
                widths[start..start + span].iter().sum::<usize>() + (span - 1) * overhead;
            if needed > available {
                widths[start + span - 1] += needed - available;
            }
        }

        if let Some(last) = columns.checked_sub(1) {
            let interior = widths.iter().sum::<usize>() + last * overhead;
            if min_width > interior {
                widths[last] += min_width - interior;
            }
        }

        let aligns = (0..columns)
            .map(|i| column_aligns.get(&i).copied().unwrap_or(style.align))
            .collect();

        log::debug!("resolved {} column(s), widths {:?}", columns, widths);

        RenderStyle {
            style: style.clone(),
            chars: style.border.chars(),
            widths,
            aligns,
        }
    }

    /// Negotiated width of every column, excluding padding.
    pub fn column_widths(&self) -> &[usize] {
        &self.widths
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.widths.len()
    }

    /// Glyphs to draw with.
    pub fn chars(&self) -> &BorderChars {
        &self.chars
    }

    pub fn skip_border(&self) -> bool {
        self.style.skip_border
    }

    pub fn padding_left(&self) -> usize {
        self.style.padding_left
    }

    pub fn padding_right(&self) -> usize {
        self.style.padding_right
    }

    /// Alignment for cells in `column` that carry no alignment of their own.
    pub fn alignment(&self, column: usize) -> Align {
        self.aligns.get(column).copied().unwrap_or(self.style.align)
    }

    /// Text width of a field covering `span` columns from `start`,
    /// including the padding and lines merged between them.
    pub fn span_width(&self, start: usize, span: usize) -> usize {
        let end = start.saturating_add(span).min(self.widths.len());
        if start >= end {
            return 0;
        }
        self.widths[start..end].iter().sum::<usize>()
            + (end - start - 1) * self.style.column_overhead()
    }

    /// Display width of every rendered line, borders included.
    pub fn line_width(&self) -> usize {
        let padded: usize = self
            .widths
            .iter()
            .map(|w| w + self.style.padding_left + self.style.padding_right)
            .sum();
        // Left border, one line after each column; an empty table still
        // draws both corners.
        1 + padded + self.widths.len().max(1)
    }
}
