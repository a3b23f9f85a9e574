//! Table rows.

use crate::cell::{Align, Cell, IntoCell, FULL_SPAN};
use crate::style::RenderStyle;

/// An ordered sequence of cells rendered as one line.
///
/// Returned by [`Table::add_row`](crate::Table::add_row) so individual
/// cells can be adjusted before rendering:
///
/// ```rust
/// use termtables::{Align, Table};
///
/// let mut table = Table::with_config(Default::default());
/// table.add_row(["Total", "42"]).set_align(1, Align::Right);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    /// Creates a row from prepared cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Row { cells }
    }

    /// Creates a row from values, converting each into a default cell.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoCell,
    {
        Row {
            cells: values.into_iter().map(IntoCell::into_cell).collect(),
        }
    }

    /// A row holding one centered cell spanning the whole table.
    pub(crate) fn title(text: &str) -> Self {
        Row {
            cells: vec![Cell::new(text).align(Align::Center).span(FULL_SPAN)],
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Mutable access to the cell at `index`.
    pub fn cell_mut(&mut self, index: usize) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Sets the alignment of the cell at `index`. Out-of-range indices are
    /// ignored.
    pub fn set_align(&mut self, index: usize, align: Align) -> &mut Self {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.set_alignment(align);
        }
        self
    }

    /// Sets the alignment of every cell in the row.
    pub fn align_all(&mut self, align: Align) -> &mut Self {
        for cell in &mut self.cells {
            cell.set_alignment(align);
        }
        self
    }

    /// Sets the column span of the cell at `index`. Out-of-range indices
    /// are ignored.
    pub fn set_span(&mut self, index: usize, span: usize) -> &mut Self {
        if let Some(cell) = self.cells.get_mut(index) {
            cell.set_span(span);
        }
        self
    }

    /// Lays the cells out over `columns` columns, yielding each cell with
    /// its start column and effective span.
    ///
    /// Spans are clamped so every later cell still gets a column of its
    /// own; a span never pushes cells past `columns`.
    pub(crate) fn positioned(&self, columns: usize) -> impl Iterator<Item = (usize, usize, &Cell)> {
        let count = self.cells.len();
        self.cells
            .iter()
            .enumerate()
            .scan(0usize, move |column, (index, cell)| {
                let start = *column;
                if start >= columns {
                    return None;
                }
                let room = columns.saturating_sub(start + (count - index - 1)).max(1);
                let span = cell.col_span().min(room);
                *column = start + span;
                Some((start, span, cell))
            })
    }

    /// Number of columns this row needs: one per cell. Spans never create
    /// columns. An empty row still occupies one (empty) column.
    pub(crate) fn column_extent(&self) -> usize {
        self.cells.len().max(1)
    }

    /// Renders the row as one line. Columns the row does not reach are
    /// drawn as empty cells.
    pub(crate) fn render(&self, style: &RenderStyle) -> String {
        let vertical = style.chars().vertical;
        let columns = style.columns();
        let pad_left = " ".repeat(style.padding_left());
        let pad_right = " ".repeat(style.padding_right());

        let mut line = String::new();
        line.push(vertical);

        let mut column = 0;
        let mut push_field = |text: String| {
            line.push_str(&pad_left);
            line.push_str(&text);
            line.push_str(&pad_right);
            line.push(vertical);
        };

        for (start, span, cell) in self.positioned(columns) {
            let width = style.span_width(start, span);
            push_field(cell.render(width, style.alignment(start)));
            column = start + span;
        }

        let empty = Cell::empty();
        while column < columns {
            push_field(empty.render(style.span_width(column, 1), style.alignment(column)));
            column += 1;
        }

        line
    }
}

impl<T: IntoCell> FromIterator<T> for Row {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Row::from_values(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;
    use std::collections::BTreeMap;

    fn layout(rows: &[Row]) -> RenderStyle {
        RenderStyle::resolve(&Style::default(), rows, 0, &BTreeMap::new())
    }

    #[test]
    fn from_values_stringifies() {
        let row = Row::from_values([1, 22, 333]);
        let texts: Vec<&str> = row.cells().iter().map(Cell::text).collect();
        assert_eq!(texts, vec!["1", "22", "333"]);
    }

    #[test]
    fn collect_into_row() {
        let row: Row = vec!["a", "b"].into_iter().collect();
        assert_eq!(row.len(), 2);
    }

    #[test]
    fn positioned_accounts_for_spans() {
        let row = Row::new(vec![Cell::new("a").span(2), Cell::new("b"), Cell::new("c")]);
        let layout: Vec<(usize, usize)> = row.positioned(4).map(|(s, n, _)| (s, n)).collect();
        assert_eq!(layout, vec![(0, 2), (2, 1), (3, 1)]);
        assert_eq!(row.column_extent(), 3);
    }

    #[test]
    fn oversized_span_leaves_room_for_later_cells() {
        let row = Row::new(vec![Cell::new("a").span(FULL_SPAN), Cell::new("b")]);
        let layout: Vec<(usize, usize)> = row.positioned(2).map(|(s, n, _)| (s, n)).collect();
        assert_eq!(layout, vec![(0, 1), (1, 1)]);

        let layout: Vec<(usize, usize)> = row.positioned(5).map(|(s, n, _)| (s, n)).collect();
        assert_eq!(layout, vec![(0, 4), (4, 1)]);
    }

    #[test]
    fn max_span_does_not_overflow() {
        let row = Row::new(vec![Cell::new("a").span(usize::MAX), Cell::new("b")]);
        assert_eq!(row.column_extent(), 2);
        let rows = vec![row];
        let style = layout(&rows);
        assert_eq!(style.columns(), 2);
        assert_eq!(rows[0].render(&style), "| a | b |");
    }

    #[test]
    fn full_span_in_body_row_keeps_column_count() {
        let rows = vec![
            Row::new(vec![Cell::new("a").span(FULL_SPAN), Cell::new("b")]),
            Row::from_values(["x", "y"]),
        ];
        let style = layout(&rows);
        assert_eq!(style.columns(), 2);
        assert_eq!(rows[0].render(&style), "| a | b |");
    }

    #[test]
    fn empty_row_extent_is_one() {
        assert_eq!(Row::default().column_extent(), 1);
    }

    #[test]
    fn render_simple_row() {
        let rows = vec![Row::from_values(["ID", "Name"]), Row::from_values(["1", "Alice"])];
        let style = layout(&rows);
        assert_eq!(rows[0].render(&style), "| ID | Name  |");
        assert_eq!(rows[1].render(&style), "| 1  | Alice |");
    }

    #[test]
    fn render_fills_missing_columns() {
        let rows = vec![Row::from_values(["a", "b", "c"]), Row::from_values(["x"])];
        let style = layout(&rows);
        assert_eq!(rows[1].render(&style), "| x |   |   |");
    }

    #[test]
    fn render_spanning_cell() {
        let rows = vec![
            Row::new(vec![Cell::new("wide").span(2), Cell::new("z")]),
            Row::from_values(["aa", "bb", "cc"]),
        ];
        let style = layout(&rows);
        assert_eq!(rows[0].render(&style), "| wide    | z  |");
        assert_eq!(rows[1].render(&style), "| aa | bb | cc |");
    }

    #[test]
    fn render_title_row_centered() {
        let rows = vec![Row::title("Hi"), Row::from_values(["abc", "def"])];
        let style = layout(&rows);
        // field width = 3 + 3 + 3 = 9, "Hi" centered with odd space right
        assert_eq!(rows[0].render(&style), "|    Hi     |");
        assert_eq!(rows[1].render(&style), "| abc | def |");
    }

    #[test]
    fn set_align_and_span_chain() {
        let mut row = Row::from_values(["a", "b"]);
        row.set_align(1, Align::Right).set_span(0, 3).set_align(7, Align::Center);
        assert_eq!(row.cells()[1].alignment(), Some(Align::Right));
        assert_eq!(row.cells()[0].col_span(), 3);
    }

    #[test]
    fn align_all_sets_every_cell() {
        let mut row = Row::from_values(["a", "b"]);
        row.align_all(Align::Center);
        assert!(row
            .cells()
            .iter()
            .all(|c| c.alignment() == Some(Align::Center)));
    }

    #[test]
    fn right_aligned_cell_renders_padded_left() {
        let mut row = Row::from_values(["7"]);
        row.set_align(0, Align::Right);
        let rows = vec![row, Row::from_values(["1000"])];
        let style = layout(&rows);
        assert_eq!(rows[0].render(&style), "|    7 |");
    }
}
