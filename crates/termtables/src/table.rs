//! The table: element storage and the render pipeline.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use crate::cell::{render_value, Align, IntoCell};
use crate::config::{default_config, Config};
use crate::element::Element;
use crate::row::Row;
use crate::separator::{LinePosition, Separator};
use crate::style::{RenderStyle, Style};
use crate::util::display_width;

/// A bordered text table.
///
/// Rows and separators are rendered top to bottom in the order they were
/// added. A title, headers and the outer borders are added around them
/// each time the table is rendered; they are never stored among the rows,
/// so rendering does not change the table and can be repeated.
///
/// A table is a plain value. Share it across threads like any other
/// value: mutation needs exclusive access.
///
/// # Example
///
/// ```rust
/// use termtables::{Config, Table};
///
/// let mut table = Table::with_config(Config::default());
/// table.add_headers(["ID", "Name"]);
/// table.add_row(termtables::cells![1, "Alice"]);
/// table.add_row(termtables::cells![2, "Bob"]);
///
/// assert_eq!(
///     table.render(),
///     "\
/// +----+-------+
/// | ID | Name  |
/// +----+-------+
/// | 1  | Alice |
/// | 2  | Bob   |
/// +----+-------+
/// "
/// );
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    style: Style,
    config: Config,
    rows: Vec<Row>,
    /// Row count at the time each separator was added: a separator is drawn
    /// above the row with that index, or last if no row followed.
    separators: Vec<usize>,
    title: Option<String>,
    headers: Option<Vec<String>>,
    min_width: usize,
    column_aligns: BTreeMap<usize, Align>,
}

impl Table {
    /// Creates an empty table configured by the process-wide default
    /// config (see [`crate::config`]).
    pub fn new() -> Self {
        Table::with_config(default_config())
    }

    /// Creates an empty table from an explicit config.
    pub fn with_config(config: Config) -> Self {
        let mut style = Style::default();
        if config.utf8 {
            style.set_utf8_box();
        }
        Table {
            style,
            config,
            rows: Vec::new(),
            separators: Vec::new(),
            title: None,
            headers: None,
            min_width: 0,
            column_aligns: BTreeMap::new(),
        }
    }

    /// Appends an inner separator line.
    pub fn add_separator(&mut self) {
        self.separators.push(self.rows.len());
    }

    /// Appends a row built from `values` and returns it for per-cell
    /// adjustments.
    ///
    /// Values may be anything `Display`, or prepared [`Cell`](crate::Cell)s;
    /// use [`cells!`](crate::cells) to mix types in one row.
    pub fn add_row<I>(&mut self, values: I) -> &mut Row
    where
        I: IntoIterator,
        I::Item: IntoCell,
    {
        let index = self.rows.len();
        self.rows.push(Row::from_values(values));
        &mut self.rows[index]
    }

    /// Sets the title, shown centered above everything else.
    ///
    /// The table is always at least as wide as the title.
    pub fn add_title<T: Display + ?Sized>(&mut self, title: &T) {
        let title = render_value(title);
        self.min_width = display_width(&title);
        self.title = Some(title);
    }

    /// Sets the header row, replacing any previous headers.
    pub fn add_headers<I>(&mut self, headers: I)
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.headers = Some(headers.into_iter().map(|h| render_value(&h)).collect());
    }

    /// Draws this table with UTF-8 box-drawing glyphs, whatever the
    /// configured default.
    pub fn utf8_box(&mut self) {
        self.style.set_utf8_box();
    }

    /// Aligns every cell in the 0-based `column` that has no alignment of
    /// its own, the header included.
    pub fn set_align(&mut self, align: Align, column: usize) {
        self.column_aligns.insert(column, align);
    }

    /// Suppresses (or restores) the top and bottom borders.
    pub fn skip_border(&mut self, skip: bool) {
        self.style.skip_border = skip;
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// The config this table was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn headers(&self) -> Option<&[String]> {
        self.headers.as_deref()
    }

    /// The rows added so far, separators not included.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The rows and separators added so far, in order.
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> {
        let mut separators = self.separators.iter().copied().peekable();
        let mut body: Vec<Element<'_>> =
            Vec::with_capacity(self.rows.len() + self.separators.len());
        for (index, row) in self.rows.iter().enumerate() {
            while separators.next_if_eq(&index).is_some() {
                body.push(Separator::new(LinePosition::Inner).into());
            }
            body.push(Element::from(row));
        }
        body.extend(separators.map(|_| Separator::new(LinePosition::Inner).into()));
        body.into_iter()
    }

    /// The `index`-th row added (separators not counted).
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Display width of every line [`render`](Self::render) produces.
    ///
    /// Compare with [`Config::max_columns`] to decide whether the table
    /// fits the terminal; rendering itself never truncates.
    pub fn width(&self) -> usize {
        let sequence = self.assemble();
        self.resolve_style(&sequence).line_width()
    }

    /// Renders the table as newline-terminated lines.
    pub fn render(&self) -> String {
        let sequence = self.assemble();
        let style = self.resolve_style(&sequence);
        log::trace!(
            "rendering {} element(s) ({} row(s) stored)",
            sequence.len(),
            self.rows.len()
        );

        let mut buffer = String::new();
        for element in &sequence {
            buffer.push_str(&element.render(&style));
            buffer.push('\n');
        }

        if !style.skip_border() {
            buffer.push_str(&Separator::new(LinePosition::Bottom).render(&style));
            buffer.push('\n');
        }

        buffer
    }

    /// Builds the sequence to render: title block, header block, leading
    /// border, then the stored elements. The trailing border is drawn by
    /// [`render`](Self::render).
    fn assemble(&self) -> Vec<Element<'_>> {
        let mut sequence: Vec<Element<'_>> =
            Vec::with_capacity(self.rows.len() + self.separators.len() + 5);
        let has_title = self.title.is_some();
        let has_headers = self.headers.is_some();

        if let Some(title) = &self.title {
            sequence.push(Separator::straight(LinePosition::Top).into());
            sequence.push(Row::title(title).into());
        }

        if let Some(headers) = &self.headers {
            let position = if has_title {
                LinePosition::SubTop
            } else {
                LinePosition::Top
            };
            sequence.push(Separator::new(position).into());
            sequence.push(Row::from_values(headers).into());
        }

        if !self.style.skip_border {
            let position = match (has_title, has_headers) {
                (true, false) => LinePosition::SubTop,
                (false, false) => LinePosition::Top,
                _ => LinePosition::Inner,
            };
            sequence.push(Separator::new(position).into());
        }

        sequence.extend(self.elements());
        sequence
    }

    fn resolve_style(&self, sequence: &[Element<'_>]) -> RenderStyle {
        RenderStyle::resolve(
            &self.style,
            sequence.iter().filter_map(|e| e.as_row()),
            self.min_width,
            &self.column_aligns,
        )
    }
}

impl Default for Table {
    fn default() -> Self {
        Table::new()
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
