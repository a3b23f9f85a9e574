//! # termtables - bordered text tables for the terminal
//!
//! `termtables` renders rows of values as a fixed-width block of text with
//! an optional title, an optional header row and ASCII or UTF-8
//! box-drawing borders.
//!
//! ## Quick Start
//!
//! ```rust
//! use termtables::{cells, Config, Table};
//!
//! let mut table = Table::with_config(Config::default());
//! table.add_title("Staff");
//! table.add_headers(["ID", "Name"]);
//! table.add_row(cells![1, "Alice"]);
//! table.add_row(cells![2, "Bob"]);
//!
//! assert_eq!(
//!     table.render(),
//!     "\
//! +------------+
//! |   Staff    |
//! +----+-------+
//! | ID | Name  |
//! +----+-------+
//! | 1  | Alice |
//! | 2  | Bob   |
//! +----+-------+
//! "
//! );
//! ```
//!
//! ## Layout
//!
//! - Each column is as wide as its widest single-column cell.
//! - Cells can span several columns ([`Cell::span`]); a spanning cell that
//!   does not fit widens the rightmost column it covers. The title spans
//!   the whole table.
//! - Alignment is taken from the cell, else the column
//!   ([`Table::set_align`]), else the style.
//! - Widths are display widths: wide characters count double and ANSI
//!   escape codes are ignored.
//!
//! ## Borders
//!
//! | position | ASCII | UTF-8 |
//! |----------|-------|-------|
//! | top      | `+-+` | `┌─┬─┐` |
//! | below a title | `+-+` | `├─┬─┤` |
//! | inner    | `+-+` | `├─┼─┤` |
//! | bottom   | `+-+` | `└─┴─┘` |
//!
//! UTF-8 glyphs are used when the table's [`Config`] asks for them, or
//! after [`Table::utf8_box`]. The process-wide default config can be
//! switched with [`enable_utf8`] or [`enable_utf8_per_locale`]; see
//! [`config`] for the probes that fill it.
//!
//! ## Terminal width
//!
//! Tables never wrap or truncate. [`Config::max_columns`] records the
//! terminal width so callers can compare it with [`Table::width`].

mod cell;
pub mod config;
mod element;
mod error;
mod row;
mod separator;
mod style;
mod table;
mod util;

pub use cell::{render_value, Align, Cell, IntoCell, FULL_SPAN};
pub use config::{
    default_config, enable_utf8, enable_utf8_per_locale, set_default_config, Config,
    DEFAULT_MAX_COLUMNS,
};
pub use element::Element;
pub use error::{Error, Result};
pub use row::Row;
pub use separator::{LinePosition, Separator};
pub use style::{BorderChars, BorderStyle, RenderStyle, Style};
pub use table::Table;
pub use util::{display_width, pad_center, pad_left, pad_right};
