//! Width measurement and padding helpers.
//!
//! All functions here measure display width, not byte length: ANSI escape
//! codes count as zero columns and wide (CJK) characters count as two.

use console::{measure_text_width, pad_str, Alignment};

use crate::cell::Align;

/// Terminal columns `s` occupies; this is the width columns are sized by.
///
/// # Example
///
/// ```rust
/// use termtables::display_width;
///
/// assert_eq!(display_width("hello"), 5);
/// assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}

/// Right-aligns a field: spaces go before `s` until it fills `width`
/// display columns. This is how [`Align::Right`] cells are drawn.
///
/// Text already wider than `width` is returned unchanged; cells are never
/// cut, the column grows instead.
///
/// ```rust
/// use termtables::pad_left;
///
/// assert_eq!(pad_left("7", 3), "  7");
/// assert_eq!(pad_left("日本", 6), "  日本");
/// assert_eq!(pad_left("overflow", 4), "overflow");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Right, None).into_owned()
}

/// Left-aligns a field, the default for cells.
///
/// ```rust
/// use termtables::pad_right;
///
/// assert_eq!(pad_right("id", 4), "id  ");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Left, None).into_owned()
}

/// Centers a field, as done for titles and [`Align::Center`] cells.
/// An odd leftover column lands on the right.
///
/// ```rust
/// use termtables::pad_center;
///
/// assert_eq!(pad_center("ok", 7), "  ok   ");
/// assert_eq!(pad_center("odd", 5), " odd ");
/// ```
pub fn pad_center(s: &str, width: usize) -> String {
    pad_str(s, width, Alignment::Center, None).into_owned()
}

/// Pads `s` to `width` according to `align`.
pub(crate) fn pad_aligned(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(s, width),
        Align::Right => pad_left(s, width),
        Align::Center => pad_center(s, width),
    }
}

/// Repeats a glyph `count` times.
pub(crate) fn repeat_glyph(glyph: char, count: usize) -> String {
    std::iter::repeat_n(glyph, count).collect()
}
