//! Horizontal border and divider lines.

use crate::style::RenderStyle;
use crate::util::repeat_glyph;

/// Vertical position of a horizontal line, which selects its end and
/// junction glyphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LinePosition {
    /// Outermost top border.
    Top,
    /// Top of a block that has more of the table above it (below a title).
    SubTop,
    /// Divider between blocks.
    #[default]
    Inner,
    /// Outermost bottom border.
    Bottom,
}

/// A horizontal line across the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Separator {
    position: LinePosition,
    straight: bool,
}

impl Separator {
    /// A line with junction glyphs at every column boundary.
    pub fn new(position: LinePosition) -> Self {
        Separator {
            position,
            straight: false,
        }
    }

    /// A line without column junctions, drawn where no column boundaries
    /// are visible on either side (above a title).
    pub fn straight(position: LinePosition) -> Self {
        Separator {
            position,
            straight: true,
        }
    }

    pub fn position(&self) -> LinePosition {
        self.position
    }

    pub fn is_straight(&self) -> bool {
        self.straight
    }

    pub(crate) fn render(&self, style: &RenderStyle) -> String {
        let chars = style.chars();
        let (left, junction, right) = chars.line(self.position);
        let junction = if self.straight {
            chars.horizontal
        } else {
            junction
        };
        let padding = style.padding_left() + style.padding_right();

        let mut line = String::new();
        line.push(left);
        for (i, width) in style.column_widths().iter().enumerate() {
            if i > 0 {
                line.push(junction);
            }
            line.push_str(&repeat_glyph(chars.horizontal, width + padding));
        }
        line.push(right);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Row;
    use crate::style::Style;
    use std::collections::BTreeMap;

    fn layout(style: Style) -> RenderStyle {
        let rows = vec![Row::from_values(["ID", "Name"])];
        RenderStyle::resolve(&style, &rows, 0, &BTreeMap::new())
    }

    #[test]
    fn default_separator_is_inner() {
        let sep = Separator::default();
        assert_eq!(sep.position(), LinePosition::Inner);
        assert!(!sep.is_straight());
    }

    #[test]
    fn ascii_separator() {
        let style = layout(Style::ascii());
        assert_eq!(Separator::new(LinePosition::Top).render(&style), "+----+------+");
        assert_eq!(Separator::new(LinePosition::Inner).render(&style), "+----+------+");
    }

    #[test]
    fn ascii_straight_separator() {
        let style = layout(Style::ascii());
        assert_eq!(
            Separator::straight(LinePosition::Top).render(&style),
            "+-----------+"
        );
    }

    #[test]
    fn utf8_separators_by_position() {
        let style = layout(Style::utf8());
        assert_eq!(Separator::new(LinePosition::Top).render(&style), "┌────┬──────┐");
        assert_eq!(Separator::new(LinePosition::SubTop).render(&style), "├────┬──────┤");
        assert_eq!(Separator::new(LinePosition::Inner).render(&style), "├────┼──────┤");
        assert_eq!(Separator::new(LinePosition::Bottom).render(&style), "└────┴──────┘");
    }

    #[test]
    fn utf8_straight_separator_has_no_junctions() {
        let style = layout(Style::utf8());
        let line = Separator::straight(LinePosition::Top).render(&style);
        assert_eq!(line, "┌───────────┐");
        assert!(!line.contains('┬'));
    }

    #[test]
    fn separator_respects_padding() {
        let style = layout(Style {
            padding_left: 0,
            padding_right: 2,
            ..Style::ascii()
        });
        assert_eq!(Separator::new(LinePosition::Inner).render(&style), "+----+------+");
    }

    #[test]
    fn separator_without_columns() {
        let rows: Vec<Row> = Vec::new();
        let style = RenderStyle::resolve(&Style::ascii(), &rows, 0, &BTreeMap::new());
        assert_eq!(Separator::new(LinePosition::Bottom).render(&style), "++");
    }
}
