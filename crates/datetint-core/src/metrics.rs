//! Geometry derived from the resolved size token.
//!
//! Each lookup is an independent table keyed by [`SizeToken`]; the `md` row
//! doubles as the default at every site. Widths in design-system spacing
//! units, the time column in px.

use std::fmt;

use crate::size::SizeToken;
use crate::style::StyleValue;

/// Day-cell line height: equal to the cell edge for most sizes, a fixed
/// rem value for `xl` to accommodate taller rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineHeight {
    /// Spacing units, matching the day-cell edge length.
    Units(u32),
    /// A fixed rem value.
    Rem(u32),
}

impl fmt::Display for LineHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineHeight::Units(n) => write!(f, "{n}"),
            LineHeight::Rem(n) => write!(f, "{n}rem"),
        }
    }
}

impl From<LineHeight> for StyleValue {
    fn from(value: LineHeight) -> Self {
        match value {
            LineHeight::Units(n) => StyleValue::Number(f64::from(n)),
            LineHeight::Rem(_) => StyleValue::Text(value.to_string()),
        }
    }
}

/// Concrete geometry for one resolved size token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    /// Day-cell edge length in spacing units.
    pub day_cell_width: u32,
    /// Day-cell line height.
    pub day_cell_line_height: LineHeight,
    /// Width of the time column in px.
    pub time_column_width: u32,
    /// Navigation arrow edge length in spacing units.
    pub nav_icon_size: u32,
}

/// Compute all geometry for a size token.
pub fn dimensions(size: SizeToken) -> Dimensions {
    Dimensions {
        day_cell_width: day_cell_width(size),
        day_cell_line_height: day_cell_line_height(size),
        time_column_width: time_column_width(size),
        nav_icon_size: nav_icon_size(size),
    }
}

fn day_cell_width(size: SizeToken) -> u32 {
    match size {
        SizeToken::Xs => 6,
        SizeToken::Sm => 8,
        SizeToken::Xl => 12,
        SizeToken::Md => 10,
    }
}

fn day_cell_line_height(size: SizeToken) -> LineHeight {
    match size {
        SizeToken::Xl => LineHeight::Rem(3),
        other => LineHeight::Units(day_cell_width(other)),
    }
}

fn time_column_width(size: SizeToken) -> u32 {
    match size {
        SizeToken::Xl => 120,
        SizeToken::Sm | SizeToken::Xs => 75,
        SizeToken::Md => 105,
    }
}

fn nav_icon_size(size: SizeToken) -> u32 {
    match size {
        SizeToken::Xs => 5,
        _ => 7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_xs() {
        let d = dimensions(SizeToken::Xs);
        assert_eq!(d.day_cell_width, 6);
        assert_eq!(d.day_cell_line_height, LineHeight::Units(6));
        assert_eq!(d.time_column_width, 75);
        assert_eq!(d.nav_icon_size, 5);
    }

    #[test]
    fn test_dimensions_sm() {
        let d = dimensions(SizeToken::Sm);
        assert_eq!(d.day_cell_width, 8);
        assert_eq!(d.day_cell_line_height, LineHeight::Units(8));
        assert_eq!(d.time_column_width, 75);
        assert_eq!(d.nav_icon_size, 7);
    }

    #[test]
    fn test_dimensions_md() {
        let d = dimensions(SizeToken::Md);
        assert_eq!(d.day_cell_width, 10);
        assert_eq!(d.day_cell_line_height, LineHeight::Units(10));
        assert_eq!(d.time_column_width, 105);
        assert_eq!(d.nav_icon_size, 7);
    }

    #[test]
    fn test_dimensions_xl() {
        let d = dimensions(SizeToken::Xl);
        assert_eq!(d.day_cell_width, 12);
        assert_eq!(d.day_cell_line_height, LineHeight::Rem(3));
        assert_eq!(d.day_cell_line_height.to_string(), "3rem");
        assert_eq!(d.time_column_width, 120);
        assert_eq!(d.nav_icon_size, 7);
    }

    #[test]
    fn test_unknown_token_string_equals_md_row() {
        // Lenient parsing degrades unknown tokens to md, so every lookup
        // site answers with the md row.
        let d = dimensions(SizeToken::parse("enormous"));
        assert_eq!(d, dimensions(SizeToken::Md));
    }

    #[test]
    fn test_line_height_style_values() {
        assert_eq!(
            StyleValue::from(LineHeight::Units(8)),
            StyleValue::Number(8.0)
        );
        assert_eq!(
            StyleValue::from(LineHeight::Rem(3)),
            StyleValue::Text("3rem".to_string())
        );
    }
}
