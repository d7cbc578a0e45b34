//! Header band: month title, weekday names, and the month/year dropdowns.

use crate::metrics::Dimensions;
use crate::selectors as sel;
use crate::style::{StyleSheet, multi};
use crate::theme::Palette;

/// The header band and everything it contains.
pub(super) fn header(palette: &Palette, dims: &Dimensions) -> StyleSheet {
    StyleSheet::new()
        .set("padding-block-start", 3)
        .set("border-color", palette.gray300.as_str())
        .set("background", palette.header.as_str())
        .nest(sel::header::DROPDOWN_ROW, dropdown_row(palette))
        .nest(
            multi(&[
                sel::header::CURRENT_MONTH,
                sel::header::TIME_HEADER,
                sel::header::YEAR_HEADER,
            ]),
            StyleSheet::new()
                .set("font-weight", 600)
                .set("color", palette.text.as_str())
                .set("font-size", "1rem"),
        )
        .nest(
            sel::day::NAMES_ROW,
            StyleSheet::new()
                .set("padding", 1.5)
                .set("padding-block-end", 0)
                .nest(
                    sel::day::NAME,
                    StyleSheet::new()
                        .set("width", dims.day_cell_width)
                        .set("line-height", dims.day_cell_line_height)
                        .set("color", palette.text.as_str()),
                ),
        )
}

/// Bold labels on the collapsed month/year read views.
///
/// This rule sits at sheet top level because the read views also render
/// outside the header band when a dropdown is open.
pub(super) fn read_view_labels(palette: &Palette) -> StyleSheet {
    StyleSheet::new()
        .set("font-weight", 600)
        .set("color", palette.text.as_str())
}

fn dropdown_row(palette: &Palette) -> StyleSheet {
    let arrows = multi(&[sel::header::MONTH_DOWN_ARROW, sel::header::YEAR_DOWN_ARROW]);
    StyleSheet::new()
        .set("margin-block-start", 2)
        .set("display", "flex")
        .set("justify-content", "center")
        .nest("&:empty", StyleSheet::new().set("display", "none"))
        .nest(
            multi(&[
                sel::header::MONTH_DROPDOWN_CONTAINER,
                sel::header::YEAR_DROPDOWN_CONTAINER,
            ]),
            StyleSheet::new()
                .set("cursor", "pointer")
                .set("border-radius", "md")
                .set("padding-inline-start", 1)
                .set("padding-inline-end", 1),
        )
        .nest(
            multi(&[sel::header::MONTH_READ_VIEW, sel::header::YEAR_READ_VIEW]),
            StyleSheet::new()
                .set("display", "flex")
                .set("flex-direction", "row-reverse")
                .set("padding-inline-end", 4)
                .set("padding-inline-start", 1)
                .nest(
                    "&:hover",
                    StyleSheet::new()
                        .set("background", palette.gray200.as_str())
                        .nest(
                            arrows.clone(),
                            StyleSheet::new().set("border-color", palette.gray500.as_str()),
                        ),
                ),
        )
        .nest(
            arrows,
            StyleSheet::new()
                .set("position", "relative")
                .set("top", 2)
                .set("right", "-0.5rem")
                .set("border-color", palette.gray400.as_str())
                .set("border-width", "2px 2px 0 0")
                .set("height", "7px")
                .set("width", "7px"),
        )
        .nest(
            multi(&[sel::header::MONTH_DROPDOWN, sel::header::YEAR_DROPDOWN]),
            StyleSheet::new()
                .set("background", palette.month_background.as_str())
                .set("border-color", palette.gray200.as_str())
                .set("box-shadow", "md")
                .nest(
                    "& > div",
                    StyleSheet::new()
                        .set("padding-block-start", 1)
                        .set("padding-block-end", 1)
                        .set("color", palette.text.as_str())
                        .nest(
                            "&:hover",
                            StyleSheet::new().set("background", palette.gray200.as_str()),
                        ),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::dimensions;
    use crate::size::SizeToken;

    #[test]
    fn test_header_band_uses_header_slot() {
        let light = header(&Palette::light(), &dimensions(SizeToken::Md));
        let dark = header(&Palette::dark(), &dimensions(SizeToken::Md));
        assert_eq!(light.get("background").unwrap().as_text(), Some("white"));
        assert_eq!(dark.get("background").unwrap().as_text(), Some("gray.700"));
    }

    #[test]
    fn test_day_names_share_day_cell_geometry() {
        let sheet = header(&Palette::light(), &dimensions(SizeToken::Xl));
        let name = sheet
            .sheet(sel::day::NAMES_ROW)
            .and_then(|s| s.sheet(sel::day::NAME))
            .unwrap();
        assert_eq!(name.get("width").unwrap().as_number(), Some(12.0));
        assert_eq!(name.get("line-height").unwrap().as_text(), Some("3rem"));
    }

    #[test]
    fn test_dropdown_arrow_hover_darkens() {
        let palette = Palette::light();
        let sheet = dropdown_row(&palette);
        let arrows = multi(&[sel::header::MONTH_DOWN_ARROW, sel::header::YEAR_DOWN_ARROW]);
        let read_views = multi(&[sel::header::MONTH_READ_VIEW, sel::header::YEAR_READ_VIEW]);
        assert_eq!(
            sheet
                .get_path(&[&arrows, "border-color"])
                .and_then(|v| v.as_text()),
            Some("gray.400")
        );
        assert_eq!(
            sheet
                .get_path(&[&read_views, "&:hover", &arrows, "border-color"])
                .and_then(|v| v.as_text()),
            Some("gray.500")
        );
    }

    #[test]
    fn test_empty_dropdown_row_collapses() {
        let sheet = dropdown_row(&Palette::light());
        assert_eq!(
            sheet
                .get_path(&["&:empty", "display"])
                .and_then(|v| v.as_text()),
            Some("none")
        );
    }
}
