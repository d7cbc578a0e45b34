//! Time column and the manual time input row.

use crate::metrics::Dimensions;
use crate::selectors as sel;
use crate::style::StyleSheet;
use crate::theme::Palette;

/// The time column next to the calendar.
pub(super) fn time_container(palette: &Palette, dims: &Dimensions) -> StyleSheet {
    let selected_key = format!(
        "li{}:not({})",
        sel::time::ITEM_SELECTED,
        sel::time::ITEM_DISABLED
    );
    StyleSheet::new()
        .set("border-color", palette.gray300.as_str())
        .set("width", dims.time_column_width)
        .nest(
            sel::time::TIME,
            StyleSheet::new()
                .set("background", palette.month_background.as_str())
                .set("margin", 0)
                .nest(
                    sel::time::BOX,
                    StyleSheet::new().set("width", "100%").nest(
                        sel::time::LIST,
                        StyleSheet::new()
                            .nest(
                                sel::time::ITEM,
                                StyleSheet::new()
                                    .set("height", "auto")
                                    .set("padding", 2)
                                    .set("color", palette.text.as_str())
                                    .nest(
                                        "&:hover",
                                        StyleSheet::new()
                                            .set("background", palette.gray200.as_str()),
                                    ),
                            )
                            .nest(
                                selected_key,
                                StyleSheet::new()
                                    .set("background", palette.color500.as_str())
                                    .set("font-weight", "normal")
                                    .set("color", palette.negative_text.as_str())
                                    .nest(
                                        "&:hover",
                                        StyleSheet::new()
                                            .set("background", palette.color600.as_str()),
                                    ),
                            ),
                    ),
                ),
        )
}

/// The manual time input row below the calendar.
pub(super) fn input_time_container(palette: &Palette) -> StyleSheet {
    StyleSheet::new().set("margin", 0).set("padding", 3).nest(
        sel::time::CAPTION,
        StyleSheet::new().set("color", palette.text.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::dimensions;
    use crate::size::SizeToken;

    #[test]
    fn test_column_width_tracks_size() {
        let palette = Palette::light();
        for (size, expected) in [
            (SizeToken::Xl, 120.0),
            (SizeToken::Md, 105.0),
            (SizeToken::Sm, 75.0),
            (SizeToken::Xs, 75.0),
        ] {
            let sheet = time_container(&palette, &dimensions(size));
            assert_eq!(sheet.get("width").unwrap().as_number(), Some(expected));
        }
    }

    #[test]
    fn test_selected_row_matches_selected_day_styling() {
        let palette = Palette::dark();
        let sheet = time_container(&palette, &dimensions(SizeToken::Md));
        let selected_key = format!(
            "li{}:not({})",
            sel::time::ITEM_SELECTED,
            sel::time::ITEM_DISABLED
        );
        let selected = sheet
            .get_path(&[sel::time::TIME, sel::time::BOX, sel::time::LIST, &selected_key])
            .and_then(|v| v.as_sheet())
            .unwrap();
        assert_eq!(
            selected.get("background").unwrap().as_text(),
            Some("blue.300")
        );
        assert_eq!(
            selected
                .get_path(&["&:hover", "background"])
                .and_then(|v| v.as_text()),
            Some("blue.500")
        );
    }

    #[test]
    fn test_caption_uses_text_slot() {
        let sheet = input_time_container(&Palette::light());
        assert_eq!(
            sheet
                .get_path(&[sel::time::CAPTION, "color"])
                .and_then(|v| v.as_text()),
            Some("gray.800")
        );
    }
}
