//! Month navigation arrows.

use crate::metrics::Dimensions;
use crate::selectors as sel;
use crate::size::SizeToken;
use crate::style::StyleSheet;
use crate::theme::Palette;

use super::SheetContext;

/// The previous/next navigation buttons.
///
/// The next arrow clears the time column when it is shown, unless a today
/// button already pushes the header layout around.
pub(super) fn navigation(palette: &Palette, dims: &Dimensions, ctx: &SheetContext) -> StyleSheet {
    let mut sheet = StyleSheet::new()
        .set("width", dims.nav_icon_size)
        .set("height", dims.nav_icon_size)
        .set("top", 3);
    if ctx.size != SizeToken::Xs {
        sheet = sheet.set("margin-top", -1);
    }
    sheet
        .set("color", "transparent")
        .nest(
            "&:hover",
            StyleSheet::new().nest(
                format!("{}::before", sel::nav::ICON),
                StyleSheet::new().set("border-color", palette.gray500.as_str()),
            ),
        )
        .nest(
            sel::nav::ICON,
            StyleSheet::new()
                .set("font-size", "unset")
                .set("width", "100%")
                .set("height", "100%")
                .set("top", "unset")
                .set("display", "inline-flex")
                .set("align-items", "center")
                .set("justify-content", "center")
                .nest(
                    "&::before",
                    StyleSheet::new()
                        .set("left", "unset")
                        .set("top", "unset")
                        .set("right", "unset")
                        .set("bottom", "unset")
                        .set("border-color", palette.gray400.as_str()),
                ),
        )
        .nest(
            sel::on_self(sel::nav::PREVIOUS),
            StyleSheet::new().set("left", "0.8rem"),
        )
        .nest(
            sel::on_self(sel::nav::NEXT),
            StyleSheet::new().set("right", "0.8rem"),
        )
        .nest(
            sel::on_self_not(sel::nav::NEXT_WITH_TIME, sel::nav::NEXT_WITH_TODAY),
            StyleSheet::new().set(
                "right",
                format!("calc({}px + 0.8rem)", dims.time_column_width),
            ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{InputSize, Placement};
    use crate::metrics::dimensions;

    fn ctx(size: SizeToken) -> SheetContext {
        SheetContext {
            size,
            input_size: InputSize::Md,
            placement: Placement::BottomStart,
        }
    }

    #[test]
    fn test_arrow_size_shrinks_for_xs() {
        let palette = Palette::light();
        let xs = navigation(&palette, &dimensions(SizeToken::Xs), &ctx(SizeToken::Xs));
        let md = navigation(&palette, &dimensions(SizeToken::Md), &ctx(SizeToken::Md));
        assert_eq!(xs.get("width").unwrap().as_number(), Some(5.0));
        assert_eq!(md.get("width").unwrap().as_number(), Some(7.0));
        // The upward nudge only applies above xs.
        assert!(xs.get("margin-top").is_none());
        assert_eq!(md.get("margin-top").unwrap().as_number(), Some(-1.0));
    }

    #[test]
    fn test_next_arrow_clears_time_column() {
        let palette = Palette::light();
        let key = sel::on_self_not(sel::nav::NEXT_WITH_TIME, sel::nav::NEXT_WITH_TODAY);
        for (size, expected) in [
            (SizeToken::Xl, "calc(120px + 0.8rem)"),
            (SizeToken::Md, "calc(105px + 0.8rem)"),
            (SizeToken::Sm, "calc(75px + 0.8rem)"),
        ] {
            let sheet = navigation(&palette, &dimensions(size), &ctx(size));
            assert_eq!(
                sheet.get_path(&[&key, "right"]).and_then(|v| v.as_text()),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_hover_darkens_chevron() {
        let palette = Palette::dark();
        let sheet = navigation(&palette, &dimensions(SizeToken::Md), &ctx(SizeToken::Md));
        let hover_key = format!("{}::before", sel::nav::ICON);
        assert_eq!(
            sheet
                .get_path(&["&:hover", &hover_key, "border-color"])
                .and_then(|v| v.as_text()),
            Some("gray.300")
        );
    }
}
