//! Picker frame, input wrapper, and portal backdrop.

use crate::config::InputSize;
use crate::selectors as sel;
use crate::size::SizeToken;
use crate::style::StyleSheet;
use crate::theme::Palette;

use super::SheetContext;

/// The outer calendar frame.
pub(super) fn frame(palette: &Palette, ctx: &SheetContext) -> StyleSheet {
    let font_size = if ctx.size == SizeToken::Xs { "xs" } else { "md" };
    StyleSheet::new()
        .set("min-width", "max-content")
        .set("font-family", "unset")
        .set("font-size", font_size)
        .set("border-color", palette.gray200.as_str())
        .set("box-shadow", "sm")
        .set("background", palette.month_background.as_str())
        .set("margin", 0)
        .set("color", palette.text.as_str())
}

/// The input wrapper, including the clear (×) button.
///
/// The clear glyph tracks the input size, not the calendar size.
pub(super) fn input_container(palette: &Palette, ctx: &SheetContext) -> StyleSheet {
    let glyph_size = match ctx.input_size {
        InputSize::Lg => "2xl",
        InputSize::Xs => "md",
        _ => "xl",
    };
    StyleSheet::new().set("display", "block").nest(
        sel::picker::CLEAR_ICON,
        StyleSheet::new()
            .nest(
                "&::after",
                StyleSheet::new()
                    .set("background-color", "unset")
                    .set("border-radius", "unset")
                    .set("font-size", glyph_size)
                    .set("color", palette.gray300.as_str())
                    .set("height", "20px")
                    .set("width", "20px"),
            )
            .nest(
                "&:hover::after",
                StyleSheet::new().set("color", palette.gray400.as_str()),
            ),
    )
}

/// Full-screen backdrop behind a portaled calendar.
pub(super) fn portal() -> StyleSheet {
    StyleSheet::new().set("background", "blackAlpha.600")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Placement;

    fn ctx(size: SizeToken, input_size: InputSize) -> SheetContext {
        SheetContext {
            size,
            input_size,
            placement: Placement::BottomStart,
        }
    }

    #[test]
    fn test_frame_font_size_tracks_calendar_size() {
        let palette = Palette::light();
        let xs = frame(&palette, &ctx(SizeToken::Xs, InputSize::Md));
        let md = frame(&palette, &ctx(SizeToken::Md, InputSize::Md));
        assert_eq!(xs.get("font-size").unwrap().as_text(), Some("xs"));
        assert_eq!(md.get("font-size").unwrap().as_text(), Some("md"));
    }

    #[test]
    fn test_clear_glyph_tracks_input_size() {
        let palette = Palette::light();
        for (input_size, expected) in [
            (InputSize::Lg, "2xl"),
            (InputSize::Xs, "md"),
            (InputSize::Sm, "xl"),
            (InputSize::Md, "xl"),
        ] {
            let sheet = input_container(&palette, &ctx(SizeToken::Md, input_size));
            assert_eq!(
                sheet
                    .get_path(&[sel::picker::CLEAR_ICON, "&::after", "font-size"])
                    .and_then(|v| v.as_text()),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_clear_icon_has_fixed_hit_box() {
        let palette = Palette::dark();
        let sheet = input_container(&palette, &ctx(SizeToken::Md, InputSize::Md));
        let after = sheet
            .sheet(sel::picker::CLEAR_ICON)
            .and_then(|s| s.sheet("&::after"))
            .unwrap();
        assert_eq!(after.get("height").unwrap().as_text(), Some("20px"));
        assert_eq!(after.get("width").unwrap().as_text(), Some("20px"));
    }
}
