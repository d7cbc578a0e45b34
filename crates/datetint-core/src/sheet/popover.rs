//! Popover triangle and per-placement triangle coloring.

use crate::config::Placement;
use crate::selectors as sel;
use crate::style::StyleSheet;
use crate::theme::Palette;

/// Horizontal triangle offset keeping the pointer over the input edge.
pub(super) fn triangle(placement: Placement) -> StyleSheet {
    let offset = if placement.is_end() { "3rem" } else { "-3rem" };
    StyleSheet::new().set("left", offset)
}

/// Triangle colors when the popover opens below the input. The pointer
/// sits against the header band, so its fill matches the header.
pub(super) fn popper_bottom(palette: &Palette) -> StyleSheet {
    StyleSheet::new().nest(
        sel::popover::TRIANGLE,
        StyleSheet::new()
            .nest(
                "&::before",
                StyleSheet::new().set("border-bottom-color", palette.gray200.as_str()),
            )
            .nest(
                "&::after",
                StyleSheet::new()
                    .set("border-bottom-color", palette.header.as_str())
                    .set("top", "1px"),
            ),
    )
}

/// Triangle colors when the popover opens above the input. The pointer
/// sits against the month grid, so its fill matches the month background.
pub(super) fn popper_top(palette: &Palette) -> StyleSheet {
    StyleSheet::new().nest(
        sel::popover::TRIANGLE,
        StyleSheet::new()
            .nest(
                "&::before",
                StyleSheet::new().set("border-top-color", palette.gray200.as_str()),
            )
            .nest(
                "&::after",
                StyleSheet::new().set("border-top-color", palette.month_background.as_str()),
            ),
    )
}
