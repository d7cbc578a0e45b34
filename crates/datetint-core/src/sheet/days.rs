//! The month grid and day-cell states.

use crate::metrics::Dimensions;
use crate::selectors as sel;
use crate::style::{StyleSheet, multi};
use crate::theme::Palette;

/// The month grid container with its day cells.
pub(super) fn month_grid(palette: &Palette, dims: &Dimensions) -> StyleSheet {
    StyleSheet::new()
        .set("padding", 1.5)
        .set("background", palette.month_background.as_str())
        .set("margin", 0)
        .set("border-bottom-right-radius", "md")
        .set("border-bottom-left-radius", "md")
        .nest(sel::day::DAY, day_cell(palette, dims))
        .nest(
            sel::day::OUTSIDE_MONTH,
            StyleSheet::new().set("color", palette.outside_day.as_str()),
        )
}

/// One day cell and its state modifiers.
///
/// Disabled wins over every other state: the disabled block repeats itself
/// under its own hover, and the selected/in-range keys exclude disabled
/// cells outright.
fn day_cell(palette: &Palette, dims: &Dimensions) -> StyleSheet {
    let disabled = StyleSheet::new()
        .set("background", "unset")
        .set("opacity", 0.2)
        .set("cursor", "not-allowed");

    let selecting_key = multi(&[
        &sel::on_self(sel::day::IN_SELECTING_RANGE),
        &sel::on_self(sel::day::MONTH_TEXT_IN_SELECTING_RANGE),
        &sel::on_self(sel::day::KEYBOARD_SELECTED),
        &sel::on_self(sel::day::MONTH_TEXT_KEYBOARD_SELECTED),
        &sel::on_self(sel::day::QUARTER_TEXT_KEYBOARD_SELECTED),
        &sel::on_self(sel::day::YEAR_TEXT_KEYBOARD_SELECTED),
    ]);
    let selected_key = multi(&[
        &sel::on_self_not(sel::day::SELECTED, sel::day::DISABLED),
        &sel::on_self_not(sel::day::IN_RANGE, sel::day::DISABLED),
        &sel::on_self_not(sel::day::MONTH_TEXT_SELECTED, sel::day::DISABLED),
        &sel::on_self_not(sel::day::MONTH_TEXT_IN_RANGE, sel::day::DISABLED),
    ]);

    StyleSheet::new()
        .set("width", dims.day_cell_width)
        .set("line-height", dims.day_cell_line_height)
        .set("color", palette.text.as_str())
        .nest(
            "&:hover",
            StyleSheet::new().set("background", palette.gray200.as_str()),
        )
        .nest(
            sel::on_self(sel::day::DISABLED),
            disabled.clone().nest("&:hover", disabled),
        )
        .nest(
            selecting_key,
            StyleSheet::new().set("background", palette.color300.as_str()),
        )
        .nest(
            selected_key,
            StyleSheet::new()
                .set("background", palette.color500.as_str())
                .set("font-weight", "normal")
                .set("color", palette.negative_text.as_str())
                .nest(
                    "&:hover",
                    StyleSheet::new().set("background", palette.color600.as_str()),
                ),
        )
}
