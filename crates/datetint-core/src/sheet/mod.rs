//! Style-sheet compilation.
//!
//! One builder per visual region of the calendar; [`compile`] assembles them
//! into a single [`StyleSheet`] scoped under the picker's own selectors.
//! Compilation is a pure function of the palette, the geometry, and the
//! context, so two compilations of the same inputs compare equal.

mod container;
mod days;
mod header;
mod navigation;
mod popover;
mod time_list;

use crate::config::{InputSize, Placement};
use crate::metrics::Dimensions;
use crate::selectors as sel;
use crate::size::SizeToken;
use crate::style::{StyleSheet, multi};
use crate::theme::Palette;

/// Per-render inputs that steer the compiled sheet beyond colors and
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetContext {
    /// The resolved calendar size token.
    pub size: SizeToken,
    /// Size of the input field, steering the clear-icon glyph.
    pub input_size: InputSize,
    /// Popover placement, steering the triangle offset.
    pub placement: Placement,
}

/// Compile the complete picker sheet.
pub fn compile(palette: &Palette, dims: &Dimensions, ctx: &SheetContext) -> StyleSheet {
    StyleSheet::new()
        .nest(sel::picker::CONTAINER, container::frame(palette, ctx))
        .nest(
            sel::picker::INPUT_CONTAINER,
            container::input_container(palette, ctx),
        )
        .nest(sel::header::HEADER, header::header(palette, dims))
        .nest(
            sel::nav::NAVIGATION,
            navigation::navigation(palette, dims, ctx),
        )
        .nest(
            multi(&[sel::header::SELECTED_MONTH, sel::header::SELECTED_YEAR]),
            header::read_view_labels(palette),
        )
        .nest(sel::day::MONTH_GRID, days::month_grid(palette, dims))
        .nest(
            sel::time::CONTAINER,
            time_list::time_container(palette, dims),
        )
        .nest(sel::popover::TRIANGLE, popover::triangle(ctx.placement))
        .nest(sel::popover::POPPER_BOTTOM, popover::popper_bottom(palette))
        .nest(sel::popover::POPPER_TOP, popover::popper_top(palette))
        .nest(
            sel::time::INPUT_CONTAINER,
            time_list::input_time_container(palette),
        )
        .nest(sel::picker::PORTAL, container::portal())
}
