//! Core engine for the themed date-picker: palette derivation, responsive
//! size resolution, geometry tables, and style-sheet compilation.
//!
//! The crate is pure computation. Nothing here talks to a display server or
//! a DOM; hosts feed in a [`config::PickerConfig`] plus per-pass
//! [`picker::RenderEnv`] facts and get back a [`picker::Rendered`] snapshot
//! to draw from.

pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod picker;
pub mod selectors;
pub mod sheet;
pub mod size;
pub mod style;
pub mod theme;

pub use config::{CalendarProps, InputControl, InputSize, PickerConfig, Placement};
pub use error::{Error, Result};
pub use metrics::{Dimensions, dimensions};
pub use picker::{DatePicker, RenderEnv, Rendered};
pub use size::{Breakpoint, BreakpointContext, SizeResolver, SizeSpec, SizeToken};
pub use style::{StyleSheet, StyleValue};
pub use theme::{ColorMode, Palette, ThemeExtender};
