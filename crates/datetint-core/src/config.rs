//! Picker configuration.
//!
//! Everything the host application decides up front lives here: sizing,
//! accent and theme hooks, popover placement, calendar feature toggles, and
//! the optional caller-supplied input control. The picker itself owns the
//! disabled flag and change handling; an [`InputControl`] the caller passes
//! in is used verbatim.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::size::SizeSpec;
use crate::theme::ThemeExtender;

/// Where the popover opens relative to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    #[default]
    BottomStart,
    BottomEnd,
    TopStart,
    TopEnd,
}

impl Placement {
    /// True for the `-end` aligned placements.
    pub fn is_end(self) -> bool {
        matches!(self, Placement::BottomEnd | Placement::TopEnd)
    }

    /// True when the popover opens above the input.
    pub fn is_top(self) -> bool {
        matches!(self, Placement::TopStart | Placement::TopEnd)
    }
}

/// Visual size of the input field, independent of the calendar size token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
}

/// Single date or start/end range selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

/// The current selection, shaped by [`SelectionMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    Single(NaiveDate),
    Range {
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
}

/// Time-of-day selection column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeOptions {
    /// Show the time list next to the calendar.
    pub enabled: bool,
    /// Spacing between generated time rows.
    pub interval_minutes: u32,
}

impl Default for TimeOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_minutes: 30,
        }
    }
}

/// Calendar feature toggles and date bounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarProps {
    pub mode: SelectionMode,
    pub time: TimeOptions,
    pub show_month_dropdown: bool,
    pub show_year_dropdown: bool,
    /// Show the clear (×) icon when a value is set.
    pub clearable: bool,
    /// Render the calendar inside a full-screen portal backdrop.
    pub with_portal: bool,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub selected: Option<Selection>,
}

/// Styling applied to the root wrapper element.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RootProps {
    pub width: String,
    pub line_height: String,
    /// Extra class names appended to the wrapper.
    pub classes: Vec<String>,
}

impl Default for RootProps {
    fn default() -> Self {
        Self {
            width: "100%".to_string(),
            line_height: "normal".to_string(),
            classes: Vec::new(),
        }
    }
}

/// Styling for the built-in themed input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputProps {
    pub placeholder: String,
    pub size: InputSize,
    pub classes: Vec<String>,
}

/// A fully caller-controlled input element.
///
/// When present the picker does not restyle it; the fields describe what the
/// caller's control should render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputControl {
    pub size: InputSize,
    pub disabled: bool,
    pub placeholder: String,
    pub classes: Vec<String>,
}

/// Top-level picker configuration.
#[derive(Default)]
pub struct PickerConfig {
    pub root: RootProps,
    pub input: InputProps,
    /// Calendar size, fixed or per-breakpoint.
    pub size: SizeSpec,
    /// Accent color family name, e.g. `"red"`. Rewrites the three accent
    /// palette slots; the family itself is not validated here.
    pub accent: Option<String>,
    /// Last-wins palette hook, applied after the accent.
    pub extend_theme: Option<ThemeExtender>,
    pub placement: Placement,
    /// Disables both the input and the calendar.
    pub disabled: bool,
    /// Caller-supplied input, used verbatim when set.
    pub custom_input: Option<InputControl>,
    pub calendar: CalendarProps,
}

impl fmt::Debug for PickerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerConfig")
            .field("root", &self.root)
            .field("input", &self.input)
            .field("size", &self.size)
            .field("accent", &self.accent)
            .field(
                "extend_theme",
                &self.extend_theme.as_ref().map(|_| "<fn>"),
            )
            .field("placement", &self.placement)
            .field("disabled", &self.disabled)
            .field("custom_input", &self.custom_input)
            .field("calendar", &self.calendar)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_flags() {
        assert!(!Placement::BottomStart.is_end());
        assert!(!Placement::BottomStart.is_top());
        assert!(Placement::BottomEnd.is_end());
        assert!(Placement::TopEnd.is_end());
        assert!(Placement::TopEnd.is_top());
        assert!(Placement::TopStart.is_top());
        assert!(!Placement::TopStart.is_end());
    }

    #[test]
    fn test_placement_kebab_case() {
        #[derive(Deserialize)]
        struct Wrap {
            placement: Placement,
        }
        let wrap: Wrap = toml::from_str("placement = \"top-end\"").unwrap();
        assert_eq!(wrap.placement, Placement::TopEnd);
    }

    #[test]
    fn test_calendar_defaults() {
        let cal = CalendarProps::default();
        assert_eq!(cal.mode, SelectionMode::Single);
        assert!(!cal.time.enabled);
        assert_eq!(cal.time.interval_minutes, 30);
        assert!(!cal.with_portal);
        assert!(cal.selected.is_none());
    }

    #[test]
    fn test_calendar_from_toml() {
        let cal: CalendarProps = toml::from_str(
            r#"
            mode = "range"
            show_month_dropdown = true
            clearable = true

            [time]
            enabled = true
            interval_minutes = 15
            "#,
        )
        .unwrap();
        assert_eq!(cal.mode, SelectionMode::Range);
        assert!(cal.show_month_dropdown);
        assert!(!cal.show_year_dropdown);
        assert!(cal.time.enabled);
        assert_eq!(cal.time.interval_minutes, 15);
    }

    #[test]
    fn test_root_defaults() {
        let root = RootProps::default();
        assert_eq!(root.width, "100%");
        assert_eq!(root.line_height, "normal");
    }

    #[test]
    fn test_config_debug_skips_extender() {
        let config = PickerConfig {
            extend_theme: Some(Box::new(|_, palette| palette.clone())),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("extend_theme: Some(\"<fn>\")"));
    }
}
