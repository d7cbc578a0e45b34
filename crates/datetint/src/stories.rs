//! The built-in demo stories.
//!
//! Each story is a named picker configuration plus the environment it is
//! rendered in. Stories dodge shared state on purpose; `config()` builds a
//! fresh configuration every call so renders stay independent.

use chrono::NaiveDate;
use datetint_core::config::{
    CalendarProps, InputProps, InputSize, PickerConfig, Placement, Selection, SelectionMode,
    TimeOptions,
};
use datetint_core::size::{Breakpoint, SizeSpec, SizeToken};
use datetint_core::theme::ColorMode;

/// One demo scenario.
pub struct Story {
    pub name: &'static str,
    pub description: &'static str,
    pub color_mode: ColorMode,
    /// Viewport width in px for the resolved render pass.
    pub viewport: u32,
    build: fn() -> PickerConfig,
}

impl Story {
    /// Build a fresh configuration for this story.
    pub fn config(&self) -> PickerConfig {
        (self.build)()
    }
}

/// All stories, in display order.
pub fn all() -> Vec<Story> {
    vec![
        Story {
            name: "default",
            description: "Out-of-the-box picker, light mode, md size",
            color_mode: ColorMode::Light,
            viewport: 1280,
            build: PickerConfig::default,
        },
        Story {
            name: "dark",
            description: "Default picker in dark mode",
            color_mode: ColorMode::Dark,
            viewport: 1280,
            build: PickerConfig::default,
        },
        Story {
            name: "xl",
            description: "Largest size token with taller day rows",
            color_mode: ColorMode::Light,
            viewport: 1280,
            build: || PickerConfig {
                size: SizeToken::Xl.into(),
                ..Default::default()
            },
        },
        Story {
            name: "responsive",
            description: "Per-breakpoint sizing at a 900px viewport",
            color_mode: ColorMode::Light,
            viewport: 900,
            build: || PickerConfig {
                size: SizeSpec::responsive([
                    (Breakpoint::Base, SizeToken::Xs),
                    (Breakpoint::Md, SizeToken::Md),
                    (Breakpoint::Xl, SizeToken::Xl),
                ]),
                ..Default::default()
            },
        },
        Story {
            name: "red-accent",
            description: "Accent family swapped to red",
            color_mode: ColorMode::Light,
            viewport: 1280,
            build: || PickerConfig {
                accent: Some("red".to_string()),
                ..Default::default()
            },
        },
        Story {
            name: "branded",
            description: "Theme extender recoloring the header after the accent",
            color_mode: ColorMode::Dark,
            viewport: 1280,
            build: || PickerConfig {
                accent: Some("purple".to_string()),
                extend_theme: Some(Box::new(|_, palette| {
                    let mut out = palette.clone();
                    out.header = "#10151c".to_string();
                    out.month_background = "#161c26".to_string();
                    out
                })),
                ..Default::default()
            },
        },
        Story {
            name: "time-select",
            description: "Calendar with the time column at 15 minute steps",
            color_mode: ColorMode::Light,
            viewport: 1280,
            build: || PickerConfig {
                calendar: CalendarProps {
                    time: TimeOptions {
                        enabled: true,
                        interval_minutes: 15,
                    },
                    ..Default::default()
                },
                ..Default::default()
            },
        },
        Story {
            name: "range",
            description: "Range selection with a started range and date bounds",
            color_mode: ColorMode::Light,
            viewport: 1280,
            build: || PickerConfig {
                calendar: CalendarProps {
                    mode: SelectionMode::Range,
                    min_date: NaiveDate::from_ymd_opt(2026, 1, 1),
                    max_date: NaiveDate::from_ymd_opt(2026, 12, 31),
                    selected: NaiveDate::from_ymd_opt(2026, 8, 10)
                        .map(|start| Selection::Range { start, end: None }),
                    ..Default::default()
                },
                ..Default::default()
            },
        },
        Story {
            name: "portal",
            description: "Calendar in a full-screen portal with dropdowns",
            color_mode: ColorMode::Light,
            viewport: 1280,
            build: || PickerConfig {
                calendar: CalendarProps {
                    with_portal: true,
                    show_month_dropdown: true,
                    show_year_dropdown: true,
                    clearable: true,
                    ..Default::default()
                },
                ..Default::default()
            },
        },
        Story {
            name: "top-end",
            description: "Popover opening above, aligned to the input's end",
            color_mode: ColorMode::Light,
            viewport: 1280,
            build: || PickerConfig {
                placement: Placement::TopEnd,
                ..Default::default()
            },
        },
        Story {
            name: "disabled",
            description: "Disabled picker with a large input",
            color_mode: ColorMode::Light,
            viewport: 1280,
            build: || PickerConfig {
                disabled: true,
                input: InputProps {
                    placeholder: "Unavailable".to_string(),
                    size: InputSize::Lg,
                    ..Default::default()
                },
                ..Default::default()
            },
        },
    ]
}

/// Look up a story by name.
pub fn find(name: &str) -> Option<Story> {
    all().into_iter().find(|story| story.name == name)
}
