//! Palette selection and customization.
//!
//! `Palette` is the single source of truth for every color the compiled
//! style sheet references. Slots hold design-system color tokens (e.g.
//! `gray.200`, `white`) or raw hex values; the host design system resolves
//! them at render time, which is why an unknown accent family is accepted
//! here and only surfaces downstream.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Process-wide light/dark display mode. Owned by the host; read-only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

/// A caller-supplied theme transform.
///
/// Receives the color mode and the (possibly accent-customized) palette and
/// must return a complete replacement palette, not a partial patch.
pub type ThemeExtender = Box<dyn Fn(ColorMode, &Palette) -> Palette + Send + Sync>;

/// The resolved set of semantic color slots driving the picker theme.
///
/// Immutable by convention: customization always produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Neutral scale, lightest to darkest in light mode (inverted in dark).
    pub gray100: String,
    pub gray200: String,
    pub gray300: String,
    pub gray400: String,
    pub gray500: String,

    /// Accent shades: keyboard/selecting highlight, selected fill, selected hover.
    pub color300: String,
    pub color500: String,
    pub color600: String,

    /// Header band background.
    pub header: String,
    /// Primary text color.
    pub text: String,
    /// Text on accent-filled surfaces.
    pub negative_text: String,
    /// Day grid and dropdown panel background.
    pub month_background: String,
    /// Days belonging to the previous/next month. Same in both modes.
    pub outside_day: String,
}

impl Palette {
    /// The built-in light-mode palette.
    pub fn light() -> Self {
        Self {
            gray100: "gray.100".to_string(),
            gray200: "gray.200".to_string(),
            gray300: "gray.300".to_string(),
            gray400: "gray.400".to_string(),
            gray500: "gray.500".to_string(),
            color300: "blue.300".to_string(),
            color500: "blue.500".to_string(),
            color600: "blue.600".to_string(),
            header: "white".to_string(),
            text: "gray.800".to_string(),
            negative_text: "whiteAlpha.900".to_string(),
            month_background: "white".to_string(),
            outside_day: "#9f9696".to_string(),
        }
    }

    /// The built-in dark-mode palette.
    pub fn dark() -> Self {
        Self {
            gray100: "gray.700".to_string(),
            gray200: "gray.600".to_string(),
            gray300: "gray.500".to_string(),
            gray400: "gray.400".to_string(),
            gray500: "gray.300".to_string(),
            color300: "blue.200".to_string(),
            color500: "blue.300".to_string(),
            color600: "blue.500".to_string(),
            header: "gray.700".to_string(),
            text: "whiteAlpha.900".to_string(),
            negative_text: "whiteAlpha.900".to_string(),
            month_background: "gray.700".to_string(),
            outside_day: "#9f9696".to_string(),
        }
    }

    /// Base palette for a color mode.
    pub fn base(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Self::light(),
            ColorMode::Dark => Self::dark(),
        }
    }

    /// Replace the three accent slots with shades of a color family.
    ///
    /// Pure string composition; the family name is not validated against any
    /// real palette. `with_accent("red")` yields `red.300` / `red.500` /
    /// `red.600` whether or not the design system defines `red`.
    pub fn with_accent(mut self, family: &str) -> Self {
        self.color300 = format!("{family}.300");
        self.color500 = format!("{family}.500");
        self.color600 = format!("{family}.600");
        self
    }
}

/// Resolve the final palette for a render pass.
///
/// Order is fixed: the accent override runs first, then the extender, so a
/// user extension sees (and may override) accent-derived values. The
/// extender owns producing the complete result; nothing is merged back.
pub fn customize(
    mode: ColorMode,
    accent: Option<&str>,
    extend: Option<&ThemeExtender>,
) -> Palette {
    let mut palette = Palette::base(mode);
    if let Some(family) = accent {
        palette = palette.with_accent(family);
    }
    if let Some(extend) = extend {
        palette = extend(mode, &palette);
    }
    palette
}

/// Declarative per-slot palette overrides, loadable from a TOML file.
///
/// This is the file-based counterpart of a [`ThemeExtender`]: every field is
/// optional and unset slots keep the incoming palette's value.
///
/// # Example
///
/// ```toml
/// [slots]
/// color500 = "teal.500"
/// color600 = "teal.600"
/// header = "#10151c"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverrides {
    pub slots: PaletteSlotOverrides,
}

/// The `[slots]` table of a palette-override file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteSlotOverrides {
    pub gray100: Option<String>,
    pub gray200: Option<String>,
    pub gray300: Option<String>,
    pub gray400: Option<String>,
    pub gray500: Option<String>,
    pub color300: Option<String>,
    pub color500: Option<String>,
    pub color600: Option<String>,
    pub header: Option<String>,
    pub text: Option<String>,
    pub negative_text: Option<String>,
    pub month_background: Option<String>,
    pub outside_day: Option<String>,
}

impl PaletteOverrides {
    /// Load overrides from a TOML file.
    ///
    /// Unknown slot names are rejected (typo protection); missing slots are
    /// simply left alone.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ThemeFileNotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let overrides: PaletteOverrides = toml::from_str(&content)?;
        Ok(overrides)
    }

    /// Apply the overrides to a palette, producing a new palette.
    pub fn apply(&self, palette: &Palette) -> Palette {
        let s = &self.slots;
        let pick = |slot: &Option<String>, base: &str| {
            slot.clone().unwrap_or_else(|| base.to_string())
        };
        Palette {
            gray100: pick(&s.gray100, &palette.gray100),
            gray200: pick(&s.gray200, &palette.gray200),
            gray300: pick(&s.gray300, &palette.gray300),
            gray400: pick(&s.gray400, &palette.gray400),
            gray500: pick(&s.gray500, &palette.gray500),
            color300: pick(&s.color300, &palette.color300),
            color500: pick(&s.color500, &palette.color500),
            color600: pick(&s.color600, &palette.color600),
            header: pick(&s.header, &palette.header),
            text: pick(&s.text, &palette.text),
            negative_text: pick(&s.negative_text, &palette.negative_text),
            month_background: pick(&s.month_background, &palette.month_background),
            outside_day: pick(&s.outside_day, &palette.outside_day),
        }
    }

    /// Wrap the overrides into a [`ThemeExtender`] for the picker config.
    pub fn into_extender(self) -> ThemeExtender {
        Box::new(move |_mode, palette| self.apply(palette))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_palettes_differ_by_mode() {
        let light = Palette::base(ColorMode::Light);
        let dark = Palette::base(ColorMode::Dark);
        assert_eq!(light.header, "white");
        assert_eq!(dark.header, "gray.700");
        assert_ne!(light.text, dark.text);
    }

    #[test]
    fn test_outside_day_is_mode_independent() {
        assert_eq!(Palette::light().outside_day, Palette::dark().outside_day);
        assert_eq!(Palette::light().outside_day, "#9f9696");
    }

    #[test]
    fn test_customize_without_options_is_base() {
        assert_eq!(
            customize(ColorMode::Dark, None, None),
            Palette::base(ColorMode::Dark)
        );
    }

    #[test]
    fn test_accent_replaces_exactly_three_slots() {
        let base = Palette::base(ColorMode::Dark);
        let custom = customize(ColorMode::Dark, Some("red"), None);

        assert_eq!(custom.color300, "red.300");
        assert_eq!(custom.color500, "red.500");
        assert_eq!(custom.color600, "red.600");

        // Every non-accent slot is untouched.
        assert_eq!(custom.gray100, base.gray100);
        assert_eq!(custom.gray200, base.gray200);
        assert_eq!(custom.gray300, base.gray300);
        assert_eq!(custom.gray400, base.gray400);
        assert_eq!(custom.gray500, base.gray500);
        assert_eq!(custom.header, base.header);
        assert_eq!(custom.text, base.text);
        assert_eq!(custom.negative_text, base.negative_text);
        assert_eq!(custom.month_background, base.month_background);
        assert_eq!(custom.outside_day, base.outside_day);
    }

    #[test]
    fn test_unknown_accent_family_is_accepted() {
        let custom = customize(ColorMode::Light, Some("nonexistent"), None);
        assert_eq!(custom.color500, "nonexistent.500");
    }

    #[test]
    fn test_extender_sees_accent_customized_palette() {
        let extend: ThemeExtender = Box::new(|_, palette| {
            let mut p = palette.clone();
            p.header = palette.color500.clone();
            p
        });
        let custom = customize(ColorMode::Light, Some("teal"), Some(&extend));
        assert_eq!(custom.header, "teal.500");
    }

    #[test]
    fn test_extender_wins_last() {
        // An extender that ignores its input wins regardless of the accent.
        let fixed = Palette::dark();
        let replacement = fixed.clone();
        let extend: ThemeExtender = Box::new(move |_, _| replacement.clone());

        let with_accent = customize(ColorMode::Light, Some("red"), Some(&extend));
        let without_accent = customize(ColorMode::Light, None, Some(&extend));
        assert_eq!(with_accent, fixed);
        assert_eq!(without_accent, fixed);
    }

    #[test]
    fn test_overrides_apply_only_set_slots() {
        let overrides: PaletteOverrides = toml::from_str(
            r##"
            [slots]
            color500 = "teal.500"
            header = "#10151c"
            "##,
        )
        .unwrap();

        let base = Palette::light();
        let applied = overrides.apply(&base);
        assert_eq!(applied.color500, "teal.500");
        assert_eq!(applied.header, "#10151c");
        assert_eq!(applied.color300, base.color300);
        assert_eq!(applied.text, base.text);
    }

    #[test]
    fn test_overrides_reject_unknown_slots() {
        let result: std::result::Result<PaletteOverrides, _> = toml::from_str(
            r##"
            [slots]
            gray150 = "#808080"
            "##,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_overrides_as_extender() {
        let overrides: PaletteOverrides = toml::from_str(
            r#"
            [slots]
            color300 = "orange.300"
            "#,
        )
        .unwrap();

        let extend = overrides.into_extender();
        let custom = customize(ColorMode::Dark, Some("red"), Some(&extend));
        // The extender runs after the accent override.
        assert_eq!(custom.color300, "orange.300");
        assert_eq!(custom.color500, "red.500");
    }
}
