//! The structured style-sheet value type.
//!
//! A [`StyleSheet`] is an ordered tree: selector or property keys mapping to
//! plain values or nested sheets. It is rebuilt from scratch on every render
//! pass and never cached or mutated afterwards, so equality between two
//! compilations of the same inputs is meaningful.

use std::fmt::Write as _;

/// A single style value: text, number, or a nested sheet.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    Text(String),
    Number(f64),
    Nested(StyleSheet),
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Number(value)
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<u32> for StyleValue {
    fn from(value: u32) -> Self {
        StyleValue::Number(f64::from(value))
    }
}

impl From<StyleSheet> for StyleValue {
    fn from(value: StyleSheet) -> Self {
        StyleValue::Nested(value)
    }
}

impl StyleValue {
    /// The text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            StyleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric content, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The nested sheet, if this value nests one.
    pub fn as_sheet(&self) -> Option<&StyleSheet> {
        match self {
            StyleValue::Nested(sheet) => Some(sheet),
            _ => None,
        }
    }
}

/// An ordered selector/property tree.
///
/// Insertion order is preserved so rendered output is deterministic;
/// setting an existing key replaces its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSheet {
    rules: Vec<(String, StyleValue)>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property or nested selector (builder form).
    pub fn set(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.rules.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.rules.push((key, value));
        }
        self
    }

    /// Nest a sheet under a selector (builder form).
    pub fn nest(self, selector: impl Into<String>, sheet: StyleSheet) -> Self {
        self.set(selector, StyleValue::Nested(sheet))
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Look up a direct child by key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.rules.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up a nested sheet by key.
    pub fn sheet(&self, key: &str) -> Option<&StyleSheet> {
        self.get(key).and_then(StyleValue::as_sheet)
    }

    /// Walk a path of keys through nested sheets.
    ///
    /// Every path element but the last must resolve to a nested sheet.
    pub fn get_path(&self, path: &[&str]) -> Option<&StyleValue> {
        let (last, parents) = path.split_last()?;
        let mut current = self;
        for key in parents {
            current = current.sheet(key)?;
        }
        current.get(last)
    }

    /// Iterate over direct entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render the sheet as nested CSS-like text.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out, 0);
        out
    }

    fn write_css(&self, out: &mut String, depth: usize) {
        let indent = "    ".repeat(depth);
        for (key, value) in &self.rules {
            match value {
                StyleValue::Nested(sheet) => {
                    let _ = writeln!(out, "{indent}{key} {{");
                    sheet.write_css(out, depth + 1);
                    let _ = writeln!(out, "{indent}}}");
                }
                StyleValue::Text(text) => {
                    let _ = writeln!(out, "{indent}{key}: {text};");
                }
                StyleValue::Number(n) => {
                    let _ = writeln!(out, "{indent}{key}: {};", format_number(*n));
                }
            }
        }
    }
}

/// Join selectors into one comma-separated selector list.
pub fn multi<S: AsRef<str>>(selectors: &[S]) -> String {
    selectors
        .iter()
        .map(S::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> StyleSheet {
        StyleSheet::new()
            .set("color", "gray.800")
            .set("padding", 1.5)
            .nest(
                "&:hover",
                StyleSheet::new().set("background", "gray.200"),
            )
    }

    #[test]
    fn test_set_and_get() {
        let sheet = sample();
        assert_eq!(sheet.get("color").unwrap().as_text(), Some("gray.800"));
        assert_eq!(sheet.get("padding").unwrap().as_number(), Some(1.5));
        assert!(sheet.get("missing").is_none());
    }

    #[test]
    fn test_set_replaces_existing_key() {
        let sheet = sample().set("color", "gray.900");
        assert_eq!(sheet.get("color").unwrap().as_text(), Some("gray.900"));
        // Replacement does not grow the sheet.
        assert_eq!(sheet.len(), 3);
    }

    #[test]
    fn test_get_path_walks_nesting() {
        let sheet = sample();
        assert_eq!(
            sheet
                .get_path(&["&:hover", "background"])
                .and_then(StyleValue::as_text),
            Some("gray.200")
        );
        assert!(sheet.get_path(&["&:hover", "missing"]).is_none());
        assert!(sheet.get_path(&["color", "background"]).is_none());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = StyleSheet::new().set("a", 1).set("b", 2);
        let b = StyleSheet::new().set("b", 2).set("a", 1);
        assert_ne!(a, b);
        assert_eq!(a, StyleSheet::new().set("a", 1).set("b", 2));
    }

    #[test]
    fn test_to_css_renders_nested_blocks() {
        let css = sample().to_css();
        assert!(css.contains("color: gray.800;"));
        assert!(css.contains("padding: 1.5;"));
        assert!(css.contains("&:hover {"));
        assert!(css.contains("    background: gray.200;"));
    }

    #[test]
    fn test_to_css_formats_whole_numbers_without_fraction() {
        let css = StyleSheet::new().set("margin", 0).set("top", 3u32).to_css();
        assert!(css.contains("margin: 0;"));
        assert!(css.contains("top: 3;"));
    }

    #[test]
    fn test_multi_joins_selectors() {
        assert_eq!(multi(&[".a", ".b"]), ".a, .b");
        assert_eq!(multi(&[".a"]), ".a");
    }
}
