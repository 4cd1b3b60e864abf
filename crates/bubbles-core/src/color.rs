//! CSS color values for bubble fills and backgrounds.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate.
///
/// Accepts any CSS color string such as `"#ff0000"`, `"rgb(255, 0, 0)"` or
/// `"crimson"`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Parses a CSS color string.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }

    /// Returns the alpha component, between 0.0 (transparent) and 1.0 (opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_hex_colors() {
        assert!(Color::new("crimson").is_ok());
        assert!(Color::new("#ccc").is_ok());
        assert!(Color::new("rgb(10, 20, 30)").is_ok());
    }

    #[test]
    fn test_invalid_color_reports_input() {
        let err = Color::new("not-a-color").unwrap_err();
        assert!(err.contains("not-a-color"), "unexpected message: {err}");
    }

    #[test]
    fn test_alpha() {
        assert_eq!(Color::new("lightblue").unwrap().alpha(), 1.0);
        assert_eq!(Color::default().alpha(), 1.0);
    }
}
