//! Configuration types for bubble layout and rendering.
//!
//! All types implement [`serde::Deserialize`], and every field falls back to
//! its default when missing, so an empty document is a valid configuration.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout and style settings.
//! - [`LayoutConfig`] - Placement region, bubble geometry and engine policies.
//! - [`StyleConfig`] - Colors, bubble sizes and animation toggle for SVG output.
//!
//! # Example
//!
//! ```
//! # use bubbles::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().region().width(), 1300.0);
//! assert!(config.style().palette().is_ok());
//! ```

use serde::Deserialize;

use bubbles_core::{
    bubble::{BubbleGeometry, SeparationRule},
    color::Color,
    geometry::Region,
};

use crate::layout::{Engine, ItemOrder, RetryPolicy};

/// Top-level configuration combining layout and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified layout and style configurations.
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Placement region, bubble geometry and engine policies.
///
/// Defaults describe a 1300×300 band offset 600 from the left edge of a
/// 2500 wide canvas, holding bubbles of radius 50 with 20 padding and 40
/// margin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    width: f32,
    height: f32,
    x_offset: f32,
    radius: f32,
    padding: f32,
    margin: f32,
    separation: SeparationRule,
    retry: RetryPolicy,
    order: ItemOrder,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 1300.0,
            height: 300.0,
            x_offset: 600.0,
            radius: 50.0,
            padding: 20.0,
            margin: 40.0,
            separation: SeparationRule::default(),
            retry: RetryPolicy::default(),
            order: ItemOrder::default(),
        }
    }
}

impl LayoutConfig {
    /// Replaces the placement region
    pub fn with_region(mut self, region: Region) -> Self {
        self.width = region.width();
        self.height = region.height();
        self.x_offset = region.x_offset();
        self
    }

    /// Replaces radius, padding, margin and separation rule
    pub fn with_geometry(mut self, geometry: BubbleGeometry) -> Self {
        self.radius = geometry.radius();
        self.padding = geometry.padding();
        self.margin = geometry.margin();
        self.separation = geometry.separation();
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_order(mut self, order: ItemOrder) -> Self {
        self.order = order;
        self
    }

    /// Returns the placement region.
    pub fn region(&self) -> Region {
        Region::new(self.width, self.height).with_x_offset(self.x_offset)
    }

    /// Returns the bubble geometry.
    pub fn geometry(&self) -> BubbleGeometry {
        BubbleGeometry::new(self.radius, self.padding)
            .with_margin(self.margin)
            .with_separation(self.separation)
    }

    pub fn retry(&self) -> RetryPolicy {
        self.retry
    }

    pub fn order(&self) -> ItemOrder {
        self.order
    }

    /// Builds a layout [`Engine`] configured from this section.
    pub fn engine(&self) -> Engine {
        let mut engine = Engine::new(self.region(), self.geometry());
        engine.set_retry_policy(self.retry).set_item_order(self.order);
        engine
    }
}

/// Visual styling for rendered bubbles.
///
/// Colors are kept as CSS strings and parsed on access.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Canvas background, as a color string.
    background_color: Option<String>,

    /// Fill colors, cycled by bubble index.
    palette: Vec<String>,

    /// Diameter of a small labelled bubble.
    min_diameter: f32,

    /// Diameter of a large labelled bubble.
    max_diameter: f32,

    /// Diameter of unlabelled bubbles and obstacles.
    dot_diameter: f32,

    font_family: String,

    /// Emit appear and float animations.
    animate: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: Some("#ccc".to_string()),
            palette: [
                "crimson",
                "lightblue",
                "green",
                "lightyellow",
                "purple",
                "orange",
                "pink",
            ]
            .map(String::from)
            .to_vec(),
            min_diameter: 80.0,
            max_diameter: 100.0,
            dot_diameter: 30.0,
            font_family: "sans-serif".to_string(),
            animate: true,
        }
    }
}

impl StyleConfig {
    /// Disables or enables animation output
    pub fn with_animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Replaces the fill palette
    pub fn with_palette<S: Into<String>>(mut self, palette: impl IntoIterator<Item = S>) -> Self {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the small, large and dot diameters
    pub fn with_diameters(mut self, min: f32, max: f32, dot: f32) -> Self {
        self.min_diameter = min;
        self.max_diameter = max;
        self.dot_diameter = dot;
        self
    }

    pub fn with_background_color(mut self, color: Option<String>) -> Self {
        self.background_color = color;
        self
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the parsed fill palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette is empty or contains an invalid color.
    pub fn palette(&self) -> Result<Vec<Color>, String> {
        if self.palette.is_empty() {
            return Err("Palette must contain at least one color".to_string());
        }

        self.palette
            .iter()
            .map(|color| Color::new(color))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("Invalid palette color in config: {err}"))
    }

    /// Checks that every bubble diameter is a positive finite number.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid diameter.
    pub fn validate_diameters(&self) -> Result<(), String> {
        [
            ("min_diameter", self.min_diameter),
            ("max_diameter", self.max_diameter),
            ("dot_diameter", self.dot_diameter),
        ]
        .into_iter()
        .find(|(_, diameter)| !(diameter.is_finite() && *diameter > 0.0))
        .map_or(Ok(()), |(name, diameter)| {
            Err(format!(
                "{name} must be a positive finite number, got {diameter}"
            ))
        })
    }

    pub fn min_diameter(&self) -> f32 {
        self.min_diameter
    }

    pub fn max_diameter(&self) -> f32 {
        self.max_diameter
    }

    pub fn dot_diameter(&self) -> f32 {
        self.dot_diameter
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn animate(&self) -> bool {
        self.animate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_engine() {
        let config = LayoutConfig::default();
        let engine = config.engine();

        assert_eq!(engine.region(), Region::new(1300.0, 300.0).with_x_offset(600.0));
        assert_eq!(engine.geometry().min_distance(), 140.0);
        assert_eq!(engine.geometry().margin(), 40.0);
    }

    #[test]
    fn test_with_region_and_geometry() {
        let config = LayoutConfig::default()
            .with_region(Region::new(300.0, 300.0))
            .with_geometry(BubbleGeometry::new(40.0, 20.0).with_separation(SeparationRule::SumOfRadii))
            .with_retry(RetryPolicy::Unbounded)
            .with_order(ItemOrder::Reverse);

        assert_eq!(config.region().x_offset(), 0.0);
        assert_eq!(config.geometry().min_distance(), 100.0);
        assert_eq!(config.geometry().margin(), 0.0);
        assert_eq!(config.retry(), RetryPolicy::Unbounded);
        assert_eq!(config.order(), ItemOrder::Reverse);
    }

    #[test]
    fn test_default_style() {
        let style = StyleConfig::default();

        assert_eq!(style.palette().unwrap().len(), 7);
        assert!(style.background_color().unwrap().is_some());
        assert!(style.animate());
    }

    #[test]
    fn test_invalid_palette() {
        let style = StyleConfig::default().with_palette(["crimson", "nope"]);
        let err = style.palette().unwrap_err();
        assert!(err.contains("nope"), "unexpected message: {err}");

        let empty = StyleConfig::default().with_palette(Vec::<String>::new());
        assert!(empty.palette().is_err());
    }

    #[test]
    fn test_background_color_can_be_disabled() {
        let style = StyleConfig::default().with_background_color(None);
        assert_eq!(style.background_color(), Ok(None));
    }

    #[test]
    fn test_invalid_diameters() {
        assert!(StyleConfig::default().validate_diameters().is_ok());

        let negative = StyleConfig::default().with_diameters(80.0, -100.0, 30.0);
        let err = negative.validate_diameters().unwrap_err();
        assert!(err.contains("max_diameter"), "unexpected message: {err}");

        let nan = StyleConfig::default().with_diameters(80.0, 100.0, f32::NAN);
        let err = nan.validate_diameters().unwrap_err();
        assert!(err.contains("dot_diameter"), "unexpected message: {err}");

        let zero = StyleConfig::default().with_diameters(0.0, 100.0, 30.0);
        assert!(zero.validate_diameters().is_err());
    }
}
