//! SVG rendering of a bubble layout.
//!
//! Each bubble becomes one `<g>` holding its circle and label. When
//! animation is enabled the group rises into place while fading in, then
//! floats up and down forever.

mod decoration;

use log::{debug, info};
use rand::Rng;
use svg::{
    Document,
    node::element::{Animate, AnimateTransform, Circle, Group, Rectangle, Text},
};

use bubbles_core::{
    color::Color,
    geometry::{Bounds, Point, Region, Size},
};

use crate::{Scene, config::StyleConfig, export, layout::Layout};

use decoration::{Decoration, Decorator};

/// Distance a bubble rises from while appearing.
const RISE_OFFSET: f32 = 300.0;

/// Vertical travel of the float animation.
const FLOAT_AMPLITUDE: f32 = 20.0;

/// CSS `ease-in-out` as an SMIL key spline.
const EASE_IN_OUT: &str = "0.42 0 0.58 1";

/// Renders layouts to SVG documents
#[derive(Debug)]
pub struct Svg {
    decorator: Decorator,
    background: Option<Color>,
    font_family: String,
    animate: bool,
    canvas: Bounds,
}

impl Svg {
    /// Creates a renderer for layouts placed in `region`.
    ///
    /// The canvas spans the region plus a band of `x_offset` on both sides.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Style`] if a configured color or diameter is
    /// invalid.
    pub fn new(style: &StyleConfig, region: Region) -> Result<Self, export::Error> {
        let palette = style.palette().map_err(export::Error::Style)?;
        let background = style.background_color().map_err(export::Error::Style)?;
        style.validate_diameters().map_err(export::Error::Style)?;

        let canvas = Bounds::new_from_min_max(
            Point::default(),
            Point::new(
                2.0 * region.x_offset() + region.width(),
                region.height(),
            ),
        );

        Ok(Self {
            decorator: Decorator::new(style, palette),
            background,
            font_family: style.font_family().to_string(),
            animate: style.animate(),
            canvas,
        })
    }

    /// Renders the layout, attaching scene labels to generated bubbles.
    ///
    /// Bubbles are drawn in [`Layout::iter_all`] order: generated bubbles
    /// first, obstacles last. Obstacles are never labelled.
    pub fn render<R: Rng + ?Sized>(&self, scene: &Scene, layout: &Layout, rng: &mut R) -> Document {
        let mut canvas = self.canvas;
        let mut bubbles = Vec::with_capacity(layout.len() + layout.obstacles().len());

        for (index, center) in layout.iter_all().enumerate() {
            let label = if index < layout.len() {
                scene.label(index)
            } else {
                None
            };
            let decoration = self.decorator.decorate(index, label.is_some(), rng);

            let size = Size::new(decoration.diameter, decoration.diameter);
            canvas = canvas.merge(&Bounds::new_from_center(center, size));

            bubbles.push(self.render_bubble(center, label, &decoration));
        }

        debug!(bubble_count = bubbles.len(), canvas:?; "Bubbles rendered");

        let mut document = Document::new()
            .set(
                "viewBox",
                (canvas.min_x(), canvas.min_y(), canvas.width(), canvas.height()),
            )
            .set("width", canvas.width())
            .set("height", canvas.height());

        if let Some(background) = &self.background {
            document = document.add(
                Rectangle::new()
                    .set("x", canvas.min_x())
                    .set("y", canvas.min_y())
                    .set("width", canvas.width())
                    .set("height", canvas.height())
                    .set("fill", background)
                    .set("fill-opacity", background.alpha()),
            );
        }

        let document = bubbles
            .into_iter()
            .fold(document, |document, bubble| document.add(bubble));

        info!(width = canvas.width(), height = canvas.height(); "SVG document created");
        document
    }

    fn render_bubble(&self, center: Point, label: Option<&str>, decoration: &Decoration) -> Group {
        let circle = Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", decoration.diameter / 2.0)
            .set("fill", &decoration.color)
            .set("fill-opacity", decoration.color.alpha());

        let mut group = Group::new()
            .set("class", if label.is_some() { "bubble" } else { "dot" })
            .add(circle);

        if let Some(label) = label {
            group = group.add(
                Text::new(label.to_uppercase())
                    .set("x", center.x())
                    .set("y", center.y())
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("font-family", self.font_family.as_str())
                    .set("font-size", decoration.font_size),
            );
        }

        if self.animate {
            group = add_animations(group, decoration);
        }

        group
    }
}

/// Appends the appear and float animations to a bubble group.
fn add_animations(group: Group, decoration: &Decoration) -> Group {
    let appear = format!("{:.2}s", decoration.appear_secs);

    let fade_in = Animate::new()
        .set("attributeName", "opacity")
        .set("from", 0)
        .set("to", 1)
        .set("dur", appear.as_str())
        .set("fill", "freeze");

    let rise = AnimateTransform::new()
        .set("attributeName", "transform")
        .set("type", "translate")
        .set("from", format!("0 {RISE_OFFSET}"))
        .set("to", "0 0")
        .set("dur", appear.as_str())
        .set("calcMode", "spline")
        .set("keyTimes", "0;1")
        .set("keySplines", EASE_IN_OUT)
        .set("fill", "freeze");

    let float = AnimateTransform::new()
        .set("attributeName", "transform")
        .set("type", "translate")
        .set("values", format!("0 0;0 {FLOAT_AMPLITUDE};0 0"))
        .set("begin", appear.as_str())
        .set("dur", format!("{:.2}s", decoration.float_secs))
        .set("calcMode", "spline")
        .set("keyTimes", "0;0.5;1")
        .set("keySplines", format!("{EASE_IN_OUT};{EASE_IN_OUT}"))
        .set("repeatCount", "indefinite");

    group.add(fade_in).add(rise).add(float)
}
