//! Bubble geometry and the separation rule between bubbles.
//!
//! Every bubble is treated as a circle of the same collision radius. Two
//! bubble centers conflict when they are closer than the minimum distance
//! defined by the active [`SeparationRule`].

use serde::Deserialize;

use crate::geometry::{GeometryError, Point};

/// Rule used to derive the minimum center-to-center distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeparationRule {
    /// `2 × (radius + padding)`.
    ///
    /// Twice the padding of the conventional rule, which leaves a visibly
    /// loose arrangement.
    #[default]
    Doubled,

    /// `radius + radius + padding`: circles are kept `padding` apart.
    SumOfRadii,
}

impl SeparationRule {
    /// Returns the minimum allowed distance between two bubble centers.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bubbles_core::bubble::SeparationRule;
    /// assert_eq!(SeparationRule::Doubled.min_distance(40.0, 20.0), 120.0);
    /// assert_eq!(SeparationRule::SumOfRadii.min_distance(40.0, 20.0), 100.0);
    /// ```
    pub fn min_distance(self, radius: f32, padding: f32) -> f32 {
        match self {
            Self::Doubled => 2.0 * (radius + padding),
            Self::SumOfRadii => radius + radius + padding,
        }
    }
}

/// Size and spacing parameters shared by every bubble of one layout.
///
/// # Examples
///
/// ```
/// # use bubbles_core::{bubble::BubbleGeometry, geometry::Point};
/// let geometry = BubbleGeometry::new(40.0, 20.0);
///
/// assert!(geometry.conflicts(Point::new(0.0, 0.0), Point::new(119.0, 0.0)));
/// assert!(!geometry.conflicts(Point::new(0.0, 0.0), Point::new(120.0, 0.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleGeometry {
    radius: f32,
    padding: f32,
    margin: f32,
    separation: SeparationRule,
}

impl BubbleGeometry {
    /// Creates geometry with no edge margin and the default separation rule
    pub fn new(radius: f32, padding: f32) -> Self {
        Self {
            radius,
            padding,
            margin: 0.0,
            separation: SeparationRule::default(),
        }
    }

    /// Sets the spacing kept between a bubble and the region edges
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_separation(mut self, separation: SeparationRule) -> Self {
        self.separation = separation;
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn separation(&self) -> SeparationRule {
        self.separation
    }

    /// Minimum distance between two bubble centers
    pub fn min_distance(&self) -> f32 {
        self.separation.min_distance(self.radius, self.padding)
    }

    /// Returns `true` if bubbles centered at `a` and `b` are too close.
    ///
    /// Centers exactly [`min_distance`](Self::min_distance) apart do not conflict.
    pub fn conflicts(&self, a: Point, b: Point) -> bool {
        a.distance(b) < self.min_distance()
    }

    /// Checks that radius, padding and margin are usable.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GeometryError::InvalidRadius(self.radius));
        }
        if !(self.padding.is_finite() && self.padding >= 0.0) {
            return Err(GeometryError::InvalidPadding(self.padding));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(GeometryError::InvalidMargin(self.margin));
        }
        Ok(())
    }
}
