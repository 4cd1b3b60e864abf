//! Geometric primitives for bubble placement and rendering.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate; used for bubble centers and obstacles
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by minimum and maximum coordinates
//! - [`Region`] - The placement rectangle, offset horizontally from the canvas origin
//!
//! # Coordinate System
//!
//! Bubbles uses the same coordinate system as SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! A [`Region`] with an `x_offset` covers `[x_offset, x_offset + width]`
//! horizontally and `[0, height]` vertically. The band left of the region
//! (and, on a symmetric canvas, right of it) is free space where obstacles
//! usually live.

use serde::Deserialize;
use thiserror::Error;

use crate::bubble::BubbleGeometry;

/// A 2D point in canvas space.
///
/// # Examples
///
/// ```
/// # use bubbles_core::geometry::Point;
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(30.0, 40.0);
///
/// assert_eq!(a.distance(b), 50.0);
/// assert_eq!(b.sub_point(a).hypot(), 50.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }

    /// Returns `true` if both coordinates are finite numbers
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Width and height of an element
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }
}

/// Axis-aligned rectangle with minimum and maximum coordinates.
///
/// Bounds are closed: a point lying exactly on an edge is contained.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from explicit minimum and maximum coordinates
    pub fn new_from_min_max(min: Point, max: Point) -> Self {
        Self {
            min_x: min.x,
            min_y: min.y,
            max_x: max.x,
            max_y: max.y,
        }
    }

    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Returns `true` if the point lies inside or on the edge of the bounds
    pub fn contains(self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bubbles_core::geometry::{Bounds, Point, Size};
    /// let left = Bounds::new_from_center(Point::new(10.0, 10.0), Size::new(20.0, 20.0));
    /// let right = Bounds::new_from_center(Point::new(100.0, 40.0), Size::new(20.0, 20.0));
    ///
    /// let combined = left.merge(&right);
    /// assert_eq!(combined.min_x(), 0.0);
    /// assert_eq!(combined.max_x(), 110.0);
    /// assert_eq!(combined.height(), 50.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Errors raised when geometry inputs cannot describe a valid placement.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("bubble radius must be a positive finite number, got {0}")]
    InvalidRadius(f32),

    #[error("bubble padding must be a non-negative finite number, got {0}")]
    InvalidPadding(f32),

    #[error("bubble margin must be a non-negative finite number, got {0}")]
    InvalidMargin(f32),

    #[error("placement region must have non-negative finite dimensions, got {width}x{height}")]
    InvalidRegion { width: f32, height: f32 },

    #[error(
        "placement region {width}x{height} cannot hold a single bubble of radius {radius} with margin {margin}"
    )]
    RegionTooSmall {
        width: f32,
        height: f32,
        radius: f32,
        margin: f32,
    },
}

/// Rectangular area in which new bubble centers may be drawn.
///
/// The region spans `[x_offset, x_offset + width]` horizontally and
/// `[0, height]` vertically.
///
/// # Examples
///
/// ```
/// # use bubbles_core::{bubble::BubbleGeometry, geometry::Region};
/// let region = Region::new(1300.0, 300.0).with_x_offset(600.0);
/// let geometry = BubbleGeometry::new(50.0, 20.0).with_margin(40.0);
///
/// let bounds = region.sampling_bounds(&geometry).unwrap();
/// assert_eq!(bounds.min_x(), 690.0);
/// assert_eq!(bounds.max_x(), 1810.0);
/// assert_eq!(bounds.min_y(), 90.0);
/// assert_eq!(bounds.max_y(), 210.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Region {
    size: Size,
    x_offset: f32,
}

impl Region {
    /// Creates a region anchored at the canvas origin
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            x_offset: 0.0,
        }
    }

    /// Shifts the region horizontally by `x_offset`
    pub fn with_x_offset(mut self, x_offset: f32) -> Self {
        self.x_offset = x_offset;
        self
    }

    pub fn width(self) -> f32 {
        self.size.width()
    }

    pub fn height(self) -> f32 {
        self.size.height()
    }

    pub fn x_offset(self) -> f32 {
        self.x_offset
    }

    /// Returns the region rectangle in canvas coordinates
    pub fn bounds(self) -> Bounds {
        Bounds::new_from_min_max(
            Point::new(self.x_offset, 0.0),
            Point::new(self.x_offset + self.width(), self.height()),
        )
    }

    /// Returns `true` if the point lies within the region rectangle
    pub fn contains(self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Checks that the region dimensions are usable.
    pub fn validate(self) -> Result<(), GeometryError> {
        let valid = |value: f32| value.is_finite() && value >= 0.0;
        if valid(self.width()) && valid(self.height()) && self.x_offset.is_finite() {
            Ok(())
        } else {
            Err(GeometryError::InvalidRegion {
                width: self.width(),
                height: self.height(),
            })
        }
    }

    /// Returns the rectangle of admissible bubble centers.
    ///
    /// The region is shrunk by `margin + radius` on every side so that a
    /// bubble drawn at any returned center stays `margin` away from the
    /// region edges. Returns `None` when the shrunk rectangle is empty.
    pub fn sampling_bounds(self, geometry: &BubbleGeometry) -> Option<Bounds> {
        let inset = geometry.margin() + geometry.radius();
        let bounds = self.bounds();

        let min = Point::new(bounds.min_x() + inset, bounds.min_y() + inset);
        let max = Point::new(bounds.max_x() - inset, bounds.max_y() - inset);

        (min.x <= max.x && min.y <= max.y).then(|| Bounds::new_from_min_max(min, max))
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(100.0, 100.0);
        let b = Point::new(220.0, 100.0);

        assert_approx_eq!(f32, a.distance(b), 120.0);
        assert_approx_eq!(f32, b.distance(a), 120.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_point_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f32::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f32::INFINITY).is_finite());
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::new_from_min_max(Point::new(0.0, 0.0), Point::new(10.0, 5.0));

        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(10.0, 5.0)));
        assert!(bounds.contains(Point::new(3.0, 4.0)));
        assert!(!bounds.contains(Point::new(10.1, 4.0)));
        assert!(!bounds.contains(Point::new(3.0, -0.1)));
    }

    #[test]
    fn test_bounds_new_from_center() {
        let bounds = Bounds::new_from_center(Point::new(50.0, 50.0), Size::new(100.0, 40.0));

        assert_eq!(bounds.min_x(), 0.0);
        assert_eq!(bounds.min_y(), 30.0);
        assert_eq!(bounds.to_size(), Size::new(100.0, 40.0));
    }

    #[test]
    fn test_region_bounds_with_offset() {
        let region = Region::new(300.0, 200.0).with_x_offset(50.0);
        let bounds = region.bounds();

        assert_eq!(bounds.min_x(), 50.0);
        assert_eq!(bounds.max_x(), 350.0);
        assert_eq!(bounds.max_y(), 200.0);
        assert!(region.contains(Point::new(50.0, 0.0)));
        assert!(!region.contains(Point::new(49.0, 10.0)));
    }

    #[test]
    fn test_sampling_bounds_without_margin() {
        let region = Region::new(300.0, 300.0);
        let geometry = BubbleGeometry::new(40.0, 20.0);

        let bounds = region.sampling_bounds(&geometry).unwrap();
        assert_eq!(bounds.min_x(), 40.0);
        assert_eq!(bounds.max_x(), 260.0);
        assert_eq!(bounds.min_y(), 40.0);
        assert_eq!(bounds.max_y(), 260.0);
    }

    #[test]
    fn test_sampling_bounds_degenerate_axis() {
        // Exactly one bubble diameter tall: every center shares the same y.
        let region = Region::new(300.0, 80.0);
        let geometry = BubbleGeometry::new(40.0, 0.0);

        let bounds = region.sampling_bounds(&geometry).unwrap();
        assert_eq!(bounds.min_y(), 40.0);
        assert_eq!(bounds.max_y(), 40.0);
    }

    #[test]
    fn test_sampling_bounds_too_small() {
        let region = Region::new(300.0, 60.0);
        let geometry = BubbleGeometry::new(40.0, 0.0);

        assert_eq!(region.sampling_bounds(&geometry), None);
    }

    #[test]
    fn test_region_validate() {
        assert!(Region::new(10.0, 10.0).validate().is_ok());
        assert!(Region::new(0.0, 0.0).validate().is_ok());
        assert_eq!(
            Region::new(-1.0, 10.0).validate(),
            Err(GeometryError::InvalidRegion {
                width: -1.0,
                height: 10.0
            })
        );
        assert!(Region::new(10.0, f32::NAN).validate().is_err());
    }

    proptest! {
        #[test]
        fn prop_distance_is_symmetric(
            ax in -1000.0f32..1000.0,
            ay in -1000.0f32..1000.0,
            bx in -1000.0f32..1000.0,
            by in -1000.0f32..1000.0,
        ) {
            let a = Point::new(ax, ay);
            let b = Point::new(bx, by);
            prop_assert_eq!(a.distance(b), b.distance(a));
            prop_assert!(a.distance(b) >= 0.0);
        }

        #[test]
        fn prop_sampling_bounds_inside_region(
            width in 0.0f32..2000.0,
            height in 0.0f32..2000.0,
            offset in 0.0f32..500.0,
            radius in 0.1f32..200.0,
            margin in 0.0f32..100.0,
        ) {
            let region = Region::new(width, height).with_x_offset(offset);
            let geometry = BubbleGeometry::new(radius, 0.0).with_margin(margin);

            if let Some(bounds) = region.sampling_bounds(&geometry) {
                prop_assert!(region.contains(Point::new(bounds.min_x(), bounds.min_y())));
                prop_assert!(region.contains(Point::new(bounds.max_x(), bounds.max_y())));
            }
        }
    }
}
