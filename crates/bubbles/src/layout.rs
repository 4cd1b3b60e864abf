//! Bubble layout generation.
//!
//! Bubbles are placed by rejection sampling: a candidate center is drawn
//! uniformly from the region, tested against every obstacle and every bubble
//! placed so far, and redrawn until it keeps the minimum distance from all of
//! them.
//!
//! - [`generate_layout`] - One-call placement with default policies
//! - [`Engine`] - Configurable placement (retry policy, item order, margin)
//! - [`CandidateSampler`] - Source of candidate centers; [`UniformSampler`]
//!   wraps a random generator, [`ScriptedSampler`] replays fixed candidates

mod engine;
mod policy;
mod sampler;

pub use engine::Engine;
pub use policy::{DEFAULT_MAX_ATTEMPTS, ItemOrder, RetryPolicy};
pub use sampler::{CandidateSampler, ScriptedSampler, UniformSampler};

use rand::Rng;
use thiserror::Error;

use crate::{
    bubble::BubbleGeometry,
    geometry::{GeometryError, Point, Region},
};

/// Errors produced while generating a layout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("Invalid layout geometry: {0}")]
    Geometry(#[from] GeometryError),

    #[error(
        "Layout infeasible: placed {placed} of {requested} bubbles, the next one did not fit after {attempts} attempts"
    )]
    Infeasible {
        placed: usize,
        requested: usize,
        attempts: usize,
    },

    #[error("Candidate sampler exhausted after placing {placed} of {requested} bubbles")]
    SamplerExhausted { placed: usize, requested: usize },
}

/// Result of a placement run.
///
/// Holds the generated bubble centers and, separately, the obstacles they
/// were placed around.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    items: Vec<Point>,
    obstacles: Vec<Point>,
}

impl Layout {
    pub fn new(items: Vec<Point>, obstacles: Vec<Point>) -> Self {
        Self { items, obstacles }
    }

    /// Generated bubble centers, in the engine's [`ItemOrder`]
    pub fn items(&self) -> &[Point] {
        &self.items
    }

    /// Obstacles the bubbles were placed around
    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    /// Number of generated bubbles
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no bubble was generated
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<Point> {
        self.items
    }

    /// Iterates over generated bubbles followed by obstacles.
    pub fn iter_all(&self) -> impl Iterator<Item = Point> + '_ {
        self.items.iter().chain(&self.obstacles).copied()
    }
}

/// Places `item_count` bubbles of the given radius and padding inside
/// `region`, avoiding `obstacles`.
///
/// Uses the default [`RetryPolicy`], placement order and no edge margin.
/// See [`Engine`] for the configurable form.
///
/// # Errors
///
/// Returns [`LayoutError::Infeasible`] if a bubble cannot be placed within
/// [`DEFAULT_MAX_ATTEMPTS`] draws, or [`LayoutError::Geometry`] for invalid
/// inputs.
///
/// # Examples
///
/// ```
/// use bubbles::{geometry::{Point, Region}, layout::generate_layout};
///
/// let obstacles = [Point::new(100.0, 100.0)];
/// let positions = generate_layout(
///     1,
///     &obstacles,
///     Region::new(300.0, 300.0),
///     40.0,
///     20.0,
///     &mut rand::rng(),
/// )
/// .unwrap();
///
/// assert_eq!(positions.len(), 1);
/// assert!(positions[0].distance(obstacles[0]) >= 120.0);
/// ```
pub fn generate_layout<R>(
    item_count: usize,
    obstacles: &[Point],
    region: Region,
    radius: f32,
    padding: f32,
    rng: &mut R,
) -> Result<Vec<Point>, LayoutError>
where
    R: Rng + ?Sized,
{
    let engine = Engine::new(region, BubbleGeometry::new(radius, padding));
    let mut sampler = UniformSampler::new(rng);

    engine
        .generate(item_count, obstacles, &mut sampler)
        .map(Layout::into_items)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_generate_layout_zero_items() {
        let mut rng = StdRng::seed_from_u64(1);
        let positions =
            generate_layout(0, &[], Region::new(300.0, 300.0), 40.0, 20.0, &mut rng).unwrap();

        assert!(positions.is_empty());
    }

    #[test]
    fn test_generate_layout_two_items() {
        let region = Region::new(300.0, 300.0);
        let mut rng = StdRng::seed_from_u64(8);

        let positions = generate_layout(2, &[], region, 40.0, 20.0, &mut rng).unwrap();

        assert_eq!(positions.len(), 2);
        assert!(positions.iter().all(|position| region.contains(*position)));
        assert!(positions[0].distance(positions[1]) >= 120.0);
    }

    #[test]
    fn test_generate_layout_same_seed_same_output() {
        let region = Region::new(600.0, 400.0).with_x_offset(50.0);
        let obstacles = [Point::new(40.0, 30.0)];

        let first = generate_layout(
            3,
            &obstacles,
            region,
            40.0,
            20.0,
            &mut StdRng::seed_from_u64(77),
        )
        .unwrap();
        let second = generate_layout(
            3,
            &obstacles,
            region,
            40.0,
            20.0,
            &mut StdRng::seed_from_u64(77),
        )
        .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_layout_huge_count_reports_infeasible() {
        let result = generate_layout(
            usize::MAX / 16,
            &[Point::new(0.0, 0.0)],
            Region::new(300.0, 300.0),
            40.0,
            20.0,
            &mut StdRng::seed_from_u64(1),
        );

        assert!(matches!(
            result,
            Err(LayoutError::Infeasible {
                attempts: DEFAULT_MAX_ATTEMPTS,
                ..
            })
        ));
    }

    #[test]
    fn test_layout_error_messages() {
        let err = LayoutError::Infeasible {
            placed: 3,
            requested: 5,
            attempts: 100,
        };
        assert_eq!(
            err.to_string(),
            "Layout infeasible: placed 3 of 5 bubbles, the next one did not fit after 100 attempts"
        );

        let err = LayoutError::from(GeometryError::InvalidRadius(0.0));
        assert!(err.to_string().starts_with("Invalid layout geometry"));
    }
}
