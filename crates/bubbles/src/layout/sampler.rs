//! Candidate position sources for the layout engine.
//!
//! The engine never touches a random number generator directly. It asks a
//! [`CandidateSampler`] for the next candidate center, which keeps layouts
//! reproducible: seed the generator, or replay a fixed script.

use std::vec;

use rand::Rng;

use crate::geometry::{Bounds, Point};

/// A source of candidate bubble centers.
pub trait CandidateSampler {
    /// Returns the next candidate inside `bounds`, or `None` when the source
    /// has run dry.
    fn next_candidate(&mut self, bounds: Bounds) -> Option<Point>;
}

/// Draws candidates uniformly from the sampling bounds.
///
/// Both edges of the bounds are inclusive, so a degenerate axis (zero
/// width or height) always yields its single admissible coordinate.
///
/// # Examples
///
/// ```
/// # use bubbles::geometry::{Bounds, Point};
/// # use bubbles::layout::{CandidateSampler, UniformSampler};
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let bounds = Bounds::new_from_min_max(Point::new(0.0, 5.0), Point::new(10.0, 5.0));
/// let mut sampler = UniformSampler::new(StdRng::seed_from_u64(7));
///
/// let candidate = sampler.next_candidate(bounds).unwrap();
/// assert!(bounds.contains(candidate));
/// assert_eq!(candidate.y(), 5.0);
/// ```
#[derive(Debug)]
pub struct UniformSampler<R> {
    rng: R,
}

impl<R: Rng> UniformSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> CandidateSampler for UniformSampler<R> {
    fn next_candidate(&mut self, bounds: Bounds) -> Option<Point> {
        let x = self.rng.random_range(bounds.min_x()..=bounds.max_x());
        let y = self.rng.random_range(bounds.min_y()..=bounds.max_y());
        Some(Point::new(x, y))
    }
}

/// Replays a fixed sequence of candidates, ignoring the sampling bounds.
///
/// Useful for tests and for reproducing a recorded layout.
#[derive(Debug, Clone)]
pub struct ScriptedSampler {
    candidates: vec::IntoIter<Point>,
}

impl ScriptedSampler {
    pub fn new(candidates: impl IntoIterator<Item = Point>) -> Self {
        Self {
            candidates: candidates.into_iter().collect::<Vec<_>>().into_iter(),
        }
    }

    /// Number of candidates not yet drawn
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }
}

impl CandidateSampler for ScriptedSampler {
    fn next_candidate(&mut self, _bounds: Bounds) -> Option<Point> {
        self.candidates.next()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn bounds() -> Bounds {
        Bounds::new_from_min_max(Point::new(40.0, 40.0), Point::new(260.0, 260.0))
    }

    #[test]
    fn test_uniform_sampler_stays_in_bounds() {
        let mut sampler = UniformSampler::new(StdRng::seed_from_u64(42));

        for _ in 0..1000 {
            let candidate = sampler.next_candidate(bounds()).unwrap();
            assert!(bounds().contains(candidate), "{candidate:?} out of bounds");
        }
    }

    #[test]
    fn test_uniform_sampler_is_deterministic_under_seed() {
        let mut first = UniformSampler::new(StdRng::seed_from_u64(9));
        let mut second = UniformSampler::new(StdRng::seed_from_u64(9));

        for _ in 0..50 {
            assert_eq!(
                first.next_candidate(bounds()),
                second.next_candidate(bounds())
            );
        }
    }

    #[test]
    fn test_uniform_sampler_single_point_bounds() {
        let point = Point::new(12.0, 34.0);
        let bounds = Bounds::new_from_min_max(point, point);
        let mut sampler = UniformSampler::new(StdRng::seed_from_u64(1));

        assert_eq!(sampler.next_candidate(bounds), Some(point));
    }

    #[test]
    fn test_uniform_sampler_borrowed_rng() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut sampler = UniformSampler::new(&mut rng);

        assert!(sampler.next_candidate(bounds()).is_some());
    }

    #[test]
    fn test_scripted_sampler_replays_in_order() {
        let script = [Point::new(1.0, 2.0), Point::new(3.0, 4.0)];
        let mut sampler = ScriptedSampler::new(script);

        assert_eq!(sampler.remaining(), 2);
        assert_eq!(sampler.next_candidate(bounds()), Some(script[0]));
        assert_eq!(sampler.next_candidate(bounds()), Some(script[1]));
        assert_eq!(sampler.next_candidate(bounds()), None);
        assert_eq!(sampler.remaining(), 0);
    }
}
