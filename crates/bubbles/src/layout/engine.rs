//! Rejection-sampling placement engine.

use log::{debug, trace, warn};

use crate::{
    bubble::BubbleGeometry,
    geometry::{Bounds, GeometryError, Point, Region},
    layout::{CandidateSampler, ItemOrder, Layout, LayoutError, RetryPolicy},
};

/// Places bubbles inside a region without overlapping each other or any
/// obstacle.
///
/// Each bubble is placed by drawing candidates from a [`CandidateSampler`]
/// until one keeps the minimum distance to every obstacle and every bubble
/// placed before it. The [`RetryPolicy`] caps the number of draws per bubble.
///
/// # Examples
///
/// ```
/// use bubbles::{
///     bubble::BubbleGeometry,
///     geometry::{Point, Region},
///     layout::{Engine, UniformSampler},
/// };
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let engine = Engine::new(Region::new(300.0, 300.0), BubbleGeometry::new(40.0, 20.0));
/// let mut sampler = UniformSampler::new(StdRng::seed_from_u64(1));
///
/// let layout = engine
///     .generate(2, &[Point::new(0.0, 0.0)], &mut sampler)
///     .expect("two bubbles fit");
/// assert_eq!(layout.len(), 2);
/// assert_eq!(layout.obstacles(), &[Point::new(0.0, 0.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    region: Region,
    geometry: BubbleGeometry,
    retry: RetryPolicy,
    order: ItemOrder,
}

impl Engine {
    /// Create an engine with the default retry policy and item order
    pub fn new(region: Region, geometry: BubbleGeometry) -> Self {
        Self {
            region,
            geometry,
            retry: RetryPolicy::default(),
            order: ItemOrder::default(),
        }
    }

    /// Set the per-bubble retry policy
    pub fn set_retry_policy(&mut self, retry: RetryPolicy) -> &mut Self {
        self.retry = retry;
        self
    }

    /// Set the order of the returned bubbles
    pub fn set_item_order(&mut self, order: ItemOrder) -> &mut Self {
        self.order = order;
        self
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn geometry(&self) -> &BubbleGeometry {
        &self.geometry
    }

    /// Place `item_count` bubbles around the given obstacles.
    ///
    /// The obstacles are copied into the working set and returned untouched
    /// in [`Layout::obstacles`]; they are never part of [`Layout::items`].
    ///
    /// # Errors
    ///
    /// - [`LayoutError::Geometry`] if the geometry or region is invalid, or
    ///   the region cannot hold a single bubble while `item_count > 0`.
    /// - [`LayoutError::Infeasible`] if a bubble could not be placed within
    ///   the retry policy.
    /// - [`LayoutError::SamplerExhausted`] if the sampler ran out of candidates.
    pub fn generate<S>(
        &self,
        item_count: usize,
        obstacles: &[Point],
        sampler: &mut S,
    ) -> Result<Layout, LayoutError>
    where
        S: CandidateSampler + ?Sized,
    {
        self.geometry.validate()?;
        self.region.validate()?;

        if item_count == 0 {
            return Ok(Layout::new(Vec::new(), obstacles.to_vec()));
        }

        let bounds =
            self.region
                .sampling_bounds(&self.geometry)
                .ok_or(GeometryError::RegionTooSmall {
                    width: self.region.width(),
                    height: self.region.height(),
                    radius: self.geometry.radius(),
                    margin: self.geometry.margin(),
                })?;

        debug!(
            item_count,
            obstacle_count = obstacles.len(),
            min_distance = self.geometry.min_distance(),
            bounds:?;
            "Generating bubble layout"
        );

        // Obstacles first, then every accepted bubble in placement order.
        // Grows per placement; `item_count` may be far beyond what fits.
        let mut accepted = obstacles.to_vec();

        for index in 0..item_count {
            let position = self.place_bubble(bounds, &accepted, sampler, index, item_count)?;
            accepted.push(position);
        }

        let mut items = accepted.split_off(obstacles.len());
        if self.order == ItemOrder::Reverse {
            items.reverse();
        }

        Ok(Layout::new(items, accepted))
    }

    fn place_bubble<S>(
        &self,
        bounds: Bounds,
        accepted: &[Point],
        sampler: &mut S,
        index: usize,
        requested: usize,
    ) -> Result<Point, LayoutError>
    where
        S: CandidateSampler + ?Sized,
    {
        let mut attempts = 0usize;

        while self.retry.allows_attempt(attempts) {
            let Some(candidate) = sampler.next_candidate(bounds) else {
                warn!(placed = index, requested; "Candidate sampler exhausted");
                return Err(LayoutError::SamplerExhausted {
                    placed: index,
                    requested,
                });
            };
            attempts = attempts.saturating_add(1);

            match accepted
                .iter()
                .find(|&&other| self.geometry.conflicts(candidate, other))
            {
                Some(other) => {
                    trace!(index, attempts, candidate:?, other:?; "Rejected candidate");
                }
                None => {
                    debug!(index, attempts, position:? = candidate; "Placed bubble");
                    return Ok(candidate);
                }
            }
        }

        warn!(placed = index, requested, attempts; "Bubble layout is infeasible");
        Err(LayoutError::Infeasible {
            placed: index,
            requested,
            attempts,
        })
    }
}
