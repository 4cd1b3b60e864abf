//! Scene description: what to place, and what to place it around.

use serde::Deserialize;

use bubbles_core::geometry::Point;

/// Labels and obstacles for one rendered set of bubbles.
///
/// The number of generated bubbles defaults to the number of labels. Label
/// `i` is attached to the `i`-th generated bubble; bubbles past the end of
/// the label list stay unlabelled.
///
/// # Examples
///
/// ```
/// # use bubbles::{Scene, geometry::Point};
/// let scene = Scene::new(["AZURE", "IO"]).with_obstacles([Point::new(520.0, 30.0)]);
///
/// assert_eq!(scene.bubble_count(), 2);
/// assert_eq!(scene.label(1), Some("IO"));
/// assert_eq!(scene.label(2), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scene {
    labels: Vec<String>,
    count: Option<usize>,
    obstacles: Vec<Point>,
}

impl Scene {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Overrides the number of generated bubbles
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_obstacles(mut self, obstacles: impl IntoIterator<Item = Point>) -> Self {
        self.obstacles = obstacles.into_iter().collect();
        self
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn obstacles(&self) -> &[Point] {
        &self.obstacles
    }

    /// Number of bubbles to generate
    pub fn bubble_count(&self) -> usize {
        self.count.unwrap_or(self.labels.len())
    }

    /// Label of the bubble at `index`, if any
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }
}
