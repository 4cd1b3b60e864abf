//! Bubbles - collision-free placement of floating text bubbles.
//!
//! Bubbles scatters a set of circles over a rectangular region so that no two
//! of them, and none of them and a fixed obstacle, come closer than a minimum
//! distance. The resulting layout can be rendered to an animated SVG.
//!
//! The [`layout`] module holds the placement engine and can be used on its
//! own; [`BubbleBuilder`] ties placement and rendering together.

pub mod config;
pub mod export;
pub mod layout;

mod error;
mod scene;

pub use bubbles_core::{bubble, color, geometry};

pub use error::BubblesError;
pub use scene::Scene;

use log::{debug, info, trace};
use rand::Rng;

use config::AppConfig;
use layout::{Layout, UniformSampler};

/// Builder for laying out and rendering bubble scenes.
///
/// # Examples
///
/// ```rust
/// use bubbles::{BubbleBuilder, Scene, config::AppConfig};
///
/// let scene = Scene::new([".NET CORE", "AZURE", "IO"]);
/// let builder = BubbleBuilder::new(AppConfig::default());
/// let mut rng = rand::rng();
///
/// let layout = builder.layout(&scene, &mut rng).expect("Failed to lay out");
/// let svg = builder
///     .render_svg(&scene, &layout, &mut rng)
///     .expect("Failed to render");
///
/// assert_eq!(layout.len(), 3);
/// assert!(svg.contains("AZURE"));
/// ```
#[derive(Debug, Default)]
pub struct BubbleBuilder {
    config: AppConfig,
}

impl BubbleBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Place the scene's bubbles around its obstacles.
    ///
    /// # Errors
    ///
    /// Returns [`BubblesError::Layout`] if the geometry is invalid or the
    /// bubbles do not fit within the configured retry policy.
    pub fn layout<R>(&self, scene: &Scene, rng: &mut R) -> Result<Layout, BubblesError>
    where
        R: Rng + ?Sized,
    {
        info!(
            bubble_count = scene.bubble_count(),
            obstacle_count = scene.obstacles().len();
            "Laying out bubbles"
        );

        let engine = self.config.layout().engine();
        let mut sampler = UniformSampler::new(rng);
        let layout = engine.generate(scene.bubble_count(), scene.obstacles(), &mut sampler)?;

        debug!(placed = layout.len(); "Layout generated successfully");
        trace!(layout:?; "Generated layout");

        Ok(layout)
    }

    /// Render a layout of `scene` to an SVG string.
    ///
    /// The generator is only used for decoration (sizes and animation
    /// timing); it never moves a bubble.
    ///
    /// # Errors
    ///
    /// Returns [`BubblesError::Export`] if the style configuration is invalid.
    pub fn render_svg<R>(
        &self,
        scene: &Scene,
        layout: &Layout,
        rng: &mut R,
    ) -> Result<String, BubblesError>
    where
        R: Rng + ?Sized,
    {
        let svg = export::svg::Svg::new(self.config.style(), self.config.layout().region())?;
        let document = svg.render(scene, layout, rng);

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }
}
