//! Per-bubble presentation choices.
//!
//! None of these values feed back into placement; they only decide how a
//! placed bubble looks and moves.

use std::ops::RangeInclusive;

use rand::Rng;

use bubbles_core::color::Color;

use crate::config::StyleConfig;

/// Seconds a bubble takes to rise into place.
const APPEAR_SECS: RangeInclusive<f32> = 0.8..=1.5;

/// Seconds of one float cycle (down and back up).
const FLOAT_SECS: RangeInclusive<f32> = 2.0..=4.0;

const LARGE_FONT_SIZE: f32 = 18.0;
const SMALL_FONT_SIZE: f32 = 14.0;

/// How one bubble is drawn and animated
#[derive(Debug, Clone, PartialEq)]
pub struct Decoration {
    pub diameter: f32,
    pub font_size: f32,
    pub color: Color,
    pub appear_secs: f32,
    pub float_secs: f32,
}

/// Chooses decorations from a style and a palette.
#[derive(Debug)]
pub struct Decorator {
    palette: Vec<Color>,
    min_diameter: f32,
    max_diameter: f32,
    dot_diameter: f32,
}

impl Decorator {
    /// `palette` must not be empty.
    pub fn new(style: &StyleConfig, palette: Vec<Color>) -> Self {
        debug_assert!(!palette.is_empty(), "palette must not be empty");
        Self {
            palette,
            min_diameter: style.min_diameter(),
            max_diameter: style.max_diameter(),
            dot_diameter: style.dot_diameter(),
        }
    }

    /// Decorates the bubble drawn at `index`.
    ///
    /// Labelled bubbles pick the large or the small size with equal
    /// probability; unlabelled ones are drawn as dots.
    pub fn decorate<R: Rng + ?Sized>(&self, index: usize, labelled: bool, rng: &mut R) -> Decoration {
        let diameter = match (labelled, rng.random_bool(0.5)) {
            (false, _) => self.dot_diameter,
            (true, true) => self.max_diameter,
            (true, false) => self.min_diameter,
        };
        let font_size = if diameter == self.max_diameter {
            LARGE_FONT_SIZE
        } else {
            SMALL_FONT_SIZE
        };

        Decoration {
            diameter,
            font_size,
            color: self.palette[index % self.palette.len()],
            appear_secs: rng.random_range(APPEAR_SECS),
            float_secs: rng.random_range(FLOAT_SECS),
        }
    }
}
