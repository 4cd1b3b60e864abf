//! CLI logic for the Bubbles renderer.
//!
//! Reads a scene file, lays out its bubbles and writes the animated SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use bubbles::{BubbleBuilder, BubblesError, Scene};

/// Run the Bubbles CLI application
///
/// This function lays out the scene named by `args.input` and writes the
/// resulting SVG to `args.output`. With `args.seed` set, the output is
/// reproducible.
///
/// # Errors
///
/// Returns `BubblesError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Scene parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), BubblesError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing scene"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let scene = parse_scene(&source)?;

    let mut rng = match args.seed {
        Some(seed) => {
            debug!(seed; "Using seeded generator");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let builder = BubbleBuilder::new(app_config);
    let layout = builder.layout(&scene, &mut rng)?;
    let svg = builder.render_svg(&scene, &layout, &mut rng)?;

    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}

/// Parse a TOML scene description.
///
/// # Errors
///
/// Returns [`BubblesError::Scene`] carrying the source and the span of the
/// offending input.
pub fn parse_scene(source: &str) -> Result<Scene, BubblesError> {
    toml::from_str(source)
        .map_err(|err| BubblesError::new_scene_error(err.message(), err.span(), source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scene() {
        let scene = parse_scene(
            r#"
            labels = ["AZURE", "IO"]
            count = 4

            [[obstacles]]
            x = 520.0
            y = 30.0
            "#,
        )
        .unwrap();

        assert_eq!(scene.labels().len(), 2);
        assert_eq!(scene.bubble_count(), 4);
        assert_eq!(scene.obstacles().len(), 1);
    }

    #[test]
    fn test_parse_scene_unknown_field() {
        let source = "labels = [\"a\"]\ncolour = \"red\"\n";
        let err = parse_scene(source).unwrap_err();

        match err {
            BubblesError::Scene { span, src, .. } => {
                assert!(span.is_some());
                assert_eq!(src, source);
            }
            other => panic!("Expected scene error, got {other:?}"),
        }
    }
}
