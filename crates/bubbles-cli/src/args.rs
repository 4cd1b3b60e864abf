//! Command-line argument definitions for the Bubbles CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the random seed, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Bubbles renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input scene file (TOML)
    #[arg(help = "Path to the input scene file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Seed for reproducible layouts
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
