//! Error types for Bubbles operations.
//!
//! This module provides the main error type [`BubblesError`] which wraps
//! the error conditions that can occur while reading a scene, laying it out
//! and rendering it.

use std::{io, ops::Range};

use thiserror::Error;

use crate::{export, layout::LayoutError};

/// The main error type for Bubbles operations.
///
/// # Diagnostic Variants
///
/// The `Scene` variant keeps the scene source and the byte span of the
/// offending input, so it can be reported with a source snippet.
#[derive(Debug, Error)]
pub enum BubblesError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid scene: {message}")]
    Scene {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),
}

impl BubblesError {
    /// Create a new `Scene` error with the associated source text.
    pub fn new_scene_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Scene {
            message: message.into(),
            span,
            src: src.into(),
        }
    }
}
