//! Error adapter for converting BubblesError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Scene errors carry
//! the scene source and a byte span, and are rendered with a labelled source
//! snippet; every other error is rendered with a code and, where one applies,
//! a help message.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use bubbles::{BubblesError, layout::LayoutError};

/// Adapter for a scene parse error.
pub struct SceneDiagnosticAdapter<'a> {
    message: &'a str,
    span: Option<&'a Range<usize>>,
    src: &'a str,
}

impl<'a> SceneDiagnosticAdapter<'a> {
    /// Create a new scene diagnostic adapter.
    pub fn new(message: &'a str, span: Option<&'a Range<usize>>, src: &'a str) -> Self {
        Self { message, span, src }
    }
}

impl fmt::Debug for SceneDiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneDiagnosticAdapter")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for SceneDiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid scene: {}", self.message)
    }
}

impl std::error::Error for SceneDiagnosticAdapter<'_> {}

impl MietteDiagnostic for SceneDiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("bubbles::scene"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "a scene accepts `labels`, `count` and `[[obstacles]]` tables with `x` and `y`",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        let label = LabeledSpan::new_primary_with_span(Some("here".to_string()), span_to_miette(span));
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-scene [`BubblesError`] variants.
pub struct ErrorAdapter<'a>(pub &'a BubblesError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            BubblesError::Io(_) => "bubbles::io",
            BubblesError::Scene { .. } => "bubbles::scene",
            BubblesError::Config(_) => "bubbles::config",
            BubblesError::Layout(_) => "bubbles::layout",
            BubblesError::Export(_) => "bubbles::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            BubblesError::Layout(LayoutError::Infeasible { .. }) => {
                "request fewer bubbles, reduce `radius` or `padding`, or enlarge the placement region"
            }
            BubblesError::Layout(LayoutError::Geometry(_)) => {
                "check the `[layout]` section of the configuration"
            }
            BubblesError::Export(_) => "check the `[style]` section of the configuration",
            _ => return None,
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A scene error with source location information.
    Diagnostic(SceneDiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

fn span_to_miette(span: &Range<usize>) -> SourceSpan {
    SourceSpan::new(span.start.into(), span.len())
}

/// Convert a [`BubblesError`] into a reportable error.
pub fn to_reportable(err: &BubblesError) -> Reportable<'_> {
    match err {
        BubblesError::Scene { message, span, src } => Reportable::Diagnostic(
            SceneDiagnosticAdapter::new(message, span.as_ref(), src),
        ),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
