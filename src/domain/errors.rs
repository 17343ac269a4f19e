//! Domain error types
//!
//! This module defines the error hierarchy for the exporter. Every failure that can
//! end a run is one of these variants; none of them expose third-party types.

use std::path::PathBuf;
use thiserror::Error;

/// Main exporter error type
///
/// This is the primary error type used throughout the library. Each variant carries
/// enough context (path, command, captured stderr) to diagnose the failure from the
/// log alone.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// A requested document does not exist or is not a regular file
    #[error("File [{}] doesn't exist", path.display())]
    MissingInputFile { path: PathBuf },

    /// The document is not well-formed XML
    #[error("Invalid format file [{}], must be XML: {reason}", path.display())]
    MalformedDocument { path: PathBuf, reason: String },

    /// A top-level page element has no `name` attribute
    #[error("Page {index} in [{}] has no name attribute", path.display())]
    MissingPageName { path: PathBuf, index: usize },

    /// The renderer ran and exited with a non-zero status
    #[error("Command is failed - [{command}], reason: {stderr}")]
    RenderInvocationFailure {
        command: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// The renderer process could not be started at all
    #[error("Command could not be started - [{command}], reason: {reason}")]
    RendererUnavailable { command: String, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

impl ExporterError {
    /// Short, stable name of the error kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            ExporterError::MissingInputFile { .. } => "missing_input_file",
            ExporterError::MalformedDocument { .. } => "malformed_document",
            ExporterError::MissingPageName { .. } => "missing_page_name",
            ExporterError::RenderInvocationFailure { .. } => "render_invocation_failure",
            ExporterError::RendererUnavailable { .. } => "renderer_unavailable",
            ExporterError::Configuration(_) => "configuration",
            ExporterError::Io(_) => "io",
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for ExporterError {
    fn from(err: std::io::Error) -> Self {
        ExporterError::Io(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ExporterError {
    fn from(err: toml::de::Error) -> Self {
        ExporterError::Configuration(format!("TOML parse error: {err}"))
    }
}
