//! Core error types for state parsing and diagram generation
//!
//! This module defines the error types used throughout the pipeline, from
//! reading a Terraform JSON document to emitting Mermaid text.

use std::path::PathBuf;
use thiserror::Error;

/// Core error types for state parsing and diagram generation
#[derive(Error, Debug)]
pub enum DiagramError {
    #[error("State file not found: {}", path.display())]
    StateFileNotFound { path: PathBuf },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("Unexpected document shape at {path}: expected {expected}")]
    Shape { path: String, expected: &'static str },

    #[error("Unknown diagram kind: {kind}")]
    UnknownDiagramKind { kind: String },

    #[error("Unknown output format: {format}")]
    UnknownOutputFormat { format: String },

    #[error("Render error: {message}")]
    Render { message: String },
}

impl DiagramError {
    /// Create a new shape error for the value at `path`
    pub fn shape(path: impl Into<String>, expected: &'static str) -> Self {
        Self::Shape {
            path: path.into(),
            expected,
        }
    }

    /// Create a new render error
    pub fn render_error(message: String) -> Self {
        Self::Render { message }
    }

    /// Create a new state-file-not-found error
    pub fn state_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::StateFileNotFound { path: path.into() }
    }
}

/// Result alias for fallible operations in this crate
pub type Result<T> = std::result::Result<T, DiagramError>;
