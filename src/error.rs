//! Error types for exoatlas operations.
//!
//! This module defines [`ExoatlasError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ExoatlasError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ExoatlasError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for exoatlas operations.
#[derive(Debug, Error)]
pub enum ExoatlasError {
    /// Color name absent from the named-color table.
    #[error("Unknown color name: {name}")]
    UnknownColor { name: String },

    /// Hex color literal that is not a 6-digit `#rrggbb` value.
    #[error("Invalid hex color literal: {value}")]
    InvalidHexColor { value: String },

    /// Colormap requested with fewer than two samples.
    #[error("Colormap needs at least 2 samples, got {n}")]
    ColormapTooShort { n: usize },

    /// A required column is not present in the population.
    #[error("Population '{population}' is missing required column '{column}'")]
    MissingColumn { population: String, column: String },

    /// A required column has no rows, so it cannot be summarized.
    #[error("Column '{column}' in population '{population}' is empty")]
    EmptyColumn { population: String, column: String },

    /// Columns in one population disagree on row count.
    #[error("Column '{column}' has {found} rows, expected {expected}")]
    RaggedColumn {
        column: String,
        found: usize,
        expected: usize,
    },

    /// Failed to parse a population file.
    #[error("Failed to parse population at {path}: {message}")]
    PopulationParseError { path: PathBuf, message: String },

    /// HTTP download failed.
    #[error("Download of {url} failed: {message}")]
    DownloadFailed { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for exoatlas operations.
pub type Result<T> = std::result::Result<T, ExoatlasError>;
