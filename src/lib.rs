//! exoatlas - local data utilities for exoplanet population analysis.
//!
//! This crate is the shared bootstrap layer of an exoplanet-population
//! toolkit: it resolves and maintains the local data directory, decides
//! when downloaded catalogs are stale, resolves color strings and builds
//! colormaps for plots, and renders a histogram-based data-quality summary
//! of a tabular population.
//!
//! # Modules
//!
//! - [`cache`] - Download cache and file-freshness checks
//! - [`cli`] - Command-line interface and argument parsing
//! - [`color`] - Color resolution and linear colormaps
//! - [`error`] - Error types and result aliases
//! - [`population`] - The tabular population data model
//! - [`storage`] - Local data-directory bootstrap and reset
//! - [`summary`] - Histogram data-quality summary and plot surfaces
//! - [`text`] - String cleanup helpers
//! - [`ui`] - Confirmation policies, output modes, and spinners
//!
//! # Example
//!
//! ```
//! use exoatlas::color::{linear_colormap, resolve_color};
//!
//! let rgb = resolve_color("#336699").unwrap();
//! assert_eq!(rgb.r, 0x33 as f64 / 255.0);
//!
//! let cmap = linear_colormap("white", "red", 1.0, 1.0, 256).unwrap();
//! assert_eq!(cmap.name(), "white2red");
//! assert_eq!(cmap.len(), 256);
//! ```
//!
//! For directory bootstrap and the CLI, see the integration tests.

pub mod cache;
pub mod cli;
pub mod color;
pub mod error;
pub mod population;
pub mod storage;
pub mod summary;
pub mod text;
pub mod ui;

pub use error::{ExoatlasError, Result};
