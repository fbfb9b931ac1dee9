//! Download cache and file-freshness checks.
//!
//! Downloaded catalogs live under the bootstrap `data/` directory and are
//! refreshed based on file modification time: a file older than the caller's
//! maximum age is re-fetched only after the confirmation policy agrees.
//!
//! - [`freshness`] - mtime-based age computation and the update decision
//! - [`download`] - URL-keyed blocking downloads into the data directory

pub mod download;
pub mod freshness;

pub use download::DownloadStore;
pub use freshness::{age_in_days, needs_update};
