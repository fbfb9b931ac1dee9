//! URL-keyed downloads into the local data directory.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::error::{ExoatlasError, Result};
use crate::ui::ConfirmPolicy;

use super::freshness::needs_update;

/// Blocking download cache keyed by URL.
///
/// Each URL maps to a deterministic filename inside the store directory
/// (hash of the URL, keeping the URL's extension so downstream readers can
/// sniff the format).
pub struct DownloadStore {
    dir: PathBuf,
    client: reqwest::blocking::Client,
}

impl DownloadStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// The store's root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The local path a URL downloads to.
    pub fn local_path(&self, url: &str) -> PathBuf {
        let hash = Sha256::digest(url.as_bytes());
        let mut name = hex::encode(&hash[..16]);
        if let Some(ext) = url_extension(url) {
            name.push('.');
            name.push_str(&ext);
        }
        self.dir.join(name)
    }

    /// Download a URL into the store, overwriting any previous copy.
    pub fn fetch(&self, url: &str) -> Result<PathBuf> {
        tracing::info!(url, "downloading");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| ExoatlasError::DownloadFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExoatlasError::DownloadFailed {
                url: url.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| ExoatlasError::DownloadFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        fs::create_dir_all(&self.dir)?;
        let path = self.local_path(url);
        fs::write(&path, &body)?;

        tracing::debug!(url, path = %path.display(), bytes = body.len(), "download complete");
        Ok(path)
    }

    /// Return the cached copy of a URL, re-downloading when it is stale.
    ///
    /// A missing local file is fetched immediately; a file older than
    /// `max_age_days` is re-fetched only if the policy agrees; anything
    /// fresher is returned untouched.
    pub fn fetch_if_stale(
        &self,
        url: &str,
        max_age_days: f64,
        policy: &mut dyn ConfirmPolicy,
    ) -> Result<PathBuf> {
        let path = self.local_path(url);
        if needs_update(&path, max_age_days, policy)? {
            self.fetch(url)
        } else {
            Ok(path)
        }
    }
}

/// Extension of the file a URL points at, if it has one.
fn url_extension(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let name = path.rsplit('/').next()?;
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
