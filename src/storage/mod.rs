//! Local data-directory management.
//!
//! Every download and derived file the toolkit touches lives under a single
//! base directory, resolved once at startup from the `EXOATLAS_DATA`
//! environment variable (falling back to `./exoatlas-downloads`). The
//! resolved layout is held in a [`DataDirectories`] value passed by
//! reference to whatever needs it; there is no process-global registry.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ui::ConfirmPolicy;

/// Environment variable overriding the base data directory.
pub const DATA_ENV_VAR: &str = "EXOATLAS_DATA";

/// Directory name used when `EXOATLAS_DATA` is unset.
pub const DEFAULT_DIR_NAME: &str = "exoatlas-downloads";

/// Question asked before wiping local data.
const RESET_QUESTION: &str = "Are you sure you want to wipe all local exoplanet-atlas data files?";

/// Resolved layout of the local data directories.
///
/// Construct once (usually via [`DataDirectories::from_env`]), call
/// [`ensure`](Self::ensure), and pass around by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDirectories {
    base: PathBuf,
}

impl DataDirectories {
    /// Resolve the base directory from the environment.
    ///
    /// Uses `EXOATLAS_DATA` when set and non-empty, otherwise
    /// `<cwd>/exoatlas-downloads`.
    pub fn from_env() -> Self {
        match std::env::var(DATA_ENV_VAR) {
            Ok(base) if !base.trim().is_empty() => Self::from_base(PathBuf::from(base)),
            _ => {
                let cwd = std::env::current_dir().unwrap_or_default();
                Self::from_base(cwd.join(DEFAULT_DIR_NAME))
            }
        }
    }

    /// Use an explicit base directory.
    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// The base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// The `data/` subdirectory holding downloaded files.
    pub fn data(&self) -> PathBuf {
        self.base.join("data")
    }

    /// All registered subdirectories, by symbolic name.
    pub fn registry(&self) -> Vec<(&'static str, PathBuf)> {
        vec![("data", self.data())]
    }

    /// Create the base directory and every registered subdirectory.
    ///
    /// Idempotent and deliberately permissive: creation failures are logged
    /// and swallowed so repeated bootstraps never abort a run. Callers that
    /// need the directories will surface the real error at first use.
    pub fn ensure(&self) {
        mkdir_quietly(&self.base);
        for (_, path) in self.registry() {
            mkdir_quietly(&path);
        }
    }

    /// Wipe and recreate the `data/` tree after confirmation.
    ///
    /// Returns the wiped path when the policy answered yes, `None` when it
    /// declined. Not transactional: if removal succeeds and recreation
    /// fails, the directory stays missing until the next [`ensure`](Self::ensure).
    pub fn reset_local_data(&self, policy: &mut dyn ConfirmPolicy) -> Result<Option<PathBuf>> {
        if !policy.confirm(RESET_QUESTION)? {
            tracing::debug!("reset declined");
            return Ok(None);
        }

        let data = self.data();
        if data.exists() {
            fs::remove_dir_all(&data)?;
        }
        fs::create_dir_all(&data)?;
        tracing::info!(path = %data.display(), "removed all local data");

        Ok(Some(data))
    }
}

/// A mkdir that doesn't complain if it fails.
fn mkdir_quietly(path: &Path) {
    if let Err(e) = fs::create_dir_all(path) {
        tracing::warn!(path = %path.display(), error = %e, "could not create directory");
    }
}
