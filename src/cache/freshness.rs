//! File-age computation and the interactive update decision.

use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use crate::error::Result;
use crate::ui::ConfirmPolicy;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// How long ago was this file last modified, in days?
///
/// A missing file is infinitely stale and returns `+inf` rather than an
/// error, so callers can treat "never downloaded" and "too old" uniformly.
/// Any filesystem error other than not-found propagates.
pub fn age_in_days(path: &Path) -> Result<f64> {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(f64::INFINITY),
        Err(e) => return Err(e.into()),
    };

    let modified = metadata.modified()?;
    let elapsed = SystemTime::now()
        .duration_since(modified)
        .unwrap_or_default();

    Ok(elapsed.as_secs_f64() / SECONDS_PER_DAY)
}

/// Decide whether a file is so old it should be updated.
///
/// A missing file always needs updating. A file older than `max_age_days`
/// needs updating only if the policy agrees; the question names the file and
/// its age. A fresh file returns `false` without consulting the policy.
pub fn needs_update(
    path: &Path,
    max_age_days: f64,
    policy: &mut dyn ConfirmPolicy,
) -> Result<bool> {
    let age = age_in_days(path)?;

    if age.is_infinite() {
        tracing::debug!(path = %path.display(), "file missing, update needed");
        return Ok(true);
    }

    if age > max_age_days {
        eprintln!("{} is {:.3} days old.", path.display(), age);
        return policy.confirm("Should it be updated?");
    }

    Ok(false)
}
