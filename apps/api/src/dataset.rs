//! Bundled fallback dataset.
//!
//! When the matching service is unreachable (or the API runs offline), the
//! dashboard still needs a job collection to render. This dataset ships
//! inside the binary and is validated by tests, so parsing it cannot fail at
//! runtime in practice; if it ever does, we log and serve an empty
//! collection rather than crash.

use tracing::error;

use crate::models::job::JobRecord;

static FALLBACK_JOBS_JSON: &str = include_str!("../data/fallback_jobs.json");

/// Returns the bundled job collection.
pub fn fallback_jobs() -> Vec<JobRecord> {
    serde_json::from_str(FALLBACK_JOBS_JSON).unwrap_or_else(|e| {
        error!("Bundled fallback dataset failed to parse: {e}");
        Vec::new()
    })
}
