use std::sync::Arc;

use tokio::sync::RwLock;

use crate::analytics::buckets::BucketConfig;
use crate::analytics::color::ColorScaleConfig;
use crate::matcher::JobMatcher;
use crate::models::job::JobRecord;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable matcher backend. Default: RemoteMatcher. Swap via MATCH_OFFLINE env.
    pub matcher: Arc<dyn JobMatcher>,
    /// Current session's job collection: seeded from the bundled dataset at
    /// startup, replaced by each successful résumé match.
    pub jobs: Arc<RwLock<Vec<JobRecord>>>,
    /// Experience bucket range for the progression chart (1..=6).
    pub bucket_config: BucketConfig,
    /// Salary color scale endpoints for the choropleth map.
    pub color_config: ColorScaleConfig,
}
