use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

/// GET /api/v1/jobs?skip=0&limit=10
/// Paginated view of the current session's job collection.
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> Json<Vec<JobRecord>> {
    let jobs = state.jobs.read().await;
    Json(
        jobs.iter()
            .skip(page.skip)
            .take(page.limit)
            .cloned()
            .collect(),
    )
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<JobRecord>, AppError> {
    let jobs = state.jobs.read().await;
    jobs.iter()
        .find(|j| j.job_id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
