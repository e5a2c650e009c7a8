use axum::{
    extract::{Path, State},
    Json,
};

use crate::analytics::buckets::{aggregate_by_experience_bucket, BucketSeries};
use crate::analytics::comparison::{compare_to_collection, ComparisonSeries};
use crate::analytics::locations::{salary_by_state, StateSalary};
use crate::analytics::skills::{count_skill_frequency, SkillFrequency};
use crate::errors::AppError;
use crate::models::job::JobRecord;
use crate::state::AppState;

async fn selected_job(state: &AppState, id: i64) -> Result<(Vec<JobRecord>, JobRecord), AppError> {
    let jobs = state.jobs.read().await.clone();
    let target = jobs
        .iter()
        .find(|j| j.job_id == id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok((jobs, target))
}

/// GET /api/v1/analytics/comparison/:id
pub async fn handle_comparison(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ComparisonSeries>, AppError> {
    let (jobs, target) = selected_job(&state, id).await?;
    Ok(Json(compare_to_collection(&jobs, &target)))
}

/// GET /api/v1/analytics/experience-buckets/:id
pub async fn handle_experience_buckets(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<BucketSeries>, AppError> {
    let (jobs, target) = selected_job(&state, id).await?;
    Ok(Json(aggregate_by_experience_bucket(
        &jobs,
        &target,
        &state.bucket_config,
    )))
}

/// GET /api/v1/analytics/skills/:id
pub async fn handle_skills(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SkillFrequency>, AppError> {
    let (jobs, target) = selected_job(&state, id).await?;
    Ok(Json(count_skill_frequency(&jobs, &target)))
}

/// GET /api/v1/analytics/salary-map
pub async fn handle_salary_map(
    State(state): State<AppState>,
) -> Result<Json<Vec<StateSalary>>, AppError> {
    let jobs = state.jobs.read().await;
    Ok(Json(salary_by_state(&jobs, &state.color_config)))
}
