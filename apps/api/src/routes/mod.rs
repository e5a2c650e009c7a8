pub mod health;
pub mod jobs;
pub mod resume;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analytics::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume upload → match → session collection
        .route("/api/v1/resume/match", post(resume::handle_match_resume))
        // Jobs
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        // Chart series
        .route(
            "/api/v1/analytics/comparison/:id",
            get(handlers::handle_comparison),
        )
        .route(
            "/api/v1/analytics/experience-buckets/:id",
            get(handlers::handle_experience_buckets),
        )
        .route("/api/v1/analytics/skills/:id", get(handlers::handle_skills))
        .route(
            "/api/v1/analytics/salary-map",
            get(handlers::handle_salary_map),
        )
        .with_state(state)
}
