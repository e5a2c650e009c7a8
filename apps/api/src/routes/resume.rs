use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::dataset;
use crate::errors::AppError;
use crate::matcher::MatchOutcome;
use crate::models::job::JobRecord;
use crate::state::AppState;

/// Where the returned collection came from. The dashboard shows a banner
/// when it is rendering fallback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchSource {
    Matcher,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub jobs: Vec<JobRecord>,
    pub resume_skills: Vec<String>,
    pub source: MatchSource,
}

/// POST /api/v1/resume/match
///
/// Accepts a multipart upload with a `file` field holding the résumé PDF,
/// forwards it to the matcher, and replaces the session's job collection
/// with the result. Any matcher failure degrades to the bundled dataset so
/// the dashboard always has something to render.
pub async fn handle_match_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
            upload = Some((file_name, data));
        }
    }

    let (file_name, data) = upload
        .ok_or_else(|| AppError::Validation("Missing multipart field 'file'".to_string()))?;

    if !file_name.to_ascii_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation(
            "Only PDF resumes are supported.".to_string(),
        ));
    }

    let (outcome, source) = match state.matcher.match_resume(&file_name, data).await {
        Ok(outcome) => {
            info!(
                "Matcher returned {} jobs for {file_name}",
                outcome.matches.len()
            );
            (outcome, MatchSource::Matcher)
        }
        Err(e) => {
            warn!("Matcher unavailable, serving bundled dataset: {e}");
            (
                MatchOutcome {
                    matches: dataset::fallback_jobs(),
                    resume_skills: Vec::new(),
                },
                MatchSource::Fallback,
            )
        }
    };

    *state.jobs.write().await = outcome.matches.clone();

    Ok(Json(MatchResponse {
        jobs: outcome.matches,
        resume_skills: outcome.resume_skills,
        source,
    }))
}
