//! Matcher seam — the single point of contact with the résumé-matching
//! service.
//!
//! The matching service is an opaque collaborator: it receives the uploaded
//! résumé PDF and returns scored job matches. Everything interesting
//! (parsing, skill extraction, scoring) happens on its side.
//!
//! `AppState` holds an `Arc<dyn JobMatcher>`, so backends swap at startup:
//! `RemoteMatcher` in normal operation, `StaticMatcher` offline and in tests.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::dataset;
use crate::errors::AppError;
use crate::models::job::JobRecord;

/// One-shot request budget against the matching service. There are no
/// retries; on any failure the caller falls back to the bundled dataset.
pub const MATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// What a match run produces: the scored jobs plus the skills the service
/// extracted from the résumé.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchOutcome {
    pub matches: Vec<JobRecord>,
    #[serde(default)]
    pub resume_skills: Vec<String>,
}

/// The matcher trait. Implement this to swap backends without touching the
/// upload handler.
#[async_trait]
pub trait JobMatcher: Send + Sync {
    async fn match_resume(&self, file_name: &str, pdf: Bytes) -> Result<MatchOutcome, AppError>;
}

/// Forwards the uploaded résumé to the external matching service over HTTP.
pub struct RemoteMatcher {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteMatcher {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(MATCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }
}

#[async_trait]
impl JobMatcher for RemoteMatcher {
    async fn match_resume(&self, file_name: &str, pdf: Bytes) -> Result<MatchOutcome, AppError> {
        let part = reqwest::multipart::Part::bytes(pdf.to_vec())
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .map_err(|e| AppError::Upstream(format!("could not build upload part: {e}")))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/resume/match", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "match service returned {status}: {body}"
            )));
        }

        response
            .json::<MatchOutcome>()
            .await
            .map_err(|e| AppError::Upstream(format!("unparsable match response: {e}")))
    }
}

/// Serves the bundled dataset instead of calling out. Used when
/// `MATCH_OFFLINE` is set and as the test backend.
pub struct StaticMatcher {
    jobs: Vec<JobRecord>,
}

impl StaticMatcher {
    pub fn bundled() -> Self {
        Self {
            jobs: dataset::fallback_jobs(),
        }
    }

    #[cfg(test)]
    pub fn with_jobs(jobs: Vec<JobRecord>) -> Self {
        Self { jobs }
    }
}

#[async_trait]
impl JobMatcher for StaticMatcher {
    async fn match_resume(&self, _file_name: &str, _pdf: Bytes) -> Result<MatchOutcome, AppError> {
        Ok(MatchOutcome {
            matches: self.jobs.clone(),
            resume_skills: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_matcher_returns_bundled_jobs() {
        let matcher = StaticMatcher::bundled();
        let outcome = matcher
            .match_resume("resume.pdf", Bytes::from_static(b"%PDF-1.4"))
            .await
            .unwrap();
        assert_eq!(outcome.matches, dataset::fallback_jobs());
        assert!(outcome.resume_skills.is_empty());
    }

    #[tokio::test]
    async fn test_static_matcher_is_input_independent() {
        let matcher = StaticMatcher::with_jobs(Vec::new());
        let outcome = matcher
            .match_resume("anything.pdf", Bytes::new())
            .await
            .unwrap();
        assert!(outcome.matches.is_empty());
    }

    #[test]
    fn test_match_outcome_deserializes_service_response() {
        let json = r#"{
            "matches": [{"jobId": 7, "jobTitle": "Data Engineer"}],
            "resumeSkills": ["python", "sql"]
        }"#;
        let outcome: MatchOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.resume_skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_match_outcome_tolerates_missing_skills() {
        let outcome: MatchOutcome = serde_json::from_str(r#"{"matches": []}"#).unwrap();
        assert!(outcome.resume_skills.is_empty());
    }
}
