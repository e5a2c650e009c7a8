use serde::{Deserialize, Serialize};

/// One job posting, as returned by the matching service or loaded from the
/// bundled fallback dataset. Wire names are camelCase to match the dashboard
/// contract. Every descriptive field is optional free text; the analytics
/// layer parses what it needs and degrades missing fields to zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    pub job_id: i64,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    /// Free text, e.g. "1 to 9 Years".
    #[serde(default)]
    pub experience: Option<String>,
    /// Free text, e.g. "$56K-$128K" or "$25/hr".
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub work_type: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Pass-through match metadata from the matching service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_reason: Option<String>,
}
