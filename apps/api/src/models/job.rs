use serde::{Deserialize, Serialize};

/// A job listing as served to the search page. Read-only input to the filter engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Employment type label, e.g. "Full-time" or "Contract".
    #[serde(rename = "type")]
    pub job_type: String,
    /// Free text such as "50K-80K KES/month"; see `search::salary`.
    #[serde(default)]
    pub salary: String,
    #[serde(default, alias = "matchScore")]
    pub match_score: u8,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(
        default,
        alias = "experienceLevel",
        skip_serializing_if = "Option::is_none"
    )]
    pub experience_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
