use serde::{Deserialize, Serialize};
use crate::models::domain::MatchResult;

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    #[serde(rename = "requestId")]
    pub request_id: uuid::Uuid,
    #[serde(rename = "startupId")]
    pub startup_id: String,
    pub matches: Vec<MatchResult>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "eligibleCandidates")]
    pub eligible_candidates: usize,
    #[serde(rename = "computedAt")]
    pub computed_at: chrono::DateTime<chrono::Utc>,
}

/// Per-stage breakdown of an assessment score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageScore {
    #[serde(rename = "stageId")]
    pub stage_id: String,
    pub score: f64,
    #[serde(rename = "scoredCriteria")]
    pub scored_criteria: usize,
    #[serde(rename = "totalCriteria")]
    pub total_criteria: usize,
}

/// Response for assessment scoring endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentScoreResponse {
    #[serde(rename = "overallScore")]
    pub overall_score: f64,
    #[serde(rename = "stageScores")]
    pub stage_scores: Vec<StageScore>,
    #[serde(rename = "templateWarnings")]
    pub template_warnings: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub mentors: usize,
    pub startups: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
