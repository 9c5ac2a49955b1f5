// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AssessmentCriterion, AssessmentStage, AssessmentTemplate, FilterCriteria, MatchResult,
    MentorProfile, ScoringWeights, StageStatus, StartupProfile,
};
pub use requests::{AssessmentScoreRequest, FindMatchesRequest, MentorQuery, ScoreMatchRequest};
pub use responses::{AssessmentScoreResponse, ErrorResponse, FindMatchesResponse, HealthResponse, StageScore};
