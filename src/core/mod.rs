// Core algorithm exports
pub mod assessment;
pub mod filters;
pub mod matcher;
pub mod scoring;

pub use assessment::{
    check_recorded_scores, compute_overall_score, compute_stage_score, template_issues,
    validate_template, AssessmentError, AssessmentSession,
};
pub use filters::{filter_mentors, matches_criteria};
pub use matcher::{rank_matches, MatchOutcome, Matcher};
pub use scoring::{calculate_match_score, score_match, TRACK_RECORD_THRESHOLD_PERCENT};
