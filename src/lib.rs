//! Incubator Match - mentor matching and assessment scoring for the incubator portal
//!
//! This library ranks mentors for a startup by a weighted compatibility score
//! and aggregates multi-stage assessment scores. The core is pure and
//! synchronous; the HTTP layer in [`routes`] only wires it to a profile directory.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    compute_overall_score, filter_mentors, rank_matches, score_match, AssessmentError,
    AssessmentSession, Matcher,
};
pub use models::{
    AssessmentTemplate, FilterCriteria, MatchResult, MentorProfile, ScoringWeights, StartupProfile,
};
