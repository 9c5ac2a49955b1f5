use serde::{Deserialize, Serialize};
use validator::Validate;

/// Mentor profile with expertise, availability and track record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MentorProfile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "expertiseTags", default)]
    pub expertise_tags: Vec<String>,
    #[serde(rename = "industryTags", default)]
    pub industry_tags: Vec<String>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(rename = "weeklyAvailabilityHours", default)]
    pub weekly_availability_hours: u32,
    pub timezone: String,
    #[validate(range(max = 100))]
    #[serde(rename = "successRatePercent", default)]
    pub success_rate_percent: u8,
}

impl MentorProfile {
    /// True if any of the given tags is one of the mentor's expertise tags
    pub fn has_any_expertise(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.expertise_tags.contains(tag))
    }

    /// True if any of the given industries is one of the mentor's industry tags
    pub fn has_any_industry(&self, industries: &[String]) -> bool {
        industries.iter().any(|industry| self.industry_tags.contains(industry))
    }
}

/// Startup profile with the needs it wants a mentor to cover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct StartupProfile {
    #[validate(length(min = 1))]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "declaredNeeds", default)]
    pub declared_needs: Vec<String>,
    pub industry: String,
    pub timezone: String,
}

/// Hard eligibility constraints applied before scoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(rename = "minRating", default)]
    pub min_rating: f64,
    #[serde(rename = "minWeeklyAvailabilityHours", default)]
    pub min_weekly_availability_hours: u32,
    #[serde(rename = "requiredExpertise", default)]
    pub required_expertise: Vec<String>,
    #[serde(rename = "requiredIndustries", default)]
    pub required_industries: Vec<String>,
}

/// Scored compatibility between one mentor and one startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "mentorId")]
    pub mentor_id: String,
    #[serde(rename = "startupId")]
    pub startup_id: String,
    pub score: f64,
    #[serde(rename = "compatibilityReasons")]
    pub compatibility_reasons: Vec<String>,
    #[serde(rename = "challengeAreas")]
    pub challenge_areas: Vec<String>,
}

/// Points awarded per scoring dimension
///
/// The four weights are expected to sum to 100 so that a full match scores 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub expertise: f64,
    pub industry: f64,
    pub timezone: f64,
    pub track_record: f64,
}

impl ScoringWeights {
    pub fn total(&self) -> f64 {
        self.expertise + self.industry + self.timezone + self.track_record
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            expertise: 50.0,
            industry: 25.0,
            timezone: 15.0,
            track_record: 10.0,
        }
    }
}

/// One scored criterion of an assessment stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentCriterion {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub weight: f64,
    #[serde(rename = "maxScore")]
    pub max_score: u32,
}

/// An ordered step of an assessment, e.g. "Initial Screening"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentStage {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub criteria: Vec<AssessmentCriterion>,
}

/// Ordered stages making up a multi-stage assessment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentTemplate {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub stages: Vec<AssessmentStage>,
}

impl AssessmentTemplate {
    /// Iterate every criterion across all stages, in stage order
    pub fn criteria(&self) -> impl Iterator<Item = &AssessmentCriterion> {
        self.stages.iter().flat_map(|stage| stage.criteria.iter())
    }

    pub fn find_criterion(&self, criterion_id: &str) -> Option<&AssessmentCriterion> {
        self.criteria().find(|criterion| criterion.id == criterion_id)
    }
}

/// Where an assessment currently is in its linear stage sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum StageStatus {
    InProgress {
        #[serde(rename = "stageIndex")]
        stage_index: usize,
    },
    AwaitingReview,
}
