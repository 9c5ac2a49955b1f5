use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;
use crate::models::domain::{AssessmentTemplate, FilterCriteria};

/// Request to rank mentors for a startup
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "startup_id", rename = "startupId")]
    pub startup_id: String,
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a single mentor/startup pair
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreMatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "mentor_id", rename = "mentorId")]
    pub mentor_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "startup_id", rename = "startupId")]
    pub startup_id: String,
}

/// Query string for listing mentors
///
/// `expertise` and `industries` are comma-separated lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorQuery {
    #[serde(rename = "minRating", default)]
    pub min_rating: Option<f64>,
    #[serde(rename = "minWeeklyAvailabilityHours", default)]
    pub min_weekly_availability_hours: Option<u32>,
    #[serde(default)]
    pub expertise: Option<String>,
    #[serde(default)]
    pub industries: Option<String>,
}

impl MentorQuery {
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            min_rating: self.min_rating.unwrap_or(0.0),
            min_weekly_availability_hours: self.min_weekly_availability_hours.unwrap_or(0),
            required_expertise: split_list(self.expertise.as_deref()),
            required_industries: split_list(self.industries.as_deref()),
        }
    }
}

fn split_list(value: Option<&str>) -> Vec<String> {
    value
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Request to compute the running score of an assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentScoreRequest {
    pub template: AssessmentTemplate,
    #[serde(default)]
    pub scores: HashMap<String, u32>,
}
