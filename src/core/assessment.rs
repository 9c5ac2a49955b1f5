use std::collections::{HashMap, HashSet};
use thiserror::Error;
use crate::models::{AssessmentCriterion, AssessmentStage, AssessmentTemplate, StageScore, StageStatus};

/// Allowed drift when checking that stage weights sum to 1.0
const WEIGHT_SUM_TOLERANCE: f64 = 1e-3;

/// Errors raised while authoring or filling in an assessment
#[derive(Debug, Error, PartialEq)]
pub enum AssessmentError {
    #[error("Invalid assessment template: {0}")]
    InvalidTemplate(String),

    #[error("Unknown criterion: {0}")]
    UnknownCriterion(String),

    #[error("Criterion {criterion_id} does not belong to the current stage {stage_id}")]
    CriterionNotInStage { criterion_id: String, stage_id: String },

    #[error("Score {score} for {criterion_id} is outside 1..={max_score}")]
    ScoreOutOfRange { criterion_id: String, score: u32, max_score: u32 },

    #[error("Assessment is already awaiting review")]
    AwaitingReview,
}

/// Weight-normalized mean over the scored criteria, rounded to one decimal
///
/// Criteria without a recorded score are left out of both sums, so the result
/// is a running score that only reflects what has been entered so far.
pub fn compute_overall_score(template: &AssessmentTemplate, recorded: &HashMap<String, u32>) -> f64 {
    let (weighted, weights) = weighted_sums(template.criteria(), recorded);
    normalize(weighted, weights)
}

/// Same normalization as [`compute_overall_score`], restricted to one stage
pub fn compute_stage_score(stage: &AssessmentStage, recorded: &HashMap<String, u32>) -> StageScore {
    let (weighted, weights) = weighted_sums(stage.criteria.iter(), recorded);
    let scored_criteria = stage
        .criteria
        .iter()
        .filter(|criterion| recorded.contains_key(&criterion.id))
        .count();

    StageScore {
        stage_id: stage.id.clone(),
        score: normalize(weighted, weights),
        scored_criteria,
        total_criteria: stage.criteria.len(),
    }
}

/// Only the first occurrence of a criterion id is counted
fn weighted_sums<'a>(
    criteria: impl Iterator<Item = &'a AssessmentCriterion>,
    recorded: &HashMap<String, u32>,
) -> (f64, f64) {
    let mut seen = HashSet::new();
    criteria
        .filter(|&criterion| seen.insert(criterion.id.as_str()))
        .filter_map(|criterion| {
            recorded
                .get(&criterion.id)
                .map(|&score| (score as f64 * criterion.weight, criterion.weight))
        })
        .fold((0.0, 0.0), |(sum, weights), (weighted, weight)| {
            (sum + weighted, weights + weight)
        })
}

#[inline]
fn normalize(weighted: f64, weights: f64) -> f64 {
    if weights <= 0.0 {
        return 0.0;
    }
    (weighted / weights * 10.0).round() / 10.0
}

/// Collect every authoring problem in a template
///
/// An empty list means the template is well formed.
pub fn template_issues(template: &AssessmentTemplate) -> Vec<String> {
    let mut issues = Vec::new();

    if template.stages.is_empty() {
        issues.push("template has no stages".to_string());
    }

    let mut seen = HashSet::new();
    for stage in &template.stages {
        if stage.criteria.is_empty() {
            issues.push(format!("stage {} has no criteria", stage.id));
            continue;
        }

        for criterion in &stage.criteria {
            if !seen.insert(criterion.id.as_str()) {
                issues.push(format!("criterion {} is defined more than once", criterion.id));
            }
            if criterion.weight < 0.0 {
                issues.push(format!("criterion {} has a negative weight", criterion.id));
            }
            if criterion.max_score == 0 {
                issues.push(format!("criterion {} has a max score of 0", criterion.id));
            }
        }

        let weight_sum: f64 = stage.criteria.iter().map(|c| c.weight).sum();
        if (weight_sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            issues.push(format!(
                "weights in stage {} sum to {:.3}, expected 1.0",
                stage.id, weight_sum
            ));
        }
    }

    issues
}

/// Reject templates with authoring problems
pub fn validate_template(template: &AssessmentTemplate) -> Result<(), AssessmentError> {
    let issues = template_issues(template);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(AssessmentError::InvalidTemplate(issues.join("; ")))
    }
}

/// Check that every recorded score for a known criterion lies in `1..=max_score`
///
/// Ids that do not name a criterion are skipped, matching how scoring ignores them.
pub fn check_recorded_scores(
    template: &AssessmentTemplate,
    recorded: &HashMap<String, u32>,
) -> Result<(), AssessmentError> {
    for criterion in template.criteria() {
        if let Some(&score) = recorded.get(&criterion.id) {
            if score < 1 || score > criterion.max_score {
                return Err(AssessmentError::ScoreOutOfRange {
                    criterion_id: criterion.id.clone(),
                    score,
                    max_score: criterion.max_score,
                });
            }
        }
    }
    Ok(())
}

/// Stage-by-stage data entry for one assessment
///
/// Stages are walked in order. Completing the last stage moves the
/// assessment to `AwaitingReview`, after which it no longer accepts changes.
/// Going back a stage keeps every recorded score.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    template: AssessmentTemplate,
    scores: HashMap<String, u32>,
    status: StageStatus,
}

impl AssessmentSession {
    pub fn new(template: AssessmentTemplate) -> Result<Self, AssessmentError> {
        validate_template(&template)?;

        Ok(Self {
            template,
            scores: HashMap::new(),
            status: StageStatus::InProgress { stage_index: 0 },
        })
    }

    pub fn status(&self) -> StageStatus {
        self.status
    }

    pub fn scores(&self) -> &HashMap<String, u32> {
        &self.scores
    }

    pub fn current_stage(&self) -> Option<&AssessmentStage> {
        match self.status {
            StageStatus::InProgress { stage_index } => self.template.stages.get(stage_index),
            StageStatus::AwaitingReview => None,
        }
    }

    /// Record a score for a criterion of the current stage
    ///
    /// Re-recording a criterion overwrites the previous score.
    pub fn record_score(&mut self, criterion_id: &str, score: u32) -> Result<(), AssessmentError> {
        let stage = self.current_stage().ok_or(AssessmentError::AwaitingReview)?;

        let criterion = match stage.criteria.iter().find(|c| c.id == criterion_id) {
            Some(criterion) => criterion,
            None if self.template.find_criterion(criterion_id).is_some() => {
                return Err(AssessmentError::CriterionNotInStage {
                    criterion_id: criterion_id.to_string(),
                    stage_id: stage.id.clone(),
                });
            }
            None => return Err(AssessmentError::UnknownCriterion(criterion_id.to_string())),
        };

        if score < 1 || score > criterion.max_score {
            return Err(AssessmentError::ScoreOutOfRange {
                criterion_id: criterion_id.to_string(),
                score,
                max_score: criterion.max_score,
            });
        }

        self.scores.insert(criterion_id.to_string(), score);
        Ok(())
    }

    /// Finish the current stage and move to the next one
    pub fn complete_stage(&mut self) -> Result<StageStatus, AssessmentError> {
        let StageStatus::InProgress { stage_index } = self.status else {
            return Err(AssessmentError::AwaitingReview);
        };

        self.status = if stage_index + 1 < self.template.stages.len() {
            StageStatus::InProgress { stage_index: stage_index + 1 }
        } else {
            StageStatus::AwaitingReview
        };

        tracing::debug!("Assessment {} moved to {:?}", self.template.id, self.status);
        Ok(self.status)
    }

    /// Navigate back one stage; a no-op on the first stage
    pub fn previous_stage(&mut self) -> Result<StageStatus, AssessmentError> {
        let StageStatus::InProgress { stage_index } = self.status else {
            return Err(AssessmentError::AwaitingReview);
        };

        self.status = StageStatus::InProgress {
            stage_index: stage_index.saturating_sub(1),
        };
        Ok(self.status)
    }

    pub fn overall_score(&self) -> f64 {
        compute_overall_score(&self.template, &self.scores)
    }

    pub fn stage_scores(&self) -> Vec<StageScore> {
        self.template
            .stages
            .iter()
            .map(|stage| compute_stage_score(stage, &self.scores))
            .collect()
    }
}
