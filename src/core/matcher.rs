use std::cmp::Ordering;
use crate::models::{FilterCriteria, MatchResult, MentorProfile, ScoringWeights, StartupProfile};
use crate::core::{filters::filter_mentors, scoring::calculate_match_score};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchOutcome {
    pub matches: Vec<MatchResult>,
    pub total_candidates: usize,
    pub eligible_candidates: usize,
}

/// Rank mentors for a startup using the default weights
pub fn rank_matches(mentors: &[MentorProfile], startup: &StartupProfile) -> Vec<MatchResult> {
    Matcher::with_default_weights().rank(mentors, startup)
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Eligibility filtering (rating, availability, expertise, industry)
/// 2. Scoring every eligible mentor against the startup
/// 3. Ranking by score, ties keeping roster order
/// 4. Truncating to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score every mentor against the startup and sort by score descending
    ///
    /// The sort is stable, so mentors with equal scores keep their input order.
    pub fn rank(&self, mentors: &[MentorProfile], startup: &StartupProfile) -> Vec<MatchResult> {
        let mut scored: Vec<MatchResult> = mentors
            .iter()
            .map(|mentor| calculate_match_score(mentor, startup, &self.weights))
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        scored
    }

    /// Find the best mentors for a startup
    ///
    /// # Arguments
    /// * `startup` - The startup looking for mentorship
    /// * `mentors` - The full mentor roster
    /// * `criteria` - Hard eligibility constraints
    /// * `limit` - Maximum number of matches to return
    pub fn find_matches(
        &self,
        startup: &StartupProfile,
        mentors: &[MentorProfile],
        criteria: &FilterCriteria,
        limit: usize,
    ) -> MatchOutcome {
        let total_candidates = mentors.len();

        let eligible = filter_mentors(mentors, criteria);
        let eligible_candidates = eligible.len();

        tracing::debug!(
            "{} of {} mentors eligible for startup {}",
            eligible_candidates,
            total_candidates,
            startup.id
        );

        let mut matches = self.rank(&eligible, startup);
        matches.truncate(limit);

        MatchOutcome {
            matches,
            total_candidates,
            eligible_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_mentor(id: &str, expertise: &[&str], industry: &str, timezone: &str, success_rate: u8) -> MentorProfile {
        MentorProfile {
            id: id.to_string(),
            name: format!("Mentor {}", id),
            expertise_tags: expertise.iter().map(|s| s.to_string()).collect(),
            industry_tags: vec![industry.to_string()],
            rating: 4.5,
            weekly_availability_hours: 4,
            timezone: timezone.to_string(),
            success_rate_percent: success_rate,
        }
    }

    fn create_startup() -> StartupProfile {
        StartupProfile {
            id: "s1".to_string(),
            name: "PayFlow".to_string(),
            declared_needs: vec!["Fundraising Strategy".to_string(), "Product Strategy".to_string()],
            industry: "FinTech".to_string(),
            timezone: "UTC+0".to_string(),
        }
    }

    #[test]
    fn test_rank_sorted_by_score() {
        let mentors = vec![
            create_mentor("1", &["Sales"], "EdTech", "UTC+9", 50),                       // 0
            create_mentor("2", &["Fundraising Strategy"], "FinTech", "UTC+0", 90),       // 25 + 25 + 15 + 10
            create_mentor("3", &["Fundraising Strategy", "Product Strategy"], "SaaS", "UTC+0", 60), // 50 + 15
        ];

        let ranked = rank_matches(&mentors, &create_startup());

        let ids: Vec<_> = ranked.iter().map(|m| m.mentor_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "1"]);
        assert_eq!(ranked[0].score, 75.0);
        assert_eq!(ranked[1].score, 65.0);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mentors = vec![
            create_mentor("a", &["Sales"], "FinTech", "UTC+0", 50),
            create_mentor("b", &["Marketing"], "FinTech", "UTC+0", 50),
            create_mentor("c", &["Legal"], "FinTech", "UTC+0", 50),
        ];

        let ranked = rank_matches(&mentors, &create_startup());

        let ids: Vec<_> = ranked.iter().map(|m| m.mentor_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_roster_yields_no_matches() {
        assert!(rank_matches(&[], &create_startup()).is_empty());

        let outcome = Matcher::default().find_matches(&create_startup(), &[], &FilterCriteria::default(), 10);
        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.total_candidates, 0);
    }

    #[test]
    fn test_find_matches_filters_then_limits() {
        let mut low_rated = create_mentor("low", &["Fundraising Strategy"], "FinTech", "UTC+0", 95);
        low_rated.rating = 3.0;

        let mentors = vec![
            low_rated,
            create_mentor("1", &["Fundraising Strategy"], "FinTech", "UTC+0", 90),
            create_mentor("2", &["Product Strategy"], "FinTech", "UTC+3", 85),
            create_mentor("3", &["Sales"], "EdTech", "UTC+0", 40),
        ];
        let criteria = FilterCriteria {
            min_rating: 4.0,
            ..Default::default()
        };

        let outcome = Matcher::default().find_matches(&create_startup(), &mentors, &criteria, 2);

        assert_eq!(outcome.total_candidates, 4);
        assert_eq!(outcome.eligible_candidates, 3);
        assert_eq!(outcome.matches.len(), 2);
        assert!(outcome.matches.iter().all(|m| m.mentor_id != "low"));
        assert_eq!(outcome.matches[0].mentor_id, "1");
    }
}
