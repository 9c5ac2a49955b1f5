use crate::models::{MatchResult, MentorProfile, ScoringWeights, StartupProfile};

/// Success rate at or above which a mentor earns the track record points
pub const TRACK_RECORD_THRESHOLD_PERCENT: u8 = 80;

/// Score a mentor against a startup using the default 50/25/15/10 weights
pub fn score_match(mentor: &MentorProfile, startup: &StartupProfile) -> MatchResult {
    calculate_match_score(mentor, startup, &ScoringWeights::default())
}

/// Calculate a compatibility score (0-100) for a mentor/startup pair
///
/// Scoring formula:
/// score = (
///     expertise_overlap * 50 +     # share of declared needs the mentor covers
///     industry_match * 25 +        # mentor has worked in the startup's industry
///     timezone_match * 15 +        # exact timezone equality
///     track_record * 10            # success rate >= 80%
/// )
///
/// Reasons and challenges are appended in that dimension order.
pub fn calculate_match_score(
    mentor: &MentorProfile,
    startup: &StartupProfile,
    weights: &ScoringWeights,
) -> MatchResult {
    let mut reasons = Vec::new();
    let mut challenges = Vec::new();

    let expertise = expertise_contribution(
        mentor,
        startup,
        weights.expertise,
        &mut reasons,
        &mut challenges,
    );

    let industry = if mentor.industry_tags.contains(&startup.industry) {
        reasons.push(format!("Industry experience in {}", startup.industry));
        weights.industry
    } else {
        challenges.push(format!("Limited experience in {} industry", startup.industry));
        0.0
    };

    let timezone = if mentor.timezone == startup.timezone {
        reasons.push(format!("Same timezone ({})", startup.timezone));
        weights.timezone
    } else {
        challenges.push("Timezone difference may require coordination overhead".to_string());
        0.0
    };

    // Weak track record is not a challenge, it just earns nothing
    let track_record = if mentor.success_rate_percent >= TRACK_RECORD_THRESHOLD_PERCENT {
        reasons.push(format!(
            "Strong track record ({}% success rate)",
            mentor.success_rate_percent
        ));
        weights.track_record
    } else {
        0.0
    };

    let total_score = expertise + industry + timezone + track_record;

    MatchResult {
        mentor_id: mentor.id.clone(),
        startup_id: startup.id.clone(),
        score: total_score.min(100.0).max(0.0),
        compatibility_reasons: reasons,
        challenge_areas: challenges,
    }
}

/// Expertise dimension: weight scaled by the share of declared needs covered,
/// rounded to whole points
fn expertise_contribution(
    mentor: &MentorProfile,
    startup: &StartupProfile,
    weight: f64,
    reasons: &mut Vec<String>,
    challenges: &mut Vec<String>,
) -> f64 {
    if startup.declared_needs.is_empty() {
        return 0.0;
    }

    let matched: Vec<&str> = startup
        .declared_needs
        .iter()
        .filter(|need| mentor.expertise_tags.contains(*need))
        .map(String::as_str)
        .collect();

    if matched.is_empty() {
        challenges.push("No direct expertise match with startup needs".to_string());
        return 0.0;
    }

    let fraction = matched.len() as f64 / startup.declared_needs.len() as f64;
    reasons.push(format!(
        "Expertise match: {}% ({})",
        (fraction * 100.0).round(),
        matched.join(", ")
    ));

    (weight * fraction).round()
}
