use crate::models::{FilterCriteria, MentorProfile};

/// Check if a mentor satisfies every hard eligibility constraint
///
/// Empty tag requirements are treated as "no constraint". A NaN `min_rating`
/// admits nobody.
#[inline]
pub fn matches_criteria(mentor: &MentorProfile, criteria: &FilterCriteria) -> bool {
    if criteria.min_rating.is_nan() || mentor.rating < criteria.min_rating {
        return false;
    }

    if mentor.weekly_availability_hours < criteria.min_weekly_availability_hours {
        return false;
    }

    if !criteria.required_expertise.is_empty()
        && !mentor.has_any_expertise(&criteria.required_expertise) {
        return false;
    }

    if !criteria.required_industries.is_empty()
        && !mentor.has_any_industry(&criteria.required_industries) {
        return false;
    }

    true
}

/// Narrow a mentor roster to the eligible mentors, preserving input order
pub fn filter_mentors(mentors: &[MentorProfile], criteria: &FilterCriteria) -> Vec<MentorProfile> {
    mentors
        .iter()
        .filter(|mentor| matches_criteria(mentor, criteria))
        .cloned()
        .collect()
}
