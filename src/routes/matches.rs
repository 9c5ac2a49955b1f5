use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{filter_mentors, Matcher};
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, MentorQuery,
    ScoreMatchRequest,
};
use crate::services::ProfileDirectory;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn ProfileDirectory>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/mentors", web::get().to(list_mentors))
        .route("/startups", web::get().to(list_startups))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/score", web::post().to(score_match));
}

fn not_found(error: &str, message: String) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 404,
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let mentors = state.directory.mentors().len();
    let startups = state.directory.startups().len();

    let status = if mentors > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        mentors,
        startups,
    })
}

/// List mentors passing the eligibility filter
///
/// GET /api/v1/mentors?minRating=4.5&minWeeklyAvailabilityHours=3&expertise=Sales,Product%20Strategy
async fn list_mentors(
    state: web::Data<AppState>,
    query: web::Query<MentorQuery>,
) -> impl Responder {
    if let Some(min_rating) = query.min_rating.filter(|rating| !rating.is_finite()) {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid query".to_string(),
            message: format!("minRating must be a finite number, got {}", min_rating),
            status_code: 400,
        });
    }

    let criteria = query.into_inner().into_criteria();
    let mentors = filter_mentors(state.directory.mentors(), &criteria);

    tracing::debug!("Mentor listing returned {} of {}", mentors.len(), state.directory.mentors().len());

    HttpResponse::Ok().json(mentors)
}

/// List all startups
async fn list_startups(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.directory.startups())
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "startupId": "string",
///   "criteria": {
///     "minRating": 4.5,
///     "minWeeklyAvailabilityHours": 2,
///     "requiredExpertise": ["string"],
///     "requiredIndustries": ["string"]
///   },
///   "limit": 10
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return validation_failed(errors);
    }

    let Some(startup) = state.directory.startup(&req.startup_id) else {
        tracing::info!("Startup {} not found", req.startup_id);
        return not_found("Startup not found", format!("No startup with id {}", req.startup_id));
    };

    let limit = state.matching.resolve_limit(req.limit);

    tracing::info!("Finding mentors for startup: {}, limit: {}", startup.id, limit);

    let outcome = state
        .matcher
        .find_matches(startup, state.directory.mentors(), &req.criteria, limit);

    let response = FindMatchesResponse {
        request_id: uuid::Uuid::new_v4(),
        startup_id: startup.id.clone(),
        matches: outcome.matches,
        total_candidates: outcome.total_candidates,
        eligible_candidates: outcome.eligible_candidates,
        computed_at: chrono::Utc::now(),
    };

    tracing::info!(
        "Returning {} matches for startup {} ({} eligible of {} mentors)",
        response.matches.len(),
        startup.id,
        response.eligible_candidates,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Score a single mentor/startup pair
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// { "mentorId": "string", "startupId": "string" }
/// ```
async fn score_match(
    state: web::Data<AppState>,
    req: web::Json<ScoreMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let Some(mentor) = state.directory.mentor(&req.mentor_id) else {
        return not_found("Mentor not found", format!("No mentor with id {}", req.mentor_id));
    };
    let Some(startup) = state.directory.startup(&req.startup_id) else {
        return not_found("Startup not found", format!("No startup with id {}", req.startup_id));
    };

    let result = crate::core::calculate_match_score(mentor, startup, state.matcher.weights());

    tracing::debug!("Scored {} against {}: {}", mentor.id, startup.id, result.score);

    HttpResponse::Ok().json(result)
}
