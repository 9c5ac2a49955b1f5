use actix_web::{web, HttpResponse, Responder};
use crate::core::{check_recorded_scores, compute_overall_score, compute_stage_score, template_issues};
use crate::models::{AssessmentScoreRequest, AssessmentScoreResponse, ErrorResponse};

/// Configure assessment routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/assessments/score", web::post().to(score_assessment));
}

/// Running score of a multi-stage assessment
///
/// POST /api/v1/assessments/score
///
/// Request body:
/// ```json
/// {
///   "template": { "id": "string", "stages": [{ "id": "string", "criteria": [...] }] },
///   "scores": { "criterionId": 8 }
/// }
/// ```
///
/// Template authoring problems are reported as warnings; scoring still runs.
async fn score_assessment(req: web::Json<AssessmentScoreRequest>) -> impl Responder {
    let AssessmentScoreRequest { template, scores } = req.into_inner();

    if let Err(e) = check_recorded_scores(&template, &scores) {
        tracing::info!("Rejected assessment scores for template {}: {}", template.id, e);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid score".to_string(),
            message: e.to_string(),
            status_code: 400,
        });
    }

    let template_warnings = template_issues(&template);
    if !template_warnings.is_empty() {
        tracing::warn!("Template {} has {} authoring issues", template.id, template_warnings.len());
    }

    let response = AssessmentScoreResponse {
        overall_score: compute_overall_score(&template, &scores),
        stage_scores: template
            .stages
            .iter()
            .map(|stage| compute_stage_score(stage, &scores))
            .collect(),
        template_warnings,
    };

    HttpResponse::Ok().json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn body(scores: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "template": {
                "id": "seed",
                "stages": [{
                    "id": "screening",
                    "criteria": [
                        { "id": "team", "weight": 0.3, "maxScore": 10 },
                        { "id": "market", "weight": 0.7, "maxScore": 10 }
                    ]
                }]
            },
            "scores": scores
        })
    }

    #[actix_web::test]
    async fn test_partial_scores_normalize_over_scored_criteria() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/assessments/score")
            .set_json(body(serde_json::json!({ "team": 8 })))
            .to_request();
        let resp: AssessmentScoreResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.overall_score, 8.0);
        assert_eq!(resp.stage_scores.len(), 1);
        assert_eq!(resp.stage_scores[0].scored_criteria, 1);
        assert!(resp.template_warnings.is_empty());
    }

    #[actix_web::test]
    async fn test_out_of_range_score_is_rejected() {
        let app = test::init_service(App::new().configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/assessments/score")
            .set_json(body(serde_json::json!({ "market": 11 })))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_duplicate_criterion_is_warned_and_counted_once() {
        let app = test::init_service(App::new().configure(configure)).await;

        let mut payload = body(serde_json::json!({ "team": 8, "market": 6 }));
        payload["template"]["stages"]
            .as_array_mut()
            .unwrap()
            .push(serde_json::json!({
                "id": "deep-dive",
                "criteria": [{ "id": "team", "weight": 1.0, "maxScore": 10 }]
            }));

        let req = test::TestRequest::post()
            .uri("/assessments/score")
            .set_json(payload)
            .to_request();
        let resp: AssessmentScoreResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.overall_score, 6.6);
        assert_eq!(resp.template_warnings.len(), 1);
    }
}
