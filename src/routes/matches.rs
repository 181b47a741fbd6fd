use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{respond, AssistantQuery, GapAnalyzer, Matcher};
use crate::models::{
    round_to, GapAnalysisRequest, HealthResponse, MatchingRequest, SingleMatchRequest, WeightsResponse,
};
use crate::routes::validation_failed;
use crate::services::ApplicationTracker;

/// Application state shared across all handlers
///
/// Clones share the tracker's store.
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub gap: GapAnalyzer,
    pub tracker: ApplicationTracker,
}

impl AppState {
    pub fn new(matcher: Matcher, gap: GapAnalyzer, tracker: ApplicationTracker) -> Self {
        Self { matcher, gap, tracker }
    }
}

/// Configure matching, skills-gap and assistant routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match/candidate-to-jobs", web::post().to(match_candidate_to_jobs))
        .route("/match/candidate-to-job", web::post().to(match_candidate_to_job))
        .route("/match/engine/weights", web::get().to(engine_weights))
        .route("/skills/analyze", web::post().to(analyze_skills))
        .route("/assistant", web::post().to(assistant));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank a candidate against a list of jobs
///
/// POST /api/v1/match/candidate-to-jobs
///
/// Request body:
/// ```json
/// {
///   "candidate": { "skills": ["Python"], "experience_years": 3, "expected_salary": 800000 },
///   "jobs": [{ "job_id": "job-001", "title": "Backend Developer", "required_skills": ["Python"] }]
/// }
/// ```
async fn match_candidate_to_jobs(
    state: web::Data<AppState>,
    req: web::Json<MatchingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for matching request: {:?}", errors);
        return validation_failed(errors);
    }

    let response = state.matcher.rank(&req.candidate, &req.jobs);

    tracing::info!(
        "Ranked {} jobs, top score {:?}",
        response.total_matches,
        response.matches.first().map(|m| m.overall_score)
    );

    HttpResponse::Ok().json(response)
}

/// Score a candidate against one job
///
/// POST /api/v1/match/candidate-to-job
async fn match_candidate_to_job(
    state: web::Data<AppState>,
    req: web::Json<SingleMatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let result = state.matcher.score_job(&req.candidate, &req.job);
    tracing::debug!("Scored job {}: {}", result.job_id, result.overall_score);

    HttpResponse::Ok().json(result)
}

/// Expose the active weight table
///
/// GET /api/v1/match/engine/weights
async fn engine_weights(state: web::Data<AppState>) -> impl Responder {
    let weights = *state.matcher.weights();
    HttpResponse::Ok().json(WeightsResponse {
        weights,
        total: round_to(weights.total(), 2),
    })
}

/// Skills-gap analysis against a target role
///
/// POST /api/v1/skills/analyze
async fn analyze_skills(
    state: web::Data<AppState>,
    req: web::Json<GapAnalysisRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let response = state.gap.analyze(&req);

    tracing::info!(
        "Gap analysis for {}: readiness {}, {} skills missing",
        req.target_role.title,
        response.analysis.readiness_score,
        response.analysis.missing_skills.len()
    );

    HttpResponse::Ok().json(response)
}

/// Typed assistant query
///
/// POST /api/v1/assistant
///
/// Request body:
/// ```json
/// { "intent": "salary", "expected_salary": 800000, "salary_range": [600000, 1000000] }
/// ```
async fn assistant(
    state: web::Data<AppState>,
    query: web::Json<AssistantQuery>,
) -> impl Responder {
    tracing::debug!("Assistant query with intent {}", query.intent());
    let reply = respond(state.matcher.taxonomy(), &query);
    HttpResponse::Ok().json(reply)
}
