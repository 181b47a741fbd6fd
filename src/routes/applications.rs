use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::models::{
    ApplicationFilter, CreateCandidateRequest, CreateJobRequest, JobFilter, StatusUpdateRequest,
    SubmitApplicationRequest,
};
use crate::routes::{tracker_failed, validation_failed, AppState};

/// Configure candidate, job, application and stats routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/candidates", web::post().to(create_candidate))
        .route("/candidates", web::get().to(list_candidates))
        .route("/candidates/{id}", web::get().to(get_candidate))
        .route("/candidates/{id}/applications", web::get().to(candidate_applications))
        .route("/jobs", web::post().to(create_job))
        .route("/jobs", web::get().to(list_jobs))
        .route("/jobs/{id}", web::get().to(get_job))
        .route("/jobs/{id}/applications", web::get().to(job_applications))
        .route("/applications", web::post().to(submit_application))
        .route("/applications", web::get().to(list_applications))
        .route("/applications/{id}", web::get().to(get_application))
        .route("/applications/{id}/status", web::put().to(update_status))
        .route("/applications/{id}/status", web::patch().to(update_status))
        .route("/applications/{id}/history", web::get().to(status_history))
        .route("/stats", web::get().to(stats))
        .route("/stats/jobs/{id}", web::get().to(job_stats))
        .route("/stats/candidates/{id}", web::get().to(candidate_stats));
}

async fn create_candidate(
    state: web::Data<AppState>,
    req: web::Json<CreateCandidateRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.tracker.create_candidate(req.into_inner()).await {
        Ok(candidate) => HttpResponse::Created().json(candidate),
        Err(e) => {
            tracing::info!("Candidate registration refused: {}", e);
            tracker_failed(e)
        }
    }
}

async fn list_candidates(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.tracker.list_candidates().await)
}

async fn get_candidate(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.tracker.get_candidate(&path).await {
        Ok(candidate) => HttpResponse::Ok().json(candidate),
        Err(e) => tracker_failed(e),
    }
}

async fn create_job(
    state: web::Data<AppState>,
    req: web::Json<CreateJobRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.tracker.create_job(req.into_inner()).await {
        Ok(job) => HttpResponse::Created().json(job),
        Err(e) => {
            tracing::info!("Job registration refused: {}", e);
            tracker_failed(e)
        }
    }
}

/// GET /api/v1/candidates/{id}/applications
async fn candidate_applications(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    if let Err(e) = state.tracker.get_candidate(&path).await {
        return tracker_failed(e);
    }

    let filter = ApplicationFilter {
        candidate_id: Some(path.into_inner()),
        ..Default::default()
    };
    HttpResponse::Ok().json(state.tracker.list_applications(&filter).await)
}

/// GET /api/v1/jobs?status=open
async fn list_jobs(state: web::Data<AppState>, query: web::Query<JobFilter>) -> impl Responder {
    HttpResponse::Ok().json(state.tracker.list_jobs(&query).await)
}

async fn get_job(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.tracker.get_job(&path).await {
        Ok(job) => HttpResponse::Ok().json(job),
        Err(e) => tracker_failed(e),
    }
}

/// GET /api/v1/jobs/{id}/applications
async fn job_applications(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    if let Err(e) = state.tracker.get_job(&path).await {
        return tracker_failed(e);
    }

    let filter = ApplicationFilter {
        job_id: Some(path.into_inner()),
        ..Default::default()
    };
    HttpResponse::Ok().json(state.tracker.list_applications(&filter).await)
}

/// Submit an application
///
/// POST /api/v1/applications
///
/// Request body:
/// ```json
/// { "job_id": "job-001", "candidate_id": "cand-001" }
/// ```
async fn submit_application(
    state: web::Data<AppState>,
    req: web::Json<SubmitApplicationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    match state.tracker.submit_application(req.into_inner()).await {
        Ok(application) => HttpResponse::Created().json(application),
        Err(e) => {
            tracing::info!("Application refused: {}", e);
            tracker_failed(e)
        }
    }
}

/// GET /api/v1/applications?job_id=..&candidate_id=..&status=..
async fn list_applications(
    state: web::Data<AppState>,
    query: web::Query<ApplicationFilter>,
) -> impl Responder {
    HttpResponse::Ok().json(state.tracker.list_applications(&query).await)
}

async fn get_application(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.tracker.get_application(&path).await {
        Ok(details) => HttpResponse::Ok().json(details),
        Err(e) => tracker_failed(e),
    }
}

/// Move an application to a new status
///
/// PUT or PATCH /api/v1/applications/{id}/status
///
/// Request body:
/// ```json
/// { "status": "screening", "notes": "Strong resume", "changed_by": "recruiter-1" }
/// ```
async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<StatusUpdateRequest>,
) -> impl Responder {
    match state.tracker.update_status(&path, req.into_inner()).await {
        Ok(application) => HttpResponse::Ok().json(application),
        Err(e) => tracker_failed(e),
    }
}

async fn status_history(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.tracker.status_history(&path).await {
        Ok(history) => HttpResponse::Ok().json(history),
        Err(e) => tracker_failed(e),
    }
}

async fn stats(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.tracker.stats().await)
}

async fn job_stats(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.tracker.job_stats(&path).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => tracker_failed(e),
    }
}

async fn candidate_stats(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match state.tracker.candidate_stats(&path).await {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(e) => tracker_failed(e),
    }
}
