// Route exports
pub mod applications;
pub mod matches;

use actix_web::{http::StatusCode, web, HttpResponse};
use validator::ValidationErrors;

use crate::models::ErrorResponse;
use crate::services::TrackerError;

pub use matches::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(matches::configure)
            .configure(applications::configure),
    );
}

/// 400 response for a DTO that failed validation
pub(crate) fn validation_failed(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Map a tracker error onto its HTTP status
pub(crate) fn tracker_failed(err: TrackerError) -> HttpResponse {
    let status_code = err.status_code();
    HttpResponse::build(StatusCode::from_u16(status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR))
        .json(ErrorResponse {
            error: err.error_code().to_string(),
            message: err.to_string(),
            status_code,
        })
}
