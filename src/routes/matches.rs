use actix_web::{web, HttpResponse, Responder};
use std::time::Duration;
use validator::Validate;

use crate::core::MatchGenerator;
use crate::error::ApiError;
use crate::models::{Catalog, FindMatchesResponse, HealthResponse, Profile};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub generator: MatchGenerator,
    pub processing_delay: Duration,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/match")
            .route(web::post().to(find_matches))
            .default_service(web::to(method_not_allowed)),
    )
    .route("/catalog", web::get().to(get_catalog));
}

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/match
///
/// Request body:
/// ```json
/// {
///   "year": "2nd Year",
///   "branch": "Computer Science",
///   "strongSubjects": ["Mathematics"],
///   "helpSubjects": [],
///   "studyStyle": "Quiet",
///   "groupSize": "",
///   "timeSlots": "",
///   "sessionPreference": "",
///   "location": "",
///   "branchPreference": ""
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<Profile>,
) -> Result<HttpResponse, ApiError> {
    let profile = req.into_inner().normalized();

    if let Err(errors) = profile.validate() {
        tracing::info!("Validation failed for match request: field_errors={:?}", errors);
        return Err(ApiError::Validation(errors.to_string()));
    }

    let request_id = uuid::Uuid::new_v4();
    tracing::info!(
        %request_id,
        year = %profile.year,
        branch = %profile.branch,
        subjects = profile.subject_count(),
        "Finding study partners"
    );

    // Dropped by actix if the client goes away, nothing to clean up
    tokio::time::sleep(state.processing_delay).await;

    let matches = state.generator.generate(&profile, &mut rand::thread_rng());

    tracing::info!(%request_id, "Returning {} matches", matches.len());

    Ok(HttpResponse::Ok().json(FindMatchesResponse::new(matches)))
}

/// Anything but POST on /api/match
async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

/// Option lists for the matchmaking form
///
/// GET /api/catalog
async fn get_catalog() -> impl Responder {
    HttpResponse::Ok().json(Catalog::get())
}
