use actix_web::{web, HttpResponse, Responder};

use crate::models::requests::{PreferenceForm, ProfessionalForm, StudentForm, TouristForm};
use crate::models::responses::{ErrorResponse, HealthResponse, RecommendationResponse};
use crate::services::RecommendationService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: RecommendationService,
}

/// Configure all dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/student/recommend", web::post().to(student_recommend))
        .route("/student/health", web::get().to(health_check))
        .route("/professional/recommend", web::post().to(professional_recommend))
        .route("/tourist/recommend", web::post().to(tourist_recommend));
}

/// Health check endpoint
///
/// Probes the remote recommender on every call so the dashboard can decide
/// whether to expect remote results.
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let remote = state.service.remote_status().await;

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "student_recommendation".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        remote,
    })
}

/// POST /api/v1/student/recommend
///
/// Request body:
/// ```json
/// {
///   "degreeLevel": "masters",
///   "fieldOfStudy": "Computer Science",
///   "gpa": "3.6",
///   "budget": "low",
///   "destinationPreference": "europe"
/// }
/// ```
async fn student_recommend(
    state: web::Data<AppState>,
    req: web::Json<StudentForm>,
) -> impl Responder {
    recommend(&state, PreferenceForm::Student(req.into_inner())).await
}

async fn professional_recommend(
    state: web::Data<AppState>,
    req: web::Json<ProfessionalForm>,
) -> impl Responder {
    recommend(&state, PreferenceForm::Professional(req.into_inner())).await
}

async fn tourist_recommend(
    state: web::Data<AppState>,
    req: web::Json<TouristForm>,
) -> impl Responder {
    recommend(&state, PreferenceForm::Tourist(req.into_inner())).await
}

async fn recommend(state: &AppState, form: PreferenceForm) -> HttpResponse {
    let persona = form.persona();
    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!("{:?} recommendation request {}", persona, request_id);

    let outcome = match state.service.recommend(&form).await {
        Ok(outcome) => outcome,
        Err(e) => {
            let fields = e.fields();
            tracing::info!(
                "Validation failed for {:?} request {}: fields={:?}",
                persona,
                request_id,
                fields
            );
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Validation failed".to_string(),
                message: e.to_string(),
                status_code: 400,
                fields,
            });
        }
    };

    let response = RecommendationResponse::new(request_id, outcome);

    tracing::info!(
        "Returning {} {} for request {} (source: {:?})",
        response.count,
        persona.candidate_noun(),
        response.request_id,
        response.source
    );

    HttpResponse::Ok().json(response)
}
