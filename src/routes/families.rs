use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{today, MatchRanker};
use crate::models::{
    AssessmentView, AvailableAnimalsQuery, AvailableAnimalsResponse, ErrorResponse,
    FamilyListResponse, FamilySummaryView, HealthResponse, MatchFamiliesRequest,
    MatchFamiliesResponse,
};
use crate::services::{FamilyOrder, SessionContext, ShelterStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ShelterStore>,
    pub ranker: MatchRanker,
}

/// Configure all family-matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/families/match", web::post().to(match_families))
        .route("/families", web::get().to(list_families))
        .route("/animals/available", web::get().to(available_animals));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Match foster families for an animal
///
/// POST /api/v1/families/match
///
/// Request body:
/// ```json
/// {
///   "animalId": 42,
///   "referenceDate": "2024-06-01"
/// }
/// ```
///
/// Read-only: either the full ranked list is returned or the call fails
/// entirely.
async fn match_families(
    state: web::Data<AppState>,
    session: SessionContext,
    req: web::Json<MatchFamiliesRequest>,
) -> impl Responder {
    // Reject malformed identifiers before touching the store
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for match request: animal_id={}, errors={:?}",
            req.animal_id,
            errors
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let reference = req.reference_date.unwrap_or_else(today);

    tracing::info!(
        "Matching families for animal {} (reference {}, caller {})",
        req.animal_id,
        reference,
        session.caller
    );

    let animal = match state.store.fetch_animal(req.animal_id).await {
        Ok(Some(animal)) => animal,
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Animal not found".to_string(),
                message: format!("No animal with id {}", req.animal_id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to fetch animal {}: {}", req.animal_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch animal".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let assessment = match state.store.fetch_latest_assessment(req.animal_id).await {
        Ok(assessment) => assessment,
        Err(e) => {
            tracing::error!(
                "Failed to fetch assessment for animal {}: {}",
                req.animal_id,
                e
            );
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch behavior assessment".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let families = match state
        .store
        .fetch_families_with_placements(FamilyOrder::NameAsc)
        .await
    {
        Ok(families) => families,
        Err(e) => {
            tracing::error!("Failed to fetch foster families: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch foster families".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let result = state.ranker.rank(
        &animal.species_label,
        assessment.as_ref(),
        &families,
        reference,
    );

    tracing::info!(
        "Ranked {} active families for animal {} (from {} total)",
        result.matches.len(),
        animal.id,
        result.total_families
    );

    HttpResponse::Ok().json(MatchFamiliesResponse {
        animal,
        behavior_assessment: assessment.as_ref().map(AssessmentView::from),
        matches: result.matches,
    })
}

/// List all foster families with their availability summary
///
/// GET /api/v1/families
async fn list_families(
    state: web::Data<AppState>,
    session: SessionContext,
) -> impl Responder {
    tracing::debug!("Listing foster families (caller {})", session.caller);

    let families = match state
        .store
        .fetch_families_with_placements(FamilyOrder::ApprovalDesc)
        .await
    {
        Ok(families) => families,
        Err(e) => {
            tracing::error!("Failed to fetch foster families: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch foster families".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let reference = today();
    let rows: Vec<FamilySummaryView> = families
        .iter()
        .map(|family| {
            let snapshot = crate::core::availability_snapshot(&family.placements, reference);
            FamilySummaryView::from_snapshot(family, &snapshot)
        })
        .collect();

    let total = rows.len();
    HttpResponse::Ok().json(FamilyListResponse {
        families: rows,
        total,
    })
}

/// List animals with no active placement
///
/// GET /api/v1/animals/available?referenceDate=2024-06-01
async fn available_animals(
    state: web::Data<AppState>,
    session: SessionContext,
    query: web::Query<AvailableAnimalsQuery>,
) -> impl Responder {
    let reference = query.reference_date.unwrap_or_else(today);

    tracing::debug!(
        "Listing available animals at {} (caller {})",
        reference,
        session.caller
    );

    match state.store.list_available_animals(reference).await {
        Ok(animals) => {
            let total = animals.len();
            HttpResponse::Ok().json(AvailableAnimalsResponse { animals, total })
        }
        Err(e) => {
            tracing::error!("Failed to list available animals: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list available animals".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}
