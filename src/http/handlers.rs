//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! existing service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    EventInfoDto, EventListResponse, HealthResponse, ReportQuery, ReportResponse,
    SeasonListResponse, SpeciesListResponse, StoreEventRequest, StoreEventResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{EventId, ReportFormat, ReportNarrative, SamplingEvent};
use crate::db::repository::RepositoryError;
use crate::db::services as db_services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Event CRUD
// =============================================================================

/// GET /v1/events
///
/// List all events in the store.
pub async fn list_events(State(state): State<AppState>) -> HandlerResult<EventListResponse> {
    let events = db_services::list_events(state.repository.as_ref()).await?;

    let event_dtos: Vec<EventInfoDto> = events.into_iter().map(Into::into).collect();
    let total = event_dtos.len();

    Ok(Json(EventListResponse {
        events: event_dtos,
        total,
    }))
}

/// POST /v1/events
///
/// Store a new sampling event. Re-uploading a document already on file
/// returns the existing event's metadata instead of storing a copy.
pub async fn store_event(
    State(state): State<AppState>,
    Json(request): Json<StoreEventRequest>,
) -> Result<(StatusCode, Json<StoreEventResponse>), AppError> {
    let event_json = serde_json::to_string(&request.event)
        .map_err(|e| AppError::BadRequest(format!("Invalid event JSON: {}", e)))?;

    let info = db_services::store_event_json(state.repository.as_ref(), &event_json)
        .await
        .map_err(|e| match e.downcast::<RepositoryError>() {
            Ok(repo_err) => AppError::Repository(repo_err),
            Err(parse_err) => {
                AppError::BadRequest(format!("Invalid event document: {}", parse_err))
            }
        })?;

    let message = format!("Event stored with id {}", info.event_id);
    Ok((
        StatusCode::CREATED,
        Json(StoreEventResponse {
            event: info.into(),
            message,
        }),
    ))
}

/// GET /v1/events/{event_id}
///
/// Get the complete stored event document.
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> HandlerResult<SamplingEvent> {
    let event =
        db_services::get_event(state.repository.as_ref(), EventId::new(event_id)).await?;
    Ok(Json(event))
}

/// DELETE /v1/events/{event_id}
///
/// Delete an event from the store.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    let deleted =
        db_services::delete_event(state.repository.as_ref(), EventId::new(event_id)).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Event {} not found", event_id)))
    }
}

/// POST /v1/events/{event_id}/finalize
///
/// Mark an event as finalized. Finalized events feed report generation
/// and the diet composition chart.
pub async fn finalize_event(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> HandlerResult<EventInfoDto> {
    let info =
        db_services::finalize_event(state.repository.as_ref(), EventId::new(event_id)).await?;
    Ok(Json(info.into()))
}

// =============================================================================
// Season Queries
// =============================================================================

/// GET /v1/seasons
///
/// List the seasons with stored events, most recent first.
pub async fn list_seasons(State(state): State<AppState>) -> HandlerResult<SeasonListResponse> {
    let seasons = db_services::list_seasons(state.repository.as_ref()).await?;
    let total = seasons.len();

    Ok(Json(SeasonListResponse { seasons, total }))
}

/// GET /v1/seasons/{season}/events
///
/// List the events recorded in a season, ordered by lake and date.
pub async fn list_season_events(
    State(state): State<AppState>,
    Path(season): Path<String>,
) -> HandlerResult<EventListResponse> {
    let events =
        db_services::list_events_for_season(state.repository.as_ref(), &season).await?;

    let event_dtos: Vec<EventInfoDto> = events.into_iter().map(Into::into).collect();
    let total = event_dtos.len();

    Ok(Json(EventListResponse {
        events: event_dtos,
        total,
    }))
}

// =============================================================================
// Metric Endpoints
// =============================================================================

/// GET /v1/events/{event_id}/catch-summary
///
/// Get the per-species catch summary table for an event.
pub async fn get_catch_summary(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> HandlerResult<crate::api::CatchSummaryData> {
    let data =
        db_services::get_catch_summary(state.repository.as_ref(), EventId::new(event_id)).await?;
    Ok(Json(data))
}

/// GET /v1/events/{event_id}/abundance-condition
///
/// Get the abundance and condition table (CPUE, size stats, Wr/K) for an event.
pub async fn get_abundance_condition(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> HandlerResult<crate::api::AbundanceConditionData> {
    let data =
        db_services::get_abundance_condition(state.repository.as_ref(), EventId::new(event_id))
            .await?;
    Ok(Json(data))
}

/// GET /v1/events/{event_id}/angler-abundance
///
/// Get the angler-facing abundance table (inches and pounds) for an event.
pub async fn get_angler_abundance(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> HandlerResult<crate::api::AnglerAbundanceData> {
    let data =
        db_services::get_angler_abundance(state.repository.as_ref(), EventId::new(event_id))
            .await?;
    Ok(Json(data))
}

/// GET /v1/events/{event_id}/length-frequency/{species}
///
/// Get the length-frequency histogram for one species of an event.
pub async fn get_length_frequency(
    State(state): State<AppState>,
    Path((event_id, species)): Path<(i64, String)>,
) -> HandlerResult<crate::api::LengthFrequencyData> {
    let data = db_services::get_length_frequency(
        state.repository.as_ref(),
        EventId::new(event_id),
        &species,
    )
    .await?
    .ok_or_else(|| {
        AppError::NotFound(format!(
            "No measured lengths for species {} in event {}",
            species, event_id
        ))
    })?;

    Ok(Json(data))
}

/// GET /v1/events/{event_id}/diet-composition
///
/// Get the stomach-content composition chart for a finalized event.
pub async fn get_diet_composition(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> HandlerResult<crate::api::DietCompositionData> {
    let data =
        db_services::get_diet_composition(state.repository.as_ref(), EventId::new(event_id))
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Diet composition is only available once event {} is finalized",
                    event_id
                ))
            })?;

    Ok(Json(data))
}

/// GET /v1/events/{event_id}/summary
///
/// Get the per-set effort and catch overview for an event.
pub async fn get_event_summary(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> HandlerResult<crate::api::EventSummaryData> {
    let data =
        db_services::get_event_summary(state.repository.as_ref(), EventId::new(event_id)).await?;
    Ok(Json(data))
}

// =============================================================================
// Report & Export
// =============================================================================

/// POST /v1/events/{event_id}/report?format=docx
///
/// Assemble the payload for the external report generator. The request body
/// carries the biologist's narrative sections; blank fields fall back to
/// values derived from the event.
pub async fn get_report(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
    Query(query): Query<ReportQuery>,
    Json(narrative): Json<ReportNarrative>,
) -> HandlerResult<ReportResponse> {
    let format = match query.format.as_deref() {
        None | Some("docx") => ReportFormat::Docx,
        Some("pdf") => ReportFormat::Pdf,
        Some(other) => {
            return Err(AppError::BadRequest(format!(
                "Unsupported report format '{}' (expected docx or pdf)",
                other
            )))
        }
    };

    let payload = db_services::get_report_payload(
        state.repository.as_ref(),
        EventId::new(event_id),
        &narrative,
    )
    .await?;

    Ok(Json(ReportResponse {
        format: format.as_str().to_string(),
        payload,
    }))
}

/// GET /v1/events/{event_id}/spreadsheet
///
/// Get the flattened spreadsheet rows for an event.
pub async fn get_spreadsheet(
    State(state): State<AppState>,
    Path(event_id): Path<i64>,
) -> HandlerResult<crate::api::SpreadsheetData> {
    let data =
        db_services::get_spreadsheet(state.repository.as_ref(), EventId::new(event_id)).await?;
    Ok(Json(data))
}

// =============================================================================
// Species Reference
// =============================================================================

/// GET /v1/species
///
/// Get the species reference table.
pub async fn list_species(State(state): State<AppState>) -> HandlerResult<SpeciesListResponse> {
    let table = db_services::species_table(state.repository.as_ref()).await?;

    let species = table.entries().to_vec();
    let total = species.len();

    Ok(Json(SpeciesListResponse { species, total }))
}
