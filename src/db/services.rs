//! High-level storage service layer.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of the repository traits. These functions contain business
//! logic that should be consistent regardless of the storage backend:
//! checksum deduplication on store, and metrics orchestration that pairs a
//! stored event with the species reference table.
//!
//! # Usage
//!
//! ```no_run
//! use sportfish_rust::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let events = services::list_events(&repo).await?;
//!     println!("Found {} events", events.len());
//!
//!     Ok(())
//! }
//! ```

use log::{info, warn};

use super::repository::{FullRepository, RepositoryResult};
use crate::api::{
    AbundanceConditionData, AnglerAbundanceData, CatchSummaryData, DietCompositionData, EventId,
    EventInfo, EventSummaryData, LengthFrequencyData, ReportNarrative, ReportPayload,
    SamplingEvent, SpeciesTable, SpreadsheetData,
};
use crate::services as metrics;

// ==================== Health & Connection ====================

/// Check if the event store is healthy.
///
/// This is a simple pass-through to the repository's health check.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(true)` if the store is healthy
/// * `Err` if the check fails
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Event Operations ====================

/// Store a sampling event with full business logic.
///
/// This function orchestrates the complete storage process:
/// 1. Check if an event with the same checksum already exists (deduplication)
/// 2. If it exists, return the existing metadata instead of storing a copy
/// 3. If new, store the complete event document
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event` - The event to store
///
/// # Returns
/// * `Ok(EventInfo)` - Metadata of the stored event (new or existing)
/// * `Err` if storage fails
pub async fn store_event<R: FullRepository + ?Sized>(
    repo: &R,
    event: &SamplingEvent,
) -> RepositoryResult<EventInfo> {
    info!(
        "Service layer: storing event for lake '{}' ({} sets, {} fish)",
        event.location.lake,
        event.sets.len(),
        event.total_fish_count(),
    );

    if !event.checksum.is_empty() {
        if let Some(existing_id) = repo.find_event_by_checksum(&event.checksum).await? {
            warn!(
                "Service layer: event with checksum {} already stored as event {}, skipping",
                event.checksum, existing_id
            );
            let existing = repo.get_event(existing_id).await?;
            return Ok(EventInfo::from_event(existing_id, &existing));
        }
    }

    repo.store_event(event).await
}

/// Parse an event from JSON and store it.
///
/// This is the storage boundary for events arriving from clients: the JSON
/// is validated and parsed, derived fields (season, checksum) are filled,
/// and the result goes through the deduplicating [`store_event`] path.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_json` - JSON string containing the event document
///
/// # Returns
/// * `Ok(EventInfo)` - Metadata of the stored event
/// * `Err` if parsing or storage fails
pub async fn store_event_json<R: FullRepository + ?Sized>(
    repo: &R,
    event_json: &str,
) -> anyhow::Result<EventInfo> {
    let event = crate::models::parse_event_json_str(event_json)?;
    Ok(store_event(repo, &event).await?)
}

/// Retrieve a complete sampling event by ID.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_id` - The ID of the event to retrieve
///
/// # Returns
/// * `Ok(SamplingEvent)` - The complete event document
/// * `Err` if the event is not found or retrieval fails
pub async fn get_event<R: FullRepository + ?Sized>(
    repo: &R,
    event_id: EventId,
) -> RepositoryResult<SamplingEvent> {
    info!("Service layer: loading event by id {}", event_id);
    repo.get_event(event_id).await
}

/// List all events with basic metadata.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(Vec<EventInfo>)` - List of event metadata
/// * `Err` if the query fails
pub async fn list_events<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<EventInfo>> {
    info!("Service layer: listing all events");
    repo.list_events().await
}

/// Mark an event as finalized.
///
/// Finalized events feed report generation and the diet composition chart.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_id` - The ID of the event to finalize
///
/// # Returns
/// * `Ok(EventInfo)` - Updated metadata
/// * `Err` if the event is not found or the update fails
pub async fn finalize_event<R: FullRepository + ?Sized>(
    repo: &R,
    event_id: EventId,
) -> RepositoryResult<EventInfo> {
    info!("Service layer: finalizing event {}", event_id);
    repo.finalize_event(event_id).await
}

/// Delete an event by ID.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_id` - The ID of the event to delete
///
/// # Returns
/// * `Ok(true)` - The event existed and was deleted
/// * `Ok(false)` - No event had this ID
/// * `Err` if the operation fails
pub async fn delete_event<R: FullRepository + ?Sized>(
    repo: &R,
    event_id: EventId,
) -> RepositoryResult<bool> {
    info!("Service layer: deleting event {}", event_id);
    repo.delete_event(event_id).await
}

// ==================== Queries ====================

/// List the distinct seasons with stored events, most recent first.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(Vec<String>)` - Season labels
/// * `Err` if the query fails
pub async fn list_seasons<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<Vec<String>> {
    repo.list_seasons().await
}

/// List metadata for the events recorded in a season.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `season` - Season label, e.g. "2024"
///
/// # Returns
/// * `Ok(Vec<EventInfo>)` - Matching events ordered by lake, then date
/// * `Err` if the query fails
pub async fn list_events_for_season<R: FullRepository + ?Sized>(
    repo: &R,
    season: &str,
) -> RepositoryResult<Vec<EventInfo>> {
    repo.list_events_for_season(season).await
}

/// List metadata for the events recorded on a lake.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `lake` - Exact lake name
///
/// # Returns
/// * `Ok(Vec<EventInfo>)` - Matching events
/// * `Err` if the query fails
pub async fn list_events_for_lake<R: FullRepository + ?Sized>(
    repo: &R,
    lake: &str,
) -> RepositoryResult<Vec<EventInfo>> {
    repo.list_events_for_lake(lake).await
}

/// Fetch the species reference table.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(SpeciesTable)` - All known species entries
/// * `Err` if the query fails
pub async fn species_table<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<SpeciesTable> {
    repo.species_table().await
}

// ==================== Metrics Operations ====================
// Each of these fetches the stored event (and the species table where the
// metric needs reference data) and runs the corresponding pure computation
// from `crate::services`.

/// Compute the catch summary table for a stored event.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_id` - The ID of the event
///
/// # Returns
/// * `Ok(CatchSummaryData)` - Per-species counts, biomass, and percentages
/// * `Err` if the event is not found
pub async fn get_catch_summary<R: FullRepository + ?Sized>(
    repo: &R,
    event_id: EventId,
) -> RepositoryResult<CatchSummaryData> {
    let event = repo.get_event(event_id).await?;
    Ok(metrics::compute_catch_summary(&event))
}

/// Compute the abundance and condition table for a stored event.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_id` - The ID of the event
///
/// # Returns
/// * `Ok(AbundanceConditionData)` - Per-species CPUE, size stats, and condition
/// * `Err` if the event is not found
pub async fn get_abundance_condition<R: FullRepository + ?Sized>(
    repo: &R,
    event_id: EventId,
) -> RepositoryResult<AbundanceConditionData> {
    let event = repo.get_event(event_id).await?;
    let table = repo.species_table().await?;
    Ok(metrics::compute_abundance_condition(&event, &table))
}

/// Compute the angler-facing abundance table (inches/pounds) for a stored event.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_id` - The ID of the event
///
/// # Returns
/// * `Ok(AnglerAbundanceData)` - Per-species imperial size stats
/// * `Err` if the event is not found
pub async fn get_angler_abundance<R: FullRepository + ?Sized>(
    repo: &R,
    event_id: EventId,
) -> RepositoryResult<AnglerAbundanceData> {
    let event = repo.get_event(event_id).await?;
    Ok(metrics::compute_angler_abundance(&event))
}

/// Compute the length-frequency histogram for one species of a stored event.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_id` - The ID of the event
/// * `species_code` - Species code, e.g. "WAE"
///
/// # Returns
/// * `Ok(Some(LengthFrequencyData))` - Histogram bins and labels
/// * `Ok(None)` - The species has no measured lengths or is not in the table
/// * `Err` if the event is not found
pub async fn get_length_frequency<R: FullRepository + ?Sized>(
    repo: &R,
    event_id: EventId,
    species_code: &str,
) -> RepositoryResult<Option<LengthFrequencyData>> {
    let event = repo.get_event(event_id).await?;
    let table = repo.species_table().await?;
    Ok(metrics::compute_length_frequency(&event, &table, species_code))
}

/// Compute the diet composition chart for a stored event.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_id` - The ID of the event
///
/// # Returns
/// * `Ok(Some(DietCompositionData))` - Stomach-content slices
/// * `Ok(None)` - The event is not finalized yet
/// * `Err` if the event is not found
pub async fn get_diet_composition<R: FullRepository + ?Sized>(
    repo: &R,
    event_id: EventId,
) -> RepositoryResult<Option<DietCompositionData>> {
    let event = repo.get_event(event_id).await?;
    Ok(metrics::compute_diet_composition(&event))
}

/// Compute the per-set summary for a stored event.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_id` - The ID of the event
///
/// # Returns
/// * `Ok(EventSummaryData)` - Set listing, totals, and event CPUE
/// * `Err` if the event is not found
pub async fn get_event_summary<R: FullRepository + ?Sized>(
    repo: &R,
    event_id: EventId,
) -> RepositoryResult<EventSummaryData> {
    let event = repo.get_event(event_id).await?;
    Ok(metrics::compute_event_summary(&event))
}

/// Assemble the report-generator payload for a stored event.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_id` - The ID of the event
/// * `narrative` - Free-text report sections supplied by the biologist
///
/// # Returns
/// * `Ok(ReportPayload)` - The complete payload for the external generator
/// * `Err` if the event is not found
pub async fn get_report_payload<R: FullRepository + ?Sized>(
    repo: &R,
    event_id: EventId,
    narrative: &ReportNarrative,
) -> RepositoryResult<ReportPayload> {
    let event = repo.get_event(event_id).await?;
    let table = repo.species_table().await?;
    Ok(metrics::build_report_payload(&event, &table, narrative))
}

/// Assemble the spreadsheet export for a stored event.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `event_id` - The ID of the event
///
/// # Returns
/// * `Ok(SpreadsheetData)` - File name, sheet name, and cell rows
/// * `Err` if the event is not found
pub async fn get_spreadsheet<R: FullRepository + ?Sized>(
    repo: &R,
    event_id: EventId,
) -> RepositoryResult<SpreadsheetData> {
    let event = repo.get_event(event_id).await?;
    Ok(metrics::build_spreadsheet(&event))
}
