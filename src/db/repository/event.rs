//! Event repository trait for sampling-event persistence.
//!
//! This trait defines operations for storing, querying, and managing
//! sampling events: field surveys with their gear sets, fish records,
//! and environmental readings.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{EventId, EventInfo, SamplingEvent};

/// Repository trait for sampling-event operations.
///
/// Events are stored as whole documents: each event carries its sets and
/// fish records inline, and queries address events by ID, season, lake,
/// or content checksum.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait EventRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the repository is healthy and can accept operations.
    ///
    /// # Returns
    /// * `Ok(true)` - Repository is healthy
    /// * `Ok(false)` - Repository is degraded but responsive
    /// * `Err(RepositoryError)` - Repository is unreachable
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Event Operations ====================

    /// Store a sampling event and return its summary metadata.
    ///
    /// # Arguments
    /// * `event` - The event to store (any existing id is ignored)
    ///
    /// # Returns
    /// * `Ok(EventInfo)` - Metadata including the assigned event ID
    /// * `Err(RepositoryError)` - If the operation fails
    async fn store_event(&self, event: &SamplingEvent) -> RepositoryResult<EventInfo>;

    /// Retrieve a complete sampling event by ID.
    ///
    /// # Arguments
    /// * `event_id` - The ID of the event to retrieve
    ///
    /// # Returns
    /// * `Ok(SamplingEvent)` - The complete event document
    /// * `Err(RepositoryError::NotFound)` - If no event has this ID
    async fn get_event(&self, event_id: EventId) -> RepositoryResult<SamplingEvent>;

    /// Mark a stored event as finalized.
    ///
    /// Finalized events are eligible for report generation. Finalizing an
    /// already-finalized event is a no-op.
    ///
    /// # Arguments
    /// * `event_id` - The ID of the event to finalize
    ///
    /// # Returns
    /// * `Ok(EventInfo)` - Updated metadata for the event
    /// * `Err(RepositoryError::NotFound)` - If the event does not exist
    async fn finalize_event(&self, event_id: EventId) -> RepositoryResult<EventInfo>;

    /// List metadata for all stored events.
    ///
    /// # Returns
    /// * `Ok(Vec<EventInfo>)` - Event summaries ordered by ID
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_events(&self) -> RepositoryResult<Vec<EventInfo>>;

    /// Delete an event by ID.
    ///
    /// # Arguments
    /// * `event_id` - The ID of the event to delete
    ///
    /// # Returns
    /// * `Ok(true)` - The event existed and was deleted
    /// * `Ok(false)` - No event had this ID
    /// * `Err(RepositoryError)` - If the operation fails
    async fn delete_event(&self, event_id: EventId) -> RepositoryResult<bool>;

    // ==================== Queries ====================

    /// List the distinct seasons that have at least one stored event.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Season labels, most recent first
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_seasons(&self) -> RepositoryResult<Vec<String>>;

    /// List metadata for the events recorded in a season.
    ///
    /// # Arguments
    /// * `season` - Season label, e.g. "2024"
    ///
    /// # Returns
    /// * `Ok(Vec<EventInfo>)` - Matching event summaries ordered by lake, then date
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_events_for_season(&self, season: &str) -> RepositoryResult<Vec<EventInfo>>;

    /// List metadata for the events recorded on a lake.
    ///
    /// # Arguments
    /// * `lake` - Exact lake name as recorded in the event location
    ///
    /// # Returns
    /// * `Ok(Vec<EventInfo>)` - Matching event summaries ordered by ID
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_events_for_lake(&self, lake: &str) -> RepositoryResult<Vec<EventInfo>>;

    /// Find a stored event with the given content checksum.
    ///
    /// Used to detect duplicate uploads before assigning a new ID.
    ///
    /// # Arguments
    /// * `checksum` - SHA-256 hex digest of the event content
    ///
    /// # Returns
    /// * `Ok(Some(EventId))` - An event with this checksum exists
    /// * `Ok(None)` - No stored event matches
    /// * `Err(RepositoryError)` - If the operation fails
    async fn find_event_by_checksum(&self, checksum: &str) -> RepositoryResult<Option<EventId>>;
}
