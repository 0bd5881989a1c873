//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and single-machine deployments. All data is
//! stored in memory using HashMap structures, providing fast, deterministic,
//! and isolated execution.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::*;
use crate::db::repository::*;

/// In-memory local repository.
///
/// This implementation stores all events and reference data in memory,
/// making it ideal for unit tests and field laptops that run without a
/// database server.
///
/// # Example
/// ```ignore
/// use sportfish_rust::db::repositories::LocalRepository;
///
/// #[tokio::test]
/// async fn test_event_storage() {
///     let repo = LocalRepository::new();
///
///     let info = repo.store_event(&event).await.unwrap();
///
///     let events = repo.list_events().await.unwrap();
///     assert_eq!(events.len(), 1);
/// }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    events: HashMap<EventId, SamplingEvent>,
    species: SpeciesTable,

    // ID counter
    next_event_id: EventId,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            events: HashMap::new(),
            species: SpeciesTable::builtin(),
            next_event_id: EventId(1),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new repository seeded with the builtin species table.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository with a custom species reference table.
    pub fn with_species_table(species: SpeciesTable) -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                species,
                ..Default::default()
            })),
        }
    }

    /// Add an event to the repository.
    ///
    /// This is a helper method for setting up data. The event is assigned
    /// an ID automatically and any existing ID is overwritten.
    ///
    /// # Arguments
    /// * `event` - Event to add (id will be overwritten)
    ///
    /// # Returns
    /// The ID assigned to the event
    pub fn store_event_impl(&self, mut event: SamplingEvent) -> EventId {
        let mut data = self.data.write();
        let event_id = data.next_event_id;
        data.next_event_id = EventId(data.next_event_id.0 + 1);

        event.id = Some(event_id);
        if event.season.is_empty() {
            event.season = event.derived_season();
        }
        data.events.insert(event_id, event);

        event_id
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of events stored.
    pub fn event_count(&self) -> usize {
        self.data.read().events.len()
    }

    /// Check if an event exists.
    pub fn has_event(&self, event_id: EventId) -> bool {
        self.data.read().events.contains_key(&event_id)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read();
        if !data.is_healthy {
            return Err(RepositoryError::connection("Store is not healthy"));
        }
        Ok(())
    }

    /// Helper to get an event or return NotFound error.
    fn get_event_impl(&self, event_id: EventId) -> RepositoryResult<SamplingEvent> {
        let data = self.data.read();
        data.events.get(&event_id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Event {} not found", event_id),
                ErrorContext::new("get_event")
                    .with_entity("event")
                    .with_entity_id(event_id),
            )
        })
    }

    /// Helper for the listing pattern: filter, map to metadata, sort by ID.
    fn list_filtered(&self, keep: impl Fn(&SamplingEvent) -> bool) -> Vec<EventInfo> {
        let data = self.data.read();
        let mut events: Vec<EventInfo> = data
            .events
            .iter()
            .filter(|(_, event)| keep(event))
            .map(|(id, event)| EventInfo::from_event(*id, event))
            .collect();
        events.sort_by_key(|e| e.event_id);
        events
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read();
        Ok(data.is_healthy)
    }

    async fn store_event(&self, event: &SamplingEvent) -> RepositoryResult<EventInfo> {
        self.check_health()?;

        let event_id = self.store_event_impl(event.clone());

        let data = self.data.read();
        let stored = data.events.get(&event_id).ok_or_else(|| {
            RepositoryError::internal(format!("Event {} vanished after insert", event_id))
        })?;

        Ok(EventInfo::from_event(event_id, stored))
    }

    async fn get_event(&self, event_id: EventId) -> RepositoryResult<SamplingEvent> {
        self.check_health()?;
        self.get_event_impl(event_id)
    }

    async fn finalize_event(&self, event_id: EventId) -> RepositoryResult<EventInfo> {
        self.check_health()?;

        let mut data = self.data.write();
        let event = data.events.get_mut(&event_id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Event {} not found", event_id),
                ErrorContext::new("finalize_event")
                    .with_entity("event")
                    .with_entity_id(event_id),
            )
        })?;

        event.finalize();
        Ok(EventInfo::from_event(event_id, event))
    }

    async fn list_events(&self) -> RepositoryResult<Vec<EventInfo>> {
        self.check_health()?;
        Ok(self.list_filtered(|_| true))
    }

    async fn delete_event(&self, event_id: EventId) -> RepositoryResult<bool> {
        self.check_health()?;
        let mut data = self.data.write();
        Ok(data.events.remove(&event_id).is_some())
    }

    async fn list_seasons(&self) -> RepositoryResult<Vec<String>> {
        self.check_health()?;
        let data = self.data.read();
        let mut seasons: Vec<String> = data
            .events
            .values()
            .map(|event| {
                if event.season.is_empty() {
                    event.derived_season()
                } else {
                    event.season.clone()
                }
            })
            .collect();
        // Most recent season first
        seasons.sort_by(|a, b| b.cmp(a));
        seasons.dedup();
        Ok(seasons)
    }

    async fn list_events_for_season(&self, season: &str) -> RepositoryResult<Vec<EventInfo>> {
        self.check_health()?;
        let wanted = season.to_string();
        let mut events = self.list_filtered(move |event| {
            let event_season = if event.season.is_empty() {
                event.derived_season()
            } else {
                event.season.clone()
            };
            event_season == wanted
        });
        // ISO dates sort chronologically as strings
        events.sort_by(|a, b| a.lake.cmp(&b.lake).then(a.date.cmp(&b.date)));
        Ok(events)
    }

    async fn list_events_for_lake(&self, lake: &str) -> RepositoryResult<Vec<EventInfo>> {
        self.check_health()?;
        let wanted = lake.to_string();
        Ok(self.list_filtered(move |event| event.location.lake == wanted))
    }

    async fn find_event_by_checksum(&self, checksum: &str) -> RepositoryResult<Option<EventId>> {
        self.check_health()?;
        if checksum.is_empty() {
            return Ok(None);
        }
        let data = self.data.read();
        let found = data
            .events
            .iter()
            .filter(|(_, event)| event.checksum == checksum)
            .map(|(id, _)| *id)
            .min();
        Ok(found)
    }
}

// ==================== Reference Repository ====================

#[async_trait]
impl ReferenceRepository for LocalRepository {
    async fn species_table(&self) -> RepositoryResult<SpeciesTable> {
        self.check_health()?;
        let data = self.data.read();
        Ok(data.species.clone())
    }
}
