use crate::api::EventId;
use crate::models::SamplingEvent;
use serde::{Deserialize, Serialize};

/// Sampling event information for the event list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInfo {
    pub event_id: EventId,
    pub lake: String,
    pub date: String,
    pub gear: String,
    pub season: String,
    pub is_finalized: bool,
    pub set_count: usize,
    pub fish_count: u32,
}

impl EventInfo {
    /// Build the listing metadata for a stored event.
    pub fn from_event(event_id: EventId, event: &SamplingEvent) -> Self {
        let season = if event.season.is_empty() {
            event.derived_season()
        } else {
            event.season.clone()
        };
        Self {
            event_id,
            lake: event.location.lake.clone(),
            date: event.location.date.to_string(),
            gear: event.gear.as_str().to_string(),
            season,
            is_finalized: event.is_finalized,
            set_count: event.sets.len(),
            fish_count: event.total_fish_count(),
        }
    }
}

pub const LIST_EVENTS: &str = "list_events";
pub const POST_EVENT: &str = "store_event";
pub const LIST_SEASONS: &str = "list_seasons";
