//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! Most metric-table DTOs are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    // Abundance & condition
    AbundanceConditionData, AbundanceConditionRow,
    // Angler abundance
    AnglerAbundanceData, AnglerAbundanceRow,
    // Catch summary
    CatchSummaryData, CatchSummaryRow,
    // Diet composition
    DietCompositionData, DietSlice,
    // Event summary
    EventSummaryData, SetSummary,
    // Landing
    EventInfo,
    // Length frequency
    LengthFrequencyData, SizeCategoryMarkers,
    // Report
    ReportNarrative, ReportPayload,
    // Species reference
    SpeciesEntry,
    // Spreadsheet export
    SpreadsheetData,
};

/// Request body for storing a new sampling event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreEventRequest {
    /// Complete event document as recorded by the field client
    pub event: serde_json::Value,
}

/// Response for event storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreEventResponse {
    /// Metadata of the stored event; a re-upload of the same document
    /// returns the metadata of the event already on file
    pub event: EventInfoDto,
    /// Message about the operation
    pub message: String,
}

/// Event list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventListResponse {
    /// List of events
    pub events: Vec<EventInfoDto>,
    /// Total count
    pub total: usize,
}

/// Season list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonListResponse {
    /// Season labels, most recent first
    pub seasons: Vec<String>,
    /// Total count
    pub total: usize,
}

/// Species reference table response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesListResponse {
    /// All known species entries
    pub species: Vec<SpeciesEntry>,
    /// Total count
    pub total: usize,
}

/// Query parameters for the report endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportQuery {
    /// Output format for the external document generator ("docx" or "pdf")
    #[serde(default)]
    pub format: Option<String>,
}

/// Response for the report endpoint: the payload forwarded to the external
/// document generator, plus the format it should render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResponse {
    /// Requested output format
    pub format: String,
    /// Assembled generator payload
    pub payload: ReportPayload,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// Event info DTO for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInfoDto {
    /// Event ID
    pub event_id: i64,
    /// Lake name
    pub lake: String,
    /// Event date (ISO, YYYY-MM-DD)
    pub date: String,
    /// Gear used for the event
    pub gear: String,
    /// Sampling season
    pub season: String,
    /// Whether the crew has signed off on the event
    pub is_finalized: bool,
    /// Number of sets
    pub set_count: usize,
    /// Number of fish across all sets (batch-aware)
    pub fish_count: u32,
}

impl From<EventInfo> for EventInfoDto {
    fn from(info: EventInfo) -> Self {
        Self {
            event_id: info.event_id.value(),
            lake: info.lake,
            date: info.date,
            gear: info.gear,
            season: info.season,
            is_finalized: info.is_finalized,
            set_count: info.set_count,
            fish_count: info.fish_count,
        }
    }
}
