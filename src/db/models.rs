//! Shared data models re-exported for database layer consumers.

pub use crate::api::{
    EnvironmentalReadings, EventId, EventInfo, FishObservation, GearType, LocationInfo,
    SamplingEvent, Set, SetId, SetKind, SpeciesEntry, SpeciesTable, UtmSpan,
};
pub use crate::models::parse_event_json_str;
