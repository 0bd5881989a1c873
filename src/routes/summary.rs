use crate::api::{EventId, SetId};
use crate::models::CpueValue;
use serde::{Deserialize, Serialize};

// =========================================================
// Event summary types
// =========================================================

/// Per-set effort and catch overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSummary {
    pub set_id: SetId,
    /// "transect" or "net_set"
    pub kind: String,
    /// Effort or soak hours this set contributes; 0 for a pending net
    pub effort_or_soak_hours: f64,
    pub fish_count: u32,
    /// Cached per-set CPUE, unset until the first fish or pull
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpue: Option<f64>,
    /// True for a net that is still soaking
    pub pending: bool,
}

/// Whole-event effort and catch overview.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummaryData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<EventId>,
    pub lake: String,
    pub date: String,
    pub gear: String,
    pub season: String,
    pub is_finalized: bool,
    pub sets: Vec<SetSummary>,
    pub total_fish: u32,
    /// Σ of per-set effort-or-soak hours
    pub total_effort_hours: f64,
    /// Total fish over total effort, "N/A" when the event has no effort
    pub cpue: CpueValue,
    /// Distinct species codes in first-seen order
    pub species: Vec<String>,
    pub pending_nets: usize,
}

/// Route function name constant for the event summary
pub const GET_EVENT_SUMMARY: &str = "get_event_summary";

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> EventSummaryData {
        EventSummaryData {
            event_id: Some(EventId::new(5)),
            lake: "Willow Springs Reservoir".to_string(),
            date: "2024-06-12".to_string(),
            gear: "gillnet".to_string(),
            season: "2024".to_string(),
            is_finalized: false,
            sets: vec![SetSummary {
                set_id: SetId::new(1),
                kind: "net_set".to_string(),
                effort_or_soak_hours: 12.0,
                fish_count: 24,
                cpue: Some(2.0),
                pending: false,
            }],
            total_fish: 24,
            total_effort_hours: 12.0,
            cpue: CpueValue::PerHour(2.0),
            species: vec!["WAE".to_string(), "YP".to_string()],
            pending_nets: 0,
        }
    }

    #[test]
    fn test_event_summary_clone() {
        let cloned = sample_summary().clone();
        assert_eq!(cloned.total_fish, 24);
        assert_eq!(cloned.sets.len(), 1);
        assert_eq!(cloned.cpue, CpueValue::PerHour(2.0));
    }

    #[test]
    fn test_event_summary_debug() {
        let debug_str = format!("{:?}", sample_summary());
        assert!(debug_str.contains("EventSummaryData"));
    }

    #[test]
    fn test_unavailable_cpue_serializes_as_sentinel() {
        let mut summary = sample_summary();
        summary.cpue = CpueValue::Unavailable;
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"cpue\":\"N/A\""));
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_EVENT_SUMMARY, "get_event_summary");
    }
}
