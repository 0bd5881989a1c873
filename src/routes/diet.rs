use serde::{Deserialize, Serialize};

// =========================================================
// Diet composition types
// =========================================================

/// One stomach-content category and how many records reported it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietSlice {
    pub label: String,
    pub count: u32,
}

/// Diet composition pie-chart data for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DietCompositionData {
    pub title: String,
    /// Categories in first-seen order across the event's fish records
    pub slices: Vec<DietSlice>,
    pub total: u32,
}

/// Route function name constant for diet composition
pub const GET_DIET_COMPOSITION: &str = "get_diet_composition";
