use serde::{Deserialize, Serialize};

// =========================================================
// Abundance & condition types
// =========================================================

/// Per-species abundance and condition statistics in metric units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbundanceConditionRow {
    pub species: String,
    /// Number of individuals (batch-aware)
    pub count: u32,
    /// Fish per hour of effort, two decimals, 0 when the event has no effort
    pub cpue: f64,
    /// Mean total length in mm, one decimal, 0 when nothing was measured
    pub mean_length_mm: f64,
    /// `"min-max"` across measured lengths, `"-"` when nothing was measured
    pub range_length_mm: String,
    /// Mean weight in grams, one decimal, 0 when nothing was weighed
    pub mean_weight_g: f64,
    /// `"min-max"` across measured weights, `"-"` when nothing was weighed
    pub range_weight_g: String,
    /// Mean relative weight (Wr) or Fulton K, one decimal; absent when no
    /// fish had both length and weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_condition: Option<f64>,
    /// True when the species has no standard-weight coefficients and the
    /// condition column fell back to Fulton's K
    pub used_k_factor: bool,
}

/// Complete abundance and condition table for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AbundanceConditionData {
    pub rows: Vec<AbundanceConditionRow>,
    /// Denominator shared by every row's CPUE
    pub total_effort_hours: f64,
}

/// Route function name constant for abundance & condition
pub const GET_ABUNDANCE_CONDITION: &str = "get_abundance_condition";
