use serde::{Deserialize, Serialize};

// =========================================================
// Angler abundance types (imperial units)
// =========================================================

/// Per-species abundance statistics in angler units (inches and pounds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnglerAbundanceRow {
    /// Species field code, matching the metric table row it mirrors
    pub species: String,
    /// Number of individuals (batch-aware)
    pub count: u32,
    /// Fish per hour of effort, two decimals, 0 when the event has no effort
    pub cpue: f64,
    /// `"min-max"` across measured lengths in inches, `"-"` when unmeasured
    pub length_range_in: String,
    /// Mean length in inches, one decimal, 0 when nothing was measured
    pub mean_length_in: f64,
    /// `"min-max"` across measured weights in pounds, `"-"` when unmeasured
    pub weight_range_lb: String,
    /// Mean weight in pounds, two decimals, 0 when nothing was weighed
    pub mean_weight_lb: f64,
}

/// Complete angler abundance table for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnglerAbundanceData {
    pub rows: Vec<AnglerAbundanceRow>,
}

/// Route function name constant for angler abundance
pub const GET_ANGLER_ABUNDANCE: &str = "get_angler_abundance";
