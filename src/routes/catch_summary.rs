use serde::{Deserialize, Serialize};

// =========================================================
// Catch summary types
// =========================================================

/// One species' share of the catch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchSummaryRow {
    pub species: String,
    /// Number of individuals caught (batch-aware)
    pub number: u32,
    /// Share of the total count, one decimal, 0 when nothing was counted
    pub number_percent: f64,
    /// Total biomass in kilograms, two decimals
    pub biomass_kg: f64,
    /// Share of the total biomass, one decimal, 0 when nothing was weighed
    pub biomass_percent: f64,
}

/// Complete catch summary table for one event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchSummaryData {
    pub rows: Vec<CatchSummaryRow>,
    pub total_number: u32,
    pub total_biomass_kg: f64,
}

/// Route function name constant for the catch summary
pub const GET_CATCH_SUMMARY: &str = "get_catch_summary";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catch_summary_row_clone() {
        let row = CatchSummaryRow {
            species: "WAE".to_string(),
            number: 42,
            number_percent: 61.8,
            biomass_kg: 27.35,
            biomass_percent: 70.2,
        };
        let cloned = row.clone();
        assert_eq!(cloned.species, "WAE");
        assert_eq!(cloned.number, 42);
        assert_eq!(cloned.biomass_kg, 27.35);
    }

    #[test]
    fn test_catch_summary_data_debug() {
        let data = CatchSummaryData {
            rows: vec![],
            total_number: 0,
            total_biomass_kg: 0.0,
        };
        let debug_str = format!("{:?}", data);
        assert!(debug_str.contains("CatchSummaryData"));
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_CATCH_SUMMARY, "get_catch_summary");
    }
}
