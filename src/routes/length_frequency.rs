use serde::{Deserialize, Serialize};

// =========================================================
// Length-frequency histogram types
// =========================================================

/// Size-category thresholds in inches, drawn on the histogram as vertical
/// markers when the species has published values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SizeCategoryMarkers {
    pub stock_in: f64,
    pub quality_in: f64,
    pub preferred_in: f64,
    pub memorable_in: f64,
    pub trophy_in: f64,
}

/// One-inch length-frequency histogram for a single species.
///
/// The metrics endpoint returns `null` instead of this structure when the
/// species has no measured lengths in the event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LengthFrequencyData {
    pub species_code: String,
    pub species_name: String,
    /// Chart title, e.g. "Walleye Length Frequency Distribution"
    pub title: String,
    /// `"lo-hi"` labels, one per bin, in ascending order
    pub bin_labels: Vec<String>,
    pub counts: Vec<u32>,
    /// Sample size (number of measured individuals, batch-aware)
    pub n: u32,
    /// Suggested y-axis ceiling for the charting collaborator
    pub max_y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_markers: Option<SizeCategoryMarkers>,
}

/// Route function name constant for the length-frequency histogram
pub const GET_LENGTH_FREQUENCY: &str = "get_length_frequency";

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> LengthFrequencyData {
        LengthFrequencyData {
            species_code: "WAE".to_string(),
            species_name: "Walleye".to_string(),
            title: "Walleye Length Frequency Distribution".to_string(),
            bin_labels: vec!["11.0-12.0".to_string(), "12.0-13.0".to_string()],
            counts: vec![3, 1],
            n: 4,
            max_y: 3.15,
            size_markers: None,
        }
    }

    #[test]
    fn test_length_frequency_clone() {
        let cloned = sample_data().clone();
        assert_eq!(cloned.bin_labels.len(), cloned.counts.len());
        assert_eq!(cloned.n, 4);
    }

    #[test]
    fn test_length_frequency_debug() {
        let debug_str = format!("{:?}", sample_data());
        assert!(debug_str.contains("LengthFrequencyData"));
    }

    #[test]
    fn test_absent_markers_omitted_from_json() {
        let json = serde_json::to_string(&sample_data()).unwrap();
        assert!(!json.contains("size_markers"));
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_LENGTH_FREQUENCY, "get_length_frequency");
    }
}
