use serde::{Deserialize, Serialize};

// =========================================================
// Monitoring report types
// =========================================================
//
// The payload shapes here are consumed by an external document generator
// that renders the Word/PDF monitoring report. Its field names are part of
// that service's contract, so the camelCase keys are pinned with explicit
// serde renames and must not drift.

/// Output format understood by the document generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Docx,
    Pdf,
}

impl ReportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Docx => "docx",
            ReportFormat::Pdf => "pdf",
        }
    }
}

/// Methods section of the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportMethods {
    pub gear: String,
    pub effort: String,
    pub temp: String,
    pub notes: String,
    #[serde(rename = "targetSpecies")]
    pub target_species: Vec<String>,
}

/// One row of the report's abundance table. Cells are pre-formatted
/// strings; unavailable statistics are rendered as `"-"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbundanceReportRow {
    pub species: String,
    pub cpue: String,
    #[serde(rename = "meanTL")]
    pub mean_tl: String,
    #[serde(rename = "rangeTL")]
    pub range_tl: String,
    #[serde(rename = "meanWr")]
    pub mean_wr: String,
    pub psd: String,
    #[serde(rename = "psdP")]
    pub psd_p: String,
    #[serde(rename = "psdM")]
    pub psd_m: String,
    #[serde(rename = "psdT")]
    pub psd_t: String,
}

/// One row of the report's catch summary table, pre-formatted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchReportRow {
    pub species: String,
    pub number: String,
    #[serde(rename = "pctNumber")]
    pub pct_number: String,
    pub biomass: String,
    #[serde(rename = "pctBiomass")]
    pub pct_biomass: String,
}

/// Complete document-generator payload for one finalized event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPayload {
    pub reservoir: String,
    pub dates: String,
    #[serde(rename = "stockingStrategy")]
    pub stocking_strategy: String,
    pub methods: ReportMethods,
    #[serde(rename = "abundanceTable")]
    pub abundance_table: Vec<AbundanceReportRow>,
    #[serde(rename = "catchSummary")]
    pub catch_summary: Vec<CatchReportRow>,
    pub comments: String,
    pub suggestions: String,
}

/// Free-text report sections supplied by the biologist. Blank fields fall
/// back to values derived from the event itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportNarrative {
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub stocking_strategy: String,
    #[serde(default)]
    pub effort_description: String,
    #[serde(default)]
    pub temperature: String,
    #[serde(default)]
    pub method_notes: String,
    #[serde(default)]
    pub target_species: Vec<String>,
    #[serde(default)]
    pub comments: String,
    #[serde(default)]
    pub suggestions: String,
}

/// Route function name constant for the report payload
pub const GET_REPORT_PAYLOAD: &str = "get_report_payload";

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> ReportPayload {
        ReportPayload {
            reservoir: "Willow Springs Reservoir".to_string(),
            dates: "2024-06-12".to_string(),
            stocking_strategy: "Annual walleye fry".to_string(),
            methods: ReportMethods {
                gear: "electrofishing".to_string(),
                effort: "1.50 hours".to_string(),
                temp: "18.5".to_string(),
                notes: String::new(),
                target_species: vec!["Walleye".to_string()],
            },
            abundance_table: vec![AbundanceReportRow {
                species: "Walleye".to_string(),
                cpue: "12.00".to_string(),
                mean_tl: "412.5".to_string(),
                range_tl: "310-552".to_string(),
                mean_wr: "96.4".to_string(),
                psd: "45".to_string(),
                psd_p: "12".to_string(),
                psd_m: "-".to_string(),
                psd_t: "-".to_string(),
            }],
            catch_summary: vec![CatchReportRow {
                species: "Walleye".to_string(),
                number: "18".to_string(),
                pct_number: "75.0".to_string(),
                biomass: "12.32".to_string(),
                pct_biomass: "81.3".to_string(),
            }],
            comments: "Strong year class.".to_string(),
            suggestions: "Continue current stocking rate.".to_string(),
        }
    }

    #[test]
    fn test_report_payload_clone() {
        let cloned = sample_payload().clone();
        assert_eq!(cloned.reservoir, "Willow Springs Reservoir");
        assert_eq!(cloned.abundance_table.len(), 1);
    }

    #[test]
    fn test_report_payload_debug() {
        let debug_str = format!("{:?}", sample_payload());
        assert!(debug_str.contains("ReportPayload"));
    }

    #[test]
    fn test_generator_contract_field_names() {
        // The external document generator matches on these exact keys.
        let json = serde_json::to_string(&sample_payload()).unwrap();
        for key in [
            "\"reservoir\"",
            "\"dates\"",
            "\"stockingStrategy\"",
            "\"methods\"",
            "\"targetSpecies\"",
            "\"abundanceTable\"",
            "\"meanTL\"",
            "\"rangeTL\"",
            "\"meanWr\"",
            "\"psd\"",
            "\"psdP\"",
            "\"psdM\"",
            "\"psdT\"",
            "\"catchSummary\"",
            "\"pctNumber\"",
            "\"pctBiomass\"",
            "\"comments\"",
            "\"suggestions\"",
        ] {
            assert!(json.contains(key), "payload JSON is missing {}", key);
        }
    }

    #[test]
    fn test_report_payload_round_trip() {
        let payload = sample_payload();
        let json = serde_json::to_string(&payload).unwrap();
        let back: ReportPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn test_report_format_serde() {
        assert_eq!(serde_json::to_string(&ReportFormat::Docx).unwrap(), "\"docx\"");
        assert_eq!(serde_json::to_string(&ReportFormat::Pdf).unwrap(), "\"pdf\"");
        let format: ReportFormat = serde_json::from_str("\"pdf\"").unwrap();
        assert_eq!(format, ReportFormat::Pdf);
        assert_eq!(format.as_str(), "pdf");
    }

    #[test]
    fn test_narrative_defaults() {
        let narrative: ReportNarrative = serde_json::from_str("{}").unwrap();
        assert!(narrative.dates.is_empty());
        assert!(narrative.target_species.is_empty());
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_REPORT_PAYLOAD, "get_report_payload");
    }
}
