//! Public API surface for the fisheries backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::abundance::AbundanceConditionData;
pub use crate::routes::abundance::AbundanceConditionRow;
pub use crate::routes::angler::AnglerAbundanceData;
pub use crate::routes::angler::AnglerAbundanceRow;
pub use crate::routes::catch_summary::CatchSummaryData;
pub use crate::routes::catch_summary::CatchSummaryRow;
pub use crate::routes::diet::DietCompositionData;
pub use crate::routes::diet::DietSlice;
pub use crate::routes::export::SpreadsheetData;
pub use crate::routes::landing::EventInfo;
pub use crate::routes::length_frequency::LengthFrequencyData;
pub use crate::routes::length_frequency::SizeCategoryMarkers;
pub use crate::routes::report::AbundanceReportRow;
pub use crate::routes::report::CatchReportRow;
pub use crate::routes::report::ReportFormat;
pub use crate::routes::report::ReportMethods;
pub use crate::routes::report::ReportNarrative;
pub use crate::routes::report::ReportPayload;
pub use crate::routes::summary::EventSummaryData;
pub use crate::routes::summary::SetSummary;

use serde::{Deserialize, Serialize};

// ID newtypes generated by the macro in models::macros. Both wrap the
// database primary key type.
crate::define_id_type!(i64, EventId);
crate::define_id_type!(i64, SetId);

pub use crate::models::EnvironmentalReadings;
pub use crate::models::FishObservation;
pub use crate::models::GearType;
pub use crate::models::LocationInfo;
pub use crate::models::SamplingEvent;
pub use crate::models::Set;
pub use crate::models::SetKind;
pub use crate::models::SpeciesEntry;
pub use crate::models::SpeciesTable;

/// UTM coordinates recorded for a set: easting where the transect or net
/// line starts, northing where it ends. Field crews log exactly this pair
/// on the data sheet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UtmSpan {
    /// Easting in meters at the start of the line
    pub start_utm_e: f64,
    /// Northing in meters at the end of the line
    pub end_utm_n: f64,
}

impl UtmSpan {
    pub fn new(start_utm_e: f64, end_utm_n: f64) -> Result<Self, String> {
        if !start_utm_e.is_finite() || !(0.0..1_000_000.0).contains(&start_utm_e) {
            return Err("UTM easting must be between 0 and 1,000,000 meters".to_string());
        }
        if !end_utm_n.is_finite() || !(0.0..10_000_000.0).contains(&end_utm_n) {
            return Err("UTM northing must be between 0 and 10,000,000 meters".to_string());
        }
        Ok(Self {
            start_utm_e,
            end_utm_n,
        })
    }
}
