//! Spreadsheet export: flattens an event into the worksheet row layout the
//! spreadsheet collaborator writes out.

use chrono::Datelike;

use crate::api::SpreadsheetData;
use crate::models::{SamplingEvent, Set, SetKind};

const SET_HEADER: [&str; 20] = [
    "Lake",
    "Observers",
    "Month",
    "Day",
    "Year",
    "Gear",
    "Transect #",
    "Effort_time (sec)",
    "Effort_time (min)",
    "Effort_time (hr)",
    "CPUE",
    "Start UTM_E",
    "End UTM_N",
    "Location",
    "Cond",
    "pH",
    "tdS",
    "Salts",
    "Temp_Water_C",
    "AMPS",
];

const FISH_HEADER: [&str; 6] = ["SPP", "TL_mm", "WT_g", "Sex", "Stomach Content", "Notes"];

/// Numbers print the way they were entered: whole values without a decimal
/// point, fractional values as-is.
fn num(value: f64) -> String {
    format!("{}", value)
}

/// Optional reading cell: `"N/A"` when absent or zero (a zero reading means
/// the probe was not used).
fn reading(value: Option<f64>) -> String {
    match value {
        Some(v) if v != 0.0 => num(v),
        _ => "N/A".to_string(),
    }
}

fn text(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn set_row(event: &SamplingEvent, set: &Set) -> Vec<String> {
    let (effort_sec, effort_min, effort_hr) = match &set.kind {
        SetKind::Transect { effort_time_sec } => (
            num(effort_time_sec.value()),
            format!("{:.2}", effort_time_sec.value() / 60.0),
            "N/A".to_string(),
        ),
        SetKind::NetSet { .. } => (
            "N/A".to_string(),
            "N/A".to_string(),
            match set.soak_hours() {
                Some(soak) if soak.value() != 0.0 => num(soak.value()),
                _ => "N/A".to_string(),
            },
        ),
    };
    let cpue = match set.cpue {
        Some(v) if v != 0.0 => num(v),
        _ => "N/A".to_string(),
    };
    let amps = set.amps.or(event.environmental.amps);
    let date = event.location.date;

    vec![
        text(&event.location.lake, "N/A"),
        text(&event.location.observers, "N/A"),
        date.month().to_string(),
        date.day().to_string(),
        date.year().to_string(),
        event.gear.as_str().to_string(),
        set.set_id.to_string(),
        effort_sec,
        effort_min,
        effort_hr,
        cpue,
        num(set.location.start_utm_e),
        num(set.location.end_utm_n),
        text(&event.location.location, "N/A"),
        reading(event.environmental.conductivity),
        reading(event.environmental.ph),
        reading(event.environmental.tds),
        reading(event.environmental.salts),
        reading(event.environmental.temp_water_c),
        reading(amps),
    ]
}

/// Flatten an event into spreadsheet rows.
///
/// Each set becomes a block: the set header, one data row, the fish
/// header, one row per fish record, and a blank spacer row. The suggested
/// file name is `{lake}_{yyyymmdd}.xlsx` with whitespace collapsed to
/// underscores.
pub fn build_spreadsheet(event: &SamplingEvent) -> SpreadsheetData {
    let lake_part = if event.location.lake.is_empty() {
        "UnknownLake".to_string()
    } else {
        event
            .location
            .lake
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    };
    let date_part = event.location.date.format("%Y%m%d").to_string();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for set in &event.sets {
        rows.push(SET_HEADER.iter().map(|s| s.to_string()).collect());
        rows.push(set_row(event, set));
        rows.push(FISH_HEADER.iter().map(|s| s.to_string()).collect());
        for fish in &set.fish {
            rows.push(vec![
                text(&fish.species, "N/A"),
                fish.measured_length()
                    .map(|l| num(l.value()))
                    .unwrap_or_default(),
                fish.measured_weight()
                    .map(|w| num(w.value()))
                    .unwrap_or_default(),
                fish.sex.clone(),
                fish.stomach_content.clone(),
                fish.notes.clone(),
            ]);
        }
        rows.push(Vec::new());
    }

    SpreadsheetData {
        file_name: format!("{}_{}.xlsx", lake_part, date_part),
        sheet_name: "Data".to_string(),
        rows,
    }
}
