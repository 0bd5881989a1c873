//! Monitoring report assembly: flattens the metrics tables into the
//! pre-formatted payload consumed by the external document generator.

use crate::api::{AbundanceReportRow, CatchReportRow, ReportMethods, ReportPayload};
use crate::models::{PsdThresholds, SamplingEvent, SpeciesTable};
use crate::routes::report::ReportNarrative;
use crate::services::abundance::compute_abundance_condition;
use crate::services::catch_summary::compute_catch_summary;
use crate::services::effort::total_effort_hours;

struct PsdCells {
    psd: String,
    psd_p: String,
    psd_m: String,
    psd_t: String,
}

impl PsdCells {
    fn unavailable() -> Self {
        Self {
            psd: "-".to_string(),
            psd_p: "-".to_string(),
            psd_m: "-".to_string(),
            psd_t: "-".to_string(),
        }
    }
}

/// Incremental PSD indices: each is the share of stock-length fish at or
/// above the next size category, as a whole-number percentage. All four
/// are `"-"` when the species has no thresholds or no stock-length fish.
fn psd_cells(lengths_mm: &[f64], thresholds: Option<&PsdThresholds>) -> PsdCells {
    let Some(t) = thresholds else {
        return PsdCells::unavailable();
    };
    let stock = lengths_mm.iter().filter(|l| **l >= t.stock.value()).count();
    if stock == 0 {
        return PsdCells::unavailable();
    }
    let index = |edge: f64| -> String {
        let n = lengths_mm.iter().filter(|l| **l >= edge).count();
        format!("{}", (n as f64 / stock as f64 * 100.0).round())
    };
    PsdCells {
        psd: index(t.quality.value()),
        psd_p: index(t.preferred.value()),
        psd_m: index(t.memorable.value()),
        psd_t: index(t.trophy.value()),
    }
}

/// Measured lengths per species (batch-replicated), for the PSD columns.
fn lengths_by_species(event: &SamplingEvent) -> Vec<(String, Vec<f64>)> {
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for set in &event.sets {
        for fish in &set.fish {
            if fish.species.is_empty() {
                continue;
            }
            let Some(length) = fish.measured_length() else {
                continue;
            };
            let index = match groups.iter().position(|(code, _)| code == &fish.species) {
                Some(i) => i,
                None => {
                    groups.push((fish.species.clone(), Vec::new()));
                    groups.len() - 1
                }
            };
            groups[index]
                .1
                .extend(std::iter::repeat(length.value()).take(fish.count as usize));
        }
    }
    groups
}

fn display_name(species_table: &SpeciesTable, code: &str) -> String {
    species_table
        .get(code)
        .map(|entry| entry.name.clone())
        .unwrap_or_else(|| code.to_string())
}

fn or_default(value: &str, fallback: String) -> String {
    if value.trim().is_empty() {
        fallback
    } else {
        value.to_string()
    }
}

/// Assemble the document-generator payload for one event.
///
/// Numeric tables come from the metrics engine; free-text sections come
/// from the narrative, falling back to values derived from the event
/// (date, gear, computed effort, measured water temperature, observed
/// species list). Every cell is pre-formatted the way the generator
/// prints it, with `"-"` for unavailable statistics.
pub fn build_report_payload(
    event: &SamplingEvent,
    species_table: &SpeciesTable,
    narrative: &ReportNarrative,
) -> ReportPayload {
    let abundance = compute_abundance_condition(event, species_table);
    let catch = compute_catch_summary(event);
    let lengths = lengths_by_species(event);

    let abundance_table = abundance
        .rows
        .iter()
        .map(|row| {
            let species_lengths = lengths
                .iter()
                .find(|(code, _)| code == &row.species)
                .map(|(_, values)| values.as_slice())
                .unwrap_or(&[]);
            let thresholds = species_table
                .get(&row.species)
                .and_then(|entry| entry.psd.as_ref());
            let psd = psd_cells(species_lengths, thresholds);
            let measured = row.range_length_mm != "-";
            AbundanceReportRow {
                species: display_name(species_table, &row.species),
                cpue: format!("{:.2}", row.cpue),
                mean_tl: if measured {
                    format!("{:.1}", row.mean_length_mm)
                } else {
                    "0".to_string()
                },
                range_tl: row.range_length_mm.clone(),
                mean_wr: row
                    .mean_condition
                    .map(|v| format!("{:.1}", v))
                    .unwrap_or_else(|| "-".to_string()),
                psd: psd.psd,
                psd_p: psd.psd_p,
                psd_m: psd.psd_m,
                psd_t: psd.psd_t,
            }
        })
        .collect();

    let catch_summary = catch
        .rows
        .iter()
        .map(|row| CatchReportRow {
            species: display_name(species_table, &row.species),
            number: row.number.to_string(),
            pct_number: if catch.total_number > 0 {
                format!("{:.1}", row.number_percent)
            } else {
                "0".to_string()
            },
            biomass: format!("{:.2}", row.biomass_kg),
            pct_biomass: if catch.total_biomass_kg > 0.0 {
                format!("{:.1}", row.biomass_percent)
            } else {
                "0".to_string()
            },
        })
        .collect();

    let default_targets = || {
        event
            .species_codes()
            .iter()
            .map(|code| display_name(species_table, code))
            .collect::<Vec<_>>()
    };
    let target_species = if narrative.target_species.is_empty() {
        default_targets()
    } else {
        narrative.target_species.clone()
    };

    ReportPayload {
        reservoir: event.location.lake.clone(),
        dates: or_default(&narrative.dates, event.location.date.to_string()),
        stocking_strategy: narrative.stocking_strategy.clone(),
        methods: ReportMethods {
            gear: event.gear.to_string(),
            effort: or_default(
                &narrative.effort_description,
                format!("{:.2} hours", total_effort_hours(event).value()),
            ),
            temp: or_default(
                &narrative.temperature,
                event
                    .environmental
                    .temp_water_c
                    .map(|t| t.to_string())
                    .unwrap_or_default(),
            ),
            notes: narrative.method_notes.clone(),
            target_species,
        },
        abundance_table,
        catch_summary,
        comments: narrative.comments.clone(),
        suggestions: narrative.suggestions.clone(),
    }
}
