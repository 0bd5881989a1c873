//! Abundance and condition table: per-species CPUE, size statistics, and
//! relative weight with the Fulton-K fallback.

use crate::api::{AbundanceConditionData, AbundanceConditionRow};
use crate::models::{fulton_condition_factor, round1, SamplingEvent, SpeciesTable};
use crate::services::effort::{species_cpue, total_effort_hours};

#[derive(Default)]
struct SpeciesStats {
    count: u32,
    /// Lengths in mm, one entry per individual (batch records replicated)
    lengths: Vec<f64>,
    /// Weights in grams, same replication rule
    weights: Vec<f64>,
    /// Wr or K values for individuals with both measurements
    condition: Vec<f64>,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// `"min-max"` over the collected values, `"-"` when nothing was measured.
/// Values print the way they were recorded (no forced decimals).
fn range_label(values: &[f64]) -> String {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(*v);
        max = max.max(*v);
    }
    if values.is_empty() {
        "-".to_string()
    } else {
        format!("{}-{}", min, max)
    }
}

/// Compute the abundance and condition table for one event.
///
/// Groups individuals by species (batch-aware), then reports per species:
/// CPUE against the event's total effort-or-soak hours, mean and range of
/// measured lengths and weights, and a condition score. Condition uses
/// relative weight when the species has standard-weight coefficients in
/// the reference table and Fulton's K otherwise; the lookup is per-species,
/// so one row never mixes the two formulas.
pub fn compute_abundance_condition(
    event: &SamplingEvent,
    species_table: &SpeciesTable,
) -> AbundanceConditionData {
    let total_effort = total_effort_hours(event);
    let mut stats: Vec<(String, SpeciesStats)> = Vec::new();

    for set in &event.sets {
        for fish in &set.fish {
            if fish.species.is_empty() {
                continue;
            }
            let index = match stats.iter().position(|(code, _)| code == &fish.species) {
                Some(i) => i,
                None => {
                    stats.push((fish.species.clone(), SpeciesStats::default()));
                    stats.len() - 1
                }
            };
            let slot = &mut stats[index].1;
            let replicate = fish.count as usize;
            slot.count += fish.count;

            let length = fish.measured_length();
            let weight = fish.measured_weight();
            if let Some(length) = length {
                slot.lengths
                    .extend(std::iter::repeat(length.value()).take(replicate));
            }
            if let Some(weight) = weight {
                slot.weights
                    .extend(std::iter::repeat(weight.value()).take(replicate));
            }
            if let (Some(length), Some(weight)) = (length, weight) {
                let coefficients = species_table
                    .get(&fish.species)
                    .and_then(|entry| entry.length_weight);
                let value = match coefficients {
                    Some(lw) => lw.relative_weight(length, weight),
                    None => fulton_condition_factor(length, weight),
                };
                slot.condition
                    .extend(std::iter::repeat(value).take(replicate));
            }
        }
    }

    let rows = stats
        .into_iter()
        .map(|(species, stats)| {
            let used_k_factor = species_table
                .get(&species)
                .and_then(|entry| entry.length_weight)
                .is_none();
            AbundanceConditionRow {
                count: stats.count,
                cpue: species_cpue(stats.count, total_effort),
                mean_length_mm: mean(&stats.lengths).map(round1).unwrap_or(0.0),
                range_length_mm: range_label(&stats.lengths),
                mean_weight_g: mean(&stats.weights).map(round1).unwrap_or(0.0),
                range_weight_g: range_label(&stats.weights),
                mean_condition: mean(&stats.condition).map(round1),
                used_k_factor,
                species,
            }
        })
        .collect();

    AbundanceConditionData {
        rows,
        total_effort_hours: total_effort.value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UtmSpan;
    use crate::models::{
        EnvironmentalReadings, FishObservation, GearType, LocationInfo, SamplingEvent,
    };
    use chrono::{NaiveDate, TimeZone, Utc};
    use qtty::Seconds;

    fn utm() -> UtmSpan {
        UtmSpan::new(423_500.0, 4_512_300.0).unwrap()
    }

    fn event_with_transect(effort_sec: f64) -> SamplingEvent {
        let mut event = SamplingEvent::new(
            LocationInfo {
                lake: "Crystal Lake".to_string(),
                location: String::new(),
                date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
                observers: "JD".to_string(),
                field_notes: String::new(),
            },
            EnvironmentalReadings::default(),
            GearType::Electrofishing,
        )
        .unwrap();
        event
            .add_transect(Seconds::new(effort_sec), utm())
            .unwrap();
        event
    }

    fn add(event: &mut SamplingEvent, species: &str, length: Option<f64>, weight: Option<f64>) {
        let id = event.sets[0].set_id;
        event
            .add_fish(id, FishObservation::new(species, length, weight))
            .unwrap();
    }

    #[test]
    fn test_empty_event_yields_no_rows() {
        let event = event_with_transect(3600.0);
        let data = compute_abundance_condition(&event, &SpeciesTable::builtin());
        assert!(data.rows.is_empty());
        assert_eq!(data.total_effort_hours, 1.0);
    }

    #[test]
    fn test_mean_and_range_of_lengths() {
        let mut event = event_with_transect(3600.0);
        add(&mut event, "WAE", Some(300.0), None);
        add(&mut event, "WAE", Some(310.0), None);
        add(&mut event, "WAE", Some(320.0), None);

        let data = compute_abundance_condition(&event, &SpeciesTable::builtin());
        let row = &data.rows[0];
        assert_eq!(row.count, 3);
        assert_eq!(row.mean_length_mm, 310.0);
        assert_eq!(row.range_length_mm, "300-320");
        assert_eq!(row.mean_weight_g, 0.0);
        assert_eq!(row.range_weight_g, "-");
        assert!(row.mean_condition.is_none());
    }

    #[test]
    fn test_batch_replication_weights_the_mean() {
        let mut event = event_with_transect(3600.0);
        let id = event.sets[0].set_id;
        let mut batch = FishObservation::new("WAE", Some(300.0), None);
        batch.count = 3;
        event.add_fish(id, batch).unwrap();
        add(&mut event, "WAE", Some(390.0), None);

        let data = compute_abundance_condition(&event, &SpeciesTable::builtin());
        // (3*300 + 390) / 4, not (300 + 390) / 2
        assert_eq!(data.rows[0].mean_length_mm, 322.5);
        assert_eq!(data.rows[0].count, 4);
    }

    #[test]
    fn test_relative_weight_for_species_with_coefficients() {
        let mut event = event_with_transect(3600.0);
        // A 400 mm walleye at its standard weight scores Wr = 100.
        add(&mut event, "WAE", Some(400.0), Some(663.05));

        let data = compute_abundance_condition(&event, &SpeciesTable::builtin());
        let row = &data.rows[0];
        assert!(!row.used_k_factor);
        assert_eq!(row.mean_condition, Some(100.0));
    }

    #[test]
    fn test_k_factor_fallback_for_unknown_species() {
        let mut event = event_with_transect(3600.0);
        add(&mut event, "ZZZ", Some(300.0), Some(500.0));

        let data = compute_abundance_condition(&event, &SpeciesTable::builtin());
        let row = &data.rows[0];
        assert!(row.used_k_factor);
        // (500 / 300^3) * 100000 = 18.52, one decimal
        assert_eq!(row.mean_condition, Some(18.5));
    }

    #[test]
    fn test_k_factor_for_species_without_coefficients() {
        // Common carp is in the table but has no standard-weight equation.
        let mut event = event_with_transect(3600.0);
        add(&mut event, "CC", Some(500.0), Some(1800.0));

        let data = compute_abundance_condition(&event, &SpeciesTable::builtin());
        assert!(data.rows[0].used_k_factor);
        assert!(data.rows[0].mean_condition.is_some());
    }

    #[test]
    fn test_cpue_against_total_event_effort() {
        let mut event = event_with_transect(1800.0);
        event.add_transect(Seconds::new(1800.0), utm()).unwrap();
        for _ in 0..5 {
            add(&mut event, "WAE", None, None);
        }

        let data = compute_abundance_condition(&event, &SpeciesTable::builtin());
        // 5 fish over 1.0 total hour
        assert_eq!(data.rows[0].cpue, 5.0);
    }

    #[test]
    fn test_zero_effort_cpue_is_zero() {
        let mut event = SamplingEvent::new(
            LocationInfo {
                lake: "Crystal Lake".to_string(),
                location: String::new(),
                date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
                observers: "JD".to_string(),
                field_notes: String::new(),
            },
            EnvironmentalReadings::default(),
            GearType::Gillnet,
        )
        .unwrap();
        let set_time = Utc.with_ymd_and_hms(2024, 6, 12, 18, 0, 0).unwrap();
        let id = event.add_net_set(set_time, utm()).unwrap();
        event.add_fish(id, FishObservation::batch("YP", 4)).unwrap();

        let data = compute_abundance_condition(&event, &SpeciesTable::builtin());
        assert_eq!(data.rows[0].cpue, 0.0);
        assert_eq!(data.total_effort_hours, 0.0);
    }
}
