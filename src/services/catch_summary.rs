//! Catch summary table: per-species counts and biomass shares.

use crate::api::{CatchSummaryData, CatchSummaryRow};
use crate::models::{round1, round2, safe_divide, SamplingEvent};

struct CatchTally {
    count: u32,
    biomass_g: f64,
}

/// Compute the catch summary for one event.
///
/// Accumulates per species across all sets: `count` individuals and
/// `weight * count` grams of biomass, so a batch record of five fish at
/// 200 g contributes a full kilogram. Species order follows first
/// appearance in the event; records with a blank species are skipped.
/// Percent columns are shares of the event totals, `0` when the
/// corresponding total is zero.
pub fn compute_catch_summary(event: &SamplingEvent) -> CatchSummaryData {
    let mut tallies: Vec<(String, CatchTally)> = Vec::new();

    for set in &event.sets {
        for fish in &set.fish {
            if fish.species.is_empty() {
                continue;
            }
            let weight_g = fish.measured_weight().map(|w| w.value()).unwrap_or(0.0);
            match tallies.iter_mut().find(|(code, _)| code == &fish.species) {
                Some((_, tally)) => {
                    tally.count += fish.count;
                    tally.biomass_g += weight_g * fish.count as f64;
                }
                None => tallies.push((
                    fish.species.clone(),
                    CatchTally {
                        count: fish.count,
                        biomass_g: weight_g * fish.count as f64,
                    },
                )),
            }
        }
    }

    let total_number: u32 = tallies.iter().map(|(_, t)| t.count).sum();
    let total_biomass_g: f64 = tallies.iter().map(|(_, t)| t.biomass_g).sum();

    let rows = tallies
        .into_iter()
        .map(|(species, tally)| CatchSummaryRow {
            species,
            number: tally.count,
            number_percent: round1(
                safe_divide(tally.count as f64 * 100.0, total_number as f64).unwrap_or(0.0),
            ),
            biomass_kg: round2(tally.biomass_g / 1000.0),
            biomass_percent: round1(
                safe_divide(tally.biomass_g * 100.0, total_biomass_g).unwrap_or(0.0),
            ),
        })
        .collect();

    CatchSummaryData {
        rows,
        total_number,
        total_biomass_kg: round2(total_biomass_g / 1000.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UtmSpan;
    use crate::models::{
        EnvironmentalReadings, FishObservation, GearType, LocationInfo, SamplingEvent,
    };
    use chrono::NaiveDate;
    use qtty::Seconds;

    fn utm() -> UtmSpan {
        UtmSpan::new(423_500.0, 4_512_300.0).unwrap()
    }

    fn electrofishing_event() -> SamplingEvent {
        SamplingEvent::new(
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
        .unwrap()
    }

    #[test]
    fn test_empty_event_yields_no_rows() {
        let event = electrofishing_event();
        let summary = compute_catch_summary(&event);
        assert!(summary.rows.is_empty());
        assert_eq!(summary.total_number, 0);
        assert_eq!(summary.total_biomass_kg, 0.0);
    }

    #[test]
    fn test_batch_record_contributes_count_times_weight() {
        let mut event = electrofishing_event();
        let id = event.add_transect(Seconds::new(3600.0), utm()).unwrap();
        let mut fish = FishObservation::new("BC", None, Some(200.0));
        fish.count = 5;
        event.add_fish(id, fish).unwrap();

        let summary = compute_catch_summary(&event);
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].number, 5);
        // 5 x 200 g = 1 kg, not 0.2 kg
        assert_eq!(summary.rows[0].biomass_kg, 1.0);
    }

    #[test]
    fn test_percent_shares_sum_to_hundred() {
        let mut event = electrofishing_event();
        let id = event.add_transect(Seconds::new(3600.0), utm()).unwrap();
        event
            .add_fish(id, FishObservation::new("WAE", Some(400.0), Some(600.0)))
            .unwrap();
        event
            .add_fish(id, FishObservation::new("WAE", Some(420.0), Some(700.0)))
            .unwrap();
        event
            .add_fish(id, FishObservation::new("YP", Some(200.0), Some(100.0)))
            .unwrap();

        let summary = compute_catch_summary(&event);
        let number_pct: f64 = summary.rows.iter().map(|r| r.number_percent).sum();
        let biomass_pct: f64 = summary.rows.iter().map(|r| r.biomass_percent).sum();
        assert!((number_pct - 100.0).abs() < 0.2);
        assert!((biomass_pct - 100.0).abs() < 0.2);
    }

    #[test]
    fn test_unweighed_fish_count_but_add_no_biomass() {
        let mut event = electrofishing_event();
        let id = event.add_transect(Seconds::new(3600.0), utm()).unwrap();
        event
            .add_fish(id, FishObservation::new("WAE", Some(400.0), None))
            .unwrap();
        event
            .add_fish(id, FishObservation::new("WAE", Some(410.0), Some(500.0)))
            .unwrap();

        let summary = compute_catch_summary(&event);
        assert_eq!(summary.rows[0].number, 2);
        assert_eq!(summary.rows[0].biomass_kg, 0.5);
        // The only weighed biomass belongs to this species.
        assert_eq!(summary.rows[0].biomass_percent, 100.0);
    }

    #[test]
    fn test_blank_species_skipped_and_order_preserved() {
        let mut event = electrofishing_event();
        let id = event.add_transect(Seconds::new(3600.0), utm()).unwrap();
        for species in ["YP", "", "WAE", "YP"] {
            event
                .add_fish(id, FishObservation::new(species, None, None))
                .unwrap();
        }

        let summary = compute_catch_summary(&event);
        let codes: Vec<&str> = summary.rows.iter().map(|r| r.species.as_str()).collect();
        assert_eq!(codes, vec!["YP", "WAE"]);
        assert_eq!(summary.total_number, 3);
    }

    #[test]
    fn test_zero_biomass_percent_is_zero_not_nan() {
        let mut event = electrofishing_event();
        let id = event.add_transect(Seconds::new(3600.0), utm()).unwrap();
        event
            .add_fish(id, FishObservation::new("WAE", Some(400.0), None))
            .unwrap();

        let summary = compute_catch_summary(&event);
        assert_eq!(summary.rows[0].biomass_percent, 0.0);
        assert_eq!(summary.rows[0].number_percent, 100.0);
    }
}
