//! Length-frequency histogram: one-inch bins over a species' measured
//! lengths, with a hard cap on the bin range.

use crate::api::LengthFrequencyData;
use crate::models::{mm_to_inches, SamplingEvent, SpeciesTable};
use crate::routes::length_frequency::SizeCategoryMarkers;

/// Upper bin edge cap in inches. Guards against a mistyped length blowing
/// the bin vector up to absurd sizes.
const MAX_BIN_EDGE_IN: i64 = 100;

/// Compute the length-frequency histogram for one species of an event.
///
/// Lengths are replicated per batch count and converted to inches. Bins
/// are one inch wide spanning `floor(min) - 1` to `ceil(max) + 1`, with
/// the upper edge capped at 100 inches; lengths past the cap land in the
/// last bin instead of being dropped.
///
/// Returns `None` when the species has no measured lengths in the event
/// or is absent from the reference table ("no data", not an error).
pub fn compute_length_frequency(
    event: &SamplingEvent,
    species_table: &SpeciesTable,
    species_code: &str,
) -> Option<LengthFrequencyData> {
    let entry = species_table.get(species_code)?;

    let mut lengths_in: Vec<f64> = Vec::new();
    for set in &event.sets {
        for fish in &set.fish {
            if fish.species != species_code {
                continue;
            }
            if let Some(length) = fish.measured_length() {
                let inches = mm_to_inches(length).value();
                lengths_in.extend(std::iter::repeat(inches).take(fish.count as usize));
            }
        }
    }
    if lengths_in.is_empty() {
        return None;
    }

    let min = lengths_in.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = lengths_in.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_edge = min.floor() as i64 - 1;
    let max_edge = ((max.ceil() as i64) + 1).min(MAX_BIN_EDGE_IN);
    if max_edge <= min_edge {
        // Every length is past the cap; no drawable range remains.
        return None;
    }

    let bin_count = (max_edge - min_edge) as usize;
    let mut counts = vec![0u32; bin_count];
    for length in &lengths_in {
        let index = ((length - min_edge as f64).floor() as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    let bin_labels = (0..bin_count)
        .map(|i| {
            format!(
                "{:.1}-{:.1}",
                (min_edge + i as i64) as f64,
                (min_edge + i as i64 + 1) as f64
            )
        })
        .collect();

    let peak = counts.iter().copied().max().unwrap_or(0);
    let max_y = if peak == 0 { 10.0 } else { peak as f64 * 1.05 };

    let size_markers = entry.psd.map(|psd| SizeCategoryMarkers {
        stock_in: mm_to_inches(psd.stock).value(),
        quality_in: mm_to_inches(psd.quality).value(),
        preferred_in: mm_to_inches(psd.preferred).value(),
        memorable_in: mm_to_inches(psd.memorable).value(),
        trophy_in: mm_to_inches(psd.trophy).value(),
    });

    Some(LengthFrequencyData {
        species_code: entry.code.clone(),
        species_name: entry.name.clone(),
        title: format!("{} Length Frequency Distribution", entry.name),
        bin_labels,
        counts,
        n: lengths_in.len() as u32,
        max_y,
        size_markers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UtmSpan;
    use crate::models::{
        EnvironmentalReadings, FishObservation, GearType, LocationInfo, PsdThresholds,
        SamplingEvent, SpeciesEntry,
    };
    use chrono::NaiveDate;
    use qtty::Seconds;

    fn event_with_lengths(species: &str, lengths_mm: &[f64]) -> SamplingEvent {
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
        let id = event
            .add_transect(
                Seconds::new(3600.0),
                UtmSpan::new(423_500.0, 4_512_300.0).unwrap(),
            )
            .unwrap();
        for length in lengths_mm {
            event
                .add_fish(id, FishObservation::new(species, Some(*length), None))
                .unwrap();
        }
        event
    }

    #[test]
    fn test_no_lengths_is_no_data() {
        let event = event_with_lengths("WAE", &[]);
        let result = compute_length_frequency(&event, &SpeciesTable::builtin(), "WAE");
        assert!(result.is_none());
    }

    #[test]
    fn test_unknown_species_is_no_data() {
        let event = event_with_lengths("ZZZ", &[300.0]);
        let result = compute_length_frequency(&event, &SpeciesTable::builtin(), "ZZZ");
        assert!(result.is_none());
    }

    #[test]
    fn test_bin_edges_and_placement() {
        // 200 mm = 7.87 in, 205 mm = 8.07 in, 795 mm = 31.30 in
        let event = event_with_lengths("WAE", &[200.0, 205.0, 795.0]);
        let data =
            compute_length_frequency(&event, &SpeciesTable::builtin(), "WAE").unwrap();

        // Edges span floor(7.87)-1 = 6 to ceil(31.30)+1 = 33.
        assert_eq!(data.bin_labels.first().unwrap(), "6.0-7.0");
        assert_eq!(data.bin_labels.last().unwrap(), "32.0-33.0");
        assert_eq!(data.counts.len(), 27);
        assert_eq!(data.n, 3);

        // 7.87 in falls in [7-8), 8.07 in [8-9), 31.30 in its own [31-32).
        assert_eq!(data.counts[1], 1);
        assert_eq!(data.counts[2], 1);
        assert_eq!(data.counts[25], 1);
        assert_eq!(data.counts.iter().sum::<u32>(), 3);
    }

    #[test]
    fn test_batch_counts_replicate_lengths() {
        let mut event = event_with_lengths("WAE", &[]);
        let id = event.sets[0].set_id;
        let mut batch = FishObservation::new("WAE", Some(381.0), None);
        batch.count = 4;
        event.add_fish(id, batch).unwrap();

        let data =
            compute_length_frequency(&event, &SpeciesTable::builtin(), "WAE").unwrap();
        assert_eq!(data.n, 4);
        assert_eq!(data.counts.iter().sum::<u32>(), 4);
        // All four replicas share the 15 in bin.
        assert_eq!(data.counts.iter().copied().max().unwrap(), 4);
        assert!((data.max_y - 4.2).abs() < 1e-9);
    }

    #[test]
    fn test_pathological_length_clamps_into_last_bin() {
        // 10 m of fish is a typo, but it must not explode the bin range.
        let event = event_with_lengths("WAE", &[381.0, 10_000.0]);
        let data =
            compute_length_frequency(&event, &SpeciesTable::builtin(), "WAE").unwrap();

        assert_eq!(data.bin_labels.last().unwrap(), "99.0-100.0");
        assert_eq!(*data.counts.last().unwrap(), 1);
        assert_eq!(data.counts.iter().sum::<u32>(), 2);
    }

    #[test]
    fn test_title_uses_common_name() {
        let event = event_with_lengths("WAE", &[381.0]);
        let data =
            compute_length_frequency(&event, &SpeciesTable::builtin(), "WAE").unwrap();
        assert_eq!(data.title, "Walleye Length Frequency Distribution");
        assert!(data.size_markers.is_none());
    }

    #[test]
    fn test_size_markers_converted_to_inches() {
        let table = SpeciesTable::from_entries(vec![SpeciesEntry::new(
            "WAE",
            "Walleye",
            None,
        )
        .with_psd(PsdThresholds::new(250.0, 380.0, 510.0, 630.0, 760.0))]);
        let event = event_with_lengths("WAE", &[381.0]);

        let data = compute_length_frequency(&event, &table, "WAE").unwrap();
        let markers = data.size_markers.unwrap();
        assert!((markers.stock_in - 250.0 / 25.4).abs() < 1e-9);
        assert!((markers.trophy_in - 760.0 / 25.4).abs() < 1e-9);
    }
}
