//! Angler abundance table: the same grouping as the abundance table but in
//! inches and pounds, converted before aggregation.

use crate::api::{AnglerAbundanceData, AnglerAbundanceRow};
use crate::models::{grams_to_pounds, mm_to_inches, round1, round2, SamplingEvent};
use crate::services::effort::{species_cpue, total_effort_hours};

#[derive(Default)]
struct ImperialStats {
    count: u32,
    lengths_in: Vec<f64>,
    weights_lb: Vec<f64>,
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

fn range_label(values: &[f64], decimals: usize) -> String {
    if values.is_empty() {
        return "-".to_string();
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(*v);
        max = max.max(*v);
    }
    format!("{:.prec$}-{:.prec$}", min, max, prec = decimals)
}

/// Compute the angler abundance table for one event.
///
/// Lengths are converted mm to inches and weights g to pounds before any
/// mean or range is taken, so the printed ranges are true imperial
/// extremes rather than converted metric ones.
pub fn compute_angler_abundance(event: &SamplingEvent) -> AnglerAbundanceData {
    let total_effort = total_effort_hours(event);
    let mut stats: Vec<(String, ImperialStats)> = Vec::new();

    for set in &event.sets {
        for fish in &set.fish {
            if fish.species.is_empty() {
                continue;
            }
            let index = match stats.iter().position(|(code, _)| code == &fish.species) {
                Some(i) => i,
                None => {
                    stats.push((fish.species.clone(), ImperialStats::default()));
                    stats.len() - 1
                }
            };
            let slot = &mut stats[index].1;
            let replicate = fish.count as usize;
            slot.count += fish.count;

            if let Some(length) = fish.measured_length() {
                let inches = mm_to_inches(length).value();
                slot.lengths_in
                    .extend(std::iter::repeat(inches).take(replicate));
            }
            if let Some(weight) = fish.measured_weight() {
                let pounds = grams_to_pounds(weight).value();
                slot.weights_lb
                    .extend(std::iter::repeat(pounds).take(replicate));
            }
        }
    }

    let rows = stats
        .into_iter()
        .map(|(species, stats)| AnglerAbundanceRow {
            species,
            count: stats.count,
            cpue: species_cpue(stats.count, total_effort),
            length_range_in: range_label(&stats.lengths_in, 1),
            mean_length_in: mean(&stats.lengths_in).map(round1).unwrap_or(0.0),
            weight_range_lb: range_label(&stats.weights_lb, 2),
            mean_weight_lb: mean(&stats.weights_lb).map(round2).unwrap_or(0.0),
        })
        .collect();

    AnglerAbundanceData { rows }
}
