//! Shared effort and CPUE aggregation.
//!
//! Every table in the metrics engine divides a fish count by the same
//! denominator: the event's total effort-or-soak hours. This module owns
//! that aggregation and the event-level CPUE sentinel so the individual
//! table computations cannot drift apart.

use qtty::Hours;

use crate::models::{round2, safe_divide, CpueValue, SamplingEvent};

/// Total effort-or-soak hours across all sets of an event. Transects
/// contribute their shocking time, pulled nets their soak time, and a
/// pending net contributes zero.
pub fn total_effort_hours(event: &SamplingEvent) -> Hours {
    Hours::new(
        event
            .sets
            .iter()
            .map(|set| set.effort_or_soak_hours().value())
            .sum(),
    )
}

/// Event-level CPUE: total fish over total effort hours, the `"N/A"`
/// sentinel when the event has no usable effort.
pub fn event_cpue(event: &SamplingEvent) -> CpueValue {
    CpueValue::from_ratio(
        event.total_fish_count() as f64,
        total_effort_hours(event).value(),
    )
}

/// Per-species CPUE cell shared by the abundance tables: species count over
/// total event effort, two decimals, `0` when the event has no usable effort.
pub fn species_cpue(species_count: u32, total_effort: Hours) -> f64 {
    round2(safe_divide(species_count as f64, total_effort.value()).unwrap_or(0.0))
}
