//! Event summary: the per-set and whole-event effort/catch overview shown
//! on the dashboard.

use crate::api::{EventSummaryData, SetSummary};
use crate::models::{SamplingEvent, SetKind};
use crate::services::effort::{event_cpue, total_effort_hours};

fn set_kind_label(kind: &SetKind) -> &'static str {
    match kind {
        SetKind::Transect { .. } => "transect",
        SetKind::NetSet { .. } => "net_set",
    }
}

/// Compute the effort and catch overview for one event.
pub fn compute_event_summary(event: &SamplingEvent) -> EventSummaryData {
    let sets = event
        .sets
        .iter()
        .map(|set| SetSummary {
            set_id: set.set_id,
            kind: set_kind_label(&set.kind).to_string(),
            effort_or_soak_hours: set.effort_or_soak_hours().value(),
            fish_count: set.total_fish_count(),
            cpue: set.cpue,
            pending: set.is_pending_net(),
        })
        .collect();

    let pending_nets = event.sets.iter().filter(|s| s.is_pending_net()).count();

    EventSummaryData {
        event_id: event.id,
        lake: event.location.lake.clone(),
        date: event.location.date.to_string(),
        gear: event.gear.to_string(),
        season: if event.season.is_empty() {
            event.derived_season()
        } else {
            event.season.clone()
        },
        is_finalized: event.is_finalized,
        sets,
        total_fish: event.total_fish_count(),
        total_effort_hours: total_effort_hours(event).value(),
        cpue: event_cpue(event),
        species: event.species_codes(),
        pending_nets,
    }
}
