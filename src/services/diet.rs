//! Diet composition: stomach-content tallies for a finalized event.

use crate::api::{DietCompositionData, DietSlice};
use crate::models::SamplingEvent;

/// Tally stomach contents across every fish record of a finalized event.
///
/// One tick per record (a batch entry is a single stomach examination, not
/// `count` of them); blank contents tally under `"Unknown"`. Returns `None`
/// for events that are still being entered, since diet is only reviewed
/// once the crew signs off.
pub fn compute_diet_composition(event: &SamplingEvent) -> Option<DietCompositionData> {
    if !event.is_finalized {
        return None;
    }

    let mut slices: Vec<DietSlice> = Vec::new();
    for set in &event.sets {
        for fish in &set.fish {
            let label = if fish.stomach_content.is_empty() {
                "Unknown"
            } else {
                fish.stomach_content.as_str()
            };
            match slices.iter_mut().find(|slice| slice.label == label) {
                Some(slice) => slice.count += 1,
                None => slices.push(DietSlice {
                    label: label.to_string(),
                    count: 1,
                }),
            }
        }
    }

    let total = slices.iter().map(|slice| slice.count).sum();
    Some(DietCompositionData {
        title: "Diet Composition".to_string(),
        slices,
        total,
    })
}
