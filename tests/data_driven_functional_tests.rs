//! Data-driven functional tests using the bundled JSON fixture in tests/data/.
//!
//! These tests exercise the complete workflow for each page/feature:
//! 1. Parse an uploaded event document (JSON)
//! 2. Store the event via the service layer
//! 3. Retrieve the catch summary table
//! 4. Retrieve the abundance & condition table
//! 5. Retrieve the angler (imperial) abundance table
//! 6. Retrieve a length-frequency histogram
//! 7. Finalize and retrieve the diet composition
//! 8. Retrieve the event summary
//! 9. Assemble the monitoring report payload
//! 10. Build the spreadsheet export
//!
//! The fixture is a two-transect electrofishing event with engineered
//! numbers: 10 fish over 1.25 hours of effort, so every table has exact
//! expected values.

use sportfish_rust::db::repositories::LocalRepository;
use sportfish_rust::db::services;
use sportfish_rust::api::EventId;
use sportfish_rust::models::parse_event_json_str;
use sportfish_rust::models::SamplingEvent;
use sportfish_rust::routes::report::ReportNarrative;

const SAMPLE_EVENT_JSON: &str = include_str!("data/sample_event.json");

// ==================== Helper Functions ====================

/// Parse the bundled sampling event fixture.
fn load_sample_event() -> SamplingEvent {
    parse_event_json_str(SAMPLE_EVENT_JSON).expect("Failed to parse sample_event.json")
}

/// Store the fixture and return the assigned event id.
async fn store_sample_event(repo: &LocalRepository) -> EventId {
    let info = services::store_event_json(repo, SAMPLE_EVENT_JSON)
        .await
        .expect("Failed to store sample event");
    info.event_id
}

// ==================== Full Workflow Tests ====================

#[tokio::test]
async fn test_full_workflow_load_store_retrieve() {
    let repo = LocalRepository::new();
    let event = load_sample_event();

    // Verify the document was parsed and derived fields were filled.
    assert_eq!(event.location.lake, "Willow Springs Reservoir");
    assert_eq!(event.season, "2024", "Season should derive from the date");
    assert!(!event.checksum.is_empty(), "Checksum should be computed");
    assert_eq!(event.sets.len(), 2);
    assert_eq!(event.total_fish_count(), 10);

    // Store via the service layer.
    let info = services::store_event(&repo, &event)
        .await
        .expect("Failed to store event");
    assert!(info.event_id.value() > 0, "Should have a valid event ID");
    assert_eq!(info.lake, event.location.lake);
    assert_eq!(info.set_count, 2);
    assert_eq!(info.fish_count, 10);
    assert!(!info.is_finalized);

    // Retrieve and compare the core fields.
    let retrieved = services::get_event(&repo, info.event_id)
        .await
        .expect("Failed to retrieve event");
    assert_eq!(retrieved.location, event.location);
    assert_eq!(retrieved.sets.len(), event.sets.len());
    assert_eq!(retrieved.checksum, event.checksum);

    // A second upload of the same document resolves to the same event.
    let duplicate = services::store_event_json(&repo, SAMPLE_EVENT_JSON)
        .await
        .expect("Duplicate upload should not fail");
    assert_eq!(duplicate.event_id, info.event_id);
    assert_eq!(
        services::list_events(&repo).await.unwrap().len(),
        1,
        "Duplicate upload should not create a second event"
    );
}

#[tokio::test]
async fn test_full_workflow_catch_summary() {
    let repo = LocalRepository::new();
    let event_id = store_sample_event(&repo).await;

    let summary = services::get_catch_summary(&repo, event_id)
        .await
        .expect("Failed to compute catch summary");

    assert_eq!(summary.total_number, 10);
    assert!((summary.total_biomass_kg - 3.27).abs() < 1e-9);

    // Rows come out in first-seen order.
    let species: Vec<&str> = summary.rows.iter().map(|r| r.species.as_str()).collect();
    assert_eq!(species, vec!["WAE", "RBT", "GS"]);

    let wae = &summary.rows[0];
    assert_eq!(wae.number, 6);
    assert!((wae.number_percent - 60.0).abs() < 1e-9);
    assert!((wae.biomass_kg - 2.31).abs() < 1e-9);
    assert!((wae.biomass_percent - 70.7).abs() < 1e-9);

    let rbt = &summary.rows[1];
    assert_eq!(rbt.number, 3);
    assert!((rbt.number_percent - 30.0).abs() < 1e-9);
    assert!((rbt.biomass_kg - 0.9).abs() < 1e-9);
    assert!((rbt.biomass_percent - 27.5).abs() < 1e-9);

    let gs = &summary.rows[2];
    assert_eq!(gs.number, 1);
    assert!((gs.number_percent - 10.0).abs() < 1e-9);
    assert!((gs.biomass_kg - 0.06).abs() < 1e-9);
    assert!((gs.biomass_percent - 1.8).abs() < 1e-9);
}

#[tokio::test]
async fn test_full_workflow_abundance_condition() {
    let repo = LocalRepository::new();
    let event_id = store_sample_event(&repo).await;

    let data = services::get_abundance_condition(&repo, event_id)
        .await
        .expect("Failed to compute abundance table");

    assert!((data.total_effort_hours - 1.25).abs() < 1e-9);
    assert_eq!(data.rows.len(), 3);

    // Walleye: 6 individuals, 3 of them measured (410, 385, 452 mm).
    let wae = &data.rows[0];
    assert_eq!(wae.species, "WAE");
    assert_eq!(wae.count, 6);
    assert!((wae.cpue - 4.8).abs() < 1e-9);
    assert!((wae.mean_length_mm - 415.7).abs() < 1e-9);
    assert_eq!(wae.range_length_mm, "385-452");
    assert!((wae.mean_weight_g - 770.0).abs() < 1e-9);
    assert_eq!(wae.range_weight_g, "610-980");
    // All three fixture species ship standard-weight coefficients, so the
    // condition column is relative weight, near 100 for healthy fish.
    assert!(!wae.used_k_factor);
    let wr = wae.mean_condition.expect("Walleye condition should exist");
    assert!(wr > 98.0 && wr < 105.0, "unexpected Walleye Wr: {}", wr);

    let rbt = &data.rows[1];
    assert_eq!(rbt.species, "RBT");
    assert_eq!(rbt.count, 3);
    assert!((rbt.cpue - 2.4).abs() < 1e-9);
    assert!((rbt.mean_length_mm - 292.3).abs() < 1e-9);
    assert_eq!(rbt.range_length_mm, "280-305");
    assert!((rbt.mean_weight_g - 300.0).abs() < 1e-9);
    assert!(!rbt.used_k_factor);

    // The one green sunfish is well under standard weight.
    let gs = &data.rows[2];
    assert_eq!(gs.species, "GS");
    assert_eq!(gs.count, 1);
    assert!((gs.cpue - 0.8).abs() < 1e-9);
    assert_eq!(gs.range_length_mm, "152-152");
    let gs_wr = gs.mean_condition.expect("Sunfish condition should exist");
    assert!(gs_wr > 70.0 && gs_wr < 90.0, "unexpected Sunfish Wr: {}", gs_wr);
}

#[tokio::test]
async fn test_full_workflow_angler_units() {
    let repo = LocalRepository::new();
    let event_id = store_sample_event(&repo).await;

    let data = services::get_angler_abundance(&repo, event_id)
        .await
        .expect("Failed to compute angler table");

    assert_eq!(data.rows.len(), 3);

    // 410/385/452 mm convert to 16.1/15.2/17.8 in before averaging.
    let wae = &data.rows[0];
    assert_eq!(wae.species, "WAE");
    assert_eq!(wae.count, 6);
    assert!((wae.cpue - 4.8).abs() < 1e-9);
    assert!((wae.mean_length_in - 16.4).abs() < 1e-9);
    assert_eq!(wae.length_range_in, "15.2-17.8");
    assert!((wae.mean_weight_lb - 1.7).abs() < 1e-9);
    assert_eq!(wae.weight_range_lb, "1.34-2.16");

    let rbt = &data.rows[1];
    assert!((rbt.mean_length_in - 11.5).abs() < 1e-9);
    assert_eq!(rbt.length_range_in, "11.0-12.0");
    assert!((rbt.mean_weight_lb - 0.66).abs() < 1e-9);

    let gs = &data.rows[2];
    assert!((gs.cpue - 0.8).abs() < 1e-9);
    assert_eq!(gs.length_range_in, "6.0-6.0");
    assert_eq!(gs.weight_range_lb, "0.13-0.13");
}

#[tokio::test]
async fn test_full_workflow_length_frequency() {
    let repo = LocalRepository::new();
    let event_id = store_sample_event(&repo).await;

    let data = services::get_length_frequency(&repo, event_id, "WAE")
        .await
        .expect("Length frequency query should succeed")
        .expect("Walleye has measured lengths");

    assert_eq!(data.species_code, "WAE");
    assert_eq!(data.species_name, "Walleye");
    assert_eq!(data.title, "Walleye Length Frequency Distribution");
    assert_eq!(data.n, 3);

    // Measured lengths span 15.2-17.8 in, so bins run 14 through 19.
    assert_eq!(data.bin_labels.first().unwrap(), "14.0-15.0");
    assert_eq!(data.bin_labels.last().unwrap(), "18.0-19.0");
    assert_eq!(data.counts, vec![0, 1, 1, 1, 0]);
    assert!((data.max_y - 1.05).abs() < 1e-9);
    // The built-in reference table carries no size-category thresholds.
    assert!(data.size_markers.is_none());

    // A species absent from the reference table is "no data", not an error.
    let missing = services::get_length_frequency(&repo, event_id, "ZZZ")
        .await
        .expect("Unknown species query should succeed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_full_workflow_diet_composition() {
    let repo = LocalRepository::new();
    let event_id = store_sample_event(&repo).await;

    // Diet is only reviewed after the crew signs off.
    let before = services::get_diet_composition(&repo, event_id)
        .await
        .expect("Diet query should succeed");
    assert!(before.is_none(), "Diet should be gated until finalized");

    let info = services::finalize_event(&repo, event_id)
        .await
        .expect("Failed to finalize event");
    assert!(info.is_finalized);

    let data = services::get_diet_composition(&repo, event_id)
        .await
        .expect("Diet query should succeed")
        .expect("Finalized event should expose diet data");

    // One tick per record: 2 crayfish, 1 fish, 1 empty, 4 unrecorded.
    assert_eq!(data.total, 8);
    let slices: Vec<(&str, u32)> = data
        .slices
        .iter()
        .map(|s| (s.label.as_str(), s.count))
        .collect();
    assert_eq!(
        slices,
        vec![("Crayfish", 2), ("Fish", 1), ("Empty", 1), ("Unknown", 4)]
    );
}

#[tokio::test]
async fn test_full_workflow_event_summary() {
    let repo = LocalRepository::new();
    let event_id = store_sample_event(&repo).await;

    let summary = services::get_event_summary(&repo, event_id)
        .await
        .expect("Failed to compute event summary");

    assert_eq!(summary.event_id, Some(event_id));
    assert_eq!(summary.lake, "Willow Springs Reservoir");
    assert_eq!(summary.date, "2024-06-12");
    assert_eq!(summary.gear, "electrofishing");
    assert_eq!(summary.season, "2024");
    assert!(!summary.is_finalized);
    assert_eq!(summary.total_fish, 10);
    assert!((summary.total_effort_hours - 1.25).abs() < 1e-9);
    assert_eq!(summary.cpue.as_f64(), Some(8.0));
    assert_eq!(summary.species, vec!["WAE", "RBT", "GS"]);
    assert_eq!(summary.pending_nets, 0);

    assert_eq!(summary.sets.len(), 2);
    let first = &summary.sets[0];
    assert_eq!(first.set_id.value(), 1);
    assert_eq!(first.kind, "transect");
    assert!((first.effort_or_soak_hours - 0.5).abs() < 1e-9);
    assert_eq!(first.fish_count, 6);
    assert_eq!(first.cpue, Some(12.0));
    assert!(!first.pending);

    let second = &summary.sets[1];
    assert!((second.effort_or_soak_hours - 0.75).abs() < 1e-9);
    assert_eq!(second.fish_count, 4);
}

#[tokio::test]
async fn test_full_workflow_report_payload() {
    let repo = LocalRepository::new();
    let event_id = store_sample_event(&repo).await;

    let narrative = ReportNarrative {
        dates: "June 10-14, 2024".to_string(),
        stocking_strategy: "Annual walleye fingerling stocking.".to_string(),
        comments: "Strong walleye year class.".to_string(),
        suggestions: "Repeat survey next spring.".to_string(),
        ..ReportNarrative::default()
    };
    let payload = services::get_report_payload(&repo, event_id, &narrative)
        .await
        .expect("Failed to assemble report payload");

    assert_eq!(payload.reservoir, "Willow Springs Reservoir");
    assert_eq!(payload.dates, "June 10-14, 2024");
    assert_eq!(payload.stocking_strategy, "Annual walleye fingerling stocking.");
    assert_eq!(payload.comments, "Strong walleye year class.");
    assert_eq!(payload.suggestions, "Repeat survey next spring.");

    // Blank narrative sections fall back to event-derived values.
    assert_eq!(payload.methods.gear, "electrofishing");
    assert_eq!(payload.methods.effort, "1.25 hours");
    assert_eq!(payload.methods.temp, "18.5");
    assert_eq!(
        payload.methods.target_species,
        vec!["Walleye", "Rainbow Trout", "Green Sunfish"]
    );

    // Abundance rows are pre-formatted strings under display names.
    assert_eq!(payload.abundance_table.len(), 3);
    let wae = &payload.abundance_table[0];
    assert_eq!(wae.species, "Walleye");
    assert_eq!(wae.cpue, "4.80");
    assert_eq!(wae.mean_tl, "415.7");
    assert_eq!(wae.range_tl, "385-452");
    let wr: f64 = wae.mean_wr.parse().expect("mean Wr should be numeric");
    assert!(wr > 98.0 && wr < 105.0);
    // No thresholds in the built-in table, so all PSD cells are dashes.
    assert_eq!(wae.psd, "-");
    assert_eq!(wae.psd_t, "-");

    assert_eq!(payload.catch_summary.len(), 3);
    let wae_catch = &payload.catch_summary[0];
    assert_eq!(wae_catch.species, "Walleye");
    assert_eq!(wae_catch.number, "6");
    assert_eq!(wae_catch.pct_number, "60.0");
    assert_eq!(wae_catch.biomass, "2.31");
    assert_eq!(wae_catch.pct_biomass, "70.7");
}

#[tokio::test]
async fn test_full_workflow_spreadsheet_export() {
    let repo = LocalRepository::new();
    let event_id = store_sample_event(&repo).await;

    let sheet = services::get_spreadsheet(&repo, event_id)
        .await
        .expect("Failed to build spreadsheet");

    assert_eq!(sheet.file_name, "Willow_Springs_Reservoir_20240612.xlsx");
    assert_eq!(sheet.sheet_name, "Data");

    // Two blocks of header + data + fish header + 4 fish + spacer.
    assert_eq!(sheet.rows.len(), 16);
    assert_eq!(sheet.rows[0][0], "Lake");
    assert_eq!(sheet.rows[0].len(), 20);
    assert_eq!(sheet.rows[2][0], "SPP");
    assert!(sheet.rows[7].is_empty());
    assert_eq!(sheet.rows[8][0], "Lake");

    let set1 = &sheet.rows[1];
    assert_eq!(set1[0], "Willow Springs Reservoir");
    assert_eq!(set1[1], "JD, MK");
    assert_eq!(set1[2], "6");
    assert_eq!(set1[3], "12");
    assert_eq!(set1[4], "2024");
    assert_eq!(set1[5], "electrofishing");
    assert_eq!(set1[6], "1");
    assert_eq!(set1[7], "1800");
    assert_eq!(set1[8], "30.00");
    assert_eq!(set1[9], "N/A"); // soak hours do not apply to transects
    assert_eq!(set1[10], "12");
    assert_eq!(set1[11], "423500");
    assert_eq!(set1[12], "4512300");
    assert_eq!(set1[13], "North shoreline");
    assert_eq!(set1[14], "412");
    assert_eq!(set1[15], "8.2");
    assert_eq!(set1[16], "N/A"); // tds not taken
    assert_eq!(set1[17], "N/A"); // salts not taken
    assert_eq!(set1[18], "18.5");
    assert_eq!(set1[19], "6"); // event-level amps

    let set2 = &sheet.rows[9];
    assert_eq!(set2[6], "2");
    assert_eq!(set2[7], "2700");
    assert_eq!(set2[8], "45.00");
    assert_eq!(set2[19], "5.5"); // per-set amps override

    // Fish rows carry measurements as entered, blanks where unmeasured.
    assert_eq!(sheet.rows[3], vec!["WAE", "410", "720", "F", "Crayfish", ""]);
    let batch = &sheet.rows[5];
    assert_eq!(batch[0], "WAE");
    assert_eq!(batch[1], "");
    assert_eq!(batch[2], "");
    assert_eq!(batch[3], "Immature");
    assert_eq!(batch[4], "Empty");
    assert_eq!(sheet.rows[14], vec!["GS", "152", "58", "", "", "Incidental"]);
}
