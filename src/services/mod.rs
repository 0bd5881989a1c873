//! Service layer: the biological metrics engine.
//!
//! Every function in this module is a pure transformation of an event
//! snapshot into table data. Nothing here performs I/O or retains state
//! between calls; results are recomputed from the tree on demand, and the
//! same snapshot always produces the same tables. Storage orchestration
//! lives in `db::services`.

pub mod abundance;
pub mod angler;
pub mod catch_summary;
pub mod diet;
pub mod effort;
pub mod event_summary;
pub mod export;
pub mod length_frequency;
pub mod report;

pub use abundance::compute_abundance_condition;
pub use angler::compute_angler_abundance;
pub use catch_summary::compute_catch_summary;
pub use diet::compute_diet_composition;
pub use effort::{event_cpue, species_cpue, total_effort_hours};
pub use event_summary::compute_event_summary;
pub use export::build_spreadsheet;
pub use length_frequency::compute_length_frequency;
pub use report::build_report_payload;
