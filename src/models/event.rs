//! Sampling event data model.
//!
//! A [`SamplingEvent`] is one lake visit: location and crew metadata, water
//! chemistry readings, the gear deployed, and an ordered list of [`Set`]s
//! (electrofishing transects or net deployments), each holding the
//! [`FishObservation`]s recorded against it. Mutations go through methods on
//! the event so derived values (per-set CPUE, season) stay consistent with
//! the tree.
//!
//! This module also owns the JSON parsing boundary for events arriving from
//! clients or fixtures.

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use qtty::{Grams, Hours, Millimeters, Seconds};
use serde::{Deserialize, Serialize};

use crate::api::{EventId, SetId, UtmSpan};
use crate::models::units::seconds_to_hours;

/// Gear deployed for a sampling event.
///
/// The gear decides which kind of set can be added: electrofishing events
/// take transects, gillnet and fyke-net events take net sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearType {
    Electrofishing,
    Gillnet,
    FykeNet,
}

impl GearType {
    /// Wire/storage representation, also used in spreadsheet exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            GearType::Electrofishing => "electrofishing",
            GearType::Gillnet => "gillnet",
            GearType::FykeNet => "fyke_net",
        }
    }

    pub fn is_electrofishing(&self) -> bool {
        matches!(self, GearType::Electrofishing)
    }
}

impl std::fmt::Display for GearType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where and when an event took place, and who ran it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationInfo {
    /// Lake or reservoir name
    pub lake: String,
    /// Free-form description of the sampled area
    #[serde(default)]
    pub location: String,
    /// Calendar date of the visit
    pub date: NaiveDate,
    /// Crew on site
    pub observers: String,
    #[serde(default)]
    pub field_notes: String,
}

/// Water-chemistry readings taken at the event site.
///
/// All readings are optional; a reading of zero is treated as not taken.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EnvironmentalReadings {
    #[serde(default)]
    pub ph: Option<f64>,
    #[serde(default)]
    pub temp_water_c: Option<f64>,
    #[serde(default)]
    pub conductivity: Option<f64>,
    #[serde(default)]
    pub tds: Option<f64>,
    #[serde(default)]
    pub salts: Option<f64>,
    /// Electrofishing output amperage, overridable per set
    #[serde(default)]
    pub amps: Option<f64>,
}

/// One fish record. A record with `count > 1` is a batch entry: `count`
/// individuals sharing the same measurements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishObservation {
    /// Species field code (e.g. "WAE"); may be blank for unidentified fish
    #[serde(default)]
    pub species: String,
    /// Total length in millimeters; absent or non-positive means not measured
    #[serde(default)]
    pub length_mm: Option<Millimeters>,
    /// Weight in grams; absent or non-positive means not measured
    #[serde(default)]
    pub weight_g: Option<Grams>,
    /// Number of individuals this record stands for, at least 1
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default)]
    pub sex: String,
    #[serde(default)]
    pub stomach_content: String,
    /// Visceral fat index (1..=5)
    #[serde(default)]
    pub fat_index: Option<u8>,
    #[serde(default)]
    pub notes: String,
}

fn default_count() -> u32 {
    1
}

impl FishObservation {
    /// Single measured fish.
    pub fn new(species: &str, length_mm: Option<f64>, weight_g: Option<f64>) -> Self {
        Self {
            species: species.to_string(),
            length_mm: length_mm.map(Millimeters::new),
            weight_g: weight_g.map(Grams::new),
            count: 1,
            sex: String::new(),
            stomach_content: String::new(),
            fat_index: None,
            notes: String::new(),
        }
    }

    /// Quick-add batch entry: `count` unmeasured fish with the tally
    /// defaults used on the data sheet.
    pub fn batch(species: &str, count: u32) -> Self {
        Self {
            species: species.to_string(),
            length_mm: None,
            weight_g: None,
            count: count.max(1),
            sex: "Immature".to_string(),
            stomach_content: "Empty".to_string(),
            fat_index: Some(1),
            notes: String::new(),
        }
    }

    /// Length if actually measured (positive).
    pub fn measured_length(&self) -> Option<Millimeters> {
        self.length_mm.filter(|l| l.value() > 0.0)
    }

    /// Weight if actually measured (positive).
    pub fn measured_weight(&self) -> Option<Grams> {
        self.weight_g.filter(|w| w.value() > 0.0)
    }
}

/// What kind of gear deployment a [`Set`] is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SetKind {
    /// Electrofishing transect with a fixed shocking duration.
    Transect {
        /// Shocking time in seconds
        effort_time_sec: Seconds,
    },
    /// Net deployment; `pull_time` stays unset while the net soaks.
    NetSet {
        set_time: DateTime<Utc>,
        #[serde(default)]
        pull_time: Option<DateTime<Utc>>,
    },
}

/// One transect or net deployment within an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    /// Sequence number within the event, starting at 1
    pub set_id: SetId,
    #[serde(flatten)]
    pub kind: SetKind,
    /// Start/end coordinates of the transect or net line
    pub location: UtmSpan,
    /// Per-set amperage override for electrofishing
    #[serde(default)]
    pub amps: Option<f64>,
    #[serde(default)]
    pub fish: Vec<FishObservation>,
    /// Cached catch-per-hour, refreshed on every fish mutation and on pull;
    /// `None` until the first recomputation
    #[serde(default)]
    pub cpue: Option<f64>,
}

impl Set {
    /// Shocking time converted to hours (transects only).
    pub fn effort_hours(&self) -> Option<Hours> {
        match &self.kind {
            SetKind::Transect { effort_time_sec } => Some(seconds_to_hours(*effort_time_sec)),
            SetKind::NetSet { .. } => None,
        }
    }

    /// Soak time in hours (pulled nets only).
    pub fn soak_hours(&self) -> Option<Hours> {
        match &self.kind {
            SetKind::NetSet {
                set_time,
                pull_time: Some(pull),
            } => {
                let ms = pull.signed_duration_since(*set_time).num_milliseconds();
                Some(Hours::new(ms as f64 / 3_600_000.0))
            }
            _ => None,
        }
    }

    /// True for a net that has not been pulled yet.
    pub fn is_pending_net(&self) -> bool {
        matches!(
            &self.kind,
            SetKind::NetSet {
                pull_time: None,
                ..
            }
        )
    }

    /// Effort-or-soak hours this set contributes to event aggregates.
    /// A pending net contributes zero.
    pub fn effort_or_soak_hours(&self) -> Hours {
        self.effort_hours()
            .or_else(|| self.soak_hours())
            .unwrap_or(Hours::new(0.0))
    }

    /// Total individuals recorded against this set (batch-aware).
    pub fn total_fish_count(&self) -> u32 {
        self.fish.iter().map(|f| f.count).sum()
    }

    /// Divisor for this set's own cached CPUE: effort hours, else soak
    /// hours, else 1. The fallback keeps the division defined for a pending
    /// net at the cost of an artificially low value.
    fn cpue_divisor_hours(&self) -> f64 {
        if let Some(effort) = self.effort_hours() {
            if effort.value() > 0.0 {
                return effort.value();
            }
        }
        if let Some(soak) = self.soak_hours() {
            if soak.value() > 0.0 {
                return soak.value();
            }
        }
        1.0
    }

    fn recompute_cpue(&mut self) {
        self.cpue = Some(self.total_fish_count() as f64 / self.cpue_divisor_hours());
    }
}

/// A complete sampling event: one lake visit with all its sets and fish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingEvent {
    /// Database ID (server-assigned, absent before first store)
    #[serde(default)]
    pub id: Option<EventId>,
    pub location: LocationInfo,
    #[serde(default)]
    pub environmental: EnvironmentalReadings,
    pub gear: GearType,
    #[serde(default)]
    pub sets: Vec<Set>,
    /// Sampling season, the four-digit year of the event date
    #[serde(default)]
    pub season: String,
    /// Set when the crew signs off on the event; finalized events feed reports
    #[serde(default)]
    pub is_finalized: bool,
    /// SHA-256 of the event JSON, used for store deduplication
    #[serde(default)]
    pub checksum: String,
}

impl SamplingEvent {
    /// Create a new event. Lake and observers are required on the data sheet.
    pub fn new(
        location: LocationInfo,
        environmental: EnvironmentalReadings,
        gear: GearType,
    ) -> Result<Self, String> {
        if location.lake.trim().is_empty() {
            return Err("Lake name is required".to_string());
        }
        if location.observers.trim().is_empty() {
            return Err("Observers are required".to_string());
        }
        let season = location.date.year().to_string();
        Ok(Self {
            id: None,
            location,
            environmental,
            gear,
            sets: Vec::new(),
            season,
            is_finalized: false,
            checksum: String::new(),
        })
    }

    /// Season derived from the event date, used when the stored season is blank.
    pub fn derived_season(&self) -> String {
        self.location.date.year().to_string()
    }

    /// Add an electrofishing transect. Only valid for electrofishing gear.
    pub fn add_transect(
        &mut self,
        effort_time: Seconds,
        location: UtmSpan,
    ) -> Result<SetId, String> {
        if !self.gear.is_electrofishing() {
            return Err(format!(
                "Transects require electrofishing gear, event uses {}",
                self.gear
            ));
        }
        if effort_time.value() <= 0.0 {
            return Err("Effort time must be positive".to_string());
        }
        let set_id = SetId::new(self.sets.len() as i64 + 1);
        self.sets.push(Set {
            set_id,
            kind: SetKind::Transect {
                effort_time_sec: effort_time,
            },
            location,
            amps: None,
            fish: Vec::new(),
            cpue: None,
        });
        Ok(set_id)
    }

    /// Add a net deployment. Only valid for gillnet or fyke-net gear.
    pub fn add_net_set(
        &mut self,
        set_time: DateTime<Utc>,
        location: UtmSpan,
    ) -> Result<SetId, String> {
        if self.gear.is_electrofishing() {
            return Err("Net sets require gillnet or fyke_net gear".to_string());
        }
        let set_id = SetId::new(self.sets.len() as i64 + 1);
        self.sets.push(Set {
            set_id,
            kind: SetKind::NetSet {
                set_time,
                pull_time: None,
            },
            location,
            amps: None,
            fish: Vec::new(),
            cpue: None,
        });
        Ok(set_id)
    }

    /// Record the pull of a net set and refresh its soak time and CPUE.
    /// The pull must be after the set time; a pulled net cannot be pulled again.
    pub fn pull_net(
        &mut self,
        set_id: SetId,
        pull_time: DateTime<Utc>,
        location: UtmSpan,
    ) -> Result<(), String> {
        let set = self.set_mut(set_id)?;
        match &mut set.kind {
            SetKind::Transect { .. } => {
                Err(format!("Set {} is a transect, not a net", set_id))
            }
            SetKind::NetSet { pull_time: Some(_), .. } => {
                Err(format!("Net set {} was already pulled", set_id))
            }
            SetKind::NetSet {
                set_time,
                pull_time: pull_slot,
            } => {
                if pull_time <= *set_time {
                    return Err("Pull time must be after set time".to_string());
                }
                *pull_slot = Some(pull_time);
                set.location = location;
                set.recompute_cpue();
                Ok(())
            }
        }
    }

    /// Add a fish observation to a set and refresh that set's CPUE.
    pub fn add_fish(&mut self, set_id: SetId, fish: FishObservation) -> Result<(), String> {
        if fish.count == 0 {
            return Err("Fish count must be at least 1".to_string());
        }
        let set = self.set_mut(set_id)?;
        set.fish.push(fish);
        set.recompute_cpue();
        Ok(())
    }

    /// Replace the fish observation at `index` within a set.
    pub fn update_fish(
        &mut self,
        set_id: SetId,
        index: usize,
        fish: FishObservation,
    ) -> Result<(), String> {
        if fish.count == 0 {
            return Err("Fish count must be at least 1".to_string());
        }
        let set = self.set_mut(set_id)?;
        if index >= set.fish.len() {
            return Err(format!(
                "Fish index {} out of range for set {}",
                index, set_id
            ));
        }
        set.fish[index] = fish;
        set.recompute_cpue();
        Ok(())
    }

    /// Delete the fish observations at the given indices within a set.
    /// Returns the number of records removed.
    pub fn delete_fish(&mut self, set_id: SetId, indices: &[usize]) -> Result<usize, String> {
        let set = self.set_mut(set_id)?;
        let before = set.fish.len();
        let mut keep_index = 0usize;
        set.fish.retain(|_| {
            let keep = !indices.contains(&keep_index);
            keep_index += 1;
            keep
        });
        let removed = before - set.fish.len();
        if removed > 0 {
            set.recompute_cpue();
        }
        Ok(removed)
    }

    /// Mark the event as finalized. Finalized events are eligible for
    /// report generation and are not edited further.
    pub fn finalize(&mut self) {
        self.is_finalized = true;
    }

    /// Look up a set by its sequence number.
    pub fn set(&self, set_id: SetId) -> Option<&Set> {
        self.sets.iter().find(|s| s.set_id == set_id)
    }

    fn set_mut(&mut self, set_id: SetId) -> Result<&mut Set, String> {
        self.sets
            .iter_mut()
            .find(|s| s.set_id == set_id)
            .ok_or_else(|| format!("Set {} not found", set_id))
    }

    /// Distinct non-blank species codes in first-seen order.
    pub fn species_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = Vec::new();
        for set in &self.sets {
            for fish in &set.fish {
                if !fish.species.is_empty() && !codes.contains(&fish.species) {
                    codes.push(fish.species.clone());
                }
            }
        }
        codes
    }

    /// Total individuals across all sets (batch-aware).
    pub fn total_fish_count(&self) -> u32 {
        self.sets.iter().map(|s| s.total_fish_count()).sum()
    }
}

// =============================================================================
// JSON parsing boundary
// =============================================================================

fn validate_input_event(event_json: &str) -> Result<()> {
    let value: serde_json::Value =
        serde_json::from_str(event_json).context("Invalid event JSON")?;
    let obj = value
        .as_object()
        .context("Event JSON must be an object")?;
    if obj.get("location").is_none() {
        anyhow::bail!("Missing required 'location' field");
    }
    if obj.get("gear").is_none() {
        anyhow::bail!("Missing required 'gear' field");
    }
    Ok(())
}

/// Parse a sampling event from a JSON string.
///
/// Deserializes with Serde, then fills derived fields: a blank `season`
/// becomes the event year and a blank `checksum` is computed from the raw
/// input text.
///
/// # Returns
///
/// A fully populated `SamplingEvent` ready for storage or metrics.
pub fn parse_event_json_str(event_json: &str) -> Result<SamplingEvent> {
    validate_input_event(event_json)?;

    let mut event: SamplingEvent = serde_json::from_str(event_json)
        .context("Failed to deserialize event JSON using Serde")?;

    if event.location.lake.trim().is_empty() {
        anyhow::bail!("Event is missing a lake name");
    }
    for set in &event.sets {
        for fish in &set.fish {
            if fish.count == 0 {
                anyhow::bail!(
                    "Fish record in set {} has count 0; batch counts start at 1",
                    set.set_id
                );
            }
        }
        if let SetKind::NetSet {
            set_time,
            pull_time: Some(pull),
        } = &set.kind
        {
            if pull <= set_time {
                anyhow::bail!("Net set {} has pull time before set time", set.set_id);
            }
        }
    }

    if event.season.is_empty() {
        event.season = event.derived_season();
    }
    if event.checksum.is_empty() {
        event.checksum = compute_event_checksum(event_json);
    }

    Ok(event)
}

/// Compute a checksum for the event JSON
fn compute_event_checksum(json_str: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(json_str.as_bytes());
    hex::encode(hasher.finalize())
}
