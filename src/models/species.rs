//! Species reference data: codes, names, standard-weight coefficients, and
//! proportional size distribution (PSD) length thresholds.
//!
//! Standard-weight equations follow the usual log10 form
//! `log10(Ws) = intercept + slope * log10(L)` with `L` in millimeters and
//! `Ws` in grams. Species without published coefficients carry `None` and
//! fall back to Fulton's condition factor in the abundance table.

use qtty::{Grams, Millimeters};
use serde::{Deserialize, Serialize};

/// Standard-weight regression coefficients (log10 space, mm/g).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LengthWeightCoefficients {
    /// Intercept `a` of the log10 standard-weight equation
    pub intercept: f64,
    /// Slope `b` of the log10 standard-weight equation
    pub slope: f64,
}

impl LengthWeightCoefficients {
    pub fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Standard weight `Ws` for a fish of the given total length.
    ///
    /// # Arguments
    /// * `length` - Total length in millimeters, must be positive
    ///
    /// # Returns
    /// Standard weight in grams.
    pub fn standard_weight(&self, length: Millimeters) -> Grams {
        let log_ws = self.intercept + self.slope * length.value().log10();
        Grams::new(10f64.powf(log_ws))
    }

    /// Relative weight `Wr = 100 * W / Ws` for a measured fish.
    pub fn relative_weight(&self, length: Millimeters, weight: Grams) -> f64 {
        (weight.value() / self.standard_weight(length).value()) * 100.0
    }
}

/// Fulton condition factor `K = (W / L^3) * 100000`, the coefficient-free
/// condition metric for species without a standard-weight equation.
pub fn fulton_condition_factor(length: Millimeters, weight: Grams) -> f64 {
    (weight.value() / length.value().powi(3)) * 100_000.0
}

/// PSD length thresholds in millimeters (stock through trophy).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PsdThresholds {
    pub stock: Millimeters,
    pub quality: Millimeters,
    pub preferred: Millimeters,
    pub memorable: Millimeters,
    pub trophy: Millimeters,
}

impl PsdThresholds {
    pub fn new(stock: f64, quality: f64, preferred: f64, memorable: f64, trophy: f64) -> Self {
        Self {
            stock: Millimeters::new(stock),
            quality: Millimeters::new(quality),
            preferred: Millimeters::new(preferred),
            memorable: Millimeters::new(memorable),
            trophy: Millimeters::new(trophy),
        }
    }
}

/// One species in the reference table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesEntry {
    /// Field code used on data sheets (e.g. "WAE", "LMB")
    pub code: String,
    /// Common name (e.g. "Walleye")
    pub name: String,
    /// Standard-weight coefficients, absent for species without a published equation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_weight: Option<LengthWeightCoefficients>,
    /// PSD length thresholds, absent when not managed by size structure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psd: Option<PsdThresholds>,
}

impl SpeciesEntry {
    pub fn new(code: &str, name: &str, length_weight: Option<LengthWeightCoefficients>) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            length_weight,
            psd: None,
        }
    }

    /// Attach PSD thresholds to this entry.
    pub fn with_psd(mut self, psd: PsdThresholds) -> Self {
        self.psd = Some(psd);
        self
    }
}

/// Lookup table of species reference data, keyed by field code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesTable {
    entries: Vec<SpeciesEntry>,
}

impl SpeciesTable {
    /// Create a table from explicit entries (used by tests and custom configs).
    pub fn from_entries(entries: Vec<SpeciesEntry>) -> Self {
        Self { entries }
    }

    /// The species list shipped with the application.
    pub fn builtin() -> Self {
        let c = LengthWeightCoefficients::new;
        Self::from_entries(vec![
            SpeciesEntry::new("BC", "Black Crappie", Some(c(-5.618, 3.345))),
            SpeciesEntry::new("BLG", "Bluegill", Some(c(-5.374, 3.316))),
            SpeciesEntry::new("BN", "Brown Trout", Some(c(-5.422, 3.194))),
            SpeciesEntry::new("LMB", "Largemouth Bass", Some(c(-5.528, 3.273))),
            SpeciesEntry::new("RBT", "Rainbow Trout", Some(c(-4.898, 2.99))),
            SpeciesEntry::new("SMB", "Smallmouth Bass", Some(c(-5.329, 3.2))),
            SpeciesEntry::new("WAE", "Walleye", Some(c(-5.453, 3.18))),
            SpeciesEntry::new("YP", "Yellow Perch", Some(c(-5.386, 3.23))),
            SpeciesEntry::new("GS", "Green Sunfish", Some(c(-5.374, 3.316))),
            SpeciesEntry::new("TGT", "Tiger Trout", None),
            SpeciesEntry::new("CC", "Common Carp", None),
            SpeciesEntry::new("BBH", "Black Bullhead", None),
            SpeciesEntry::new("WIP", "Wiper", None),
            SpeciesEntry::new("TM", "Tiger Musky", Some(c(-6.126, 3.337))),
            SpeciesEntry::new("FMS", "Flannelmouth Sucker", None),
            SpeciesEntry::new("MTW", "Mountain Whitefish", Some(c(-5.231, 3.140))),
        ])
    }

    /// Look up a species by its field code.
    pub fn get(&self, code: &str) -> Option<&SpeciesEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn entries(&self) -> &[SpeciesEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpeciesTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_size() {
        let table = SpeciesTable::builtin();
        assert_eq!(table.len(), 16);
    }

    #[test]
    fn test_builtin_lookup() {
        let table = SpeciesTable::builtin();
        let wae = table.get("WAE").unwrap();
        assert_eq!(wae.name, "Walleye");
        assert!(wae.length_weight.is_some());

        let carp = table.get("CC").unwrap();
        assert_eq!(carp.name, "Common Carp");
        assert!(carp.length_weight.is_none());
    }

    #[test]
    fn test_unknown_code() {
        let table = SpeciesTable::builtin();
        assert!(table.get("XYZ").is_none());
    }

    #[test]
    fn test_builtin_ships_without_psd() {
        let table = SpeciesTable::builtin();
        assert!(table.entries().iter().all(|e| e.psd.is_none()));
    }

    #[test]
    fn test_standard_weight_walleye() {
        // Ws for a 400 mm walleye: 10^(-5.453 + 3.18 * log10(400)) = 663.05 g
        let coeffs = LengthWeightCoefficients::new(-5.453, 3.18);
        let ws = coeffs.standard_weight(Millimeters::new(400.0));
        assert!((ws.value() - 663.05).abs() < 0.1);
    }

    #[test]
    fn test_relative_weight() {
        let coeffs = LengthWeightCoefficients::new(-5.453, 3.18);
        let wr = coeffs.relative_weight(Millimeters::new(400.0), Grams::new(663.05));
        assert!((wr - 100.0).abs() < 0.05);
    }

    #[test]
    fn test_fulton_condition_factor() {
        // K for 300 mm / 500 g: (500 / 300^3) * 100000 = 18.5185...
        let k = fulton_condition_factor(Millimeters::new(300.0), Grams::new(500.0));
        assert!((k - 18.5185185).abs() < 1e-6);
    }

    #[test]
    fn test_with_psd() {
        let entry = SpeciesEntry::new("WAE", "Walleye", None)
            .with_psd(PsdThresholds::new(250.0, 380.0, 510.0, 630.0, 760.0));
        let psd = entry.psd.unwrap();
        assert_eq!(psd.stock.value(), 250.0);
        assert_eq!(psd.trophy.value(), 760.0);
    }

    #[test]
    fn test_table_serde_round_trip() {
        let table = SpeciesTable::builtin();
        let json = serde_json::to_string(&table).unwrap();
        let back: SpeciesTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
