//! Unit conversions, rounding, and the shared division sentinel policy.
//!
//! Fish are measured in millimeters and grams in the field; angler-facing
//! tables and the length-frequency histogram report inches and pounds, and
//! electrofishing effort is recorded in seconds but aggregated in hours.
//! All conversions go through [`qtty`] quantities so the ratios live in one
//! place (inch = 25.4 mm, pound = 453.59237 g, hour = 3600 s).
//!
//! Every CPUE and percentage division in the metrics engine goes through
//! [`safe_divide`], and undefined event-level CPUE is carried as
//! [`CpueValue::Unavailable`] which serializes as the string `"N/A"`. No
//! metric ever yields `NaN` or `Infinity` from a zero denominator.

use qtty::{Grams, Hour, Hours, Inch, Inches, Millimeters, Pound, Pounds, Seconds};
use serde::{Deserialize, Serialize};

/// Convert a total length from millimeters to inches.
pub fn mm_to_inches(length: Millimeters) -> Inches {
    length.to::<Inch>()
}

/// Convert a weight from grams to pounds.
pub fn grams_to_pounds(weight: Grams) -> Pounds {
    weight.to::<Pound>()
}

/// Convert an effort or soak duration from seconds to hours.
pub fn seconds_to_hours(duration: Seconds) -> Hours {
    duration.to::<Hour>()
}

/// Round to one decimal place (table cells that report tenths).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places (CPUE, biomass, pounds).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Divide, returning `None` when the denominator is zero, negative, or not
/// a number. Every ratio in the metrics engine goes through here.
pub fn safe_divide(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator > 0.0 && denominator.is_finite() {
        Some(numerator / denominator)
    } else {
        None
    }
}

/// Catch-per-unit-effort in fish per hour, or the `"N/A"` sentinel when the
/// event has no usable effort.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CpueValue {
    PerHour(f64),
    Unavailable,
}

impl CpueValue {
    /// Build from a safe division, mapping an undefined ratio to the sentinel.
    pub fn from_ratio(fish_count: f64, effort_hours: f64) -> Self {
        match safe_divide(fish_count, effort_hours) {
            Some(v) => CpueValue::PerHour(v),
            None => CpueValue::Unavailable,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CpueValue::PerHour(v) => Some(*v),
            CpueValue::Unavailable => None,
        }
    }
}

impl std::fmt::Display for CpueValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CpueValue::PerHour(v) => write!(f, "{:.2}", v),
            CpueValue::Unavailable => write!(f, "N/A"),
        }
    }
}

impl Serialize for CpueValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            CpueValue::PerHour(v) => serializer.serialize_f64(*v),
            CpueValue::Unavailable => serializer.serialize_str("N/A"),
        }
    }
}

impl<'de> Deserialize<'de> for CpueValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(v) => Ok(CpueValue::PerHour(v)),
            Raw::Text(s) if s == "N/A" => Ok(CpueValue::Unavailable),
            Raw::Text(other) => Err(serde::de::Error::custom(format!(
                "invalid CPUE value: {other:?}"
            ))),
        }
    }
}
