//! Export scale presets.
//!
//! A scale is either one of the quick-select [`PRESET_SCALES`] or `Custom`,
//! meaning the width/height were entered directly.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Quick-select export scales, ascending.
pub const PRESET_SCALES: [f64; 12] = [0.25, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

/// Absolute tolerance when matching an implied scale against the presets.
const PRESET_TOLERANCE: f64 = 0.01;

/// Export scale selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportScale {
    /// One of [`PRESET_SCALES`].
    Preset(f64),
    /// Explicit width/height, no preset applies.
    Custom,
}

impl ExportScale {
    /// Scale applied when a document is first loaded.
    pub const DEFAULT: Self = Self::Preset(2.0);

    /// The multiplier, if this is a preset.
    pub const fn factor(self) -> Option<f64> {
        match self {
            Self::Preset(s) => Some(s),
            Self::Custom => None,
        }
    }
}

impl Default for ExportScale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Find the first preset within tolerance of `implied`, in list order.
pub fn match_preset(implied: f64) -> ExportScale {
    PRESET_SCALES
        .iter()
        .copied()
        .find(|s| (s - implied).abs() < PRESET_TOLERANCE)
        .map_or(ExportScale::Custom, ExportScale::Preset)
}

impl fmt::Display for ExportScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preset(s) => write!(f, "{s}x"),
            Self::Custom => f.write_str("custom"),
        }
    }
}

/// Error for scale strings that are neither a preset nor `custom`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a preset scale (expected one of 0.25, 0.5, 0.75, 1, 1.5, 2..8 or `custom`)")]
pub struct ParseScaleError(String);

impl FromStr for ExportScale {
    type Err = ParseScaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("custom") {
            return Ok(Self::Custom);
        }

        // Accept "2" as well as "2x"
        let number = trimmed.strip_suffix(['x', 'X']).unwrap_or(trimmed);
        let value: f64 = number
            .parse()
            .map_err(|_| ParseScaleError(s.to_string()))?;

        PRESET_SCALES
            .iter()
            .copied()
            .find(|p| *p == value)
            .map(Self::Preset)
            .ok_or_else(|| ParseScaleError(s.to_string()))
    }
}

impl Serialize for ExportScale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Preset(s) => serializer.serialize_f64(*s),
            Self::Custom => serializer.serialize_str("custom"),
        }
    }
}
