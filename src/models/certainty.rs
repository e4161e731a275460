//! Certainty labels for a gated winner.

use std::fmt;

use serde::Serialize;

/// Qualitative certainty attached to the winning condition
///
/// The full ladder is kept even though the default winner gate of 0.95 makes
/// the lower rungs unreachable in practice; see DESIGN.md.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Certainty {
    Low,
    Medium,
    High,
    VeryHigh,
    Definitive,
}

impl Certainty {
    /// Derive the certainty label from an aggregate condition confidence
    #[must_use]
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence > 0.98 {
            Self::Definitive
        } else if confidence > 0.95 {
            Self::VeryHigh
        } else if confidence > 0.90 {
            Self::High
        } else if confidence > 0.80 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Get a descriptive name for this certainty level
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Definitive => "Definitive",
        }
    }
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
