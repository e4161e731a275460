//! Candidate conditions scored by the rule bank.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TriageError;

/// The fixed set of conditions the rule bank can score
///
/// Variants are declared in ascending order of their display name; winner
/// tie-breaking relies on this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Condition {
    #[serde(rename = "Dengue Fever")]
    DengueFever,
    #[serde(rename = "Gastroenteritis")]
    Gastroenteritis,
    #[serde(rename = "Influenza")]
    Influenza,
    #[serde(rename = "Typhoid Fever")]
    TyphoidFever,
    #[serde(rename = "Upper Respiratory Tract Infection")]
    UpperRespiratoryInfection,
}

impl Condition {
    /// All scored conditions
    pub const ALL: [Self; 5] = [
        Self::DengueFever,
        Self::Gastroenteritis,
        Self::Influenza,
        Self::TyphoidFever,
        Self::UpperRespiratoryInfection,
    ];

    /// Get the display name for this condition
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DengueFever => "Dengue Fever",
            Self::Gastroenteritis => "Gastroenteritis",
            Self::Influenza => "Influenza",
            Self::TyphoidFever => "Typhoid Fever",
            Self::UpperRespiratoryInfection => "Upper Respiratory Tract Infection",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Condition {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|condition| condition.name() == s)
            .ok_or_else(|| TriageError::UnknownCondition(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_order_matches_name_order() {
        let mut names: Vec<&str> = Condition::ALL.iter().map(|c| c.name()).collect();
        names.sort_unstable();
        let declared: Vec<&str> = Condition::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names, declared);
    }

    #[test]
    fn test_name_roundtrip() {
        for condition in Condition::ALL {
            assert_eq!(condition.name().parse::<Condition>().unwrap(), condition);
        }
    }
}
