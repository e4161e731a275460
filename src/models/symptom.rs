//! Symptom catalogue
//!
//! The questionnaire covers a fixed set of ten symptoms. Each symptom has a
//! stable string key used by API collaborators, a human label for rendered
//! forms and reports, and a membership group selecting the fuzzy set
//! breakpoints that apply to it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TriageError;
use crate::membership::MembershipGroup;

/// The fixed set of symptoms covered by the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Fever,
    Cough,
    SoreThroat,
    Headache,
    BodyAche,
    NauseaVomit,
    Diarrhea,
    AbdominalPain,
    Rash,
    Fatigue,
}

impl Symptom {
    /// Number of symptoms in the questionnaire
    pub const COUNT: usize = 10;

    /// All symptoms in canonical questionnaire order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Fever,
        Self::Cough,
        Self::SoreThroat,
        Self::Headache,
        Self::BodyAche,
        Self::NauseaVomit,
        Self::Diarrhea,
        Self::AbdominalPain,
        Self::Rash,
        Self::Fatigue,
    ];

    /// Get the stable string key for this symptom
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Fever => "fever",
            Self::Cough => "cough",
            Self::SoreThroat => "sore_throat",
            Self::Headache => "headache",
            Self::BodyAche => "body_ache",
            Self::NauseaVomit => "nausea_vomit",
            Self::Diarrhea => "diarrhea",
            Self::AbdominalPain => "abdominal_pain",
            Self::Rash => "rash",
            Self::Fatigue => "fatigue",
        }
    }

    /// Get the human label for this symptom
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fever => "Fever",
            Self::Cough => "Cough",
            Self::SoreThroat => "Sore Throat",
            Self::Headache => "Headache",
            Self::BodyAche => "Muscle Ache",
            Self::NauseaVomit => "Nausea/Vomiting",
            Self::Diarrhea => "Diarrhea",
            Self::AbdominalPain => "Abdominal Pain",
            Self::Rash => "Skin Rash",
            Self::Fatigue => "Fatigue",
        }
    }

    /// Get the membership group assigned to this symptom
    #[must_use]
    pub const fn group(self) -> MembershipGroup {
        match self {
            Self::Fever => MembershipGroup::Fever,
            Self::SoreThroat | Self::Headache | Self::BodyAche | Self::AbdominalPain => {
                MembershipGroup::Pain
            }
            Self::Cough | Self::NauseaVomit | Self::Diarrhea | Self::Rash | Self::Fatigue => {
                MembershipGroup::Standard
            }
        }
    }

    /// Position of this symptom in [`Self::ALL`]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Symptom {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|symptom| symptom.key() == s)
            .ok_or_else(|| TriageError::UnknownSymptom(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip() {
        for symptom in Symptom::ALL {
            assert_eq!(symptom.key().parse::<Symptom>().unwrap(), symptom);
        }
    }

    #[test]
    fn test_unknown_key() {
        assert!("sniffles".parse::<Symptom>().is_err());
    }

    #[test]
    fn test_group_assignment() {
        assert_eq!(Symptom::Fever.group(), MembershipGroup::Fever);
        assert_eq!(Symptom::Headache.group(), MembershipGroup::Pain);
        assert_eq!(Symptom::SoreThroat.group(), MembershipGroup::Pain);
        assert_eq!(Symptom::Cough.group(), MembershipGroup::Standard);
    }
}
