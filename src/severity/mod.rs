//! Severity readings derived from questionnaire answers
//!
//! Free-text answers are parsed into numeric severities on the 0-10 scale by
//! [`parse_severity`]; a [`SeverityVector`] holds one clamped reading per
//! symptom for the lifetime of a single request.

pub mod parse;

use std::collections::BTreeMap;

use crate::models::Symptom;

pub use parse::parse_severity;

/// Free-text questionnaire answers, keyed by symptom
#[derive(Debug, Clone, Default)]
pub struct SymptomAnswers {
    answers: BTreeMap<Symptom, String>,
}

impl SymptomAnswers {
    /// Create an empty answer set; absent symptoms read as "none"
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer for one symptom
    pub fn set(&mut self, symptom: Symptom, text: impl Into<String>) {
        self.answers.insert(symptom, text.into());
    }

    /// Record the answer for one symptom, builder style
    #[must_use]
    pub fn with(mut self, symptom: Symptom, text: impl Into<String>) -> Self {
        self.set(symptom, text);
        self
    }

    /// Get the recorded answer for a symptom, if any
    #[must_use]
    pub fn answer(&self, symptom: Symptom) -> Option<&str> {
        self.answers.get(&symptom).map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<(Symptom, S)> for SymptomAnswers {
    fn from_iter<I: IntoIterator<Item = (Symptom, S)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(symptom, text)| (symptom, text.into()))
                .collect(),
        }
    }
}

/// Parsed severity readings for every symptom, clamped to the 0-10 scale
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityVector {
    values: [f64; Symptom::COUNT],
}

impl SeverityVector {
    /// Parse a full answer set, defaulting absent symptoms to "none"
    #[must_use]
    pub fn from_answers(answers: &SymptomAnswers) -> Self {
        let mut vector = Self::default();
        for symptom in Symptom::ALL {
            let text = answers.answer(symptom).unwrap_or("none");
            vector.set(symptom, parse_severity(text));
        }
        vector
    }

    /// Get the severity reading for one symptom
    #[must_use]
    pub const fn get(&self, symptom: Symptom) -> f64 {
        self.values[symptom.index()]
    }

    /// Set the severity reading for one symptom, clamping to [0, 10]
    pub fn set(&mut self, symptom: Symptom, severity: f64) {
        self.values[symptom.index()] = severity.clamp(0.0, 10.0);
    }

    /// Readings keyed by symptom, in canonical order
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<Symptom, f64> {
        Symptom::ALL
            .into_iter()
            .map(|symptom| (symptom, self.get(symptom)))
            .collect()
    }
}

impl Default for SeverityVector {
    fn default() -> Self {
        Self {
            values: [0.0; Symptom::COUNT],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_answers_read_as_zero() {
        let answers = SymptomAnswers::new().with(Symptom::Fever, "severe");
        let vector = SeverityVector::from_answers(&answers);
        assert_eq!(vector.get(Symptom::Fever), 8.0);
        assert_eq!(vector.get(Symptom::Cough), 0.0);
    }

    #[test]
    fn test_set_clamps_to_scale() {
        let mut vector = SeverityVector::default();
        vector.set(Symptom::Rash, 12.0);
        assert_eq!(vector.get(Symptom::Rash), 10.0);
        vector.set(Symptom::Rash, -1.0);
        assert_eq!(vector.get(Symptom::Rash), 0.0);
    }

    #[test]
    fn test_map_covers_all_symptoms() {
        let vector = SeverityVector::default();
        assert_eq!(vector.to_map().len(), Symptom::COUNT);
    }
}
