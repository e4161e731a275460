//! Weighted fuzzy rule bank
//!
//! Fifteen fixed rules, three per condition: two high-band rules rewarding
//! pathognomonic symptom combinations and one low-band rule penalizing an
//! atypical presentation. Rules are plain records with a closure-valued
//! antecedent; there is no rule hierarchy. The bank is built once and shared
//! read-only across inference calls.

use std::fmt;

use crate::error::Result;
use crate::membership::Band;
use crate::models::{Condition, Symptom};
use crate::severity::SeverityVector;

/// Antecedent evaluation capability: severity vector in, raw degree out
pub type Antecedent = Box<dyn Fn(&SeverityVector) -> Result<f64> + Send + Sync>;

/// Fuzzy AND: minimum over the operand degrees, 0 when empty
#[must_use]
pub fn fuzzy_and(degrees: &[f64]) -> f64 {
    degrees.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Fuzzy OR: maximum over the operand degrees, 0 when empty
#[must_use]
pub fn fuzzy_or(degrees: &[f64]) -> f64 {
    degrees.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// Membership degree of one symptom reading in one band
fn mu(symptom: Symptom, band: Band, vector: &SeverityVector) -> f64 {
    symptom.group().degree(band, vector.get(symptom))
}

/// Transient result of firing one rule
#[derive(Debug, Clone, Copy)]
pub struct Firing {
    /// Raw firing strength, clamped to [0, 1]
    pub alpha: f64,
    /// `alpha * weight * base_confidence`; may exceed 1.0
    pub weighted: f64,
    /// Crisp 0-100 claim from the consequent band
    pub z: f64,
}

/// One weighted fuzzy rule
pub struct Rule {
    condition: Condition,
    band: Band,
    antecedent: Antecedent,
    weight: f64,
    base_confidence: f64,
    note: &'static str,
}

impl Rule {
    /// Create a rule from its parts
    pub fn new(
        condition: Condition,
        band: Band,
        weight: f64,
        base_confidence: f64,
        note: &'static str,
        antecedent: impl Fn(&SeverityVector) -> Result<f64> + Send + Sync + 'static,
    ) -> Self {
        Self {
            condition,
            band,
            antecedent: Box::new(antecedent),
            weight,
            base_confidence,
            note,
        }
    }

    /// Get the condition this rule scores
    #[must_use]
    pub const fn condition(&self) -> Condition {
        self.condition
    }

    /// Get the consequent band this rule asserts
    #[must_use]
    pub const fn band(&self) -> Band {
        self.band
    }

    /// Get the rule weight
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Get the clinical base confidence of this rule
    #[must_use]
    pub const fn base_confidence(&self) -> f64 {
        self.base_confidence
    }

    /// Get the clinical note attached to this rule
    #[must_use]
    pub const fn note(&self) -> &'static str {
        self.note
    }

    /// Evaluate the antecedent and derive the rule's crisp claim
    ///
    /// The raw firing strength is clamped to [0, 1]; the weighted strength
    /// is not, and is only clamped inside the consequent inversion.
    pub fn fire(&self, vector: &SeverityVector) -> Result<Firing> {
        let alpha = (self.antecedent)(vector)?.clamp(0.0, 1.0);
        let weighted = alpha * self.weight * self.base_confidence;
        let z = self.band.crisp_value(weighted);
        Ok(Firing { alpha, weighted, z })
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("condition", &self.condition)
            .field("band", &self.band)
            .field("weight", &self.weight)
            .field("base_confidence", &self.base_confidence)
            .field("note", &self.note)
            .finish_non_exhaustive()
    }
}

/// The immutable list of rules evaluated on every inference call
#[derive(Debug)]
pub struct RuleBank {
    rules: Vec<Rule>,
}

impl RuleBank {
    /// Build the fixed clinical rule set
    #[must_use]
    pub fn standard() -> Self {
        use Band::{High, Low, Medium};
        use Symptom::{
            AbdominalPain, BodyAche, Cough, Diarrhea, Fatigue, Fever, Headache, NauseaVomit,
            SoreThroat,
        };

        let mut rules = Vec::with_capacity(15);

        // Influenza
        rules.push(Rule::new(
            Condition::Influenza,
            High,
            1.5,
            0.95,
            "influenza: classic triad of high fever, cough and sore throat",
            |v| {
                Ok(fuzzy_and(&[
                    mu(Fever, High, v),
                    mu(Cough, High, v),
                    mu(SoreThroat, High, v),
                ]))
            },
        ));
        rules.push(Rule::new(
            Condition::Influenza,
            High,
            1.3,
            0.9,
            "influenza: fever with muscle ache and fatigue",
            |v| {
                Ok(fuzzy_and(&[
                    mu(Fever, High, v),
                    mu(BodyAche, High, v),
                    mu(Fatigue, High, v),
                ]))
            },
        ));
        rules.push(Rule::new(
            Condition::Influenza,
            Low,
            1.2,
            0.9,
            "influenza: dominant GI symptoms, atypical presentation",
            |v| Ok(fuzzy_and(&[mu(Diarrhea, High, v), mu(AbdominalPain, High, v)])),
        ));

        // Dengue fever
        rules.push(Rule::new(
            Condition::DengueFever,
            High,
            1.4,
            0.92,
            "dengue: classic signs of fever, headache and body ache",
            |v| {
                Ok(fuzzy_and(&[
                    mu(Fever, High, v),
                    mu(Headache, High, v),
                    mu(BodyAche, High, v),
                ]))
            },
        ));
        rules.push(Rule::new(
            Condition::DengueFever,
            High,
            1.3,
            0.9,
            "dengue: warning signs of fever with nausea and abdominal pain",
            |v| {
                Ok(fuzzy_and(&[
                    mu(Fever, High, v),
                    mu(NauseaVomit, High, v),
                    mu(AbdominalPain, High, v),
                ]))
            },
        ));
        rules.push(Rule::new(
            Condition::DengueFever,
            Low,
            1.1,
            0.85,
            "dengue: dominant cough, atypical presentation",
            |v| Ok(mu(Cough, High, v)),
        ));

        // Typhoid fever
        rules.push(Rule::new(
            Condition::TyphoidFever,
            High,
            1.3,
            0.88,
            "typhoid: classic presentation of fever, headache and fatigue",
            |v| {
                Ok(fuzzy_and(&[
                    mu(Fever, High, v),
                    mu(Headache, High, v),
                    mu(Fatigue, High, v),
                ]))
            },
        ));
        rules.push(Rule::new(
            Condition::TyphoidFever,
            High,
            1.2,
            0.85,
            "typhoid: GI-dominant course with moderate fever",
            |v| {
                Ok(fuzzy_and(&[
                    mu(Fever, Medium, v),
                    mu(Diarrhea, High, v),
                    mu(AbdominalPain, High, v),
                ]))
            },
        ));
        rules.push(Rule::new(
            Condition::TyphoidFever,
            Low,
            1.0,
            0.8,
            "typhoid: dominant respiratory symptoms, atypical presentation",
            |v| Ok(fuzzy_and(&[mu(Cough, High, v), mu(SoreThroat, High, v)])),
        ));

        // Gastroenteritis
        rules.push(Rule::new(
            Condition::Gastroenteritis,
            High,
            1.4,
            0.9,
            "gastroenteritis: classic GI triad",
            |v| {
                Ok(fuzzy_and(&[
                    mu(NauseaVomit, High, v),
                    mu(Diarrhea, High, v),
                    mu(AbdominalPain, High, v),
                ]))
            },
        ));
        rules.push(Rule::new(
            Condition::Gastroenteritis,
            High,
            1.2,
            0.85,
            "gastroenteritis: GI symptoms with minimal fever",
            |v| {
                Ok(fuzzy_and(&[
                    mu(Diarrhea, High, v),
                    mu(AbdominalPain, High, v),
                    mu(Fever, Low, v),
                ]))
            },
        ));
        rules.push(Rule::new(
            Condition::Gastroenteritis,
            Low,
            1.0,
            0.8,
            "gastroenteritis: dominant respiratory symptoms, atypical presentation",
            |v| Ok(fuzzy_and(&[mu(Cough, High, v), mu(SoreThroat, High, v)])),
        ));

        // Upper respiratory tract infection
        rules.push(Rule::new(
            Condition::UpperRespiratoryInfection,
            High,
            1.3,
            0.88,
            "URTI: classic respiratory triad with moderate fever",
            |v| {
                Ok(fuzzy_and(&[
                    mu(Cough, High, v),
                    mu(SoreThroat, High, v),
                    mu(Fever, Medium, v),
                ]))
            },
        ));
        rules.push(Rule::new(
            Condition::UpperRespiratoryInfection,
            High,
            1.2,
            0.85,
            "URTI: severe presentation with fever, cough and fatigue",
            |v| {
                Ok(fuzzy_and(&[
                    mu(Fever, High, v),
                    mu(Cough, High, v),
                    mu(Fatigue, High, v),
                ]))
            },
        ));
        rules.push(Rule::new(
            Condition::UpperRespiratoryInfection,
            Low,
            1.0,
            0.8,
            "URTI: dominant GI symptoms, atypical presentation",
            |v| Ok(fuzzy_and(&[mu(Diarrhea, High, v), mu(AbdominalPain, High, v)])),
        ));

        Self { rules }
    }

    /// Create a bank from a custom rule list
    #[must_use]
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Get all rules in evaluation order
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Iterate over the rules for one condition
    pub fn for_condition(&self, condition: Condition) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |rule| rule.condition() == condition)
    }

    /// Number of rules in the bank
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the bank holds no rules
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
