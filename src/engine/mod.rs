//! Tsukamoto inference engine
//!
//! Fires the weighted rule bank against a parsed severity vector, aggregates
//! crisp contributions per condition into scores and confidences, and selects
//! a winner under a minimum-confidence gate. Inference is pure and
//! synchronous; the engine holds only immutable shared data and can serve
//! arbitrarily many concurrent calls without locking.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;
use smallvec::SmallVec;

use crate::config::InferenceConfig;
use crate::membership::Band;
use crate::models::{Certainty, Condition, Symptom};
use crate::rules::RuleBank;
use crate::severity::{SeverityVector, SymptomAnswers};

/// One fired rule in the optional prediction trace
#[derive(Debug, Clone, Serialize)]
pub struct FiringRecord {
    /// Clinical note of the rule
    pub note: &'static str,
    /// Consequent band the rule asserts
    pub band: Band,
    /// Raw firing strength
    pub alpha: f64,
    /// Weighted firing strength
    pub weighted: f64,
    /// Crisp severity claim (0-100)
    pub z: f64,
    /// Contribution to the condition aggregate
    pub contribution: f64,
    /// Rule weight
    pub weight: f64,
    /// Rule base confidence
    pub confidence: f64,
}

/// Gated best-guess condition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Winner {
    /// Winning condition
    pub condition: Condition,
    /// Confidence-discounted score (0-100)
    pub score: f64,
    /// Aggregate confidence (0-1)
    pub confidence: f64,
    /// Qualitative certainty label
    pub certainty: Certainty,
}

/// Outcome of one inference call
///
/// Serializes deterministically: identical inputs produce byte-identical
/// JSON. A condition is present in `scores` and `confidence` only when at
/// least one of its rules fired.
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    /// Numeric severities actually used, keyed by symptom
    pub inputs: BTreeMap<Symptom, f64>,
    /// Confidence-discounted score per condition (0-100, 2 decimals)
    pub scores: BTreeMap<Condition, f64>,
    /// Aggregate confidence per condition (0-1, 3 decimals)
    pub confidence: BTreeMap<Condition, f64>,
    /// Mean base confidence across all active rules
    pub overall_confidence: f64,
    /// Number of rules with a positive firing strength
    pub active_rules: usize,
    /// Best guess, present only when the confidence gate is met
    pub winner: Option<Winner>,
    /// Per-condition firing trace, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<BTreeMap<Condition, Vec<FiringRecord>>>,
}

impl Prediction {
    /// Conditions ranked by score, best first; name order breaks ties
    #[must_use]
    pub fn ranking(&self) -> Vec<(Condition, f64)> {
        self.scores
            .iter()
            .map(|(condition, score)| (*condition, *score))
            .sorted_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            .collect()
    }

    /// Serialize this prediction to the JSON payload API collaborators consume
    ///
    /// Identical predictions serialize to byte-identical strings.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[derive(Default)]
struct Accumulator {
    strength_z: f64,
    strength: f64,
    confidence_strength: f64,
}

static SHARED: LazyLock<TsukamotoEngine> = LazyLock::new(TsukamotoEngine::new);

/// Inference engine over an immutable rule bank
pub struct TsukamotoEngine {
    bank: RuleBank,
    config: InferenceConfig,
}

impl TsukamotoEngine {
    /// Create an engine over the standard bank with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create an engine over the standard bank with a custom configuration
    #[must_use]
    pub fn with_config(config: InferenceConfig) -> Self {
        Self::with_bank(RuleBank::standard(), config)
    }

    /// Create an engine over a custom rule bank
    #[must_use]
    pub fn with_bank(bank: RuleBank, config: InferenceConfig) -> Self {
        Self { bank, config }
    }

    /// Get the process-wide engine over the standard bank, built on first use
    #[must_use]
    pub fn shared() -> &'static Self {
        &SHARED
    }

    /// Get the engine configuration
    #[must_use]
    pub const fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Get the rule bank
    #[must_use]
    pub const fn bank(&self) -> &RuleBank {
        &self.bank
    }

    /// Run inference over one free-text answer set
    ///
    /// Never fails: unparseable answers read as severity 0, failing rules are
    /// skipped, and the worst case is an empty, zero-confidence prediction.
    #[must_use]
    pub fn predict(&self, answers: &SymptomAnswers) -> Prediction {
        self.predict_vector(&SeverityVector::from_answers(answers))
    }

    /// Run inference over an already parsed severity vector
    #[must_use]
    pub fn predict_vector(&self, vector: &SeverityVector) -> Prediction {
        let mut accum: FxHashMap<Condition, Accumulator> = FxHashMap::default();
        let mut firings: FxHashMap<Condition, SmallVec<[FiringRecord; 3]>> = FxHashMap::default();
        let mut active_rules = 0usize;
        let mut confidence_total = 0.0;

        for rule in self.bank.rules() {
            let firing = match rule.fire(vector) {
                Ok(firing) => firing,
                Err(err) => {
                    if self.config.log_rule_failures {
                        log::warn!("skipping rule `{}`: {err}", rule.note());
                    }
                    continue;
                }
            };
            if firing.alpha <= 0.0 {
                continue;
            }

            active_rules += 1;
            confidence_total += rule.base_confidence();

            let entry = accum.entry(rule.condition()).or_default();
            entry.strength_z += firing.weighted * firing.z;
            entry.strength += firing.weighted;
            entry.confidence_strength += rule.base_confidence() * firing.weighted;

            if self.config.include_trace {
                firings.entry(rule.condition()).or_default().push(FiringRecord {
                    note: rule.note(),
                    band: rule.band(),
                    alpha: round4(firing.alpha),
                    weighted: round4(firing.weighted),
                    z: round2(firing.z),
                    contribution: round2(firing.weighted * firing.z),
                    weight: rule.weight(),
                    confidence: rule.base_confidence(),
                });
            }
        }

        let mut scores = BTreeMap::new();
        let mut confidence = BTreeMap::new();
        for (condition, acc) in &accum {
            if acc.strength <= 0.0 {
                continue;
            }
            let base_score = acc.strength_z / acc.strength;
            let disease_confidence = acc.confidence_strength / acc.strength;
            scores.insert(*condition, round2(base_score * disease_confidence));
            confidence.insert(*condition, round3(disease_confidence));
        }

        let winner = self.select_winner(&scores, &confidence);
        let overall_confidence = if active_rules > 0 {
            round3(confidence_total / active_rules as f64)
        } else {
            0.0
        };

        log::debug!(
            "inference complete: {active_rules} active rules, {} scored conditions, winner: {:?}",
            scores.len(),
            winner.as_ref().map(|w| w.condition)
        );

        Prediction {
            inputs: vector.to_map(),
            scores,
            confidence,
            overall_confidence,
            active_rules,
            winner,
            trace: self.config.include_trace.then(|| {
                firings
                    .into_iter()
                    .map(|(condition, records)| (condition, records.into_vec()))
                    .collect()
            }),
        }
    }

    /// Pick the condition with the highest confidence-weighted score
    ///
    /// Ties resolve to the lexicographically first condition name. The winner
    /// is withheld entirely when its confidence falls below the gate.
    fn select_winner(
        &self,
        scores: &BTreeMap<Condition, f64>,
        confidence: &BTreeMap<Condition, f64>,
    ) -> Option<Winner> {
        let (condition, weighted_score) = scores
            .iter()
            .map(|(condition, score)| (*condition, score * confidence[condition]))
            .max_by(|a, b| a.1.total_cmp(&b.1).then_with(|| b.0.cmp(&a.0)))?;
        if weighted_score <= 0.0 {
            return None;
        }
        let winner_confidence = confidence[&condition];
        if winner_confidence < self.config.winner_confidence_gate {
            return None;
        }
        Some(Winner {
            condition,
            score: scores[&condition],
            confidence: winner_confidence,
            certainty: Certainty::from_confidence(winner_confidence),
        })
    }
}

impl Default for TsukamotoEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
