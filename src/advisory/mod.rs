//! Advisory output for triage predictions
//!
//! Translates a prediction into coarse, non-diagnostic guidance and exposes
//! the questionnaire schema so form-rendering collaborators do not duplicate
//! the symptom table. All output here is advisory wording only; the engine's
//! numbers are passed through untouched.

use serde::Serialize;

use crate::config::InferenceConfig;
use crate::engine::Prediction;
use crate::models::Symptom;

/// Winner score below the warning threshold but at or above this advises rest
pub const REST_THRESHOLD: f64 = 40.0;

/// Overall confidence below this appends an uncertainty caveat
pub const LOW_CONFIDENCE_CUTOFF: f64 = 0.6;

/// Coarse recommendation levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceLevel {
    Monitor,
    Rest,
    SeekCare,
}

impl AdviceLevel {
    /// Pick a level from a prediction, using the configured warning threshold
    ///
    /// Without a gated winner there is no score to act on, so the level
    /// stays at `Monitor`.
    #[must_use]
    pub fn for_prediction(prediction: &Prediction, warning_threshold: f64) -> Self {
        match &prediction.winner {
            Some(winner) if winner.score >= warning_threshold => Self::SeekCare,
            Some(winner) if winner.score >= REST_THRESHOLD => Self::Rest,
            _ => Self::Monitor,
        }
    }

    /// Get the advisory sentence for this level
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::SeekCare => "High score. Please consult a healthcare facility promptly.",
            Self::Rest => "Rest and stay hydrated. Consult a clinician if symptoms do not improve.",
            Self::Monitor => "Monitor your symptoms. Consult a clinician if they worsen.",
        }
    }
}

/// Render the advisory sentence for a prediction
///
/// Appends an uncertainty caveat when a winner was reported but the overall
/// confidence across active rules is low.
#[must_use]
pub fn recommendation(prediction: &Prediction, config: &InferenceConfig) -> String {
    let level = AdviceLevel::for_prediction(prediction, config.warning_threshold);
    let mut text = level.message().to_string();
    if prediction.winner.is_some() && prediction.overall_confidence < LOW_CONFIDENCE_CUTOFF {
        text.push_str(&format!(
            " (confidence {:.1}%, result is uncertain)",
            prediction.overall_confidence * 100.0
        ));
    }
    text
}

/// One questionnaire entry
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    /// Stable symptom key
    pub key: &'static str,
    /// Human label for the form
    pub label: &'static str,
    /// Canonical select options
    pub options: &'static [&'static str],
    /// Default answer when the user skips the question
    pub default: &'static str,
}

/// Canonical answer options for select-style forms
pub const ANSWER_OPTIONS: &[&str] = &[
    "none",
    "mild",
    "moderate",
    "severe",
    "very severe",
    "sometimes",
    "frequent",
    "yes",
];

/// The fixed questionnaire, one entry per symptom in canonical order
#[must_use]
pub fn questionnaire() -> Vec<Question> {
    Symptom::ALL
        .into_iter()
        .map(|symptom| Question {
            key: symptom.key(),
            label: symptom.label(),
            options: ANSWER_OPTIONS,
            default: "none",
        })
        .collect()
}
