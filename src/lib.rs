//! A Rust library for fuzzy Tsukamoto inference over self-reported symptom
//! questionnaires: free-text severity parsing, per-symptom membership
//! functions, a weighted fuzzy rule bank and confidence-gated predictions
//! with optional rule traces.
//!
//! The output is advisory, never diagnostic. Scores express how well each
//! candidate condition explains the reported symptoms on a 0-100 scale; a
//! single best guess is reported only when its aggregate confidence clears
//! the configured gate.
//!
//! ```
//! use fuzzy_triage::{Symptom, SymptomAnswers, TsukamotoEngine};
//!
//! let answers = SymptomAnswers::new()
//!     .with(Symptom::Fever, "severe")
//!     .with(Symptom::Cough, "severe")
//!     .with(Symptom::SoreThroat, "severe");
//!
//! let prediction = TsukamotoEngine::shared().predict(&answers);
//! assert!(prediction.winner.is_some());
//! ```

pub mod advisory;
pub mod config;
pub mod engine;
pub mod error;
pub mod membership;
pub mod models;
pub mod rules;
pub mod severity;

// Re-export the most common types for easier use
// Core types
pub use config::InferenceConfig;
pub use error::{Result, TriageError};
pub use models::{Certainty, Condition, Symptom};

// Fuzzy primitives
pub use membership::{Band, MembershipFunction, MembershipGroup};

// Rule bank and inference
pub use engine::{FiringRecord, Prediction, TsukamotoEngine, Winner};
pub use rules::{Rule, RuleBank, fuzzy_and, fuzzy_or};
pub use severity::{SeverityVector, SymptomAnswers, parse_severity};

// Advisory output
pub use advisory::{AdviceLevel, Question, questionnaire, recommendation};
