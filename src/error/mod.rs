//! Error handling for the fuzzy triage engine.

use thiserror::Error;

/// Specialized error type for triage inference
#[derive(Debug, Error)]
pub enum TriageError {
    /// A rule antecedent could not be evaluated
    #[error("antecedent error: {0}")]
    Antecedent(String),
    /// A string key that matches no symptom in the questionnaire
    #[error("unknown symptom key: {0}")]
    UnknownSymptom(String),
    /// A string name that matches no scored condition
    #[error("unknown condition name: {0}")]
    UnknownCondition(String),
}

/// Result type for triage operations
pub type Result<T> = std::result::Result<T, TriageError>;
