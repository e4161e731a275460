//! Configuration for the inference engine.

/// Configuration for `TsukamotoEngine`
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Attach a per-rule firing trace to each prediction
    pub include_trace: bool,
    /// Minimum per-condition confidence before a winner is reported
    pub winner_confidence_gate: f64,
    /// Log rules whose antecedent fails during evaluation
    pub log_rule_failures: bool,
    /// Winner score at or above this advises seeking care
    pub warning_threshold: f64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            include_trace: false,
            winner_confidence_gate: 0.95,
            log_rule_failures: true,
            warning_threshold: 60.0,
        }
    }
}
