use fuzzy_triage::error::TriageError;
use fuzzy_triage::{
    Band, Certainty, Condition, InferenceConfig, Rule, RuleBank, Symptom, SymptomAnswers,
    TsukamotoEngine,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn influenza_triad() -> SymptomAnswers {
    SymptomAnswers::new()
        .with(Symptom::Fever, "severe")
        .with(Symptom::Cough, "severe")
        .with(Symptom::SoreThroat, "severe")
}

fn gi_syndrome() -> SymptomAnswers {
    SymptomAnswers::new()
        .with(Symptom::NauseaVomit, "severe")
        .with(Symptom::Diarrhea, "severe")
        .with(Symptom::AbdominalPain, "severe")
        .with(Symptom::Fever, "none")
}

/// Test that an all-"none" questionnaire activates no rules at all
#[test]
fn test_no_symptoms_no_active_rules() {
    init_logging();
    let prediction = TsukamotoEngine::shared().predict(&SymptomAnswers::new());

    assert_eq!(prediction.active_rules, 0);
    assert!(prediction.scores.is_empty());
    assert!(prediction.confidence.is_empty());
    assert!(prediction.winner.is_none());
    assert_eq!(prediction.overall_confidence, 0.0);
}

/// Test the classic influenza presentation: the triad rule fires at full
/// strength and the confidence gate is met exactly
#[test]
fn test_influenza_triad_wins() {
    init_logging();
    let prediction = TsukamotoEngine::shared().predict(&influenza_triad());

    // severity 8.0 sits inside the "high" plateau of all three symptoms
    assert_eq!(prediction.inputs[&Symptom::Fever], 8.0);
    assert_eq!(prediction.scores[&Condition::Influenza], 95.0);
    assert_eq!(prediction.confidence[&Condition::Influenza], 0.95);

    // the cough answer also trips the atypical-presentation penalty rules
    assert_eq!(prediction.active_rules, 4);
    assert_eq!(prediction.overall_confidence, 0.85);
    assert_eq!(prediction.scores[&Condition::TyphoidFever], 16.0);
    assert_eq!(prediction.scores[&Condition::Gastroenteritis], 16.0);

    let winner = prediction.winner.expect("confidence gate should be met");
    assert_eq!(winner.condition, Condition::Influenza);
    assert_eq!(winner.score, 95.0);
    assert_eq!(winner.confidence, 0.95);
    assert_eq!(winner.certainty, Certainty::High);
}

/// Test that a pure GI syndrome is dominated by gastroenteritis while the
/// fever-dependent dengue and typhoid patterns stay silent
#[test]
fn test_gi_syndrome_dominated_by_gastroenteritis() {
    init_logging();
    let prediction = TsukamotoEngine::shared().predict(&gi_syndrome());

    assert!(!prediction.scores.contains_key(&Condition::DengueFever));
    assert!(!prediction.scores.contains_key(&Condition::TyphoidFever));
    assert_eq!(prediction.scores[&Condition::Gastroenteritis], 87.76);
    assert_eq!(prediction.confidence[&Condition::Gastroenteritis], 0.878);

    // the GI answers feed the influenza and URTI penalty rules too
    assert_eq!(prediction.scores[&Condition::Influenza], 0.0);
    assert_eq!(prediction.ranking()[0].0, Condition::Gastroenteritis);

    // top score exists but its confidence misses the gate
    assert!(prediction.winner.is_none());
}

/// Test that every scored condition also carries a confidence entry
#[test]
fn test_score_and_confidence_maps_agree() {
    let prediction = TsukamotoEngine::shared().predict(&influenza_triad());
    let score_keys: Vec<_> = prediction.scores.keys().collect();
    let confidence_keys: Vec<_> = prediction.confidence.keys().collect();
    assert_eq!(score_keys, confidence_keys);
    assert!(!score_keys.is_empty());
}

/// Test that identical inputs serialize to byte-identical predictions
#[test]
fn test_inference_is_idempotent() {
    let engine = TsukamotoEngine::with_config(InferenceConfig {
        include_trace: true,
        ..InferenceConfig::default()
    });
    let answers = influenza_triad();

    let first = engine.predict(&answers).to_json().unwrap();
    let second = engine.predict(&answers).to_json().unwrap();
    assert_eq!(first, second);
}

/// Test the winner invariant: maximum confidence-weighted score and a
/// confidence at or above the gate
#[test]
fn test_winner_invariant() {
    let prediction = TsukamotoEngine::shared().predict(&influenza_triad());
    let winner = prediction.winner.as_ref().expect("winner expected");

    assert!(winner.confidence >= 0.95);
    let winner_weighted = winner.score * winner.confidence;
    for (condition, score) in &prediction.scores {
        let weighted = score * prediction.confidence[condition];
        assert!(weighted <= winner_weighted, "{condition} outranks the winner");
    }
}

/// Test that lowering the confidence gate surfaces sub-gate winners with the
/// lower rungs of the certainty ladder
#[test]
fn test_custom_gate_reaches_lower_certainty_labels() {
    let engine = TsukamotoEngine::with_config(InferenceConfig {
        winner_confidence_gate: 0.0,
        ..InferenceConfig::default()
    });
    let prediction = engine.predict(&gi_syndrome());

    let winner = prediction.winner.expect("gate at zero should always report");
    assert_eq!(winner.condition, Condition::Gastroenteritis);
    assert_eq!(winner.confidence, 0.878);
    assert_eq!(winner.certainty, Certainty::Medium);
}

/// Test the opt-in rule trace: one record per active rule, grouped by
/// condition, with degrees on their documented scales
#[test]
fn test_trace_records_match_active_rules() {
    let engine = TsukamotoEngine::with_config(InferenceConfig {
        include_trace: true,
        ..InferenceConfig::default()
    });
    let prediction = engine.predict(&influenza_triad());

    let trace = prediction.trace.as_ref().expect("trace requested");
    let record_count: usize = trace.values().map(Vec::len).sum();
    assert_eq!(record_count, prediction.active_rules);

    for (condition, records) in trace {
        assert!(prediction.scores.contains_key(condition));
        for record in records {
            assert!((0.0..=1.0).contains(&record.alpha));
            assert!((0.0..=100.0).contains(&record.z));
            assert!(record.weighted > 0.0);
        }
    }
}

/// Test that the default engine omits the trace entirely
#[test]
fn test_trace_is_opt_in() {
    let prediction = TsukamotoEngine::shared().predict(&influenza_triad());
    assert!(prediction.trace.is_none());
}

/// Test that a failing antecedent is skipped without aborting the call
#[test]
fn test_failing_rule_is_skipped() {
    init_logging();
    let bank = RuleBank::from_rules(vec![
        Rule::new(Condition::Influenza, Band::High, 1.5, 0.95, "always fails", |_| {
            Err(TriageError::Antecedent("synthetic failure".to_string()))
        }),
        Rule::new(Condition::Influenza, Band::High, 1.5, 0.95, "always fires", |_| Ok(1.0)),
    ]);
    let engine = TsukamotoEngine::with_bank(bank, InferenceConfig::default());
    let prediction = engine.predict(&SymptomAnswers::new());

    assert_eq!(prediction.active_rules, 1);
    assert_eq!(prediction.scores[&Condition::Influenza], 95.0);
}

/// Test that numeric answers flow through to the reported severity vector
#[test]
fn test_numeric_answers_in_inputs() {
    let answers = SymptomAnswers::new()
        .with(Symptom::Fever, "7.5")
        .with(Symptom::Cough, "7,5");
    let prediction = TsukamotoEngine::shared().predict(&answers);

    assert_eq!(prediction.inputs[&Symptom::Fever], 7.5);
    assert_eq!(prediction.inputs[&Symptom::Cough], 7.5);
    assert_eq!(prediction.inputs.len(), Symptom::COUNT);
}
