//! Free-text severity parsing
//!
//! Turns one questionnaire answer into a numeric severity on the 0-10 scale.
//! Resolution order: numeric input, spelled-out numerals, exact lexicon
//! match, then substring heuristics checked from most to least severe so that
//! compound phrases containing several cue words resolve to the worse-case
//! reading. Unrecognized text maps to 0.0; parsing never fails.

use itertools::Itertools;

/// Spelled-out numerals accepted as whole words
const NUMERAL_WORDS: &[(&str, f64)] = &[
    ("zero", 0.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
];

/// Ordered phrase lexicon; the first full-string match wins
const LEXICON: &[(&str, f64)] = &[
    // No symptom
    ("none", 0.0),
    ("no", 0.0),
    ("nothing", 0.0),
    ("without", 0.0),
    ("not at all", 0.0),
    ("empty", 0.0),
    ("nil", 0.0),
    ("absent", 0.0),
    // Barely present
    ("extremely rare", 1.5),
    ("very rarely", 1.5),
    ("minimal", 1.5),
    ("hardly", 1.5),
    ("hardly any", 1.5),
    ("trace", 1.5),
    ("rare", 2.0),
    ("very mild", 2.0),
    ("very slight", 2.0),
    ("slight", 2.0),
    // Mild
    ("mild", 3.0),
    ("somewhat", 3.0),
    ("light", 3.0),
    ("weak", 3.0),
    ("faint", 3.0),
    ("somewhat mild", 3.5),
    ("fairly mild", 3.5),
    ("mild to moderate", 3.5),
    // Intermittent
    ("sometimes", 4.5),
    ("occasional", 4.5),
    ("occasionally", 4.5),
    ("on and off", 4.5),
    ("once in a while", 4.5),
    ("intermittent", 4.5),
    // Moderate
    ("moderate", 5.5),
    ("normal", 5.5),
    ("usual", 5.5),
    ("fair", 5.5),
    ("average", 5.5),
    ("middling", 5.5),
    ("somewhat moderate", 6.0),
    ("fairly moderate", 6.0),
    ("moderate plus", 6.0),
    // Frequent or fairly severe
    ("frequent", 7.0),
    ("fairly frequent", 7.0),
    ("fairly severe", 7.0),
    ("often", 7.0),
    ("quite often", 7.0),
    ("somewhat severe", 7.0),
    ("quite severe", 7.5),
    ("rather severe", 7.5),
    ("pretty bad", 7.5),
    // Affirmative, read as clearly present
    ("yes", 7.5),
    ("yeah", 7.5),
    ("present", 7.5),
    ("affirmative", 7.5),
    ("correct", 7.5),
    ("positive", 7.5),
    ("true", 7.5),
    // Severe
    ("severe", 8.0),
    ("high", 8.0),
    ("relapsing", 8.0),
    ("intense", 8.0),
    ("heavy", 8.0),
    ("harsh", 8.0),
    ("very frequent", 8.5),
    ("almost always", 8.5),
    ("nearly always", 8.5),
    ("most of the time", 8.5),
    ("very severe", 9.5),
    ("very intense", 9.5),
    ("extreme", 9.5),
    ("extremely severe", 9.5),
    ("unbearable", 9.5),
    ("excruciating", 9.5),
    ("maximal", 10.0),
    ("worst", 10.0),
    ("critical", 10.0),
    ("worst ever", 10.0),
];

// Substring heuristic classes, most severe first. The ordering is the
// tie-break for compound phrases.
const VERY_SEVERE_CUES: &[&str] = &["very severe", "very intense", "extreme", "unbearable", "worst"];
const VERY_FREQUENT_CUES: &[&str] = &["very frequent", "almost always", "nearly always", "constant"];
const SEVERE_CUES: &[&str] = &["severe", "frequent", "relapsing", "intense", "harsh", "high"];
const FAIRLY_SEVERE_CUES: &[&str] = &["fairly", "quite", "rather"];
const MODERATE_CUES: &[&str] = &["moderate", "normal", "usual", "average"];
const SOMETIMES_CUES: &[&str] = &["sometimes", "occasional", "now and then", "on and off"];
const MILD_CUES: &[&str] = &["mild", "rare", "slight", "a bit", "a little"];
const AFFIRMATIVE_WORDS: &[&str] = &["yes", "yeah", "present", "positive", "correct"];
const NEGATIVE_WORDS: &[&str] = &["no", "none", "not", "without", "never"];

/// Parse one free-text severity answer into a value in [0, 10]
///
/// Empty and unrecognized input both map to 0.0.
#[must_use]
pub fn parse_severity(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(value) = parse_numeric(trimmed) {
        return value.clamp(0.0, 10.0);
    }

    let normalized = normalize(trimmed);
    if normalized.is_empty() {
        return 0.0;
    }

    for (word, value) in NUMERAL_WORDS {
        if has_word(&normalized, word) {
            return *value;
        }
    }

    for (phrase, value) in LEXICON {
        if normalized == *phrase {
            return *value;
        }
    }

    heuristic_severity(&normalized)
}

/// Parse digits with at most one `.` or `,` decimal separator
fn parse_numeric(text: &str) -> Option<f64> {
    let mut separators = 0;
    for ch in text.chars() {
        match ch {
            '0'..='9' => {}
            '.' | ',' => separators += 1,
            _ => return None,
        }
    }
    if separators > 1 {
        return None;
    }
    text.replace(',', ".").parse().ok()
}

/// Lowercase, strip punctuation except hyphens, collapse whitespace
fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .join(" ")
}

fn has_word(text: &str, word: &str) -> bool {
    text.split_whitespace().any(|w| w == word)
}

fn contains_any(text: &str, cues: &[&str]) -> bool {
    cues.iter().any(|cue| text.contains(cue))
}

fn has_any_word(text: &str, words: &[&str]) -> bool {
    text.split_whitespace().any(|w| words.contains(&w))
}

fn heuristic_severity(text: &str) -> f64 {
    if contains_any(text, VERY_SEVERE_CUES) {
        9.5
    } else if contains_any(text, VERY_FREQUENT_CUES) {
        8.5
    } else if contains_any(text, SEVERE_CUES) {
        8.0
    } else if contains_any(text, FAIRLY_SEVERE_CUES) {
        7.0
    } else if contains_any(text, MODERATE_CUES) && !text.contains("mild") {
        5.5
    } else if contains_any(text, SOMETIMES_CUES) {
        4.5
    } else if contains_any(text, MILD_CUES) && !text.contains("very") {
        3.0
    } else if has_any_word(text, AFFIRMATIVE_WORDS) {
        7.0
    } else if has_any_word(text, NEGATIVE_WORDS) {
        0.0
    } else {
        0.0
    }
}
