//! Skill extraction against the closed vocabulary.

use std::collections::HashSet;

use crate::backend::{EntityLabel, EntityRecognizer};
use crate::config::Vocabularies;

/// Extracts skills as the union of two passes:
///
/// 1. case-insensitive substring search for every vocabulary term;
/// 2. ORGANIZATION/PRODUCT/LANGUAGE entity spans whose surface text equals
///    a vocabulary entry exactly.
///
/// Precision-biased over recall: only vocabulary members can ever appear
/// in the result, returned in vocabulary order with canonical casing. A
/// failed recognizer call degrades to pass 1 alone.
pub fn extract_skills(
    text: &str,
    vocab: &Vocabularies,
    recognizer: &dyn EntityRecognizer,
) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut found: HashSet<&str> = HashSet::new();

    for skill in &vocab.skills {
        if text_lower.contains(&skill.to_lowercase()) {
            found.insert(skill.as_str());
        }
    }

    match recognizer.recognize(text) {
        Ok(spans) => {
            for span in &spans {
                let relevant = matches!(
                    span.label,
                    EntityLabel::Organization | EntityLabel::Product | EntityLabel::Language
                );
                if !relevant {
                    continue;
                }
                if let Some(skill) = vocab.skills.iter().find(|s| **s == span.text) {
                    found.insert(skill.as_str());
                }
            }
        }
        Err(e) => tracing::debug!("entity recognizer unavailable, keyword pass only: {e}"),
    }

    vocab
        .skills
        .iter()
        .filter(|s| found.contains(s.as_str()))
        .cloned()
        .collect()
}
