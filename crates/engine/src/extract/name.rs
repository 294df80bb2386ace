//! Candidate name extraction from the document header.
//!
//! Resumes rarely self-label the name; the header line usually carries it,
//! mixed in with section headers, role lines, and contact rows. The
//! heuristic keeps top lines that look like a plausible name and uses
//! PERSON spans from the recognizer as a confidence booster, not a hard
//! requirement.

use crate::backend::{EntityLabel, EntityRecognizer};
use crate::config::Vocabularies;
use crate::text::{strip_punctuation, title_case};

/// How many leading non-empty lines may hold the name itself.
const CANDIDATE_LINES: usize = 3;
/// How many leading non-empty lines the recognizer sees.
const HEADER_LINES: usize = 10;

/// Extracts the candidate's name, or `None` when nothing plausible is
/// found.
///
/// 1. Collect candidate lines from the top of the document: punctuation
///    stripped, no digits, no forbidden (skill/header/seniority) words,
///    1 to 4 words, earlier lines preferred.
/// 2. Run entity recognition over the header. A PERSON span that survives
///    the same filters wins immediately when it matches a candidate line
///    verbatim, or when it has at least two words.
/// 3. Otherwise fall back to the first candidate line, title-cased.
pub fn extract_name(
    text: &str,
    vocab: &Vocabularies,
    recognizer: &dyn EntityRecognizer,
) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.is_empty() {
        return None;
    }

    let forbidden = vocab.forbidden_name_tokens();

    let mut candidates: Vec<&str> = Vec::new();
    for line in lines.iter().take(CANDIDATE_LINES).copied() {
        let cleaned = strip_punctuation(line);
        let word_count = cleaned.split_whitespace().count();
        if word_count == 0 {
            continue;
        }
        if line.chars().any(|c| c.is_numeric()) {
            continue;
        }
        if cleaned
            .split_whitespace()
            .any(|w| forbidden.contains(&w.to_lowercase()))
        {
            continue;
        }
        if (1..=4).contains(&word_count) {
            candidates.push(line);
        }
    }

    let header = lines
        .iter()
        .take(HEADER_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    match recognizer.recognize(&header) {
        Ok(spans) => {
            for span in spans.iter().filter(|s| s.label == EntityLabel::Person) {
                // Multi-line spans collapse to their first line.
                let name = span.text.trim().split('\n').next().unwrap_or("").trim();
                let name_clean = strip_punctuation(name);
                if name_clean.trim().is_empty() {
                    continue;
                }
                if name.chars().any(|c| c.is_numeric()) {
                    continue;
                }
                if forbidden.contains(&name_clean.to_lowercase()) {
                    continue;
                }
                if name
                    .split_whitespace()
                    .any(|w| forbidden.contains(&w.to_lowercase()))
                {
                    continue;
                }
                // Span matching a top-line candidate verbatim: strongest signal.
                if candidates.contains(&name) {
                    return Some(name.to_string());
                }
                // A multi-word PERSON span is still acceptable on its own.
                if name.split_whitespace().count() >= 2 {
                    return Some(name.to_string());
                }
            }
        }
        Err(e) => tracing::debug!("entity recognizer unavailable, header heuristics only: {e}"),
    }

    candidates.first().map(|line| title_case(line))
}
