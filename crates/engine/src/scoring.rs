//! Rule-based ATS evaluation of an extracted candidate record.
//!
//! A simplified heuristic mirroring how tracking systems screen resumes:
//! contact completeness, skill coverage, essential sections, quantifiable
//! impact, and length. Real ATS products are more complex and vary by
//! vendor.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::Vocabularies;
use crate::models::CandidateRecord;

// Percentages, dollar figures, or a number tied to a business-impact word.
static METRICS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%|\$\d+|\d+\s?(?:users|clients|customers|revenue|sales)").unwrap());

// Word-count band treated as an appropriate 1-2 page resume.
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 1000;

/// Completeness/quality verdict for one resume. Derived and disposable;
/// never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// 0-100, unweighted sum of the criterion points.
    pub ats_score: u32,
    /// One deduction reason per missed criterion, in evaluation order.
    pub feedback: Vec<String>,
    /// Section-vocabulary entries present in the raw text.
    pub found_sections: Vec<String>,
}

/// Scores a record against fixed ATS criteria. Deterministic and total;
/// improving any single signal never lowers the score.
///
/// Breakdown: contact info 20 (name 5, email 10, phone 5), skills 25,
/// experience + education sections 30, quantifiable metrics 15, length 10.
pub fn score_resume(record: &CandidateRecord, vocab: &Vocabularies) -> ScoreReport {
    let mut score = 0u32;
    let mut feedback: Vec<String> = Vec::new();

    // 1. Contact info (20 points)
    if is_present(&record.name) {
        score += 5;
    } else {
        feedback.push("Name not detected. Ensure it's prominent.".to_string());
    }
    if is_present(&record.email) {
        score += 10;
    } else {
        feedback.push("Email not detected.".to_string());
    }
    if is_present(&record.phone) {
        score += 5;
    } else {
        feedback.push("Phone number not detected.".to_string());
    }

    // 2. Skills (25 points)
    match record.skills.len() {
        n if n >= 5 => score += 25,
        n if n > 0 => {
            score += 15;
            feedback.push(format!(
                "Only found {n} skills. Try to include at least 5 relevant technical skills."
            ));
        }
        _ => feedback.push("No skills detected. Use standard keywords for your industry.".to_string()),
    }

    // 3. Sections (30 points)
    let found_sections = check_sections(&record.raw_text, vocab);
    let text_lower = record.raw_text.to_lowercase();

    if found_sections.iter().any(|s| s.as_str() == "experience")
        || text_lower.contains("work history")
    {
        score += 15;
    } else {
        feedback.push("Missing 'Experience' or 'Work History' section.".to_string());
    }
    if found_sections.iter().any(|s| s.as_str() == "education") {
        score += 15;
    } else {
        feedback.push("Missing 'Education' section.".to_string());
    }

    // 4. Impact and metrics (15 points)
    if METRICS.is_match(&record.raw_text) {
        score += 15;
    } else {
        feedback.push(
            "No quantifiable metrics found (e.g., 'increased revenue by 20%'). Quantify your impact."
                .to_string(),
        );
    }

    // 5. Length (10 points)
    let word_count = record.raw_text.split_whitespace().count();
    if (MIN_WORDS..=MAX_WORDS).contains(&word_count) {
        score += 10;
    } else if word_count < MIN_WORDS {
        feedback.push("Resume seems too short. Elaborate on your experience.".to_string());
    } else {
        feedback.push("Resume might be too long. Aim for 1-2 pages.".to_string());
    }

    ScoreReport {
        ats_score: score,
        feedback,
        found_sections,
    }
}

/// Section-vocabulary entries present as case-insensitive substrings of
/// the text, in vocabulary order. Plain substring matching is a deliberate
/// product choice, false positives included.
pub fn check_sections(text: &str, vocab: &Vocabularies) -> Vec<String> {
    let text_lower = text.to_lowercase();
    vocab
        .sections
        .iter()
        .filter(|section| text_lower.contains(section.as_str()))
        .cloned()
        .collect()
}

fn is_present(field: &Option<String>) -> bool {
    field.as_deref().map(|v| !v.is_empty()).unwrap_or(false)
}
