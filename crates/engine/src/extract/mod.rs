// Multi-stage heuristic extraction over noisy resume text.
// Pattern search for contacts, vocabulary matching for skills and titles,
// header-line heuristics cross-checked against entity recognition for names.

pub mod contact;
pub mod name;
pub mod skills;
pub mod title;

use crate::backend::EntityRecognizer;
use crate::config::Vocabularies;
use crate::models::CandidateRecord;

/// Runs every field extractor over the text and assembles the record.
///
/// Total over any input: an extractor that finds nothing contributes an
/// empty field, never an error. A failed recognizer call degrades each
/// dependent extractor to its heuristic-only path.
pub fn parse(
    text: &str,
    vocab: &Vocabularies,
    recognizer: &dyn EntityRecognizer,
) -> CandidateRecord {
    CandidateRecord {
        name: name::extract_name(text, vocab, recognizer),
        email: contact::extract_email(text),
        phone: contact::extract_phone(text),
        skills: skills::extract_skills(text, vocab, recognizer),
        job_title: title::extract_job_title(text, vocab),
        raw_text: text.to_string(),
    }
}
