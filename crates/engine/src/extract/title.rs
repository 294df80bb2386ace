//! Job-title extraction from the resume header.

use crate::config::Vocabularies;
use crate::text::title_case;

/// Lines scanned for a role title.
const HEADER_LINES: usize = 10;

/// Scans the first 10 non-empty lines for a known role title.
///
/// The title vocabulary is checked in order and the first term with a hit
/// anywhere in the header wins; line position only breaks ties within a
/// single term. A containing line of at most 5 words is returned whole
/// (title-cased) as richer context; longer lines yield just the matched
/// vocabulary term.
pub fn extract_job_title(text: &str, vocab: &Vocabularies) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(HEADER_LINES)
        .collect();

    for title in &vocab.job_titles {
        let needle = title.to_lowercase();
        for line in &lines {
            if line.to_lowercase().contains(&needle) {
                return if line.split_whitespace().count() <= 5 {
                    Some(title_case(line))
                } else {
                    Some(title.clone())
                };
            }
        }
    }
    None
}
