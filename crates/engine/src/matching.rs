//! Hybrid candidate-to-job ranking.
//!
//! Pure embedding similarity under-weights the exact required-skill
//! matches recruiters treat as non-negotiable, so each job's semantic
//! score gets an additive, capped keyword bonus: exact-skill evidence can
//! break near-ties in the semantic signal without dominating it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::backend::{cosine, Embedder};
use crate::models::{CandidateRecord, JobPosting};

/// Points a full required-skill overlap adds on top of the semantic score.
const SKILL_BONUS: f64 = 20.0;

/// A job posting augmented with its match score for one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub job: JobPosting,
    /// 0-100.
    pub match_score: f64,
}

/// Ranks `jobs` for `record`: one result per input job, sorted descending
/// by `match_score`. The sort is stable, so equal scores keep their input
/// order and identical inputs always produce identical output.
///
/// Per job: semantic similarity between the candidate text (resume plus
/// extracted skills) and the job text (description plus required skills
/// plus title), then `overlap_ratio * 20` when the job declares required
/// skills, clamped to [0, 100].
pub fn match_jobs(
    record: &CandidateRecord,
    jobs: &[JobPosting],
    embedder: &dyn Embedder,
) -> Vec<MatchResult> {
    let candidate_text = format!("{} {}", record.raw_text, record.skills.join(" "));
    let candidate_skills: HashSet<String> =
        record.skills.iter().map(|s| s.to_lowercase()).collect();

    let mut results: Vec<MatchResult> = jobs
        .iter()
        .map(|job| {
            let job_text = format!(
                "{} {} {}",
                job.description,
                job.required_skills.join(" "),
                job.title
            );
            let mut score = semantic_similarity(embedder, &candidate_text, &job_text);

            if !job.required_skills.is_empty() {
                let matched = job
                    .required_skills
                    .iter()
                    .filter(|skill| candidate_skills.contains(&skill.to_lowercase()))
                    .count();
                score += matched as f64 / job.required_skills.len() as f64 * SKILL_BONUS;
            }

            MatchResult {
                job: job.clone(),
                match_score: score.clamp(0.0, 100.0),
            }
        })
        .collect();

    // Stable descending sort; ties keep input order.
    results.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
    results
}

/// Cosine similarity of the two texts' embeddings scaled to 0-100 and
/// rounded to two decimals. Blank text or a failed embedding degrades to
/// 0 rather than propagating.
fn semantic_similarity(embedder: &dyn Embedder, a: &str, b: &str) -> f64 {
    if a.trim().is_empty() || b.trim().is_empty() {
        return 0.0;
    }
    let (va, vb) = match (embedder.embed(a), embedder.embed(b)) {
        (Ok(va), Ok(vb)) => (va, vb),
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!("embedding unavailable, semantic score falls back to 0: {e}");
            return 0.0;
        }
    };
    (f64::from(cosine(&va, &vb)) * 100.0 * 100.0).round() / 100.0
}
