//! Engine facade: owns the vocabularies and the shared model-backed
//! collaborators, and exposes the parse/score/match surface to callers
//! (UI, storage, critique generation).

use std::sync::Arc;

use crate::backend::{Embedder, EntityRecognizer, NullEmbedder, NullRecognizer};
use crate::config::Vocabularies;
use crate::extract;
use crate::matching::{self, MatchResult};
use crate::models::{CandidateRecord, JobPosting, RawDocument};
use crate::scoring::{self, ScoreReport};

/// Stateless-across-calls engine. Every operation is a pure function of
/// its inputs plus the fixed vocabularies and the backends, so independent
/// calls may run concurrently with no coordination. Backends sit behind
/// `Arc`: one model load per process, shared read-only.
#[derive(Clone)]
pub struct Engine {
    vocab: Vocabularies,
    embedder: Arc<dyn Embedder>,
    recognizer: Arc<dyn EntityRecognizer>,
}

impl Engine {
    /// Engine with the default vocabularies and the given backends.
    pub fn new(embedder: Arc<dyn Embedder>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            vocab: Vocabularies::default(),
            embedder,
            recognizer,
        }
    }

    /// Engine with no model-backed collaborators wired in: extraction runs
    /// on header heuristics alone and matching scores on keyword overlap
    /// alone.
    pub fn detached() -> Self {
        Self::new(Arc::new(NullEmbedder), Arc::new(NullRecognizer))
    }

    /// Replaces the default vocabularies. The closed-set contract carries
    /// over: extracted skills are always members of the injected set.
    pub fn with_vocabularies(mut self, vocab: Vocabularies) -> Self {
        self.vocab = vocab;
        self
    }

    /// Extracts a structured candidate record from decoded resume text.
    pub fn parse(&self, text: &str) -> CandidateRecord {
        extract::parse(text, &self.vocab, self.recognizer.as_ref())
    }

    /// Convenience over [`Engine::parse`] for decoder output.
    pub fn parse_document(&self, doc: &RawDocument) -> CandidateRecord {
        self.parse(&doc.text)
    }

    /// ATS completeness score plus itemized feedback for a record.
    pub fn score(&self, record: &CandidateRecord) -> ScoreReport {
        scoring::score_resume(record, &self.vocab)
    }

    /// Ranks the jobs for the candidate, best match first.
    pub fn match_jobs(&self, record: &CandidateRecord, jobs: &[JobPosting]) -> Vec<MatchResult> {
        matching::match_jobs(record, jobs, self.embedder.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{EntityLabel, EntitySpan};
    use crate::errors::EngineError;
    use crate::models::SourceFormat;

    const RESUME: &str = "John Smith\nSoftware Engineer\njohn@x.com\n555-123-4567\nPython, AWS, Docker\nExperience: shipped services for 2000 users\nEducation: BSc";

    struct CannedRecognizer(Vec<EntitySpan>);

    impl EntityRecognizer for CannedRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, EngineError> {
            Ok(self.0.clone())
        }
    }

    /// Deterministic bag-of-words hash embedder for end-to-end tests.
    struct BagEmbedder;

    impl Embedder for BagEmbedder {
        fn embed(&self, text: &str) -> Result<Vec<f32>, EngineError> {
            let mut v = vec![0.0f32; 64];
            for token in text.to_lowercase().split_whitespace() {
                let mut h: u32 = 2166136261;
                for byte in token.bytes() {
                    h ^= u32::from(byte);
                    h = h.wrapping_mul(16777619);
                }
                v[(h % 64) as usize] += 1.0;
            }
            Ok(v)
        }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }

    fn engine_with_person() -> Engine {
        Engine::new(
            Arc::new(BagEmbedder),
            Arc::new(CannedRecognizer(vec![EntitySpan {
                text: "John Smith".to_string(),
                label: EntityLabel::Person,
            }])),
        )
    }

    #[test]
    fn test_parse_scenario_full_header() {
        let engine = engine_with_person();
        let record = engine.parse(RESUME);
        assert_eq!(record.name.as_deref(), Some("John Smith"));
        assert_eq!(record.email.as_deref(), Some("john@x.com"));
        assert_eq!(record.phone.as_deref(), Some("555-123-4567"));
        for skill in ["Python", "AWS", "Docker"] {
            assert!(
                record.skills.iter().any(|s| s == skill),
                "missing {skill} in {:?}",
                record.skills
            );
        }
        assert_eq!(record.job_title.as_deref(), Some("Software Engineer"));
    }

    #[test]
    fn test_scenario_score_at_least_75() {
        let engine = engine_with_person();
        let record = engine.parse(RESUME);
        let report = engine.score(&record);
        // Contact 20 + skills partial/full + both sections 30 are all present.
        assert!(report.ats_score >= 75, "got {}", report.ats_score);
    }

    #[test]
    fn test_empty_text_end_to_end() {
        let engine = Engine::detached();
        let record = engine.parse("");
        assert!(record.name.is_none());
        assert!(record.email.is_none());
        assert!(record.phone.is_none());
        assert!(record.skills.is_empty());
        assert!(record.job_title.is_none());

        let report = engine.score(&record);
        assert!(report.ats_score < 20);
        assert!(!report.feedback.is_empty());
    }

    #[test]
    fn test_detached_engine_parses_heuristically() {
        init_tracing();
        let engine = Engine::detached();
        let record = engine.parse(RESUME);
        // No recognizer: name comes from the header-line fallback.
        assert_eq!(record.name.as_deref(), Some("John Smith"));
        assert!(record.skills.iter().any(|s| s == "Python"));
    }

    #[test]
    fn test_match_jobs_end_to_end() {
        let engine = engine_with_person();
        let record = engine.parse(RESUME);
        let jobs = vec![
            JobPosting {
                title: "Backend Developer".to_string(),
                department: "Engineering".to_string(),
                description: "Python services on AWS with Docker".to_string(),
                required_skills: vec!["Python".to_string(), "AWS".to_string()],
            },
            JobPosting {
                title: "Copywriter".to_string(),
                department: "Marketing".to_string(),
                description: "Brand voice and campaign copy".to_string(),
                required_skills: vec!["Communication".to_string()],
            },
        ];
        let results = engine.match_jobs(&record, &jobs);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].job.title, "Backend Developer");
        assert!(results.iter().all(|r| (0.0..=100.0).contains(&r.match_score)));
        assert!(results[0].match_score >= results[1].match_score);
    }

    #[test]
    fn test_match_jobs_is_idempotent() {
        let engine = engine_with_person();
        let record = engine.parse(RESUME);
        let jobs = vec![JobPosting {
            title: "Backend Developer".to_string(),
            department: "Engineering".to_string(),
            description: "Python services".to_string(),
            required_skills: vec!["Python".to_string()],
        }];
        let a = engine.match_jobs(&record, &jobs);
        let b = engine.match_jobs(&record, &jobs);
        assert_eq!(a[0].match_score, b[0].match_score);
    }

    #[test]
    fn test_parse_document_uses_decoded_text() {
        let engine = Engine::detached();
        let doc = RawDocument {
            text: RESUME.to_string(),
            format: SourceFormat::Pdf,
        };
        let record = engine.parse_document(&doc);
        assert_eq!(record.email.as_deref(), Some("john@x.com"));
        assert_eq!(record.raw_text, RESUME);
    }

    #[test]
    fn test_custom_vocabulary_bounds_output() {
        let vocab = Vocabularies {
            skills: vec!["Rust".to_string()],
            ..Vocabularies::default()
        };
        let engine = Engine::detached().with_vocabularies(vocab);
        let record = engine.parse("Rust and Python developer\nRust Rust");
        assert_eq!(record.skills, vec!["Rust"]);
    }
}
