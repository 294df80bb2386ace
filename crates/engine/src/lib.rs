//! Candidate extraction and job matching engine.
//!
//! Extracts structured candidate information from unstructured resume text
//! and ranks job postings against a candidate profile with a hybrid score:
//! dense semantic similarity plus a keyword-overlap bonus for exact
//! required-skill hits.
//!
//! The engine is a pure library. Callers decode documents to text upstream,
//! hand the text in, and take structured results back out; no network,
//! file, or persistence calls happen here. Entity recognition and text
//! embedding are pluggable capability traits (see [`backend`]); when they
//! are unavailable the pipeline degrades to its heuristic paths instead of
//! failing, so parse/score/match never error on well-formed text.

pub mod backend;
pub mod config;
pub mod engine;
pub mod errors;
pub mod extract;
pub mod matching;
pub mod models;
pub mod scoring;
pub mod text;

pub use backend::{cosine, Embedder, EntityLabel, EntityRecognizer, EntitySpan, NullEmbedder, NullRecognizer};
pub use config::Vocabularies;
pub use engine::Engine;
pub use errors::EngineError;
pub use matching::MatchResult;
pub use models::{CandidateRecord, JobPosting, RawDocument, SourceFormat};
pub use scoring::ScoreReport;
