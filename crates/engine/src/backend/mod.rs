//! Capability seams for the model-backed collaborators: text embedding and
//! named-entity recognition.
//!
//! Both interfaces are narrow and synchronous so the engine can be
//! exercised with deterministic stubs in tests without loading any model.
//! Implementations must be `Send + Sync`: the loaded model is the one
//! shared expensive resource, initialized once per process and used
//! read-only behind an `Arc` from any number of threads. A fixed model
//! version must embed the same text to the same vector, or matching stops
//! being reproducible.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Entity categories the engine consumes. Unknown upstream labels fold
/// into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Organization,
    Product,
    Language,
    Other,
}

impl EntityLabel {
    /// Maps an upstream NER tag string to a label.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PERSON" => Self::Person,
            "ORG" | "ORGANIZATION" => Self::Organization,
            "PRODUCT" => Self::Product,
            "LANGUAGE" => Self::Language,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for EntityLabel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(EntityLabel::from_tag(&tag))
    }
}

/// One recognized span: surface text plus its category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
}

/// Named-entity recognition over free text.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>, EngineError>;
}

/// Dense text embedding into a fixed-length vector.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EngineError>;
}

/// Cosine similarity between two embedding vectors, in [-1, 1].
/// Returns 0.0 on dimension mismatch or a zero-magnitude side.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        tracing::debug!(len_a = a.len(), len_b = b.len(), "embedding dimension mismatch");
        return 0.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Placeholder embedder for configurations with no model wired in. Every
/// call reports `BackendUnavailable`; the matcher degrades to a semantic
/// score of 0 plus the keyword bonus.
pub struct NullEmbedder;

impl Embedder for NullEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EngineError> {
        Err(EngineError::BackendUnavailable(
            "no embedding model configured".to_string(),
        ))
    }
}

/// Placeholder recognizer; extractors fall back to header heuristics.
pub struct NullRecognizer;

impl EntityRecognizer for NullRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<EntitySpan>, EngineError> {
        Err(EngineError::BackendUnavailable(
            "no entity recognition model configured".to_string(),
        ))
    }
}
