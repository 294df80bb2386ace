use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Source format tag attached by the external document decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Pdf,
    Docx,
    Txt,
}

impl SourceFormat {
    /// Maps a file extension to a format tag. Decoding itself happens
    /// upstream; the engine only ever consumes the decoded text.
    pub fn from_extension(ext: &str) -> Result<Self, EngineError> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            "txt" => Ok(Self::Txt),
            other => Err(EngineError::UnsupportedInput(format!(
                "unknown file extension '{other}'"
            ))),
        }
    }
}

/// Decoded document text plus its detected source format. Produced by the
/// external decoder, consumed once by `Engine::parse_document`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    pub text: String,
    pub format: SourceFormat,
}

/// Structured candidate profile extracted from one resume.
///
/// Created once per parse call and never mutated afterwards; downstream
/// consumers (scorer, matcher, persistence) enrich copies rather than
/// editing the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub name: Option<String>,
    /// Syntactically validated by the extraction pattern.
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Canonical vocabulary casing, deduplicated case-insensitively, in
    /// vocabulary order.
    pub skills: Vec<String>,
    pub job_title: Option<String>,
    /// Full source text, retained for scoring and matching.
    pub raw_text: String,
}
