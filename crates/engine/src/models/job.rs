use serde::{Deserialize, Serialize};

/// A job posting to rank against a candidate.
///
/// Immutable once created. Postings carry no identity: duplicate titles
/// are permitted and results are tied back to inputs by position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub department: String,
    pub description: String,
    /// Display-form skill names, in the order they were entered.
    pub required_skills: Vec<String>,
}
