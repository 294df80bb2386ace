pub mod candidate;
pub mod job;

pub use candidate::{CandidateRecord, RawDocument, SourceFormat};
pub use job::JobPosting;
