use canonical::CanonicalError;
use thiserror::Error;

/// Errors surfaced by [`TranscriptDiffer`](crate::TranscriptDiffer) and the
/// transcription entry points.
///
/// Empty reference or hypothesis text is never an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] CanonicalError),
    #[error("transcription failed: {0}")]
    Transcription(String),
}
