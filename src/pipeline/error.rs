use thiserror::Error;

use crate::document::DocumentError;
use crate::embedding::EmbeddingError;
use crate::scoring::ScoringError;

/// A submission rejected before any extraction or encoding ran.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please upload a resume PDF.")]
    MissingDocument,

    #[error("Please enter the job description.")]
    EmptyJobDescription,
}

/// Any failure of a single matching run. Each one ends that run only.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("document error: {0}")]
    Document(#[from] DocumentError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),
}
