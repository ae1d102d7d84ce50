use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("embedding dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("cannot score empty embeddings")]
    EmptyVector,

    #[error("embedding contains a non-finite value at index {index}")]
    NonFinite { index: usize },
}
