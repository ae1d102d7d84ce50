//! cvmatch library crate (used by the server binary and integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`ResumeMatcher`], [`Submission`], [`MatchReport`] - The matching pipeline
//! - [`MatchError`], [`ValidationError`] - Pipeline failures
//!
//! ## Documents
//! - [`TextExtractor`], [`PdfExtractor`] - Text extraction from uploaded PDFs
//! - [`ExtractedText`], [`DocumentError`]
//!
//! ## Embedding & Scoring
//! - [`TextEncoder`], [`MiniLmEncoder`], [`MiniLmConfig`] - Sentence embeddings
//! - [`cosine_similarity`], [`MatchScore`], [`Similarity`] - Comparison and percentage scores
//!
//! ## HTTP
//! - [`create_router_with_state`], [`HandlerState`] - The Axum gateway
//!
//! ## Test/Mock Support
//! Mock implementations are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod document;
pub mod embedding;
pub mod gateway;
pub mod pipeline;
pub mod scoring;

pub use config::{Config, ConfigError, EncoderMode};
pub use constants::{
    CVMATCH_STATUS_ERROR, CVMATCH_STATUS_HEADER, CVMATCH_STATUS_HEALTHY, CVMATCH_STATUS_READY,
    CVMATCH_STATUS_REJECTED, CVMATCH_STATUS_SCORED, DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN,
    DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_MODEL_ID, DimConfig, DimValidationError, validate_embedding_dim,
};
pub use document::{DocumentError, ExtractedText, PdfExtractor, TextExtractor};
#[cfg(any(test, feature = "mock"))]
pub use document::MockExtractor;
pub use embedding::{EmbeddingError, MiniLmConfig, MiniLmEncoder, TextEncoder};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEncoder;
pub use gateway::{GatewayError, HandlerState, create_router_with_state};
pub use pipeline::{MatchError, MatchReport, ResumeMatcher, Submission, ValidationError};
pub use scoring::{MatchScore, ScoringError, Similarity, cosine_similarity, score_embeddings};
