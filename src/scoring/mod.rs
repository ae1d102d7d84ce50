//! Embedding comparison.
//!
//! [`cosine_similarity`] compares two vectors; [`MatchScore`] turns the result into the
//! percentage shown to users. Two policies apply here:
//!
//! - a zero-magnitude embedding scores `0.0` ([`Similarity::Degenerate`]) instead of dividing
//!   by zero;
//! - negative similarities pass through as negative percentages.

pub mod error;
pub mod similarity;
pub mod types;


pub use error::ScoringError;
pub use similarity::{cosine_similarity, score_embeddings};
pub use types::{MatchScore, Similarity};
