use tracing::debug;

use super::error::ScoringError;
use super::types::{MatchScore, Similarity};

/// Cosine similarity of two equal-length vectors.
///
/// A zero-magnitude vector (what an empty text can encode to) has no direction; its
/// similarity to anything is defined as `0.0` and reported as [`Similarity::Degenerate`].
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<Similarity, ScoringError> {
    if a.len() != b.len() {
        return Err(ScoringError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(ScoringError::EmptyVector);
    }

    let mut dot = 0.0f64;
    let mut norm_a_sq = 0.0f64;
    let mut norm_b_sq = 0.0f64;

    for (index, (&av, &bv)) in a.iter().zip(b.iter()).enumerate() {
        if !av.is_finite() || !bv.is_finite() {
            return Err(ScoringError::NonFinite { index });
        }
        let (av, bv) = (f64::from(av), f64::from(bv));
        dot += av * bv;
        norm_a_sq += av * av;
        norm_b_sq += bv * bv;
    }

    let norm_a = norm_a_sq.sqrt();
    let norm_b = norm_b_sq.sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        debug!(norm_a, norm_b, "Zero-magnitude embedding, similarity defined as 0");
        return Ok(Similarity::Degenerate);
    }

    // Rounding can push |cos| a hair past 1 for near-parallel vectors.
    Ok(Similarity::Defined((dot / (norm_a * norm_b)).clamp(-1.0, 1.0)))
}

/// Scores two embeddings as a percentage match.
pub fn score_embeddings(a: &[f32], b: &[f32]) -> Result<MatchScore, ScoringError> {
    let similarity = cosine_similarity(a, b)?;
    Ok(MatchScore::from_similarity(similarity))
}
