use serde::Serialize;

use crate::constants::SCORE_DECIMALS;

#[derive(Debug, Clone, Copy, PartialEq)]
/// Outcome of comparing two embeddings.
pub enum Similarity {
    /// Cosine similarity in `[-1, 1]`.
    Defined(f64),
    /// At least one vector had zero magnitude; treated as `0.0`.
    Degenerate,
}

impl Similarity {
    /// Returns the similarity value (`0.0` when degenerate).
    pub fn value(&self) -> f64 {
        match self {
            Similarity::Defined(value) => *value,
            Similarity::Degenerate => 0.0,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, Similarity::Degenerate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
/// Similarity rendered as a percentage with two decimals.
///
/// Negative similarities are kept negative; the score is never clamped to `[0, 100]`.
pub struct MatchScore {
    /// `round(similarity * 100, 2)`.
    pub percent: f64,
    /// Raw cosine similarity.
    pub similarity: f64,
    /// `true` when one embedding was the zero vector.
    pub degenerate: bool,
}

impl MatchScore {
    pub fn from_similarity(similarity: Similarity) -> Self {
        let value = similarity.value();
        Self {
            percent: round_to(value * 100.0, SCORE_DECIMALS),
            similarity: value,
            degenerate: similarity.is_degenerate(),
        }
    }

    /// Returns `true` for scores below zero (texts pointing in opposite directions).
    pub fn is_negative(&self) -> bool {
        self.percent < 0.0
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.percent)
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // Avoid rendering "-0.00".
    if rounded == 0.0 { 0.0 } else { rounded }
}
