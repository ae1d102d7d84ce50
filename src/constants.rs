//! Cross-cutting, shared constants.
//!
//! # Dimension Invariants
//!
//! The default embedding dimension matches `all-MiniLM-L6-v2`. A loaded model may report a
//! different hidden size; use [`DimConfig`] and [`validate_embedding_dim`] at module boundaries
//! instead of assuming the default.

/// Output dimension of `all-MiniLM-L6-v2`.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Hugging Face Hub repository of the default sentence encoder.
pub const DEFAULT_MODEL_ID: &str = "sentence-transformers/all-MiniLM-L6-v2";

/// Token limit used by sentence-transformers for MiniLM models.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Upper bound on request bodies (the uploaded PDF plus form fields).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Decimal places kept when a similarity is rendered as a percentage.
pub const SCORE_DECIMALS: u32 = 2;

/// Response header carrying the outcome of a gateway request.
pub const CVMATCH_STATUS_HEADER: &str = "x-cvmatch-status";
pub const CVMATCH_STATUS_HEALTHY: &str = "healthy";
pub const CVMATCH_STATUS_READY: &str = "ready";
pub const CVMATCH_STATUS_SCORED: &str = "scored";
pub const CVMATCH_STATUS_REJECTED: &str = "rejected";
pub const CVMATCH_STATUS_ERROR: &str = "error";

/// Runtime dimension configuration shared by the encoder and the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimConfig {
    /// The embedding vector dimension (number of floats).
    pub embedding_dim: usize,
}

impl Default for DimConfig {
    fn default() -> Self {
        Self {
            embedding_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl DimConfig {
    /// Creates a new dimension configuration with the specified embedding dimension.
    pub fn new(embedding_dim: usize) -> Self {
        Self { embedding_dim }
    }

    /// Rejects a zero dimension.
    pub fn validate(&self) -> Result<(), DimValidationError> {
        if self.embedding_dim == 0 {
            return Err(DimValidationError::ZeroDimension);
        }
        Ok(())
    }
}

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "embedding dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use cvmatch::constants::{validate_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// validate_embedding_dim(384, DEFAULT_EMBEDDING_DIM).unwrap();
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_config_default() {
        let config = DimConfig::default();
        assert_eq!(config.embedding_dim, DEFAULT_EMBEDDING_DIM);
    }

    #[test]
    fn test_dim_config_validate_zero() {
        assert_eq!(
            DimConfig::new(0).validate(),
            Err(DimValidationError::ZeroDimension)
        );
        assert!(DimConfig::new(768).validate().is_ok());
    }

    #[test]
    fn test_validate_embedding_dim_mismatch() {
        assert!(validate_embedding_dim(384, 384).is_ok());
        assert_eq!(
            validate_embedding_dim(768, 384),
            Err(DimValidationError::DimensionMismatch {
                expected: 384,
                actual: 768
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = DimValidationError::ZeroDimension;
        assert_eq!(err.to_string(), "embedding dimension cannot be zero");

        let err = DimValidationError::DimensionMismatch {
            expected: 384,
            actual: 768,
        };
        assert!(err.to_string().contains("384"));
        assert!(err.to_string().contains("768"));
    }
}
