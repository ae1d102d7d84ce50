use std::sync::Arc;

use super::error::EmbeddingError;

/// Maps a text span to a fixed-length vector.
///
/// Implementations are loaded once and are read-only afterwards, so a single instance can be
/// shared across requests. Encoding the empty string must succeed.
pub trait TextEncoder: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Length of every vector returned by [`encode`](TextEncoder::encode).
    fn embedding_dim(&self) -> usize;

    /// `true` when no pretrained model backs this encoder.
    fn is_stub(&self) -> bool {
        false
    }
}

impl<T: TextEncoder + ?Sized> TextEncoder for Arc<T> {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).encode(text)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}
