use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::encoder::TextEncoder;
use super::error::EmbeddingError;
use super::minilm::stub::hashed_bag_of_words;

/// Encoder with pinned vectors for chosen texts and counted invocations.
///
/// Texts without a pinned vector fall back to the hashed bag-of-words stub.
#[derive(Debug, Clone)]
pub struct MockEncoder {
    dim: usize,
    pinned: HashMap<String, Vec<f32>>,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockEncoder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            pinned: HashMap::new(),
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns `vector` whenever exactly `text` is encoded.
    pub fn pin(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.pinned.insert(text.to_string(), vector);
        self
    }

    /// Fails every call with [`EmbeddingError::InferenceFailed`].
    pub fn failing(dim: usize) -> Self {
        Self {
            fail: true,
            ..Self::new(dim)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextEncoder for MockEncoder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(EmbeddingError::InferenceFailed {
                reason: "mock encoder configured to fail".to_string(),
            });
        }
        Ok(self
            .pinned
            .get(text)
            .cloned()
            .unwrap_or_else(|| hashed_bag_of_words(text, self.dim)))
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn is_stub(&self) -> bool {
        true
    }
}
