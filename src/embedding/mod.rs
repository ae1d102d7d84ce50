//! Embedding + model utilities.
//!
//! - [`TextEncoder`] is the seam the matching pipeline depends on.
//! - [`minilm`] provides the pretrained sentence encoder and its stub mode.

/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod encoder;
mod error;
/// MiniLM sentence encoder.
pub mod minilm;
/// Tokenizer loading and vector helpers.
pub mod utils;

#[cfg(any(test, feature = "mock"))]
mod mock;

pub use encoder::TextEncoder;
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEncoder;

pub use minilm::{
    MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEncoder, download_model,
};
