//! MiniLM sentence encoder (BERT safetensors + tokenizer).
//!
//! Point [`MiniLmConfig::new`] at a local model directory, or fetch one with
//! [`download_model`]. Use [`MiniLmConfig::stub`] for tests without model files.

/// MiniLM configuration.
pub mod config;
/// Model download from the Hugging Face Hub.
pub mod hub;
pub(crate) mod model;
pub(crate) mod stub;


pub use config::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, REQUIRED_MODEL_FILES};
pub use hub::download_model;

use candle_core::{Device, Tensor};
use tracing::{debug, info, warn};

use crate::constants::validate_embedding_dim;
use crate::embedding::device::select_device;
use crate::embedding::encoder::TextEncoder;
use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::{l2_normalize, load_tokenizer_with_truncation};

use model::SentenceBert;

enum EncoderBackend {
    Model {
        model: SentenceBert,
        tokenizer: tokenizers::Tokenizer,
        device: Device,
    },
    Stub,
}

/// Sentence encoder producing L2-normalized mean-pooled embeddings (supports stub mode).
///
/// Loaded once at startup and read-only afterwards; share it behind an `Arc`.
pub struct MiniLmEncoder {
    backend: EncoderBackend,
    config: MiniLmConfig,
}

impl std::fmt::Debug for MiniLmEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniLmEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EncoderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl MiniLmEncoder {
    /// Loads the encoder from a config (stub mode is supported).
    pub fn load(config: MiniLmConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("MiniLM encoder running in STUB mode (hashed bag-of-words)");
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
            });
        }

        let device = select_device()?;
        debug!(?device, "Selected compute device for MiniLM");

        let tokenizer = load_tokenizer_with_truncation(config.tokenizer_dir(), config.max_seq_len)
            .map_err(|e| EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            })?;

        let model = SentenceBert::load(&config.config_path(), &config.weights_path(), &device)
            .map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            })?;

        validate_embedding_dim(model.hidden_size(), config.embedding_dim).map_err(|e| {
            EmbeddingError::InvalidConfig {
                reason: format!("model hidden size does not match embedding_dim: {}", e),
            }
        })?;

        info!(
            model_dir = %config.model_dir.display(),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            "MiniLM model loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Shorthand for `load(MiniLmConfig::stub())`.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(MiniLmConfig::stub())
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &SentenceBert,
        tokenizer: &tokenizers::Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let token_ids = encoding.get_ids();
        if token_ids.is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = token_ids.len(),
            "Generating embedding (transformer forward pass)"
        );

        let input_ids = Tensor::new(token_ids, device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let mut embedding = model
            .forward_pooled(&input_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Transformer forward pass failed: {}", e),
            })?
            .to_vec1::<f32>()?;

        l2_normalize(&mut embedding);
        Ok(embedding)
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EncoderBackend::Model { .. })
    }

    /// Returns the encoder configuration.
    pub fn config(&self) -> &MiniLmConfig {
        &self.config
    }
}

impl TextEncoder for MiniLmEncoder {
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.embed_with_model(text, model, tokenizer, device),
            EncoderBackend::Stub => {
                debug!(text_len = text.len(), "Generating stub embedding");
                Ok(stub::hashed_bag_of_words(text, self.config.embedding_dim))
            }
        }
    }

    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }
}
