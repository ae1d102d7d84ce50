use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN, DimConfig};
use crate::embedding::error::EmbeddingError;

/// Default MiniLM embedding dimension.
pub const MINILM_EMBEDDING_DIM: usize = DEFAULT_EMBEDDING_DIM;

/// Default MiniLM max sequence length.
pub const MINILM_MAX_SEQ_LEN: usize = DEFAULT_MAX_SEQ_LEN;

/// Files a sentence-transformers model directory must contain.
pub const REQUIRED_MODEL_FILES: [&str; 3] = ["config.json", "model.safetensors", "tokenizer.json"];

#[derive(Debug, Clone)]
/// Configuration for [`MiniLmEncoder`](super::MiniLmEncoder).
pub struct MiniLmConfig {
    /// Directory with `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens to consider.
    pub max_seq_len: usize,
    /// Output embedding dimension (must equal the model's hidden size).
    pub embedding_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for MiniLmConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: MINILM_MAX_SEQ_LEN,
            embedding_dim: MINILM_EMBEDDING_DIM,
            testing_stub: false,
        }
    }
}

impl MiniLmConfig {
    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    pub fn with_embedding_dim(mut self, embedding_dim: usize) -> Self {
        self.embedding_dim = embedding_dim;
        self
    }

    /// Validates limits, and for non-stub mode, the model directory.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        DimConfig::new(self.embedding_dim)
            .validate()
            .map_err(|e| EmbeddingError::InvalidConfig {
                reason: e.to_string(),
            })?;

        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if let Some(missing) = self.missing_files().into_iter().next() {
            return Err(EmbeddingError::ModelNotFound { path: missing });
        }

        Ok(())
    }

    /// Required model files that do not exist.
    pub fn missing_files(&self) -> Vec<PathBuf> {
        REQUIRED_MODEL_FILES
            .iter()
            .map(|name| self.model_dir.join(name))
            .filter(|path| !path.is_file())
            .collect()
    }

    /// Returns `true` if every required model file is present.
    pub fn model_available(&self) -> bool {
        !self.model_dir.as_os_str().is_empty() && self.missing_files().is_empty()
    }

    pub fn config_path(&self) -> PathBuf {
        self.model_dir.join("config.json")
    }

    pub fn weights_path(&self) -> PathBuf {
        self.model_dir.join("model.safetensors")
    }

    pub fn tokenizer_dir(&self) -> &Path {
        &self.model_dir
    }
}
