use candle_core::{DType, Device, Result, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config};
use std::path::Path;

/// BERT encoder with attention-masked mean pooling (sentence-transformers layout).
pub(crate) struct SentenceBert {
    bert: BertModel,
    hidden_size: usize,
}

impl SentenceBert {
    pub(crate) fn load(config_path: &Path, weights_path: &Path, device: &Device) -> Result<Self> {
        let config_content = std::fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)
            .map_err(|e| candle_core::Error::Msg(format!("Failed to parse config: {}", e)))?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[weights_path.to_path_buf()], DType::F32, device)?
        };

        // sentence-transformers exports drop the "bert." prefix; HF classifier exports keep it.
        let bert = if vb.contains_tensor("bert.embeddings.word_embeddings.weight") {
            BertModel::load(vb.pp("bert"), &config)?
        } else {
            BertModel::load(vb, &config)?
        };

        Ok(Self {
            bert,
            hidden_size: config.hidden_size,
        })
    }

    pub(crate) fn hidden_size(&self) -> usize {
        self.hidden_size
    }

    /// Returns the pooled `[hidden_size]` vector for a single `[1, seq_len]` input.
    pub(crate) fn forward_pooled(&self, input_ids: &Tensor, attention_mask: &Tensor) -> Result<Tensor> {
        let token_type_ids = input_ids.zeros_like()?;
        let hidden_states = self
            .bert
            .forward(input_ids, &token_type_ids, Some(attention_mask))?;

        // hidden_states: [1, seq_len, hidden]; mask: [1, seq_len, 1]
        let mask = attention_mask.to_dtype(DType::F32)?.unsqueeze(2)?;
        let summed = hidden_states.broadcast_mul(&mask)?.sum(1)?;
        let counts = mask.sum(1)?.clamp(1e-9f32, f32::MAX)?;
        summed.broadcast_div(&counts)?.squeeze(0)
    }
}
