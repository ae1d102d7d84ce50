use std::path::{Path, PathBuf};

use hf_hub::api::tokio::Api;
use tracing::{debug, info};

use super::config::REQUIRED_MODEL_FILES;
use crate::embedding::error::EmbeddingError;

/// Fetches the model files of `model_id` into the local Hugging Face cache.
///
/// Files already in the cache are not downloaded again. Returns the snapshot directory, which
/// can be passed straight to [`MiniLmConfig::new`](super::MiniLmConfig::new).
pub async fn download_model(model_id: &str) -> Result<PathBuf, EmbeddingError> {
    let api = Api::new().map_err(|e| EmbeddingError::DownloadFailed {
        model_id: model_id.to_string(),
        reason: format!("HF API initialization failed: {}", e),
    })?;
    let repo = api.model(model_id.to_string());

    info!(model_id, "Fetching encoder model from the Hugging Face Hub");

    let mut files = Vec::with_capacity(REQUIRED_MODEL_FILES.len());
    for name in REQUIRED_MODEL_FILES {
        let path = repo
            .get(name)
            .await
            .map_err(|e| EmbeddingError::DownloadFailed {
                model_id: model_id.to_string(),
                reason: format!("failed to fetch {}: {}", name, e),
            })?;
        debug!(file = name, path = %path.display(), "Model file ready");
        files.push(path);
    }

    snapshot_dir(model_id, &files)
}

/// The one directory holding every fetched file.
pub(crate) fn snapshot_dir(model_id: &str, files: &[PathBuf]) -> Result<PathBuf, EmbeddingError> {
    let mut parents = files.iter().map(|f| f.parent());

    let first = parents
        .next()
        .flatten()
        .ok_or_else(|| EmbeddingError::DownloadFailed {
            model_id: model_id.to_string(),
            reason: "no model files were fetched".to_string(),
        })?;

    if parents.any(|p| p != Some(first)) {
        return Err(EmbeddingError::DownloadFailed {
            model_id: model_id.to_string(),
            reason: "model files landed in different cache directories".to_string(),
        });
    }

    Ok(Path::to_path_buf(first))
}
