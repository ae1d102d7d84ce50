use axum::{
    Json,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::constants::{CVMATCH_STATUS_HEADER, CVMATCH_STATUS_REJECTED};
use crate::document::DocumentError;
use crate::pipeline::{MatchError, ValidationError};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("upload too large: {0}")]
    PayloadTooLarge(String),

    #[error("unsupported file type: {0}")]
    UnsupportedMediaType(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("embedding failed: {0}")]
    EmbeddingFailed(String),

    #[error("scoring failed: {0}")]
    ScoringFailed(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl From<MatchError> for GatewayError {
    fn from(err: MatchError) -> Self {
        match err {
            MatchError::Validation(e) => GatewayError::Validation(e),
            MatchError::Document(e) => GatewayError::Document(e),
            MatchError::Embedding(e) => GatewayError::EmbeddingFailed(e.to_string()),
            MatchError::Scoring(e) => GatewayError::ScoringFailed(e.to_string()),
        }
    }
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            GatewayError::Validation(_) | GatewayError::Document(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            GatewayError::EmbeddingFailed(_)
            | GatewayError::ScoringFailed(_)
            | GatewayError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Value of the status header for this error.
    pub fn status_label(&self) -> &'static str {
        match self {
            GatewayError::InvalidRequest(_) => "invalid_request",
            GatewayError::PayloadTooLarge(_) => "payload_too_large",
            GatewayError::UnsupportedMediaType(_) => "unsupported_media_type",
            GatewayError::Validation(_) => CVMATCH_STATUS_REJECTED,
            GatewayError::Document(_) => "document_error",
            GatewayError::EmbeddingFailed(_) => "embedding_error",
            GatewayError::ScoringFailed(_) => "scoring_error",
            GatewayError::InternalError(_) => "internal_error",
        }
    }

    /// Message safe to show to the person who submitted the form.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::EmbeddingFailed(_)
            | GatewayError::ScoringFailed(_)
            | GatewayError::InternalError(_) => {
                "Something went wrong while scoring your resume. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub(crate) fn status_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            CVMATCH_STATUS_HEADER,
            HeaderValue::from_static(self.status_label()),
        );
        headers
    }
}

#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = Json(ErrorResponse {
            error: self.user_message(),
            code: status.as_u16(),
        });

        (status, self.status_headers(), body).into_response()
    }
}
