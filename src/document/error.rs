use thiserror::Error;

/// Errors raised while turning an uploaded document into text.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The bytes could not be parsed as a PDF.
    #[error("uploaded file is not a readable PDF: {reason}")]
    InvalidFormat { reason: String },

    /// The PDF is encrypted and could not be opened without a password.
    #[error("uploaded PDF is encrypted and cannot be read")]
    Encrypted,
}

impl From<lopdf::Error> for DocumentError {
    fn from(err: lopdf::Error) -> Self {
        DocumentError::InvalidFormat {
            reason: err.to_string(),
        }
    }
}
