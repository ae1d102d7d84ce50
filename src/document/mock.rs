use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::DocumentError;
use super::extractor::TextExtractor;
use super::types::ExtractedText;

/// Extractor returning canned text and counting its invocations.
#[derive(Debug, Clone)]
pub struct MockExtractor {
    pages: Vec<String>,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

impl MockExtractor {
    /// Succeeds with the given pages for any input.
    pub fn with_pages<S: Into<String>>(pages: impl IntoIterator<Item = S>) -> Self {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Succeeds with a single page of text.
    pub fn with_text(text: &str) -> Self {
        Self::with_pages([text])
    }

    /// Fails every extraction with [`DocumentError::InvalidFormat`].
    pub fn failing() -> Self {
        Self {
            pages: Vec::new(),
            fail: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextExtractor for MockExtractor {
    fn extract(&self, _document: &[u8]) -> Result<ExtractedText, DocumentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DocumentError::InvalidFormat {
                reason: "mock extractor configured to fail".to_string(),
            });
        }
        Ok(ExtractedText::from_pages(&self.pages))
    }
}
