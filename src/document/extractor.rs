use lopdf::Document;
use tracing::{debug, warn};

use super::error::DocumentError;
use super::types::ExtractedText;

/// Turns an uploaded document into plain text.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, document: &[u8]) -> Result<ExtractedText, DocumentError>;
}

/// PDF text extraction backed by `lopdf`.
///
/// Pages are visited in page-number order. A page whose text is blank, or whose content cannot
/// be decoded, contributes nothing; that is never an error. Only an unparseable or encrypted
/// file fails the extraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }

    fn load(bytes: &[u8]) -> Result<Document, DocumentError> {
        if bytes.is_empty() {
            return Err(DocumentError::InvalidFormat {
                reason: "document is empty".to_string(),
            });
        }

        let doc = Document::load_mem(bytes)?;

        // lopdf drops the Encrypt entry once it manages to decrypt with an empty password.
        if doc.trailer.get(b"Encrypt").is_ok() {
            return Err(DocumentError::Encrypted);
        }

        Ok(doc)
    }
}

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<ExtractedText, DocumentError> {
        let doc = Self::load(bytes)?;
        let pages = doc.get_pages();

        debug!(
            bytes = bytes.len(),
            page_count = pages.len(),
            "Extracting text from PDF"
        );

        let mut extracted = ExtractedText::with_page_count(pages.len());
        for &page_number in pages.keys() {
            match doc.extract_text(&[page_number]) {
                Ok(page_text) => {
                    if !extracted.push_page(&page_text) {
                        debug!(page = page_number, "Page has no extractable text, skipping");
                    }
                }
                Err(e) => {
                    warn!(
                        page = page_number,
                        error = %e,
                        "Failed to extract text from page, skipping"
                    );
                }
            }
        }

        debug!(
            page_count = extracted.page_count(),
            pages_with_text = extracted.pages_with_text(),
            text_len = extracted.as_str().len(),
            "PDF extraction complete"
        );

        Ok(extracted)
    }
}
