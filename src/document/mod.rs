//! Document text extraction.
//!
//! [`PdfExtractor`] reads an uploaded PDF page by page and concatenates the visible text.
//! Pages without extractable text (scanned images, empty pages) are skipped silently; only an
//! unreadable file is an error.

pub mod error;
pub mod extractor;
pub mod types;

#[cfg(any(test, feature = "mock"))]
pub mod fixtures;
#[cfg(any(test, feature = "mock"))]
mod mock;


pub use error::DocumentError;
pub use extractor::{PdfExtractor, TextExtractor};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockExtractor;
pub use types::ExtractedText;
