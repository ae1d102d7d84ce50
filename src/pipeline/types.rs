use bytes::Bytes;
use serde::Serialize;

use crate::document::ExtractedText;
use crate::scoring::MatchScore;

/// One user submission: an uploaded resume and a pasted job description.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    /// Raw uploaded file. An empty upload counts as no upload.
    pub document: Option<Bytes>,
    pub job_description: String,
}

impl Submission {
    pub fn new(document: impl Into<Bytes>, job_description: impl Into<String>) -> Self {
        Self {
            document: Some(document.into()),
            job_description: job_description.into(),
        }
    }

    /// A submission with no document attached.
    pub fn without_document(job_description: impl Into<String>) -> Self {
        Self {
            document: None,
            job_description: job_description.into(),
        }
    }

    /// Returns the uploaded bytes, treating a zero-length upload as missing.
    pub fn document_bytes(&self) -> Option<&[u8]> {
        self.document
            .as_deref()
            .filter(|bytes| !bytes.is_empty())
    }
}

/// Result of a successful matching run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub score: MatchScore,
    pub resume_text: ExtractedText,
}
