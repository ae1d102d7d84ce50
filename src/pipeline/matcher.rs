use tracing::{debug, info, instrument};

use crate::document::TextExtractor;
use crate::embedding::TextEncoder;
use crate::scoring::{MatchScore, score_embeddings};

use super::error::{MatchError, ValidationError};
use super::types::{MatchReport, Submission};

/// Scores a resume against a job description.
///
/// Constructed once with its extractor and encoder, then shared read-only. Each call to
/// [`evaluate`](ResumeMatcher::evaluate) is independent: validate, extract, encode both texts,
/// score. Nothing is retried and no partial result is returned on failure.
#[derive(Debug, Clone)]
pub struct ResumeMatcher<X, E> {
    extractor: X,
    encoder: E,
}

impl<X, E> ResumeMatcher<X, E>
where
    X: TextExtractor,
    E: TextEncoder,
{
    pub fn new(extractor: X, encoder: E) -> Self {
        Self { extractor, encoder }
    }

    pub fn extractor(&self) -> &X {
        &self.extractor
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Runs the full pipeline for one submission.
    #[instrument(skip_all, fields(job_description_len = submission.job_description.len()))]
    pub fn evaluate(&self, submission: &Submission) -> Result<MatchReport, MatchError> {
        let document = Self::validate(submission)?;

        let resume_text = self.extractor.extract(document)?;
        debug!(
            page_count = resume_text.page_count(),
            pages_with_text = resume_text.pages_with_text(),
            "Resume text extracted"
        );

        let score = self.score_texts(resume_text.as_str(), &submission.job_description)?;

        info!(
            score = score.percent,
            degenerate = score.degenerate,
            "Resume scored"
        );

        Ok(MatchReport { score, resume_text })
    }

    /// Encodes both texts and scores them. The resume text may be empty.
    pub fn score_texts(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<MatchScore, MatchError> {
        let resume_embedding = self.encoder.encode(resume_text)?;
        let job_embedding = self.encoder.encode(job_description)?;
        Ok(score_embeddings(&resume_embedding, &job_embedding)?)
    }

    /// Checks the submission before any work runs: a document first, then a job description.
    fn validate(submission: &Submission) -> Result<&[u8], ValidationError> {
        let document = submission
            .document_bytes()
            .ok_or(ValidationError::MissingDocument)?;

        if submission.job_description.trim().is_empty() {
            return Err(ValidationError::EmptyJobDescription);
        }

        Ok(document)
    }
}
