use std::path::Path;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Multipart, State, multipart::MultipartError},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::constants::{CVMATCH_STATUS_HEADER, CVMATCH_STATUS_READY, CVMATCH_STATUS_SCORED};
use crate::document::TextExtractor;
use crate::embedding::TextEncoder;
use crate::pipeline::{MatchReport, ResumeMatcher, Submission};

use super::error::GatewayError;
use super::page::{self, MatchPage};
use super::state::HandlerState;

/// Multipart field carrying the uploaded resume.
pub const RESUME_FIELD: &str = "resume";
/// Multipart field carrying the job description text.
pub const JOB_DESCRIPTION_FIELD: &str = "job_description";

const PDF_CONTENT_TYPES: [&str; 2] = ["application/pdf", "application/x-pdf"];

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    /// Percentage, two decimals, may be negative.
    pub score: f64,
    pub similarity: f64,
    pub degenerate: bool,
    pub resume_text: String,
    pub page_count: usize,
    pub pages_with_text: usize,
    /// `"real"` for the sentence model, `"stub"` for keyword hashing.
    pub encoder_mode: &'static str,
}

impl MatchResponse {
    pub fn new(report: MatchReport, stub_encoder: bool) -> Self {
        Self {
            encoder_mode: encoder_mode(stub_encoder),
            score: report.score.percent,
            similarity: report.score.similarity,
            degenerate: report.score.degenerate,
            page_count: report.resume_text.page_count(),
            pages_with_text: report.resume_text.pages_with_text(),
            resume_text: report.resume_text.into_string(),
        }
    }
}

/// `GET /`: the empty form.
#[instrument]
pub async fn index_handler() -> Response {
    page::render(&MatchPage::empty(), StatusCode::OK, CVMATCH_STATUS_READY)
}

/// `POST /match`: form submission rendered back as HTML.
///
/// Every failure is shown on the page as a warning; nothing here can take the process down.
#[instrument(skip(state, multipart))]
pub async fn match_form_handler<X, E>(
    State(state): State<HandlerState<X, E>>,
    multipart: Multipart,
) -> Response
where
    X: TextExtractor + 'static,
    E: TextEncoder + 'static,
{
    let submission = match read_submission(multipart).await {
        Ok(submission) => submission,
        Err(e) => return page::render_rejected("", &e),
    };

    let job_description = submission.job_description.clone();
    let stub_encoder = state.matcher.encoder().is_stub();
    match run_matcher(Arc::clone(&state.matcher), submission).await {
        Ok(report) => page::render_scored(&job_description, &report, stub_encoder),
        Err(e) => page::render_rejected(&job_description, &e),
    }
}

/// `POST /v1/match`: same input as the form, JSON output.
#[instrument(skip(state, multipart))]
pub async fn match_json_handler<X, E>(
    State(state): State<HandlerState<X, E>>,
    multipart: Multipart,
) -> Result<Response, GatewayError>
where
    X: TextExtractor + 'static,
    E: TextEncoder + 'static,
{
    let submission = read_submission(multipart).await?;
    let stub_encoder = state.matcher.encoder().is_stub();
    let report = run_matcher(Arc::clone(&state.matcher), submission).await?;

    let mut headers = HeaderMap::new();
    headers.insert(
        CVMATCH_STATUS_HEADER,
        HeaderValue::from_static(CVMATCH_STATUS_SCORED),
    );

    Ok((
        StatusCode::OK,
        headers,
        Json(MatchResponse::new(report, stub_encoder)),
    )
        .into_response())
}

pub(crate) fn encoder_mode(stub_encoder: bool) -> &'static str {
    if stub_encoder { "stub" } else { "real" }
}

/// Runs the synchronous pipeline on the blocking pool.
pub(crate) async fn run_matcher<X, E>(
    matcher: Arc<ResumeMatcher<X, E>>,
    submission: Submission,
) -> Result<MatchReport, GatewayError>
where
    X: TextExtractor + 'static,
    E: TextEncoder + 'static,
{
    tokio::task::spawn_blocking(move || matcher.evaluate(&submission))
        .await
        .map_err(|e| GatewayError::InternalError(format!("matching task failed: {}", e)))?
        .map_err(GatewayError::from)
}

/// Collects the resume upload and job description from a multipart body.
///
/// Browsers send an empty file part when nothing was chosen; that becomes "no document" and
/// is reported by validation, not here.
pub(crate) async fn read_submission(mut multipart: Multipart) -> Result<Submission, GatewayError> {
    let mut submission = Submission::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            RESUME_FIELD => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;

                if data.is_empty() {
                    debug!("Empty resume part, treating as no upload");
                    continue;
                }

                if !is_pdf_upload(file_name.as_deref(), content_type.as_deref()) {
                    return Err(GatewayError::UnsupportedMediaType(format!(
                        "'{}' is not a PDF",
                        file_name.as_deref().unwrap_or("upload")
                    )));
                }

                debug!(bytes = data.len(), file_name = ?file_name, "Resume received");
                submission.document = Some(data);
            }
            JOB_DESCRIPTION_FIELD => {
                submission.job_description = field.text().await.map_err(multipart_error)?;
            }
            other => {
                debug!(field = other, "Ignoring unknown form field");
                field.bytes().await.map_err(multipart_error)?;
            }
        }
    }

    Ok(submission)
}

/// Accepts a part labelled as PDF by content type or file extension.
///
/// Parts with neither a file name nor a specific content type are let through; the extractor
/// decides whether the bytes are a PDF.
pub(crate) fn is_pdf_upload(file_name: Option<&str>, content_type: Option<&str>) -> bool {
    let content_type = content_type
        .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
        .filter(|ct| !ct.is_empty() && ct != "application/octet-stream");

    if content_type
        .as_deref()
        .is_some_and(|ct| PDF_CONTENT_TYPES.contains(&ct))
    {
        return true;
    }

    let has_pdf_extension = file_name
        .map(Path::new)
        .and_then(|p| p.extension())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if has_pdf_extension {
        return true;
    }

    let has_file_name = file_name.is_some_and(|name| !name.trim().is_empty());
    content_type.is_none() && !has_file_name
}

fn multipart_error(err: MultipartError) -> GatewayError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        GatewayError::PayloadTooLarge(err.body_text())
    } else {
        GatewayError::InvalidRequest(format!("malformed form data: {}", err.body_text()))
    }
}
