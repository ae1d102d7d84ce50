use askama::Template;
use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Response},
};

use crate::constants::{CVMATCH_STATUS_HEADER, CVMATCH_STATUS_SCORED};
use crate::pipeline::MatchReport;

use super::error::GatewayError;

/// Result block of the form page.
pub struct ReportView {
    pub score: String,
    pub resume_text: String,
    pub page_count: usize,
    pub pages_with_text: usize,
}

impl From<&MatchReport> for ReportView {
    fn from(report: &MatchReport) -> Self {
        Self {
            score: report.score.to_string(),
            resume_text: report.resume_text.as_str().to_string(),
            page_count: report.resume_text.page_count(),
            pages_with_text: report.resume_text.pages_with_text(),
        }
    }
}

/// The single page of the web UI: the form, plus an optional warning or result.
#[derive(Template)]
#[template(path = "index.html")]
pub struct MatchPage<'a> {
    pub job_description: &'a str,
    pub warning: Option<String>,
    pub result: Option<ReportView>,
    /// The score came from the keyword stub, not the sentence model.
    pub stub_encoder: bool,
}

impl<'a> MatchPage<'a> {
    pub fn empty() -> Self {
        Self {
            job_description: "",
            warning: None,
            result: None,
            stub_encoder: false,
        }
    }

    pub fn scored(job_description: &'a str, report: &MatchReport, stub_encoder: bool) -> Self {
        Self {
            job_description,
            warning: None,
            result: Some(ReportView::from(report)),
            stub_encoder,
        }
    }

    pub fn rejected(job_description: &'a str, error: &GatewayError) -> Self {
        Self {
            job_description,
            warning: Some(error.user_message()),
            result: None,
            stub_encoder: false,
        }
    }
}

/// Renders `page` with `status`; template failures become a plain 500.
pub fn render(page: &MatchPage<'_>, status: StatusCode, status_label: &'static str) -> Response {
    match page.render() {
        Ok(body) => {
            let mut headers = HeaderMap::new();
            headers.insert(
                CVMATCH_STATUS_HEADER,
                HeaderValue::from_static(status_label),
            );
            (status, headers, Html(body)).into_response()
        }
        Err(e) => GatewayError::InternalError(format!("template rendering failed: {}", e))
            .into_response(),
    }
}

pub fn render_scored(job_description: &str, report: &MatchReport, stub_encoder: bool) -> Response {
    render(
        &MatchPage::scored(job_description, report, stub_encoder),
        StatusCode::OK,
        CVMATCH_STATUS_SCORED,
    )
}

pub fn render_rejected(job_description: &str, error: &GatewayError) -> Response {
    render(
        &MatchPage::rejected(job_description, error),
        error.status_code(),
        error.status_label(),
    )
}
