//! HTTP client helpers for tests.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

pub struct TestClient {
    client: reqwest::Client,
    base_url: String,
}

/// Resume upload attached to a match request.
pub struct Upload<'a> {
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub data: Vec<u8>,
}

impl<'a> Upload<'a> {
    pub fn pdf(data: Vec<u8>) -> Self {
        Self {
            file_name: "resume.pdf",
            content_type: "application/pdf",
            data,
        }
    }
}

impl TestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{}", self.base_url, path)
    }

    fn form(upload: Option<Upload<'_>>, job_description: &str) -> Form {
        let mut form = Form::new().text("job_description", job_description.to_string());
        if let Some(upload) = upload {
            let part = Part::bytes(upload.data)
                .file_name(upload.file_name.to_string())
                .mime_str(upload.content_type)
                .expect("valid content type");
            form = form.part("resume", part);
        }
        form
    }

    /// `POST /v1/match`, returning the parsed body and the status header.
    pub async fn match_json(
        &self,
        upload: Option<Upload<'_>>,
        job_description: &str,
    ) -> Result<(MatchResponse, String), TestClientError> {
        let resp = self
            .client
            .post(self.url("/v1/match"))
            .multipart(Self::form(upload, job_description))
            .send()
            .await?;

        let status_header = resp
            .headers()
            .get("x-cvmatch-status")
            .and_then(|h| h.to_str().ok())
            .unwrap_or("unknown")
            .to_string();

        match resp.status().as_u16() {
            200 => Ok((resp.json().await?, status_header)),
            status @ (400 | 413 | 415 | 422) => {
                let body: ErrorResponse = resp.json().await?;
                Err(TestClientError::Rejected(status, body.error))
            }
            status => {
                let body = resp.text().await.unwrap_or_default();
                Err(TestClientError::UnexpectedStatus(status, body))
            }
        }
    }

    /// `POST /match`, returning the status code and the rendered page.
    pub async fn match_form(
        &self,
        upload: Option<Upload<'_>>,
        job_description: &str,
    ) -> Result<(u16, String), TestClientError> {
        let resp = self
            .client
            .post(self.url("/match"))
            .multipart(Self::form(upload, job_description))
            .send()
            .await?;

        let status = resp.status().as_u16();
        Ok((status, resp.text().await?))
    }

    pub async fn index(&self) -> Result<String, TestClientError> {
        let resp = self.client.get(self.url("/")).send().await?;
        Ok(resp.error_for_status()?.text().await?)
    }

    pub async fn health(&self) -> Result<HealthResponse, TestClientError> {
        let resp = self.client.get(self.url("/healthz")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }

    pub async fn ready(&self) -> Result<ReadyResponse, TestClientError> {
        let resp = self.client.get(self.url("/ready")).send().await?;

        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            Err(TestClientError::UnexpectedStatus(status, body))
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct MatchResponse {
    pub score: f64,
    pub similarity: f64,
    pub degenerate: bool,
    pub resume_text: String,
    pub page_count: usize,
    pub pages_with_text: usize,
    pub encoder_mode: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct ReadyResponse {
    pub status: String,
    pub components: ComponentStatus,
}

impl ReadyResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Deserialize)]
pub struct ComponentStatus {
    pub http: String,
    pub encoder: String,
    pub encoder_mode: String,
    pub embedding_dim: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum TestClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Rejected ({0}): {1}")]
    Rejected(u16, String),
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),
}
