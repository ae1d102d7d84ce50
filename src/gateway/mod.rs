//! HTTP gateway (Axum): the web form, a JSON scoring endpoint, and health checks.
//!
//! This layer only adapts HTTP to [`ResumeMatcher`](crate::pipeline::ResumeMatcher); all
//! matching rules live in [`crate::pipeline`].

pub mod error;
pub mod handler;
pub mod page;
pub mod state;


use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, State},
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{MatchResponse, index_handler, match_form_handler, match_json_handler};
pub use state::HandlerState;

use crate::constants::{
    CVMATCH_STATUS_ERROR, CVMATCH_STATUS_HEADER, CVMATCH_STATUS_HEALTHY, CVMATCH_STATUS_READY,
};
use crate::document::TextExtractor;
use crate::embedding::TextEncoder;

pub fn create_router_with_state<X, E>(state: HandlerState<X, E>) -> Router
where
    X: TextExtractor + 'static,
    E: TextEncoder + 'static,
{
    let body_limit = state.max_upload_bytes;

    Router::new()
        .route("/", get(index_handler))
        .route("/match", post(match_form_handler))
        .route("/v1/match", post(match_json_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub encoder: &'static str,
    pub encoder_mode: &'static str,
    pub embedding_dim: usize,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        CVMATCH_STATUS_HEADER,
        HeaderValue::from_static(CVMATCH_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler<X, E>(State(state): State<HandlerState<X, E>>) -> Response
where
    X: TextExtractor + 'static,
    E: TextEncoder + 'static,
{
    let encoder = state.matcher.encoder();
    let embedding_dim = encoder.embedding_dim();

    let encoder_status = if embedding_dim > 0 {
        CVMATCH_STATUS_READY
    } else {
        CVMATCH_STATUS_ERROR
    };
    let encoder_mode = handler::encoder_mode(encoder.is_stub());

    let components = ComponentStatus {
        http: CVMATCH_STATUS_READY,
        encoder: encoder_status,
        encoder_mode,
        embedding_dim,
    };

    let is_ready = components.encoder == CVMATCH_STATUS_READY;
    let status_code = if is_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let status_msg = if is_ready { "ok" } else { "pending" };

    let mut headers = HeaderMap::new();
    headers.insert(
        CVMATCH_STATUS_HEADER,
        HeaderValue::from_static(if is_ready {
            CVMATCH_STATUS_READY
        } else {
            CVMATCH_STATUS_ERROR
        }),
    );

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
