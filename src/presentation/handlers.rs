// HTTP request handlers
use crate::application::prediction_oracle::OracleError;
use crate::presentation::app_state::AppState;
use crate::presentation::views::{dashboard_view, leak_detail_view, optimization_chart_view};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    details: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Invoke the leak-detection oracle and relay its JSON verbatim
pub async fn predict_leak(State(state): State<Arc<AppState>>) -> Response {
    match state.predictions.predict_leak().await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => oracle_error_response(err),
    }
}

/// Invoke the fuel-trim optimization oracle and relay its JSON verbatim
pub async fn predict_optimization(State(state): State<Arc<AppState>>) -> Response {
    match state.predictions.predict_optimization().await {
        Ok(payload) => Json(payload).into_response(),
        Err(err) => oracle_error_response(err),
    }
}

pub async fn dashboard(State(state): State<Arc<AppState>>) -> Response {
    let view = state.view.borrow().clone();
    Json(dashboard_view(&view)).into_response()
}

pub async fn leak_detail(State(state): State<Arc<AppState>>) -> Response {
    let view = state.view.borrow().clone();
    Json(leak_detail_view(&view)).into_response()
}

pub async fn optimization_chart(State(state): State<Arc<AppState>>) -> Response {
    let view = state.view.borrow().clone();
    Json(optimization_chart_view(&view)).into_response()
}

/// Map an oracle failure to the gateway's HTTP 500 contract. A failure body
/// never includes a parsed payload, only `error` and `details`.
fn oracle_error_response(err: OracleError) -> Response {
    let (error, details) = match err {
        OracleError::Failed { details } => ("Model script failed", details),
        OracleError::Spawn(source) => ("Model script failed", source.to_string()),
        OracleError::MalformedOutput { details } => ("Parse Error", details),
        OracleError::TimedOut(bound) => (
            "Model script timed out",
            format!("no result within {}ms", bound.as_millis()),
        ),
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody { error, details }),
    )
        .into_response()
}
