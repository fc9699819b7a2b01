//! API handlers

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::api::{AppState, NOT_FOUND_BODY};
use crate::Error;

/// List every album in catalog order
pub async fn list_albums(State(state): State<AppState>) -> Result<Response, Error> {
    let body = serde_json::to_vec(state.catalog.list())?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Health check with catalog status
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        albums: state.catalog.len(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub albums: usize,
}

/// Fallback for unmatched routes
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
