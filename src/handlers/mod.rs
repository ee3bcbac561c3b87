//! HTTP route handlers for the mock worker.

pub mod step;

use axum::Json;
use chrono::{SecondsFormat, Utc};

use crate::dto::HealthResponse;

/// Health check endpoint. No log emission, unlike the step routes.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: now_utc(),
    })
}

/// Current UTC time as ISO-8601 with a trailing `Z`,
/// e.g. `2026-08-31T12:00:00.123456Z`.
pub(crate) fn now_utc() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
