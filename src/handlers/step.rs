//! Deployment-step handlers: the generic echo plus the two annotating routes.

use axum::Json;
use serde_json::Value;
use tracing::{debug, info};

use crate::dto::{StepPayload, StepResponse};
use crate::handlers::now_utc;
use crate::steps;

/// Generic echo step: log the payload and acknowledge it unchanged.
pub async fn echo(step: &'static str, Json(payload): Json<StepPayload>) -> Json<StepResponse> {
    Json(acknowledge(step, payload))
}

/// `POST /verify` - echo with fixed verification metrics attached.
/// A caller-supplied `metrics` key is overwritten.
pub async fn verify(Json(payload): Json<StepPayload>) -> Json<StepResponse> {
    let payload = steps::merge_with_override(payload, [("metrics", steps::verify_metrics())]);
    Json(acknowledge("verify", payload))
}

/// `POST /effective_status` - simulated health decision keyed on the scope
/// prefix. A missing or non-string `scope` counts as not matching.
pub async fn effective_status(Json(payload): Json<StepPayload>) -> Json<StepResponse> {
    let scope = payload
        .get("scope")
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_owned();
    let success = scope.starts_with(steps::HEALTHY_SCOPE_PREFIX);
    debug!(scope = %scope, success, "computed effective status");

    let status = if success { "healthy" } else { "unhealthy" };
    let payload = steps::merge_with_override(
        payload,
        [
            ("success", Value::Bool(success)),
            ("status", Value::String(status.to_owned())),
            ("metrics", steps::status_metrics(success)),
        ],
    );
    Json(acknowledge("effective_status", payload))
}

/// Stamps the receive time, emits the per-step log record, and wraps the
/// payload in the canned acknowledgement.
fn acknowledge(step: &'static str, payload: StepPayload) -> StepResponse {
    let received_at = now_utc();
    info!(
        timestamp = %received_at,
        step,
        payload = %serde_json::Value::Object(payload.clone()),
        "worker step"
    );

    StepResponse {
        ok: true,
        step,
        received_at,
        payload,
    }
}
