use serde::Serialize;
use serde_json::{Map, Value};

// === HTTP DTOs ===

/// Arbitrary JSON object supplied by the caller. The order-preserving map
/// keeps unknown fields round-tripping exactly as sent.
pub type StepPayload = Map<String, Value>;

/// Acknowledgement returned by every step route.
#[derive(Debug, Serialize)]
pub struct StepResponse {
    pub ok: bool,
    pub step: &'static str,
    #[serde(rename = "receivedAt")]
    pub received_at: String,
    pub payload: StepPayload,
}

/// Response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}
