//! Step table and the synthetic fields the annotating routes attach.

use serde_json::{json, Value};

use crate::dto::StepPayload;

/// Steps that echo the payload back unchanged. `/verify` and
/// `/effective_status` are routed separately because they annotate it.
pub const ECHO_STEPS: &[&str] = &[
    "provision",
    "traffic",
    "create_infrastructure",
    "wait_infrastructure_created",
    "swap_traffic",
    "finalize_deployment",
    "rollback_deployment",
    "cleanup_old_resources",
    "update_monitoring",
    "notify_success",
    "restore_previous_traffic",
    "cleanup_failed_resources",
    "notify_failure",
];

/// Scope prefix that `/effective_status` treats as a healthy service.
pub const HEALTHY_SCOPE_PREFIX: &str = "svc-";

/// Copies the caller payload and sets each synthetic key on top of it.
/// Caller-supplied values for those keys are overwritten; existing keys keep
/// their original position, new keys append at the end.
pub fn merge_with_override<I>(mut base: StepPayload, synthetic: I) -> StepPayload
where
    I: IntoIterator<Item = (&'static str, Value)>,
{
    for (key, value) in synthetic {
        base.insert(key.to_string(), value);
    }
    base
}

/// Fixed metrics attached by `/verify`.
pub fn verify_metrics() -> Value {
    json!({ "latencyMs": 123, "errorRate": 0.01 })
}

/// Simulated metrics attached by `/effective_status`, keyed on the health
/// decision.
pub fn status_metrics(success: bool) -> Value {
    if success {
        json!({ "latencyMs": 45, "errorRate": 0.001 })
    } else {
        json!({ "latencyMs": 45, "errorRate": 0.15 })
    }
}
