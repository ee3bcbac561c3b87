//! Mock deployment-worker HTTP service.
//!
//! Exposes one health-check route plus a fixed table of deployment "step"
//! routes (provisioning, traffic shifting, verification, rollback,
//! notification, cleanup). Every step handler parses a JSON body, logs the
//! interaction, and returns a canned acknowledgement; nothing is stored
//! across calls and no real infrastructure work happens.

pub mod config;
pub mod dto;
pub mod handlers;
pub mod steps;

use axum::routing::{get, post};
use axum::{Json, Router};

use crate::dto::StepPayload;

/// Builds the full route table.
///
/// Kept separate from the binary so tests can drive the router directly
/// without binding a socket.
pub fn router() -> Router {
    let mut app = Router::new().route("/health", get(handlers::health));

    for &name in steps::ECHO_STEPS {
        app = app.route(
            &format!("/{name}"),
            post(move |payload: Json<StepPayload>| handlers::step::echo(name, payload)),
        );
    }

    app.route("/verify", post(handlers::step::verify))
        .route("/effective_status", post(handlers::step::effective_status))
}
