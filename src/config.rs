//! Environment-derived configuration for the worker process.

use std::env;

const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Listen address, `host:port`.
    pub addr: String,
}

impl WorkerConfig {
    /// Reads configuration from the process environment.
    ///
    /// `WORKER_ADDR` overrides the listen address; everything else about the
    /// service is fixed by the route table.
    pub fn from_env() -> Self {
        let addr = env::var("WORKER_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        Self { addr }
    }
}
