//! Liveness and configuration-status endpoints.

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    message: &'static str,
    api_configured: bool,
}

/// Reports whether the generation API key is present in the environment.
/// The server itself never needs the key; this is a convenience for
/// operators wiring up the generation client.
async fn status() -> Json<StatusResponse> {
    let api_configured = std::env::var("VEO_API_KEY").is_ok();
    Json(StatusResponse {
        status: "operational",
        message: if api_configured {
            "System ready"
        } else {
            "API key not configured"
        },
        api_configured,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/status", get(status))
}
