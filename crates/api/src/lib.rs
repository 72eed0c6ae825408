//! HTTP surface for questionnaire validation, translation, and templates.
//!
//! Thin pass-through over `reelkit-core`: handlers deserialize the
//! questionnaire record, delegate to the model/translator, and wrap
//! results in the standard `{ "data": ... }` envelope. Validation
//! failures surface as 400s with the reason string; everything
//! unexpected becomes a generic 500.

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;

use crate::config::ServerConfig;
use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .merge(routes::health::router())
        .nest(
            "/api/v1",
            routes::questionnaire::router().merge(routes::template::router()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS layer allowing the configured origins.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
