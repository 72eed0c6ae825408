//! Route definitions for questionnaire templates.
//!
//! Mounted at `/api/v1`.
//!
//! ```text
//! GET /templates          list_templates
//! GET /templates/{name}   get_template
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::template;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", get(template::list_templates))
        .route("/templates/{name}", get(template::get_template))
}
