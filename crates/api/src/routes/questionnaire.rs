//! Route definitions for questionnaire validation and translation.
//!
//! Mounted at `/api/v1`.
//!
//! ```text
//! POST /questionnaires/validate    validate
//! POST /questionnaires/translate   translate
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::questionnaire;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questionnaires/validate", post(questionnaire::validate))
        .route("/questionnaires/translate", post(questionnaire::translate))
}
