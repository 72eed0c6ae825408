//! Handlers for questionnaire template listing and retrieval.

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;

use reelkit_core::templates;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// GET /api/v1/templates
pub async fn list_templates() -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: templates::template_descriptors(),
    }))
}

/// GET /api/v1/templates/{name}
///
/// Returns the named template questionnaire; unknown names are 404s.
pub async fn get_template(Path(name): Path<String>) -> AppResult<impl IntoResponse> {
    let questionnaire = templates::template(&name).map_err(AppError::Core)?;
    Ok(Json(DataResponse {
        data: questionnaire,
    }))
}
