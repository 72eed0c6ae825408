//! Handlers for questionnaire validation and translation.

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use reelkit_core::questionnaire::Questionnaire;
use reelkit_core::translator::{self, ConsistencyMarkers};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;

/// Summary returned for a structurally valid questionnaire.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub questionnaire_id: String,
    pub segment_count: usize,
    pub total_duration_secs: u32,
}

/// POST /api/v1/questionnaires/validate
///
/// Runs structural validation and reports segment count and total
/// duration. The first validation problem surfaces as a 400 with the
/// reason string.
pub async fn validate(
    Json(questionnaire): Json<Questionnaire>,
) -> AppResult<impl IntoResponse> {
    questionnaire.validate().map_err(AppError::Core)?;

    Ok(Json(DataResponse {
        data: ValidateResponse {
            valid: true,
            questionnaire_id: questionnaire.project_title.clone(),
            segment_count: questionnaire.segments.len(),
            total_duration_secs: questionnaire.total_duration_secs(),
        },
    }))
}

/// One translated prompt in a translation response.
#[derive(Debug, Serialize)]
pub struct PromptEntry {
    pub segment_number: u32,
    pub scene_id: Option<String>,
    pub prompt: String,
    pub duration_secs: Option<u32>,
    pub consistency_markers: Option<ConsistencyMarkers>,
}

/// Ordered prompt list for a translated questionnaire.
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub prompts: Vec<PromptEntry>,
    pub total: usize,
}

/// POST /api/v1/questionnaires/translate
///
/// Validates, then translates the questionnaire into its ordered
/// per-segment prompt list. No partial results: a validation failure
/// aborts the whole operation.
pub async fn translate(
    Json(questionnaire): Json<Questionnaire>,
) -> AppResult<impl IntoResponse> {
    let requests =
        translator::translate_questionnaire(&questionnaire).map_err(AppError::Core)?;

    let prompts: Vec<PromptEntry> = requests
        .into_iter()
        .enumerate()
        .map(|(i, request)| PromptEntry {
            segment_number: i as u32 + 1,
            scene_id: request.scene_id,
            prompt: request.prompt,
            duration_secs: request.duration_secs,
            consistency_markers: request.consistency_markers,
        })
        .collect();

    let total = prompts.len();
    Ok(Json(DataResponse {
        data: TranslateResponse { prompts, total },
    }))
}
