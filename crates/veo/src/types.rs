//! Wire types for the generation service and the client's outcome type.

use serde::{Deserialize, Serialize};

use reelkit_core::translator::ConsistencyMarkers;

// ---------------------------------------------------------------------------
// Request body
// ---------------------------------------------------------------------------

/// Generation parameters after merging request overrides with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationParameters {
    pub duration: u32,
    pub resolution: String,
    pub fps: u32,
    pub aspect_ratio: String,
}

/// JSON body for the `generateVideo` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateVideoBody {
    pub prompt: String,
    pub parameters: GenerationParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistency_markers: Option<ConsistencyMarkers>,
}

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Response from the `generateVideo` endpoint.
///
/// The service answers with exactly one of `operationId` (asynchronous
/// generation, poll for completion) or `videoUrl` (synchronous result).
/// Both absent is an unexpected-format failure, decided by the client.
#[derive(Debug, Deserialize)]
pub struct SubmitResult {
    #[serde(rename = "operationId")]
    pub operation_id: Option<String>,
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Status of an in-progress asynchronous generation operation.
#[derive(Debug, Deserialize)]
pub struct OperationStatus {
    #[serde(default)]
    pub done: bool,
    pub error: Option<OperationError>,
    pub response: Option<OperationOutput>,
}

/// Error payload reported by a finished operation.
#[derive(Debug, Deserialize)]
pub struct OperationError {
    pub message: Option<String>,
}

/// Successful payload of a finished operation.
#[derive(Debug, Deserialize)]
pub struct OperationOutput {
    #[serde(rename = "videoUrl")]
    pub video_url: Option<String>,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Client outcome
// ---------------------------------------------------------------------------

/// Terminal outcome of one generation request.
///
/// All failure classes (transport, protocol, timeout, download) land
/// here with `success == false` and a message in `error`; the client
/// never surfaces them as `Err`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub video_path: Option<String>,
    pub video_url: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub error: Option<String>,
    /// Number of submission retries consumed before this outcome.
    pub retry_count: u32,
}

impl GenerationResponse {
    /// Build a failed response carrying the error text.
    pub fn failure(error: impl Into<String>, retry_count: u32) -> Self {
        Self {
            success: false,
            video_path: None,
            video_url: None,
            metadata: None,
            error: Some(error.into()),
            retry_count,
        }
    }
}
