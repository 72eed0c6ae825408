//! Generation request lifecycle driver.
//!
//! [`VeoClient`] takes a [`GenerationRequest`] through
//! `submitted → (sync-complete | polling) → downloaded | failed` and
//! reports the terminal outcome as a [`GenerationResponse`]. Every
//! failure class (transport, protocol, timeout, download) is captured
//! into the response rather than returned as `Err`.

use futures::StreamExt;
use tokio::io::AsyncWriteExt;

use reelkit_core::translator::{ConsistencyMarkers, GenerationRequest};

use crate::api::{VeoApi, VeoApiError};
use crate::config::VeoConfig;
use crate::types::{GenerateVideoBody, GenerationParameters, GenerationResponse};

/// Errors internal to the client's submission and download paths.
///
/// These never cross [`VeoClient::generate`]'s boundary; they are
/// stringified into the failed [`GenerationResponse`].
#[derive(Debug, thiserror::Error)]
pub enum VeoError {
    #[error(transparent)]
    Api(#[from] VeoApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Client driving generation requests against the remote service.
pub struct VeoClient {
    api: VeoApi,
    config: VeoConfig,
}

impl VeoClient {
    /// Create a client from a validated configuration.
    pub fn new(config: VeoConfig) -> Result<Self, VeoError> {
        config.validate()?;
        tracing::info!(model = %config.model, "Generation client initialized");
        let api = VeoApi::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.api_key.clone(),
        );
        Ok(Self { api, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &VeoConfig {
        &self.config
    }

    /// Generate one video.
    ///
    /// Merges request-level overrides with configuration defaults,
    /// submits, and follows whichever completion path the service
    /// chooses: an immediate `videoUrl` is downloaded straight away; an
    /// `operationId` switches to polling. Transport failures during
    /// submission are retried up to the configured ceiling.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResponse {
        let parameters = GenerationParameters {
            duration: request
                .duration_secs
                .unwrap_or(self.config.default_duration_secs),
            resolution: request
                .resolution
                .clone()
                .unwrap_or_else(|| self.config.resolution.clone()),
            fps: request.fps.unwrap_or(self.config.fps),
            aspect_ratio: request
                .aspect_ratio
                .clone()
                .unwrap_or_else(|| self.config.aspect_ratio.clone()),
        };

        let body = GenerateVideoBody {
            prompt: request.prompt.clone(),
            parameters,
            consistency_markers: self.effective_markers(request),
        };

        tracing::info!(
            scene_id = request.scene_id.as_deref().unwrap_or("unnamed"),
            "Submitting generation request"
        );

        let mut retry_count = 0u32;
        let submitted = loop {
            match self.api.submit(&body).await {
                Ok(result) => break result,
                Err(err) if err.is_retryable() && retry_count < self.config.max_retries => {
                    retry_count += 1;
                    tracing::warn!(
                        error = %err,
                        retry = retry_count,
                        max = self.config.max_retries,
                        "Submission failed, retrying"
                    );
                }
                Err(err) => {
                    tracing::error!(error = %err, "Generation request failed");
                    return GenerationResponse::failure(err.to_string(), retry_count);
                }
            }
        };

        if let Some(operation_id) = submitted.operation_id {
            return self.poll_operation(&operation_id, request, retry_count).await;
        }

        if let Some(video_url) = submitted.video_url {
            return self
                .complete(video_url, submitted.metadata, request, retry_count)
                .await;
        }

        GenerationResponse::failure(
            "Unexpected response format from generation endpoint",
            retry_count,
        )
    }

    /// Submit requests strictly sequentially, stopping at the first
    /// failure. Returns the responses collected up to and including the
    /// failing one.
    pub async fn generate_sequence(
        &self,
        requests: &[GenerationRequest],
    ) -> Vec<GenerationResponse> {
        let mut responses = Vec::with_capacity(requests.len());
        for request in requests {
            let response = self.generate(request).await;
            let failed = !response.success;
            responses.push(response);
            if failed {
                tracing::warn!(
                    completed = responses.len() - 1,
                    total = requests.len(),
                    "Sequence stopped at first failure"
                );
                break;
            }
        }
        responses
    }

    // ---- lifecycle stages ----

    /// Poll an asynchronous operation until completion or the attempt
    /// ceiling. Fixed cadence: no backoff, no jitter, no cancellation.
    async fn poll_operation(
        &self,
        operation_id: &str,
        request: &GenerationRequest,
        retry_count: u32,
    ) -> GenerationResponse {
        for attempt in 1..=self.config.poll_max_attempts {
            let status = match self.api.operation_status(operation_id).await {
                Ok(status) => status,
                Err(err) => {
                    tracing::error!(error = %err, operation_id, "Status polling failed");
                    return GenerationResponse::failure(
                        format!("Polling failed: {err}"),
                        retry_count,
                    );
                }
            };

            if status.done {
                if let Some(error) = status.error {
                    let message = error
                        .message
                        .unwrap_or_else(|| "Unknown error".to_string());
                    return GenerationResponse::failure(message, retry_count);
                }

                if let Some(output) = status.response {
                    if let Some(video_url) = output.video_url {
                        return self
                            .complete(video_url, output.metadata, request, retry_count)
                            .await;
                    }
                }
                // Done without a URL or an error: keep polling until the
                // service fills in the response.
            }

            tracing::info!(
                attempt,
                max = self.config.poll_max_attempts,
                "Generation in progress"
            );
            tokio::time::sleep(self.config.poll_interval).await;
        }

        GenerationResponse::failure("Generation timeout", retry_count)
    }

    /// Download the artifact and assemble the success response. A failed
    /// download produces a failed response like every other error class.
    async fn complete(
        &self,
        video_url: String,
        metadata: Option<serde_json::Value>,
        request: &GenerationRequest,
        retry_count: u32,
    ) -> GenerationResponse {
        match self
            .download_artifact(&video_url, request.scene_id.as_deref())
            .await
        {
            Ok(video_path) => GenerationResponse {
                success: true,
                video_path: Some(video_path),
                video_url: Some(video_url),
                metadata,
                error: None,
                retry_count,
            },
            Err(err) => {
                tracing::error!(error = %err, "Video download failed");
                GenerationResponse::failure(format!("Download failed: {err}"), retry_count)
            }
        }
    }

    /// Stream the artifact to the output directory.
    ///
    /// Filename is `{scene_id | "video"}_{unix_timestamp}.mp4`;
    /// collisions are avoided only through timestamp granularity. Writes
    /// are not atomic; a partial file is left behind on failure.
    async fn download_artifact(
        &self,
        url: &str,
        scene_id: Option<&str>,
    ) -> Result<String, VeoError> {
        let filename = format!(
            "{}_{}.mp4",
            scene_id.unwrap_or("video"),
            chrono::Utc::now().timestamp()
        );
        let path = self.config.output_dir.join(filename);

        tracing::info!(path = %path.display(), "Downloading video");

        let response = self.api.fetch_artifact(url).await?;
        let mut file = tokio::fs::File::create(&path).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(VeoApiError::from)?;
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        tracing::info!(path = %path.display(), "Video downloaded");
        Ok(path.to_string_lossy().into_owned())
    }

    /// Request markers filtered through the tracking toggles.
    fn effective_markers(&self, request: &GenerationRequest) -> Option<ConsistencyMarkers> {
        let mut markers = request.consistency_markers.clone()?;
        if !self.config.presenter_tracking {
            markers.presenter_id = None;
        }
        if !self.config.location_tracking {
            markers.location_id = None;
        }
        Some(markers)
    }
}
