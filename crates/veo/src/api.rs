//! REST layer for the generation service HTTP endpoints.
//!
//! Wraps submission, operation-status polling, and artifact fetching
//! using [`reqwest`]. Higher-level lifecycle handling (retry, poll loop,
//! download-to-disk) lives in [`crate::client`].

use crate::types::{GenerateVideoBody, OperationStatus, SubmitResult};

/// HTTP client for a single generation service endpoint.
pub struct VeoApi {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

/// Errors from the REST layer.
#[derive(Debug, thiserror::Error)]
pub enum VeoApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Generation API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl VeoApiError {
    /// Whether a submission that failed with this error is worth
    /// retrying: network-level failures and server-side (5xx) statuses.
    pub fn is_retryable(&self) -> bool {
        match self {
            VeoApiError::Request(_) => true,
            VeoApiError::Api { status, .. } => *status >= 500,
        }
    }
}

impl VeoApi {
    /// Create a new API client.
    ///
    /// * `endpoint` - base URL up to and including the models path.
    /// * `model`    - model identifier appended to the submission path.
    /// * `api_key`  - bearer token.
    pub fn new(endpoint: String, model: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            model,
            api_key,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(
        client: reqwest::Client,
        endpoint: String,
        model: String,
        api_key: String,
    ) -> Self {
        Self {
            client,
            endpoint,
            model,
            api_key,
        }
    }

    /// Submit a generation request.
    ///
    /// Sends `POST {endpoint}/{model}:generateVideo` with bearer auth.
    pub async fn submit(&self, body: &GenerateVideoBody) -> Result<SubmitResult, VeoApiError> {
        let response = self
            .client
            .post(format!("{}/{}:generateVideo", self.endpoint, self.model))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the status of an asynchronous generation operation.
    ///
    /// Sends `GET {endpoint}/operations/{id}`.
    pub async fn operation_status(
        &self,
        operation_id: &str,
    ) -> Result<OperationStatus, VeoApiError> {
        let response = self
            .client
            .get(format!("{}/operations/{}", self.endpoint, operation_id))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Start fetching a generated artifact. Returns the raw response so
    /// the caller can stream the body to disk.
    pub async fn fetch_artifact(&self, url: &str) -> Result<reqwest::Response, VeoApiError> {
        let response = self.client.get(url).send().await?;
        Self::ensure_success(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`VeoApiError::Api`] with the
    /// status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, VeoApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(VeoApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, VeoApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
