//! Generation client configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use reelkit_core::questionnaire::ConsistencyMode;

use crate::client::VeoError;

/// Default model name.
pub const DEFAULT_MODEL: &str = "veo-3";

/// Default API endpoint (base URL up to and including the models path).
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Fixed polling cadence in seconds.
pub const POLL_INTERVAL_SECS: u64 = 5;

/// Fixed polling attempt ceiling (together with [`POLL_INTERVAL_SECS`],
/// a five-minute wait bound).
pub const POLL_MAX_ATTEMPTS: u32 = 60;

/// Configuration for the generation client.
///
/// All fields except the API key have defaults suitable for local use.
/// `poll_interval` and `poll_max_attempts` default to the fixed cadence
/// above; they are plain fields so tests can compress the wait.
#[derive(Debug, Clone)]
pub struct VeoConfig {
    /// Bearer token for the remote service (required).
    pub api_key: String,
    /// Model identifier appended to the endpoint path.
    pub model: String,
    /// Base API URL.
    pub endpoint: String,
    /// Default consistency mode for questionnaires that do not set one.
    pub consistency_mode: ConsistencyMode,

    // Generation parameter defaults, merged with request-level overrides.
    pub default_duration_secs: u32,
    pub resolution: String,
    pub fps: u32,
    pub aspect_ratio: String,

    // Output paths.
    pub output_dir: PathBuf,
    pub metadata_dir: PathBuf,

    // Consistency-marker tracking toggles.
    pub presenter_tracking: bool,
    pub location_tracking: bool,

    /// Maximum number of submission retries after a transport failure.
    pub max_retries: u32,

    // Polling.
    pub poll_interval: Duration,
    pub poll_max_attempts: u32,
}

impl VeoConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `VEO_API_KEY`          | (required)               |
    /// | `VEO_MODEL`            | `veo-3`                  |
    /// | `VEO_ENDPOINT`         | Google generative API    |
    /// | `VEO_CONSISTENCY_MODE` | `strict`                 |
    /// | `VEO_DEFAULT_DURATION` | `5`                      |
    /// | `VEO_RESOLUTION`       | `1080p`                  |
    /// | `VEO_FPS`              | `24`                     |
    /// | `VEO_ASPECT_RATIO`     | `16:9`                   |
    /// | `OUTPUT_DIR`           | `./output/videos`        |
    /// | `METADATA_DIR`         | `./data/metadata`        |
    /// | `VEO_MAX_RETRIES`      | `3`                      |
    pub fn from_env() -> Result<Self, VeoError> {
        let api_key = std::env::var("VEO_API_KEY")
            .map_err(|_| VeoError::Config("VEO_API_KEY environment variable is required".into()))?;

        let consistency_mode = match std::env::var("VEO_CONSISTENCY_MODE") {
            Ok(token) => ConsistencyMode::parse(&token)
                .map_err(|e| VeoError::Config(e.to_string()))?,
            Err(_) => ConsistencyMode::Strict,
        };

        Ok(Self {
            api_key,
            model: std::env::var("VEO_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            endpoint: std::env::var("VEO_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into()),
            consistency_mode,
            default_duration_secs: env_parse("VEO_DEFAULT_DURATION", 5)?,
            resolution: std::env::var("VEO_RESOLUTION").unwrap_or_else(|_| "1080p".into()),
            fps: env_parse("VEO_FPS", 24)?,
            aspect_ratio: std::env::var("VEO_ASPECT_RATIO").unwrap_or_else(|_| "16:9".into()),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| "./output/videos".into())
                .into(),
            metadata_dir: std::env::var("METADATA_DIR")
                .unwrap_or_else(|_| "./data/metadata".into())
                .into(),
            presenter_tracking: true,
            location_tracking: true,
            max_retries: env_parse("VEO_MAX_RETRIES", 3)?,
            poll_interval: Duration::from_secs(POLL_INTERVAL_SECS),
            poll_max_attempts: POLL_MAX_ATTEMPTS,
        })
    }

    /// Validate settings and create the output directories.
    ///
    /// - The API key must be non-empty.
    /// - The default duration must be within 1..=60 seconds.
    pub fn validate(&self) -> Result<(), VeoError> {
        if self.api_key.is_empty() {
            return Err(VeoError::Config("API key is required".into()));
        }
        if !(1..=60).contains(&self.default_duration_secs) {
            return Err(VeoError::Config(format!(
                "Default duration must be between 1 and 60 seconds, got {}",
                self.default_duration_secs
            )));
        }

        std::fs::create_dir_all(&self.output_dir)?;
        std::fs::create_dir_all(&self.metadata_dir)?;

        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(var: &str, default: T) -> Result<T, VeoError> {
    match std::env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|_| VeoError::Config(format!("{var} must be a number, got '{value}'"))),
        Err(_) => Ok(default),
    }
}
