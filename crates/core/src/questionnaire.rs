//! Questionnaire model for multi-segment promo video projects.
//!
//! A [`Questionnaire`] captures everything needed to generate a short
//! promotional video as an ordered list of [`Segment`]s. Validation is
//! structural and on-demand; construction never rejects. Serialization
//! round-trips every field through a flat JSON record with lowercase
//! string tokens for enum fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum number of segments per questionnaire (48 seconds total).
pub const MAX_SEGMENTS: usize = 6;

/// Default length of one segment in seconds.
pub const DEFAULT_SEGMENT_DURATION_SECS: u32 = 8;

/// Default lighting preference when the questionnaire does not set one.
pub const DEFAULT_LIGHTING_PREFERENCE: &str = "bright_professional";

/// Default narration language.
pub const DEFAULT_NARRATION_LANGUAGE: &str = "english";

// ---------------------------------------------------------------------------
// Enumerated choices
// ---------------------------------------------------------------------------

/// Overall visual style of the video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStyle {
    Professional,
    Casual,
    Educational,
    Promotional,
}

/// Target platform for the finished video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformTarget {
    Instagram,
    Tiktok,
    YoutubeShorts,
    Facebook,
    Linkedin,
    Twitter,
}

/// Kind of on-screen presenter, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresenterKind {
    #[default]
    None,
    Person,
    AnimatedCharacter,
}

impl PresenterKind {
    /// Whether a presenter (human or animated) appears on screen.
    pub fn is_present(&self) -> bool {
        !matches!(self, PresenterKind::None)
    }
}

/// How much segment-to-segment drift the generated prompts permit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyMode {
    #[default]
    Strict,
    Balanced,
    Creative,
}

/// All valid consistency mode tokens.
pub const VALID_CONSISTENCY_MODES: &[&str] = &["strict", "balanced", "creative"];

impl ConsistencyMode {
    /// Parse a lowercase token into a mode.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "strict" => Ok(Self::Strict),
            "balanced" => Ok(Self::Balanced),
            "creative" => Ok(Self::Creative),
            _ => Err(CoreError::Validation(format!(
                "Invalid consistency mode '{s}'. Must be one of: {}",
                VALID_CONSISTENCY_MODES.join(", ")
            ))),
        }
    }

    /// The lowercase token form, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Balanced => "balanced",
            Self::Creative => "creative",
        }
    }
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// One fixed-duration shot of the target video.
///
/// `number` is 1-based and must match the segment's position in the
/// owning questionnaire's list (checked by [`Questionnaire::validate`]'s
/// callers implicitly through ordering; the model itself does not
/// reorder).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub number: u32,
    pub title: String,
    pub description: String,
    pub key_action: String,
    pub visual_focus: String,
    #[serde(default = "default_segment_duration")]
    pub duration_secs: u32,
    #[serde(default)]
    pub text_overlay: Option<String>,
    #[serde(default)]
    pub narration_script: Option<String>,
    #[serde(default)]
    pub props: Vec<String>,
    /// Per-segment location override; falls back to the questionnaire's
    /// primary location when absent.
    #[serde(default)]
    pub location: Option<String>,
}

fn default_segment_duration() -> u32 {
    DEFAULT_SEGMENT_DURATION_SECS
}

impl Segment {
    /// Create a segment with the default duration and no optional elements.
    pub fn new(
        number: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        key_action: impl Into<String>,
        visual_focus: impl Into<String>,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            description: description.into(),
            key_action: key_action.into(),
            visual_focus: visual_focus.into(),
            duration_secs: DEFAULT_SEGMENT_DURATION_SECS,
            text_overlay: None,
            narration_script: None,
            props: Vec::new(),
            location: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Questionnaire
// ---------------------------------------------------------------------------

/// Complete description of one promo video project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    // Core information
    pub project_title: String,
    pub purpose: String,
    pub audience: String,

    // Visual style
    pub style: VideoStyle,
    #[serde(default)]
    pub brand_colors: Vec<String>,
    #[serde(default)]
    pub brand_fonts: Vec<String>,

    // Platform requirements
    #[serde(default)]
    pub platforms: Vec<PlatformTarget>,

    // Presenter
    #[serde(default)]
    pub presenter: PresenterKind,
    #[serde(default)]
    pub presenter_description: Option<String>,
    #[serde(default)]
    pub presenter_clothing: Option<String>,

    // Location / setting
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub location_description: String,
    #[serde(default = "default_lighting_preference")]
    pub lighting_preference: String,

    // Branding
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub logo_placement: Option<String>,
    #[serde(default = "default_true")]
    pub intro_outro: bool,

    // Audio
    #[serde(default)]
    pub music_style: Option<String>,
    #[serde(default)]
    pub narration: bool,
    #[serde(default = "default_narration_language")]
    pub narration_language: String,

    // Consistency requirements
    #[serde(default)]
    pub consistency_mode: ConsistencyMode,

    pub segments: Vec<Segment>,
}

fn default_lighting_preference() -> String {
    DEFAULT_LIGHTING_PREFERENCE.to_string()
}

fn default_narration_language() -> String {
    DEFAULT_NARRATION_LANGUAGE.to_string()
}

fn default_true() -> bool {
    true
}

impl Questionnaire {
    /// Check structural completeness.
    ///
    /// Returns the first problem found, in a fixed order: project title,
    /// purpose, audience, segment count bounds, then per segment (in list
    /// order) title, description, and key action. Validation is shallow:
    /// enum values, color tokens, and durations are not checked here.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.project_title.is_empty() {
            return Err(CoreError::Validation("Project title is required".to_string()));
        }
        if self.purpose.is_empty() {
            return Err(CoreError::Validation("Purpose is required".to_string()));
        }
        if self.audience.is_empty() {
            return Err(CoreError::Validation(
                "Target audience is required".to_string(),
            ));
        }
        if self.segments.is_empty() {
            return Err(CoreError::Validation(
                "At least one segment is required".to_string(),
            ));
        }
        if self.segments.len() > MAX_SEGMENTS {
            return Err(CoreError::Validation(format!(
                "Maximum {MAX_SEGMENTS} segments allowed (48 seconds total)"
            )));
        }

        for segment in &self.segments {
            if segment.title.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Segment {} missing title",
                    segment.number
                )));
            }
            if segment.description.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Segment {} missing description",
                    segment.number
                )));
            }
            if segment.key_action.is_empty() {
                return Err(CoreError::Validation(format!(
                    "Segment {} missing key action",
                    segment.number
                )));
            }
        }

        Ok(())
    }

    /// Total configured duration across all segments, in seconds.
    pub fn total_duration_secs(&self) -> u32 {
        self.segments.iter().map(|s| s.duration_secs).sum()
    }

    /// Write the questionnaire to `path` as pretty-printed JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a questionnaire from a JSON file previously written by
    /// [`save_to_file`](Self::save_to_file).
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
