//! Prompt translator: questionnaire → per-segment generation requests.
//!
//! Deterministic text generation with no network or disk access. Each
//! segment becomes one [`GenerationRequest`] whose prompt is an ordered
//! sequence of labeled sections; segments after the first carry a
//! continuity block pinning presenter, location, lighting, and palette
//! to the previous segment.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::questionnaire::{
    ConsistencyMode, PresenterKind, Questionnaire, Segment, VideoStyle,
};

// ---------------------------------------------------------------------------
// Consistency markers
// ---------------------------------------------------------------------------

/// Marker token attached when a presenter recurs across segments.
///
/// A constant literal: the upstream service keys recurring elements on
/// the marker's presence, not its content. It carries no discriminating
/// information across projects.
pub const PRESENTER_MARKER_ID: &str = "presenter_001";

/// Marker token attached when a primary location recurs across segments.
/// Constant literal, same caveat as [`PRESENTER_MARKER_ID`].
pub const LOCATION_MARKER_ID: &str = "location_001";

/// Metadata attached to a generation request to help the remote service
/// keep recurring elements visually stable across segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyMarkers {
    pub segment_number: u32,
    pub sequence_id: String,
    pub consistency_mode: ConsistencyMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presenter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Generation request
// ---------------------------------------------------------------------------

/// One unit of work for the generation client, derived from one segment.
///
/// Stateless value object owned by the caller. `resolution`, `fps`, and
/// `aspect_ratio` are optional overrides merged with client defaults at
/// submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(default)]
    pub duration_secs: Option<u32>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub fps: Option<u32>,
    #[serde(default)]
    pub aspect_ratio: Option<String>,
    #[serde(default)]
    pub scene_id: Option<String>,
    #[serde(default)]
    pub sequence_id: Option<String>,
    #[serde(default)]
    pub consistency_markers: Option<ConsistencyMarkers>,
}

impl GenerationRequest {
    /// Build a bare request from a prompt, with no overrides or markers.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            duration_secs: None,
            resolution: None,
            fps: None,
            aspect_ratio: None,
            scene_id: None,
            sequence_id: None,
            consistency_markers: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Style lookups
// ---------------------------------------------------------------------------

/// Camera-work phrase for a style.
fn cinematography_for(style: VideoStyle) -> &'static str {
    match style {
        VideoStyle::Professional => {
            "steady, professional camera work, clean composition, corporate aesthetic"
        }
        VideoStyle::Casual => "handheld feel, natural movement, relaxed framing, approachable style",
        VideoStyle::Educational => {
            "clear, focused shots, instructional framing, detailed visibility"
        }
        VideoStyle::Promotional => {
            "dynamic angles, engaging movement, polished production, eye-catching"
        }
    }
}

/// Lighting phrase for a style.
fn lighting_for(style: VideoStyle) -> &'static str {
    match style {
        VideoStyle::Professional => "bright, even professional lighting, high-key setup",
        VideoStyle::Casual => "natural lighting, soft shadows, warm tones",
        VideoStyle::Educational => {
            "clear, well-lit environment, no harsh shadows, visibility priority"
        }
        VideoStyle::Promotional => {
            "dramatic lighting, vibrant colors, high contrast, professional grade"
        }
    }
}

// ---------------------------------------------------------------------------
// Segment translation
// ---------------------------------------------------------------------------

/// Translate a single segment into a full prompt.
///
/// `previous_segment` enables the continuity block: it is emitted only
/// when a predecessor is supplied and the segment number is greater
/// than 1. Omitted sections contribute nothing; there are no empty
/// placeholders.
pub fn translate_segment(
    segment: &Segment,
    questionnaire: &Questionnaire,
    previous_segment: Option<&Segment>,
) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Header. The duration wording is fixed at 8 seconds independent of
    // the segment's configured duration; the actual duration travels in
    // the generation request parameters.
    lines.push(format!("[8-second video segment - {}]", segment.title));
    lines.push(String::new());

    // Scene description.
    lines.push(format!("Scene: {}", segment.description));
    lines.push(format!("Key Action: {}", segment.key_action));
    lines.push(format!("Visual Focus: {}", segment.visual_focus));
    lines.push(String::new());

    // Presenter block.
    match questionnaire.presenter {
        PresenterKind::Person => {
            if let Some(desc) = &questionnaire.presenter_description {
                lines.push(format!("Presenter: {desc}"));
            }
            if let Some(clothing) = &questionnaire.presenter_clothing {
                lines.push(format!("Clothing: {clothing}"));
            }
            lines.push(
                "Presenter position: Center frame, professional posture, engaging with camera"
                    .to_string(),
            );
            lines.push(String::new());
        }
        PresenterKind::AnimatedCharacter => {
            if let Some(desc) = &questionnaire.presenter_description {
                lines.push(format!("Animated Character: {desc}"));
            }
            lines.push("Character animation: Smooth, professional quality, expressive".to_string());
            lines.push(String::new());
        }
        PresenterKind::None => {}
    }

    // Location: segment-level override wins over the questionnaire's
    // primary location.
    if let Some(location) = &segment.location {
        lines.push(format!("Location: {location}"));
    } else if !questionnaire.location.is_empty() {
        lines.push(format!("Location: {}", questionnaire.location));
    }
    if !questionnaire.location_description.is_empty() {
        lines.push(questionnaire.location_description.clone());
    }
    lines.push(String::new());

    // Cinematography and lighting, keyed on style.
    lines.push(format!(
        "Cinematography: {}",
        cinematography_for(questionnaire.style)
    ));
    lines.push(format!("Lighting: {}", lighting_for(questionnaire.style)));
    lines.push(String::new());

    // Brand colors.
    if !questionnaire.brand_colors.is_empty() {
        lines.push(format!(
            "Color palette: {}, maintaining brand consistency",
            questionnaire.brand_colors.join(", ")
        ));
        lines.push(String::new());
    }

    // Text overlay.
    if let Some(overlay) = &segment.text_overlay {
        lines.push(format!("Text Overlay: '{overlay}'"));
        lines.push("Text position: Lower third, clean sans-serif font, high contrast".to_string());
        if let Some(first_color) = questionnaire.brand_colors.first() {
            lines.push(format!("Text color: {first_color}"));
        }
        lines.push(String::new());
    }

    // Props.
    if !segment.props.is_empty() {
        lines.push(format!("Props visible: {}", segment.props.join(", ")));
        lines.push(String::new());
    }

    // Continuity block: static boilerplate pinning recurring elements to
    // the previous segment, not a diff against its actual content.
    if let Some(previous) = previous_segment {
        if segment.number > 1 {
            lines.push("CONTINUITY REQUIREMENTS:".to_string());

            if questionnaire.presenter.is_present() {
                lines.push(format!(
                    "- Presenter MUST match exact appearance from Segment {}",
                    previous.number
                ));
                if let Some(clothing) = &questionnaire.presenter_clothing {
                    lines.push(format!("- Maintain exact clothing: {clothing}"));
                }
            }

            if !questionnaire.location.is_empty() {
                lines.push("- Location MUST be identical to previous segment".to_string());
                lines.push("- Lighting MUST match previous segment exactly".to_string());
            }

            lines.push("- Color palette MUST be consistent with previous segment".to_string());
            lines.push(String::new());
        }
    }

    // Technical requirements. The 8-second wording here is fixed as well.
    lines.push("Technical Requirements:".to_string());
    lines.push("- Exactly 8 seconds duration".to_string());
    lines.push("- Smooth, professional quality".to_string());
    lines.push("- No camera shake or jitter".to_string());
    lines.push("- Clear, in-focus subjects".to_string());
    lines.push("- Professional production value".to_string());

    // Consistency mode disclaimer: exactly one line varies with the mode.
    lines.push(match questionnaire.consistency_mode {
        ConsistencyMode::Strict => {
            "- STRICT consistency: no variations from established baseline".to_string()
        }
        ConsistencyMode::Balanced => {
            "- Balanced: maintain core consistency while allowing natural variation".to_string()
        }
        ConsistencyMode::Creative => {
            "- Creative: preserve key elements but allow creative expression".to_string()
        }
    });
    lines.push(String::new());

    // Negative constraints.
    lines.push("DO NOT INCLUDE:".to_string());
    lines.push("- Unrelated objects or people".to_string());
    lines.push("- Sudden lighting changes".to_string());
    lines.push("- Jump cuts or abrupt transitions".to_string());
    lines.push("- Inconsistent styles or aesthetics".to_string());
    if segment.number > 1 {
        lines.push("- ANY changes to presenter appearance".to_string());
        lines.push("- ANY changes to location or background".to_string());
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Questionnaire translation
// ---------------------------------------------------------------------------

/// Translate a whole questionnaire into an ordered list of generation
/// requests, one per segment.
///
/// Validates first and aborts on the first problem; no partial results.
/// Scene ids follow `"{project_title}_segment_{number}"`; the sequence id
/// is the project title.
pub fn translate_questionnaire(
    questionnaire: &Questionnaire,
) -> Result<Vec<GenerationRequest>, CoreError> {
    questionnaire.validate()?;

    let mut requests = Vec::with_capacity(questionnaire.segments.len());
    let mut previous_segment: Option<&Segment> = None;

    for segment in &questionnaire.segments {
        let prompt = translate_segment(segment, questionnaire, previous_segment);

        let mut markers = ConsistencyMarkers {
            segment_number: segment.number,
            sequence_id: questionnaire.project_title.clone(),
            consistency_mode: questionnaire.consistency_mode,
            presenter_id: None,
            location_id: None,
        };
        if questionnaire.presenter.is_present() {
            markers.presenter_id = Some(PRESENTER_MARKER_ID.to_string());
        }
        if !questionnaire.location.is_empty() {
            markers.location_id = Some(LOCATION_MARKER_ID.to_string());
        }

        requests.push(GenerationRequest {
            prompt,
            duration_secs: Some(segment.duration_secs),
            resolution: None,
            fps: None,
            aspect_ratio: None,
            scene_id: Some(format!(
                "{}_segment_{}",
                questionnaire.project_title, segment.number
            )),
            sequence_id: Some(questionnaire.project_title.clone()),
            consistency_markers: Some(markers),
        });

        previous_segment = Some(segment);
    }

    Ok(requests)
}

// ---------------------------------------------------------------------------
// Intro / outro bumpers
// ---------------------------------------------------------------------------

/// Which 3-second bumper to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumperKind {
    Intro,
    Outro,
}

/// Generate the prompt for a 3-second intro or outro bumper.
///
/// Independent of the segment loop; carries company name, brand colors,
/// and logo placement when those optional fields are set.
pub fn generate_intro_outro(questionnaire: &Questionnaire, kind: BumperKind) -> String {
    let mut lines: Vec<String> = Vec::new();

    match kind {
        BumperKind::Intro => {
            lines.push(format!("[3-second intro - {}]", questionnaire.project_title));
            lines.push(String::new());
            lines.push(format!(
                "Professional video intro for: {}",
                questionnaire.purpose
            ));

            if let Some(company) = &questionnaire.company_name {
                lines.push(format!("Company: {company}"));
            }
            if !questionnaire.brand_colors.is_empty() {
                lines.push(format!(
                    "Brand colors: {}",
                    questionnaire.brand_colors.join(", ")
                ));
            }

            lines.push(String::new());
            lines.push("Visual Elements:".to_string());
            lines.push(format!("- Title text: '{}'", questionnaire.project_title));
            lines.push("- Clean, professional animation".to_string());
            lines.push("- Brand colors prominent".to_string());

            if let Some(placement) = &questionnaire.logo_placement {
                lines.push(format!("- Logo placement: {placement}"));
            }
        }
        BumperKind::Outro => {
            lines.push("[3-second outro - Call to Action]".to_string());
            lines.push(String::new());
            lines.push("Professional video outro with call to action".to_string());

            if let Some(company) = &questionnaire.company_name {
                lines.push(format!("Company: {company}"));
            }
            if !questionnaire.brand_colors.is_empty() {
                lines.push(format!(
                    "Brand colors: {}",
                    questionnaire.brand_colors.join(", ")
                ));
            }

            lines.push(String::new());
            lines.push("Visual Elements:".to_string());
            lines.push("- 'Thank you' or 'Questions?' text".to_string());
            lines.push("- Contact information display".to_string());
            lines.push("- Clean fade out".to_string());

            if let Some(placement) = &questionnaire.logo_placement {
                lines.push(format!("- Logo: {placement}"));
            }
        }
    }

    lines.push(String::new());
    lines.push("Technical:".to_string());
    lines.push("- Exactly 3 seconds".to_string());
    lines.push("- Professional animation quality".to_string());
    lines.push("- Smooth, polished execution".to_string());

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
