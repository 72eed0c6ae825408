//! Predefined questionnaire templates.
//!
//! Four starter questionnaires addressable by name. Each is a complete,
//! valid four-segment questionnaire intended to be edited before
//! translation.

use serde::Serialize;

use crate::error::CoreError;
use crate::questionnaire::{PresenterKind, Questionnaire, Segment, VideoStyle};

/// Product demonstration template name.
pub const TEMPLATE_PRODUCT_DEMO: &str = "product_demo";
/// How-to tutorial template name.
pub const TEMPLATE_HOW_TO: &str = "how_to";
/// Employee training template name.
pub const TEMPLATE_TRAINING: &str = "training";
/// Company announcement template name.
pub const TEMPLATE_ANNOUNCEMENT: &str = "announcement";

/// All available template names, in listing order.
pub const TEMPLATE_NAMES: &[&str] = &[
    TEMPLATE_PRODUCT_DEMO,
    TEMPLATE_HOW_TO,
    TEMPLATE_TRAINING,
    TEMPLATE_ANNOUNCEMENT,
];

/// Summary of one template for listings.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDescriptor {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub segments: usize,
    pub use_case: &'static str,
}

/// Descriptors for every available template, in listing order.
pub fn template_descriptors() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor {
            name: TEMPLATE_PRODUCT_DEMO,
            title: "Product Demonstration",
            description: "Showcase product features and benefits",
            segments: 4,
            use_case: "Product launches, feature highlights",
        },
        TemplateDescriptor {
            name: TEMPLATE_HOW_TO,
            title: "How-To Tutorial",
            description: "Step-by-step instructional content",
            segments: 4,
            use_case: "Tutorials, skill training",
        },
        TemplateDescriptor {
            name: TEMPLATE_TRAINING,
            title: "Employee Training",
            description: "Workplace procedures and protocols",
            segments: 4,
            use_case: "Onboarding, safety training",
        },
        TemplateDescriptor {
            name: TEMPLATE_ANNOUNCEMENT,
            title: "Company Announcement",
            description: "News and updates",
            segments: 4,
            use_case: "Company updates, news",
        },
    ]
}

/// Build the template questionnaire for `name`.
pub fn template(name: &str) -> Result<Questionnaire, CoreError> {
    match name {
        TEMPLATE_PRODUCT_DEMO => Ok(product_demo()),
        TEMPLATE_HOW_TO => Ok(how_to()),
        TEMPLATE_TRAINING => Ok(training()),
        TEMPLATE_ANNOUNCEMENT => Ok(announcement()),
        _ => Err(CoreError::NotFound {
            entity: "Template",
            name: name.to_string(),
        }),
    }
}

fn base(
    project_title: &str,
    purpose: &str,
    audience: &str,
    style: VideoStyle,
    location: &str,
    segments: Vec<Segment>,
) -> Questionnaire {
    Questionnaire {
        project_title: project_title.to_string(),
        purpose: purpose.to_string(),
        audience: audience.to_string(),
        style,
        brand_colors: Vec::new(),
        brand_fonts: Vec::new(),
        platforms: Vec::new(),
        presenter: PresenterKind::Person,
        presenter_description: None,
        presenter_clothing: None,
        location: location.to_string(),
        location_description: String::new(),
        lighting_preference: crate::questionnaire::DEFAULT_LIGHTING_PREFERENCE.to_string(),
        company_name: None,
        logo_placement: None,
        intro_outro: true,
        music_style: None,
        narration: false,
        narration_language: crate::questionnaire::DEFAULT_NARRATION_LANGUAGE.to_string(),
        consistency_mode: Default::default(),
        segments,
    }
}

fn product_demo() -> Questionnaire {
    base(
        "Product Demo Template",
        "Demonstrate product features and benefits",
        "Potential customers",
        VideoStyle::Promotional,
        "clean_modern_office",
        vec![
            Segment::new(1, "Introduction", "Introduce the product", "Show product", "Product close-up"),
            Segment::new(2, "Key Feature 1", "Demonstrate main feature", "Use feature", "Feature in action"),
            Segment::new(3, "Key Feature 2", "Show second feature", "Demonstrate benefit", "Results"),
            Segment::new(4, "Call to Action", "Encourage purchase/signup", "Show CTA", "CTA text and link"),
        ],
    )
}

fn how_to() -> Questionnaire {
    base(
        "How-To Template",
        "Teach a specific skill or process",
        "Learners/Students",
        VideoStyle::Educational,
        "workshop_or_classroom",
        vec![
            Segment::new(1, "Overview", "Explain what will be taught", "State goal", "Instructor speaking"),
            Segment::new(2, "Step 1", "First step of process", "Demonstrate step 1", "Hands-on action"),
            Segment::new(3, "Step 2", "Second step", "Demonstrate step 2", "Continued action"),
            Segment::new(4, "Result", "Show final outcome", "Display result", "Finished product"),
        ],
    )
}

fn training() -> Questionnaire {
    base(
        "Training Template",
        "Train employees on procedure",
        "Employees",
        VideoStyle::Professional,
        "workplace",
        vec![
            Segment::new(1, "Safety First", "Safety guidelines", "Show safety gear", "PPE and precautions"),
            Segment::new(2, "Setup", "Prepare workspace", "Arrange tools", "Organized workspace"),
            Segment::new(3, "Procedure", "Execute main task", "Perform procedure", "Correct technique"),
            Segment::new(4, "Completion", "Wrap up and verify", "Quality check", "Verification process"),
        ],
    )
}

fn announcement() -> Questionnaire {
    base(
        "Announcement Template",
        "Announce news or updates",
        "Team members or customers",
        VideoStyle::Professional,
        "office_or_studio",
        vec![
            Segment::new(1, "Greeting", "Welcome and introduce topic", "Greet audience", "Presenter speaking"),
            Segment::new(2, "Announcement", "Share the news", "State announcement", "Key information"),
            Segment::new(3, "Impact", "Explain what it means", "Describe benefits", "Visual of impact"),
            Segment::new(4, "Next Steps", "Call to action", "Direct next steps", "Action items"),
        ],
    )
}
