pub mod questionnaire;
pub mod template;
