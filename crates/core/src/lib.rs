//! Core domain library for questionnaire-driven promo video generation.
//!
//! Holds the questionnaire model with structural validation and JSON
//! persistence, the prompt translator that turns a questionnaire into
//! per-segment generation requests, platform output specifications, and
//! predefined questionnaire templates.

pub mod error;
pub mod platform;
pub mod questionnaire;
pub mod templates;
pub mod translator;

pub use error::CoreError;
