//! Prompt validation ahead of submission.

use reelkit_core::error::CoreError;

/// Minimum accepted prompt length in characters.
pub const MIN_PROMPT_LENGTH: usize = 10;

/// Maximum accepted prompt length in characters.
pub const MAX_PROMPT_LENGTH: usize = 5_000;

/// Validate a prompt before sending it to the generation service.
///
/// Rejects empty or whitespace-only input, input shorter than
/// [`MIN_PROMPT_LENGTH`], and input longer than [`MAX_PROMPT_LENGTH`].
pub fn validate_prompt(prompt: &str) -> Result<(), CoreError> {
    if prompt.trim().is_empty() {
        return Err(CoreError::Validation("Prompt cannot be empty".to_string()));
    }
    if prompt.len() < MIN_PROMPT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Prompt too short (minimum {MIN_PROMPT_LENGTH} characters)"
        )));
    }
    if prompt.len() > MAX_PROMPT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Prompt too long (maximum {MAX_PROMPT_LENGTH} characters)"
        )));
    }
    Ok(())
}
