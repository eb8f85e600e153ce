//! Centralized validation and helper functions.

use thiserror::Error;

/// Maximum number of sequence buffers loaded in a single run (DOS protection)
pub const MAX_SEQUENCES: usize = 10_000;

/// Highest accepted mismatch budget
pub const MAX_MISMATCH_BUDGET: u32 = 9;

/// Maximum length of a chromosome label
pub const MAX_LABEL_LENGTH: usize = 64;

/// Check if loading another sequence would exceed the maximum allowed.
///
/// Call this with the current count BEFORE loading a new sequence.
/// Returns an error message if loading would exceed the limit, None if safe.
#[must_use]
pub fn check_sequence_limit(count: usize) -> Option<String> {
    if count >= MAX_SEQUENCES {
        Some(format!(
            "Too many sequences: loading another would exceed maximum of {MAX_SEQUENCES}"
        ))
    } else {
        None
    }
}

/// Check that a mismatch budget is within the accepted range
#[must_use]
pub fn is_valid_budget(budget: u32) -> bool {
    budget <= MAX_MISMATCH_BUDGET
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("Empty chromosome label")]
    Empty,

    #[error("Chromosome label too long: exceeds {MAX_LABEL_LENGTH} characters")]
    TooLong,

    #[error("Chromosome label contains whitespace or control characters")]
    InvalidCharacter,
}

/// Validate a chromosome label supplied on the command line.
///
/// Labels end up in result lines and filenames, so they must be short,
/// non-empty, and free of whitespace and control characters.
///
/// # Errors
///
/// Returns the corresponding `LabelError` variant on violation.
pub fn validate_label(label: &str) -> Result<&str, LabelError> {
    if label.is_empty() {
        return Err(LabelError::Empty);
    }
    if label.len() > MAX_LABEL_LENGTH {
        return Err(LabelError::TooLong);
    }
    if label.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(LabelError::InvalidCharacter);
    }
    Ok(label)
}
