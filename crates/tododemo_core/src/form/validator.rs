//! Field validation for edit drafts.
//!
//! # Invariants
//! - Rules are evaluated in order; the first failing rule wins per field.
//! - Lengths count Unicode scalar values, not bytes.
//! - Empty content is always valid.

use crate::form::draft::EditDraft;
use serde::{Deserialize, Serialize};

/// Default minimum title length.
pub const TITLE_MIN_CHARS: usize = 3;
/// Default maximum title length.
pub const TITLE_MAX_CHARS: usize = 50;
/// Default maximum description length.
pub const CONTENT_MAX_CHARS: usize = 120;

const TITLE_EMPTY_MESSAGE: &str = "Title cannot be empty";

/// Length bounds applied by [`validate_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftLimits {
    pub title_min: usize,
    pub title_max: usize,
    pub content_max: usize,
}

impl Default for DraftLimits {
    fn default() -> Self {
        Self {
            title_min: TITLE_MIN_CHARS,
            title_max: TITLE_MAX_CHARS,
            content_max: CONTENT_MAX_CHARS,
        }
    }
}

/// Per-field validation outcome for one draft.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub title_error: Option<String>,
    pub content_error: Option<String>,
}

impl ValidationResult {
    /// Returns whether no field carries an error.
    pub fn is_valid(&self) -> bool {
        self.title_error.is_none() && self.content_error.is_none()
    }
}

/// Validates a draft against the default limits.
pub fn validate(draft: &EditDraft) -> ValidationResult {
    validate_with(draft, &DraftLimits::default())
}

/// Validates a draft against caller-provided limits.
pub fn validate_with(draft: &EditDraft, limits: &DraftLimits) -> ValidationResult {
    ValidationResult {
        title_error: title_error(draft.title.as_str(), limits),
        content_error: content_error(draft.content.as_str(), limits),
    }
}

/// Returns whether the draft may be saved under default limits.
pub fn is_valid(draft: &EditDraft) -> bool {
    validate(draft).is_valid()
}

fn title_error(title: &str, limits: &DraftLimits) -> Option<String> {
    let len = title.chars().count();
    if len == 0 {
        Some(TITLE_EMPTY_MESSAGE.to_string())
    } else if len < limits.title_min {
        Some(format!(
            "Title must be at least {} characters",
            limits.title_min
        ))
    } else if len > limits.title_max {
        Some(format!(
            "Title can't be more than {} characters",
            limits.title_max
        ))
    } else {
        None
    }
}

fn content_error(content: &str, limits: &DraftLimits) -> Option<String> {
    if content.chars().count() > limits.content_max {
        Some(format!(
            "Description can't be longer than {} characters",
            limits.content_max
        ))
    } else {
        None
    }
}
