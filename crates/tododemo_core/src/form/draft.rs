//! Ephemeral edit draft.

use crate::model::task::Task;
use serde::{Deserialize, Serialize};

/// In-progress, unsaved title/content of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDraft {
    pub title: String,
    pub content: String,
}

impl EditDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Draft pre-filled from an existing task's current values.
    pub fn from_task(task: &Task) -> Self {
        Self::new(task.title.as_str(), task.content.as_str())
    }
}
