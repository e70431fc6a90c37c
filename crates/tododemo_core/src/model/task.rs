//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record rendered by list/detail/edit views.
//! - Provide the default seed set used on first start.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - Edits replace `title`/`content`/`completed`, never `id`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Canonical to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned once at creation; immutable afterwards.
    pub id: TaskId,
    /// Display title. Validity is enforced by the edit flow, not here.
    pub title: String,
    /// Optional description; empty string when absent.
    #[serde(default)]
    pub content: String,
    /// Completion checkbox state.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a new, not yet completed task with a generated stable ID.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title, content)
    }

    /// Creates a task with a caller-provided ID.
    ///
    /// Used by seeding and tests where identity is already known.
    pub fn with_id(id: TaskId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            completed: false,
        }
    }

    /// Returns whether a description should be rendered for this task.
    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }
}

const DEFAULT_SEED: [(&str, &str); 3] = [
    ("Buy groceries", "Milk, eggs, bread"),
    ("Call mom", "Discuss weekend plans"),
    ("Finish project", "Deadline is Friday"),
];

/// Returns the tasks installed on first start when the store is empty.
///
/// Every call generates fresh IDs.
pub fn default_seed_tasks() -> Vec<Task> {
    DEFAULT_SEED
        .iter()
        .map(|(title, content)| Task::new(*title, *content))
        .collect()
}
