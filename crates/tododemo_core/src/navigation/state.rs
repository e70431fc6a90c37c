//! Navigation states, user intents, and navigation errors.

use crate::form::validator::ValidationResult;
use crate::model::task::TaskId;
use crate::repo::task_repo::StoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type NavResult<T> = Result<T, NavigationError>;

/// Active screen plus the task it is about, if any.
///
/// Each variant carries exactly the data its screen needs, so a detail
/// screen without a selected task cannot be expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum NavigationState {
    /// Task list; initial state.
    #[default]
    List,
    /// Read-only view of one task.
    Detail { task_id: TaskId },
    /// Edit form. `None` means a new task is being created.
    Edit { task_id: Option<TaskId> },
}

impl NavigationState {
    /// Stable screen name used in logs and FFI projections.
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Detail { .. } => "detail",
            Self::Edit { .. } => "edit",
        }
    }

    /// Task referenced by the current screen.
    pub fn task_id(&self) -> Option<TaskId> {
        match self {
            Self::List => None,
            Self::Detail { task_id } => Some(*task_id),
            Self::Edit { task_id } => *task_id,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List)
    }
}

/// Named user action dispatched to the navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectTask(TaskId),
    CreateNew,
    Back,
    Edit,
    Delete,
    Cancel,
    UpdateDraftTitle(String),
    UpdateDraftContent(String),
    Save,
    ToggleCompleted(TaskId),
    SetCompleted { task_id: TaskId, completed: bool },
    QuickAdd { title: String, content: String },
}

impl Intent {
    /// Stable intent name; never includes user text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectTask(_) => "select_task",
            Self::CreateNew => "create_new",
            Self::Back => "back",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Cancel => "cancel",
            Self::UpdateDraftTitle(_) => "update_draft_title",
            Self::UpdateDraftContent(_) => "update_draft_content",
            Self::Save => "save",
            Self::ToggleCompleted(_) => "toggle_completed",
            Self::SetCompleted { .. } => "set_completed",
            Self::QuickAdd { .. } => "quick_add",
        }
    }
}

/// Errors returned by intent dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// Referenced task is absent; the navigator has fallen back to the list.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Save refused; state and store are unchanged.
    #[error("draft failed validation")]
    ValidationFailed(ValidationResult),
    /// Intent has no transition from the current screen; nothing changed.
    #[error("intent `{intent}` is not available on the `{state}` screen")]
    UnsupportedIntent {
        state: &'static str,
        intent: &'static str,
    },
    /// Any other store failure.
    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for NavigationError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}
