//! Navigation state machine.
//!
//! # Responsibility
//! - Apply user intents to the current screen and the task store as one step.
//! - Own the edit draft for the lifetime of the edit screen.
//!
//! # Invariants
//! - `Detail`/`Edit` only ever reference a task present in the store.
//! - `draft` is `Some` exactly while the state is `Edit`.
//! - Leaving `Detail`/`Edit` drops the task reference and the draft together.
//! - `Save` never touches the store while the draft is invalid.
//! - A store `NotFound` aborts the transition and lands on `List`.

use crate::form::draft::EditDraft;
use crate::form::validator::{validate_with, DraftLimits, ValidationResult};
use crate::model::task::{Task, TaskId};
use crate::navigation::state::{Intent, NavResult, NavigationError, NavigationState};
use crate::repo::task_repo::{InMemoryTaskRepository, StoreError, TaskRepository};
use crate::service::task_service::TaskService;
use log::{debug, info, warn};

/// Screen/selection state machine over a task store.
pub struct Navigator<R: TaskRepository> {
    store: TaskService<R>,
    state: NavigationState,
    draft: Option<EditDraft>,
    limits: DraftLimits,
}

impl Navigator<InMemoryTaskRepository> {
    /// In-memory store seeded with the default task set, starting on `List`.
    pub fn with_defaults() -> Self {
        let mut store = TaskService::new(InMemoryTaskRepository::new());
        store.seed_defaults_if_empty();
        Self::new(store)
    }
}

impl<R: TaskRepository> Navigator<R> {
    /// Creates a navigator on the `List` screen.
    pub fn new(store: TaskService<R>) -> Self {
        Self {
            store,
            state: NavigationState::List,
            draft: None,
            limits: DraftLimits::default(),
        }
    }

    /// Replaces the validation limits used to gate `Save`.
    pub fn with_limits(mut self, limits: DraftLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    /// Snapshot of tasks in display order.
    pub fn tasks(&self) -> Vec<Task> {
        self.store.list()
    }

    /// Read-only access to the underlying store.
    pub fn store(&self) -> &TaskService<R> {
        &self.store
    }

    /// Current draft; `None` outside the edit screen.
    pub fn draft(&self) -> Option<&EditDraft> {
        self.draft.as_ref()
    }

    /// Validation of the current draft; `None` outside the edit screen.
    pub fn validation(&self) -> Option<ValidationResult> {
        self.draft
            .as_ref()
            .map(|draft| validate_with(draft, &self.limits))
    }

    /// Whether a `Save` dispatched now would be accepted.
    pub fn can_save(&self) -> bool {
        self.validation()
            .is_some_and(|validation| validation.is_valid())
    }

    /// Task referenced by the `Detail`/`Edit` screen.
    pub fn current_task(&self) -> Option<Task> {
        self.state.task_id().and_then(|id| self.store.get(id))
    }

    /// Startup seeding hook; appends only into an empty store.
    pub fn seed_if_empty(&mut self, tasks: impl IntoIterator<Item = Task>) -> bool {
        self.store.seed_if_empty(tasks)
    }

    /// Applies one intent.
    ///
    /// # Errors
    /// - `NotFound` when the referenced task is gone; the state is then `List`.
    /// - `ValidationFailed` when saving an invalid draft; nothing changes.
    /// - `UnsupportedIntent` when the intent has no transition from the
    ///   current screen; nothing changes.
    pub fn dispatch(&mut self, intent: Intent) -> NavResult<()> {
        debug!(
            "event=nav_intent module=navigation state={} intent={}",
            self.state.name(),
            intent.name()
        );

        match (self.state, intent) {
            (NavigationState::List, Intent::SelectTask(id)) => self.open_detail(id),
            (NavigationState::List, Intent::CreateNew) => {
                self.enter_edit(None, EditDraft::default());
                Ok(())
            }
            (
                NavigationState::List | NavigationState::Detail { .. },
                Intent::ToggleCompleted(id),
            ) => self.toggle(id),
            (
                NavigationState::List | NavigationState::Detail { .. },
                Intent::SetCompleted { task_id, completed },
            ) => self.mark(task_id, completed),
            (NavigationState::List, Intent::QuickAdd { title, content }) => {
                match self.store.quick_add(title, content) {
                    Ok(_) => Ok(()),
                    Err(err) => Err(self.abort_to_list(err)),
                }
            }
            (NavigationState::Detail { .. }, Intent::Back)
            | (NavigationState::Edit { .. }, Intent::Cancel) => {
                self.enter_list();
                Ok(())
            }
            (NavigationState::Detail { task_id }, Intent::Edit) => self.open_edit(task_id),
            (NavigationState::Detail { task_id }, Intent::Delete) => self.delete_selected(task_id),
            (NavigationState::Edit { .. }, Intent::UpdateDraftTitle(title)) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.title = title;
                }
                Ok(())
            }
            (NavigationState::Edit { .. }, Intent::UpdateDraftContent(content)) => {
                if let Some(draft) = self.draft.as_mut() {
                    draft.content = content;
                }
                Ok(())
            }
            (NavigationState::Edit { task_id }, Intent::Save) => self.save_draft(task_id),
            (state, intent) => {
                debug!(
                    "event=nav_intent module=navigation status=ignored state={} intent={}",
                    state.name(),
                    intent.name()
                );
                Err(NavigationError::UnsupportedIntent {
                    state: state.name(),
                    intent: intent.name(),
                })
            }
        }
    }

    pub fn select_task(&mut self, id: TaskId) -> NavResult<()> {
        self.dispatch(Intent::SelectTask(id))
    }

    pub fn create_new(&mut self) -> NavResult<()> {
        self.dispatch(Intent::CreateNew)
    }

    pub fn back(&mut self) -> NavResult<()> {
        self.dispatch(Intent::Back)
    }

    pub fn edit(&mut self) -> NavResult<()> {
        self.dispatch(Intent::Edit)
    }

    pub fn delete(&mut self) -> NavResult<()> {
        self.dispatch(Intent::Delete)
    }

    pub fn cancel(&mut self) -> NavResult<()> {
        self.dispatch(Intent::Cancel)
    }

    pub fn update_draft_title(&mut self, title: impl Into<String>) -> NavResult<()> {
        self.dispatch(Intent::UpdateDraftTitle(title.into()))
    }

    pub fn update_draft_content(&mut self, content: impl Into<String>) -> NavResult<()> {
        self.dispatch(Intent::UpdateDraftContent(content.into()))
    }

    pub fn save(&mut self) -> NavResult<()> {
        self.dispatch(Intent::Save)
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> NavResult<()> {
        self.dispatch(Intent::ToggleCompleted(id))
    }

    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> NavResult<()> {
        self.dispatch(Intent::SetCompleted {
            task_id: id,
            completed,
        })
    }

    /// List-screen shortcut that adds a task without opening the edit form.
    ///
    /// Empty titles are ignored; no other validation applies.
    pub fn quick_add(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> NavResult<()> {
        self.dispatch(Intent::QuickAdd {
            title: title.into(),
            content: content.into(),
        })
    }

    fn open_detail(&mut self, id: TaskId) -> NavResult<()> {
        if self.store.get(id).is_none() {
            return Err(self.abort_to_list(StoreError::NotFound(id)));
        }
        self.draft = None;
        self.state = NavigationState::Detail { task_id: id };
        info!("event=nav_transition module=navigation to=detail task_id={id}");
        Ok(())
    }

    fn open_edit(&mut self, id: TaskId) -> NavResult<()> {
        let Some(task) = self.store.get(id) else {
            return Err(self.abort_to_list(StoreError::NotFound(id)));
        };
        self.enter_edit(Some(id), EditDraft::from_task(&task));
        Ok(())
    }

    fn delete_selected(&mut self, id: TaskId) -> NavResult<()> {
        // Release the reference before the task disappears.
        self.enter_list();
        self.store.delete(id)?;
        Ok(())
    }

    fn toggle(&mut self, id: TaskId) -> NavResult<()> {
        match self.store.toggle_completed(id) {
            Ok(_) => Ok(()),
            Err(err) => Err(self.abort_to_list(err)),
        }
    }

    fn mark(&mut self, id: TaskId, completed: bool) -> NavResult<()> {
        self.store
            .set_completed(id, completed)
            .map_err(|err| self.abort_to_list(err))
    }

    fn save_draft(&mut self, task_id: Option<TaskId>) -> NavResult<()> {
        let draft = self.draft.clone().unwrap_or_default();
        let validation = validate_with(&draft, &self.limits);
        if !validation.is_valid() {
            info!(
                "event=nav_save module=navigation status=refused title_error={} content_error={}",
                validation.title_error.is_some(),
                validation.content_error.is_some()
            );
            return Err(NavigationError::ValidationFailed(validation));
        }

        match task_id {
            Some(id) => {
                if let Err(err) = self.store.update(id, draft.title, draft.content) {
                    return Err(self.abort_to_list(err));
                }
            }
            None => {
                if let Err(err) = self.store.create(draft.title, draft.content) {
                    return Err(self.abort_to_list(err));
                }
            }
        }
        self.enter_list();
        Ok(())
    }

    fn enter_edit(&mut self, task_id: Option<TaskId>, draft: EditDraft) {
        self.state = NavigationState::Edit { task_id };
        self.draft = Some(draft);
        match task_id {
            Some(id) => info!("event=nav_transition module=navigation to=edit task_id={id}"),
            None => info!("event=nav_transition module=navigation to=edit task_id=new"),
        }
    }

    fn enter_list(&mut self) {
        self.state = NavigationState::List;
        self.draft = None;
        info!("event=nav_transition module=navigation to=list");
    }

    fn abort_to_list(&mut self, err: StoreError) -> NavigationError {
        warn!(
            "event=nav_transition module=navigation status=aborted from={} error={err}",
            self.state.name()
        );
        self.enter_list();
        err.into()
    }
}
