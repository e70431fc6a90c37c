//! Task store use-case service.
//!
//! # Responsibility
//! - Provide the task store operation set (create/update/toggle/delete/list).
//! - Own one-time seeding of an empty store.
//! - Emit metadata-only diagnostics for every mutation.
//!
//! # Invariants
//! - Service APIs never bypass repository contracts.
//! - `create` never validates; validation lives in the edit flow.
//! - `create` never spins: id collisions are retried a bounded number of times.
//! - Seeding only ever happens into an empty store.
//! - Task titles/content are never written to logs.

use crate::model::task::{default_seed_tasks, Task, TaskId};
use crate::repo::task_repo::{StoreError, StoreResult, TaskRepository};
use log::{debug, info, warn};

const MAX_CREATE_ATTEMPTS: u32 = 8;

/// Use-case service wrapper over a task repository.
pub struct TaskService<R: TaskRepository> {
    repo: R,
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns a snapshot of all tasks in insertion order.
    ///
    /// The returned vector does not track later mutations.
    pub fn list(&self) -> Vec<Task> {
        self.repo.list_tasks()
    }

    /// Looks up one task by ID.
    pub fn get(&self, id: TaskId) -> Option<Task> {
        self.repo.get_task(id)
    }

    pub fn len(&self) -> usize {
        self.repo.count()
    }

    pub fn is_empty(&self) -> bool {
        self.repo.count() == 0
    }

    /// Appends a new task with a fresh ID and `completed = false`.
    ///
    /// # Contract
    /// - Never validates; title/content are stored as given.
    /// - An id collision regenerates the id, up to `MAX_CREATE_ATTEMPTS`.
    /// - Any other repository failure is returned unchanged.
    /// - Infallible with `InMemoryTaskRepository`.
    pub fn create(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Task> {
        let title = title.into();
        let content = content.into();
        let mut attempt = 1;
        loop {
            let task = Task::new(title.as_str(), content.as_str());
            match self.repo.insert_task(task.clone()) {
                Ok(()) => {
                    info!(
                        "event=task_create module=store status=ok task_id={} count={}",
                        task.id,
                        self.repo.count()
                    );
                    return Ok(task);
                }
                Err(err @ StoreError::DuplicateId(_)) if attempt < MAX_CREATE_ATTEMPTS => {
                    debug!(
                        "event=task_create module=store status=retry attempt={attempt} reason={err}"
                    );
                    attempt += 1;
                }
                Err(err) => {
                    warn!(
                        "event=task_create module=store status=error attempt={attempt} error={err}"
                    );
                    return Err(err);
                }
            }
        }
    }

    /// Creates a task from a quick-add entry.
    ///
    /// Empty titles are ignored and return `Ok(None)`.
    pub fn quick_add(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<Option<Task>> {
        let title = title.into();
        if title.is_empty() {
            debug!("event=task_quick_add module=store status=skipped reason=empty_title");
            return Ok(None);
        }
        self.create(title, content).map(Some)
    }

    /// Replaces title/content of an existing task.
    ///
    /// ID, position and `completed` are preserved. Returns `NotFound` when no
    /// task has this ID.
    pub fn update(
        &mut self,
        id: TaskId,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> StoreResult<()> {
        let title = title.into();
        let content = content.into();
        self.repo
            .update_task(id, title.as_str(), content.as_str())
            .inspect(|_| info!("event=task_update module=store status=ok task_id={id}"))
            .inspect_err(|err| warn!("event=task_update module=store status=error error={err}"))
    }

    /// Flips the completion flag in place and returns the new value.
    pub fn toggle_completed(&mut self, id: TaskId) -> StoreResult<bool> {
        let Some(current) = self.repo.get_task(id) else {
            let err = StoreError::NotFound(id);
            warn!("event=task_toggle module=store status=error error={err}");
            return Err(err);
        };
        let completed = !current.completed;
        self.repo.set_completed(id, completed)?;
        info!("event=task_toggle module=store status=ok task_id={id} completed={completed}");
        Ok(completed)
    }

    /// Sets the completion flag to an explicit value.
    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> StoreResult<()> {
        self.repo
            .set_completed(id, completed)
            .inspect(|_| {
                info!(
                    "event=task_set_completed module=store status=ok task_id={id} completed={completed}"
                )
            })
            .inspect_err(|err| {
                warn!("event=task_set_completed module=store status=error error={err}")
            })
    }

    /// Removes one task, keeping the relative order of the rest.
    ///
    /// Deleting an absent ID returns `NotFound` and leaves the store unchanged.
    pub fn delete(&mut self, id: TaskId) -> StoreResult<Task> {
        self.repo
            .remove_task(id)
            .inspect(|_| {
                info!(
                    "event=task_delete module=store status=ok task_id={id} count={}",
                    self.repo.count()
                )
            })
            .inspect_err(|err| warn!("event=task_delete module=store status=error error={err}"))
    }

    /// Appends `tasks` only when the store is empty.
    ///
    /// Returns `true` when seeding happened. Seed entries whose ID collides
    /// with an earlier entry are skipped.
    pub fn seed_if_empty(&mut self, tasks: impl IntoIterator<Item = Task>) -> bool {
        if !self.is_empty() {
            debug!(
                "event=store_seed module=store status=skipped count={}",
                self.repo.count()
            );
            return false;
        }

        for task in tasks {
            if let Err(err) = self.repo.insert_task(task) {
                warn!("event=store_seed module=store status=partial error={err}");
            }
        }
        info!(
            "event=store_seed module=store status=ok count={}",
            self.repo.count()
        );
        true
    }

    /// Seeds the built-in default task set when the store is empty.
    pub fn seed_defaults_if_empty(&mut self) -> bool {
        self.seed_if_empty(default_seed_tasks())
    }
}
