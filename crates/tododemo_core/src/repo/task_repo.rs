//! Task repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the ordered task collection.
//! - Keep collection bookkeeping inside the store boundary.
//!
//! # Invariants
//! - IDs are unique across the collection at all times.
//! - Updates and toggles mutate in place; position never changes.
//! - A failed write leaves the collection untouched.

use crate::model::task::{Task, TaskId};
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for task operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No task with this id exists in the store.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// Insert would break id uniqueness.
    #[error("duplicate task id: {0}")]
    DuplicateId(TaskId),
}

/// Repository interface for task storage.
pub trait TaskRepository {
    fn insert_task(&mut self, task: Task) -> StoreResult<()>;
    fn update_task(&mut self, id: TaskId, title: &str, content: &str) -> StoreResult<()>;
    fn set_completed(&mut self, id: TaskId, completed: bool) -> StoreResult<()>;
    fn remove_task(&mut self, id: TaskId) -> StoreResult<Task>;
    fn get_task(&self, id: TaskId) -> Option<Task>;
    fn list_tasks(&self) -> Vec<Task>;
    fn count(&self) -> usize;
}

/// Volatile, process-local task storage.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: Vec<Task>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> StoreResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert_task(&mut self, task: Task) -> StoreResult<()> {
        if self.tasks.iter().any(|existing| existing.id == task.id) {
            return Err(StoreError::DuplicateId(task.id));
        }
        self.tasks.push(task);
        Ok(())
    }

    fn update_task(&mut self, id: TaskId, title: &str, content: &str) -> StoreResult<()> {
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        task.title = title.to_string();
        task.content = content.to_string();
        Ok(())
    }

    fn set_completed(&mut self, id: TaskId, completed: bool) -> StoreResult<()> {
        let index = self.position(id)?;
        self.tasks[index].completed = completed;
        Ok(())
    }

    fn remove_task(&mut self, id: TaskId) -> StoreResult<Task> {
        let index = self.position(id)?;
        // `Vec::remove` shifts the tail, keeping relative order.
        Ok(self.tasks.remove(index))
    }

    fn get_task(&self, id: TaskId) -> Option<Task> {
        self.tasks.iter().find(|task| task.id == id).cloned()
    }

    fn list_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn count(&self) -> usize {
        self.tasks.len()
    }
}
