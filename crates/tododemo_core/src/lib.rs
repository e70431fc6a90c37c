//! Core domain logic for the to-do app.
//! This crate is the single source of truth for task and navigation invariants.

pub mod form;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod repo;
pub mod service;

pub use form::draft::EditDraft;
pub use form::validator::{is_valid, validate, validate_with, DraftLimits, ValidationResult};
pub use logging::{
    default_log_level, init_logging, init_logging_with, logging_status, LogLevel, LogSettings,
    LoggingError,
};
pub use model::task::{default_seed_tasks, Task, TaskId};
pub use navigation::navigator::Navigator;
pub use navigation::state::{Intent, NavResult, NavigationError, NavigationState};
pub use repo::task_repo::{InMemoryTaskRepository, StoreError, StoreResult, TaskRepository};
pub use service::task_service::TaskService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
