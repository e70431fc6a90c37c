//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose task list projections and intent dispatch to Dart via FRB.
//! - Serialize every intent through one process-wide navigator.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Task ids cross the boundary as UTF-8 uuid strings.
//! - The default task set is seeded at most once, before the first intent.

use log::warn;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use tododemo_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    init_logging as init_logging_inner, ping as ping_inner,
    InMemoryTaskRepository, Intent, NavigationError, NavigationState, Navigator, Task, TaskId,
    TaskService,
};
use uuid::Uuid;

const SKIP_SEED_ENV: &str = "TODODEMO_SKIP_SEED";

type Session = Navigator<InMemoryTaskRepository>;

static SESSION: OnceLock<Mutex<Session>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive);
///   blank selects `default_log_level()`.
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    let level = match level.trim() {
        "" => default_log_level_inner().as_str().to_string(),
        other => other.to_string(),
    };
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Build-mode default log level (`debug` or `info`).
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().as_str().to_owned()
}

/// One task row as rendered by list/detail views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub task_id: String,
    pub title: String,
    pub content: String,
    pub completed: bool,
}

/// Active screen projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavStateView {
    /// `list|detail|edit`.
    pub screen: String,
    /// Subject task; `None` on the list and when creating a new task.
    pub task_id: Option<String>,
}

/// Edit form projection, including live validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftView {
    pub title: String,
    pub content: String,
    pub title_error: Option<String>,
    pub content_error: Option<String>,
    pub can_save: bool,
}

/// Result envelope for every dispatched intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentResponse {
    /// Whether the intent was applied.
    pub ok: bool,
    /// Screen after the intent, applied or not.
    pub state: NavStateView,
    /// Empty on success; diagnostic text otherwise.
    pub message: String,
    /// Inline field message when a save was refused.
    pub title_error: Option<String>,
    /// Inline field message when a save was refused.
    pub content_error: Option<String>,
}

/// Lists tasks in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn tasks_list() -> Vec<TaskItem> {
    with_session(|nav| nav.tasks().iter().map(to_task_item).collect())
}

/// Returns the active screen.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_state() -> NavStateView {
    with_session(|nav| to_state_view(nav.state()))
}

/// Returns the edit form state; `None` outside the edit screen.
#[flutter_rust_bridge::frb(sync)]
pub fn draft_state() -> Option<DraftView> {
    with_session(|nav| draft_view(nav))
}

/// Returns the task shown by detail/edit screens.
#[flutter_rust_bridge::frb(sync)]
pub fn current_task() -> Option<TaskItem> {
    with_session(|nav| nav.current_task().as_ref().map(to_task_item))
}

/// Opens the detail screen for one task from the list.
///
/// `task_id` must be a uuid string; a missing task keeps the list screen.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_select_task(task_id: String) -> IntentResponse {
    with_session(|nav| match parse_task_id(&task_id) {
        Ok(id) => apply(nav, Intent::SelectTask(id)),
        Err(message) => rejected(nav, message),
    })
}

/// Opens an empty edit form for a new task.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_create_new() -> IntentResponse {
    with_session(|nav| apply(nav, Intent::CreateNew))
}

/// Returns from the detail screen to the list.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_back() -> IntentResponse {
    with_session(|nav| apply(nav, Intent::Back))
}

/// Opens the edit form pre-filled from the task on the detail screen.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_edit() -> IntentResponse {
    with_session(|nav| apply(nav, Intent::Edit))
}

/// Deletes the task on the detail screen and returns to the list.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_delete() -> IntentResponse {
    with_session(|nav| apply(nav, Intent::Delete))
}

/// Discards the draft and returns to the list.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_cancel() -> IntentResponse {
    with_session(|nav| apply(nav, Intent::Cancel))
}

/// Replaces the draft title; called on every keystroke.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_update_draft_title(text: String) -> IntentResponse {
    with_session(|nav| apply(nav, Intent::UpdateDraftTitle(text)))
}

/// Replaces the draft description; called on every keystroke.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_update_draft_content(text: String) -> IntentResponse {
    with_session(|nav| apply(nav, Intent::UpdateDraftContent(text)))
}

/// Saves the draft; refused with inline field errors while invalid.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn nav_save() -> IntentResponse {
    with_session(|nav| apply(nav, Intent::Save))
}

/// Flips a task's checkbox from the list or detail screen.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn task_toggle_completed(task_id: String) -> IntentResponse {
    with_session(|nav| match parse_task_id(&task_id) {
        Ok(id) => apply(nav, Intent::ToggleCompleted(id)),
        Err(message) => rejected(nav, message),
    })
}

/// Sets a task's checkbox to an explicit value from the list or detail screen.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn task_set_completed(task_id: String, completed: bool) -> IntentResponse {
    with_session(|nav| match parse_task_id(&task_id) {
        Ok(id) => apply(
            nav,
            Intent::SetCompleted {
                task_id: id,
                completed,
            },
        ),
        Err(message) => rejected(nav, message),
    })
}

/// Adds a task straight from the list screen's entry fields.
///
/// An empty `title` is ignored and still reported as `ok`.
///
/// # FFI contract
/// - Sync call, non-blocking; serialized with every other intent.
/// - Never panics.
/// - Returns the screen after the intent, whether or not it was applied.
#[flutter_rust_bridge::frb(sync)]
pub fn task_quick_add(title: String, content: String) -> IntentResponse {
    with_session(|nav| apply(nav, Intent::QuickAdd { title, content }))
}

fn with_session<T>(f: impl FnOnce(&mut Session) -> T) -> T {
    let session = SESSION.get_or_init(|| Mutex::new(new_session()));
    let mut guard: MutexGuard<'_, Session> = session.lock().unwrap_or_else(|poisoned| {
        warn!("event=session_lock module=ffi status=recovered reason=poisoned");
        PoisonError::into_inner(poisoned)
    });
    f(&mut guard)
}

fn new_session() -> Session {
    let mut store = TaskService::new(InMemoryTaskRepository::new());
    if !skip_seed() {
        store.seed_defaults_if_empty();
    }
    Navigator::new(store)
}

fn skip_seed() -> bool {
    std::env::var(SKIP_SEED_ENV)
        .map(|raw| {
            let trimmed = raw.trim();
            !trimmed.is_empty() && trimmed != "0"
        })
        .unwrap_or(false)
}

fn apply(nav: &mut Session, intent: Intent) -> IntentResponse {
    let outcome = nav.dispatch(intent);
    let state = to_state_view(nav.state());
    match outcome {
        Ok(()) => IntentResponse {
            ok: true,
            state,
            message: String::new(),
            title_error: None,
            content_error: None,
        },
        Err(NavigationError::ValidationFailed(validation)) => IntentResponse {
            ok: false,
            state,
            message: "Fix the highlighted fields before saving.".to_string(),
            title_error: validation.title_error,
            content_error: validation.content_error,
        },
        Err(err) => rejected(nav, err.to_string()),
    }
}

fn rejected(nav: &Session, message: String) -> IntentResponse {
    IntentResponse {
        ok: false,
        state: to_state_view(nav.state()),
        message,
        title_error: None,
        content_error: None,
    }
}

fn parse_task_id(raw: &str) -> Result<TaskId, String> {
    let trimmed = raw.trim();
    Uuid::parse_str(trimmed).map_err(|_| format!("invalid task id `{trimmed}`"))
}

fn draft_view(nav: &Session) -> Option<DraftView> {
    let draft = nav.draft()?;
    let validation = nav.validation().unwrap_or_default();
    Some(DraftView {
        title: draft.title.clone(),
        content: draft.content.clone(),
        can_save: validation.is_valid(),
        title_error: validation.title_error,
        content_error: validation.content_error,
    })
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        task_id: task.id.to_string(),
        title: task.title.clone(),
        content: task.content.clone(),
        completed: task.completed,
    }
}

fn to_state_view(state: NavigationState) -> NavStateView {
    NavStateView {
        screen: state.name().to_string(),
        task_id: state.task_id().map(|id| id.to_string()),
    }
}
