use std::cell::RefCell;
use std::rc::Rc;
use tododemo_core::{
    DraftLimits, EditDraft, InMemoryTaskRepository, Intent, NavigationError, NavigationState,
    Navigator, StoreResult, Task, TaskId, TaskRepository, TaskService,
};

/// Repository handle shared with the test so tasks can vanish behind the
/// navigator's back.
#[derive(Clone, Default)]
struct SharedRepository(Rc<RefCell<InMemoryTaskRepository>>);

impl TaskRepository for SharedRepository {
    fn insert_task(&mut self, task: Task) -> StoreResult<()> {
        self.0.borrow_mut().insert_task(task)
    }
    fn update_task(&mut self, id: TaskId, title: &str, content: &str) -> StoreResult<()> {
        self.0.borrow_mut().update_task(id, title, content)
    }
    fn set_completed(&mut self, id: TaskId, completed: bool) -> StoreResult<()> {
        self.0.borrow_mut().set_completed(id, completed)
    }
    fn remove_task(&mut self, id: TaskId) -> StoreResult<Task> {
        self.0.borrow_mut().remove_task(id)
    }
    fn get_task(&self, id: TaskId) -> Option<Task> {
        self.0.borrow().get_task(id)
    }
    fn list_tasks(&self) -> Vec<Task> {
        self.0.borrow().list_tasks()
    }
    fn count(&self) -> usize {
        self.0.borrow().count()
    }
}

fn shared_navigator(tasks: Vec<Task>) -> (Navigator<SharedRepository>, SharedRepository) {
    let shared = SharedRepository::default();
    let mut store = TaskService::new(shared.clone());
    store.seed_if_empty(tasks);
    (Navigator::new(store), shared)
}

fn navigator_with(tasks: Vec<Task>) -> Navigator<InMemoryTaskRepository> {
    let mut store = TaskService::new(InMemoryTaskRepository::new());
    store.seed_if_empty(tasks);
    Navigator::new(store)
}

fn abc() -> (Navigator<InMemoryTaskRepository>, Vec<Task>) {
    let tasks = vec![Task::new("Alpha", "a"), Task::new("Bravo", "b"), Task::new("Charlie", "")];
    (navigator_with(tasks.clone()), tasks)
}

#[test]
fn starts_on_list_without_draft() {
    let (nav, _) = abc();
    assert_eq!(nav.state(), NavigationState::List);
    assert!(nav.draft().is_none());
    assert!(nav.validation().is_none());
    assert!(nav.current_task().is_none());
}

#[test]
fn with_defaults_seeds_three_tasks() {
    let nav = Navigator::with_defaults();
    assert_eq!(nav.tasks().len(), 3);
    assert!(nav.state().is_list());
}

#[test]
fn create_new_then_cancel_leaves_store_untouched() {
    let (mut nav, tasks) = abc();

    nav.create_new().unwrap();
    assert_eq!(nav.state(), NavigationState::Edit { task_id: None });
    assert_eq!(nav.draft(), Some(&EditDraft::default()));

    nav.update_draft_title("Something").unwrap();
    nav.cancel().unwrap();

    assert_eq!(nav.state(), NavigationState::List);
    assert!(nav.draft().is_none());
    assert_eq!(nav.tasks(), tasks);
}

#[test]
fn select_edit_save_updates_task_and_keeps_completed() {
    let (mut nav, tasks) = abc();
    let target = tasks[1].id;
    nav.toggle_completed(target).unwrap();

    nav.select_task(target).unwrap();
    assert_eq!(nav.state(), NavigationState::Detail { task_id: target });
    assert_eq!(nav.current_task().unwrap().title, "Bravo");

    nav.edit().unwrap();
    assert_eq!(
        nav.state(),
        NavigationState::Edit {
            task_id: Some(target)
        }
    );
    assert_eq!(nav.draft(), Some(&EditDraft::new("Bravo", "b")));

    nav.update_draft_title("Bravo edited").unwrap();
    nav.update_draft_content("new body").unwrap();
    assert!(nav.can_save());
    nav.save().unwrap();

    assert_eq!(nav.state(), NavigationState::List);
    let listed = nav.tasks();
    assert_eq!(listed[1].id, target);
    assert_eq!(listed[1].title, "Bravo edited");
    assert_eq!(listed[1].content, "new body");
    assert!(listed[1].completed);
    assert_eq!(listed.len(), 3);
}

#[test]
fn save_from_create_appends_new_task() {
    let (mut nav, _) = abc();

    nav.create_new().unwrap();
    nav.update_draft_title("Delta").unwrap();
    nav.save().unwrap();

    let listed = nav.tasks();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[3].title, "Delta");
    assert_eq!(listed[3].content, "");
    assert!(!listed[3].completed);
    assert_eq!(nav.state(), NavigationState::List);
}

#[test]
fn invalid_save_is_refused_without_store_mutation() {
    let (mut nav, tasks) = abc();

    nav.create_new().unwrap();
    nav.update_draft_title("ab").unwrap();
    assert!(!nav.can_save());

    let err = nav.save().unwrap_err();
    match err {
        NavigationError::ValidationFailed(result) => {
            assert_eq!(
                result.title_error.as_deref(),
                Some("Title must be at least 3 characters")
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(nav.state(), NavigationState::Edit { task_id: None });
    assert_eq!(nav.draft().unwrap().title, "ab");
    assert_eq!(nav.tasks(), tasks);
}

#[test]
fn validation_tracks_every_draft_change() {
    let (mut nav, _) = abc();
    nav.create_new().unwrap();

    let initial = nav.validation().unwrap();
    assert_eq!(initial.title_error.as_deref(), Some("Title cannot be empty"));

    nav.update_draft_title("Fine title").unwrap();
    assert!(nav.validation().unwrap().is_valid());

    nav.update_draft_content("x".repeat(121)).unwrap();
    let result = nav.validation().unwrap();
    assert!(result.title_error.is_none());
    assert!(result.content_error.is_some());
}

#[test]
fn custom_limits_gate_save() {
    let mut nav = navigator_with(Vec::new()).with_limits(DraftLimits {
        title_min: 1,
        title_max: 4,
        content_max: 10,
    });
    nav.create_new().unwrap();
    nav.update_draft_title("ok").unwrap();
    assert!(nav.can_save());
    nav.update_draft_title("too long").unwrap();
    assert!(!nav.can_save());
}

#[test]
fn delete_from_detail_removes_task_and_returns_to_list() {
    let (mut nav, tasks) = abc();

    nav.select_task(tasks[0].id).unwrap();
    nav.delete().unwrap();

    assert_eq!(nav.state(), NavigationState::List);
    assert!(nav.store().get(tasks[0].id).is_none());
    assert_eq!(nav.tasks(), vec![tasks[1].clone(), tasks[2].clone()]);
}

#[test]
fn back_from_detail_returns_to_list() {
    let (mut nav, tasks) = abc();
    nav.select_task(tasks[2].id).unwrap();
    nav.back().unwrap();
    assert_eq!(nav.state(), NavigationState::List);
    assert_eq!(nav.tasks(), tasks);
}

#[test]
fn select_missing_task_stays_on_list() {
    let (mut nav, _) = abc();
    let ghost = Task::new("ghost", "");

    let err = nav.select_task(ghost.id).unwrap_err();
    assert_eq!(err, NavigationError::NotFound(ghost.id));
    assert_eq!(nav.state(), NavigationState::List);
}

#[test]
fn toggle_of_missing_task_from_detail_falls_back_to_list() {
    let (mut nav, tasks) = abc();
    let ghost = Task::new("ghost", "");
    nav.select_task(tasks[0].id).unwrap();

    let err = nav.toggle_completed(ghost.id).unwrap_err();
    assert_eq!(err, NavigationError::NotFound(ghost.id));
    assert_eq!(nav.state(), NavigationState::List);
}

#[test]
fn toggle_from_detail_keeps_screen() {
    let (mut nav, tasks) = abc();
    nav.select_task(tasks[0].id).unwrap();

    nav.toggle_completed(tasks[0].id).unwrap();

    assert_eq!(nav.state(), NavigationState::Detail { task_id: tasks[0].id });
    assert!(nav.current_task().unwrap().completed);
}

#[test]
fn intents_without_transition_are_rejected_and_change_nothing() {
    let (mut nav, tasks) = abc();

    for intent in [
        Intent::Back,
        Intent::Edit,
        Intent::Delete,
        Intent::Cancel,
        Intent::Save,
        Intent::UpdateDraftTitle("x".to_string()),
    ] {
        let err = nav.dispatch(intent).unwrap_err();
        assert!(matches!(
            err,
            NavigationError::UnsupportedIntent { state: "list", .. }
        ));
        assert_eq!(nav.state(), NavigationState::List);
    }

    nav.create_new().unwrap();
    let err = nav.toggle_completed(tasks[0].id).unwrap_err();
    assert_eq!(
        err,
        NavigationError::UnsupportedIntent {
            state: "edit",
            intent: "toggle_completed",
        }
    );
    assert!(!nav.tasks()[0].completed);

    let err = nav.select_task(tasks[0].id).unwrap_err();
    assert!(matches!(err, NavigationError::UnsupportedIntent { .. }));
    assert_eq!(nav.state(), NavigationState::Edit { task_id: None });
}

#[test]
fn navigation_state_serializes_with_screen_tag() {
    let (mut nav, tasks) = abc();
    nav.select_task(tasks[0].id).unwrap();

    let json = serde_json::to_value(nav.state()).unwrap();
    assert_eq!(json["screen"], "detail");
    assert_eq!(json["task_id"], tasks[0].id.to_string());

    let list = serde_json::to_value(NavigationState::List).unwrap();
    assert_eq!(list, serde_json::json!({ "screen": "list" }));
}

#[test]
fn edit_of_vanished_task_falls_back_to_list() {
    let task = Task::new("Alpha", "a");
    let (mut nav, mut shared) = shared_navigator(vec![task.clone()]);
    nav.select_task(task.id).unwrap();
    shared.remove_task(task.id).unwrap();

    let err = nav.edit().unwrap_err();
    assert_eq!(err, NavigationError::NotFound(task.id));
    assert_eq!(nav.state(), NavigationState::List);
    assert!(nav.draft().is_none());
}

#[test]
fn save_of_vanished_task_falls_back_to_list_and_drops_draft() {
    let task = Task::new("Alpha", "a");
    let (mut nav, mut shared) = shared_navigator(vec![task.clone()]);
    nav.select_task(task.id).unwrap();
    nav.edit().unwrap();
    nav.update_draft_title("Alpha edited").unwrap();
    shared.remove_task(task.id).unwrap();

    let err = nav.save().unwrap_err();
    assert_eq!(err, NavigationError::NotFound(task.id));
    assert_eq!(nav.state(), NavigationState::List);
    assert!(nav.draft().is_none());
    assert!(nav.tasks().is_empty());
}

#[test]
fn delete_of_vanished_task_lands_on_list() {
    let kept = Task::new("Bravo", "");
    let task = Task::new("Alpha", "a");
    let (mut nav, mut shared) = shared_navigator(vec![task.clone(), kept.clone()]);
    nav.select_task(task.id).unwrap();
    shared.remove_task(task.id).unwrap();

    let err = nav.delete().unwrap_err();
    assert_eq!(err, NavigationError::NotFound(task.id));
    assert_eq!(nav.state(), NavigationState::List);
    assert!(nav.draft().is_none());
    assert_eq!(nav.tasks(), vec![kept]);
}

#[test]
fn quick_add_appends_from_list_and_skips_empty_title() {
    let (mut nav, tasks) = abc();

    nav.quick_add("", "ignored").unwrap();
    assert_eq!(nav.tasks(), tasks);

    nav.quick_add("Water plants", "").unwrap();
    let listed = nav.tasks();
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[3].title, "Water plants");
    assert_eq!(nav.state(), NavigationState::List);

    nav.select_task(tasks[0].id).unwrap();
    let err = nav.quick_add("Nope", "").unwrap_err();
    assert!(matches!(
        err,
        NavigationError::UnsupportedIntent { intent: "quick_add", .. }
    ));
}

#[test]
fn set_completed_applies_explicit_value() {
    let (mut nav, tasks) = abc();

    nav.set_completed(tasks[1].id, true).unwrap();
    nav.set_completed(tasks[1].id, true).unwrap();
    assert!(nav.tasks()[1].completed);

    nav.select_task(tasks[1].id).unwrap();
    nav.set_completed(tasks[1].id, false).unwrap();
    assert!(!nav.current_task().unwrap().completed);

    let ghost = Task::new("ghost", "");
    let err = nav.set_completed(ghost.id, true).unwrap_err();
    assert_eq!(err, NavigationError::NotFound(ghost.id));
    assert_eq!(nav.state(), NavigationState::List);
}
