use tasklist_core::{
    Anchor, EventOutcome, IgnoreReason, ListContainer, MemoryKeyValueStore, Page, PageEvent,
    StoreError, Task, TaskForm, TaskListApp, TaskPersistence, TASKS_STORAGE_KEY,
};
use uuid::Uuid;

fn stored(tasks: &[Task]) -> MemoryKeyValueStore {
    let kv = MemoryKeyValueStore::new();
    TaskPersistence::new(&kv).save(tasks).unwrap();
    kv
}

fn persisted(kv: &MemoryKeyValueStore) -> Vec<Task> {
    TaskPersistence::new(kv).load().unwrap()
}

fn submit(app: &mut TaskListApp<&MemoryKeyValueStore>, text: &str) -> EventOutcome {
    assert!(app.type_input(text));
    app.dispatch(PageEvent::Submit).unwrap()
}

fn row_titles(app: &TaskListApp<&MemoryKeyValueStore>) -> Vec<String> {
    app.page()
        .list()
        .unwrap()
        .rows()
        .iter()
        .map(|row| row.title().to_string())
        .collect()
}

#[test]
fn empty_storage_submit_adds_renders_and_persists() {
    let kv = MemoryKeyValueStore::new();
    let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();
    assert!(app.store().is_empty());

    let outcome = submit(&mut app, "Buy milk");
    let EventOutcome::TaskAdded(id) = outcome else {
        panic!("unexpected outcome: {outcome:?}");
    };

    let tasks = app.store().tasks();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].title(), "Buy milk");
    assert!(!tasks[0].is_completed());
    assert_eq!(row_titles(&app), ["Buy milk"]);
    assert_eq!(app.page().input_value(), Some(""));

    let saved = persisted(&kv);
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].id(), id);
    assert!(!saved[0].is_completed());
}

#[test]
fn stored_task_renders_unchecked_and_toggle_persists() {
    let kv = stored(&[Task::new("Buy milk")]);
    let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();

    let row = &app.page().list().unwrap().rows()[0];
    assert_eq!(row.title(), "Buy milk");
    assert!(!row.is_checked());

    let outcome = app.dispatch(PageEvent::Toggle { row: 0 }).unwrap();
    let id = app.store().tasks()[0].id();
    assert_eq!(
        outcome,
        EventOutcome::TaskToggled {
            task_id: id,
            completed: true
        }
    );
    assert!(app.store().get(id).unwrap().is_completed());
    assert!(app.page().list().unwrap().rows()[0].is_checked());
    assert!(persisted(&kv)[0].is_completed());
}

#[test]
fn sequential_submissions_keep_order() {
    let kv = MemoryKeyValueStore::new();
    let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();

    submit(&mut app, "A");
    submit(&mut app, "B");

    let titles: Vec<_> = app.store().tasks().iter().map(Task::title).collect();
    assert_eq!(titles, ["A", "B"]);
    assert_eq!(row_titles(&app), ["A", "B"]);
    let saved: Vec<_> = persisted(&kv).iter().map(|t| t.title().to_string()).collect();
    assert_eq!(saved, ["A", "B"]);
}

#[test]
fn row_count_is_loaded_plus_submitted() {
    let kv = stored(&[Task::new("old 1"), Task::new("old 2")]);
    let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();

    for title in ["n1", "n2", "n3"] {
        submit(&mut app, title);
    }

    assert_eq!(app.page().list().unwrap().len(), 5);
    assert_eq!(app.store().len(), 5);
}

#[test]
fn blank_submissions_have_no_side_effects() {
    let kv = MemoryKeyValueStore::new();
    let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();

    for text in ["", "   ", "\t\n"] {
        let outcome = submit(&mut app, text);
        assert_eq!(
            outcome,
            EventOutcome::SubmitIgnored(IgnoreReason::BlankTitle)
        );
    }

    assert!(app.store().is_empty());
    assert!(app.page().list().unwrap().is_empty());
    assert_eq!(kv.write_count(), 0);
    assert_eq!(kv.raw(TASKS_STORAGE_KEY), None);
}

#[test]
fn title_is_stored_untrimmed() {
    let kv = MemoryKeyValueStore::new();
    let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();

    submit(&mut app, "  Buy milk ");
    assert_eq!(persisted(&kv)[0].title(), "  Buy milk ");
}

#[test]
fn toggling_twice_restores_and_saves_same_state() {
    let kv = stored(&[Task::new("Buy milk")]);
    let original = persisted(&kv);
    let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();

    app.dispatch(PageEvent::Toggle { row: 0 }).unwrap();
    app.dispatch(PageEvent::Toggle { row: 0 }).unwrap();

    assert!(!app.store().tasks()[0].is_completed());
    assert_eq!(persisted(&kv), original);
}

#[test]
fn reload_sees_previous_session_state() {
    let kv = MemoryKeyValueStore::new();
    {
        let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();
        submit(&mut app, "A");
        submit(&mut app, "B");
        app.dispatch(PageEvent::Toggle { row: 1 }).unwrap();
    }

    let app = TaskListApp::mount(&kv, Page::new()).unwrap();
    let rows = app.page().list().unwrap().rows();
    assert_eq!(rows.len(), 2);
    assert!(!rows[0].is_checked());
    assert!(rows[1].is_checked());
}

#[test]
fn malformed_record_fails_mount() {
    let kv = MemoryKeyValueStore::with_item(TASKS_STORAGE_KEY, "not json");
    let result = TaskListApp::mount(&kv, Page::new());
    assert!(matches!(result, Err(StoreError::Persistence(_))));
}

#[test]
fn write_failure_propagates_and_keeps_memory() {
    let kv = MemoryKeyValueStore::new();
    let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();
    kv.set_reject_writes(true);

    assert!(app.type_input("unsaved"));
    let err = app.dispatch(PageEvent::Submit).unwrap_err();

    assert!(matches!(err, StoreError::Persistence(_)));
    assert_eq!(app.store().len(), 1);
    assert!(app.page().list().unwrap().is_empty());
    assert_eq!(app.page().input_value(), Some("unsaved"));
}

#[test]
fn toggle_write_failure_propagates_and_keeps_memory() {
    let kv = stored(&[Task::new("Buy milk")]);
    let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();
    kv.set_reject_writes(true);

    let err = app.dispatch(PageEvent::Toggle { row: 0 }).unwrap_err();

    assert!(matches!(err, StoreError::Persistence(_)));
    assert!(app.store().tasks()[0].is_completed());
    assert!(app.page().list().unwrap().rows()[0].is_checked());
    assert!(!persisted(&kv)[0].is_completed());
}

#[test]
fn duplicate_stored_ids_toggle_their_own_rows() {
    let id = Uuid::new_v4();
    let raw = serde_json::json!([
        { "id": id, "title": "first", "completed": false, "createdAt": "2024-01-01T00:00:00Z" },
        { "id": id, "title": "second", "completed": false, "createdAt": "2024-01-01T00:00:01Z" }
    ])
    .to_string();
    let kv = MemoryKeyValueStore::with_item(TASKS_STORAGE_KEY, raw);
    let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();

    app.dispatch(PageEvent::Toggle { row: 1 }).unwrap();

    let rows = app.page().list().unwrap().rows();
    assert!(!rows[0].is_checked());
    assert!(rows[1].is_checked());
    assert_ne!(rows[0].task_id(), rows[1].task_id());

    let saved = persisted(&kv);
    assert_eq!(saved[0].title(), "first");
    assert!(!saved[0].is_completed());
    assert_eq!(saved[1].title(), "second");
    assert!(saved[1].is_completed());
}

#[test]
fn missing_list_still_stores_submissions() {
    let kv = stored(&[Task::new("old")]);
    let page = Page::empty().with_form(TaskForm::new());
    let mut app = TaskListApp::mount(&kv, page).unwrap();

    assert!(!app.capabilities().can_render);
    assert!(matches!(submit(&mut app, "new"), EventOutcome::TaskAdded(_)));
    assert_eq!(persisted(&kv).len(), 2);
    assert_eq!(
        app.dispatch(PageEvent::Toggle { row: 0 }).unwrap(),
        EventOutcome::Unavailable(Anchor::List)
    );
}

#[test]
fn missing_form_makes_submit_unavailable() {
    let kv = MemoryKeyValueStore::new();
    let page = Page::empty().with_list(ListContainer::new());
    let mut app = TaskListApp::mount(&kv, page).unwrap();

    assert!(!app.type_input("ignored"));
    assert_eq!(
        app.dispatch(PageEvent::Submit).unwrap(),
        EventOutcome::Unavailable(Anchor::Form)
    );
    assert_eq!(kv.write_count(), 0);
}

#[test]
fn missing_input_ignores_submit() {
    let kv = MemoryKeyValueStore::new();
    let page = Page::new().with_form(TaskForm::without_input());
    let mut app = TaskListApp::mount(&kv, page).unwrap();

    assert_eq!(
        app.dispatch(PageEvent::Submit).unwrap(),
        EventOutcome::SubmitIgnored(IgnoreReason::MissingInput)
    );
    assert_eq!(kv.write_count(), 0);
}

#[test]
fn toggle_out_of_range_is_reported() {
    let kv = MemoryKeyValueStore::new();
    let mut app = TaskListApp::mount(&kv, Page::new()).unwrap();

    assert_eq!(
        app.dispatch(PageEvent::Toggle { row: 3 }).unwrap(),
        EventOutcome::RowOutOfRange(3)
    );
    assert_eq!(kv.write_count(), 0);
}
