use chrono::{TimeZone, Utc};
use tasklist_core::db::{open_db, open_db_in_memory};
use tasklist_core::{
    KeyValueStore, MemoryKeyValueStore, PersistenceError, SqliteKeyValueStore, Task,
    TaskPersistence, TASKS_STORAGE_KEY,
};
use uuid::Uuid;

fn sample_tasks() -> Vec<Task> {
    let mut done = Task::with_id(
        Uuid::new_v4(),
        "Buy milk",
        Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
    );
    done.set_completed(true);
    vec![done, Task::new("Walk dog"), Task::new("  spaced  ")]
}

#[test]
fn load_from_empty_store_returns_empty_collection() {
    let kv = MemoryKeyValueStore::new();
    let persistence = TaskPersistence::new(&kv);

    assert!(persistence.load().unwrap().is_empty());
}

#[test]
fn save_then_load_preserves_content_and_order() {
    let kv = MemoryKeyValueStore::new();
    let persistence = TaskPersistence::new(&kv);
    let tasks = sample_tasks();

    persistence.save(&tasks).unwrap();
    let reloaded = TaskPersistence::new(&kv).load().unwrap();

    assert_eq!(reloaded, tasks);
}

#[test]
fn save_overwrites_previous_record() {
    let kv = MemoryKeyValueStore::new();
    let persistence = TaskPersistence::new(&kv);

    persistence.save(&sample_tasks()).unwrap();
    persistence.save(&[]).unwrap();

    assert_eq!(kv.raw(TASKS_STORAGE_KEY).as_deref(), Some("[]"));
    assert!(persistence.load().unwrap().is_empty());
}

#[test]
fn repeated_saves_persist_the_same_state() {
    let kv = MemoryKeyValueStore::new();
    let persistence = TaskPersistence::new(&kv);
    let tasks = sample_tasks();

    persistence.save(&tasks).unwrap();
    let first = kv.raw(TASKS_STORAGE_KEY);
    persistence.save(&tasks).unwrap();

    assert_eq!(kv.raw(TASKS_STORAGE_KEY), first);
    assert_eq!(kv.write_count(), 2);
}

#[test]
fn malformed_record_is_a_decode_error() {
    let kv = MemoryKeyValueStore::with_item(TASKS_STORAGE_KEY, "{not json");
    let err = TaskPersistence::new(&kv).load().unwrap_err();
    assert!(matches!(err, PersistenceError::Decode(_)));

    let kv = MemoryKeyValueStore::with_item(TASKS_STORAGE_KEY, r#"[{"title":"no id"}]"#);
    let err = TaskPersistence::new(&kv).load().unwrap_err();
    assert!(matches!(err, PersistenceError::Decode(_)));
}

#[test]
fn persisted_record_uses_camel_case_json_array() {
    let kv = MemoryKeyValueStore::new();
    TaskPersistence::new(&kv).save(&sample_tasks()).unwrap();

    let raw = kv.raw(TASKS_STORAGE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value.as_array().unwrap()[0];
    assert_eq!(first["title"], "Buy milk");
    assert_eq!(first["completed"], true);
    assert_eq!(first["createdAt"], "2024-01-02T03:04:05Z");
}

#[test]
fn rejected_write_surfaces_store_error() {
    let kv = MemoryKeyValueStore::new();
    kv.set_reject_writes(true);

    let err = TaskPersistence::new(&kv).save(&sample_tasks()).unwrap_err();
    assert!(matches!(err, PersistenceError::Store(_)));
}

#[test]
fn sqlite_store_get_and_overwrite() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKeyValueStore::new(&conn);

    assert_eq!(kv.get_item("TASKS").unwrap(), None);
    kv.set_item("TASKS", "[1]").unwrap();
    kv.set_item("TASKS", "[2]").unwrap();
    assert_eq!(kv.get_item("TASKS").unwrap().as_deref(), Some("[2]"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_store;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn sqlite_round_trip_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.db");
    let tasks = sample_tasks();

    {
        let conn = open_db(&path).unwrap();
        TaskPersistence::new(SqliteKeyValueStore::new(&conn))
            .save(&tasks)
            .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let reloaded = TaskPersistence::new(SqliteKeyValueStore::new(&conn))
        .load()
        .unwrap();
    assert_eq!(reloaded, tasks);
}
