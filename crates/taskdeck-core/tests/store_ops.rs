/*
[INPUT]:  TaskStore operations against temp-dir backed JSON storage
[OUTPUT]: Verified mutation, id assignment, and recovery behavior
[POS]:    Integration test layer for taskdeck-core
[UPDATE]: When changing TaskStore semantics
*/

use taskdeck_core::{JsonFileStorage, PersistenceAdapter, TaskStore};
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> TaskStore<JsonFileStorage> {
    TaskStore::open(JsonFileStorage::new(dir.path().join("tasks.json")))
}

#[test]
fn add_places_task_first_with_fresh_id() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    assert_eq!(store.add_task("first"), Some(1));
    assert_eq!(store.add_task("second"), Some(2));

    let tasks = store.tasks();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].description, "second");
    assert_eq!(tasks[1].description, "first");
    assert!(tasks[0].just_added);
}

#[test]
fn add_trims_description() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let id = store.add_task("  buy milk  ").unwrap();
    assert_eq!(store.find(id).unwrap().description, "buy milk");
}

#[test]
fn blank_add_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    assert_eq!(store.add_task(""), None);
    assert_eq!(store.add_task("   \t\n"), None);
    assert_eq!(store.total_count(), 0);

    // The id counter did not advance for the rejected adds.
    assert_eq!(store.add_task("real"), Some(1));
}

#[test]
fn toggle_is_its_own_inverse() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let id = store.add_task("flip me").unwrap();
    assert!(!store.find(id).unwrap().completed);

    assert!(store.toggle_complete(id));
    assert!(store.find(id).unwrap().completed);

    assert!(store.toggle_complete(id));
    assert!(!store.find(id).unwrap().completed);
}

#[test]
fn toggle_unknown_id_is_a_no_op() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    store.add_task("only task").unwrap();

    assert!(!store.toggle_complete(99));
    assert!(!store.find(1).unwrap().completed);
}

#[test]
fn remove_deletes_exactly_one_task() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    store.add_task("one").unwrap();
    store.add_task("two").unwrap();
    store.add_task("three").unwrap();

    store.remove_task(2);

    let ids: Vec<u64> = store.tasks().iter().map(|task| task.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn remove_unknown_id_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    store.add_task("keep").unwrap();

    store.remove_task(42);
    store.remove_task(42);
    assert_eq!(store.total_count(), 1);
}

#[test]
fn ids_are_session_monotonic_after_delete() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);
    store.add_task("first").unwrap();
    store.add_task("second").unwrap();

    // Deleting id 2 drops the numeric max, but the counter never rewinds.
    store.remove_task(2);
    assert_eq!(store.add_task("third"), Some(3));
}

#[test]
fn next_id_resumes_from_stored_max() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = open_store(&dir);
        store.add_task("one").unwrap();
        store.add_task("two").unwrap();
        store.remove_task(1);
    }

    let mut store = open_store(&dir);
    assert_eq!(store.total_count(), 1);
    assert_eq!(store.add_task("after restart"), Some(3));
}

#[test]
fn mutations_round_trip_through_storage() {
    let dir = TempDir::new().unwrap();
    let created_at;
    {
        let mut store = open_store(&dir);
        store.add_task("persisted").unwrap();
        assert!(store.toggle_complete(1));
        created_at = store.find(1).unwrap().created_at;
    }

    let store = open_store(&dir);
    let task = store.find(1).unwrap();
    assert_eq!(task.description, "persisted");
    assert!(task.completed);
    assert_eq!(task.created_at, created_at);
    assert!(!task.just_added);
}

#[test]
fn clear_just_added_tolerates_deleted_task() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let id = store.add_task("short lived").unwrap();
    store.remove_task(id);

    // The highlight timer may fire after the task is gone.
    store.clear_just_added(id);
    assert_eq!(store.total_count(), 0);
}

#[test]
fn clear_just_added_clears_only_the_marker() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    let id = store.add_task("settle down").unwrap();
    assert!(store.find(id).unwrap().just_added);

    store.clear_just_added(id);
    let task = store.find(id).unwrap();
    assert!(!task.just_added);
    assert_eq!(task.description, "settle down");
}

#[test]
fn malformed_storage_opens_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasks.json");
    std::fs::write(&path, "{ definitely not a task array").unwrap();

    let mut store = TaskStore::open(JsonFileStorage::new(&path));
    assert_eq!(store.total_count(), 0);

    // The store is usable and the next save repairs the file.
    assert_eq!(store.add_task("fresh start"), Some(1));
    let reloaded = JsonFileStorage::new(&path).load().unwrap();
    assert_eq!(reloaded.len(), 1);
}

#[test]
fn active_count_tracks_completion() {
    let dir = TempDir::new().unwrap();
    let mut store = open_store(&dir);

    store.add_task("buy milk").unwrap();
    assert_eq!(store.active_count(), 1);
    assert_eq!(store.total_count(), 1);

    store.add_task("walk dog").unwrap();
    assert!(store.toggle_complete(1));
    assert_eq!(store.active_count(), 1);
    assert_eq!(store.total_count(), 2);
}
