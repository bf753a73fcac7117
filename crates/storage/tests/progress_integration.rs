use chrono::Duration;
use quiz_core::model::{AttemptRecord, HISTORY_LIMIT, HistoryLog, QuestionId, StarredSet};
use quiz_core::time::fixed_now;
use storage::kv::{HISTORY_KEY, STARRED_KEY};
use storage::repository::Storage;

fn id(raw: &str) -> QuestionId {
    QuestionId::new(raw).unwrap()
}

#[test]
fn json_file_storage_round_trips_progress() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("progress.json");

    let storage = Storage::json_file(&path).expect("open");
    let starred: StarredSet = [id("q-1"), id("q-2")].into_iter().collect();
    storage.progress.save_starred(&starred).expect("save starred");

    let mut history = HistoryLog::new();
    for i in 0..(HISTORY_LIMIT as i64 + 25) {
        history.push(AttemptRecord::new(
            id(&format!("q-{i}")),
            i % 2 == 0,
            fixed_now() + Duration::seconds(i),
        ));
    }
    storage.progress.save_history(&history).expect("save history");
    drop(storage);

    let reopened = Storage::json_file(&path).expect("reopen");
    assert_eq!(reopened.progress.load_starred(), starred);
    let loaded = reopened.progress.load_history();
    assert_eq!(loaded.len(), HISTORY_LIMIT);
    assert_eq!(loaded.iter().next().unwrap().question_id.as_str(), "q-25");
    assert_eq!(
        loaded.iter().last().unwrap().answered_at,
        fixed_now() + Duration::seconds(HISTORY_LIMIT as i64 + 24)
    );
}

#[test]
fn corrupted_keys_fail_soft() {
    let storage = Storage::in_memory();
    storage.kv.set(STARRED_KEY, "[[[").unwrap();
    storage.kv.set(HISTORY_KEY, r#"{"id":"x"}"#).unwrap();

    assert!(storage.progress.load_starred().is_empty());
    assert!(storage.progress.load_history().is_empty());
}
