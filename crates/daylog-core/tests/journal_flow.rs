//! End-to-end flow over a file-backed store, exercising the same
//! save-then-render path the CLI drives.

use std::collections::BTreeMap;

use daylog_core::{
    DateKey, Entry, EntryStore, HistoryProjector, KvBackend, SqliteBackend, StreakCalculator,
    StreakPolicy, UNREADABLE_PLACEHOLDER,
};

fn key(s: &str) -> DateKey {
    DateKey::decode(s).unwrap()
}

fn entry(mood: &str, progress: &str) -> Entry {
    let mut answers = BTreeMap::new();
    answers.insert("mood".to_string(), mood.to_string());
    answers.insert("progress".to_string(), progress.to_string());
    Entry::from_answers(answers)
}

fn open_store(dir: &tempfile::TempDir) -> EntryStore<SqliteBackend> {
    let backend = SqliteBackend::open(dir.path().join("journal.db")).unwrap();
    EntryStore::new(backend)
}

#[test]
fn save_project_and_streak() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.upsert(&key("2024-01-01"), &entry("ok", "outline")).unwrap();
    store.upsert(&key("2024-01-02"), &entry("good", "draft")).unwrap();
    store.upsert(&key("2024-01-03"), &entry("great", "shipped")).unwrap();

    let days = store.all_keys().unwrap();
    let streak = StreakCalculator::new().compute(&days, key("2024-01-03"));
    assert_eq!(streak, 3);

    let summary = HistoryProjector::new().build(&store.load_all().unwrap());
    assert_eq!(summary.len(), 3);
    assert_eq!(summary.items[0].key, key("2024-01-03"));
    assert_eq!(summary.items[0].excerpt, "great");
    assert_eq!(summary.items[2].key, key("2024-01-01"));
}

#[test]
fn entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let store = open_store(&dir);
        store.upsert(&key("2024-01-05"), &entry("ok", "notes")).unwrap();
    }

    let store = open_store(&dir);
    let got = store.get(&key("2024-01-05")).unwrap().unwrap();
    assert_eq!(got.answer("mood"), Some("ok"));
}

#[test]
fn resave_for_same_day_replaces_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);
    let k = key("2024-01-05");

    store.upsert(&k, &entry("ok", "first pass")).unwrap();
    store
        .upsert(&k, &Entry::new().with_answer("mood", "great"))
        .unwrap();

    let got = store.get(&k).unwrap().unwrap();
    assert_eq!(got.answer("mood"), Some("great"));
    // Replaced, not merged: the earlier progress answer is gone.
    assert_eq!(got.answer("progress"), None);
    assert_eq!(store.all_keys().unwrap().len(), 1);
}

#[test]
fn corrupt_day_degrades_without_breaking_the_render() {
    let dir = tempfile::tempdir().unwrap();
    let backend = SqliteBackend::open(dir.path().join("journal.db")).unwrap();
    backend.set("entry:2024-01-02", "{ not valid json").unwrap();
    let store = EntryStore::new(backend);

    store.upsert(&key("2024-01-01"), &entry("ok", "fine")).unwrap();
    store.upsert(&key("2024-01-03"), &entry("good", "fine")).unwrap();

    let summary = HistoryProjector::new().build(&store.load_all().unwrap());
    assert_eq!(summary.len(), 3);
    assert_eq!(summary.items[1].excerpt, UNREADABLE_PLACEHOLDER);
    assert_eq!(summary.items[0].excerpt, "good");

    // The corrupt day still counts as logged for the streak walk: its key
    // exists even though its payload is unreadable.
    let streak = StreakCalculator::new().compute(&store.all_keys().unwrap(), key("2024-01-03"));
    assert_eq!(streak, 3);
}

#[test]
fn unrelated_kv_data_is_invisible_to_the_journal() {
    let dir = tempfile::tempdir().unwrap();
    let backend = SqliteBackend::open(dir.path().join("journal.db")).unwrap();
    backend.set("timer_engine", "{\"state\":\"idle\"}").unwrap();
    let store = EntryStore::new(backend);

    store.upsert(&key("2024-01-01"), &entry("ok", "fine")).unwrap();

    assert_eq!(store.all_keys().unwrap().len(), 1);
    assert_eq!(HistoryProjector::new().build(&store.load_all().unwrap()).len(), 1);
}

#[test]
fn policies_disagree_only_when_today_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&dir);

    store.upsert(&key("2024-01-01"), &entry("ok", "a")).unwrap();
    store.upsert(&key("2024-01-02"), &entry("ok", "b")).unwrap();

    let days = store.all_keys().unwrap();
    let strict = StreakCalculator::new();
    let grace = StreakCalculator::with_policy(StreakPolicy::GraceThroughYesterday);

    assert_eq!(strict.compute(&days, key("2024-01-03")), 0);
    assert_eq!(grace.compute(&days, key("2024-01-03")), 2);

    // With today logged, both policies agree.
    assert_eq!(strict.compute(&days, key("2024-01-02")), 2);
    assert_eq!(grace.compute(&days, key("2024-01-02")), 2);
}
