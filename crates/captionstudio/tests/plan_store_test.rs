//! Tests for plan-state persistence.

use captionstudio::PlanStore;
use captionstudio_core::{PlanState, PlanTier};
use captionstudio_error::StorageErrorKind;
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
}

#[test]
fn test_missing_file_starts_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let store = PlanStore::new(dir.path().join("plan.json"));

    let state = store.load(PlanTier::Free, 10, day(19)).unwrap();

    assert_eq!(state, PlanState::new(PlanTier::Free, 10, day(19)));
    assert!(!store.path().exists());
}

#[test]
fn test_save_then_load_keeps_usage() {
    let dir = tempfile::tempdir().unwrap();
    let store = PlanStore::new(dir.path().join("nested").join("plan.json"));

    let mut state = PlanState::new(PlanTier::Free, 10, day(19));
    state.record_generation();
    state.record_generation();
    store.save(&state).unwrap();

    let loaded = store.load(PlanTier::Free, 10, day(19)).unwrap();
    assert_eq!(*loaded.generations_used(), 2);
    assert_eq!(loaded.remaining(), Some(8));
}

#[test]
fn test_load_applies_new_day() {
    let dir = tempfile::tempdir().unwrap();
    let store = PlanStore::new(dir.path().join("plan.json"));

    let mut state = PlanState::new(PlanTier::Free, 10, day(19));
    state.record_generation();
    store.save(&state).unwrap();

    let loaded = store.load(PlanTier::Free, 10, day(20)).unwrap();
    assert_eq!(*loaded.generations_used(), 0);
    assert_eq!(*loaded.usage_date(), day(20));
}

#[test]
fn test_provisioned_tier_overrides_stored_tier() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    let store = PlanStore::new(&path);

    let edited = r#"{"tier":"pro","generations_used":0,"usage_date":"2026-10-19","free_daily_limit":10}"#;
    std::fs::write(&path, edited).unwrap();

    let loaded = store.load(PlanTier::Free, 5, day(19)).unwrap();
    assert_eq!(*loaded.tier(), PlanTier::Free);
    assert_eq!(*loaded.free_daily_limit(), 5);
    assert!(!loaded.is_entitled());
}

#[test]
fn test_corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");
    std::fs::write(&path, "not json").unwrap();

    let err = PlanStore::new(&path)
        .load(PlanTier::Free, 10, day(19))
        .unwrap_err();
    assert!(matches!(err.kind, StorageErrorKind::Corrupt(_)));
}

#[test]
fn test_explicit_path_wins_over_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.json");

    let store = PlanStore::at_or_default(Some(&path)).unwrap();
    assert_eq!(store.path(), path.as_path());
}

fn blocked_store(dir: &tempfile::TempDir) -> PlanStore {
    // A regular file where the parent directory should be
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "").unwrap();
    PlanStore::new(blocker.join("plan.json"))
}

#[test]
fn test_save_failure_reports_io_error_at_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = blocked_store(&dir);

    let err = store
        .save(&PlanState::new(PlanTier::Free, 10, day(19)))
        .unwrap_err();

    assert!(matches!(err.kind, StorageErrorKind::Io(_)));
    assert!(
        err.file.ends_with("plan_store.rs"),
        "error located at {}",
        err.file
    );
}

#[test]
fn test_save_or_warn_does_not_fail_on_unwritable_path() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = PlanState::new(PlanTier::Free, 10, day(19));
    state.record_generation();

    assert!(!blocked_store(&dir).save_or_warn(&state));
    assert_eq!(*state.generations_used(), 1);

    let writable = PlanStore::new(dir.path().join("plan.json"));
    assert!(writable.save_or_warn(&state));
    let loaded = writable.load(PlanTier::Free, 10, day(19)).unwrap();
    assert_eq!(*loaded.generations_used(), 1);
}
