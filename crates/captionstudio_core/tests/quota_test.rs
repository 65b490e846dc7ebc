use captionstudio_core::{DEFAULT_FREE_DAILY_LIMIT, PlanState, PlanTier};
use captionstudio_error::StudioErrorKind;
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, d).expect("valid date")
}

#[test]
fn test_free_plan_allows_exactly_the_limit() {
    let mut state = PlanState::new(PlanTier::Free, DEFAULT_FREE_DAILY_LIMIT, day(1));

    for _ in 0..DEFAULT_FREE_DAILY_LIMIT {
        state.ensure_can_generate().expect("within quota");
        state.record_generation();
    }

    let err = state.ensure_can_generate().expect_err("quota exhausted");
    assert_eq!(
        err.kind,
        StudioErrorKind::QuotaExhausted {
            used: DEFAULT_FREE_DAILY_LIMIT,
            limit: DEFAULT_FREE_DAILY_LIMIT,
        }
    );
    assert_eq!(state.remaining(), Some(0));
}

#[test]
fn test_new_day_resets_usage() {
    let mut state = PlanState::new(PlanTier::Free, 1, day(1));
    state.record_generation();
    assert!(state.ensure_can_generate().is_err());

    state.roll_over(day(1));
    assert!(state.ensure_can_generate().is_err());

    state.roll_over(day(2));
    assert_eq!(*state.generations_used(), 0);
    assert_eq!(*state.usage_date(), day(2));
    assert!(state.ensure_can_generate().is_ok());
}

#[test]
fn test_pro_plan_is_unlimited_and_entitled() {
    let mut state = PlanState::new(PlanTier::Pro, 0, day(1));
    for _ in 0..100 {
        state.ensure_can_generate().expect("pro is unlimited");
        state.record_generation();
    }
    assert!(state.is_entitled());
    assert_eq!(state.remaining(), None);
}

#[test]
fn test_set_tier_changes_entitlement() {
    let mut state = PlanState::new(PlanTier::Free, 10, day(1));
    assert!(!state.is_entitled());
    state.set_tier(PlanTier::Pro);
    assert!(state.is_entitled());
}

#[test]
fn test_state_survives_json_round_trip_without_limit_field() {
    let json = r#"{"tier":"free","generations_used":3,"usage_date":"2026-10-01"}"#;
    let state: PlanState = serde_json::from_str(json).expect("valid state");
    assert_eq!(*state.free_daily_limit(), DEFAULT_FREE_DAILY_LIMIT);
    assert_eq!(state.remaining(), Some(DEFAULT_FREE_DAILY_LIMIT - 3));
}

#[test]
fn test_plan_tier_parses_case_insensitively() {
    assert_eq!("PRO".parse::<PlanTier>().ok(), Some(PlanTier::Pro));
    assert_eq!("free".parse::<PlanTier>().ok(), Some(PlanTier::Free));
    assert!("agency".parse::<PlanTier>().is_err());
}
