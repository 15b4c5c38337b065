mod common;
use common::{at, utc_config};

use chrono::{Duration, NaiveDate};
use rsmokelog::core::session::Session;
use rsmokelog::db::pool::DbPool;
use rsmokelog::db::store::{self, RecordKey};
use rsmokelog::errors::AppError;
use rsmokelog::models::daily_counter::DailyCounter;
use rsmokelog::models::ui_state::IconPosition;

fn fresh(now: chrono::DateTime<chrono::Utc>) -> Session {
    let pool = DbPool::in_memory().expect("in-memory db");
    Session::open(pool, &utc_config(), now).expect("open session")
}

fn reopen(session: Session, now: chrono::DateTime<chrono::Utc>) -> Session {
    Session::open(session.into_pool(), &utc_config(), now).expect("reopen session")
}

#[test]
fn test_first_run_defaults() {
    let now = at(2025, 4, 2, 9, 0);
    let s = fresh(now);
    let state = s.state();

    assert!(state.log.is_empty());
    assert_eq!(state.counter, DailyCounter::zero(NaiveDate::from_ymd_opt(2025, 4, 2).unwrap()));
    assert!(!state.policy.enabled);
    assert_eq!(state.policy.base_interval_minutes, 30);
    assert_eq!(state.policy.growth_percent, 10);
    assert_eq!(state.policy.current_interval_minutes, 30);
    assert!(!state.ui.minimized);
    assert_eq!(state.ui.icon_position, IconPosition { x: 20, y: 20 });

    // the zero counter is written at first run
    let raw = store::read_raw(s.conn(), RecordKey::DailyCounter).unwrap();
    assert_eq!(raw.as_deref(), Some(r#"{"date":"2025-04-02","count":0}"#));
}

#[test]
fn test_record_updates_log_and_counter() {
    let t0 = at(2025, 4, 2, 9, 0);
    let mut s = fresh(t0);

    let first = s.record_event(t0).unwrap();
    let second = s.record_event(t0 + Duration::seconds(47 * 60 + 10)).unwrap();

    assert_eq!(first.gap_from_previous, None);
    assert_eq!(second.gap_from_previous, Some(47));
    assert_eq!(s.state().log.len(), 2);
    assert_eq!(s.today_count(t0), 2);
}

#[test]
fn test_record_after_midnight_starts_new_count() {
    let t0 = at(2025, 4, 2, 23, 50);
    let mut s = fresh(t0);
    s.record_event(t0).unwrap();
    s.record_event(t0 + Duration::minutes(5)).unwrap();

    // no tick in between: the increment itself notices the new day
    let after = t0 + Duration::minutes(20);
    s.record_event(after).unwrap();
    assert_eq!(
        s.state().counter,
        DailyCounter {
            date: NaiveDate::from_ymd_opt(2025, 4, 3).unwrap(),
            count: 1
        }
    );
}

#[test]
fn test_day_rollover_keeps_history() {
    let d = at(2025, 4, 2, 8, 0);
    let mut s = fresh(d);
    for m in 0..5 {
        s.record_event(d + Duration::minutes(m * 40)).unwrap();
    }
    assert_eq!(s.state().counter.count, 5);

    let next_day = at(2025, 4, 3, 7, 0);
    assert!(s.check_day_rollover(next_day).unwrap());
    assert_eq!(
        s.state().counter,
        DailyCounter::zero(NaiveDate::from_ymd_opt(2025, 4, 3).unwrap())
    );
    assert_eq!(s.state().log.len(), 5);

    // idempotent
    assert!(!s.check_day_rollover(next_day).unwrap());
    assert_eq!(s.state().counter.count, 0);
}

#[test]
fn test_open_replaces_stale_counter_and_persists_it() {
    let d = at(2025, 4, 2, 8, 0);
    let mut s = fresh(d);
    s.record_event(d).unwrap();

    let s = reopen(s, at(2025, 4, 5, 10, 0));
    assert_eq!(
        s.state().counter,
        DailyCounter::zero(NaiveDate::from_ymd_opt(2025, 4, 5).unwrap())
    );

    let stored: DailyCounter = match store::read(s.conn(), RecordKey::DailyCounter).unwrap() {
        store::Loaded::Found(c) => c,
        other => panic!("expected stored counter, got {:?}", other),
    };
    assert_eq!(stored.date, NaiveDate::from_ymd_opt(2025, 4, 5).unwrap());
    assert_eq!(s.state().log.len(), 1);
}

#[test]
fn test_reset_and_clear_are_independent() {
    let t0 = at(2025, 4, 2, 9, 0);
    let mut s = fresh(t0);
    s.record_event(t0).unwrap();
    s.record_event(t0 + Duration::minutes(30)).unwrap();

    s.reset_daily_counter(t0 + Duration::minutes(31)).unwrap();
    assert_eq!(s.today_count(t0), 0);
    assert_eq!(s.state().log.len(), 2);

    s.record_event(t0 + Duration::minutes(60)).unwrap();
    s.clear_log().unwrap();
    assert!(s.state().log.is_empty());
    assert_eq!(s.today_count(t0), 1);
}

#[test]
fn test_quitting_scenario() {
    let t0 = at(2025, 4, 2, 12, 0);
    let mut s = fresh(t0);
    s.record_event(t0).unwrap();

    assert!(s.is_event_allowed_now(t0 + Duration::minutes(1)));

    s.set_base_interval(30).unwrap();
    s.activate_quitting(t0).unwrap();

    let ten = t0 + Duration::minutes(10);
    assert!(!s.is_event_allowed_now(ten));
    assert_eq!(s.time_until_next_allowed(ten), Some(20));

    match s.try_record_event(ten) {
        Err(AppError::NotAllowedYet(left)) => assert_eq!(left, "20m"),
        other => panic!("expected refusal, got {:?}", other),
    }
    assert_eq!(s.state().log.len(), 1);

    let later = t0 + Duration::minutes(31);
    assert!(s.is_event_allowed_now(later));
    let ev = s.try_record_event(later).unwrap();
    assert_eq!(ev.gap_from_previous, Some(31));
}

#[test]
fn test_allowed_after_clear_even_when_enabled() {
    let t0 = at(2025, 4, 2, 12, 0);
    let mut s = fresh(t0);
    s.activate_quitting(t0).unwrap();
    s.record_event(t0).unwrap();
    assert!(!s.is_event_allowed_now(t0 + Duration::minutes(1)));

    s.clear_log().unwrap();
    assert!(s.is_event_allowed_now(t0 + Duration::minutes(1)));
    assert_eq!(s.time_until_next_allowed(t0 + Duration::minutes(1)), None);
}

#[test]
fn test_tick_advances_policy_and_persists() {
    let t0 = at(2025, 4, 2, 12, 0);
    let mut s = fresh(t0);
    s.activate_quitting(t0).unwrap();

    let outcome = s.tick(t0 + Duration::days(3)).unwrap();
    assert!(outcome.advanced);
    assert!(outcome.rolled_over);
    assert_eq!(s.state().policy.days_active, 3);
    assert_eq!(s.state().policy.current_interval_minutes, 40);

    let again = s.tick(t0 + Duration::days(3) + Duration::seconds(1)).unwrap();
    assert!(!again.advanced && !again.rolled_over);

    let s = reopen(s, t0 + Duration::days(3) + Duration::hours(1));
    assert_eq!(s.state().policy.days_active, 3);
    assert_eq!(s.state().policy.current_interval_minutes, 40);
}

#[test]
fn test_reopen_catches_up_policy() {
    let t0 = at(2025, 4, 2, 12, 0);
    let mut s = fresh(t0);
    s.activate_quitting(t0).unwrap();

    let s = reopen(s, t0 + Duration::days(2) + Duration::hours(1));
    assert_eq!(s.state().policy.days_active, 2);
    assert_eq!(s.state().policy.current_interval_minutes, 36);
}

#[test]
fn test_base_interval_day_zero_rule_through_session() {
    let t0 = at(2025, 4, 2, 12, 0);
    let mut s = fresh(t0);
    s.activate_quitting(t0).unwrap();
    s.set_base_interval(45).unwrap();
    assert_eq!(s.state().policy.current_interval_minutes, 45);

    s.tick(t0 + Duration::days(2)).unwrap();
    // 45 * 1.21 = 54.45
    assert_eq!(s.state().policy.current_interval_minutes, 54);

    s.set_base_interval(60).unwrap();
    assert_eq!(s.state().policy.current_interval_minutes, 54);
}

#[test]
fn test_toggle_and_reactivation_start_fresh_window() {
    let t0 = at(2025, 4, 2, 12, 0);
    let mut s = fresh(t0);

    s.toggle_quitting(t0).unwrap();
    assert!(s.state().policy.enabled);
    s.tick(t0 + Duration::days(4)).unwrap();
    assert_eq!(s.state().policy.days_active, 4);

    s.toggle_quitting(t0 + Duration::days(4)).unwrap();
    assert!(!s.state().policy.enabled);
    assert_eq!(s.state().policy.days_active, 4);

    let t1 = t0 + Duration::days(5);
    s.toggle_quitting(t1).unwrap();
    assert!(s.state().policy.enabled);
    assert_eq!(s.state().policy.days_active, 0);
    assert_eq!(s.state().policy.current_interval_minutes, 30);
    assert_eq!(s.state().policy.activation_date, t1);
}

#[test]
fn test_state_round_trips_through_store() {
    let t0 = at(2025, 4, 2, 12, 0);
    let mut s = fresh(t0);
    s.record_event(t0 + Duration::milliseconds(123)).unwrap();
    s.record_event(t0 + Duration::minutes(50)).unwrap();
    s.set_growth_percent(25).unwrap();
    s.activate_quitting(t0 + Duration::minutes(50)).unwrap();
    s.set_minimized(true).unwrap();
    s.set_icon_position(IconPosition { x: 140, y: 310 }).unwrap();

    let before = s.state().clone();
    let s = reopen(s, t0 + Duration::minutes(55));
    assert_eq!(s.state(), &before);
}

#[test]
fn test_internal_log_records_operations() {
    let t0 = at(2025, 4, 2, 12, 0);
    let mut s = fresh(t0);
    s.record_event(t0).unwrap();
    s.activate_quitting(t0).unwrap();
    s.clear_log().unwrap();

    let ops: Vec<String> = rsmokelog::db::log::load_log(s.conn())
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .filter(|op| op != "migration_applied")
        .collect();
    assert_eq!(ops, vec!["light", "quit_on", "clear"]);
}
