//! Tests for the bounded request log and daily cost counter

use chrono::{TimeZone, Utc};
use poster_engine::composer::{compose, ComposeInput};
use poster_engine::ledger::{DailyCostCounter, LogEntry, RequestLog, MAX_ENTRIES};

fn entry(tag: usize) -> LogEntry {
    let request = compose(&ComposeInput::new(format!("prompt number {}", tag))).unwrap();
    LogEntry::failure(request, format!("error {}", tag), 0.1)
}

#[test]
fn test_log_capped_at_fifty_entries() {
    let mut log = RequestLog::new();
    for i in 0..(MAX_ENTRIES + 1) {
        log.append(entry(i));
    }

    assert_eq!(log.len(), 50);

    // Newest first; the single oldest entry (0) was evicted
    let errors: Vec<_> = log
        .entries()
        .iter()
        .map(|e| e.error.clone().unwrap())
        .collect();
    assert_eq!(errors.first().map(String::as_str), Some("error 50"));
    assert_eq!(errors.last().map(String::as_str), Some("error 1"));
    assert!(!errors.contains(&"error 0".to_string()));
}

#[test]
fn test_log_preserves_insertion_order() {
    let mut log = RequestLog::new();
    for i in 0..5 {
        log.append(entry(i));
    }

    let errors: Vec<_> = log
        .entries()
        .iter()
        .map(|e| e.error.clone().unwrap())
        .collect();
    assert_eq!(errors, vec!["error 4", "error 3", "error 2", "error 1", "error 0"]);
}

#[test]
fn test_daily_cost_accumulates_within_a_day() {
    let morning = Utc.with_ymd_and_hms(2026, 8, 20, 9, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2026, 8, 20, 21, 30, 0).unwrap();

    let mut counter = DailyCostCounter::default();
    counter.record(1.5, morning);
    counter.record(2.0, evening);

    assert!((counter.total() - 3.5).abs() < f64::EPSILON);
}

#[test]
fn test_daily_cost_resets_on_new_calendar_day() {
    let today = Utc.with_ymd_and_hms(2026, 8, 20, 23, 59, 0).unwrap();
    let tomorrow = Utc.with_ymd_and_hms(2026, 8, 21, 0, 1, 0).unwrap();

    let mut counter = DailyCostCounter::default();
    counter.record(1.5, today);
    counter.record(2.0, tomorrow);

    // Reset to the new day's value, not accumulated
    assert!((counter.total() - 2.0).abs() < f64::EPSILON);
}

#[test]
fn test_first_write_starts_fresh() {
    let now = Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap();
    let mut counter = DailyCostCounter::default();
    counter.record(0.75, now);
    assert!((counter.total() - 0.75).abs() < f64::EPSILON);
}
