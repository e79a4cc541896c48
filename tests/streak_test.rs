// ABOUTME: Integration tests for the consecutive-day activity streak
// ABOUTME: Increment, reset, idempotence and load-time reconciliation scenarios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

use chrono::NaiveDate;
use glucoviva::intelligence::streak::{display_streak, log_activity};
use glucoviva::models::ActivityLedger;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn activity_the_day_after_extends_the_streak_by_one() {
    let ledger = ActivityLedger {
        streak: 5,
        last_activity_date: Some(date(2026, 8, 4)),
    };
    let updated = log_activity(&ledger, date(2026, 8, 5));
    assert_eq!(updated.streak, 6);
    assert_eq!(updated.last_activity_date, Some(date(2026, 8, 5)));
}

#[test]
fn activity_after_a_gap_restarts_at_one() {
    let ledger = ActivityLedger {
        streak: 5,
        last_activity_date: Some(date(2026, 8, 3)),
    };
    assert_eq!(log_activity(&ledger, date(2026, 8, 5)).streak, 1);
}

#[test]
fn second_activity_on_the_same_day_changes_nothing() {
    let first = log_activity(&ActivityLedger::default(), date(2026, 8, 5));
    let second = log_activity(&first, date(2026, 8, 5));
    assert_eq!(second, first);
}

#[test]
fn reconciliation_shows_zero_after_a_gap_without_logging() {
    let ledger = ActivityLedger {
        streak: 12,
        last_activity_date: Some(date(2026, 8, 1)),
    };
    assert_eq!(display_streak(&ledger, date(2026, 8, 5)), 0);
    // The pure function leaves the ledger untouched.
    assert_eq!(ledger.streak, 12);
}

#[test]
fn reconciliation_keeps_a_streak_from_today_or_yesterday() {
    let ledger = ActivityLedger {
        streak: 3,
        last_activity_date: Some(date(2026, 8, 4)),
    };
    assert_eq!(display_streak(&ledger, date(2026, 8, 4)), 3);
    assert_eq!(display_streak(&ledger, date(2026, 8, 5)), 3);
}

#[test]
fn a_full_week_of_daily_activity_counts_seven() {
    let mut ledger = ActivityLedger::default();
    for day in 1..=7 {
        ledger = log_activity(&ledger, date(2026, 8, day));
    }
    assert_eq!(ledger.streak, 7);
}
