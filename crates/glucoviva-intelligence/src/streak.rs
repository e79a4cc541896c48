// ABOUTME: Consecutive-day activity streak transitions at calendar-date granularity
// ABOUTME: Pure state transitions; persistence of the ledger is the caller's job
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! Activity streak logic.
//!
//! The ledger tracks consecutive calendar days with at least one logged
//! activity, independent of any goal. Re-logging on the same day is
//! idempotent; activity the day after the last one extends the streak; any
//! larger gap restarts it at one.

use chrono::{Days, NaiveDate};
use glucoviva_core::models::ActivityLedger;

fn day_before(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(1))
}

/// Record an activity on `today` and return the updated ledger.
///
/// The returned ledger always carries `last_activity_date = today`.
#[must_use]
pub fn log_activity(ledger: &ActivityLedger, today: NaiveDate) -> ActivityLedger {
    let streak = match ledger.last_activity_date {
        Some(last) if last == today => ledger.streak,
        Some(last) if Some(last) == day_before(today) => ledger.streak + 1,
        _ => 1,
    };
    ActivityLedger {
        streak,
        last_activity_date: Some(today),
    }
}

/// Streak to display at load time, without recording activity.
///
/// A stored streak stays valid while the last activity was today or
/// yesterday; otherwise the displayed streak is zero. The stored ledger is
/// not modified here; callers decide whether to persist the reconciled
/// value.
#[must_use]
pub fn display_streak(ledger: &ActivityLedger, today: NaiveDate) -> u32 {
    match ledger.last_activity_date {
        Some(last) if last == today || Some(last) == day_before(today) => ledger.streak,
        _ => 0,
    }
}
