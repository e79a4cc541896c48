// ABOUTME: Score-reduction goal entity with a fixed calendar-day window
// ABOUTME: Expiry is derived from start date and duration, never stored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A self-set score-reduction goal.
///
/// At most one goal is active at a time. The record is read-only after
/// creation; expiry is computed from `start_date + duration_days` against an
/// injected "now", never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Creation-timestamp-derived identifier
    pub id: String,
    /// Points the rolling average score should drop by
    pub target_reduction: u32,
    /// Window length in calendar days (UI offers 7/14/30, any positive value accepted)
    pub duration_days: u32,
    /// Instant the window opened, fixed at creation
    pub start_date: DateTime<Utc>,
    /// Rounded average score across all meals logged before the goal started
    pub initial_avg_score: i32,
}

impl Goal {
    /// Instant the goal window closes
    #[must_use]
    pub fn end_date(&self) -> DateTime<Utc> {
        self.start_date + Duration::days(i64::from(self.duration_days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn end_date_adds_calendar_days() {
        let goal = Goal {
            id: "2026-01-01T00:00:00Z".into(),
            target_reduction: 10,
            duration_days: 14,
            start_date: Utc.with_ymd_and_hms(2026, 1, 1, 8, 30, 0).single().expect("valid date"),
            initial_avg_score: 75,
        };
        assert_eq!(
            goal.end_date(),
            Utc.with_ymd_and_hms(2026, 1, 15, 8, 30, 0).single().expect("valid date")
        );
    }
}
