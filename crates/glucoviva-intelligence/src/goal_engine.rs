// ABOUTME: Goal progress engine over the rolling average of glycemic scores
// ABOUTME: Window expiry, reduction accounting, completion detection and state machine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! Goal tracking and progress computation.
//!
//! A goal asks for the rolling average glycemic score to drop by
//! `target_reduction` points within a calendar-day window. Progress is the
//! share of that drop achieved so far; the window, once past, is terminal
//! even if the target was met at some unobserved instant before expiry.
//!
//! The reduction sign convention is kept exactly as the product defines it:
//! a *negative* reduction (average moved down) accrues progress and
//! completes the goal at `reduction <= -target`, while an average moving up
//! contributes zero progress. See the sign-convention test below.

#![allow(clippy::cast_precision_loss)] // score sums stay far below 2^52

use chrono::{DateTime, Utc};
use glucoviva_core::models::{Goal, Meal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::glycemic_constants::goal::{
    DEFAULT_INITIAL_AVG_SCORE, MAX_PROGRESS_PERCENTAGE, MILLIS_PER_DAY,
};

/// Progress metrics for a goal still inside its window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Current rolling average minus the initial snapshot (negative = the
    /// average dropped, which counts toward the target)
    pub reduction: f64,
    /// Share of the target reduction achieved, clamped to `0..=100`
    pub progress_percentage: f64,
    /// Calendar days left in the window, rounded up
    pub days_remaining: i64,
    /// Whether the average has dropped by at least the target magnitude
    pub is_completed: bool,
    /// Rounded rolling average over meals since the window opened
    pub current_avg_score: i32,
}

/// Outcome of a progress computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GoalProgress {
    /// The window has closed; terminal, no further accrual
    Expired,
    /// The window is open and progress accrues
    Active(ProgressReport),
}

impl GoalProgress {
    /// Whether this goal window has closed
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }

    /// The progress report, when the window is still open
    #[must_use]
    pub const fn report(&self) -> Option<&ProgressReport> {
        match self {
            Self::Expired => None,
            Self::Active(report) => Some(report),
        }
    }
}

/// Display state of a goal: `NoGoal -> Active -> {Completed | Expired}`.
///
/// `Completed` keeps reflecting average updates; only `Expired` stops
/// accrual entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalState {
    /// Window open, target not yet met
    Active,
    /// Target met inside the window
    Completed,
    /// Window closed without an observed completion
    Expired,
}

/// Rounded average score across `meals`, or the default snapshot when the
/// log is empty. Used to fix `initial_avg_score` at goal creation.
#[must_use]
pub fn initial_average_score(meals: &[Meal]) -> i32 {
    if meals.is_empty() {
        return DEFAULT_INITIAL_AVG_SCORE;
    }
    let sum: u64 = meals.iter().map(|m| u64::from(m.glycemic_score)).sum();
    (sum as f64 / meals.len() as f64).round() as i32
}

/// Compute progress for `goal` against the meal log at instant `now`.
///
/// Expiry is checked first and is strictly-after: one millisecond past the
/// window end is already [`GoalProgress::Expired`]. Inside the window, the
/// rolling average falls back to the goal's initial snapshot when no meal
/// has been logged since the start (no progress yet, not an error), and a
/// zero `target_reduction` reports zero progress rather than dividing.
#[must_use]
pub fn compute_progress(goal: &Goal, meals: &[Meal], now: DateTime<Utc>) -> GoalProgress {
    let end_date = goal.end_date();
    if now > end_date {
        debug!(goal_id = %goal.id, "goal window closed");
        return GoalProgress::Expired;
    }

    let since_start: Vec<&Meal> = meals
        .iter()
        .filter(|m| m.timestamp >= goal.start_date)
        .collect();

    let current_avg_score = if since_start.is_empty() {
        f64::from(goal.initial_avg_score)
    } else {
        let sum: u64 = since_start.iter().map(|m| u64::from(m.glycemic_score)).sum();
        sum as f64 / since_start.len() as f64
    };

    let reduction = current_avg_score - f64::from(goal.initial_avg_score);
    let target = f64::from(goal.target_reduction);

    // Only an actual drop in the average counts toward the target.
    let progress_percentage = if goal.target_reduction > 0 {
        (reduction.min(0.0).abs() / target * MAX_PROGRESS_PERCENTAGE)
            .clamp(0.0, MAX_PROGRESS_PERCENTAGE)
    } else {
        0.0
    };

    let millis_remaining = (end_date - now).num_milliseconds() as f64;
    let days_remaining = (millis_remaining / MILLIS_PER_DAY).ceil() as i64;

    let is_completed = reduction <= -target;

    GoalProgress::Active(ProgressReport {
        reduction,
        progress_percentage,
        days_remaining,
        is_completed,
        current_avg_score: current_avg_score.round() as i32,
    })
}

/// Derive the display state for `goal` at instant `now`
#[must_use]
pub fn goal_state(goal: &Goal, meals: &[Meal], now: DateTime<Utc>) -> GoalState {
    match compute_progress(goal, meals, now) {
        GoalProgress::Expired => GoalState::Expired,
        GoalProgress::Active(report) => {
            if report.is_completed {
                GoalState::Completed
            } else {
                GoalState::Active
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use glucoviva_core::models::GlycemicIndex;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).single().expect("valid date")
    }

    fn goal(target: u32, initial: i32) -> Goal {
        Goal {
            id: start().to_rfc3339(),
            target_reduction: target,
            duration_days: 30,
            start_date: start(),
            initial_avg_score: initial,
        }
    }

    fn meal_at(offset_hours: i64, score: u8) -> Meal {
        let timestamp = start() + Duration::hours(offset_hours);
        Meal {
            id: timestamp.to_rfc3339(),
            timestamp,
            name: "test meal".into(),
            carbohydrates: 30.0,
            protein: None,
            fats: None,
            fiber: None,
            glycemic_index: GlycemicIndex::Medium,
            glycemic_score: score,
            advice: String::new(),
            ingredients: None,
            personalized_advice: None,
            pre_meal_glucose: None,
            post_meal_glucose: None,
        }
    }

    #[test]
    fn completion_at_target_magnitude() {
        // Average 68 against an initial 80 is a reduction of -12.
        let meals = vec![meal_at(1, 68), meal_at(2, 68)];
        let progress = compute_progress(&goal(10, 80), &meals, start() + Duration::days(5));
        let report = progress.report().expect("active window");
        assert!((report.reduction - (-12.0)).abs() < f64::EPSILON);
        assert!(report.is_completed);
        assert!((report.progress_percentage - 100.0).abs() < f64::EPSILON);
        assert_eq!(report.current_avg_score, 68);
    }

    #[test]
    fn partial_progress_below_target() {
        let meals = vec![meal_at(1, 72), meal_at(2, 72)];
        let progress = compute_progress(&goal(10, 80), &meals, start() + Duration::days(5));
        let report = progress.report().expect("active window");
        assert!((report.reduction - (-8.0)).abs() < f64::EPSILON);
        assert!(!report.is_completed);
        assert!((report.progress_percentage - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn exact_target_counts_as_completed() {
        let meals = vec![meal_at(1, 70)];
        let progress = compute_progress(&goal(10, 80), &meals, start() + Duration::days(5));
        let report = progress.report().expect("active window");
        assert!(report.is_completed);
    }

    // The product counts a *drop* in the average as progress even though the
    // UI frames higher scores as better. The comparison below pins that
    // literal convention; flipping the sign is a behavior change, not a fix.
    #[test]
    fn rising_average_accrues_zero_progress() {
        let meals = vec![meal_at(1, 95), meal_at(2, 95)];
        let progress = compute_progress(&goal(10, 80), &meals, start() + Duration::days(5));
        let report = progress.report().expect("active window");
        assert!(report.reduction > 0.0);
        assert!((report.progress_percentage - 0.0).abs() < f64::EPSILON);
        assert!(!report.is_completed);
    }

    #[test]
    fn expires_one_millisecond_past_window_end() {
        let g = goal(10, 80);
        let end = g.end_date();
        let meals = vec![meal_at(1, 60)];

        assert!(!compute_progress(&g, &meals, end).is_expired());
        assert!(compute_progress(&g, &meals, end + Duration::milliseconds(1)).is_expired());
    }

    #[test]
    fn no_meals_falls_back_to_initial_snapshot() {
        let progress = compute_progress(&goal(10, 80), &[], start() + Duration::days(3));
        let report = progress.report().expect("active window");
        assert!((report.reduction - 0.0).abs() < f64::EPSILON);
        assert_eq!(report.current_avg_score, 80);
        assert!(!report.is_completed);
    }

    #[test]
    fn meals_before_window_are_ignored() {
        let meals = vec![meal_at(-48, 10), meal_at(1, 80)];
        let progress = compute_progress(&goal(10, 80), &meals, start() + Duration::days(3));
        let report = progress.report().expect("active window");
        assert_eq!(report.current_avg_score, 80);
    }

    #[test]
    fn zero_target_reports_zero_progress() {
        let meals = vec![meal_at(1, 40)];
        let progress = compute_progress(&goal(0, 80), &meals, start() + Duration::days(3));
        let report = progress.report().expect("active window");
        assert!((report.progress_percentage - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn days_remaining_rounds_up() {
        let g = goal(10, 80);
        let now = start() + Duration::days(29) + Duration::hours(1);
        let report = compute_progress(&g, &[], now).report().expect("active window").clone();
        assert_eq!(report.days_remaining, 1);

        let report = compute_progress(&g, &[], start()).report().expect("active window").clone();
        assert_eq!(report.days_remaining, 30);
    }

    #[test]
    fn computation_is_idempotent() {
        let meals = vec![meal_at(1, 72), meal_at(30, 64)];
        let g = goal(10, 80);
        let now = start() + Duration::days(4);
        assert_eq!(compute_progress(&g, &meals, now), compute_progress(&g, &meals, now));
    }

    #[test]
    fn state_machine_transitions() {
        let g = goal(10, 80);
        let now = start() + Duration::days(2);

        assert_eq!(goal_state(&g, &[meal_at(1, 75)], now), GoalState::Active);
        assert_eq!(goal_state(&g, &[meal_at(1, 65)], now), GoalState::Completed);
        assert_eq!(
            goal_state(&g, &[meal_at(1, 65)], g.end_date() + Duration::seconds(1)),
            GoalState::Expired
        );
    }

    #[test]
    fn initial_average_defaults_without_meals() {
        assert_eq!(initial_average_score(&[]), 75);
        assert_eq!(initial_average_score(&[meal_at(0, 60), meal_at(1, 71)]), 66);
    }
}
