// ABOUTME: Cumulative-average trend series over meals inside a goal window
// ABOUTME: Pure function of goal and meal log; fewer than two points yields nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! Trend series for goal progress visualization.
//!
//! Each point is the *cumulative* mean of glycemic scores from the window
//! start up to that meal, not a sliding window: the series shows the same
//! rolling average the goal engine tracks converging toward (or away from)
//! the target.

#![allow(clippy::cast_precision_loss)] // score sums stay far below 2^52

use glucoviva_core::models::{Goal, Meal};
use serde::{Deserialize, Serialize};

use crate::glycemic_constants::trend::MIN_TREND_MEALS;

/// One point of the cumulative-average series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// 1-based position of the meal within the goal window
    pub meal_index: usize,
    /// Rounded cumulative mean of scores up to and including this meal
    pub score: u8,
}

/// Build the cumulative-average series for `goal` from the meal log.
///
/// Meals logged before the window opened are excluded; the remainder are
/// ordered by timestamp. Fewer than two qualifying meals produce an empty
/// series.
#[must_use]
pub fn build_trend(goal: &Goal, meals: &[Meal]) -> Vec<TrendPoint> {
    let mut since_start: Vec<&Meal> = meals
        .iter()
        .filter(|m| m.timestamp >= goal.start_date)
        .collect();
    since_start.sort_by_key(|m| m.timestamp);

    if since_start.len() < MIN_TREND_MEALS {
        return Vec::new();
    }

    let mut running_sum: u64 = 0;
    since_start
        .iter()
        .enumerate()
        .map(|(i, meal)| {
            running_sum += u64::from(meal.glycemic_score);
            TrendPoint {
                meal_index: i + 1,
                score: (running_sum as f64 / (i + 1) as f64).round() as u8,
            }
        })
        .collect()
}
