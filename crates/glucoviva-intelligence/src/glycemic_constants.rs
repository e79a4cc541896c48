// ABOUTME: Named constants for the glycemic scoring and goal progress engine
// ABOUTME: Band thresholds, category multipliers and window defaults in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! Constants used throughout the scoring and goal engine.
//!
//! Grouped by domain so each threshold has one authoritative definition.

/// Glucose excursion bands and the score sub-range each maps to.
///
/// Band lower bounds are inclusive: a spike of exactly 30, 50 or 80 mg/dL
/// falls into the next (lower-scoring) band.
pub mod spike {
    use std::ops::RangeInclusive;

    /// Excursions below this stay in the mild band (mg/dL)
    pub const MILD_SPIKE_MAX: f64 = 30.0;
    /// Excursions below this stay in the moderate band (mg/dL)
    pub const MODERATE_SPIKE_MAX: f64 = 50.0;
    /// Excursions below this stay in the high band (mg/dL)
    pub const HIGH_SPIKE_MAX: f64 = 80.0;

    /// Score range rewarded for a mild excursion
    pub const MILD_SCORE_RANGE: RangeInclusive<u8> = 90..=99;
    /// Score range for a moderate excursion
    pub const MODERATE_SCORE_RANGE: RangeInclusive<u8> = 70..=89;
    /// Score range for a high excursion
    pub const HIGH_SCORE_RANGE: RangeInclusive<u8> = 40..=69;
    /// Score range for a severe excursion
    pub const SEVERE_SCORE_RANGE: RangeInclusive<u8> = 0..=39;
}

/// Carbohydrate penalty multipliers per glycemic index category
pub mod multipliers {
    /// Penalty per gram of carbohydrate for a high glycemic index
    pub const HIGH_GI: f64 = 1.5;
    /// Penalty per gram of carbohydrate for a medium glycemic index
    pub const MEDIUM_GI: f64 = 1.0;
    /// Penalty per gram of carbohydrate for a low glycemic index
    pub const LOW_GI: f64 = 0.5;
}

/// Goal window and progress accounting
pub mod goal {
    /// Average score assumed for a user with no logged meals yet
    pub const DEFAULT_INITIAL_AVG_SCORE: i32 = 75;
    /// Progress is reported as a percentage capped here
    pub const MAX_PROGRESS_PERCENTAGE: f64 = 100.0;
    /// Milliseconds in a calendar day, for remaining-days arithmetic
    pub const MILLIS_PER_DAY: f64 = 86_400_000.0;
}

/// Trend series requirements
pub mod trend {
    /// A single data point is not informative; require at least this many
    pub const MIN_TREND_MEALS: usize = 2;
}

/// Bounds of the score scale itself
pub mod score {
    /// Lowest representable glycemic score
    pub const MIN_SCORE: u8 = 0;
    /// Highest representable glycemic score
    pub const MAX_SCORE: u8 = 100;
}
