// ABOUTME: Shared builders for integration tests
// ABOUTME: Fixed window start plus meal and goal constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

#![allow(dead_code)] // each test binary uses a subset of these helpers

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use glucoviva::models::{GlycemicIndex, Goal, Meal, MealAnalysis};

/// Fixed instant used as the goal window start in engine tests
pub fn window_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
        .single()
        .expect("valid date")
}

pub fn goal(target_reduction: u32, duration_days: u32, initial_avg_score: i32) -> Goal {
    Goal {
        id: window_start().to_rfc3339(),
        target_reduction,
        duration_days,
        start_date: window_start(),
        initial_avg_score,
    }
}

/// A meal `offset_hours` from the window start carrying a fixed score
pub fn meal_at(offset_hours: i64, score: u8) -> Meal {
    let timestamp = window_start() + TimeDelta::hours(offset_hours);
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

pub fn analysis(name: &str, carbs: f64, glycemic_index: GlycemicIndex) -> MealAnalysis {
    MealAnalysis {
        name: name.to_owned(),
        carbohydrates: carbs,
        protein: Some(10.0),
        fats: Some(8.0),
        fiber: Some(3.0),
        glycemic_index,
        advice: "Watch the portion size.".into(),
        ingredients: Some(vec!["ingredient".into()]),
    }
}
