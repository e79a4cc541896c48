// ABOUTME: Seeds an in-memory store with a demo meal history and logs progress
// ABOUTME: End-to-end smoke of the save, goal, trend and streak flows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

use anyhow::Result;
use chrono::{TimeDelta, Utc};
use tracing::info;

use glucoviva::logbook::MealLogbook;
use glucoviva::logging::LoggingConfig;
use glucoviva::models::{GlucosePair, GlycemicIndex, MealAnalysis, TrackingProgram};
use glucoviva::storage::MemoryStorage;

fn analysis(name: &str, carbs: f64, gi: GlycemicIndex) -> MealAnalysis {
    MealAnalysis {
        name: name.to_owned(),
        carbohydrates: carbs,
        protein: Some(12.0),
        fats: Some(10.0),
        fiber: Some(4.0),
        glycemic_index: gi,
        advice: "Demo advice.".to_owned(),
        ingredients: None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    LoggingConfig::from_env().init()?;

    let logbook = MealLogbook::new(MemoryStorage::new());
    let now = Utc::now();
    let program = TrackingProgram::Prevention;

    // A week of meals before the goal, trending high-carb.
    let pre_goal = [
        ("Croissant breakfast", 55.0, GlycemicIndex::High),
        ("White rice bowl", 62.0, GlycemicIndex::High),
        ("Pasta carbonara", 58.0, GlycemicIndex::Medium),
    ];
    for (day, (name, carbs, gi)) in pre_goal.into_iter().enumerate() {
        let at = now - TimeDelta::days(7 - day as i64);
        logbook.save_meal(analysis(name, carbs, gi), None, program, at).await;
    }

    let goal = logbook.set_goal(10, 30, now - TimeDelta::days(4)).await;
    info!(initial_avg_score = goal.initial_avg_score, "demo goal created");

    // Post-goal meals, lower impact, one with a measured excursion.
    logbook
        .save_meal(
            analysis("Lentil salad", 30.0, GlycemicIndex::Low),
            None,
            program,
            now - TimeDelta::days(3),
        )
        .await;
    logbook
        .save_meal(
            analysis("Grilled salmon and greens", 18.0, GlycemicIndex::Low),
            Some(GlucosePair {
                pre_meal: 92.0,
                post_meal: 111.0,
            }),
            program,
            now - TimeDelta::days(1),
        )
        .await;
    logbook
        .save_meal(
            analysis("Vegetable omelette", 12.0, GlycemicIndex::Low),
            None,
            program,
            now,
        )
        .await;

    logbook.add_reading(98.0, now).await;

    if let Some(progress) = logbook.goal_progress(now).await {
        info!(?progress, "goal progress");
    }
    if let Some(state) = logbook.goal_state(now).await {
        info!(?state, "goal state");
    }
    for point in logbook.goal_trend().await {
        info!(meal_index = point.meal_index, score = point.score, "trend point");
    }
    let streak = logbook.reconcile_streak(now).await;
    info!(streak, "current streak");

    Ok(())
}
