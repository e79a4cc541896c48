// ABOUTME: Meal logbook orchestration over storage, scoring, advice and streaks
// ABOUTME: Every flow re-reads current state, computes, and writes back; no caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! # Meal Logbook
//!
//! [`MealLogbook`] drives the user-facing flows: saving an analyzed meal
//! (score, optional personalized advice, streak update), setting and reading
//! the active goal, logging glucose readings, and reconciling the activity
//! streak on load.
//!
//! Degradation policy: unreadable or unavailable stored state falls back to
//! the empty/default value with a warning, advice failures produce an empty
//! string, and write failures are logged — a wellness flow always completes
//! with something reasonable rather than surfacing an error to the user.
//! Single-writer discipline is the caller's responsibility; the logbook
//! never holds state between calls.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, warn};

use glucoviva_core::models::{
    ActivityLedger, GlucosePair, GlucoseReading, Goal, Meal, MealAnalysis, TrackingProgram,
};
use glucoviva_intelligence::goal_engine::{self, GoalProgress, GoalState};
use glucoviva_intelligence::scoring::GlycemicScorer;
use glucoviva_intelligence::streak;
use glucoviva_intelligence::trend::{build_trend, TrendPoint};

use crate::constants::{advice, storage_keys};
use crate::llm::{generate_with_timeout, prompts, AdviceProvider};
use crate::storage::StorageProvider;

/// Orchestrates the meal, goal, reading and streak flows over a storage
/// backend and an optional advice provider.
pub struct MealLogbook<S: StorageProvider> {
    store: S,
    advisor: Option<Arc<dyn AdviceProvider>>,
    scorer: Mutex<GlycemicScorer>,
    advice_timeout: Duration,
}

impl<S: StorageProvider> MealLogbook<S> {
    /// Logbook over `store` with no advice provider and an entropy-seeded
    /// scorer
    pub fn new(store: S) -> Self {
        Self {
            store,
            advisor: None,
            scorer: Mutex::new(GlycemicScorer::new()),
            advice_timeout: Duration::from_secs(advice::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Attach an advice provider for the spike-mode save path
    #[must_use]
    pub fn with_advisor(mut self, advisor: Arc<dyn AdviceProvider>) -> Self {
        self.advisor = Some(advisor);
        self
    }

    /// Override the advice race timeout
    #[must_use]
    pub fn with_advice_timeout(mut self, timeout: Duration) -> Self {
        self.advice_timeout = timeout;
        self
    }

    /// Replace the scorer, e.g. with a seeded one for reproducible draws
    #[must_use]
    pub fn with_scorer(self, scorer: GlycemicScorer) -> Self {
        Self {
            scorer: Mutex::new(scorer),
            ..self
        }
    }

    // ------------------------------------------------------------------
    // Meals
    // ------------------------------------------------------------------

    /// Save an analyzed meal.
    ///
    /// Scores the meal (spike mode when `glucose` qualifies: both readings
    /// finite and post above pre), requests personalized advice on the spike
    /// path only — timeout-protected, empty on failure — appends the meal to
    /// the log and records today's activity in the streak ledger.
    pub async fn save_meal(
        &self,
        analysis: MealAnalysis,
        glucose: Option<GlucosePair>,
        program: TrackingProgram,
        now: DateTime<Utc>,
    ) -> Meal {
        let mut meals: Vec<Meal> = self.read_or_default(storage_keys::MEALS_LOG).await;

        let timestamp = monotonic_timestamp(meals.last().map(|m| m.timestamp), now);
        let spike_pair = glucose.filter(GlucosePair::is_spike);

        let glycemic_score = {
            let mut scorer = self.scorer.lock().await;
            scorer.compute(
                analysis.carbohydrates,
                analysis.glycemic_index,
                spike_pair.map(|pair| pair.spike()),
            )
        };

        let mut meal = Meal {
            id: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            timestamp,
            name: analysis.name,
            carbohydrates: analysis.carbohydrates,
            protein: analysis.protein,
            fats: analysis.fats,
            fiber: analysis.fiber,
            glycemic_index: analysis.glycemic_index,
            glycemic_score,
            advice: analysis.advice,
            ingredients: analysis.ingredients,
            personalized_advice: None,
            pre_meal_glucose: spike_pair.map(|pair| pair.pre_meal),
            post_meal_glucose: spike_pair.map(|pair| pair.post_meal),
        };

        if let (Some(pair), Some(advisor)) = (spike_pair, self.advisor.as_deref()) {
            let prompt = prompts::personalized_advice_prompt(program, &meal, &pair);
            let advice_text =
                generate_with_timeout(advisor, &prompt, self.advice_timeout).await;
            meal.personalized_advice = Some(advice_text);
        }

        info!(
            meal_id = %meal.id,
            score = meal.glycemic_score,
            spike_mode = spike_pair.is_some(),
            "meal saved"
        );

        meals.push(meal.clone());
        self.write_json(storage_keys::MEALS_LOG, &meals).await;
        self.log_activity(now).await;
        meal
    }

    /// The full meal log, oldest first
    pub async fn meals(&self) -> Vec<Meal> {
        self.read_or_default(storage_keys::MEALS_LOG).await
    }

    /// Delete one meal from the log; returns whether anything was removed
    pub async fn delete_meal(&self, id: &str) -> bool {
        let mut meals: Vec<Meal> = self.read_or_default(storage_keys::MEALS_LOG).await;
        let before = meals.len();
        meals.retain(|m| m.id != id);
        let removed = meals.len() != before;
        if removed {
            self.write_json(storage_keys::MEALS_LOG, &meals).await;
        }
        removed
    }

    // ------------------------------------------------------------------
    // Goals
    // ------------------------------------------------------------------

    /// Create the active goal, snapshotting the current average score.
    ///
    /// The snapshot is the rounded mean over every meal logged so far, or
    /// the default starting score for an empty log. Setting a goal replaces
    /// any previous one.
    pub async fn set_goal(
        &self,
        target_reduction: u32,
        duration_days: u32,
        now: DateTime<Utc>,
    ) -> Goal {
        let meals: Vec<Meal> = self.read_or_default(storage_keys::MEALS_LOG).await;
        let goal = Goal {
            id: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            target_reduction,
            duration_days,
            start_date: now,
            initial_avg_score: goal_engine::initial_average_score(&meals),
        };
        info!(
            goal_id = %goal.id,
            target_reduction,
            duration_days,
            initial_avg_score = goal.initial_avg_score,
            "goal set"
        );
        self.write_json(storage_keys::ACTIVE_GOAL, &goal).await;
        goal
    }

    /// The active goal, if one is stored
    pub async fn active_goal(&self) -> Option<Goal> {
        self.read_or_default(storage_keys::ACTIVE_GOAL).await
    }

    /// Abandon the active goal
    pub async fn abandon_goal(&self) {
        if let Err(err) = self.store.remove(storage_keys::ACTIVE_GOAL).await {
            warn!(error = %err, "failed to remove active goal");
        }
    }

    /// Progress of the active goal at instant `now`, or `None` without one
    pub async fn goal_progress(&self, now: DateTime<Utc>) -> Option<GoalProgress> {
        let goal = self.active_goal().await?;
        let meals: Vec<Meal> = self.read_or_default(storage_keys::MEALS_LOG).await;
        Some(goal_engine::compute_progress(&goal, &meals, now))
    }

    /// Display state of the active goal at instant `now`
    pub async fn goal_state(&self, now: DateTime<Utc>) -> Option<GoalState> {
        let goal = self.active_goal().await?;
        let meals: Vec<Meal> = self.read_or_default(storage_keys::MEALS_LOG).await;
        Some(goal_engine::goal_state(&goal, &meals, now))
    }

    /// Cumulative-average trend series for the active goal window
    pub async fn goal_trend(&self) -> Vec<TrendPoint> {
        let Some(goal) = self.active_goal().await else {
            return Vec::new();
        };
        let meals: Vec<Meal> = self.read_or_default(storage_keys::MEALS_LOG).await;
        build_trend(&goal, &meals)
    }

    // ------------------------------------------------------------------
    // Glucose readings
    // ------------------------------------------------------------------

    /// Log a standalone glucose reading
    pub async fn add_reading(&self, value: f64, now: DateTime<Utc>) -> GlucoseReading {
        let mut readings: Vec<GlucoseReading> =
            self.read_or_default(storage_keys::READINGS_LOG).await;
        let timestamp = monotonic_timestamp(readings.last().map(|r| r.timestamp), now);
        let reading = GlucoseReading {
            id: timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            timestamp,
            value,
        };
        readings.push(reading.clone());
        self.write_json(storage_keys::READINGS_LOG, &readings).await;
        reading
    }

    /// All logged glucose readings, oldest first
    pub async fn readings(&self) -> Vec<GlucoseReading> {
        self.read_or_default(storage_keys::READINGS_LOG).await
    }

    // ------------------------------------------------------------------
    // Activity streak
    // ------------------------------------------------------------------

    /// Record activity for the calendar day of `now`; returns the streak
    pub async fn log_activity(&self, now: DateTime<Utc>) -> u32 {
        let ledger: ActivityLedger = self.read_or_default(storage_keys::ACTIVITY_LEDGER).await;
        let updated = streak::log_activity(&ledger, now.date_naive());
        self.write_json(storage_keys::ACTIVITY_LEDGER, &updated).await;
        updated.streak
    }

    /// Streak to display at load time.
    ///
    /// When the stored streak is no longer valid (last activity before
    /// yesterday) the reconciled ledger is persisted immediately, so a later
    /// raw read never disagrees with what the user was shown.
    pub async fn reconcile_streak(&self, now: DateTime<Utc>) -> u32 {
        let ledger: ActivityLedger = self.read_or_default(storage_keys::ACTIVITY_LEDGER).await;
        let display = streak::display_streak(&ledger, now.date_naive());
        if display != ledger.streak {
            let reconciled = ActivityLedger {
                streak: display,
                last_activity_date: ledger.last_activity_date,
            };
            self.write_json(storage_keys::ACTIVITY_LEDGER, &reconciled)
                .await;
        }
        display
    }

    // ------------------------------------------------------------------
    // Storage helpers
    // ------------------------------------------------------------------

    async fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.store.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!(key, error = %err, "stored value unreadable, using default");
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(err) => {
                warn!(key, error = %err, "storage read failed, using default");
                T::default()
            }
        }
    }

    async fn write_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => {
                if let Err(err) = self.store.set(key, &raw).await {
                    warn!(key, error = %err, "storage write failed");
                }
            }
            Err(err) => warn!(key, error = %err, "value serialization failed"),
        }
    }
}

/// Creation timestamps derive the entity id, so two saves inside the same
/// instant nudge the second one forward a millisecond to stay monotonic.
fn monotonic_timestamp(last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match last {
        Some(prev) if prev >= now => prev + TimeDelta::milliseconds(1),
        _ => now,
    }
}
