// ABOUTME: Goal progress and glycemic scoring engine for GlucoViva
// ABOUTME: Pure synchronous computations over in-memory data with injected clock and RNG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

#![deny(unsafe_code)]

//! # GlucoViva Intelligence
//!
//! The numeric core of the tracker: converts meal macronutrients and optional
//! glucose excursions into 0-100 glycemic scores, tracks progress toward a
//! score-reduction goal over its calendar window, derives the cumulative
//! average trend series, and maintains the consecutive-day activity streak.
//!
//! Every entry point is a synchronous function over explicit inputs. Time
//! comes in as a parameter and randomness through an injected [`rand::Rng`],
//! so all behavior is reproducible under test.

/// Named constants for score bands, multipliers and window defaults
pub mod glycemic_constants;

/// Goal window expiry, rolling-average reduction and completion detection
pub mod goal_engine;

/// Glycemic score calculator (spike-banded and macro-only modes)
pub mod scoring;

/// Consecutive-day activity streak transitions
pub mod streak;

/// Cumulative-average trend series over the goal window
pub mod trend;

pub use goal_engine::{compute_progress, goal_state, GoalProgress, GoalState, ProgressReport};
pub use scoring::{macro_score, GlycemicScorer};
pub use trend::{build_trend, TrendPoint};
