// ABOUTME: Core data models for meals, goals, glucose readings and activity
// ABOUTME: Shapes match the JSON stored through the key-value storage boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! Core data models.
//!
//! These are the shapes that cross the storage boundary as JSON. Entities are
//! immutable once created (meals and goals are only ever appended, replaced
//! wholesale, or deleted), so the models carry no mutation helpers beyond
//! derived accessors.

mod activity;
mod glucose;
mod goal;
mod meal;
mod user;

pub use activity::ActivityLedger;
pub use glucose::{GlucosePair, GlucoseReading};
pub use goal::Goal;
pub use meal::{GlycemicIndex, Meal, MealAnalysis};
pub use user::TrackingProgram;
