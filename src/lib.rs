// ABOUTME: Main library entry point for the GlucoViva tracking engine
// ABOUTME: Boundary collaborators (storage, advice) and the meal logbook orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

#![deny(unsafe_code)]

//! # GlucoViva
//!
//! Goal progress and glycemic scoring engine for a nutrition tracking
//! application. Users photograph meals, receive AI-estimated nutrition and a
//! derived glycemic score, log glucose readings, set score-reduction goals
//! and keep a daily activity streak; this crate implements the numeric core
//! plus its boundary collaborators.
//!
//! ## Architecture
//!
//! - **`glucoviva-core`**: data models and the unified error system
//! - **`glucoviva-intelligence`**: pure scoring / goal / trend / streak engine
//! - **this crate**: storage and LLM boundaries, configuration, logging, and
//!   the [`logbook::MealLogbook`] service that drives the flows
//!
//! All engine computations take an explicit `now` and (where relevant) an
//! injected randomness source; nothing in the core reads ambient state.
//!
//! ## Example
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use glucoviva::logbook::MealLogbook;
//! use glucoviva::models::{GlycemicIndex, MealAnalysis, TrackingProgram};
//! use glucoviva::storage::MemoryStorage;
//!
//! #[tokio::main]
//! async fn main() {
//!     let logbook = MealLogbook::new(MemoryStorage::new());
//!     let analysis = MealAnalysis {
//!         name: "Lentil salad".into(),
//!         carbohydrates: 32.0,
//!         protein: Some(14.0),
//!         fats: Some(9.0),
//!         fiber: Some(8.0),
//!         glycemic_index: GlycemicIndex::Low,
//!         advice: "Rich in fiber.".into(),
//!         ingredients: None,
//!     };
//!     let meal = logbook
//!         .save_meal(analysis, None, TrackingProgram::Prevention, Utc::now())
//!         .await;
//!     println!("scored {}", meal.glycemic_score);
//! }
//! ```

/// Environment-only configuration for the advice provider
pub mod config;

/// Application constants (storage key schema, advice defaults)
pub mod constants;

/// Scoring, goal, trend and streak engine re-exports
pub mod intelligence;

/// LLM advice provider boundary (trait, Gemini implementation, prompts)
pub mod llm;

/// Meal logbook orchestration over storage, scoring and advice
pub mod logbook;

/// Logging configuration and structured logging setup
pub mod logging;

/// Key-value storage boundary with pluggable backends
pub mod storage;

pub use glucoviva_core::errors;
pub use glucoviva_core::models;
