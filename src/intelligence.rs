// ABOUTME: Intelligence module re-exports from the glucoviva-intelligence crate
// ABOUTME: Preserves crate-local import paths while delegating to the extracted crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! # Intelligence Module
//!
//! Scoring, goal progress, trend and streak computations. This module
//! re-exports the `glucoviva-intelligence` crate so callers can use
//! `glucoviva::intelligence::...` paths.

pub use glucoviva_intelligence::*;

pub use glucoviva_intelligence::{glycemic_constants, goal_engine, scoring, streak, trend};
