// ABOUTME: Core types for the GlucoViva glycemic tracking engine
// ABOUTME: Foundation crate with data models and unified error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

#![deny(unsafe_code)]

//! # GlucoViva Core
//!
//! Foundation crate providing shared types for the GlucoViva glycemic
//! tracking engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **models**: Core data models (`Meal`, `Goal`, `GlucoseReading`, `ActivityLedger`)

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (`Meal`, `Goal`, `GlucoseReading`, streak ledger, user program)
pub mod models;
