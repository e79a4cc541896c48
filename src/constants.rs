// ABOUTME: Application constants organized by domain
// ABOUTME: Storage key schema, advice defaults and service identity in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! Constants module.
//!
//! Constants are grouped into logical domains rather than one large file.

/// Key schema of the key-value storage collaborator.
///
/// Values are JSON strings; (de)serialization is the logbook's job, the
/// backend only moves opaque strings.
pub mod storage_keys {
    /// Append-only meal log (`Vec<Meal>`)
    pub const MEALS_LOG: &str = "meals-log";
    /// Manually logged glucose readings (`Vec<GlucoseReading>`)
    pub const READINGS_LOG: &str = "readings-log";
    /// The single active goal (`Goal`), absent when none is set
    pub const ACTIVE_GOAL: &str = "active-goal";
    /// Consecutive-day activity ledger (`ActivityLedger`)
    pub const ACTIVITY_LEDGER: &str = "activity-ledger";
    /// Unlocked achievement ids, written by the achievements layer
    pub const ACHIEVEMENTS_UNLOCKED: &str = "achievements-unlocked";
}

/// Personalized-advice generation defaults
pub mod advice {
    /// The save path races the provider against this timeout and degrades to
    /// an empty advice string when it fires
    pub const DEFAULT_TIMEOUT_SECS: u64 = 9;
    /// Default text-generation model
    pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
}

/// Service identity for structured logging
pub mod service_names {
    /// This service
    pub const GLUCOVIVA: &str = "glucoviva";
}
