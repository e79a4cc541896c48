// ABOUTME: Consecutive-day activity ledger persisted per user
// ABOUTME: Date-only granularity; transitions live in the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stored record of consecutive-day activity.
///
/// `streak` counts consecutive calendar days with at least one logged
/// activity; `last_activity_date` has date-only granularity. The transition
/// rules (increment from yesterday, reset otherwise) are pure functions in
/// the intelligence crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLedger {
    /// Consecutive active days
    pub streak: u32,
    /// Calendar date of the most recent activity, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_activity_date: Option<NaiveDate>,
}
