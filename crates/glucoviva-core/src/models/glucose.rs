// ABOUTME: Standalone glucose reading log entry and pre/post measurement pair
// ABOUTME: A pair only refines scoring when the post-meal value exceeds the pre-meal value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A manually logged blood glucose reading in mg/dL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlucoseReading {
    /// Creation-timestamp-derived identifier
    pub id: String,
    /// Instant the reading was logged
    pub timestamp: DateTime<Utc>,
    /// Reading value in mg/dL
    pub value: f64,
}

/// Pre/post-meal glucose measurements attached to a meal save
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GlucosePair {
    /// Reading taken before the meal, mg/dL
    pub pre_meal: f64,
    /// Reading taken after the meal, mg/dL
    pub post_meal: f64,
}

impl GlucosePair {
    /// Magnitude of the excursion, mg/dL
    #[must_use]
    pub fn spike(&self) -> f64 {
        self.post_meal - self.pre_meal
    }

    /// Whether this pair qualifies for spike-mode scoring: both values
    /// finite and the post-meal reading strictly above the pre-meal one.
    #[must_use]
    pub fn is_spike(&self) -> bool {
        self.pre_meal.is_finite() && self.post_meal.is_finite() && self.post_meal > self.pre_meal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spike_requires_post_above_pre() {
        let rising = GlucosePair {
            pre_meal: 90.0,
            post_meal: 110.0,
        };
        assert!(rising.is_spike());
        assert!((rising.spike() - 20.0).abs() < f64::EPSILON);

        let flat = GlucosePair {
            pre_meal: 100.0,
            post_meal: 100.0,
        };
        assert!(!flat.is_spike());

        let falling = GlucosePair {
            pre_meal: 120.0,
            post_meal: 100.0,
        };
        assert!(!falling.is_spike());
    }

    #[test]
    fn non_finite_readings_never_qualify() {
        let malformed = GlucosePair {
            pre_meal: f64::NAN,
            post_meal: 120.0,
        };
        assert!(!malformed.is_spike());
    }
}
