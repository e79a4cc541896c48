// ABOUTME: Tracking program selected by the user, fed into advice prompts
// ABOUTME: Identity and profile management are external collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

use std::fmt;

use serde::{Deserialize, Serialize};

/// The tracking program a user follows.
///
/// Only the engine-relevant slice of the user profile: the program label is
/// interpolated into personalized-advice prompts. Everything else about the
/// user lives with the external identity provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingProgram {
    /// Prediabetes prevention
    #[default]
    Prevention,
    /// Active diabetes management
    DiabetesManagement,
    /// General health optimization
    HealthOptimization,
}

impl TrackingProgram {
    /// Human-readable program label used in prompts
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Prevention => "Prevention",
            Self::DiabetesManagement => "Diabetes Management",
            Self::HealthOptimization => "Health Optimization",
        }
    }
}

impl fmt::Display for TrackingProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
