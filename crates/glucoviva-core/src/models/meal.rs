// ABOUTME: Meal entity and glycemic index category with lossy localized parsing
// ABOUTME: Meals are created once at save time and never rescored retroactively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Coarse classification of a meal's carbohydrate impact speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlycemicIndex {
    /// Slow carbohydrate impact
    Low,
    /// Moderate carbohydrate impact
    Medium,
    /// Fast carbohydrate impact
    High,
}

impl GlycemicIndex {
    /// Parse a category from the closed set of known spellings.
    ///
    /// Accepts English and legacy localized French spellings, case
    /// insensitively. Unrecognized input maps to [`Self::Low`], the mildest
    /// multiplier, so a garbled category can never inflate a penalty.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "high" | "élevé" => Self::High,
            "medium" | "moyen" => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Canonical lowercase English spelling
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for GlycemicIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Serialized as the canonical English spelling; deserialization accepts the
// legacy localized spellings still present in older stored logs.
impl Serialize for GlycemicIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GlycemicIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_str_lossy(&raw))
    }
}

/// A logged meal with its AI-estimated nutrition and computed glycemic score.
///
/// Created once at save time; the score is never recomputed retroactively.
/// Lifetime ends with explicit deletion from the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Creation-timestamp-derived identifier, monotonic per save
    pub id: String,
    /// Instant of creation
    pub timestamp: DateTime<Utc>,
    /// Dish name from the analysis
    pub name: String,
    /// Carbohydrates in grams
    pub carbohydrates: f64,
    /// Protein in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Fats in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fats: Option<f64>,
    /// Fiber in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    /// Glycemic index category
    pub glycemic_index: GlycemicIndex,
    /// Glycemic score, 0-100, fixed at save time
    pub glycemic_score: u8,
    /// Generic nutritional tip returned by the meal analysis
    pub advice: String,
    /// Main ingredients identified by the analysis
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Personalized advice text, opaque to the engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personalized_advice: Option<String>,
    /// Pre-meal glucose reading in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_meal_glucose: Option<f64>,
    /// Post-meal glucose reading in mg/dL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_meal_glucose: Option<f64>,
}

/// Parsed output of the external meal analysis, before a meal is saved.
///
/// This is the shape the AI collaborator hands back; the engine treats the
/// advice text as opaque and normalizes only the glycemic index category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealAnalysis {
    /// Dish name
    pub name: String,
    /// Carbohydrates in grams
    pub carbohydrates: f64,
    /// Protein in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    /// Fats in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fats: Option<f64>,
    /// Fiber in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    /// Glycemic index category as reported, normalized lossily
    pub glycemic_index: GlycemicIndex,
    /// Generic nutritional tip
    pub advice: String,
    /// Main ingredients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_spellings_case_insensitively() {
        assert_eq!(GlycemicIndex::from_str_lossy("high"), GlycemicIndex::High);
        assert_eq!(GlycemicIndex::from_str_lossy("Élevé"), GlycemicIndex::High);
        assert_eq!(GlycemicIndex::from_str_lossy("MOYEN"), GlycemicIndex::Medium);
        assert_eq!(GlycemicIndex::from_str_lossy("Medium"), GlycemicIndex::Medium);
        assert_eq!(GlycemicIndex::from_str_lossy("faible"), GlycemicIndex::Low);
        assert_eq!(GlycemicIndex::from_str_lossy("low"), GlycemicIndex::Low);
    }

    #[test]
    fn unrecognized_spelling_defaults_to_low() {
        assert_eq!(GlycemicIndex::from_str_lossy("banana"), GlycemicIndex::Low);
        assert_eq!(GlycemicIndex::from_str_lossy(""), GlycemicIndex::Low);
    }

    #[test]
    fn serde_accepts_legacy_french_and_emits_english() {
        let parsed: GlycemicIndex = serde_json::from_str("\"élevé\"").expect("deserialize");
        assert_eq!(parsed, GlycemicIndex::High);
        assert_eq!(
            serde_json::to_string(&parsed).expect("serialize"),
            "\"high\""
        );
    }
}
