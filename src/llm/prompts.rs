// ABOUTME: Prompt builders for personalized advice generation
// ABOUTME: Interpolates the tracking program, meal macros and glucose excursion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! # Advice Prompts
//!
//! Builds the structured prompt handed to the advice collaborator on the
//! spike-mode save path. The returned advice text is stored verbatim on the
//! meal; the engine never parses it.

use glucoviva_core::models::{GlucosePair, Meal, TrackingProgram};

/// Prompt asking for a short personalized tip after a glucose excursion.
///
/// The spike magnitude is formatted to one decimal, matching what the user
/// sees on the reading card.
#[must_use]
pub fn personalized_advice_prompt(
    program: TrackingProgram,
    meal: &Meal,
    glucose: &GlucosePair,
) -> String {
    format!(
        "Act as a nutrition coach. My program is '{program}'. I ate '{name}' \
         ({carbs}g carbs, GI {gi}). My pre-meal glucose was {pre}mg/dL and \
         post-meal was {post}mg/dL (a spike of {spike:.1}mg/dL). Provide a \
         short (2-3 sentences) and personalized tip based on this data. Be \
         encouraging.",
        name = meal.name,
        carbs = meal.carbohydrates,
        gi = meal.glycemic_index,
        pre = glucose.pre_meal,
        post = glucose.post_meal,
        spike = glucose.spike(),
    )
}
