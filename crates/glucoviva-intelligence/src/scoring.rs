// ABOUTME: Glycemic score calculator with spike-banded and macro-only modes
// ABOUTME: Spike mode draws within its band from an injected RNG; outputs clamp to 0-100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GlucoViva

//! Glycemic score calculation.
//!
//! Two mutually exclusive modes produce a 0-100 score at meal save time:
//!
//! - **Spike mode**, when a qualifying pre/post glucose pair is supplied: the
//!   excursion magnitude is bucketed into four bands, each mapped to a score
//!   sub-range with a uniform draw inside the band. The intra-band draw is a
//!   product decision (scores should not read as more precise than the
//!   estimate behind them) and comes from an injected [`Rng`] so tests can
//!   pin band membership with a seed.
//! - **Macro-only mode** otherwise: `100 - carbs x multiplier`, where the
//!   multiplier follows the glycemic index category.

use glucoviva_core::models::GlycemicIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::glycemic_constants::{multipliers, score, spike};

/// Carbohydrate penalty multiplier for a glycemic index category
#[must_use]
pub const fn carb_multiplier(index: GlycemicIndex) -> f64 {
    match index {
        GlycemicIndex::High => multipliers::HIGH_GI,
        GlycemicIndex::Medium => multipliers::MEDIUM_GI,
        GlycemicIndex::Low => multipliers::LOW_GI,
    }
}

/// Macro-only score: `max(0, round(100 - carbs x multiplier))`.
///
/// Non-finite or negative carbohydrate values sanitize to zero grams, so the
/// function always returns a value in `0..=100`.
#[must_use]
pub fn macro_score(carbs_g: f64, index: GlycemicIndex) -> u8 {
    let carbs = if carbs_g.is_finite() { carbs_g.max(0.0) } else { 0.0 };
    let raw = (f64::from(score::MAX_SCORE) - carbs * carb_multiplier(index)).round();
    raw.clamp(f64::from(score::MIN_SCORE), f64::from(score::MAX_SCORE)) as u8
}

/// Glycemic score calculator holding the randomness source for spike mode.
///
/// Production callers use [`GlycemicScorer::new`] (entropy-seeded); tests
/// inject a seeded RNG through [`GlycemicScorer::with_rng`].
#[derive(Debug)]
pub struct GlycemicScorer<R = StdRng> {
    rng: R,
}

impl GlycemicScorer<StdRng> {
    /// Scorer backed by an entropy-seeded RNG
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Scorer with a fixed seed, for reproducible draws
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GlycemicScorer<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GlycemicScorer<R> {
    /// Scorer over a caller-supplied randomness source
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Compute a meal's glycemic score.
    ///
    /// Spike mode applies when `spike_mg_dl` is supplied, finite and
    /// non-negative; macro-only mode applies otherwise. The result is always
    /// in `0..=100`.
    pub fn compute(&mut self, carbs_g: f64, index: GlycemicIndex, spike_mg_dl: Option<f64>) -> u8 {
        match spike_mg_dl {
            Some(spike) if spike.is_finite() && spike >= 0.0 => self.spike_score(spike),
            _ => macro_score(carbs_g, index),
        }
    }

    /// Spike-mode score: uniform draw within the band the excursion falls in.
    ///
    /// Band lower bounds are inclusive, so 30/50/80 mg/dL land in the next
    /// (lower-scoring) band.
    pub fn spike_score(&mut self, spike_mg_dl: f64) -> u8 {
        let band = if spike_mg_dl < spike::MILD_SPIKE_MAX {
            spike::MILD_SCORE_RANGE
        } else if spike_mg_dl < spike::MODERATE_SPIKE_MAX {
            spike::MODERATE_SCORE_RANGE
        } else if spike_mg_dl < spike::HIGH_SPIKE_MAX {
            spike::HIGH_SCORE_RANGE
        } else {
            spike::SEVERE_SCORE_RANGE
        };
        trace!(spike_mg_dl, band = ?band, "scoring glucose excursion");
        self.rng.gen_range(band)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macro_score_matches_formula() {
        // 100 - 40 * 1.5 = 40
        assert_eq!(macro_score(40.0, GlycemicIndex::High), 40);
        // 100 - 40 * 1.0 = 60
        assert_eq!(macro_score(40.0, GlycemicIndex::Medium), 60);
        // 100 - 40 * 0.5 = 80
        assert_eq!(macro_score(40.0, GlycemicIndex::Low), 80);
    }

    #[test]
    fn macro_score_clamps_to_zero() {
        assert_eq!(macro_score(300.0, GlycemicIndex::High), 0);
    }

    #[test]
    fn macro_score_sanitizes_malformed_carbs() {
        assert_eq!(macro_score(f64::NAN, GlycemicIndex::High), 100);
        assert_eq!(macro_score(-25.0, GlycemicIndex::Medium), 100);
        assert_eq!(macro_score(f64::INFINITY, GlycemicIndex::Low), 100);
    }

    #[test]
    fn category_severity_is_monotonic() {
        for carbs in 0..200 {
            let carbs = f64::from(carbs);
            let high = macro_score(carbs, GlycemicIndex::High);
            let medium = macro_score(carbs, GlycemicIndex::Medium);
            let low = macro_score(carbs, GlycemicIndex::Low);
            assert!(high <= medium);
            assert!(medium <= low);
        }
    }

    #[test]
    fn spike_bands_are_exhaustive_and_boundary_inclusive() {
        let mut scorer = GlycemicScorer::seeded(7);
        let cases = [
            (0.0, 90, 99),
            (29.999, 90, 99),
            (30.0, 70, 89),
            (49.999, 70, 89),
            (50.0, 40, 69),
            (79.999, 40, 69),
            (80.0, 0, 39),
            (250.0, 0, 39),
        ];
        for (spike, lo, hi) in cases {
            for _ in 0..50 {
                let score = scorer.spike_score(spike);
                assert!(
                    score >= lo && score <= hi,
                    "spike {spike} scored {score}, expected {lo}..={hi}"
                );
            }
        }
    }

    #[test]
    fn compute_prefers_spike_mode_only_for_valid_spikes() {
        let mut scorer = GlycemicScorer::seeded(11);
        // Spike of 20 lands in the mild band regardless of carbs.
        let spiked = scorer.compute(200.0, GlycemicIndex::High, Some(20.0));
        assert!((90..=99).contains(&spiked));
        // Absent or malformed spikes fall back to the macro formula.
        assert_eq!(scorer.compute(40.0, GlycemicIndex::High, None), 40);
        assert_eq!(scorer.compute(40.0, GlycemicIndex::High, Some(f64::NAN)), 40);
        assert_eq!(scorer.compute(40.0, GlycemicIndex::High, Some(-5.0)), 40);
    }

    #[test]
    fn scores_always_in_range() {
        let mut scorer = GlycemicScorer::seeded(3);
        for carbs in [0.0, 12.5, 80.0, 500.0, f64::NAN] {
            for index in [GlycemicIndex::Low, GlycemicIndex::Medium, GlycemicIndex::High] {
                for spike in [None, Some(5.0), Some(45.0), Some(75.0), Some(120.0)] {
                    let score = scorer.compute(carbs, index, spike);
                    assert!(score <= 100);
                }
            }
        }
    }
}
