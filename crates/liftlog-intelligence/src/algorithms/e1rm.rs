// ABOUTME: Estimated one-rep-max (e1RM) formulas and calculator functions
// ABOUTME: Brzycki projection with rep capping, confidence tiers, load tables, best-of selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # e1RM Calculator
//!
//! Free functions in this module use the default configuration (Brzycki,
//! rep cap 12, sanity ceiling 20). Use [`StrengthEstimator`] directly for a
//! tuned configuration.
//!
//! ```rust
//! use liftlog_intelligence::{calculate_e1rm, training_percentages};
//!
//! let e1rm = calculate_e1rm(100.0, 5)?;
//! assert!((e1rm - 112.5).abs() < f64::EPSILON);
//! assert!((training_percentages(100.0).heavy - 85.0).abs() < f64::EPSILON);
//! # Ok::<(), liftlog_core::errors::StrengthError>(())
//! ```

use crate::strength_estimator::StrengthEstimator;
use liftlog_core::constants::e1rm::{
    BRZYCKI_INTERCEPT, BRZYCKI_SLOPE, DEGENERATE_FALLBACK_MULTIPLIER, EPLEY_DIVISOR,
};
use liftlog_core::errors::{AppError, StrengthError};
use liftlog_core::models::{Estimate, Observation, TrainingPercentages};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;

/// One-rep-max projection formula
///
/// - `Brzycki`: `weight / (1.0278 - 0.0278 x reps)`, linear in the denominator,
///   accurate up to roughly ten to twelve reps
/// - `Epley`: `weight x (1 + reps / 30)`, slightly more generous above five reps
///
/// # Scientific References
///
/// - Brzycki, M. (1993). "Strength testing: Predicting a one-rep max from reps-to-fatigue."
///   *Journal of Physical Education, Recreation & Dance*, 64(1), 88-90.
/// - `LeSuer`, D.A. et al. (1997). "The accuracy of prediction equations for estimating 1-RM
///   performance." *Journal of Strength and Conditioning Research*, 11(4), 211-213.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum E1rmFormula {
    /// Brzycki formula (default)
    #[default]
    Brzycki,
    /// Epley formula
    Epley,
}

impl E1rmFormula {
    /// Raw, unrounded projection for an already-capped rep count
    ///
    /// The Brzycki denominator cannot reach zero for rep counts up to 36, but a
    /// configured rep cap can push it there; in that case the projection falls
    /// back to `weight x 1.5` instead of producing a negative or infinite value.
    #[must_use]
    pub fn project(self, weight: f64, effective_reps: i32) -> f64 {
        let reps = f64::from(effective_reps);
        match self {
            Self::Brzycki => {
                let denominator = BRZYCKI_SLOPE.mul_add(-reps, BRZYCKI_INTERCEPT);
                if denominator <= 0.0 {
                    warn!(
                        weight,
                        reps = effective_reps,
                        denominator,
                        "Brzycki denominator is not positive, using fallback multiplier"
                    );
                    return weight * DEGENERATE_FALLBACK_MULTIPLIER;
                }
                weight / denominator
            }
            Self::Epley => weight.mul_add(reps / EPLEY_DIVISOR, weight),
        }
    }

    /// Get algorithm name for logging and configuration
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Brzycki => "brzycki",
            Self::Epley => "epley",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(self) -> &'static str {
        match self {
            Self::Brzycki => "e1RM = weight / (1.0278 - 0.0278 x reps)",
            Self::Epley => "e1RM = weight x (1 + reps / 30)",
        }
    }
}

impl FromStr for E1rmFormula {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "brzycki" => Ok(Self::Brzycki),
            "epley" => Ok(Self::Epley),
            other => Err(AppError::invalid_input(format!(
                "Unknown e1RM formula: '{other}'. Valid options: brzycki, epley"
            ))),
        }
    }
}

/// Round to the nearest tenth (half away from zero)
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Estimate a one-rep max from a single set
///
/// A single rep returns `weight` unchanged. Otherwise reps are capped at 12 and
/// projected with the Brzycki formula, rounded to one decimal place.
///
/// # Errors
///
/// Returns `StrengthError::InvalidWeight` if `weight <= 0` and
/// `StrengthError::InvalidReps` if `reps <= 0`.
pub fn calculate_e1rm(weight: f64, reps: i32) -> Result<f64, StrengthError> {
    StrengthEstimator::default().estimate(weight, reps)
}

/// Estimate a one-rep max and classify how far it was extrapolated
///
/// Reps 1-3 are `high` confidence, 4-8 `medium`, 9 and above `low`.
///
/// # Errors
///
/// Same as [`calculate_e1rm`].
pub fn calculate_e1rm_with_confidence(weight: f64, reps: i32) -> Result<Estimate, StrengthError> {
    StrengthEstimator::default().estimate_with_confidence(weight, reps)
}

/// Admission filter for history rows: `weight > 0`, `0 < reps <= 20`
#[must_use]
pub fn is_valid_for_e1rm(weight: f64, reps: i32) -> bool {
    StrengthEstimator::default().is_valid(weight, reps)
}

/// Light/moderate/heavy/max-effort loads at 65/75/85/95% of `e1rm`
#[must_use]
pub fn training_percentages(e1rm: f64) -> TrainingPercentages {
    StrengthEstimator::default().training_percentages(e1rm)
}

/// Percent change from `previous_e1rm` to `current_e1rm`, one decimal place
///
/// A zero or negative baseline yields `0.0`.
#[must_use]
pub fn calculate_improvement(current_e1rm: f64, previous_e1rm: f64) -> f64 {
    if previous_e1rm <= 0.0 {
        return 0.0;
    }
    round_to_tenth((current_e1rm - previous_e1rm) / previous_e1rm * 100.0)
}

/// Most trustworthy estimate in a history, or `None` when nothing is usable
///
/// Confidence tier is compared first, then e1RM. On an exact tie the first
/// observation encountered wins.
#[must_use]
pub fn best_e1rm(observations: &[Observation]) -> Option<Estimate> {
    StrengthEstimator::default().best(observations)
}
