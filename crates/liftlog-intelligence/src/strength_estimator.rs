// ABOUTME: Configured e1RM estimator - validation, projection, confidence, best-of selection
// ABOUTME: Immutable and thread-safe; batch estimation runs on the rayon pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Strength Estimator
//!
//! Pipeline: raw observation → validated observation → estimate →
//! confidence-tagged estimate → best-of selection across a history.
//!
//! The calculator's preconditions (`weight > 0`, `reps > 0`) are laxer than the
//! admission filter used for histories, which also drops rep counts above the
//! sanity ceiling. The two checks stay separate:
//! [`StrengthEstimator::estimate`] never applies the ceiling and
//! [`StrengthEstimator::is_valid`] never fails.

use crate::algorithms::e1rm::round_to_tenth;
use crate::config::{ConfigError, StrengthConfig};
use liftlog_core::errors::StrengthError;
use liftlog_core::models::{Confidence, Estimate, Observation, TrainingPercentages};
use rayon::prelude::*;
use tracing::debug;

/// e1RM estimator bound to a [`StrengthConfig`]
///
/// `StrengthEstimator::default()` reproduces the standard behaviour: Brzycki,
/// rep cap 12, sanity ceiling 20, confidence bands 1-3/4-8/9+.
#[derive(Debug, Clone, Default)]
pub struct StrengthEstimator {
    config: StrengthConfig,
}

impl StrengthEstimator {
    /// Create an estimator from an already-validated configuration
    #[must_use]
    pub const fn new(config: StrengthConfig) -> Self {
        Self { config }
    }

    /// Load and validate configuration from `LIFTLOG_*` environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the loaded configuration is inconsistent
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = StrengthConfig::from_env();
        config.validate()?;
        debug!(
            formula = config.formula.name(),
            rep_cap = config.rep_cap,
            max_valid_reps = config.max_valid_reps,
            "Strength estimator configured from environment"
        );
        Ok(Self::new(config))
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &StrengthConfig {
        &self.config
    }

    /// Estimate a one-rep max from a single set
    ///
    /// # Errors
    ///
    /// Returns `StrengthError::InvalidWeight` if `weight <= 0` (or NaN) and
    /// `StrengthError::InvalidReps` if `reps <= 0`. Weight is checked first.
    pub fn estimate(&self, weight: f64, reps: i32) -> Result<f64, StrengthError> {
        if weight.is_nan() || weight <= 0.0 {
            return Err(StrengthError::InvalidWeight { weight });
        }
        if reps <= 0 {
            return Err(StrengthError::InvalidReps { reps });
        }

        // A single is already a measured max
        if reps == 1 {
            return Ok(weight);
        }

        let effective_reps = reps.min(self.config.rep_cap);
        Ok(round_to_tenth(
            self.config.formula.project(weight, effective_reps),
        ))
    }

    /// Estimate a one-rep max and tag it with a confidence tier
    ///
    /// # Errors
    ///
    /// Same as [`Self::estimate`].
    pub fn estimate_with_confidence(
        &self,
        weight: f64,
        reps: i32,
    ) -> Result<Estimate, StrengthError> {
        self.estimate_observation(&Observation::new(weight, reps))
    }

    /// Estimate from a history row, keeping the row (and its date) as `source`
    ///
    /// # Errors
    ///
    /// Same as [`Self::estimate`].
    pub fn estimate_observation(&self, observation: &Observation) -> Result<Estimate, StrengthError> {
        let e1rm = self.estimate(observation.weight, observation.reps)?;
        Ok(Estimate {
            e1rm,
            confidence: self.confidence_for(observation.reps),
            source: *observation,
        })
    }

    /// Confidence tier for a rep count, independent of weight
    #[must_use]
    pub fn confidence_for(&self, reps: i32) -> Confidence {
        if reps <= self.config.high_confidence_max_reps {
            Confidence::High
        } else if reps <= self.config.medium_confidence_max_reps {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    /// Admission filter for history rows: `weight > 0` and `0 < reps <= max_valid_reps`
    #[must_use]
    pub fn is_valid(&self, weight: f64, reps: i32) -> bool {
        weight > 0.0 && reps > 0 && reps <= self.config.max_valid_reps
    }

    /// Absolute training loads, each rounded to the nearest whole unit
    #[must_use]
    pub fn training_percentages(&self, e1rm: f64) -> TrainingPercentages {
        let fractions = self.config.load_fractions;
        TrainingPercentages {
            light: (e1rm * fractions.light).round(),
            moderate: (e1rm * fractions.moderate).round(),
            heavy: (e1rm * fractions.heavy).round(),
            max_effort: (e1rm * fractions.max_effort).round(),
        }
    }

    /// Select the most trustworthy estimate in a history
    ///
    /// Rows failing [`Self::is_valid`] are discarded. Among the rest, a higher
    /// confidence tier wins first and a higher e1RM breaks ties within a tier.
    /// On an exact tie on both, the row that appears first wins.
    ///
    /// Returns `None` for an empty history or when every row was discarded.
    #[must_use]
    pub fn best(&self, observations: &[Observation]) -> Option<Estimate> {
        let candidates: Vec<Estimate> = observations
            .iter()
            .filter(|observation| self.is_valid(observation.weight, observation.reps))
            .filter_map(|observation| self.estimate_observation(observation).ok())
            .collect();

        let discarded = observations.len() - candidates.len();
        if discarded > 0 {
            debug!(
                discarded,
                total = observations.len(),
                "Discarded observations outside the e1RM admission range"
            );
        }

        candidates.into_iter().reduce(|incumbent, candidate| {
            if outranks(&candidate, &incumbent) {
                candidate
            } else {
                incumbent
            }
        })
    }

    /// Estimate every row of a history in parallel
    ///
    /// The result is aligned with the input: `None` marks a row that failed
    /// [`Self::is_valid`].
    #[must_use]
    pub fn estimate_all(&self, observations: &[Observation]) -> Vec<Option<Estimate>> {
        observations
            .par_iter()
            .map(|observation| {
                if self.is_valid(observation.weight, observation.reps) {
                    self.estimate_observation(observation).ok()
                } else {
                    None
                }
            })
            .collect()
    }
}

/// Strictly better: higher confidence rank, or same rank and higher e1RM
fn outranks(candidate: &Estimate, incumbent: &Estimate) -> bool {
    let (candidate_rank, incumbent_rank) =
        (candidate.confidence.rank(), incumbent.confidence.rank());
    candidate_rank > incumbent_rank
        || (candidate_rank == incumbent_rank && candidate.e1rm > incumbent.e1rm)
}
