// ABOUTME: Strength estimator configuration - formula, rep limits, confidence bands, load tiers
// ABOUTME: Loaded from LIFTLOG_* environment variables with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ConfigError;
use crate::algorithms::E1rmFormula;
use liftlog_core::constants::{confidence, e1rm, load_fractions};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Fractions of e1RM used for the four training tiers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadFractions {
    /// Light tier fraction
    pub light: f64,
    /// Moderate tier fraction
    pub moderate: f64,
    /// Heavy tier fraction
    pub heavy: f64,
    /// Max-effort tier fraction
    pub max_effort: f64,
}

impl Default for LoadFractions {
    fn default() -> Self {
        Self {
            light: load_fractions::LIGHT,
            moderate: load_fractions::MODERATE,
            heavy: load_fractions::HEAVY,
            max_effort: load_fractions::MAX_EFFORT,
        }
    }
}

impl LoadFractions {
    fn as_array(self) -> [f64; 4] {
        [self.light, self.moderate, self.heavy, self.max_effort]
    }
}

/// Strength estimator configuration
///
/// # Configuration Methods
///
/// 1. Environment variables (highest priority):
///    ```bash
///    export LIFTLOG_E1RM_FORMULA=epley
///    export LIFTLOG_E1RM_REP_CAP=10
///    ```
///
/// 2. Default values (if env vars are unset or unparseable)
///
/// # Examples
///
/// ```rust
/// use liftlog_intelligence::config::StrengthConfig;
///
/// let config = StrengthConfig::default();
/// assert_eq!(config.rep_cap, 12);
/// assert_eq!(config.max_valid_reps, 20);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthConfig {
    /// Projection formula
    #[serde(default)]
    pub formula: E1rmFormula,
    /// Reps above this project the same value as exactly this many reps
    pub rep_cap: i32,
    /// Sanity ceiling for history rows; more reps than this are excluded
    pub max_valid_reps: i32,
    /// Highest rep count classified as high confidence
    pub high_confidence_max_reps: i32,
    /// Highest rep count classified as medium confidence
    pub medium_confidence_max_reps: i32,
    /// Training tier fractions
    pub load_fractions: LoadFractions,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self {
            formula: E1rmFormula::default(),
            rep_cap: e1rm::REP_CAP,
            max_valid_reps: e1rm::MAX_VALID_REPS,
            high_confidence_max_reps: confidence::HIGH_MAX_REPS,
            medium_confidence_max_reps: confidence::MEDIUM_MAX_REPS,
            load_fractions: LoadFractions::default(),
        }
    }
}

impl StrengthConfig {
    /// Load strength configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            formula: env_or("LIFTLOG_E1RM_FORMULA", defaults.formula),
            rep_cap: env_or("LIFTLOG_E1RM_REP_CAP", defaults.rep_cap),
            max_valid_reps: env_or("LIFTLOG_E1RM_MAX_VALID_REPS", defaults.max_valid_reps),
            high_confidence_max_reps: env_or(
                "LIFTLOG_CONFIDENCE_HIGH_MAX_REPS",
                defaults.high_confidence_max_reps,
            ),
            medium_confidence_max_reps: env_or(
                "LIFTLOG_CONFIDENCE_MEDIUM_MAX_REPS",
                defaults.medium_confidence_max_reps,
            ),
            load_fractions: LoadFractions {
                light: env_or(
                    "LIFTLOG_LOAD_LIGHT_FRACTION",
                    defaults.load_fractions.light,
                ),
                moderate: env_or(
                    "LIFTLOG_LOAD_MODERATE_FRACTION",
                    defaults.load_fractions.moderate,
                ),
                heavy: env_or(
                    "LIFTLOG_LOAD_HEAVY_FRACTION",
                    defaults.load_fractions.heavy,
                ),
                max_effort: env_or(
                    "LIFTLOG_LOAD_MAX_EFFORT_FRACTION",
                    defaults.load_fractions.max_effort,
                ),
            },
        }
    }

    /// Check that the configured bounds are consistent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for a rep limit below one, a Brzycki
    /// rep cap whose denominator is not positive, or a load fraction outside
    /// `(0, 1]`. Returns `ConfigError::InvalidRange` when the rep cap exceeds
    /// `max_valid_reps`, the confidence bands overlap, or the load fractions are
    /// not strictly ascending.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rep_cap < 1 {
            return Err(ConfigError::ValueOutOfRange("rep_cap must be at least 1"));
        }
        if self.max_valid_reps < 1 {
            return Err(ConfigError::ValueOutOfRange(
                "max_valid_reps must be at least 1",
            ));
        }
        if self.rep_cap > self.max_valid_reps {
            return Err(ConfigError::InvalidRange(
                "rep_cap must not exceed max_valid_reps",
            ));
        }
        let brzycki_denominator =
            e1rm::BRZYCKI_SLOPE.mul_add(-f64::from(self.rep_cap), e1rm::BRZYCKI_INTERCEPT);
        if self.formula == E1rmFormula::Brzycki && brzycki_denominator <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rep_cap must keep the Brzycki denominator positive",
            ));
        }
        if self.high_confidence_max_reps < 1 {
            return Err(ConfigError::ValueOutOfRange(
                "high_confidence_max_reps must be at least 1",
            ));
        }
        if self.high_confidence_max_reps >= self.medium_confidence_max_reps {
            return Err(ConfigError::InvalidRange(
                "high_confidence_max_reps must be below medium_confidence_max_reps",
            ));
        }

        let fractions = self.load_fractions.as_array();
        if !fractions
            .iter()
            .all(|&fraction| fraction > 0.0 && fraction <= 1.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "load fractions must be within (0, 1]",
            ));
        }
        if fractions.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "load fractions must be strictly ascending from light to max_effort",
            ));
        }

        Ok(())
    }
}

/// Parse an environment variable, keeping `default` when unset or unparseable
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %raw, "Ignoring unparseable configuration value");
            default
        }),
        Err(_) => default,
    }
}
