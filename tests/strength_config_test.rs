// ABOUTME: Tests for strength estimator configuration - defaults, validation, environment loading
// ABOUTME: Environment-mutating tests run serially to avoid cross-test interference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::float_cmp)]
#![allow(missing_docs)]

mod common;

use common::init_test_logging;
use liftlog::errors::{AppError, ErrorCode};
use liftlog::intelligence::{
    ConfigError, E1rmFormula, LoadFractions, StrengthConfig, StrengthEstimator,
};
use liftlog::models::Confidence;
use serial_test::serial;
use std::env;

const ENV_KEYS: [&str; 9] = [
    "LIFTLOG_E1RM_FORMULA",
    "LIFTLOG_E1RM_REP_CAP",
    "LIFTLOG_E1RM_MAX_VALID_REPS",
    "LIFTLOG_CONFIDENCE_HIGH_MAX_REPS",
    "LIFTLOG_CONFIDENCE_MEDIUM_MAX_REPS",
    "LIFTLOG_LOAD_LIGHT_FRACTION",
    "LIFTLOG_LOAD_MODERATE_FRACTION",
    "LIFTLOG_LOAD_HEAVY_FRACTION",
    "LIFTLOG_LOAD_MAX_EFFORT_FRACTION",
];

fn clear_env() {
    for key in ENV_KEYS {
        env::remove_var(key);
    }
}

// === Defaults and validation ===

#[test]
fn test_default_config_matches_standard_constants() {
    let config = StrengthConfig::default();

    assert_eq!(config.formula, E1rmFormula::Brzycki);
    assert_eq!(config.rep_cap, 12);
    assert_eq!(config.max_valid_reps, 20);
    assert_eq!(config.high_confidence_max_reps, 3);
    assert_eq!(config.medium_confidence_max_reps, 8);
    assert_eq!(config.load_fractions.light, 0.65);
    assert_eq!(config.load_fractions.max_effort, 0.95);
    assert!(config.validate().is_ok());
}

#[test]
fn test_rep_cap_below_one_is_rejected() {
    let config = StrengthConfig {
        rep_cap: 0,
        ..StrengthConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_overlapping_confidence_bands_are_rejected() {
    let config = StrengthConfig {
        high_confidence_max_reps: 8,
        medium_confidence_max_reps: 8,
        ..StrengthConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_load_fractions_must_be_within_unit_interval() {
    let config = StrengthConfig {
        load_fractions: LoadFractions {
            max_effort: 1.2,
            ..LoadFractions::default()
        },
        ..StrengthConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));
}

#[test]
fn test_load_fractions_must_ascend() {
    let config = StrengthConfig {
        load_fractions: LoadFractions {
            light: 0.8,
            moderate: 0.75,
            heavy: 0.85,
            max_effort: 0.95,
        },
        ..StrengthConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_config_error_converts_to_config_invalid() {
    let error = AppError::from(ConfigError::InvalidRange("bands overlap"));

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.details["reason"], "bands overlap");
}

// === Custom configurations ===

#[test]
fn test_epley_formula() {
    let estimator = StrengthEstimator::new(StrengthConfig {
        formula: E1rmFormula::Epley,
        ..StrengthConfig::default()
    });

    assert_eq!(estimator.estimate(100.0, 5).unwrap(), 116.7);
    // Singles stay unchanged regardless of formula
    assert_eq!(estimator.estimate(100.0, 1).unwrap(), 100.0);
}

#[test]
fn test_brzycki_projection_past_denominator_zero_uses_fallback() {
    init_test_logging();

    // 1.0278 - 0.0278 x 38 < 0
    assert_eq!(E1rmFormula::Brzycki.project(100.0, 38), 150.0);
    assert!(E1rmFormula::Brzycki.project(100.0, 38).is_finite());
}

#[test]
fn test_rep_cap_past_brzycki_denominator_zero_is_rejected() {
    let config = StrengthConfig {
        rep_cap: 40,
        max_valid_reps: 40,
        ..StrengthConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    // Epley has no denominator, so the same cap is usable there
    let epley = StrengthConfig {
        formula: E1rmFormula::Epley,
        ..config
    };
    assert!(epley.validate().is_ok());
}

#[test]
fn test_rep_cap_above_max_valid_reps_is_rejected() {
    let config = StrengthConfig {
        rep_cap: 25,
        ..StrengthConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_every_accepted_rep_cap_keeps_estimates_non_decreasing() {
    for rep_cap in 1..=40 {
        let config = StrengthConfig {
            rep_cap,
            max_valid_reps: 40,
            ..StrengthConfig::default()
        };
        if config.validate().is_err() {
            continue;
        }
        let estimator = StrengthEstimator::new(config);
        let estimates: Vec<f64> = (1..=40)
            .map(|reps| estimator.estimate(100.0, reps).unwrap())
            .collect();
        assert!(
            estimates.windows(2).all(|pair| pair[0] <= pair[1]),
            "rep_cap {rep_cap} produced decreasing estimates: {estimates:?}"
        );
    }
}

#[test]
#[serial]
fn test_from_env_rejects_degenerate_rep_cap() {
    clear_env();
    env::set_var("LIFTLOG_E1RM_REP_CAP", "40");
    env::set_var("LIFTLOG_E1RM_MAX_VALID_REPS", "40");

    let result = StrengthEstimator::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_lower_rep_cap() {
    let estimator = StrengthEstimator::new(StrengthConfig {
        rep_cap: 10,
        ..StrengthConfig::default()
    });

    assert_eq!(
        estimator.estimate(100.0, 12).unwrap(),
        estimator.estimate(100.0, 10).unwrap()
    );
}

#[test]
fn test_custom_confidence_bands_and_ceiling() {
    let estimator = StrengthEstimator::new(StrengthConfig {
        rep_cap: 10,
        max_valid_reps: 10,
        high_confidence_max_reps: 2,
        medium_confidence_max_reps: 5,
        ..StrengthConfig::default()
    });

    assert_eq!(estimator.confidence_for(3), Confidence::Medium);
    assert_eq!(estimator.confidence_for(6), Confidence::Low);
    assert!(!estimator.is_valid(100.0, 11));
}

// === Environment loading ===

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
    clear_env();

    assert_eq!(StrengthConfig::from_env(), StrengthConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_overrides() {
    clear_env();
    env::set_var("LIFTLOG_E1RM_FORMULA", "epley");
    env::set_var("LIFTLOG_E1RM_REP_CAP", "10");
    env::set_var("LIFTLOG_LOAD_LIGHT_FRACTION", "0.6");

    let estimator = StrengthEstimator::from_env().unwrap();
    clear_env();

    assert_eq!(estimator.config().formula, E1rmFormula::Epley);
    assert_eq!(estimator.config().rep_cap, 10);
    assert_eq!(estimator.config().load_fractions.light, 0.6);
    assert_eq!(estimator.training_percentages(100.0).light, 60.0);
}

#[test]
#[serial]
fn test_from_env_ignores_unparseable_values() {
    init_test_logging();
    clear_env();
    env::set_var("LIFTLOG_E1RM_REP_CAP", "twelve");
    env::set_var("LIFTLOG_E1RM_FORMULA", "wathan");

    let config = StrengthConfig::from_env();
    clear_env();

    assert_eq!(config.rep_cap, 12);
    assert_eq!(config.formula, E1rmFormula::Brzycki);
}

#[test]
#[serial]
fn test_from_env_rejects_inconsistent_configuration() {
    clear_env();
    env::set_var("LIFTLOG_CONFIDENCE_HIGH_MAX_REPS", "9");

    let result = StrengthEstimator::from_env();
    clear_env();

    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}
