// ABOUTME: Strength intelligence engine - e1RM estimation, confidence scoring, progression
// ABOUTME: Pure, synchronous computations over caller-supplied lifting observations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Liftlog Intelligence
//!
//! Estimates one-rep maxima from (weight, reps) observations, tags each
//! estimate with a confidence tier, derives training load tables, and picks
//! the most trustworthy estimate out of a workout history.
//!
//! Every operation is a pure function of its arguments. `StrengthEstimator`
//! holds only immutable configuration and is `Send + Sync`, so a single
//! instance can be shared freely across threads.

/// e1RM formulas and the default-configured free functions
pub mod algorithms;

/// Environment-driven estimator configuration
pub mod config;

/// Progression over dated workout history
pub mod progression;

/// Configured estimator
pub mod strength_estimator;

pub use algorithms::e1rm::{
    best_e1rm, calculate_e1rm, calculate_e1rm_with_confidence, calculate_improvement,
    is_valid_for_e1rm, round_to_tenth, training_percentages, E1rmFormula,
};
pub use config::{ConfigError, LoadFractions, StrengthConfig};
pub use progression::{build_progression, summarize_progress};
pub use strength_estimator::StrengthEstimator;
