// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Single-value commands - estimate, percentages, improvement
// ABOUTME: Thin wrappers over the estimator that hand results to the display helpers

use crate::helpers::display::{self, OutputFormat};
use liftlog::errors::AppResult;
use liftlog::intelligence::{calculate_improvement, StrengthEstimator};

/// Estimate a one-rep max from a single set
pub fn estimate(
    estimator: &StrengthEstimator,
    weight: f64,
    reps: i32,
    format: OutputFormat,
) -> AppResult<()> {
    let estimate = estimator.estimate_with_confidence(weight, reps)?;
    display::print_estimate(&estimate, format)
}

/// Print the training load table for an e1RM
pub fn percentages(estimator: &StrengthEstimator, e1rm: f64, format: OutputFormat) -> AppResult<()> {
    display::print_percentages(e1rm, &estimator.training_percentages(e1rm), format)
}

/// Print the percent change between two estimates
pub fn improvement(current: f64, previous: f64, format: OutputFormat) -> AppResult<()> {
    let percent = calculate_improvement(current, previous);
    display::print_improvement(current, previous, percent, format)
}
