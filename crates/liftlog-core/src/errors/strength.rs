// ABOUTME: Validation errors raised by the e1RM calculator
// ABOUTME: Separate variants for weight and reps so callers know which argument failed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised when an e1RM cannot be computed from a (weight, reps) pair
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StrengthError {
    /// Weight was zero, negative, or not a number
    #[error("weight must be greater than zero, got {weight}")]
    InvalidWeight {
        /// The rejected weight
        weight: f64,
    },

    /// Rep count was zero or negative
    #[error("reps must be greater than zero, got {reps}")]
    InvalidReps {
        /// The rejected rep count
        reps: i32,
    },
}

impl StrengthError {
    /// Name of the argument that failed validation
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidWeight { .. } => "weight",
            Self::InvalidReps { .. } => "reps",
        }
    }
}
