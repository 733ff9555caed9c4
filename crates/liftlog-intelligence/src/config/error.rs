// ABOUTME: Configuration error types for strength estimator validation
// ABOUTME: Defines error variants for invalid ranges and out-of-range values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types for strength estimator validation.

use liftlog_core::errors::AppError;
use serde_json::json;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Bounds that contradict each other (e.g., high band above medium band)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let reason = match &error {
            ConfigError::InvalidRange(reason) | ConfigError::ValueOutOfRange(reason) => *reason,
        };
        Self::config(error.to_string()).with_details(json!({ "reason": reason }))
    }
}
