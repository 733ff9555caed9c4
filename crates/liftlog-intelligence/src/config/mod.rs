// ABOUTME: Configuration module for liftlog-intelligence crate
// ABOUTME: Re-exports estimator configuration and its validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration validation errors
pub mod error;

/// Strength estimator configuration
pub mod strength;

pub use error::ConfigError;
pub use strength::{LoadFractions, StrengthConfig};
