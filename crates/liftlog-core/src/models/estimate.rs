// ABOUTME: Estimate models - e1RM value, confidence tier, and training load table
// ABOUTME: Confidence is ordered so selection can compare tiers directly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Observation;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualitative reliability of an e1RM estimate, derived from the rep count
///
/// Variants are declared in ascending order so `Ord` ranks `High` above
/// `Medium` above `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Nine or more reps: heavily extrapolated
    Low,
    /// Four to eight reps
    Medium,
    /// One to three reps: close to a directly observed max
    High,
}

impl Confidence {
    /// Fixed ranking used by best-estimate selection (`high: 3, medium: 2, low: 1`)
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!(
                "Unknown confidence tier: '{other}'. Valid options: low, medium, high"
            ))),
        }
    }
}

/// A confidence-tagged one-rep-max projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Estimated one-rep max, same unit as the source weight, one decimal place
    pub e1rm: f64,
    /// Reliability tier
    pub confidence: Confidence,
    /// Observation the estimate was derived from
    pub source: Observation,
}

/// Absolute loads for four training tiers, each a fixed fraction of an e1RM
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingPercentages {
    /// 65% tier
    pub light: f64,
    /// 75% tier
    pub moderate: f64,
    /// 85% tier
    pub heavy: f64,
    /// 95% tier
    pub max_effort: f64,
}
