// ABOUTME: Observation model - a single lifting attempt (weight x reps, optional date)
// ABOUTME: Deserialized from workout history exports supplied by the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single lifting attempt
///
/// `weight` is unit-agnostic (kilograms or pounds, as long as the caller is
/// consistent). `reps` is signed so that malformed history rows survive
/// deserialization and are rejected by validation instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Load lifted
    pub weight: f64,
    /// Repetitions completed at that load
    pub reps: i32,
    /// Calendar day of the session, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl Observation {
    /// Create an undated observation
    #[must_use]
    pub const fn new(weight: f64, reps: i32) -> Self {
        Self {
            weight,
            reps,
            date: None,
        }
    }

    /// Attach the session date
    #[must_use]
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}
