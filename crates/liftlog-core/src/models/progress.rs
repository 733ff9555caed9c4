// ABOUTME: Progression models - best estimate per session day and overall trend summary
// ABOUTME: Consumed by progress charts and programming recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Estimate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Best estimate achieved on a single calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionPoint {
    /// Session day
    pub date: NaiveDate,
    /// Best estimate of that day
    pub estimate: Estimate,
}

/// Most recent session compared against the best of everything before it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthProgress {
    /// Best estimate on the most recent session day
    pub current: Estimate,
    /// Best estimate across all earlier session days
    pub previous: Option<Estimate>,
    /// Relative change of `current` over `previous`, one decimal place
    pub improvement_percent: f64,
    /// Number of session days that produced an estimate
    pub sessions: usize,
}
