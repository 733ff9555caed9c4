// ABOUTME: Benchmark fixtures for generating realistic workout histories
// ABOUTME: Deterministic data so measurements are reproducible between runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating workout histories.

use chrono::{Days, NaiveDate};
use liftlog::models::Observation;

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// One training block (30 sets)
    Small,
    /// A year of logging (1 000 sets)
    Medium,
    /// Multi-year archive (20 000 sets)
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 30,
            Self::Medium => 1_000,
            Self::Large => 20_000,
        }
    }
}

/// Generate `size` observations, five sets per session day, with a sprinkling
/// of rows that fail validation (zero weight, rep counts above 20)
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
pub fn generate_history(size: HistorySize) -> Vec<Observation> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap_or_default();
    (0..size.count())
        .map(|index| {
            let session = (index / 5) as u64;
            let reps = 1 + ((index * 7) % 22) as i32;
            let weight = if index % 50 == 49 {
                0.0
            } else {
                60.0 + ((index * 13) % 90) as f64 * 1.25
            };
            let observation = Observation::new(weight, reps);
            start
                .checked_add_days(Days::new(session * 2))
                .map_or(observation, |date| observation.on(date))
        })
        .collect()
}
