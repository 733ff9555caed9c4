// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and dated workout history builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `liftlog`

use chrono::NaiveDate;
use liftlog::models::Observation;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar day helper for fixtures
pub fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Observation on a given day
pub fn lift(weight: f64, reps: i32, date: NaiveDate) -> Observation {
    Observation::new(weight, reps).on(date)
}

/// Four weeks of squat sessions, deliberately out of order
///
/// - 2025-01-06: 100x5 (112.5 medium), 90x3 (95.3 high) -> best 95.3
/// - 2025-01-13: 100x3 (105.9 high)
/// - 2025-01-20: 110x2 (113.1 high)
/// - 2025-01-27: only an invalid row, produces no point
/// - one undated 200x1 single, ignored by progression
pub fn squat_history() -> Vec<Observation> {
    vec![
        lift(110.0, 2, day(2025, 1, 20)),
        lift(100.0, 5, day(2025, 1, 6)),
        Observation::new(200.0, 1),
        lift(0.0, 5, day(2025, 1, 27)),
        lift(100.0, 3, day(2025, 1, 13)),
        lift(90.0, 3, day(2025, 1, 6)),
    ]
}
