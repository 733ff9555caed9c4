// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Formula coefficients, rep limits, confidence bands, and load fractions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Strength-estimation constants grouped by domain. The defaults of
//! `StrengthConfig` are built from these values.

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the logging layer
    pub const LIFTLOG: &str = "liftlog";
}

/// One-rep-max projection formulas
///
/// References:
/// - Brzycki, M. (1993). "Strength testing: Predicting a one-rep max from reps-to-fatigue."
///   *Journal of Physical Education, Recreation & Dance*, 64(1), 88-90.
/// - Epley, B. (1985). "Poundage chart." *Boyd Epley Workout*.
pub mod e1rm {
    /// Brzycki denominator intercept: `weight / (1.0278 - 0.0278 x reps)`
    pub const BRZYCKI_INTERCEPT: f64 = 1.0278;

    /// Brzycki denominator slope per rep
    pub const BRZYCKI_SLOPE: f64 = 0.0278;

    /// Epley divisor: `weight x (1 + reps / 30)`
    pub const EPLEY_DIVISOR: f64 = 30.0;

    /// Multiplier applied when a formula denominator collapses to zero or below
    pub const DEGENERATE_FALLBACK_MULTIPLIER: f64 = 1.5;

    /// Reps above this value project the same e1RM as exactly this many reps
    pub const REP_CAP: i32 = 12;

    /// Observations with more reps than this are excluded from estimation
    pub const MAX_VALID_REPS: i32 = 20;
}

/// Confidence bands by rep count
pub mod confidence {
    /// Highest rep count still classified as high confidence
    pub const HIGH_MAX_REPS: i32 = 3;

    /// Highest rep count still classified as medium confidence
    pub const MEDIUM_MAX_REPS: i32 = 8;
}

/// Training load tiers as fractions of e1RM
pub mod load_fractions {
    /// Light technique and volume work
    pub const LIGHT: f64 = 0.65;
    /// Moderate hypertrophy work
    pub const MODERATE: f64 = 0.75;
    /// Heavy strength work
    pub const HEAVY: f64 = 0.85;
    /// Near-maximal singles and doubles
    pub const MAX_EFFORT: f64 = 0.95;
}
