// ABOUTME: Main library entry point for the Liftlog strength analytics toolkit
// ABOUTME: Re-exports core types and the estimation engine, plus logging and history loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Liftlog
//!
//! Strength analytics for workout logs: estimated one-rep max (e1RM) with
//! confidence scoring, training load tables, improvement tracking, and
//! best-estimate selection across a lifting history.
//!
//! ## Quick Start
//!
//! ```rust
//! use liftlog::intelligence::best_e1rm;
//! use liftlog::models::{Confidence, Observation};
//!
//! let history = [
//!     Observation::new(100.0, 10),
//!     Observation::new(95.0, 3),
//!     Observation::new(90.0, 6),
//! ];
//! let best = best_e1rm(&history);
//! assert_eq!(best.map(|estimate| estimate.confidence), Some(Confidence::High));
//! ```
//!
//! ## Architecture
//!
//! - `liftlog-core`: error taxonomy, domain models, constants
//! - `liftlog-intelligence`: formulas, configured estimator, progression analysis
//! - this crate: structured logging, history loading, and the `liftlog` CLI

pub use liftlog_core::{constants, errors, models};

/// Strength estimation engine
pub use liftlog_intelligence as intelligence;

/// Workout history loading from JSON files and streams
pub mod history;

/// Structured logging setup
pub mod logging;
