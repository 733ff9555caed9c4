// ABOUTME: Domain models for strength estimation
// ABOUTME: Observations in, confidence-tagged estimates and progression summaries out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! All models are plain values: computed on demand from caller-supplied
//! observations and never persisted by this workspace.

mod estimate;
mod observation;
mod progress;

pub use estimate::{Confidence, Estimate, TrainingPercentages};
pub use observation::Observation;
pub use progress::{ProgressionPoint, StrengthProgress};
