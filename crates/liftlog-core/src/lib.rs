// ABOUTME: Core types and constants for Liftlog strength analytics
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Liftlog Core
//!
//! Foundation crate providing shared types and constants for the Liftlog
//! strength analytics workspace. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `StrengthError`
//! - **constants**: Formula coefficients, rep limits, and load fractions
//! - **models**: Lifting observations, estimates, and progression summaries

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`Observation`, `Estimate`, `Confidence`, ...)
pub mod models;
