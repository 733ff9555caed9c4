// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for the liftlog CLI
// ABOUTME: Single-set calculations and history-based analysis

pub mod calculate;
pub mod history;
