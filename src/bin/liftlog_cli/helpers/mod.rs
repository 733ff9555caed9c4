// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for the liftlog CLI
// ABOUTME: Output formatting shared by all commands

pub mod display;
