// ABOUTME: Algorithm selection layer for strength calculations
// ABOUTME: Enum-based dispatch between one-rep-max projection formulas

//! Algorithm Selection Module
//!
//! Formulas are enums rather than strings, matching the way the rest of the
//! workspace selects behaviour through configuration.

pub mod e1rm;

pub use e1rm::E1rmFormula;
