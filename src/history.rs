// ABOUTME: Workout history loading - JSON arrays of {weight, reps, date?} observations
// ABOUTME: Maps read failures to storage errors and malformed documents to format errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout history loading
//!
//! A history document is a JSON array:
//!
//! ```json
//! [
//!   { "weight": 100, "reps": 5, "date": "2025-03-01" },
//!   { "weight": 105, "reps": 3 }
//! ]
//! ```
//!
//! Rows are loaded as-is. Rows that cannot produce an estimate (zero weight,
//! too many reps) are kept here and filtered later by the estimator.

use crate::errors::{AppError, AppResult};
use crate::models::Observation;
use serde_json::json;
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Parse a JSON history document
///
/// # Errors
///
/// Returns `ErrorCode::InvalidFormat` if the document is not a JSON array of
/// observations
pub fn parse_observations(document: &str) -> AppResult<Vec<Observation>> {
    let observations: Vec<Observation> = serde_json::from_str(document).map_err(|error| {
        AppError::invalid_format(format!(
            "Workout history must be a JSON array of {{weight, reps, date?}} objects: {error}"
        ))
        .with_details(json!({ "line": error.line(), "column": error.column() }))
        .with_source(error)
    })?;

    debug!(count = observations.len(), "Parsed workout history");
    Ok(observations)
}

/// Read and parse a history document from a stream (e.g. stdin)
///
/// # Errors
///
/// Returns `ErrorCode::StorageError` if the stream cannot be read and
/// `ErrorCode::InvalidFormat` if its contents are malformed
pub fn read_observations<R: Read + ?Sized>(reader: &mut R) -> AppResult<Vec<Observation>> {
    let mut document = String::new();
    reader.read_to_string(&mut document).map_err(|error| {
        AppError::storage(format!("Failed to read workout history: {error}")).with_source(error)
    })?;
    parse_observations(&document)
}

/// Load and parse a history file
///
/// # Errors
///
/// Returns `ErrorCode::StorageError` if the file cannot be read and
/// `ErrorCode::InvalidFormat` if its contents are malformed
pub fn load_observations(path: &Path) -> AppResult<Vec<Observation>> {
    let document = fs::read_to_string(path).map_err(|error| {
        AppError::storage(format!(
            "Failed to read workout history {}: {error}",
            path.display()
        ))
        .with_details(json!({ "path": path.display().to_string() }))
        .with_source(error)
    })?;
    parse_observations(&document)
}
