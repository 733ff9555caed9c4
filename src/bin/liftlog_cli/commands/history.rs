// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: History commands - best estimate and progression over a workout log
// ABOUTME: Loads observations from a file or stdin before analysis

use crate::helpers::display::{self, OutputFormat};
use liftlog::errors::AppResult;
use liftlog::history::{load_observations, read_observations};
use liftlog::intelligence::{build_progression, summarize_progress, StrengthEstimator};
use liftlog::models::Observation;
use std::io;
use std::path::Path;
use tracing::info;

fn load(file: Option<&Path>) -> AppResult<Vec<Observation>> {
    let observations = match file {
        Some(path) => load_observations(path)?,
        None => read_observations(&mut io::stdin().lock())?,
    };
    info!(
        count = observations.len(),
        source = file.map_or_else(|| "stdin".to_owned(), |path| path.display().to_string()),
        "Loaded workout history"
    );
    Ok(observations)
}

/// Print the most trustworthy estimate in a history
pub fn best(
    estimator: &StrengthEstimator,
    file: Option<&Path>,
    format: OutputFormat,
) -> AppResult<()> {
    let observations = load(file)?;
    display::print_best(estimator.best(&observations).as_ref(), format)
}

/// Print per-day bests and the latest-vs-earlier summary
pub fn progress(
    estimator: &StrengthEstimator,
    file: Option<&Path>,
    format: OutputFormat,
) -> AppResult<()> {
    let observations = load(file)?;
    let points = build_progression(estimator, &observations);
    let summary = summarize_progress(estimator, &observations);
    display::print_progress(&points, summary.as_ref(), format)
}
