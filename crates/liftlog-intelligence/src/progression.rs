// ABOUTME: Strength progression over dated workout history
// ABOUTME: Best estimate per session day and latest-vs-earlier improvement summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progression Analysis
//!
//! Dates are calendar days supplied by the caller, already bucketed in the
//! athlete's timezone. Undated rows are ignored here.

use crate::algorithms::e1rm::calculate_improvement;
use crate::strength_estimator::StrengthEstimator;
use chrono::NaiveDate;
use liftlog_core::models::{Observation, ProgressionPoint, StrengthProgress};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Best estimate per session day, ascending by date
///
/// Days whose rows all fail the admission filter produce no point.
#[must_use]
pub fn build_progression(
    estimator: &StrengthEstimator,
    observations: &[Observation],
) -> Vec<ProgressionPoint> {
    let sessions: Vec<(NaiveDate, Vec<Observation>)> =
        group_by_day(observations).into_iter().collect();

    sessions
        .par_iter()
        .filter_map(|(date, day)| {
            estimator.best(day).map(|estimate| ProgressionPoint {
                date: *date,
                estimate,
            })
        })
        .collect()
}

/// Compare the most recent session day against everything before it
///
/// `previous` is the best estimate across all earlier days, selected with the
/// same ordering as [`StrengthEstimator::best`]. Improvement is `0.0` when
/// there is no earlier day. Returns `None` if no day produced an estimate.
#[must_use]
pub fn summarize_progress(
    estimator: &StrengthEstimator,
    observations: &[Observation],
) -> Option<StrengthProgress> {
    let points = build_progression(estimator, observations);
    let latest = points.last()?;

    let earlier: Vec<Observation> = observations
        .iter()
        .filter(|observation| observation.date.is_some_and(|date| date < latest.date))
        .copied()
        .collect();
    let previous = estimator.best(&earlier);

    let improvement_percent = previous.map_or(0.0, |previous| {
        calculate_improvement(latest.estimate.e1rm, previous.e1rm)
    });

    Some(StrengthProgress {
        current: latest.estimate,
        previous,
        improvement_percent,
        sessions: points.len(),
    })
}

fn group_by_day(observations: &[Observation]) -> BTreeMap<NaiveDate, Vec<Observation>> {
    let mut sessions: BTreeMap<NaiveDate, Vec<Observation>> = BTreeMap::new();
    for observation in observations {
        if let Some(date) = observation.date {
            sessions.entry(date).or_default().push(*observation);
        }
    }
    sessions
}
