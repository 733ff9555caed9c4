// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for the liftlog CLI
// ABOUTME: Human-readable text or JSON for estimates, load tables, and progression

use clap::ValueEnum;
use liftlog::errors::{AppError, AppResult, ErrorResponse};
use liftlog::models::{Estimate, ProgressionPoint, StrengthProgress, TrainingPercentages};
use serde::Serialize;
use serde_json::json;

/// Output format selected with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Pretty-printed JSON
    Json,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn describe(estimate: &Estimate) -> String {
    format!(
        "{:.1} ({} confidence, from {} x {})",
        estimate.e1rm, estimate.confidence, estimate.source.weight, estimate.source.reps
    )
}

/// Display a single estimate
pub fn print_estimate(estimate: &Estimate, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(estimate),
        OutputFormat::Text => {
            println!("e1RM: {}", describe(estimate));
            Ok(())
        }
    }
}

/// Display a training load table
pub fn print_percentages(
    e1rm: f64,
    table: &TrainingPercentages,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(table),
        OutputFormat::Text => {
            println!("Training loads for e1RM {e1rm:.1}:");
            println!("  light       {:>7.0}", table.light);
            println!("  moderate    {:>7.0}", table.moderate);
            println!("  heavy       {:>7.0}", table.heavy);
            println!("  max effort  {:>7.0}", table.max_effort);
            Ok(())
        }
    }
}

/// Display the change between two estimates
pub fn print_improvement(
    current: f64,
    previous: f64,
    percent: f64,
    format: OutputFormat,
) -> AppResult<()> {
    match format {
        OutputFormat::Json => print_json(&json!({
            "current": current,
            "previous": previous,
            "improvement_percent": percent,
        })),
        OutputFormat::Text => {
            println!("{previous:.1} -> {current:.1}: {percent:+.1}%");
            Ok(())
        }
    }
}

/// Display the best estimate of a history, if any
pub fn print_best(best: Option<&Estimate>, format: OutputFormat) -> AppResult<()> {
    match (format, best) {
        (OutputFormat::Json, _) => print_json(&best),
        (OutputFormat::Text, Some(estimate)) => {
            println!("Best e1RM: {}", describe(estimate));
            Ok(())
        }
        (OutputFormat::Text, None) => {
            println!("No usable observations (need weight > 0 and 1-20 reps)");
            Ok(())
        }
    }
}

/// Display per-day bests followed by the progress summary
pub fn print_progress(
    points: &[ProgressionPoint],
    summary: Option<&StrengthProgress>,
    format: OutputFormat,
) -> AppResult<()> {
    if format == OutputFormat::Json {
        return print_json(&json!({ "points": points, "summary": summary }));
    }

    let Some(summary) = summary else {
        println!("No dated sessions with usable observations");
        return Ok(());
    };

    for point in points {
        println!("{}  {}", point.date, describe(&point.estimate));
    }
    println!("{}", "-".repeat(48));
    match &summary.previous {
        Some(previous) => println!(
            "Latest {:.1} vs earlier best {:.1}: {:+.1}% over {} sessions",
            summary.current.e1rm, previous.e1rm, summary.improvement_percent, summary.sessions
        ),
        None => println!(
            "Latest {:.1}, no earlier sessions to compare",
            summary.current.e1rm
        ),
    }
    Ok(())
}

/// Print an error to stderr, as an `ErrorResponse` envelope in JSON mode
pub fn print_error(error: AppError, format: OutputFormat) {
    match format {
        OutputFormat::Text => eprintln!("Error: {error}"),
        OutputFormat::Json => {
            let response = ErrorResponse::from(error);
            match serde_json::to_string_pretty(&response) {
                Ok(body) => eprintln!("{body}"),
                Err(_) => eprintln!("Error: {}", response.error.message),
            }
        }
    }
}
