// ABOUTME: Liftlog CLI - e1RM estimation and strength progression from the command line
// ABOUTME: Reads workout history JSON from files or stdin, prints text or JSON results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Estimate a one-rep max from a single set
//! liftlog estimate --weight 100 --reps 5
//!
//! # Training loads for a known e1RM
//! liftlog percentages --e1rm 140
//!
//! # Relative change between two estimates
//! liftlog improvement --current 145 --previous 140
//!
//! # Most trustworthy estimate in a history file (or stdin)
//! liftlog best --file squat.json
//! cat squat.json | liftlog --format json best
//!
//! # Best estimate per session day and latest-vs-earlier summary
//! liftlog progress --file squat.json
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use helpers::display::{print_error, OutputFormat};
use liftlog::errors::AppResult;
use liftlog::intelligence::StrengthEstimator;
use liftlog::logging::LoggingConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "liftlog",
    version,
    about = "Liftlog strength analytics CLI",
    long_about = "Estimate one-rep maxima, training loads, and strength progression from workout history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate a one-rep max from a single set
    Estimate {
        /// Load lifted
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Repetitions completed
        #[arg(long, allow_negative_numbers = true)]
        reps: i32,
    },

    /// Training loads (light/moderate/heavy/max effort) for an e1RM
    Percentages {
        /// Estimated one-rep max
        #[arg(long, allow_negative_numbers = true)]
        e1rm: f64,
    },

    /// Percent change between two estimates
    Improvement {
        /// Current e1RM
        #[arg(long, allow_negative_numbers = true)]
        current: f64,

        /// Previous e1RM (zero or negative yields 0%)
        #[arg(long, allow_negative_numbers = true)]
        previous: f64,
    },

    /// Most trustworthy estimate in a workout history
    Best {
        /// History file (JSON array); reads stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Best estimate per session day and improvement of the latest session
    Progress {
        /// History file (JSON array); reads stdin when omitted
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(error) = logging.init() {
        eprintln!("Failed to initialize logging: {error}");
    }

    match run(cli.command, cli.format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error(error, cli.format);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, format: OutputFormat) -> AppResult<()> {
    let estimator = StrengthEstimator::from_env()?;
    debug!(formula = estimator.config().formula.name(), "Estimator ready");

    match command {
        Command::Estimate { weight, reps } => {
            commands::calculate::estimate(&estimator, weight, reps, format)
        }
        Command::Percentages { e1rm } => commands::calculate::percentages(&estimator, e1rm, format),
        Command::Improvement { current, previous } => {
            commands::calculate::improvement(current, previous, format)
        }
        Command::Best { file } => commands::history::best(&estimator, file.as_deref(), format),
        Command::Progress { file } => {
            commands::history::progress(&estimator, file.as_deref(), format)
        }
    }
}
