// ABOUTME: Command-line driver printing one summary line per workout sensor package
// ABOUTME: Runs the built-in sample packages unless packages are given on the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Report Binary
//!
//! Usage:
//! ```bash
//! # Summarize the three sample workouts
//! workout-report
//!
//! # Summarize custom packages
//! workout-report --package RUN:15000,1,75 --package SWM:720,1,80,25,40
//!
//! # JSON output with debug logging on stderr
//! workout-report --format json -v
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use workout_metrics::{
    config::ReportConfig,
    formatters::OutputFormat,
    logging::LoggingConfig,
    packages::{sample_packages, SensorPackage},
    report::run_report,
};

#[derive(Parser)]
#[command(
    name = "workout-report",
    about = "Workout metrics calculator",
    long_about = "Compute distance, mean speed, and calories for swimming (SWM), running (RUN), and sports walking (WLK) sensor packages."
)]
struct Args {
    /// Sensor package as CODE:v1,v2,... (repeatable); defaults to the sample workouts
    #[arg(long = "package", short = 'p', value_parser = parse_package)]
    packages: Vec<SensorPackage>,

    /// Output format (text, json); overrides WORKOUT_OUTPUT_FORMAT
    #[arg(long, short = 'f', value_parser = parse_format)]
    format: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn parse_package(value: &str) -> std::result::Result<SensorPackage, String> {
    value.parse().map_err(|e: workout_metrics::errors::AppError| e.message)
}

fn parse_format(value: &str) -> std::result::Result<OutputFormat, String> {
    value.parse().map_err(|e: workout_metrics::errors::AppError| e.message)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = ReportConfig::from_env()
        .context("Failed to load report configuration")?
        .with_overrides(args.format, args.verbose);

    LoggingConfig::from_env(config.log_level).init()?;
    config.log_summary();

    let packages = if args.packages.is_empty() {
        sample_packages()
    } else {
        args.packages
    };

    let mut stdout = io::stdout().lock();
    run_report(&packages, config.output_format, &mut stdout)
        .context("Failed to write workout report")?;

    Ok(())
}
