// ABOUTME: Report driver reading sensor packages and writing one summary line per workout
// ABOUTME: Input errors are reported with a fixed line and skipped; write failures abort the run
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Report
//!
//! Processes packages in input order. A package that fails to read (unknown
//! code, wrong reading count, out-of-range value) produces the line
//! [`INPUT_ERROR_MESSAGE`] instead of a summary and the run continues.

use std::io::Write;
use tracing::{info_span, warn};

use crate::errors::AppResult;
use crate::formatters::{format_summary, OutputFormat};
use crate::intelligence::{MetricsCalculator, TrainingSummary};
use crate::logging::ReportLogger;
use crate::packages::{read_package, SensorPackage};

/// Line written in place of a summary when a package cannot be read
pub const INPUT_ERROR_MESSAGE: &str = "Input data error";

/// Totals for one report run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOutcome {
    /// Packages summarized
    pub processed: usize,
    /// Packages reported as input errors
    pub skipped: usize,
}

/// Read and summarize one package without any output
///
/// # Errors
///
/// Returns the reader's validation error for the package
pub fn summarize_package(package: &SensorPackage) -> AppResult<TrainingSummary> {
    let workout = read_package(package)?;
    Ok(MetricsCalculator::summarize(&workout))
}

/// Write one line per package to `writer`
///
/// # Errors
///
/// Returns an error only if writing or serialization fails; bad packages are
/// reported in the output and counted as skipped
pub fn run_report<W: Write>(
    packages: &[SensorPackage],
    format: OutputFormat,
    writer: &mut W,
) -> AppResult<ReportOutcome> {
    let mut outcome = ReportOutcome::default();

    for (position, package) in packages.iter().enumerate() {
        let _span = info_span!("workout_package", position, code = %package.code).entered();

        match summarize_package(package) {
            Ok(summary) => {
                let output = format_summary(&summary, format)?;
                writeln!(writer, "{}", output.data)?;
                outcome.processed += 1;
            }
            Err(error) if error.code.is_input_error() => {
                ReportLogger::log_skipped_package(position, &package.code, &error);
                writeln!(writer, "{INPUT_ERROR_MESSAGE}")?;
                outcome.skipped += 1;
            }
            Err(error) => {
                warn!(error = %error, "Report aborted");
                return Err(error);
            }
        }
    }

    writer.flush()?;
    ReportLogger::log_report_completed(outcome.processed, outcome.skipped);
    Ok(outcome)
}
