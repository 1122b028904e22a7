// ABOUTME: Main library entry point for the workout metrics calculator
// ABOUTME: Reads sensor packages, computes distance, speed, and calories, and formats summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Metrics
//!
//! Computes workout statistics from raw sensor packages for swimming, running
//! and sports walking, and renders one summary line per workout.
//!
//! ## Pipeline
//!
//! 1. [`packages::read_package`] validates a `(code, readings)` package into a typed [`models::Workout`]
//! 2. [`intelligence::MetricsCalculator`] derives distance, mean speed and calories
//! 3. [`formatters::format_summary`] renders the result as text or JSON
//! 4. [`report::run_report`] drives the above over a package list
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use workout_metrics::formatters::OutputFormat;
//! use workout_metrics::packages::sample_packages;
//! use workout_metrics::report::run_report;
//!
//! let mut stdout = std::io::stdout();
//! let outcome = run_report(&sample_packages(), OutputFormat::Text, &mut stdout)?;
//! assert_eq!(outcome.processed, 3);
//! # Ok::<(), workout_metrics::errors::AppError>(())
//! ```

/// Environment configuration with command-line overrides
pub mod config;

/// Unified error handling re-exported from `workout-core`
pub mod errors;

/// Text and JSON rendering of training summaries
pub mod formatters;

/// Formula catalog and metrics calculator
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Workout kinds and typed workout records
pub mod models;

/// Sensor package parsing and validation
pub mod packages;

/// Report driver
pub mod report;
